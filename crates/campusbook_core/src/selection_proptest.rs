#[cfg(test)]
mod tests {
    use crate::selection::SlotSelection;
    use crate::time::TimeOfDay;
    use proptest::prelude::*;

    const SLOT_MINUTES: u16 = 30;
    const OPEN_MINUTES: u16 = 6 * 60;
    const SLOT_COUNT: u16 = 26; // 06:00 - 19:00

    // The grid a day offers: slot i covers [open + i*30, open + (i+1)*30)
    fn slot(index: u16) -> (TimeOfDay, TimeOfDay) {
        let start = TimeOfDay::from_minutes(OPEN_MINUTES + index * SLOT_MINUTES).unwrap();
        let end = TimeOfDay::from_minutes(OPEN_MINUTES + (index + 1) * SLOT_MINUTES).unwrap();
        (start, end)
    }

    proptest! {
        // No toggle sequence can ever break the adjacency invariant
        #[test]
        fn selection_stays_contiguous(
            toggles in proptest::collection::vec(0..SLOT_COUNT, 0..40)
        ) {
            let mut selection = SlotSelection::new();
            for index in toggles {
                let (start, end) = slot(index);
                selection.toggle(start, end);

                prop_assert!(selection.is_contiguous(),
                    "selection lost contiguity after toggling slot {}", index);

                // The derived range always spans exactly the selected run
                match selection.booking_range() {
                    Some(range) => {
                        prop_assert_eq!(range.start, selection.slots()[0].start);
                        prop_assert_eq!(range.end, selection.slots()[selection.len() - 1].end);
                        prop_assert_eq!(
                            range.duration_minutes(),
                            selection.len() as u16 * SLOT_MINUTES
                        );
                        prop_assert_eq!(selection.duration_minutes(), range.duration_minutes());
                    }
                    None => prop_assert!(selection.is_empty()),
                }
            }
        }

        // Toggling the same slot twice in a row always restores the prior shape
        #[test]
        fn double_toggle_is_identity(
            setup in proptest::collection::vec(0..SLOT_COUNT, 0..10),
            index in 0..SLOT_COUNT,
        ) {
            let mut selection = SlotSelection::new();
            for i in setup {
                let (start, end) = slot(i);
                selection.toggle(start, end);
            }

            // Only additive toggles are undoable; interior toggles clear by
            // design, and a non-adjacent toggle replaces the selection.
            let (start, end) = slot(index);
            let applies_cleanly = !selection.contains(start)
                && (selection.is_empty()
                    || start == selection.slots()[selection.len() - 1].end
                    || end == selection.slots()[0].start);
            prop_assume!(applies_cleanly);

            let before = selection.clone();
            selection.toggle(start, end);
            selection.toggle(start, end);
            prop_assert_eq!(selection, before);
        }
    }
}
