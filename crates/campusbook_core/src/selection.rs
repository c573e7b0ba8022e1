// --- File: crates/campusbook_core/src/selection.rs ---
use crate::time::TimeOfDay;

/// One selected slot interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedSlot {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

/// The time range a selection books, from the first slot's start to the
/// last slot's end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingRange {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl BookingRange {
    pub fn duration_minutes(&self) -> u16 {
        self.start.minutes_until(self.end)
    }
}

/// The in-progress multi-slot selection.
///
/// Invariant: the slots form a single contiguous run ordered by start time,
/// `slots[i].end == slots[i + 1].start` for every adjacent pair. An empty
/// vector is the `Empty` state; callers must only feed free (unbooked)
/// slots into [`SlotSelection::toggle`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotSelection {
    slots: Vec<SelectedSlot>,
}

impl SlotSelection {
    pub fn new() -> SlotSelection {
        SlotSelection::default()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn slots(&self) -> &[SelectedSlot] {
        &self.slots
    }

    pub fn contains(&self, start: TimeOfDay) -> bool {
        self.slots.iter().any(|s| s.start == start)
    }

    /// Dropped whenever the selected date or facility changes; a selection
    /// never survives a context switch.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Toggle a free slot on/off.
    ///
    /// Selected slots must stay adjacent (contiguous block only):
    /// deselecting is allowed from either end, deselecting an interior slot
    /// clears everything, and selecting a non-adjacent slot starts a fresh
    /// selection.
    pub fn toggle(&mut self, start: TimeOfDay, end: TimeOfDay) {
        if let Some(idx) = self.slots.iter().position(|s| s.start == start) {
            let is_first = idx == 0;
            let is_last = idx == self.slots.len() - 1;
            if is_first || is_last {
                self.slots.remove(idx);
            } else {
                // Removing a middle slot would split the run
                self.slots.clear();
            }
            return;
        }

        let slot = SelectedSlot { start, end };
        if self.slots.is_empty() {
            self.slots.push(slot);
        } else if start == self.slots[self.slots.len() - 1].end {
            // Grows forward
            self.slots.push(slot);
        } else if end == self.slots[0].start {
            // Grows backward
            self.slots.insert(0, slot);
        } else {
            // Not adjacent: start fresh
            self.slots = vec![slot];
        }
    }

    /// The derived booking range, None while the selection is empty.
    pub fn booking_range(&self) -> Option<BookingRange> {
        let first = self.slots.first()?;
        let last = self.slots.last()?;
        Some(BookingRange {
            start: first.start,
            end: last.end,
        })
    }

    pub fn duration_minutes(&self) -> u16 {
        self.slots
            .iter()
            .map(|s| s.start.minutes_until(s.end))
            .sum()
    }

    /// Checks the adjacency invariant; used by tests.
    pub fn is_contiguous(&self) -> bool {
        self.slots
            .windows(2)
            .all(|pair| pair[0].end == pair[1].start)
    }
}
