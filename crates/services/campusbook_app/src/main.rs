// File: crates/services/campusbook_app/src/main.rs
use campusbook_api::auth::RegisterRequest;
use campusbook_api::bookings::BookingUpdate;
use campusbook_api::client::ApiClient;
use campusbook_api::facilities::FacilityPayload;
use campusbook_app::session::Session;
use campusbook_app::view;
use campusbook_common::{config_error, logging, validation_error, CampusbookError};
use campusbook_config::load_config;
use campusbook_core::models::BookingStatus;
use campusbook_core::stats::{facility_name, BookingFilter};
use campusbook_core::time::TimeOfDay;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "campusbook")]
#[command(about = "Browse campus facilities, check slot availability and manage bookings")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and persist the session token
    Login { username: String, password: String },
    /// Create an account (log in afterwards)
    Register {
        name: String,
        email: String,
        username: String,
        password: String,
        #[arg(long, default_value = "STUDENT")]
        role: String,
    },
    /// Log out and clear the stored token
    Logout,
    /// Show the logged-in user
    Whoami,
    /// List campus facilities
    Facilities,
    /// Show the 30-minute slot grid for a facility and date
    Slots {
        facility: i64,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// Book a time range on a facility
    Book {
        facility: i64,
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Start time (HH:MM)
        #[arg(long)]
        start: String,
        /// End time (HH:MM)
        #[arg(long)]
        end: String,
        #[arg(long)]
        notes: Option<String>,
    },
    /// List bookings, optionally filtered
    Bookings {
        /// Only this student's bookings
        #[arg(long)]
        student: Option<String>,
        /// Filter by status (confirmed, pending, cancelled, completed)
        #[arg(long)]
        status: Option<String>,
        /// Free-text search over facility, student id and status
        #[arg(long)]
        query: Option<String>,
    },
    /// Cancel a booking (it stays in the history as CANCELLED)
    Cancel { id: i64 },
    /// Edit a booking's date, times or status (admin)
    EditBooking {
        id: i64,
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Start time (HH:MM)
        #[arg(long)]
        start: String,
        /// End time (HH:MM)
        #[arg(long)]
        end: String,
        #[arg(long, default_value = "confirmed")]
        status: String,
    },
    /// Booking stats overview
    Dashboard,
    /// Admin panel: status breakdown and facility utilisation
    Admin,
    /// Add a facility (admin)
    AddFacility {
        name: String,
        location: String,
        capacity: u32,
        #[arg(long, default_value = "study_room")]
        facility_type: String,
    },
    /// Delete a facility (admin)
    DeleteFacility { id: i64 },
    /// Hard-delete a booking (admin)
    DeleteBooking { id: i64 },
}

fn parse_date(s: &str) -> Result<NaiveDate, CampusbookError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| validation_error(format!("Invalid date (expected YYYY-MM-DD): {s}")))
}

fn parse_time(s: &str) -> Result<TimeOfDay, CampusbookError> {
    s.parse::<TimeOfDay>()
        .map_err(|err| validation_error(err.to_string()))
}

fn parse_status(s: &str) -> Result<BookingStatus, CampusbookError> {
    s.parse::<BookingStatus>()
        .map_err(|err| validation_error(err.to_string()))
}

#[tokio::main]
async fn main() {
    logging::init();
    if let Err(err) = run().await {
        // The CLI counterpart of an error toast. Nothing retries on its
        // own; the user re-runs the command.
        if err.is_transient() {
            eprintln!("✕ {err} — the operation was abandoned, try again");
        } else {
            eprintln!("✕ {err}");
        }
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CampusbookError> {
    let cli = Cli::parse();
    let config = Arc::new(load_config().map_err(|err| config_error(err.to_string()))?);
    let client = Arc::new(ApiClient::from_config(&config)?);
    let mut session = Session::new(client, config);

    match cli.command {
        Commands::Login { username, password } => {
            let user = session.login(&username, &password).await?;
            println!("✓ Logged in as {} ({})", user.name, user.role);
        }
        Commands::Register {
            name,
            email,
            username,
            password,
            role,
        } => {
            let user = session
                .register(RegisterRequest {
                    name,
                    email,
                    username,
                    password,
                    role,
                })
                .await?;
            println!("✓ Registered {} — log in to continue", user.username);
        }
        Commands::Logout => {
            session.logout().await?;
            println!("✓ Logged out");
        }
        Commands::Whoami => {
            let user = session.current_user().await?;
            println!("{} <{}> ({})", user.name, user.email, user.role);
        }
        Commands::Facilities => {
            session.refresh().await?;
            print!("{}", view::render_facilities(session.state()));
        }
        Commands::Slots { facility, date } => {
            session.refresh().await?;
            let date = match date {
                Some(s) => parse_date(&s)?,
                None => Local::now().date_naive(),
            };
            session.open_availability(facility, date).await?;
            println!(
                "{} on {}",
                facility_name(session.state().facilities(), facility),
                date
            );
            print!("{}", view::render_slot_grid(session.state()));
        }
        Commands::Book {
            facility,
            date,
            start,
            end,
            notes,
        } => {
            session.refresh().await?;
            let booking = session
                .book_range(
                    facility,
                    parse_date(&date)?,
                    parse_time(&start)?,
                    parse_time(&end)?,
                    notes,
                )
                .await?;
            println!(
                "✓ Booked: {} on {} {} - {}",
                facility_name(session.state().facilities(), booking.facility_id),
                booking.date,
                booking.start_time,
                booking.end_time
            );
        }
        Commands::Bookings {
            student,
            status,
            query,
        } => {
            session.refresh().await?;
            if student.is_some() {
                session.refresh_bookings(student).await?;
            }
            let filter = BookingFilter {
                query,
                status: status.as_deref().map(parse_status).transpose()?,
            };
            print!("{}", view::render_bookings(session.state(), &filter));
        }
        Commands::Cancel { id } => {
            let booking = session.cancel_booking(id).await?;
            println!("✓ Booking #{} cancelled", booking.id);
        }
        Commands::EditBooking {
            id,
            date,
            start,
            end,
            status,
        } => {
            let booking = session
                .update_booking(
                    id,
                    BookingUpdate {
                        date: parse_date(&date)?,
                        start_time: parse_time(&start)?,
                        end_time: parse_time(&end)?,
                        status: parse_status(&status)?,
                    },
                )
                .await?;
            println!(
                "✓ Booking #{} updated: {} {} - {} ({})",
                booking.id,
                booking.date,
                booking.start_time,
                booking.end_time,
                booking.status.label()
            );
        }
        Commands::Dashboard => {
            session.refresh().await?;
            print!("{}", view::render_dashboard(session.state()));
        }
        Commands::Admin => {
            session.refresh().await?;
            print!("{}", view::render_admin(session.state()));
        }
        Commands::AddFacility {
            name,
            location,
            capacity,
            facility_type,
        } => {
            let facility = session
                .add_facility(FacilityPayload {
                    name,
                    location,
                    capacity,
                    facility_type,
                })
                .await?;
            println!("✓ Facility \"{}\" added (#{})", facility.name, facility.id);
        }
        Commands::DeleteFacility { id } => {
            session.remove_facility(id).await?;
            println!("✓ Facility #{id} deleted");
        }
        Commands::DeleteBooking { id } => {
            session.delete_booking(id).await?;
            println!("✓ Booking #{id} deleted");
        }
    }
    Ok(())
}
