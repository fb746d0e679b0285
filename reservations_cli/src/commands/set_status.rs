//! The `set-status` subcommand.

use anyhow::Result;
use clap::Args;
use reservations_lib::types::ReservationId;
use reservations_lib::{validation, ListView, ReservationsError};

use crate::output::{print_page, OutputFormat};

#[derive(Args)]
pub struct SetStatusArgs {
    /// Reservation ID
    pub id: String,

    /// New status: pending, confirmed, declined, completed
    pub status: String,
}

pub async fn run(args: &SetStatusArgs, mut view: ListView, format: &OutputFormat) -> Result<()> {
    let status = validation::validate_status(&args.status)?;
    let id = ReservationId::from(args.id.trim());
    match view.update_status(&id, status).await {
        Ok(()) => {
            eprintln!("Reservation {} set to {}", id, status);
            print_page(view.state(), format)?;
            Ok(())
        }
        Err(e) => {
            if matches!(e, ReservationsError::Api(_)) && view.state().reload_failed() {
                eprintln!("Reservation {} set to {}", id, status);
            }
            if let Some(notice) = view.state().notice() {
                eprintln!("! {}", notice);
            }
            Err(e.into())
        }
    }
}
