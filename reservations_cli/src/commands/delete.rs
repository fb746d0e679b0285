//! The `delete` subcommand. Asks before sending anything unless `--yes` is given.

use anyhow::Result;
use clap::Args;
use reservations_lib::types::{DeleteOutcome, ReservationId};
use reservations_lib::{ListView, ReservationsError};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::output::{print_page, OutputFormat};
use crate::prompt;

#[derive(Args)]
pub struct DeleteArgs {
    /// Reservation ID
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

pub async fn run(args: &DeleteArgs, mut view: ListView, format: &OutputFormat) -> Result<()> {
    let id = ReservationId::from(args.id.trim());
    view.request_delete(id.clone())?;

    let confirmed = if args.yes {
        true
    } else {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        prompt::confirm(&mut lines, &prompt::delete_question(&id)).await?
    };

    if !confirmed {
        view.cancel_delete();
        eprintln!("Cancelled, nothing was deleted.");
        return Ok(());
    }

    match view.confirm_delete().await {
        Ok(outcome) => {
            report_outcome(&id, outcome);
            print_page(view.state(), format)?;
            Ok(())
        }
        Err(e) => {
            if matches!(e, ReservationsError::Api(_)) && view.state().reload_failed() {
                // The delete went through, only the reload after it failed.
                report_outcome(&id, DeleteOutcome::Deleted);
            }
            if let Some(notice) = view.state().notice() {
                eprintln!("! {}", notice);
            }
            Err(e.into())
        }
    }
}

fn report_outcome(id: &ReservationId, outcome: DeleteOutcome) {
    match outcome {
        DeleteOutcome::Deleted => eprintln!("Reservation {} deleted", id),
        DeleteOutcome::AlreadyGone => eprintln!("Reservation {} was already gone", id),
    }
}
