//! The `browse` subcommand: an interactive session over the list view.
//!
//! Reads one command per line from stdin, applies it to the view, and
//! reprints the page. Request failures are shown as notices and never end
//! the session.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use reservations_lib::types::{ReservationId, Status};
use reservations_lib::{validation, FilterKey, ListView, ReservationsError};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};

use crate::commands::list::{apply_args, ListArgs};
use crate::output::{print_page, OutputFormat};
use crate::prompt;

#[derive(Args)]
pub struct BrowseArgs {
    #[command(flatten)]
    pub initial: ListArgs,
}

const HELP: &str = "\
Commands:
  next | n                 next page
  prev | p                 previous page
  page N                   jump to page N
  per-page N               change page size
  filter KEY VALUE         set a filter (name, status, date_from, date_to, service_type, subscription)
  clear KEY                remove one filter
  apply                    load with the current filters (back to page 1)
  reset                    clear all filters and reload
  refresh | r              reload the current page
  status ID STATUS         change a reservation's status
  delete ID                delete a reservation (asks first)
  help | ?                 show this help
  quit | q                 leave";

#[derive(Debug, PartialEq)]
pub enum BrowseCommand {
    Next,
    Prev,
    Page(String),
    PerPage(String),
    Filter(FilterKey, String),
    Clear(FilterKey),
    Apply,
    Reset,
    Refresh,
    Status(ReservationId, Status),
    Delete(ReservationId),
    Help,
    Quit,
}

impl BrowseCommand {
    pub fn parse(line: &str) -> Result<Self, ReservationsError> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };
        let command = match verb.to_lowercase().as_str() {
            "next" | "n" => BrowseCommand::Next,
            "prev" | "p" => BrowseCommand::Prev,
            "page" => BrowseCommand::Page(required(rest, "page N")?.to_string()),
            "per-page" | "per_page" => {
                BrowseCommand::PerPage(required(rest, "per-page N")?.to_string())
            }
            "filter" | "f" => {
                let (key, value) = match rest.split_once(char::is_whitespace) {
                    Some((key, value)) => (key, value.trim()),
                    None => (required(rest, "filter KEY VALUE")?, ""),
                };
                BrowseCommand::Filter(key.parse()?, value.to_string())
            }
            "clear" => BrowseCommand::Clear(required(rest, "clear KEY")?.parse()?),
            "apply" | "search" => BrowseCommand::Apply,
            "reset" => BrowseCommand::Reset,
            "refresh" | "r" => BrowseCommand::Refresh,
            "status" => {
                let (id, status) = rest.split_once(char::is_whitespace).ok_or_else(|| {
                    ReservationsError::InvalidInput("usage: status ID STATUS".to_string())
                })?;
                BrowseCommand::Status(
                    ReservationId::from(id),
                    validation::validate_status(status)?,
                )
            }
            "delete" | "rm" => {
                BrowseCommand::Delete(ReservationId::from(required(rest, "delete ID")?))
            }
            "help" | "?" => BrowseCommand::Help,
            "quit" | "q" | "exit" => BrowseCommand::Quit,
            "" => {
                return Err(ReservationsError::InvalidInput(
                    "type 'help' for commands".to_string(),
                ))
            }
            other => {
                return Err(ReservationsError::InvalidInput(format!(
                    "unknown command '{}', type 'help' for commands",
                    other
                )))
            }
        };
        Ok(command)
    }
}

fn required<'a>(rest: &'a str, usage: &str) -> Result<&'a str, ReservationsError> {
    if rest.is_empty() {
        Err(ReservationsError::InvalidInput(format!("usage: {}", usage)))
    } else {
        Ok(rest)
    }
}

pub async fn run(args: &BrowseArgs, mut view: ListView, format: &OutputFormat) -> Result<()> {
    apply_args(&mut view, &args.initial)?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    if let Some(message) = report(view.refresh().await) {
        eprintln!("{}", message);
    }
    print_page(view.state(), format)?;
    eprintln!("Type 'help' for commands.");

    loop {
        eprint!("> ");
        std::io::stderr().flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let command = match BrowseCommand::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };
        match command {
            BrowseCommand::Quit => break,
            BrowseCommand::Help => {
                eprintln!("{}", HELP);
                continue;
            }
            command => {
                if let Some(message) = execute(&mut view, command, &mut lines).await? {
                    eprintln!("{}", message);
                }
            }
        }
        print_page(view.state(), format)?;
    }
    Ok(())
}

/// Applies one command. Returns a status message for the operator, if any.
async fn execute<R>(
    view: &mut ListView,
    command: BrowseCommand,
    lines: &mut Lines<R>,
) -> Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    let message = match command {
        BrowseCommand::Next => match view.next_page().await {
            Ok(false) => Some("Already on the last page.".to_string()),
            other => report(other.map(|_| ())),
        },
        BrowseCommand::Prev => match view.prev_page().await {
            Ok(false) => Some("Already on the first page.".to_string()),
            other => report(other.map(|_| ())),
        },
        BrowseCommand::Page(raw) => report(view.go_to_page(&raw).await),
        BrowseCommand::PerPage(raw) => report(view.set_per_page(&raw).await),
        BrowseCommand::Filter(key, value) => match view.set_filter(key, &value) {
            Ok(()) => Some("Filter updated, type 'apply' to load.".to_string()),
            Err(e) => Some(e.to_string()),
        },
        BrowseCommand::Clear(key) => {
            view.clear_filter(key);
            Some(format!("Cleared {}, type 'apply' to load.", key))
        }
        BrowseCommand::Apply => report(view.submit_filters().await),
        BrowseCommand::Reset => report(view.reset_filters().await),
        BrowseCommand::Refresh => report(view.refresh().await),
        BrowseCommand::Status(id, status) => {
            let result = view.update_status(&id, status).await;
            report_mutation(view, result, format!("Reservation {} set to {}", id, status))
        }
        BrowseCommand::Delete(id) => {
            let question = prompt::delete_question(&id);
            if let Err(e) = view.request_delete(id.clone()) {
                return Ok(Some(e.to_string()));
            }
            if prompt::confirm(lines, &question).await? {
                let result = view.confirm_delete().await.map(|_| ());
                report_mutation(view, result, format!("Reservation {} deleted", id))
            } else {
                view.cancel_delete();
                Some("Cancelled, nothing was deleted.".to_string())
            }
        }
        BrowseCommand::Help | BrowseCommand::Quit => None,
    };
    Ok(message)
}

/// API failures are already recorded as the view's notice; anything else is
/// handed back to print.
fn report(result: Result<(), ReservationsError>) -> Option<String> {
    match result {
        Ok(()) => None,
        Err(e) if e.api_kind().is_some() => None,
        Err(e) => Some(e.to_string()),
    }
}

/// Like [`report`], but says when the mutation went through even though the
/// reload after it failed.
fn report_mutation(
    view: &ListView,
    result: Result<(), ReservationsError>,
    applied: String,
) -> Option<String> {
    match result {
        Err(ReservationsError::Api(_)) if view.state().reload_failed() => {
            Some(format!("{}, but the list could not be reloaded.", applied))
        }
        other => report(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_navigation() {
        assert_eq!(BrowseCommand::parse("n").unwrap(), BrowseCommand::Next);
        assert_eq!(BrowseCommand::parse(" prev ").unwrap(), BrowseCommand::Prev);
        assert_eq!(
            BrowseCommand::parse("page 3").unwrap(),
            BrowseCommand::Page("3".to_string())
        );
        assert_eq!(
            BrowseCommand::parse("per-page 25").unwrap(),
            BrowseCommand::PerPage("25".to_string())
        );
        assert!(BrowseCommand::parse("page").is_err());
    }

    #[test]
    fn filter_value_keeps_spaces() {
        assert_eq!(
            BrowseCommand::parse("filter name Ivan Petrov").unwrap(),
            BrowseCommand::Filter(FilterKey::Name, "Ivan Petrov".to_string())
        );
    }

    #[test]
    fn filter_without_value_clears() {
        assert_eq!(
            BrowseCommand::parse("filter status").unwrap(),
            BrowseCommand::Filter(FilterKey::Status, String::new())
        );
    }

    #[test]
    fn filter_with_unknown_key_is_rejected() {
        assert!(BrowseCommand::parse("filter price 10").is_err());
    }

    #[test]
    fn parses_mutations() {
        assert_eq!(
            BrowseCommand::parse("status 7 confirmed").unwrap(),
            BrowseCommand::Status(ReservationId::from(7), Status::Confirmed)
        );
        assert_eq!(
            BrowseCommand::parse("delete 3").unwrap(),
            BrowseCommand::Delete(ReservationId::from(3))
        );
        assert!(BrowseCommand::parse("status 7 archived").is_err());
        assert!(BrowseCommand::parse("status 7").is_err());
        assert!(BrowseCommand::parse("delete").is_err());
    }

    #[test]
    fn unknown_and_blank_lines() {
        assert!(BrowseCommand::parse("").is_err());
        assert!(BrowseCommand::parse("dance").is_err());
        assert_eq!(BrowseCommand::parse("Q").unwrap(), BrowseCommand::Quit);
    }

    #[test]
    fn report_hides_api_errors() {
        assert_eq!(
            report(Err(ReservationsError::Api(
                reservations_lib::reservations_api::Error::RequestFailed
            ))),
            None
        );
        assert!(report(Err(ReservationsError::NoPendingDelete)).is_some());
        assert_eq!(report(Ok(())), None);
    }
}
