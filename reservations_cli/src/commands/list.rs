//! The `list` subcommand: load one page of reservations and print it.

use anyhow::Result;
use clap::Args;
use reservations_lib::{FilterKey, ListView};

use crate::output::{print_page, OutputFormat};

#[derive(Args)]
pub struct ListArgs {
    /// Search by client name (substring match)
    #[arg(long)]
    pub name: Option<String>,

    /// Filter by status: pending, confirmed, declined, completed
    #[arg(long)]
    pub status: Option<String>,

    /// Only reservations on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub date_from: Option<String>,

    /// Only reservations on or before this date (YYYY-MM-DD)
    #[arg(long)]
    pub date_to: Option<String>,

    /// Filter by service type: flats, offices
    #[arg(long)]
    pub service_type: Option<String>,

    /// Filter by subscription: one_time, weekly, biweekly, monthly
    #[arg(long)]
    pub subscription: Option<String>,

    /// Page number (non-numeric input falls back to 1)
    #[arg(long)]
    pub page: Option<String>,

    /// Results per page (non-numeric input falls back to 10)
    #[arg(long)]
    pub per_page: Option<String>,
}

impl ListArgs {
    fn filters(&self) -> [(FilterKey, Option<&String>); 6] {
        [
            (FilterKey::Name, self.name.as_ref()),
            (FilterKey::Status, self.status.as_ref()),
            (FilterKey::DateFrom, self.date_from.as_ref()),
            (FilterKey::DateTo, self.date_to.as_ref()),
            (FilterKey::ServiceType, self.service_type.as_ref()),
            (FilterKey::Subscription, self.subscription.as_ref()),
        ]
    }
}

/// Applies the filter flags and cursor to a freshly mounted view.
pub fn apply_args(view: &mut ListView, args: &ListArgs) -> Result<()> {
    for (key, value) in args.filters() {
        if let Some(value) = value {
            view.set_filter(key, value)?;
        }
    }
    view.set_cursor(args.page.as_deref(), args.per_page.as_deref());
    Ok(())
}

pub async fn run(args: &ListArgs, mut view: ListView, format: &OutputFormat) -> Result<()> {
    apply_args(&mut view, args)?;
    let loaded = view.refresh().await;
    print_page(view.state(), format)?;
    loaded?;
    Ok(())
}
