use anyhow::Result;
use reservations_lib::types::Reservation;
use reservations_lib::ViewState;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Self {
        match value {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Tabled, Serialize)]
struct ReservationRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Phone")]
    #[serde(rename = "Phone")]
    phone: String,
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Time")]
    #[serde(rename = "Time")]
    time: String,
    #[tabled(rename = "Service")]
    #[serde(rename = "Service")]
    service: String,
    #[tabled(rename = "Subscription")]
    #[serde(rename = "Subscription")]
    subscription: String,
    #[tabled(rename = "Total")]
    #[serde(rename = "Total")]
    total: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
}

fn build_reservation_rows(reservations: &[Reservation]) -> Vec<ReservationRow> {
    reservations
        .iter()
        .map(|r| ReservationRow {
            id: r.id.to_string(),
            name: r.name.clone(),
            phone: r.phone.clone(),
            date: r.date.map(|d| d.to_string()).unwrap_or_default(),
            time: r.time.clone().unwrap_or_default(),
            service: match (&r.service_type, &r.flat_type) {
                (Some(service), Some(flat)) => format!("{} ({})", service, flat),
                (Some(service), None) => service.to_string(),
                (None, _) => String::new(),
            },
            subscription: r.subscription.map(|s| s.to_string()).unwrap_or_default(),
            total: format_price(r.total_price),
            status: r.status.to_string(),
        })
        .collect()
}

/// Prints the current page in the chosen format, followed by the pager line
/// and any failure notice on stderr.
pub fn print_page(state: &ViewState, format: &OutputFormat) -> Result<()> {
    let reservations = state.reservations();
    match format {
        OutputFormat::Table => print_reservations_table(reservations),
        OutputFormat::Json => print_json(&reservations),
        OutputFormat::Csv => print_reservations_csv(reservations)?,
        OutputFormat::Markdown => print_reservations_markdown(reservations),
    }
    eprintln!("{}", pager_line(state));
    if let Some(notice) = state.notice() {
        eprintln!("! {}", notice);
    }
    Ok(())
}

/// `Page 2/3 (25 total reservations)` plus the active filters, if any.
pub fn pager_line(state: &ViewState) -> String {
    let pagination = state.pagination();
    let mut line = format!(
        "Page {}/{} ({} total reservations)",
        pagination.page,
        pagination.last_page(),
        pagination.total
    );
    let active = state.filters().active();
    if !active.is_empty() {
        let filters = active
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join(", ");
        line.push_str(&format!(" [{}]", filters));
    }
    match (pagination.has_prev(), pagination.has_next()) {
        (true, true) => line.push_str(" <prev | next>"),
        (true, false) => line.push_str(" <prev"),
        (false, true) => line.push_str(" next>"),
        (false, false) => {}
    }
    line
}

// -- Table output --

pub fn print_reservations_table(reservations: &[Reservation]) {
    if reservations.is_empty() {
        println!("No reservations found.");
        return;
    }
    println!("{}", Table::new(build_reservation_rows(reservations)));
}

// -- Markdown output --

pub fn print_reservations_markdown(reservations: &[Reservation]) {
    let mut table = Table::new(build_reservation_rows(reservations));
    table.with(Style::markdown());
    println!("{}", table);
}

// -- CSV output --

pub fn print_reservations_csv(reservations: &[Reservation]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in build_reservation_rows(reservations) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn format_price(value: f64) -> String {
    format!("{:.2}", value)
}
