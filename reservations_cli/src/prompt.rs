//! Interactive yes/no confirmation read from the terminal.

use std::io::Write;

use anyhow::Result;
use reservations_lib::types::ReservationId;
use tokio::io::{AsyncBufRead, Lines};

pub fn delete_question(id: &ReservationId) -> String {
    format!("Delete reservation {}? [y/N] ", id)
}

/// Prints `question` and reads one answer. Only `y`/`yes` counts as consent;
/// an empty line or end of input is a refusal.
pub async fn confirm<R>(lines: &mut Lines<R>, question: &str) -> Result<bool>
where
    R: AsyncBufRead + Unpin,
{
    eprint!("{}", question);
    std::io::stderr().flush()?;
    let answer = lines.next_line().await?;
    Ok(answer.as_deref().map(is_affirmative).unwrap_or(false))
}

pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
