//! Submission date parsing.
//!
//! Result entries state their submission date as `"<day> <Month>, <year>"`,
//! for example `"14 March, 2024"`. Anything else is reported as absent rather
//! than guessed at.

use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// `5 January, 2024` or `05 January, 2024`. Month names are English and
/// case-sensitive, so `14 march, 2024` is rejected even though a `strptime`
/// style `%B` would accept it. arXiv always capitalises month names.
const SUBMITTED_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[day padding:none] [month repr:long], [year]");

/// Word that opens the submission-info block before the first date.
const SUBMITTED_PREFIX: &str = "Submitted";

/// Parses a submission date such as `"14 March, 2024"`.
///
/// Returns `None` on any mismatch: trailing text, abbreviated or misspelled
/// month names, missing comma, truncated input, an impossible day, or a year
/// that is not exactly four digits.
///
/// # Example
///
/// ```rust
/// use arxiv_digest_core::parse_submitted_date;
/// use time::{Date, Month};
///
/// assert_eq!(
///     parse_submitted_date("14 March, 2024"),
///     Some(Date::from_calendar_date(2024, Month::March, 14).unwrap())
/// );
/// assert_eq!(parse_submitted_date("14 Mar, 2024"), None);
/// ```
pub fn parse_submitted_date(text: &str) -> Option<Date> {
    // `[year]` also accepts a leading sign
    let (_, year) = text.rsplit_once(", ")?;
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    Date::parse(text, SUBMITTED_FORMAT).ok()
}

/// Pulls the first date out of a submission-info block.
///
/// The block looks like `"Submitted 5 January, 2024; revised 6 January, 2024"`.
/// Only the part before the first `;` is considered, so the original
/// submission date wins over any later revision.
pub fn first_submitted_date(block: &str) -> Option<Date> {
    let first = block.split(';').next().unwrap_or_default().trim();
    let first = first.strip_prefix(SUBMITTED_PREFIX).unwrap_or(first).trim();
    parse_submitted_date(first)
}

/// Formats a date as `YYYY-MM-DD`.
pub fn format_iso_date(date: Date) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day())
}
