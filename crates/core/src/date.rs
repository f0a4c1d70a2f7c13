const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Formats an ISO-8601 date or timestamp as `Month D, YYYY`.
///
/// Only the calendar date prefix (`YYYY-MM-DD`) is read; the time and
/// offset are ignored. Input that does not start with a valid date is
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use folio_core::format_date;
///
/// assert_eq!(format_date("2025-01-05T10:30:00Z"), "January 5, 2025");
/// assert_eq!(format_date("soon"), "soon");
/// ```
pub fn format_date(input: &str) -> String {
    parse_ymd(input.trim())
        .map(|(year, month, day)| format!("{} {}, {}", MONTHS[month - 1], day, year))
        .unwrap_or_else(|| input.to_string())
}

fn parse_ymd(s: &str) -> Option<(u32, usize, u32)> {
    let date = s.get(..10)?;
    let mut parts = date.split('-');
    let year = parts.next().filter(|p| p.len() == 4)?.parse::<u32>().ok()?;
    let month = parts.next().filter(|p| p.len() == 2)?.parse::<usize>().ok()?;
    let day = parts.next().filter(|p| p.len() == 2)?.parse::<u32>().ok()?;
    if !(1..=12).contains(&month) || day < 1 || day > days_in_month(year, month) {
        return None;
    }
    Some((year, month, day))
}

fn days_in_month(year: u32, month: usize) -> u32 {
    match month {
        2 if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}
