//! Calendar math for the RFC 3339 timestamps the Record Store serializes.
//! Kept free of browser APIs so the domain stays testable off-wasm.

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Parse an RFC 3339 timestamp (or a bare `YYYY-MM-DD` date) into epoch
/// milliseconds. Offsets `Z`, `+HH:MM`, `-HH:MM` and `+HHMM` are honored;
/// anything else returns `None`.
pub fn parse_rfc3339_millis(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.len() < 10 || !raw.is_ascii() {
        return None;
    }

    let year: i64 = parse_digits(&raw[0..4])?;
    if &raw[4..5] != "-" || &raw[7..8] != "-" {
        return None;
    }
    let month: i64 = parse_digits(&raw[5..7])?;
    let day: i64 = parse_digits(&raw[8..10])?;
    if !(1..=12).contains(&month) || day < 1 || day > days_in_month(year, month) {
        return None;
    }

    let mut millis = days_from_civil(year, month, day) * MILLIS_PER_DAY;

    let rest = &raw[10..];
    if rest.is_empty() {
        return Some(millis);
    }

    let first = rest.chars().next()?;
    if first != 'T' && first != 't' && first != ' ' {
        return None;
    }
    let time = &rest[1..];
    if time.len() < 8 || &time[2..3] != ":" || &time[5..6] != ":" {
        return None;
    }
    let hour: i64 = parse_digits(&time[0..2])?;
    let minute: i64 = parse_digits(&time[3..5])?;
    let second: i64 = parse_digits(&time[6..8])?;
    if hour > 23 || minute > 59 || second > 59 {
        return None;
    }
    millis += (hour * 3600 + minute * 60 + second) * 1000;

    let mut tail = &time[8..];
    if let Some(frac) = tail.strip_prefix('.') {
        let digits: String = frac.chars().take_while(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() {
            return None;
        }
        // Millisecond precision; extra digits are truncated.
        let padded = format!("{:0<3}", &digits[..digits.len().min(3)]);
        millis += parse_digits(&padded)?;
        tail = &frac[digits.len()..];
    }

    match tail {
        "" | "Z" | "z" => Some(millis),
        _ => {
            let sign = match tail.chars().next()? {
                '+' => 1,
                '-' => -1,
                _ => return None,
            };
            let body: String = tail[1..].chars().filter(|c| *c != ':').collect();
            if body.len() != 4 {
                return None;
            }
            let off_hour: i64 = parse_digits(&body[0..2])?;
            let off_minute: i64 = parse_digits(&body[2..4])?;
            if off_hour > 23 || off_minute > 59 {
                return None;
            }
            Some(millis - sign * (off_hour * 60 + off_minute) * 60_000)
        }
    }
}

/// Render epoch milliseconds as an RFC 3339 UTC timestamp, the shape the
/// Record Store expects for timestamp columns.
pub fn format_rfc3339_millis(millis: i64) -> String {
    let (year, month, day) = civil_from_millis(millis);
    let ms_of_day = millis.rem_euclid(MILLIS_PER_DAY);
    let (hour, minute) = (ms_of_day / 3_600_000, ms_of_day / 60_000 % 60);
    let (second, frac) = (ms_of_day / 1000 % 60, ms_of_day % 1000);
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
        year, month, day, hour, minute, second, frac
    )
}

/// Calendar date (UTC) for an epoch-millisecond instant.
pub fn civil_from_millis(millis: i64) -> (i64, u32, u32) {
    civil_from_days(millis.div_euclid(MILLIS_PER_DAY))
}

fn parse_digits(slice: &str) -> Option<i64> {
    if slice.chars().all(|c| c.is_ascii_digit()) { slice.parse().ok() } else { None }
}

fn days_in_month(year: i64, month: i64) -> i64 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) {
                29
            } else {
                28
            }
        }
    }
}

// Civil-calendar conversions over the proleptic Gregorian calendar.
fn days_from_civil(year: i64, month: i64, day: i64) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400;
    let doy = (153 * (if month > 2 { month - 3 } else { month + 9 }) + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    (if month <= 2 { y + 1 } else { y }, month as u32, day as u32)
}
