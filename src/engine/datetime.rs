use chrono::{DateTime, Local, NaiveDateTime};

/// Wire format the API uses for match times.
pub const WIRE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Format used on match cards.
pub const DISPLAY_FORMAT: &str = "%d.%m.%Y %H:%M";

const ISO_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse an API date-time into a comparable local wall-clock time.
///
/// Accepts both `YYYY-MM-DD HH:mm:ss` and ISO `YYYY-MM-DDTHH:mm[:ss]`, plus
/// RFC 3339 strings with an offset, which are converted to local time.
/// Returns `None` for empty or invalid input.
pub fn parse_date_time(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let iso = if raw.contains('T') {
        raw.to_string()
    } else {
        raw.replacen(' ', "T", 1)
    };

    ISO_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(&iso, format).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(&iso)
                .ok()
                .map(|dt| dt.with_timezone(&Local).naive_local())
        })
}

pub fn parse_optional(raw: Option<&str>) -> Option<NaiveDateTime> {
    raw.and_then(parse_date_time)
}

pub fn format_wire(date_time: &NaiveDateTime) -> String {
    date_time.format(WIRE_FORMAT).to_string()
}

pub fn format_display(date_time: &NaiveDateTime) -> String {
    date_time.format(DISPLAY_FORMAT).to_string()
}

/// The reference time to classify against.
pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}
