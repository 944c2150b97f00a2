use jiff::{Timestamp, Zoned, civil::Date, tz};

/// A timestamp in the browser's time zone.
pub fn localize_timestamp(timestamp: Timestamp) -> Zoned {
    timestamp.to_zoned(tz::TimeZone::system())
}

pub fn format_timestamp(timestamp: Timestamp) -> String {
    localize_timestamp(timestamp)
        .strftime("%Y-%m-%d %H:%M")
        .to_string()
}

pub fn format_date(date: Date) -> String {
    date.strftime("%Y-%m-%d").to_string()
}

/// Parse the value of an `<input type="date">`; blank means no bound.
pub fn parse_date_input(value: &str) -> Option<Date> {
    value.trim().parse().ok()
}
