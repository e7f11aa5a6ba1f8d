//! Display formatting for the account summary panel.

use crate::switch::ZERO_ADDRESS;

/// Sign interval in seconds to a human string. Days and hours are
/// shown when nonzero; minutes only when there is no day component.
/// Seconds granularity is dropped once any larger unit applies.
pub fn format_interval(seconds: u64) -> String {
    if seconds == 0 {
        return "Not set".to_string();
    }

    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3_600;
    let minutes = (seconds % 3_600) / 60;

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(unit(days, "day"));
    }
    if hours > 0 {
        parts.push(unit(hours, "hour"));
    }
    if minutes > 0 && days == 0 {
        parts.push(unit(minutes, "minute"));
    }

    if parts.is_empty() {
        format!("{} seconds", seconds)
    } else {
        parts.join(", ")
    }
}

fn unit(count: u64, name: &str) -> String {
    if count == 1 {
        format!("1 {}", name)
    } else {
        format!("{} {}s", count, name)
    }
}

/// Unix timestamp in seconds to a local date string; zero means the
/// account has never signed in.
pub fn format_last_sign_in(timestamp: u64) -> String {
    if timestamp == 0 {
        return "Never signed in".to_string();
    }
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(timestamp as f64 * 1000.0));
    date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED)
        .into()
}

/// The contract stores "no nominee" as the zero address.
pub fn format_nominee(address: &str) -> String {
    if address.is_empty() || address.eq_ignore_ascii_case(ZERO_ADDRESS) {
        "Not set".to_string()
    } else {
        address.to_string()
    }
}

/// `0x12345678...` style for the navbar.
pub fn shorten_address(address: &str) -> String {
    if address.len() <= 10 {
        address.to_string()
    } else {
        format!("{}...", &address[..10])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_interval_is_not_set() {
        assert_eq!(format_interval(0), "Not set");
    }

    #[test]
    fn sub_minute_intervals_fall_back_to_seconds() {
        assert_eq!(format_interval(45), "45 seconds");
        assert_eq!(format_interval(59), "59 seconds");
    }

    #[test]
    fn day_and_hour_components() {
        assert_eq!(format_interval(90_000), "1 day, 1 hour");
        assert_eq!(format_interval(86_400), "1 day");
        assert_eq!(format_interval(172_800), "2 days");
        assert_eq!(format_interval(3_600), "1 hour");
        assert_eq!(format_interval(7_200), "2 hours");
    }

    #[test]
    fn minutes_only_show_without_days() {
        assert_eq!(format_interval(120), "2 minutes");
        assert_eq!(format_interval(3_660), "1 hour, 1 minute");
        // minutes are dropped once a day component exists
        assert_eq!(format_interval(90_060), "1 day, 1 hour");
        assert_eq!(format_interval(86_460), "1 day");
    }

    #[test]
    fn formatting_is_idempotent_per_input() {
        for s in [0, 45, 60, 3_600, 86_400, 90_000, 2_592_000] {
            assert_eq!(format_interval(s), format_interval(s));
        }
    }

    #[test]
    fn never_signed_in_at_timestamp_zero() {
        assert_eq!(format_last_sign_in(0), "Never signed in");
    }

    #[test]
    fn zero_nominee_reads_not_set() {
        assert_eq!(format_nominee(ZERO_ADDRESS), "Not set");
        assert_eq!(
            format_nominee("0x0000000000000000000000000000000000000000"),
            "Not set"
        );
        assert_eq!(format_nominee(""), "Not set");
        assert_eq!(
            format_nominee("0x9bd27c3a181c3b27b0574279fd3e5e20b29b2cbb"),
            "0x9bd27c3a181c3b27b0574279fd3e5e20b29b2cbb"
        );
    }

    #[test]
    fn addresses_shorten_for_the_navbar() {
        assert_eq!(
            shorten_address("0x9bd27c3a181c3b27b0574279fd3e5e20b29b2cbb"),
            "0x9bd27c3a..."
        );
        assert_eq!(shorten_address("0xabcd"), "0xabcd");
    }
}
