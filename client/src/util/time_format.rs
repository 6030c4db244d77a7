//! Message timestamp formatting.
//!
//! TRADE-OFFS
//! ==========
//! The browser formats with the user's locale (`toLocaleTimeString`); SSR and
//! tests have no locale, so they fall back to a fixed 24-hour `HH:MM` in UTC.
//! The two can disagree until hydration replaces the server text.

#[cfg(test)]
#[path = "time_format_test.rs"]
mod time_format_test;

use chrono::{DateTime, FixedOffset};

/// Parse an RFC 3339 timestamp.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw.trim()).ok()
}

/// Format a message timestamp as localized hour:minute. Unparseable input
/// renders as an empty string.
#[must_use]
pub fn format_message_time(created_at: &str) -> String {
    let Some(ts) = parse_timestamp(created_at) else {
        return String::new();
    };

    #[cfg(feature = "hydrate")]
    {
        locale_hour_minute(ts.timestamp_millis())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        ts.with_timezone(&chrono::Utc).format("%H:%M").to_string()
    }
}

#[cfg(feature = "hydrate")]
fn locale_hour_minute(millis: i64) -> String {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(millis as f64));
    let options = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&options, &"hour".into(), &"2-digit".into());
    let _ = js_sys::Reflect::set(&options, &"minute".into(), &"2-digit".into());
    date.to_locale_time_string_with_options("default", &options).into()
}
