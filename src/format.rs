//! Date formatting helpers shared by tables and detail views.

use chrono::{DateTime, Utc};

/// Format a timestamp as e.g. "Nov 8, 2025"; absent values render "N/A".
pub fn format_date(timestamp: Option<&DateTime<Utc>>) -> String {
    match timestamp {
        Some(ts) => ts.format("%b %-d, %Y").to_string(),
        None => "N/A".to_string(),
    }
}

/// Time-of-day portion, e.g. "10:42:07".
pub fn format_time(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%H:%M:%S").to_string()
}

/// Page title derived from the current route path.
pub fn page_title(pathname: &str) -> &'static str {
    let first = pathname.trim_start_matches('/').split('/').next().unwrap_or("");
    match first {
        "" => "Dashboard",
        "leads" => "Leads",
        "sources" => "Sources",
        "settings" => "Settings",
        "bitrix" => "Bitrix Status",
        "login" => "Login",
        _ => "Dashboard",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_dates_without_zero_padding() {
        let ts = Utc.with_ymd_and_hms(2025, 11, 8, 10, 42, 7).unwrap();
        assert_eq!(format_date(Some(&ts)), "Nov 8, 2025");
        assert_eq!(format_time(&ts), "10:42:07");
    }

    #[test]
    fn missing_dates_render_na() {
        assert_eq!(format_date(None), "N/A");
    }

    #[test]
    fn titles_follow_the_first_path_segment() {
        assert_eq!(page_title("/"), "Dashboard");
        assert_eq!(page_title("/leads"), "Leads");
        assert_eq!(page_title("/leads/64f0a"), "Leads");
        assert_eq!(page_title("/bitrix"), "Bitrix Status");
    }
}
