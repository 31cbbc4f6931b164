use anyhow::{anyhow, Result};
use chrono::{NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Parses `YYYY-MM-DD HH:MM` wall-clock strings used by the seed fixtures.
pub fn parse_local_minutes(value: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim(), "%Y-%m-%d %H:%M").map_err(|err| anyhow!(err))
}

/// Midnight UTC of the given calendar date.
pub fn date_to_utc(date: &str) -> Result<chrono::DateTime<Utc>> {
    let day = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").map_err(|err| anyhow!(err))?;
    let midnight = day
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| anyhow!("invalid midnight for {}", date))?;
    Ok(Utc.from_utc_datetime(&midnight))
}

/// Joins a base URL and a path without doubling or dropping the slash.
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_url_normalizes_slashes() {
        assert_eq!(
            join_url("https://hub.test/", "/auth/v1/user"),
            "https://hub.test/auth/v1/user"
        );
        assert_eq!(join_url("https://hub.test", "x"), "https://hub.test/x");
    }

    #[test]
    fn fixture_dates_parse() {
        assert!(parse_local_minutes("2024-01-22 10:00").is_ok());
        assert_eq!(
            date_to_utc("2024-01-15").expect("date").to_rfc3339(),
            "2024-01-15T00:00:00+00:00"
        );
    }
}
