// CCTV footage request entity

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

pub const MONITORED_AREAS: [&str; 8] = [
    "Block A Entrance",
    "Block B Entrance",
    "Block C Entrance",
    "Parking Area A",
    "Parking Area B",
    "Community Hall",
    "Playground",
    "Swimming Pool Area",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CctvStatus {
    #[default]
    Pending,
    Approved,
    Processing,
    Ready,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CctvRequest {
    pub id: String,
    pub area: String,
    pub date_time: NaiveDateTime,
    pub reason: String,
    pub status: CctvStatus,
    pub requested_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_by: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewCctvRequest {
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub date_time: String,
    #[serde(default)]
    pub reason: String,
}

/// Accepts both the `datetime-local` form value and a space separated timestamp.
pub fn parse_footage_time(raw: &str) -> Result<NaiveDateTime, DomainError> {
    let trimmed = raw.trim();
    ["%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| DomainError::InvalidDateTime(trimmed.to_string()))
}

impl CctvRequest {
    /// `now_local` is the resident's wall clock; footage cannot be requested for the future.
    pub fn submit(
        id: String,
        request: NewCctvRequest,
        requested_by: Option<String>,
        now_local: NaiveDateTime,
        requested_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let area = request.area.trim();
        if area.is_empty() {
            return Err(DomainError::MissingField("area"));
        }
        let area = MONITORED_AREAS
            .iter()
            .find(|known| known.eq_ignore_ascii_case(area))
            .ok_or_else(|| DomainError::UnknownArea(area.to_string()))?;
        if request.date_time.trim().is_empty() {
            return Err(DomainError::MissingField("date_time"));
        }
        let date_time = parse_footage_time(&request.date_time)?;
        if date_time > now_local {
            return Err(DomainError::FutureFootage(request.date_time.trim().to_string()));
        }
        let reason = request.reason.trim();
        if reason.is_empty() {
            return Err(DomainError::MissingField("reason"));
        }
        Ok(Self {
            id,
            area: area.to_string(),
            date_time,
            reason: reason.to_string(),
            status: CctvStatus::Pending,
            requested_at,
            requested_by,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now_local() -> NaiveDateTime {
        parse_footage_time("2024-01-21 12:00").expect("timestamp")
    }

    fn request(area: &str, date_time: &str) -> NewCctvRequest {
        NewCctvRequest {
            area: area.to_string(),
            date_time: date_time.to_string(),
            reason: "Vehicle damage claim".to_string(),
        }
    }

    #[test]
    fn submit_normalizes_area_and_starts_pending() {
        let submitted = CctvRequest::submit(
            "3".to_string(),
            request("parking area b", "2024-01-19T18:00"),
            None,
            now_local(),
            Utc::now(),
        )
        .expect("request");
        assert_eq!(submitted.area, "Parking Area B");
        assert_eq!(submitted.status, CctvStatus::Pending);
    }

    #[test]
    fn submit_rejects_future_footage() {
        let err = CctvRequest::submit(
            "3".to_string(),
            request("Playground", "2024-01-22 08:00"),
            None,
            now_local(),
            Utc::now(),
        )
        .expect_err("future");
        assert!(matches!(err, DomainError::FutureFootage(_)));
    }

    #[test]
    fn submit_rejects_unknown_area() {
        let err = CctvRequest::submit(
            "3".to_string(),
            request("Rooftop", "2024-01-20 08:00"),
            None,
            now_local(),
            Utc::now(),
        )
        .expect_err("unknown area");
        assert_eq!(err, DomainError::UnknownArea("Rooftop".to_string()));
    }
}
