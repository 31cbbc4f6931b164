// Hall entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hall {
    pub id: String,
    pub name: String,
    pub capacity: u32,
    pub location: String,
    pub is_available: bool,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_available: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HallBooking {
    pub id: String,
    pub hall_id: String,
    pub booked_by: String,
    pub booked_at: DateTime<Utc>,
}

#[derive(Debug, Default, Deserialize)]
pub struct BookHallRequest {
    #[serde(default)]
    pub booked_by: Option<String>,
}

impl Hall {
    pub fn book(&mut self, booking_id: String, booked_by: String, now: DateTime<Utc>) -> Result<HallBooking, DomainError> {
        if !self.is_available {
            return Err(DomainError::HallUnavailable(self.name.clone()));
        }
        self.is_available = false;
        Ok(HallBooking {
            id: booking_id,
            hall_id: self.id.clone(),
            booked_by,
            booked_at: now,
        })
    }
}
