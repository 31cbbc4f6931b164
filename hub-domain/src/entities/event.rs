// Event recommendation entity
// Generated from templates, never persisted unless selected for promotion

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{EventCategory, EventId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecommendation {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub suggested_date: DateTime<Utc>,
    pub location: String,
    pub estimated_attendees: u32,
    pub category: EventCategory,
    pub facilities: Vec<String>,
    pub promotion_script: String,
    pub broadcast_message: String,
    pub reason: String,
}
