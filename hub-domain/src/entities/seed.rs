// Initial collection contents loaded at startup

use serde::{Deserialize, Serialize};

use crate::entities::{CctvRequest, Feedback, Hall, Reminder, Ticket};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub tickets: Vec<Ticket>,
    pub feedbacks: Vec<Feedback>,
    pub halls: Vec<Hall>,
    pub reminders: Vec<Reminder>,
    pub cctv_requests: Vec<CctvRequest>,
}
