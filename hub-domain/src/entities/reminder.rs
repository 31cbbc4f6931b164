// Community reminder entity

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderKind {
    Maintenance,
    Event,
    Notice,
    Urgent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderPriority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: String,
    pub title: String,
    pub message: String,
    pub kind: ReminderKind,
    pub date_time: NaiveDateTime,
    pub is_read: bool,
    pub priority: ReminderPriority,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReminderBoard {
    pub unread_count: usize,
    pub reminders: Vec<Reminder>,
}
