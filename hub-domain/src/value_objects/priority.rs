// Ticket priority value object

use std::fmt;

use serde::{Deserialize, Serialize};

/// Declaration order is severity order, so `Ord` compares by urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "P4", alias = "low")]
    Low,
    #[serde(rename = "P3", alias = "medium")]
    Medium,
    #[serde(rename = "P2", alias = "high")]
    High,
    #[serde(rename = "P1", alias = "critical")]
    Critical,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Critical,
        Priority::High,
        Priority::Medium,
        Priority::Low,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Critical => "P1",
            Priority::High => "P2",
            Priority::Medium => "P3",
            Priority::Low => "P4",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Critical => "Critical",
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_uppercase().as_str() {
            "P1" | "CRITICAL" => Some(Priority::Critical),
            "P2" | "HIGH" => Some(Priority::High),
            "P3" | "MEDIUM" => Some(Priority::Medium),
            "P4" | "LOW" => Some(Priority::Low),
            _ => None,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
