// Classification label value objects

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TicketCategory {
    Maintenance,
    NoiseComplaint,
    Security,
    Plumbing,
    Electrical,
    Emergency,
    Other(String),
}

impl TicketCategory {
    pub fn label(&self) -> &str {
        match self {
            TicketCategory::Maintenance => "Maintenance",
            TicketCategory::NoiseComplaint => "Noise Complaint",
            TicketCategory::Security => "Security",
            TicketCategory::Plumbing => "Plumbing",
            TicketCategory::Electrical => "Electrical",
            TicketCategory::Emergency => "Emergency",
            TicketCategory::Other(label) => label,
        }
    }
}

impl From<&str> for TicketCategory {
    fn from(s: &str) -> Self {
        let trimmed = s.trim();
        match trimmed.to_lowercase().replace(['_', '-'], " ").as_str() {
            "maintenance" => TicketCategory::Maintenance,
            "noise complaint" | "noise" => TicketCategory::NoiseComplaint,
            "security" => TicketCategory::Security,
            "plumbing" => TicketCategory::Plumbing,
            "electrical" => TicketCategory::Electrical,
            "emergency" => TicketCategory::Emergency,
            _ => TicketCategory::Other(trimmed.to_string()),
        }
    }
}

impl From<String> for TicketCategory {
    fn from(s: String) -> Self {
        TicketCategory::from(s.as_str())
    }
}

impl From<TicketCategory> for String {
    fn from(category: TicketCategory) -> Self {
        category.label().to_string()
    }
}

impl fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackCategory {
    Positive,
    Negative,
    Neutral,
    Suggestion,
}

impl FeedbackCategory {
    pub const ALL: [FeedbackCategory; 4] = [
        FeedbackCategory::Positive,
        FeedbackCategory::Negative,
        FeedbackCategory::Neutral,
        FeedbackCategory::Suggestion,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackCategory::Positive => "positive",
            FeedbackCategory::Negative => "negative",
            FeedbackCategory::Neutral => "neutral",
            FeedbackCategory::Suggestion => "suggestion",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackSource {
    Voice,
    #[default]
    Text,
    Rating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    Social,
    Educational,
    Wellness,
    Entertainment,
    Maintenance,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticket_category_round_trips_through_labels() {
        assert_eq!(TicketCategory::from("Noise Complaint"), TicketCategory::NoiseComplaint);
        assert_eq!(TicketCategory::from("noise_complaint"), TicketCategory::NoiseComplaint);
        assert_eq!(
            TicketCategory::from(" Parking "),
            TicketCategory::Other("Parking".to_string())
        );
        let json = serde_json::to_string(&TicketCategory::NoiseComplaint).expect("serialize");
        assert_eq!(json, "\"Noise Complaint\"");
    }
}
