// Feedback entity
// A rated response tied to a community event

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::{EventId, FeedbackCategory, FeedbackSource, Rating};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: String,
    pub event_id: EventId,
    pub event_title: String,
    pub rating: Rating,
    pub body: String,
    pub source: FeedbackSource,
    pub category: FeedbackCategory,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewFeedback {
    #[serde(default)]
    pub event_id: Option<String>,
    #[serde(default)]
    pub event_title: String,
    pub rating: i64,
    #[serde(default, alias = "feedback")]
    pub body: String,
    #[serde(default)]
    pub source: FeedbackSource,
    #[serde(default)]
    pub category: Option<FeedbackCategory>,
}

impl NewFeedback {
    pub fn validate(&self) -> Result<Rating, DomainError> {
        if self.event_title.trim().is_empty() {
            return Err(DomainError::MissingField("event_title"));
        }
        if self.body.trim().is_empty() && self.source != FeedbackSource::Rating {
            return Err(DomainError::MissingField("feedback"));
        }
        Rating::new(self.rating)
    }
}

impl Feedback {
    pub fn record(
        id: String,
        event_id: EventId,
        submission: NewFeedback,
        category: FeedbackCategory,
        submitted_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let rating = submission.validate()?;
        Ok(Self {
            id,
            event_id,
            event_title: submission.event_title.trim().to_string(),
            rating,
            body: submission.body.trim().to_string(),
            source: submission.source,
            category,
            submitted_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(body: &str, rating: i64) -> NewFeedback {
        NewFeedback {
            event_id: None,
            event_title: "Community Game Night".to_string(),
            rating,
            body: body.to_string(),
            source: FeedbackSource::Text,
            category: None,
        }
    }

    #[test]
    fn validate_requires_body_for_text_feedback() {
        assert_eq!(
            submission("  ", 4).validate().expect_err("missing body"),
            DomainError::MissingField("feedback")
        );
    }

    #[test]
    fn rating_only_feedback_may_be_blank() {
        let mut rating_only = submission("", 4);
        rating_only.source = FeedbackSource::Rating;
        assert_eq!(rating_only.validate().expect("valid").value(), 4);
    }

    #[test]
    fn record_rejects_invalid_rating() {
        let err = Feedback::record(
            "fb".to_string(),
            EventId::from("event-1"),
            submission("fine", 9),
            FeedbackCategory::Neutral,
            Utc::now(),
        )
        .expect_err("rating out of range");
        assert_eq!(err, DomainError::InvalidRating(9));
    }
}
