use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use hub_domain::{
    current_millis, normalize_optional_text, EventId, Feedback, FeedbackCategory, NewFeedback,
    Notification,
};

use crate::commands::notification_commands::post_notification;
use crate::{AppError, AppState};

pub async fn submit_feedback(
    state: &AppState,
    submission: NewFeedback,
) -> Result<Feedback, AppError> {
    submission.validate()?;
    let default_category = submission.category.unwrap_or(FeedbackCategory::Neutral);
    let category = {
        let rules = state.rules.read().await;
        rules.classify_feedback(&submission.body, default_category)
    };
    let event_id = normalize_optional_text(submission.event_id.clone())
        .map(EventId)
        .unwrap_or_else(|| EventId(format!("event-{}", current_millis())));
    let feedback = Feedback::record(
        Uuid::new_v4().to_string(),
        event_id,
        submission,
        category,
        Utc::now(),
    )?;

    state.feedbacks.write().await.push(feedback.clone());
    state.metrics.record_feedback();
    info!(
        "feedback {} recorded for '{}' ({}/5, {})",
        feedback.id,
        feedback.event_title,
        feedback.rating.value(),
        feedback.category.as_str()
    );
    post_notification(
        state,
        Notification::info(
            "Feedback Submitted",
            "Thank you for your feedback! It helps us improve our community events.",
        ),
    )
    .await;
    Ok(feedback)
}

#[cfg(test)]
mod tests {
    use hub_domain::FeedbackSource;

    use super::*;
    use crate::test_support::test_state;

    fn submission(body: &str, rating: i64) -> NewFeedback {
        NewFeedback {
            event_id: None,
            event_title: "Movie Night Under Stars".to_string(),
            rating,
            body: body.to_string(),
            source: FeedbackSource::Text,
            category: Some(FeedbackCategory::Positive),
        }
    }

    #[tokio::test]
    async fn keywords_override_the_submitted_category() {
        let state = test_state();
        let feedback = submit_feedback(&state, submission("Poor sound system", 2))
            .await
            .expect("feedback");
        assert_eq!(feedback.category, FeedbackCategory::Negative);
        assert!(feedback.event_id.as_str().starts_with("event-"));

        let kept = submit_feedback(&state, submission("It was fine", 4))
            .await
            .expect("feedback");
        assert_eq!(kept.category, FeedbackCategory::Positive);
    }

    #[tokio::test]
    async fn out_of_range_rating_is_rejected_without_side_effects() {
        let state = test_state();
        let before = state.feedbacks.read().await.len();
        let err = submit_feedback(&state, submission("Great", 6))
            .await
            .expect_err("rating");
        assert!(matches!(err, AppError::BadRequest(_)));
        assert_eq!(state.feedbacks.read().await.len(), before);
        assert!(state.notifications.read().await.is_empty());
    }
}
