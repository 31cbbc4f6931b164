use hub_domain::{compute_feedback_analytics, Feedback, FeedbackAnalytics};

use crate::AppState;

/// Recomputed from the full collection on every call.
pub async fn feedback_analytics(state: &AppState) -> FeedbackAnalytics {
    let feedbacks = state.feedbacks.read().await;
    compute_feedback_analytics(&feedbacks)
}

pub async fn list_feedback(state: &AppState) -> Vec<Feedback> {
    let mut feedbacks = state.feedbacks.read().await.clone();
    feedbacks.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
    feedbacks
}
