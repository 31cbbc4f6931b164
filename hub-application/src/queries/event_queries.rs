use chrono::Local;

use hub_domain::{recommend_events, EventRecommendation};

use crate::AppState;

/// Fresh suggestions for the configured facilities at the building's local time.
pub fn recommend(state: &AppState) -> Vec<EventRecommendation> {
    recommend_events(&state.config.facilities, &Local::now())
}

pub async fn selected_events(state: &AppState) -> Vec<EventRecommendation> {
    state.selected_events.read().await.clone()
}
