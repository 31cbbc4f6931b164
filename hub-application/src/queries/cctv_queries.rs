use hub_domain::{CctvRequest, MONITORED_AREAS};

use crate::AppState;

pub fn monitored_areas() -> Vec<&'static str> {
    MONITORED_AREAS.to_vec()
}

/// Most recent request first.
pub async fn list_cctv_requests(state: &AppState) -> Vec<CctvRequest> {
    let mut requests = state.cctv_requests.read().await.clone();
    requests.sort_by(|a, b| b.requested_at.cmp(&a.requested_at));
    requests
}
