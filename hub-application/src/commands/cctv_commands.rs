use chrono::{Local, Utc};
use tracing::info;
use uuid::Uuid;

use hub_domain::{CctvRequest, NewCctvRequest, Notification};

use crate::commands::notification_commands::post_notification;
use crate::{AppError, AppState};

pub async fn submit_cctv_request(
    state: &AppState,
    request: NewCctvRequest,
    requested_by: Option<String>,
) -> Result<CctvRequest, AppError> {
    let request = CctvRequest::submit(
        Uuid::new_v4().to_string(),
        request,
        requested_by,
        Local::now().naive_local(),
        Utc::now(),
    )?;
    state.cctv_requests.write().await.push(request.clone());
    info!("cctv footage requested for {} at {}", request.area, request.date_time);
    post_notification(
        state,
        Notification::info(
            "CCTV footage request submitted",
            "Guard office will process your request within 24 hours",
        ),
    )
    .await;
    Ok(request)
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use hub_domain::CctvStatus;

    use super::*;
    use crate::test_support::test_state;

    fn request(date_time: String) -> NewCctvRequest {
        NewCctvRequest {
            area: "parking area a".to_string(),
            date_time,
            reason: "Scratch on my car".to_string(),
        }
    }

    #[tokio::test]
    async fn past_footage_is_accepted_and_future_rejected() {
        let state = test_state();
        let before = state.cctv_requests.read().await.len();
        let past = (Local::now() - Duration::hours(2))
            .format("%Y-%m-%dT%H:%M")
            .to_string();
        let accepted = submit_cctv_request(&state, request(past), Some("Priya".to_string()))
            .await
            .expect("accepted");
        assert_eq!(accepted.area, "Parking Area A");
        assert_eq!(accepted.status, CctvStatus::Pending);

        let future = (Local::now() + Duration::days(1))
            .format("%Y-%m-%dT%H:%M")
            .to_string();
        let err = submit_cctv_request(&state, request(future), None)
            .await
            .expect_err("future");
        assert!(matches!(err, AppError::BadRequest(_)));
        assert_eq!(state.cctv_requests.read().await.len(), before + 1);
    }
}
