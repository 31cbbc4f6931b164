use axum::routing::{get, post, put};
use axum::Router;

use hub_application::AppState;

use crate::handlers::{
    community_handlers, event_handlers, feedback_handlers, ops_handlers, ticket_handlers,
    voice_handlers,
};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/v1/tickets",
            get(ticket_handlers::list_tickets).post(ticket_handlers::create_ticket),
        )
        .route("/v1/tickets/summary", get(ticket_handlers::ticket_summary))
        .route(
            "/v1/tickets/:id",
            get(ticket_handlers::get_ticket).patch(ticket_handlers::update_ticket),
        )
        .route("/v1/tickets/:id/image", put(ticket_handlers::attach_image))
        .route(
            "/v1/feedback",
            get(feedback_handlers::list_feedback).post(feedback_handlers::submit_feedback),
        )
        .route(
            "/v1/analytics/feedback",
            get(feedback_handlers::feedback_analytics),
        )
        .route(
            "/v1/events/recommendations",
            get(event_handlers::recommendations),
        )
        .route(
            "/v1/events/selected",
            get(event_handlers::list_selected).post(event_handlers::select_event),
        )
        .route("/v1/halls", get(community_handlers::list_halls))
        .route("/v1/halls/:id/book", post(community_handlers::book_hall))
        .route("/v1/cctv/areas", get(community_handlers::monitored_areas))
        .route(
            "/v1/cctv/requests",
            get(community_handlers::list_cctv_requests)
                .post(community_handlers::submit_cctv_request),
        )
        .route("/v1/reminders", get(community_handlers::reminder_board))
        .route(
            "/v1/reminders/:id/read",
            post(community_handlers::mark_reminder_read),
        )
        .route(
            "/v1/voice/transcript",
            post(voice_handlers::submit_transcript),
        )
        .route("/v1/voice/audio", post(voice_handlers::submit_audio))
        .route("/v1/voice/speak", post(voice_handlers::speak))
        .route("/v1/notifications", get(ops_handlers::list_notifications))
        .route("/v1/ops/health/live", get(ops_handlers::health_live))
        .route("/v1/ops/health/ready", get(ops_handlers::health_ready))
        .route(
            "/v1/ops/metrics/prometheus",
            get(ops_handlers::metrics_prometheus),
        )
        .with_state(state)
}
