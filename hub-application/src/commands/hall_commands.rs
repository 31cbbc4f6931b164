use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use hub_domain::{HallBooking, Notification};

use crate::commands::notification_commands::post_notification;
use crate::{AppError, AppState};

pub async fn book_hall(
    state: &AppState,
    hall_id: &str,
    booked_by: String,
) -> Result<HallBooking, AppError> {
    let hall_id = hall_id.trim();
    let (booking, hall_name) = {
        let mut halls = state.halls.write().await;
        let hall = halls
            .iter_mut()
            .find(|hall| hall.id == hall_id)
            .ok_or_else(|| AppError::NotFound(format!("hall {}", hall_id)))?;
        let booking = hall.book(Uuid::new_v4().to_string(), booked_by, Utc::now())?;
        (booking, hall.name.clone())
    };
    state.hall_bookings.write().await.push(booking.clone());
    info!("hall {} booked by {}", booking.hall_id, booking.booked_by);
    post_notification(
        state,
        Notification::info("Hall Booked", format!("{} has been booked.", hall_name)),
    )
    .await;
    Ok(booking)
}
