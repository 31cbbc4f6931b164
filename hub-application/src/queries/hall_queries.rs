use hub_domain::{Hall, HallBooking};

use crate::AppState;

pub async fn list_halls(state: &AppState) -> Vec<Hall> {
    state.halls.read().await.clone()
}

pub async fn list_hall_bookings(state: &AppState) -> Vec<HallBooking> {
    state.hall_bookings.read().await.clone()
}
