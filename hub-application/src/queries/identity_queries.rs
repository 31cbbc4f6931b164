use tracing::warn;

use hub_domain::UserProfile;

use crate::AppState;

/// Anonymous when the token is absent or the identity service cannot be reached.
pub async fn resolve_resident(state: &AppState, session_token: Option<&str>) -> Option<UserProfile> {
    let token = session_token.map(str::trim).filter(|token| !token.is_empty())?;
    match state.services.identity.resolve(Some(token)).await {
        Ok(profile) => profile,
        Err(err) => {
            warn!("session lookup failed, continuing anonymously: {}", err);
            None
        }
    }
}
