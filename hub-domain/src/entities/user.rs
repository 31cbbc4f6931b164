// Signed-in resident identity, as supplied by the authentication service

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Resident,
    Admin,
    Security,
    Maintenance,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub display_name: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apartment_number: Option<String>,
}

impl UserProfile {
    pub fn home_location(&self) -> Option<String> {
        self.apartment_number
            .as_deref()
            .map(str::trim)
            .filter(|apartment| !apartment.is_empty())
            .map(|apartment| format!("Apartment {}", apartment))
    }
}
