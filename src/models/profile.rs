use super::biometrics::UserBiometrics;
use chrono::Local;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub user_id: String,    // ⇔ profiles.user_id (TEXT PRIMARY KEY)
    pub biometrics: UserBiometrics,
    pub updated_at: String, // ⇔ profiles.updated_at (TEXT, ISO8601)
}

impl Profile {
    pub fn new(user_id: &str, biometrics: UserBiometrics) -> Self {
        Self {
            user_id: user_id.to_string(),
            biometrics,
            updated_at: Local::now().to_rfc3339(),
        }
    }
}
