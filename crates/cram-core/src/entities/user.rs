use serde::{Deserialize, Serialize};

/// Account profile returned by login and register.
///
/// Data only — the token travelling alongside it on the wire is handled by
/// the session, never stored here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
}
