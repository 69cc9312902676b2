//! Contact information shared by tenants and landlords.

use serde::{Deserialize, Serialize};

/// Contact details as sent by the backend.
///
/// The backend is inconsistent about the phone field (`phone` on some
/// records, `phoneNumber` on others); the alias normalizes both to one
/// field here, at the single point of ingestion, so views never have to
/// do fallback lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub email: Option<String>,
    #[serde(alias = "phoneNumber")]
    pub phone: Option<String>,
    pub address: Option<String>,
}
