use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Claim set carried by a locally signed ledger token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerClaims {
    /// Ledger the token grants access to
    pub ledger_id: String,

    /// Application instance the token was minted for
    pub application_id: String,

    /// Party the bearer acts as
    pub party: String,

    /// Issued-at, unix seconds
    #[serde(default)]
    pub iat: i64,
}

impl LedgerClaims {
    /// Build a claim set stamped with the current time
    pub fn new(
        ledger_id: impl Into<String>,
        application_id: impl Into<String>,
        party: impl Into<String>,
    ) -> Self {
        Self {
            ledger_id: ledger_id.into(),
            application_id: application_id.into(),
            party: party.into(),
            iat: Utc::now().timestamp(),
        }
    }

    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.iat, 0)
    }
}
