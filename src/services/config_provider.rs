//! Connection configuration provider
//!
//! Builds the single [`ConnectionConfig`] record front-end bootstrap code
//! reads. When the settings declare `is_local_dev: true`, tokens are signed
//! locally for every party; otherwise the hosted-service placeholders are
//! emitted as configured.

use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::domain::errors::TokenError;
use crate::domain::models::{ConnectionConfig, LedgerClaims, Settings};
use crate::domain::ports::TokenSigner;
use crate::infrastructure::tokens::JwtTokenSigner;

/// Process-wide configuration, built on first use and never mutated
static CONNECTION_CONFIG: OnceLock<ConnectionConfig> = OnceLock::new();

pub struct ConfigProvider {
    settings: Settings,
    signer: Arc<dyn TokenSigner>,
}

impl ConfigProvider {
    pub fn new(settings: Settings, signer: Arc<dyn TokenSigner>) -> Self {
        Self { settings, signer }
    }

    /// Provider signing with an HS256 JWT signer over `settings.secret`
    pub fn from_settings(settings: Settings) -> Self {
        let signer = Arc::new(JwtTokenSigner::new(&settings.secret));
        Self::new(settings, signer)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Build a fresh record
    ///
    /// Each local-dev load mints a new application id, so tokens differ
    /// between loads. Hosted loads are identical.
    pub fn load(&self) -> Result<ConnectionConfig, TokenError> {
        if self.settings.signs_locally() {
            self.local_config()
        } else {
            Ok(self.hosted_config())
        }
    }

    /// Record with tokens signed for every configured party
    #[instrument(skip(self), fields(ledger_id = %self.settings.ledger_id))]
    pub fn local_config(&self) -> Result<ConnectionConfig, TokenError> {
        let application_id = Uuid::new_v4().to_string();

        let tokens = self
            .settings
            .party_names
            .iter()
            .map(|party| -> Result<(String, String), TokenError> {
                let claims = LedgerClaims::new(
                    self.settings.ledger_id.as_str(),
                    application_id.as_str(),
                    party.as_str(),
                );
                let token = self.signer.sign(&claims)?;
                debug!(party = %party, "signed development token");
                Ok((party.clone(), token))
            })
            .collect::<Result<BTreeMap<_, _>, _>>()?;

        info!(
            application_id = %application_id,
            parties = tokens.len(),
            "built local development connection config"
        );

        Ok(ConnectionConfig {
            is_local_dev: self.settings.is_local_dev,
            continuous_update: self.settings.continuous_update,
            tokens,
            parties: BTreeMap::new(),
        })
    }

    /// Record with the hosted-service values, one entry per configured party
    ///
    /// Parties without a configured value get an empty placeholder.
    pub fn hosted_config(&self) -> ConnectionConfig {
        let placeholder = |values: &BTreeMap<String, String>| -> BTreeMap<String, String> {
            self.settings
                .party_names
                .iter()
                .map(|party| (party.clone(), values.get(party).cloned().unwrap_or_default()))
                .collect()
        };

        let config = ConnectionConfig {
            is_local_dev: self.settings.is_local_dev,
            continuous_update: self.settings.continuous_update,
            tokens: placeholder(&self.settings.hosted.tokens),
            parties: placeholder(&self.settings.hosted.parties),
        };

        let unfilled = config
            .party_names()
            .into_iter()
            .filter(|party| config.token_for(party).is_none() || config.party_id(party).is_none())
            .count();
        if unfilled > 0 {
            warn!(
                unfilled,
                "hosted connection config still has empty placeholders; copy them from the hosted ledger dashboard"
            );
        }
        info!(parties = config.tokens.len(), "built hosted connection config");

        config
    }

    /// Load once per process and return the shared record
    ///
    /// Later calls return the first record regardless of this provider's
    /// settings.
    pub fn init_global(&self) -> Result<&'static ConnectionConfig, TokenError> {
        if let Some(config) = CONNECTION_CONFIG.get() {
            return Ok(config);
        }
        let config = self.load()?;
        Ok(CONNECTION_CONFIG.get_or_init(|| config))
    }

    /// Shared record, if [`ConfigProvider::init_global`] has run
    pub fn global() -> Option<&'static ConnectionConfig> {
        CONNECTION_CONFIG.get()
    }
}

impl std::fmt::Debug for ConfigProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigProvider")
            .field("local_dev", &self.settings.is_local_dev)
            .field("parties", &self.settings.party_names)
            .finish_non_exhaustive()
    }
}
