//! Pre-flight checks on a connection configuration
//!
//! Nothing here is fatal: empty placeholders only fail later, when the
//! front-end connects. The checks make that failure visible up front.

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

use crate::domain::models::{ConnectionConfig, Settings};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => f.write_str("info"),
            Self::Warning => f.write_str("warning"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party: Option<String>,
    pub message: String,
}

impl Finding {
    fn warning(party: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            party: party.map(str::to_string),
            message: message.into(),
        }
    }

    fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            party: None,
            message: message.into(),
        }
    }
}

/// Inspect `config`, built from `settings`, for values that will fail downstream
pub fn check(settings: &Settings, config: &ConnectionConfig) -> Vec<Finding> {
    let mut findings = Vec::new();

    if settings.party_names.is_empty() {
        findings.push(Finding::warning(None, "no party names configured"));
    }

    if config.is_local() {
        if settings.secret == "secret" {
            findings.push(Finding::info(
                "signing with the default development secret; the sandbox must use the same secret",
            ));
        }
    } else {
        for party in &settings.party_names {
            if config.token_for(party).is_none() {
                findings.push(Finding::warning(
                    Some(party.as_str()),
                    "token is an empty placeholder; copy it from the hosted ledger dashboard",
                ));
            }
            if config.party_id(party).is_none() {
                findings.push(Finding::warning(
                    Some(party.as_str()),
                    "party id is an empty placeholder; copy it from the hosted ledger dashboard",
                ));
            }
        }

        for name in config.unpaired_keys() {
            findings.push(Finding::warning(
                Some(name),
                "party appears in only one of tokens and parties",
            ));
        }
    }

    let unknown = settings
        .hosted
        .tokens
        .keys()
        .chain(settings.hosted.parties.keys())
        .filter(|name| !settings.party_names.contains(*name))
        .collect::<BTreeSet<_>>();
    for name in unknown {
        findings.push(Finding::warning(
            Some(name.as_str()),
            "hosted value for a party not listed in party_names is ignored",
        ));
    }
    findings.dedup();

    findings
}
