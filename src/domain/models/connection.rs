use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Connection configuration handed to front-end bootstrap code.
///
/// Serializes to the shape the front-end expects:
/// `{"isLocalDev"?, "continuousUpdate", "tokens", "parties"}`.
/// Maps are ordered so two hosted records serialize byte-identically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionConfig {
    /// Whether tokens were signed locally. Absent when the deployment never declares it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_local_dev: Option<bool>,

    /// Keep a live ledger connection instead of one-shot queries
    pub continuous_update: bool,

    /// Party name to access token
    #[serde(default)]
    pub tokens: BTreeMap<String, String>,

    /// Party name to ledger party identifier
    #[serde(default)]
    pub parties: BTreeMap<String, String>,
}

impl ConnectionConfig {
    /// True when the record was built from locally signed tokens
    pub fn is_local(&self) -> bool {
        self.is_local_dev == Some(true)
    }

    /// Party names across both maps, in order
    pub fn party_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .tokens
            .keys()
            .chain(self.parties.keys())
            .map(String::as_str)
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    /// Token for a party, `None` when missing or still an empty placeholder
    pub fn token_for(&self, party: &str) -> Option<&str> {
        self.tokens
            .get(party)
            .map(String::as_str)
            .filter(|token| !token.is_empty())
    }

    /// Party identifier, `None` when missing or still an empty placeholder
    pub fn party_id(&self, party: &str) -> Option<&str> {
        self.parties
            .get(party)
            .map(String::as_str)
            .filter(|id| !id.is_empty())
    }

    /// Keys present in exactly one of `tokens` and `parties`
    pub fn unpaired_keys(&self) -> Vec<&str> {
        self.party_names()
            .into_iter()
            .filter(|name| self.tokens.contains_key(*name) != self.parties.contains_key(*name))
            .collect()
    }
}
