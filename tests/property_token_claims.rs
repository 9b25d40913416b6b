use ledger_bootstrap::{ConfigLoader, ConfigProvider, Deployment, JwtTokenSigner, Settings};
use proptest::collection::btree_set;
use proptest::prelude::*;

fn party_names() -> impl Strategy<Value = Vec<String>> {
    btree_set("[A-Z][a-z]{1,8}", 1..6).prop_map(|names| names.into_iter().collect())
}

fn settings(is_local_dev: Option<bool>, ledger_id: String, names: Vec<String>) -> Settings {
    Settings {
        is_local_dev,
        ledger_id,
        party_names: names,
        ..Deployment::HelloCdm.settings()
    }
}

proptest! {
    /// Property: every local token decodes to the claims it was signed for
    ///
    /// The token map is keyed by exactly the configured party names, and each
    /// token carries the ledger id, its own party and a shared application id.
    #[test]
    fn prop_local_tokens_round_trip_claims(
        names in party_names(),
        ledger_id in "[a-z][a-z0-9-]{0,15}",
    ) {
        let settings = settings(Some(true), ledger_id.clone(), names.clone());
        prop_assert!(ConfigLoader::validate(&settings).is_ok());

        let signer = JwtTokenSigner::new(&settings.secret);
        let config = ConfigProvider::from_settings(settings).load().unwrap();

        let keys: Vec<String> = config.tokens.keys().cloned().collect();
        prop_assert_eq!(keys, names);
        prop_assert!(config.parties.is_empty());

        let mut application_id = None;
        for (party, token) in &config.tokens {
            let claims = signer.decode(token).unwrap();
            prop_assert_eq!(&claims.ledger_id, &ledger_id);
            prop_assert_eq!(&claims.party, party);
            prop_assert!(!claims.application_id.is_empty());

            let shared: &String =
                application_id.get_or_insert_with(|| claims.application_id.clone());
            prop_assert_eq!(shared, &claims.application_id);
        }
    }

    /// Property: hosted records have one placeholder per party in both maps
    #[test]
    fn prop_hosted_keys_match_party_names(
        names in party_names(),
        flag in prop_oneof![Just(None), Just(Some(false))],
    ) {
        let settings = settings(flag, "sandbox".to_string(), names.clone());
        let config = ConfigProvider::from_settings(settings).load().unwrap();

        let token_keys: Vec<String> = config.tokens.keys().cloned().collect();
        let party_keys: Vec<String> = config.parties.keys().cloned().collect();
        prop_assert_eq!(&token_keys, &names);
        prop_assert_eq!(&party_keys, &names);
        prop_assert!(config.unpaired_keys().is_empty());
        prop_assert!(!config.continuous_update);
    }

    /// Property: a token signed with one secret never decodes with another
    #[test]
    fn prop_decode_rejects_other_secret(
        names in party_names(),
        other in "[a-z]{8,16}",
    ) {
        let settings = settings(Some(true), "sandbox".to_string(), names);
        prop_assume!(other != settings.secret);

        let config = ConfigProvider::from_settings(settings).load().unwrap();
        let wrong = JwtTokenSigner::new(&other);
        for token in config.tokens.values() {
            prop_assert!(wrong.decode(token).is_err());
        }
    }
}
