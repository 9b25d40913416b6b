use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::fmt;

use crate::domain::errors::TokenError;
use crate::domain::models::LedgerClaims;
use crate::domain::ports::TokenSigner;

/// HS256 signer backed by a shared development secret
///
/// Tokens carry no expiry. The secret is not a security boundary; it only
/// lets a local sandbox ledger accept the front-end's requests.
pub struct JwtTokenSigner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    has_secret: bool,
}

impl JwtTokenSigner {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            has_secret: !secret.is_empty(),
        }
    }

    /// Decode a token signed with the same secret
    ///
    /// Only the signature is checked; no registered claims are required.
    pub fn decode(&self, token: &str) -> Result<LedgerClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims.clear();
        validation.validate_exp = false;

        jsonwebtoken::decode::<LedgerClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| TokenError::Decoding(e.to_string()))
    }
}

impl TokenSigner for JwtTokenSigner {
    fn sign(&self, claims: &LedgerClaims) -> Result<String, TokenError> {
        if !self.has_secret {
            return Err(TokenError::EmptySecret);
        }

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key).map_err(
            |e| TokenError::Signing {
                party: claims.party.clone(),
                reason: e.to_string(),
            },
        )
    }
}

impl fmt::Debug for JwtTokenSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenSigner")
            .field("has_secret", &self.has_secret)
            .finish_non_exhaustive()
    }
}
