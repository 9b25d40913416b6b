use crate::domain::errors::TokenError;
use crate::domain::models::LedgerClaims;

/// Port for signing ledger access tokens
///
/// # Examples
///
/// ```no_run
/// use ledger_bootstrap::domain::models::LedgerClaims;
/// use ledger_bootstrap::domain::ports::TokenSigner;
///
/// fn token_for(signer: &dyn TokenSigner, claims: &LedgerClaims) -> String {
///     signer.sign(claims).unwrap_or_default()
/// }
/// ```
pub trait TokenSigner: Send + Sync {
    /// Sign the claim set and return the encoded token
    fn sign(&self, claims: &LedgerClaims) -> Result<String, TokenError>;
}
