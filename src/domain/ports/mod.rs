//! Port trait definitions (Hexagonal Architecture)
//!
//! - TokenSigner: turns a claim set into a bearer token
//!
//! The provider only sees this trait, so tests can swap in a fake signer.

pub mod token_signer;

pub use token_signer::TokenSigner;
