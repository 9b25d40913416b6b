//! Token signing adapters

pub mod jwt;

pub use jwt::JwtTokenSigner;
