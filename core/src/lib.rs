//! Core components for generating shared access signatures.
//!
//! This crate provides the foundational types and traits for the sassign ecosystem.
//! Service crates describe their token families on top of it.
//!
//! ## Overview
//!
//! The crate is built around several key concepts:
//!
//! - **SigningKey**: The account name and base64 encoded key used as HMAC key
//! - **BuildSas**: Validates a request and produces its string to sign and query parameters
//! - **Signer**: Coordinates building, signing and assembling a [`SasToken`]
//!
//! Everything is a pure function of its inputs: no I/O, no shared state.
//!
//! ## Example
//!
//! ```
//! use sassign_core::{BuildSas, Result, SasParts, Signer, SigningKey};
//!
//! #[derive(Debug)]
//! struct MyKey;
//!
//! impl SigningKey for MyKey {
//!     fn account_name(&self) -> &str {
//!         "myaccount"
//!     }
//!
//!     fn account_key(&self) -> &str {
//!         "YmFy"
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MySas;
//!
//! impl BuildSas for MySas {
//!     fn build(&self, account_name: &str) -> Result<SasParts> {
//!         Ok(SasParts {
//!             string_to_sign: format!("{account_name}\nr\n"),
//!             query: vec![("sp", "r".to_string())],
//!         })
//!     }
//! }
//!
//! # fn main() -> Result<()> {
//! let token = Signer::new(MyKey).sign(&MySas)?;
//! assert!(token.as_str().starts_with("sp=r&sig="));
//! # Ok(())
//! # }
//! ```
//!
//! ## Utilities
//!
//! The crate also provides utility modules:
//!
//! - [`hash`]: Cryptographic hashing utilities
//! - [`time`]: Time formatting utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod api;
pub use api::{BuildSas, SasParts, SigningKey};
mod error;
pub use error::{Error, ErrorKind, Result};
mod signer;
pub use signer::{compute_signature, Signer};
mod token;
pub use token::{SasToken, SIGNATURE_PARAM};
