//! Azure Storage shared access signature generator
//!
//! This crate builds signed tokens for Azure Storage without handing out the
//! account key:
//! - Account SAS, scoped to services and resource types
//! - Container SAS, scoped to one blob container with response header overrides
//! - Table SAS, scoped to one table with partition and row key ranges
//!
//! # Example
//!
//! ```rust
//! use sassign_azure_storage::{generate, ContainerSas, PermissionSet};
//!
//! # fn main() -> sassign_core::Result<()> {
//! let sas = ContainerSas::new("images")
//!     .with_permissions(PermissionSet::new().with("read", true).with("list", true))
//!     .with_start("2018-03-21T00:00:00Z")
//!     .with_expiry("2018-03-22T00:00:00Z");
//!
//! let token = generate("AccountName=myaccount;AccountKey=YmFy", &sas)?;
//! assert!(token.as_str().starts_with("sv=2018-11-09&sr=c&"));
//!
//! // Append the token to a resource url.
//! let url = format!("https://myaccount.blob.core.windows.net/images?{token}");
//! # let _ = url;
//! # Ok(())
//! # }
//! ```

mod constants;

mod config;
pub use config::Config;

pub mod connection_string;

mod key;
pub use key::AccountKeyMaterial;

pub mod permission;
pub use permission::PermissionSet;

mod sas;
pub use sas::{AccountSas, AccountSasFormat, ContainerSas, Protocol, TableSas};

use sassign_core::{BuildSas, Result, SasToken, Signer};

/// Generate a token for `req` with the account key found in `conn_str`.
///
/// The key material only lives for the duration of this call.
pub fn generate(conn_str: &str, req: &impl BuildSas) -> Result<SasToken> {
    let key = AccountKeyMaterial::from_connection_string(conn_str)?;
    Signer::new(key).sign(req)
}
