use std::fmt;

use sassign_core::{Error, Result};

use crate::permission::{Alphabet, PermissionSet};

mod account;
pub use account::{AccountSas, AccountSasFormat};

mod container;
pub use container::ContainerSas;

mod table;
pub use table::TableSas;

/// Specifies the protocol permitted for a request made with the SAS ([Azure documentation](https://docs.microsoft.com/rest/api/storageservices/create-service-sas#specifying-the-http-protocol)).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Protocol {
    /// Only HTTPS requests are permitted.
    Https,
    /// Both HTTPS and HTTP requests are permitted.
    HttpsAndHttp,
}

impl Protocol {
    /// Map the https-only flag onto a protocol restriction.
    pub fn from_https_only(https_only: bool) -> Self {
        if https_only {
            Protocol::Https
        } else {
            Protocol::HttpsAndHttp
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Protocol::Https => write!(f, "https"),
            Protocol::HttpsAndHttp => write!(f, "https,http"),
        }
    }
}

/// Get a required string field, empty strings count as absent.
fn required<'a>(value: &'a Option<String>, field: &str) -> Result<&'a str> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(Error::missing_required_field(field)),
    }
}

/// Encode a required permission set.
///
/// The set itself must be present, but it may have nothing enabled.
fn required_permissions(
    value: &Option<PermissionSet>,
    field: &str,
    alphabet: Alphabet,
) -> Result<String> {
    value
        .as_ref()
        .map(|set| set.encode(alphabet))
        .ok_or_else(|| Error::missing_required_field(field))
}

fn optional(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or_default()
}
