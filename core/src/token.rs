use std::fmt;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;

use crate::hash::hex_sha256;

/// Query parameter that carries the signature.
pub const SIGNATURE_PARAM: &str = "sig";

/// SasToken is a shared access signature ready to append to a storage endpoint.
///
/// The token doesn't start with `?`.
#[derive(Clone, PartialEq, Eq)]
pub struct SasToken(String);

impl SasToken {
    /// Assemble a token from query parameters and a signature.
    ///
    /// Values are form url encoded. Parameters with empty values are left out
    /// even though the same fields are present as empty lines in the string
    /// to sign.
    pub fn assemble<'a>(
        query: impl IntoIterator<Item = (&'a str, &'a str)>,
        signature: &'a str,
    ) -> Self {
        let token = query
            .into_iter()
            .chain(std::iter::once((SIGNATURE_PARAM, signature)))
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, v)| format!("{}={}", k, urlencoded(v)))
            .collect::<Vec<_>>()
            .join("&");

        SasToken(token)
    }

    /// Borrow the token as a query string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Stable identifier of this token: lowercase hex SHA-256 of the token string.
    ///
    /// It's not part of the signature, callers use it to track tokens.
    pub fn id(&self) -> String {
        hex_sha256(self.0.as_bytes())
    }

    /// Iterate the `(key, value)` pairs with values decoded.
    pub fn pairs(&self) -> impl Iterator<Item = (String, String)> + '_ {
        form_urlencoded::parse(self.0.as_bytes()).map(|(k, v)| (k.into_owned(), v.into_owned()))
    }

    /// Get the decoded value of a query parameter.
    pub fn get(&self, key: &str) -> Option<String> {
        self.pairs().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Consume the token into its query string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for SasToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Debug for SasToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // The signature is a bearer secret.
        let redacted = self
            .pairs()
            .map(|(k, v)| {
                if k == SIGNATURE_PARAM {
                    format!("{k}=***")
                } else {
                    format!("{k}={v}")
                }
            })
            .collect::<Vec<_>>()
            .join("&");
        f.debug_tuple("SasToken").field(&redacted).finish()
    }
}

impl AsRef<str> for SasToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn urlencoded(s: &str) -> String {
    form_urlencoded::byte_serialize(s.as_bytes()).collect()
}
