use crate::Result;
use std::fmt::Debug;

/// SigningKey is the trait used by signer as the signing key.
pub trait SigningKey: Debug + Send + Sync {
    /// Name of the storage account the key belongs to.
    fn account_name(&self) -> &str;

    /// Base64 encoded account key.
    fn account_key(&self) -> &str;
}

/// BuildSas is the trait implemented by every shared access signature family.
pub trait BuildSas: Debug + Send + Sync {
    /// Validate the request and build its signable parts.
    ///
    /// Implementations must return an error for missing required fields
    /// instead of producing parts that grant nothing.
    fn build(&self, account_name: &str) -> Result<SasParts>;
}

/// SasParts carries everything needed to produce a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SasParts {
    /// The exact plaintext to sign.
    ///
    /// Every field is present, in order, even when empty.
    pub string_to_sign: String,
    /// Query parameters in the order they are serialized, without `sig`.
    ///
    /// Values are raw; encoding happens at assembly time.
    pub query: Vec<(&'static str, String)>,
}
