use log::debug;

use crate::hash::{base64_decode, base64_hmac_sha256};
use crate::{BuildSas, Error, Result, SasToken, SigningKey};

/// Compute the signature of a string to sign with a base64 encoded account key.
///
/// The key is decoded, used as the HMAC-SHA256 key over the UTF-8 bytes of
/// `string_to_sign`, and the digest is returned base64 encoded. The decoded
/// key is wiped before returning.
pub fn compute_signature(string_to_sign: &str, account_key: &str) -> Result<String> {
    let key = base64_decode(account_key)?;

    Ok(base64_hmac_sha256(&key, string_to_sign.as_bytes()))
}

/// Signer is the main struct used to generate shared access signatures.
///
/// It holds no state besides the key, signing the same request twice
/// yields the same token.
#[derive(Clone, Debug)]
pub struct Signer<K: SigningKey> {
    key: K,
}

impl<K: SigningKey> Signer<K> {
    /// Create a new signer.
    pub fn new(key: K) -> Self {
        Self { key }
    }

    /// Generate the token for the given request.
    pub fn sign(&self, req: &impl BuildSas) -> Result<SasToken> {
        if self.key.account_name().is_empty() {
            return Err(Error::missing_required_field("account_name"));
        }
        if self.key.account_key().is_empty() {
            return Err(Error::missing_required_field("account_key"));
        }

        let parts = req.build(self.key.account_name())?;
        debug!("string to sign: {:?}", &parts.string_to_sign);

        let signature = compute_signature(&parts.string_to_sign, self.key.account_key())?;

        Ok(SasToken::assemble(
            parts.query.iter().map(|(k, v)| (*k, v.as_str())),
            &signature,
        ))
    }
}
