use std::fmt::{Debug, Formatter};

use sassign_core::utils::Redact;
use sassign_core::{Result, SigningKey};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::connection_string;

/// AccountKeyMaterial holds the account name and the base64 encoded account key.
///
/// It lives for one signing operation; the key is wiped on drop.
#[derive(Default, Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct AccountKeyMaterial {
    /// Azure storage account name.
    account_name: String,
    /// Azure storage account key, base64 encoded.
    account_key: String,
}

impl Debug for AccountKeyMaterial {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountKeyMaterial")
            .field("account_name", &self.account_name)
            .field("account_key", &Redact::from(&self.account_key))
            .finish()
    }
}

impl SigningKey for AccountKeyMaterial {
    fn account_name(&self) -> &str {
        &self.account_name
    }

    fn account_key(&self) -> &str {
        &self.account_key
    }
}

impl AccountKeyMaterial {
    /// Create key material from an account name and its base64 encoded key.
    pub fn new(account_name: impl Into<String>, account_key: impl Into<String>) -> Self {
        Self {
            account_name: account_name.into(),
            account_key: account_key.into(),
        }
    }

    /// Extract key material from an [Azure connection string][1].
    ///
    /// ```txt
    /// AccountName=mystorageaccount;
    /// AccountKey=Eby8vdM02xNOcqFlqUwJPLlmEtlCDXJ1OUzFT50uSRZ6IFsuFq2UVErCz4I6tq/K1SZFPTOtr/KBHBeksoGMGw==;
    /// EndpointSuffix=core.windows.net
    /// ```
    ///
    /// [1]: https://learn.microsoft.com/en-us/azure/storage/common/storage-configure-connection-string
    pub fn from_connection_string(conn_str: &str) -> Result<Self> {
        connection_string::key_material(conn_str)
    }
}
