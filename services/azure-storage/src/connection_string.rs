use std::collections::HashMap;

use sassign_core::{Error, Result};

use crate::constants::*;
use crate::AccountKeyMaterial;

/// Parses an [Azure connection string][1] into its `Key=Value` pairs.
///
/// Keys other than `AccountName` and `AccountKey` are kept but unused here.
///
/// [1]: https://learn.microsoft.com/en-us/azure/storage/common/storage-configure-connection-string
pub fn parse(conn_str: &str) -> Result<HashMap<String, String>> {
    conn_str
        .trim()
        .replace('\n', "")
        .split(';')
        .map(str::trim)
        .filter(|&field| !field.is_empty())
        .map(|field| {
            let (key, value) = field.split_once('=').ok_or_else(|| {
                Error::malformed_connection_string(format!(
                    "expected '=' in field: {}",
                    redact_field(field)
                ))
            })?;
            let key = key.trim();
            if key.is_empty() {
                return Err(Error::malformed_connection_string(
                    "field with empty key".to_string(),
                ));
            }
            Ok((key.to_string(), value.trim().to_string()))
        })
        .collect()
}

/// Extracts the account name and key from a connection string.
pub(crate) fn key_material(conn_str: &str) -> Result<AccountKeyMaterial> {
    let mut key_values = parse(conn_str)?;

    // Development storage falls back to the well known emulator account.
    if key_values
        .get(USE_DEVELOPMENT_STORAGE)
        .is_some_and(|v| v.eq_ignore_ascii_case("true"))
    {
        let account_name = key_values
            .remove(ACCOUNT_NAME)
            .unwrap_or_else(|| DEVELOPMENT_STORAGE_ACCOUNT_NAME.to_string());
        let account_key = key_values
            .remove(ACCOUNT_KEY)
            .unwrap_or_else(|| DEVELOPMENT_STORAGE_ACCOUNT_KEY.to_string());
        return Ok(AccountKeyMaterial::new(account_name, account_key));
    }

    let account_name = key_values
        .remove(ACCOUNT_NAME)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| Error::missing_required_field(ACCOUNT_NAME))?;
    let account_key = key_values
        .remove(ACCOUNT_KEY)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| Error::missing_required_field(ACCOUNT_KEY))?;

    Ok(AccountKeyMaterial::new(account_name, account_key))
}

/// Field without `=` may be a pasted secret, only keep its head.
fn redact_field(field: &str) -> String {
    let head: String = field.chars().take(12).collect();
    if head.len() < field.len() {
        format!("{head}...")
    } else {
        head
    }
}
