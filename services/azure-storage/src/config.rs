use std::collections::HashMap;
use std::env;

use log::debug;
use sassign_core::{Error, Result};

use crate::constants::*;
use crate::AccountKeyMaterial;

/// Config carries the sources of account key material.
#[derive(Clone, Default)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Config {
    /// `account_name` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AZURE_STORAGE_ACCOUNT`]
    pub account_name: Option<String>,
    /// `account_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AZURE_STORAGE_KEY`]
    pub account_key: Option<String>,
    /// `connection_string` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AZURE_STORAGE_CONNECTION_STRING`]
    ///
    /// Only used when `account_name` and `account_key` are not both set.
    pub connection_string: Option<String>,
}

impl Config {
    /// Load config from env.
    ///
    /// Values already set on the config are kept.
    pub fn from_env(mut self) -> Self {
        let envs = env::vars().collect::<HashMap<_, _>>();

        if self.account_name.is_none() {
            self.account_name = envs.get(AZURE_STORAGE_ACCOUNT).cloned();
        }

        if self.account_key.is_none() {
            self.account_key = envs.get(AZURE_STORAGE_KEY).cloned();
        }

        if self.connection_string.is_none() {
            self.connection_string = envs.get(AZURE_STORAGE_CONNECTION_STRING).cloned();
        }

        self
    }

    /// Resolve the account key material for one signing operation.
    pub fn key_material(&self) -> Result<AccountKeyMaterial> {
        if let (Some(name), Some(key)) = (&self.account_name, &self.account_key) {
            debug!("using account key material from config fields");
            return Ok(AccountKeyMaterial::new(name, key));
        }

        if let Some(conn_str) = &self.connection_string {
            debug!("using account key material from connection string");
            return AccountKeyMaterial::from_connection_string(conn_str);
        }

        Err(Error::missing_required_field(if self.account_name.is_none() {
            "account_name"
        } else {
            "account_key"
        }))
    }
}
