use log::debug;
use sassign_core::time::{format_iso8601, DateTime};
use sassign_core::{BuildSas, Error, Result, SasParts};
use serde::Deserialize;

use super::{optional, required, required_permissions, Protocol};
use crate::constants::*;
use crate::permission::*;

/// Layout of the account SAS string to sign, keyed by signed version.
///
/// Later versions append fields after the signed version; adding a version
/// only touches this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountSasFormat {
    /// Versions before `2020-12-06`.
    Legacy,
    /// `2020-12-06` and later, with the signed encryption scope.
    EncryptionScope,
}

impl AccountSasFormat {
    /// Pick the format for a signed version like `2017-07-29`.
    pub fn for_version(version: &str) -> Self {
        // ISO dates order the same as strings.
        if version >= ENCRYPTION_SCOPE_VERSION {
            AccountSasFormat::EncryptionScope
        } else {
            AccountSasFormat::Legacy
        }
    }

    /// Fields following the signed version.
    ///
    /// The last empty field makes the string to sign end with a newline.
    fn trailing_fields(self) -> &'static [&'static str] {
        match self {
            AccountSasFormat::Legacy => &[""],
            // Encryption scope is not supported, so it's always empty.
            AccountSasFormat::EncryptionScope => &["", ""],
        }
    }

    /// Number of newline separated fields in the string to sign.
    pub fn field_count(self) -> usize {
        9 + self.trailing_fields().len()
    }
}

/// Account SAS grants access to services and resource types of a whole account.
///
/// - [Create an account SAS](https://learn.microsoft.com/en-us/rest/api/storageservices/create-account-sas)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AccountSas {
    permissions: Option<PermissionSet>,
    services: Option<PermissionSet>,
    resource_types: Option<PermissionSet>,
    start: Option<String>,
    expiry: Option<String>,
    https_only: bool,
    ip_addresses: Option<String>,
    signed_version: String,
}

impl Default for AccountSas {
    fn default() -> Self {
        Self {
            permissions: None,
            services: None,
            resource_types: None,
            start: None,
            expiry: None,
            https_only: true,
            ip_addresses: None,
            signed_version: ACCOUNT_SAS_VERSION.to_string(),
        }
    }
}

impl AccountSas {
    /// Create an account SAS request with default signed version and https only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the permissions, encoded with [`ACCOUNT_PERMISSIONS`].
    pub fn with_permissions(mut self, permissions: PermissionSet) -> Self {
        self.permissions = Some(permissions);
        self
    }

    /// Set the services, encoded with [`ACCOUNT_SERVICES`].
    pub fn with_services(mut self, services: PermissionSet) -> Self {
        self.services = Some(services);
        self
    }

    /// Set the resource types, encoded with [`ACCOUNT_RESOURCE_TYPES`].
    pub fn with_resource_types(mut self, resource_types: PermissionSet) -> Self {
        self.resource_types = Some(resource_types);
        self
    }

    /// Set the start time as an ISO-8601 string, signed verbatim.
    pub fn with_start(mut self, start: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self
    }

    /// Set the start time.
    pub fn with_start_time(self, start: DateTime) -> Self {
        self.with_start(format_iso8601(start))
    }

    /// Set the expiry time as an ISO-8601 string, signed verbatim.
    pub fn with_expiry(mut self, expiry: impl Into<String>) -> Self {
        self.expiry = Some(expiry.into());
        self
    }

    /// Set the expiry time.
    pub fn with_expiry_time(self, expiry: DateTime) -> Self {
        self.with_expiry(format_iso8601(expiry))
    }

    /// Allow plain HTTP besides HTTPS when `false`.
    pub fn with_https_only(mut self, https_only: bool) -> Self {
        self.https_only = https_only;
        self
    }

    /// Restrict to an IP address or a range like `168.1.5.60-168.1.5.70`.
    pub fn with_ip_addresses(mut self, ip_addresses: impl Into<String>) -> Self {
        self.ip_addresses = Some(ip_addresses.into());
        self
    }

    /// Set the signed version.
    pub fn with_signed_version(mut self, version: impl Into<String>) -> Self {
        self.signed_version = version.into();
        self
    }

    /// Canonical format used by this request.
    pub fn format(&self) -> AccountSasFormat {
        AccountSasFormat::for_version(&self.signed_version)
    }
}

impl BuildSas for AccountSas {
    // Azure documentation: https://learn.microsoft.com/en-us/rest/api/storageservices/create-account-sas#construct-the-signature-string
    fn build(&self, account_name: &str) -> Result<SasParts> {
        let permissions =
            required_permissions(&self.permissions, "permissions", ACCOUNT_PERMISSIONS)?;
        let services = required_permissions(&self.services, "services", ACCOUNT_SERVICES)?;
        let resource_types = required_permissions(
            &self.resource_types,
            "resource_types",
            ACCOUNT_RESOURCE_TYPES,
        )?;
        let start = required(&self.start, "start")?;
        let expiry = required(&self.expiry, "expiry")?;
        if self.signed_version.is_empty() {
            return Err(Error::missing_required_field("signed_version"));
        }
        let version = self.signed_version.as_str();
        let ip = optional(&self.ip_addresses);
        let protocol = Protocol::from_https_only(self.https_only).to_string();

        let format = self.format();
        debug!("account sas uses {format:?} format for version {version}");

        let mut fields: Vec<&str> = vec![
            account_name,
            permissions.as_str(),
            services.as_str(),
            resource_types.as_str(),
            start,
            expiry,
            ip,
            protocol.as_str(),
            version,
        ];
        fields.extend_from_slice(format.trailing_fields());

        Ok(SasParts {
            string_to_sign: fields.join("\n"),
            query: vec![
                (SIGNED_VERSION, version.to_string()),
                (SIGNED_SERVICES, services.clone()),
                (SIGNED_RESOURCE_TYPES, resource_types.clone()),
                (SIGNED_PERMISSIONS, permissions.clone()),
                (SIGNED_EXPIRY, expiry.to_string()),
                (SIGNED_START, start.to_string()),
                (SIGNED_PROTOCOL, protocol.clone()),
                (SIGNED_IP, ip.to_string()),
            ],
        })
    }
}
