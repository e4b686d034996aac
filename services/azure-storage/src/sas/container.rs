use sassign_core::time::{format_iso8601, DateTime};
use sassign_core::{BuildSas, Error, Result, SasParts};
use serde::Deserialize;

use super::{optional, required, required_permissions, Protocol};
use crate::constants::*;
use crate::permission::{PermissionSet, CONTAINER_PERMISSIONS};

/// Container SAS delegates access to one blob container.
///
/// Response headers returned by the service for requests made with this
/// token can be overridden, each override is signed.
///
/// - [Create a service SAS](https://learn.microsoft.com/en-us/rest/api/storageservices/create-service-sas)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContainerSas {
    container_name: Option<String>,
    permissions: Option<PermissionSet>,
    start: Option<String>,
    expiry: Option<String>,
    https_only: bool,
    ip_address: Option<String>,
    signed_identifier: Option<String>,
    cache_control: Option<String>,
    content_disposition: Option<String>,
    content_encoding: Option<String>,
    content_language: Option<String>,
    content_type: Option<String>,
    signed_version: String,
}

impl Default for ContainerSas {
    fn default() -> Self {
        Self {
            container_name: None,
            permissions: None,
            start: None,
            expiry: None,
            https_only: true,
            ip_address: None,
            signed_identifier: None,
            cache_control: None,
            content_disposition: None,
            content_encoding: None,
            content_language: None,
            content_type: None,
            signed_version: CONTAINER_SAS_VERSION.to_string(),
        }
    }
}

impl ContainerSas {
    /// Create a container SAS request for the given container.
    pub fn new(container_name: impl Into<String>) -> Self {
        Self {
            container_name: Some(container_name.into()),
            ..Default::default()
        }
    }

    /// Set the permissions, encoded with [`CONTAINER_PERMISSIONS`].
    pub fn with_permissions(mut self, permissions: PermissionSet) -> Self {
        self.permissions = Some(permissions);
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

    /// Restrict to an IP address or range.
    pub fn with_ip_address(mut self, ip_address: impl Into<String>) -> Self {
        self.ip_address = Some(ip_address.into());
        self
    }

    /// Reference a stored access policy on the container.
    pub fn with_signed_identifier(mut self, id: impl Into<String>) -> Self {
        self.signed_identifier = Some(id.into());
        self
    }

    /// Override the `Cache-Control` response header.
    pub fn with_cache_control(mut self, v: impl Into<String>) -> Self {
        self.cache_control = Some(v.into());
        self
    }

    /// Override the `Content-Disposition` response header.
    pub fn with_content_disposition(mut self, v: impl Into<String>) -> Self {
        self.content_disposition = Some(v.into());
        self
    }

    /// Override the `Content-Encoding` response header.
    pub fn with_content_encoding(mut self, v: impl Into<String>) -> Self {
        self.content_encoding = Some(v.into());
        self
    }

    /// Override the `Content-Language` response header.
    pub fn with_content_language(mut self, v: impl Into<String>) -> Self {
        self.content_language = Some(v.into());
        self
    }

    /// Override the `Content-Type` response header.
    pub fn with_content_type(mut self, v: impl Into<String>) -> Self {
        self.content_type = Some(v.into());
        self
    }

    /// Set the signed version.
    pub fn with_signed_version(mut self, version: impl Into<String>) -> Self {
        self.signed_version = version.into();
        self
    }
}

impl BuildSas for ContainerSas {
    // Azure documentation: https://learn.microsoft.com/en-us/rest/api/storageservices/create-service-sas#version-2018-11-09-and-later
    fn build(&self, account_name: &str) -> Result<SasParts> {
        let container = required(&self.container_name, "container_name")?;
        let permissions =
            required_permissions(&self.permissions, "permissions", CONTAINER_PERMISSIONS)?;
        let start = required(&self.start, "start")?;
        let expiry = required(&self.expiry, "expiry")?;
        if self.signed_version.is_empty() {
            return Err(Error::missing_required_field("signed_version"));
        }

        let resource = format!("/blob/{account_name}/{container}");
        let protocol = Protocol::from_https_only(self.https_only).to_string();

        let string_to_sign = [
            permissions.as_str(),
            start,
            expiry,
            resource.as_str(),
            optional(&self.signed_identifier),
            optional(&self.ip_address),
            protocol.as_str(),
            self.signed_version.as_str(),
            CONTAINER_RESOURCE,
            // Snapshot time, never set for a container resource.
            "",
            optional(&self.cache_control),
            optional(&self.content_disposition),
            optional(&self.content_encoding),
            optional(&self.content_language),
            optional(&self.content_type),
        ]
        .join("\n");

        let query = [
            (SIGNED_VERSION, self.signed_version.as_str()),
            (SIGNED_RESOURCE, CONTAINER_RESOURCE),
            (SIGNED_START, start),
            (SIGNED_EXPIRY, expiry),
            (SIGNED_PERMISSIONS, permissions.as_str()),
            (SIGNED_IP, optional(&self.ip_address)),
            (SIGNED_PROTOCOL, protocol.as_str()),
            (SIGNED_IDENTIFIER, optional(&self.signed_identifier)),
            (CACHE_CONTROL, optional(&self.cache_control)),
            (CONTENT_DISPOSITION, optional(&self.content_disposition)),
            (CONTENT_ENCODING, optional(&self.content_encoding)),
            (CONTENT_LANGUAGE, optional(&self.content_language)),
            (CONTENT_TYPE, optional(&self.content_type)),
        ]
        .into_iter()
        .map(|(k, v)| (k, v.to_string()))
        .collect();

        Ok(SasParts {
            string_to_sign,
            query,
        })
    }
}
