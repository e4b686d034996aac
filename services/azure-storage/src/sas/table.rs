use sassign_core::time::{format_iso8601, DateTime};
use sassign_core::{BuildSas, Error, Result, SasParts};
use serde::Deserialize;

use super::{optional, required, required_permissions};
use crate::constants::*;
use crate::permission::{PermissionSet, TABLE_PERMISSIONS};

/// Table SAS delegates access to one table, optionally limited to a range of
/// partition and row keys.
///
/// The string to sign is the nine field layout: permissions, start, expiry,
/// canonicalized resource, signed identifier, then the four key bounds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TableSas {
    table_name: Option<String>,
    permissions: Option<PermissionSet>,
    start: Option<String>,
    expiry: Option<String>,
    signed_identifier: Option<String>,
    start_partition_key: Option<String>,
    start_row_key: Option<String>,
    end_partition_key: Option<String>,
    end_row_key: Option<String>,
    signed_version: String,
}

impl Default for TableSas {
    fn default() -> Self {
        Self {
            table_name: None,
            permissions: None,
            start: None,
            expiry: None,
            signed_identifier: None,
            start_partition_key: None,
            start_row_key: None,
            end_partition_key: None,
            end_row_key: None,
            signed_version: TABLE_SAS_VERSION.to_string(),
        }
    }
}

impl TableSas {
    /// Create a table SAS request for the given table.
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: Some(table_name.into()),
            ..Default::default()
        }
    }

    /// Set the permissions, encoded with [`TABLE_PERMISSIONS`].
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

    /// Reference a stored access policy on the table.
    pub fn with_signed_identifier(mut self, id: impl Into<String>) -> Self {
        self.signed_identifier = Some(id.into());
        self
    }

    /// Set the lowest accessible partition key.
    pub fn with_start_partition_key(mut self, key: impl Into<String>) -> Self {
        self.start_partition_key = Some(key.into());
        self
    }

    /// Set the lowest accessible row key within the start partition.
    pub fn with_start_row_key(mut self, key: impl Into<String>) -> Self {
        self.start_row_key = Some(key.into());
        self
    }

    /// Set the highest accessible partition key.
    pub fn with_end_partition_key(mut self, key: impl Into<String>) -> Self {
        self.end_partition_key = Some(key.into());
        self
    }

    /// Set the highest accessible row key within the end partition.
    pub fn with_end_row_key(mut self, key: impl Into<String>) -> Self {
        self.end_row_key = Some(key.into());
        self
    }

    /// Set the signed version.
    pub fn with_signed_version(mut self, version: impl Into<String>) -> Self {
        self.signed_version = version.into();
        self
    }
}

impl BuildSas for TableSas {
    fn build(&self, account_name: &str) -> Result<SasParts> {
        let table = required(&self.table_name, "table_name")?;
        let permissions =
            required_permissions(&self.permissions, "permissions", TABLE_PERMISSIONS)?;
        let start = required(&self.start, "start")?;
        let expiry = required(&self.expiry, "expiry")?;
        if self.signed_version.is_empty() {
            return Err(Error::missing_required_field("signed_version"));
        }

        // Table names are case-insensitive, the canonicalized resource is lowercase.
        let resource = format!("/table/{account_name}/{}", table.to_lowercase());

        let string_to_sign = [
            permissions.as_str(),
            start,
            expiry,
            resource.as_str(),
            optional(&self.signed_identifier),
            optional(&self.start_partition_key),
            optional(&self.start_row_key),
            optional(&self.end_partition_key),
            optional(&self.end_row_key),
        ]
        .join("\n");

        let query = [
            (SIGNED_VERSION, self.signed_version.as_str()),
            (TABLE_NAME, table),
            (SIGNED_PERMISSIONS, permissions.as_str()),
            (SIGNED_START, start),
            (SIGNED_EXPIRY, expiry),
            (SIGNED_IDENTIFIER, optional(&self.signed_identifier)),
            (START_PARTITION_KEY, optional(&self.start_partition_key)),
            (START_ROW_KEY, optional(&self.start_row_key)),
            (END_PARTITION_KEY, optional(&self.end_partition_key)),
            (END_ROW_KEY, optional(&self.end_row_key)),
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
