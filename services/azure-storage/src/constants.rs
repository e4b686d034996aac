// Connection string keys.
pub const ACCOUNT_NAME: &str = "AccountName";
pub const ACCOUNT_KEY: &str = "AccountKey";
pub const USE_DEVELOPMENT_STORAGE: &str = "UseDevelopmentStorage";

// Azurite defaults.
pub const DEVELOPMENT_STORAGE_ACCOUNT_NAME: &str = "devstoreaccount1";
pub const DEVELOPMENT_STORAGE_ACCOUNT_KEY: &str =
    "Eby8vdM02xNOcqFlqUwJPLlmEtlCDXJ1OUzFT50uSRZ6IFsuFq2UVErCz4I6tq/K1SZFPTOtr/KBHBeksoGMGw==";

// Env values.
pub const AZURE_STORAGE_CONNECTION_STRING: &str = "AZURE_STORAGE_CONNECTION_STRING";
pub const AZURE_STORAGE_ACCOUNT: &str = "AZURE_STORAGE_ACCOUNT";
pub const AZURE_STORAGE_KEY: &str = "AZURE_STORAGE_KEY";

// Signed versions used when the request doesn't specify one.
pub const ACCOUNT_SAS_VERSION: &str = "2017-07-29";
pub const CONTAINER_SAS_VERSION: &str = "2018-11-09";
pub const TABLE_SAS_VERSION: &str = "2013-08-15";

/// First signed version whose account string to sign carries the encryption scope.
pub const ENCRYPTION_SCOPE_VERSION: &str = "2020-12-06";

// Query parameters.
pub const SIGNED_VERSION: &str = "sv";
pub const SIGNED_SERVICES: &str = "ss";
pub const SIGNED_RESOURCE_TYPES: &str = "srt";
pub const SIGNED_RESOURCE: &str = "sr";
pub const SIGNED_PERMISSIONS: &str = "sp";
pub const SIGNED_START: &str = "st";
pub const SIGNED_EXPIRY: &str = "se";
pub const SIGNED_IP: &str = "sip";
pub const SIGNED_PROTOCOL: &str = "spr";
pub const SIGNED_IDENTIFIER: &str = "si";
pub const CACHE_CONTROL: &str = "rscc";
pub const CONTENT_DISPOSITION: &str = "rscd";
pub const CONTENT_ENCODING: &str = "rsce";
pub const CONTENT_LANGUAGE: &str = "rscl";
pub const CONTENT_TYPE: &str = "rsct";
pub const TABLE_NAME: &str = "tn";
pub const START_PARTITION_KEY: &str = "spk";
pub const START_ROW_KEY: &str = "srk";
pub const END_PARTITION_KEY: &str = "epk";
pub const END_ROW_KEY: &str = "erk";

/// Signed resource of a container SAS.
pub const CONTAINER_RESOURCE: &str = "c";
