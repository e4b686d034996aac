use pretty_assertions::assert_eq;
use sassign_azure_storage::{generate, AccountSas, PermissionSet};
use sassign_core::{compute_signature, ErrorKind};

use super::{connection_string, ACCOUNT_KEY};

fn full_access() -> AccountSas {
    let permissions = ["read", "write", "delete", "list", "add", "create", "update", "process"]
        .into_iter()
        .map(|name| (name, true))
        .collect();
    let services = ["blob", "queue", "table", "file"]
        .into_iter()
        .map(|name| (name, true))
        .collect();
    let resource_types = ["service", "container", "object"]
        .into_iter()
        .map(|name| (name, true))
        .collect();

    AccountSas::new()
        .with_permissions(permissions)
        .with_services(services)
        .with_resource_types(resource_types)
        .with_start("2018-03-21T00:00:00Z")
        .with_expiry("2020-03-21T00:00:00Z")
}

#[test]
fn test_account_sas_token() {
    let token = generate(&connection_string(), &full_access()).expect("sign must succeed");

    assert_eq!(
        token.as_str(),
        "sv=2017-07-29&ss=bqtf&srt=sco&sp=rwdlacup&se=2020-03-21T00%3A00%3A00Z&st=2018-03-21T00%3A00%3A00Z&spr=https&sig=UZjwxnY6zIP8kxVOr9csSfzmkiqxOxGtUx9w0Ww8oo8%3D"
    );
    assert_eq!(
        token.id(),
        "0f0377d8c19957745954d35dfdb62f2509caf4805d9fb5ed0046eb90c0fba748"
    );
    assert_eq!(token.get("sp").as_deref(), Some("rwdlacup"));
    assert_eq!(token.get("sip"), None);
}

#[test]
fn test_account_sas_token_with_encryption_scope_version() {
    let sas = AccountSas::new()
        .with_permissions(PermissionSet::new().with("list", true).with("read", true))
        .with_services(PermissionSet::new().with("blob", true))
        .with_resource_types(
            PermissionSet::new()
                .with("object", true)
                .with("container", true)
                .with("service", false),
        )
        .with_start("2021-01-01T00:00:00Z")
        .with_expiry("2021-01-02T00:00:00Z")
        .with_https_only(false)
        .with_ip_addresses("168.1.5.60-168.1.5.70")
        .with_signed_version("2021-06-08");

    let token = generate(&connection_string(), &sas).expect("sign must succeed");

    assert_eq!(
        token.as_str(),
        "sv=2021-06-08&ss=b&srt=co&sp=rl&se=2021-01-02T00%3A00%3A00Z&st=2021-01-01T00%3A00%3A00Z&spr=https%2Chttp&sip=168.1.5.60-168.1.5.70&sig=imE%2FxWtD9CTmRb4lM3C%2FHd026ZLKDEbG0rkQG8P12vU%3D"
    );

    // The signature covers the trailing encryption scope field.
    let expected = compute_signature(
        "myaccount\nrl\nb\nco\n2021-01-01T00:00:00Z\n2021-01-02T00:00:00Z\n168.1.5.60-168.1.5.70\nhttps,http\n2021-06-08\n\n",
        ACCOUNT_KEY,
    )
    .expect("signature must be computed");
    assert_eq!(token.get("sig"), Some(expected));
}

#[test]
fn test_account_sas_from_json() {
    let sas: AccountSas = serde_json::from_str(
        r#"{
            "start": "2018-03-21T00:00:00Z",
            "expiry": "2020-03-21T00:00:00Z",
            "https_only": true,
            "resource_types": {"object": true, "service": true, "container": true},
            "services": {"file": true, "table": true, "queue": true, "blob": true},
            "permissions": {
                "process": true, "update": true, "create": true, "add": true,
                "list": true, "delete": true, "write": true, "read": true,
                "tag": true
            }
        }"#,
    )
    .expect("must deserialize");

    let token = generate(&connection_string(), &sas).expect("sign must succeed");
    let expected = generate(&connection_string(), &full_access()).expect("sign must succeed");
    assert_eq!(token, expected);
}

#[test]
fn test_account_sas_missing_services() {
    let sas = AccountSas::new()
        .with_permissions(PermissionSet::new().with("read", true))
        .with_resource_types(PermissionSet::new().with("object", true))
        .with_start("2018-03-21T00:00:00Z")
        .with_expiry("2020-03-21T00:00:00Z");

    let err = generate(&connection_string(), &sas).expect_err("services are required");
    assert_eq!(err.kind(), ErrorKind::MissingRequiredField);
}

#[test]
fn test_account_sas_invalid_key() {
    let err = generate("AccountName=myaccount;AccountKey=not*base64", &full_access())
        .expect_err("key must be rejected");
    assert_eq!(err.kind(), ErrorKind::InvalidKeyEncoding);
}

#[test]
fn test_account_sas_malformed_connection_string() {
    let err = generate("AccountName=myaccount;AccountKey", &full_access())
        .expect_err("connection string must be rejected");
    assert_eq!(err.kind(), ErrorKind::MalformedConnectionString);
}
