//! Properties shared by every token family.

use pretty_assertions::assert_eq;
use sassign_azure_storage::permission::{ACCOUNT_PERMISSIONS, CONTAINER_PERMISSIONS};
use sassign_azure_storage::{
    generate, AccountKeyMaterial, AccountSas, AccountSasFormat, ContainerSas, PermissionSet,
    TableSas,
};
use sassign_core::{compute_signature, BuildSas, SasToken, Signer};

use super::{connection_string, ACCOUNT_KEY};

fn account_sas(permissions: PermissionSet) -> AccountSas {
    AccountSas::new()
        .with_permissions(permissions)
        .with_services(PermissionSet::new().with("blob", true))
        .with_resource_types(PermissionSet::new().with("object", true))
        .with_start("2018-03-21T00:00:00Z")
        .with_expiry("2020-03-21T00:00:00Z")
}

fn container_sas() -> ContainerSas {
    ContainerSas::new("images")
        .with_permissions(PermissionSet::new().with("read", true))
        .with_start("2018-03-21T00:00:00Z")
        .with_expiry("2018-03-22T00:00:00Z")
}

fn table_sas() -> TableSas {
    TableSas::new("orders")
        .with_permissions(PermissionSet::new().with("read", true))
        .with_start("2019-01-01T00:00:00Z")
        .with_expiry("2019-01-02T00:00:00Z")
}

fn line_count(req: &impl BuildSas) -> usize {
    req.build("myaccount")
        .expect("build must succeed")
        .string_to_sign
        .split('\n')
        .count()
}

/// Recompute the signature from the built parts and compare it with the token.
fn assert_signature_round_trip(req: &impl BuildSas, token: &SasToken) {
    let parts = req.build("myaccount").expect("build must succeed");
    let expected =
        compute_signature(&parts.string_to_sign, ACCOUNT_KEY).expect("signature must be computed");

    assert_eq!(token.get("sig"), Some(expected));
}

#[test]
fn test_determinism() {
    let sas = account_sas(PermissionSet::new().with("read", true));

    let first = generate(&connection_string(), &sas).expect("sign must succeed");
    let second = generate(&connection_string(), &sas).expect("sign must succeed");
    let third = Signer::new(AccountKeyMaterial::new("myaccount", ACCOUNT_KEY))
        .sign(&sas)
        .expect("sign must succeed");

    assert_eq!(first, second);
    assert_eq!(first, third);
    assert_eq!(first.id(), third.id());
}

#[test]
fn test_permission_order_invariance() {
    let names = ["read", "write", "delete", "list", "add", "create", "update", "process"];

    let forward: PermissionSet = names.iter().map(|name| (*name, true)).collect();
    let backward: PermissionSet = names.iter().rev().map(|name| (*name, true)).collect();
    let mut interleaved = PermissionSet::new();
    for name in names.iter().step_by(2).chain(names.iter().skip(1).step_by(2)) {
        interleaved.set(*name, true);
    }

    for set in [&forward, &backward, &interleaved] {
        assert_eq!(set.encode(ACCOUNT_PERMISSIONS), "rwdlacup");
    }

    let a = generate(&connection_string(), &account_sas(forward)).expect("sign must succeed");
    let b = generate(&connection_string(), &account_sas(backward)).expect("sign must succeed");
    assert_eq!(a, b);
}

#[test]
fn test_empty_permission_set() {
    let nothing = PermissionSet::new()
        .with("read", false)
        .with("write", false)
        .with("list", false);
    assert_eq!(nothing.encode(CONTAINER_PERMISSIONS), "");

    let token = generate(&connection_string(), &account_sas(nothing)).expect("sign must succeed");
    assert_eq!(token.get("sp"), None);
}

#[test]
fn test_canonical_field_completeness() {
    let empty = PermissionSet::new();

    assert_eq!(
        line_count(&account_sas(empty.clone())),
        AccountSasFormat::Legacy.field_count()
    );
    assert_eq!(line_count(&account_sas(empty.clone())), 10);
    assert_eq!(
        line_count(&account_sas(empty).with_signed_version("2020-12-06")),
        AccountSasFormat::EncryptionScope.field_count()
    );
    assert_eq!(line_count(&container_sas()), 15);
    assert_eq!(
        line_count(
            &container_sas()
                .with_signed_identifier("policy-1")
                .with_content_type("text/plain")
        ),
        15
    );
    assert_eq!(line_count(&table_sas()), 9);
    assert_eq!(line_count(&table_sas().with_end_row_key("z")), 9);
}

#[test]
fn test_serialization_asymmetry() {
    let sas = container_sas();
    let parts = sas.build("myaccount").expect("build must succeed");
    let token = generate(&connection_string(), &sas).expect("sign must succeed");

    let empty_fields: Vec<_> = parts
        .query
        .iter()
        .filter(|(_, v)| v.is_empty())
        .map(|(k, _)| *k)
        .collect();
    assert_eq!(
        empty_fields,
        vec!["sip", "si", "rscc", "rscd", "rsce", "rscl", "rsct"]
    );

    for key in empty_fields {
        assert!(
            token.pairs().all(|(k, _)| k != key),
            "{key} must not be serialized"
        );
    }
}

#[test]
fn test_signature_round_trip() {
    let account = account_sas(PermissionSet::new().with("read", true));
    let container = container_sas().with_content_language("en-US");
    let table = table_sas().with_start_partition_key("a");

    assert_signature_round_trip(
        &account,
        &generate(&connection_string(), &account).expect("sign must succeed"),
    );
    assert_signature_round_trip(
        &container,
        &generate(&connection_string(), &container).expect("sign must succeed"),
    );
    assert_signature_round_trip(
        &table,
        &generate(&connection_string(), &table).expect("sign must succeed"),
    );
}

#[test]
fn test_different_keys_sign_differently() {
    let sas = container_sas();

    let a = generate("AccountName=foo;AccountKey=YmFy", &sas).expect("sign must succeed");
    let b = generate("AccountName=foo;AccountKey=Zm9v", &sas).expect("sign must succeed");

    let (sig_a, sig_b) = (a.get("sig"), b.get("sig"));
    assert!(sig_a.as_deref().is_some_and(|s| !s.is_empty()));
    assert!(sig_b.as_deref().is_some_and(|s| !s.is_empty()));
    assert_ne!(sig_a, sig_b);
}
