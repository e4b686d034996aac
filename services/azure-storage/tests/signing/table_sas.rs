use pretty_assertions::assert_eq;
use sassign_azure_storage::{generate, PermissionSet, TableSas};
use sassign_core::ErrorKind;

use super::connection_string;

#[test]
fn test_table_sas_with_key_range() {
    let sas = TableSas::new("Orders")
        .with_permissions(PermissionSet::new().with("read", true))
        .with_start("2019-01-01T00:00:00Z")
        .with_expiry("2019-01-02T00:00:00Z")
        .with_start_partition_key("2019")
        .with_start_row_key("a")
        .with_end_partition_key("2020");

    let token = generate(&connection_string(), &sas).expect("sign must succeed");

    assert_eq!(
        token.as_str(),
        "sv=2013-08-15&tn=Orders&sp=r&st=2019-01-01T00%3A00%3A00Z&se=2019-01-02T00%3A00%3A00Z&spk=2019&srk=a&epk=2020&sig=I%2Fl9ag9lRYFJzdUpve%2Fye%2BiaJ%2F%2FF9n6d9XoX%2Fe%2B6aQ8%3D"
    );
    assert_eq!(
        token.id(),
        "62a7666a8cfd3db25ee7fb3c32f5b0a05116473a9b5ab402564e8dd0c020310c"
    );
    assert_eq!(token.get("erk"), None);
    assert_eq!(token.get("si"), None);
}

#[test]
fn test_table_sas_missing_table_name() {
    let sas: TableSas = serde_json::from_str(
        r#"{
            "start": "2019-01-01T00:00:00Z",
            "expiry": "2019-01-02T00:00:00Z",
            "permissions": {"read": true}
        }"#,
    )
    .expect("must deserialize");

    let err = generate(&connection_string(), &sas).expect_err("table name is required");
    assert_eq!(err.kind(), ErrorKind::MissingRequiredField);
    assert_eq!(err.message(), "required field `table_name` is missing");
}
