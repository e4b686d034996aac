mod account_sas;
mod properties;
mod table_sas;

/// The well known development storage key, valid base64.
pub const ACCOUNT_KEY: &str =
    "Eby8vdM02xNOcqFlqUwJPLlmEtlCDXJ1OUzFT50uSRZ6IFsuFq2UVErCz4I6tq/K1SZFPTOtr/KBHBeksoGMGw==";

/// Connection string for `myaccount` signed with [`ACCOUNT_KEY`].
pub fn connection_string() -> String {
    let _ = env_logger::builder().is_test(true).try_init();

    format!(
        "DefaultEndpointsProtocol=https;AccountName=myaccount;AccountKey={ACCOUNT_KEY};EndpointSuffix=core.windows.net"
    )
}
