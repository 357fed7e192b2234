use std::io::Write;
use std::time::Duration;

use alloy_primitives::U256;
use listing_sniper::error::{ConfigError, Error};
use listing_sniper::infrastructure::config::logging::LogFormat;
use listing_sniper::infrastructure::config::settings::Config;
use tempfile::NamedTempFile;

fn write_temp_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn full_config_file_is_loaded() {
    let toml = r#"
dry_run = true

[marketplace]
api_url = "https://testnets-api.opensea.io/api/v2"
chain = "sepolia"
collection = "some-collection"
token_id = "17"

[marketplace.http]
timeout_ms = 2000
connect_timeout_ms = 1000

[chain]
rpc_url = "http://127.0.0.1:8545"
receipt_timeout_secs = 60

[strategy]
address = "0x1111111111111111111111111111111111111111"

[gas]
limit = 600000
price_gwei = 25

[logging]
level = "debug"
format = "json"
"#;

    let file = write_temp_config(toml);
    let config = Config::load(file.path()).expect("valid config");

    assert!(config.dry_run);
    assert_eq!(config.marketplace.chain, "sepolia");
    assert_eq!(config.marketplace.collection, "some-collection");
    assert_eq!(config.expected_token_id().unwrap(), U256::from(17u64));
    assert_eq!(config.marketplace.http.timeout_ms, 2000);
    assert_eq!(config.receipt_timeout(), Duration::from_secs(60));
    assert_eq!(config.gas.policy().limit, 600_000);
    assert_eq!(config.gas.policy().price_wei, 25_000_000_000);
    assert_eq!(config.logging.format, LogFormat::Json);
}

#[test]
fn missing_default_path_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = Config::load_or_default(dir.path().join("config.toml")).expect("defaults");

    assert_eq!(config.marketplace.collection, "boredapeyachtclub");
    assert_eq!(config.marketplace.token_id, "5077");
    assert_eq!(
        config.strategy.address,
        "0x6BCba7Cd81a5F12c10Ca1BF9B36761CC382658E8"
    );
}

#[test]
fn explicit_missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let result = Config::load(dir.path().join("absent.toml"));
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::ReadFile(_)))
    ));
}

#[test]
fn config_rejects_unknown_log_format() {
    let file = write_temp_config("[logging]\nformat = \"xml\"\n");
    let result = Config::load(file.path());
    assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
}

#[test]
fn config_rejects_zero_receipt_timeout() {
    let result = Config::parse_toml_with_env("[chain]\nreceipt_timeout_secs = 0\n", &no_env);
    match result {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "receipt_timeout_secs",
            ..
        })) => {}
        Err(err) => panic!("Expected invalid receipt timeout, got {err}"),
        Ok(_) => panic!("Expected zero receipt timeout to be rejected"),
    }
}

#[test]
fn config_rejects_malformed_rpc_url() {
    let result = Config::parse_toml_with_env("[chain]\nrpc_url = \"not a url\"\n", &no_env);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidValue {
            field: "rpc_url",
            ..
        }))
    ));
}

#[test]
fn rpc_url_env_overrides_file() {
    let env = |key: &str| (key == "RPC_URL").then(|| "http://10.0.0.1:8545".to_string());
    let config =
        Config::parse_toml_with_env("[chain]\nrpc_url = \"http://127.0.0.1:8545\"\n", &env)
            .unwrap();
    assert_eq!(config.rpc_url().unwrap().as_str(), "http://10.0.0.1:8545/");
}

#[test]
fn blank_keystore_password_file_is_rejected() {
    let password = write_temp_config("\n");
    let path = password.path().to_string_lossy().to_string();
    let env = move |key: &str| {
        (key == "LISTING_SNIPER_KEYSTORE_PASSWORD_FILE").then(|| path.clone())
    };

    let result =
        Config::parse_toml_with_env("[wallet]\nkeystore_path = \"missing.json\"\n", &env);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::MissingField {
            field: "LISTING_SNIPER_KEYSTORE_PASSWORD_FILE"
        }))
    ));
}

#[test]
fn unreadable_keystore_is_invalid() {
    let env = |key: &str| (key == "LISTING_SNIPER_KEYSTORE_PASSWORD").then(|| "pw".to_string());
    let result =
        Config::parse_toml_with_env("[wallet]\nkeystore_path = \"/nonexistent/ks.json\"\n", &env);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidValue {
            field: "keystore_path",
            ..
        }))
    ));
}
