use jquants_rs::{ConfigLoader, JqClient, JqError};
use std::path::Path;

fn write_toml(dir: &Path, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn later_sources_override_earlier_ones() {
    let dir = tempfile::tempdir().unwrap();
    let user = write_toml(
        dir.path(),
        "user.toml",
        r#"
[jquants-api-client]
mail_address = "user-file@example.com"
password = "from-user-file"
refresh_token = "rt-user-file"
"#,
    );
    let local = write_toml(
        dir.path(),
        "local.toml",
        r#"
[jquants-api-client]
password = "from-local-file"
"#,
    );

    let settings = ConfigLoader::empty()
        .file(&user)
        .file(&local)
        .env_var("JQUANTS_API_REFRESH_TOKEN", "rt-env")
        .load()
        .unwrap();

    assert_eq!(settings.mail_address.as_deref(), Some("user-file@example.com"));
    assert_eq!(settings.password.as_deref(), Some("from-local-file"));
    assert_eq!(settings.refresh_token.as_deref(), Some("rt-env"));
}

#[test]
fn config_file_variable_is_read_after_the_listed_files() {
    let dir = tempfile::tempdir().unwrap();
    let listed = write_toml(
        dir.path(),
        "listed.toml",
        "[jquants-api-client]\nmail_address = \"listed@example.com\"\n",
    );
    let named = write_toml(
        dir.path(),
        "named.toml",
        "[jquants-api-client]\nmail_address = \"named@example.com\"\n",
    );

    let settings = ConfigLoader::empty()
        .file(&listed)
        .env_var("JQUANTS_API_CLIENT_CONFIG_FILE", named.to_string_lossy())
        .load()
        .unwrap();

    assert_eq!(settings.mail_address.as_deref(), Some("named@example.com"));
}

#[test]
fn builder_arguments_win_over_every_source() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_toml(
        dir.path(),
        "jquants-api.toml",
        "[jquants-api-client]\nmail_address = \"file@example.com\"\npassword = \"file\"\n",
    );

    let client = JqClient::builder()
        .config_loader(
            ConfigLoader::empty()
                .file(&file)
                .env_var("JQUANTS_API_PASSWORD", "env"),
        )
        .mail_address("explicit@example.com")
        .build()
        .unwrap();

    let creds = client.credentials();
    assert_eq!(creds.mail_address(), Some("explicit@example.com"));
    assert_eq!(creds.password(), Some("env"));
    assert_eq!(creds.refresh_token(), None);
}

#[test]
fn missing_files_and_foreign_tables_contribute_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let foreign = write_toml(dir.path(), "other.toml", "[some-other-tool]\nkey = 1\n");

    let settings = ConfigLoader::empty()
        .file(dir.path().join("does-not-exist.toml"))
        .file(&foreign)
        .load()
        .unwrap();

    assert_eq!(settings, jquants_rs::Settings::default());
}

#[test]
fn malformed_toml_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let bad = write_toml(dir.path(), "bad.toml", "[jquants-api-client\nmail_address = ");

    let err = ConfigLoader::empty().file(&bad).load().unwrap_err();
    assert!(matches!(err, JqError::Toml(_)), "got {err:?}");
}

#[test]
fn incomplete_credentials_fail_the_build() {
    let err = JqClient::builder()
        .config_loader(ConfigLoader::empty())
        .mail_address("user@example.com")
        .build()
        .unwrap_err();
    assert!(matches!(err, JqError::Config(_)), "got {err:?}");

    let err = JqClient::builder()
        .config_loader(ConfigLoader::empty())
        .mail_address("no-at-sign")
        .password("pw")
        .build()
        .unwrap_err();
    assert!(matches!(err, JqError::Config(_)), "got {err:?}");
}

#[test]
fn empty_values_count_as_absent() {
    let err = JqClient::builder()
        .config_loader(
            ConfigLoader::empty()
                .env_var("JQUANTS_API_MAIL_ADDRESS", "")
                .env_var("JQUANTS_API_PASSWORD", ""),
        )
        .refresh_token("")
        .build()
        .unwrap_err();
    assert!(matches!(err, JqError::Config(_)), "got {err:?}");
}
