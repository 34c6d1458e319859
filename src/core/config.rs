//! Credential resolution from TOML files and the environment.
//!
//! Sources are applied in increasing precedence: every config file in the order it
//! was added, then the `JQUANTS_API_*` environment variables. Explicit values given
//! to [`crate::JqClientBuilder`] are applied last, on top of everything loaded here.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::core::JqError;

/// Environment variable holding the login mail address.
pub const ENV_MAIL_ADDRESS: &str = "JQUANTS_API_MAIL_ADDRESS";
/// Environment variable holding the login password.
pub const ENV_PASSWORD: &str = "JQUANTS_API_PASSWORD";
/// Environment variable holding a refresh token.
pub const ENV_REFRESH_TOKEN: &str = "JQUANTS_API_REFRESH_TOKEN";
/// Environment variable naming an extra config file.
pub const ENV_CONFIG_FILE: &str = "JQUANTS_API_CLIENT_CONFIG_FILE";

const COLAB_CONFIG_PATH: &str = "/content/drive/MyDrive/drive_ws/secret/jquants-api.toml";
const COLAB_MARKER: &str = "COLAB_RELEASE_TAG";
const USER_CONFIG_PATH: &str = ".jquants-api/jquants-api.toml";
const CURRENT_DIR_CONFIG: &str = "jquants-api.toml";

#[derive(Deserialize, Default)]
struct ConfigFile {
    #[serde(rename = "jquants-api-client")]
    client: Option<Settings>,
}

/// Raw, unvalidated credential settings. `None` and empty strings both mean "absent".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Login mail address.
    pub mail_address: Option<String>,
    /// Login password.
    pub password: Option<String>,
    /// A refresh token obtained elsewhere.
    pub refresh_token: Option<String>,
}

impl Settings {
    /// Overlays `other` on top of `self`: every value present in `other` wins.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            mail_address: non_empty(other.mail_address).or(self.mail_address),
            password: non_empty(other.password).or(self.password),
            refresh_token: non_empty(other.refresh_token).or(self.refresh_token),
        }
    }
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.is_empty())
}

/// Collects credential settings from config files and environment variables.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    files: Vec<PathBuf>,
    env: HashMap<String, String>,
}

impl ConfigLoader {
    /// A loader with no sources at all.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The standard sources: the notebook file (inside Colab only), the per-user file,
    /// `./jquants-api.toml`, the file named by `JQUANTS_API_CLIENT_CONFIG_FILE`, and
    /// the process environment.
    #[must_use]
    pub fn from_environment() -> Self {
        let env: HashMap<String, String> = std::env::vars().collect();
        let mut loader = Self::default();

        if env.contains_key(COLAB_MARKER) {
            loader = loader.file(COLAB_CONFIG_PATH);
        }
        if let Some(home) = env.get("HOME").or_else(|| env.get("USERPROFILE")) {
            loader = loader.file(Path::new(home).join(USER_CONFIG_PATH));
        }
        loader = loader.file(CURRENT_DIR_CONFIG);

        loader.env = env;
        loader
    }

    /// Appends a config file. Later files override earlier ones.
    #[must_use]
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.push(path.into());
        self
    }

    /// Sets one environment variable in the loader's snapshot.
    #[must_use]
    pub fn env_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// Merges every source into one [`Settings`].
    ///
    /// Missing files and files without a `[jquants-api-client]` table contribute nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read or is not valid TOML.
    pub fn load(&self) -> Result<Settings, JqError> {
        let mut settings = Settings::default();

        let env_file = self.env.get(ENV_CONFIG_FILE).map(PathBuf::from);
        for path in self.files.iter().chain(env_file.as_ref()) {
            settings = settings.merge(read_config(path)?);
        }

        Ok(settings.merge(Settings {
            mail_address: self.env.get(ENV_MAIL_ADDRESS).cloned(),
            password: self.env.get(ENV_PASSWORD).cloned(),
            refresh_token: self.env.get(ENV_REFRESH_TOKEN).cloned(),
        }))
    }
}

fn read_config(path: &Path) -> Result<Settings, JqError> {
    if !path.is_file() {
        return Ok(Settings::default());
    }
    let text = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = toml::from_str(&text)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(path = %path.display(), found = parsed.client.is_some(), "read config file");

    Ok(parsed.client.unwrap_or_default())
}

/// Validated credentials: a refresh token, or a mail address and password, or both.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    mail_address: Option<String>,
    password: Option<String>,
    refresh_token: Option<String>,
}

impl Credentials {
    /// Validates merged settings.
    ///
    /// # Errors
    ///
    /// Returns [`JqError::Config`] if neither a refresh token nor a complete mail
    /// address/password pair is present, or if the mail address lacks `@`.
    pub fn new(settings: Settings) -> Result<Self, JqError> {
        let mail_address = non_empty(settings.mail_address);
        let password = non_empty(settings.password);
        let refresh_token = non_empty(settings.refresh_token);

        if (mail_address.is_none() || password.is_none()) && refresh_token.is_none() {
            return Err(JqError::Config(
                "either mail_address/password or refresh_token is required".into(),
            ));
        }
        if let Some(mail) = &mail_address {
            validate_mail(mail)?;
        }

        Ok(Self {
            mail_address,
            password,
            refresh_token,
        })
    }

    /// The configured mail address, if any.
    #[must_use]
    pub fn mail_address(&self) -> Option<&str> {
        self.mail_address.as_deref()
    }

    /// The configured password, if any.
    #[must_use]
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// The refresh token supplied at construction, if any.
    #[must_use]
    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    /// Both login credentials, when both are present.
    pub(crate) fn login_pair(&self) -> Option<(&str, &str)> {
        self.mail_address().zip(self.password())
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("mail_address", &self.mail_address)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "***"))
            .finish()
    }
}

pub(crate) fn validate_mail(mail: &str) -> Result<(), JqError> {
    if mail.contains('@') {
        Ok(())
    } else {
        Err(JqError::Config("mail_address must contain '@'".into()))
    }
}
