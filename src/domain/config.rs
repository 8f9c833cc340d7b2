use std::{io, path::Path};

use serde::{Deserialize, Serialize};

/// Configuration for a registry session.
///
/// None of these settings affect the directory itself. They control how the
/// session in front of it behaves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// Username required to open the admin dashboard.
    admin_username: String,

    /// Password required to open the admin dashboard.
    admin_password: String,

    /// Whether coloured output may be used when the terminal supports it.
    pub colors: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            admin_username: default_admin_username(),
            admin_password: default_admin_password(),
            colors: true,
        }
    }
}

/// Errors raised while reading or writing a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file: {0}")]
    Read(#[source] io::Error),

    /// The file was read but is not a valid configuration.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be serialized.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The file could not be written.
    #[error("failed to write config file: {0}")]
    Write(#[source] io::Error),
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Read)?;
        Ok(toml::from_str(&content)?)
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(ConfigError::Write)
    }

    /// Sets the admin credentials.
    pub fn set_admin_credentials(
        &mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) {
        self.admin_username = username.into();
        self.admin_password = password.into();
    }

    /// The username required for the admin dashboard.
    #[must_use]
    pub fn admin_username(&self) -> &str {
        &self.admin_username
    }

    /// Checks a username and password against the admin credentials.
    ///
    /// Both must match exactly; unlike names, credentials are case-sensitive.
    #[must_use]
    pub fn credentials_match(&self, username: &str, password: &str) -> bool {
        self.admin_username == username && self.admin_password == password
    }
}

fn default_admin_username() -> String {
    "admin".to_string()
}

fn default_admin_password() -> String {
    "admin123".to_string()
}

const fn default_colors() -> bool {
    true
}

/// The serialized versions of the configuration.
/// This allows the file format and the domain type to change independently.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_admin_username")]
        admin_username: String,

        #[serde(default = "default_admin_password")]
        admin_password: String,

        #[serde(default = "default_colors")]
        colors: bool,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                admin_username,
                admin_password,
                colors,
            } => Self {
                admin_username,
                admin_password,
                colors,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            admin_username: config.admin_username,
            admin_password: config.admin_password,
            colors: config.colors,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn load_reads_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            b"_version = \"1\"\nadmin_username = \"root\"\nadmin_password = \"hunter2\"\ncolors = false\n",
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.admin_username(), "root");
        assert!(config.credentials_match("root", "hunter2"));
        assert!(!config.colors);
    }

    #[test]
    fn load_missing_file_returns_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.toml");

        let error = Config::load(&missing).unwrap_err();
        assert!(matches!(error, ConfigError::Read(_)));
        assert!(error.to_string().starts_with("failed to read config file:"));
    }

    #[test]
    fn load_invalid_toml_returns_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"_version = \"1\"\ncolors = \"sometimes\"\n")
            .unwrap();

        let error = Config::load(file.path()).unwrap_err();
        assert!(matches!(error, ConfigError::Parse(_)));
    }

    #[test]
    fn empty_file_returns_default() {
        let expected = Config::default();
        let actual: Config = toml::from_str(r#"_version = "1""#).unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn save_then_load_preserves_credentials() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("registry.toml");

        let mut config = Config::default();
        config.set_admin_credentials("dean", "s3cret");
        config.save(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn default_credentials_are_case_sensitive() {
        let config = Config::default();

        assert!(config.credentials_match("admin", "admin123"));
        assert!(!config.credentials_match("Admin", "admin123"));
        assert!(!config.credentials_match("admin", "ADMIN123"));
        assert!(!config.credentials_match("", ""));
    }
}
