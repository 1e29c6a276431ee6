use std::{
    io::Write,
    net::{Ipv4Addr, SocketAddr},
    path::Path,
};

use error_stack::{Report, Result, ResultExt};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "birthday_backend_config.toml";

pub const DEFAULT_APP_NAME: &str = "Birthday backend";

// Optional configs not in default file for safety:
// debug = false
//

pub const DEFAULT_CONFIG_FILE_TEXT: &str = r#"

[general]
app_name = "Birthday backend"
debug = true

[socket]
public_api = "127.0.0.1:3000"

# Reserved for a future persistent store. The in-memory store is
# used when this section is missing.
# [data]
# database_url = "sqlite://temp.db"

"#;

#[derive(thiserror::Error, Debug)]
pub enum ConfigFileError {
    #[error("Save config file failed")]
    Save,
    #[error("Save default")]
    SaveDefault,
    #[error("Not a directory")]
    NotDirectory,
    #[error("Load config file")]
    LoadConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub general: GeneralConfig,
    pub socket: SocketConfig,
    pub data: Option<DataConfig>,
}

impl ConfigFile {
    pub fn minimal_config_for_api_doc_json() -> Self {
        Self {
            general: GeneralConfig::default(),
            socket: SocketConfig {
                public_api: SocketAddr::from((Ipv4Addr::LOCALHOST, 0)),
            },
            data: None,
        }
    }

    pub fn load(dir: impl AsRef<Path>) -> Result<ConfigFile, ConfigFileError> {
        let config_string =
            ConfigFileUtils::load_string(dir, CONFIG_FILE_NAME, DEFAULT_CONFIG_FILE_TEXT)?;
        toml::from_str(&config_string).change_context(ConfigFileError::LoadConfig)
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub app_name: Option<String>,
    pub debug: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SocketConfig {
    pub public_api: SocketAddr,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataConfig {
    pub database_url: String,
}

pub struct ConfigFileUtils;

impl ConfigFileUtils {
    pub fn save_string(file_path: impl AsRef<Path>, text: &str) -> Result<(), ConfigFileError> {
        let mut file = std::fs::File::create(file_path).change_context(ConfigFileError::Save)?;
        file.write_all(text.as_bytes())
            .change_context(ConfigFileError::Save)?;
        Ok(())
    }

    /// Load config file contents. The default text is written to the file
    /// if it does not exist yet.
    pub fn load_string(
        dir: impl AsRef<Path>,
        file_name: &str,
        default: &str,
    ) -> Result<String, ConfigFileError> {
        if !dir.as_ref().is_dir() {
            return Err(Report::new(ConfigFileError::NotDirectory));
        }
        let file_path = dir.as_ref().join(file_name);
        if !file_path.exists() {
            Self::save_string(&file_path, default).change_context(ConfigFileError::SaveDefault)?;
        }

        std::fs::read_to_string(&file_path).change_context(ConfigFileError::LoadConfig)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_file_text_parses() {
        let config: ConfigFile = toml::from_str(DEFAULT_CONFIG_FILE_TEXT).unwrap();
        assert_eq!(config.general.app_name.as_deref(), Some(DEFAULT_APP_NAME));
        assert_eq!(config.general.debug, Some(true));
        assert_eq!(
            config.socket.public_api,
            SocketAddr::from((Ipv4Addr::LOCALHOST, 3000))
        );
        assert!(config.data.is_none());
    }

    #[test]
    fn general_section_is_optional() {
        let config: ConfigFile = toml::from_str(
            r#"
            [socket]
            public_api = "127.0.0.1:3000"
            "#,
        )
        .unwrap();
        assert!(config.general.app_name.is_none());
        assert!(config.general.debug.is_none());
    }
}
