#![deny(unsafe_code)]
#![deny(unused_must_use)]
#![deny(unused_features)]
#![warn(unused_crate_dependencies)]

pub mod args;
pub mod file;

use std::net::SocketAddr;

use error_stack::{Result, ResultExt};

use self::file::ConfigFile;
pub use self::file::ConfigFileError;

#[derive(thiserror::Error, Debug)]
pub enum GetConfigError {
    #[error("Get working directory error")]
    GetWorkingDir,
    #[error("File loading failed")]
    LoadFileError,
}

#[derive(Debug, Clone)]
pub struct Config {
    file: ConfigFile,
    /// Semver version of the backend.
    backend_semver_version: String,
}

impl Config {
    pub fn app_name(&self) -> &str {
        self.file
            .general
            .app_name
            .as_deref()
            .unwrap_or(file::DEFAULT_APP_NAME)
    }

    /// Debug mode enables Swagger UI for the public API.
    pub fn debug_mode(&self) -> bool {
        self.file.general.debug.unwrap_or_default()
    }

    pub fn socket_addr(&self) -> SocketAddr {
        self.file.socket.public_api
    }

    /// Reserved for a future persistent store. The server uses the
    /// in-memory store when this is None.
    pub fn database_url(&self) -> Option<&str> {
        self.file.data.as_ref().map(|data| data.database_url.as_str())
    }

    pub fn backend_semver_version(&self) -> &str {
        &self.backend_semver_version
    }

    /// Config without a config file. Used for API doc JSON generation
    /// and tests.
    pub fn minimal_config(backend_semver_version: String) -> Self {
        Self {
            file: ConfigFile::minimal_config_for_api_doc_json(),
            backend_semver_version,
        }
    }
}

/// Read config file from the config directory given as an argument or
/// from the current directory.
pub fn get_config(
    args_config: args::ArgsConfig,
    backend_semver_version: String,
) -> Result<Config, GetConfigError> {
    let dir = match args_config.config_dir {
        Some(dir) => dir,
        None => std::env::current_dir().change_context(GetConfigError::GetWorkingDir)?,
    };
    let file = ConfigFile::load(dir).change_context(GetConfigError::LoadFileError)?;

    Ok(Config {
        file,
        backend_semver_version,
    })
}
