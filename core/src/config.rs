//! INI configuration accessor for the API base URL.
//!
//! The file lives at `config.ini` in the workspace root unless
//! `PLACEHOLDER_CONFIG` points elsewhere. Lookups fail fast: a missing file,
//! section or key is an error, never a fallback value.

use std::path::{Path, PathBuf};

use ini::{Ini, ParseOption};
use tracing::{debug, info};

use crate::error::ConfigError;

/// Section holding the JSONPlaceholder settings.
pub const DEFAULT_SECTION: &str = "JSONPlaceholderAPI";

/// Key holding the base URL inside a section.
pub const BASE_URL_KEY: &str = "BASE_URL";

/// Section whose keys every other section inherits.
pub const INHERITED_SECTION: &str = "DEFAULT";

/// Environment variable that overrides the configuration file path.
pub const CONFIG_PATH_ENV: &str = "PLACEHOLDER_CONFIG";

/// Path of the configuration file, relative to the source tree.
pub fn default_config_path() -> PathBuf {
    match std::env::var_os(CONFIG_PATH_ENV) {
        Some(path) => PathBuf::from(path),
        None => Path::new(env!("CARGO_MANIFEST_DIR")).join("../config.ini"),
    }
}

/// Read and parse the configuration file at `path`.
///
/// Backslashes are kept literally; values are not escape-decoded.
pub fn load_config(path: impl AsRef<Path>) -> Result<Ini, ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ConfigError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    info!("Loading config from {}", path.display());
    let options = ParseOption {
        enabled_escape: false,
        ..Default::default()
    };
    Ini::load_from_file_opt(path, options).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// `BASE_URL` from `section` of the default configuration file.
pub fn extract_base_url(section: &str) -> Result<String, ConfigError> {
    extract_base_url_from(default_config_path(), section)
}

/// `BASE_URL` from `section` of the configuration file at `path`.
///
/// Surrounding quotes and a trailing `/` are stripped from the value.
pub fn extract_base_url_from(path: impl AsRef<Path>, section: &str) -> Result<String, ConfigError> {
    let config = load_config(path)?;
    let value = lookup(&config, section, BASE_URL_KEY)?;

    let url = value
        .trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .trim_end_matches('/');
    if url.is_empty() {
        return Err(ConfigError::EmptyValue {
            section: section.to_string(),
            key: BASE_URL_KEY.to_string(),
        });
    }

    debug!(section, base_url = url, "resolved base url");
    Ok(url.to_string())
}

/// Sections match exactly and must appear once; keys ignore ASCII case.
/// A key absent from `section` falls back to `[DEFAULT]`.
fn lookup<'a>(config: &'a Ini, section: &str, key: &str) -> Result<&'a str, ConfigError> {
    let mut matches = config.section_all(Some(section));
    let properties = matches.next();
    if matches.next().is_some() {
        return Err(ConfigError::DuplicateSection {
            section: section.to_string(),
        });
    }
    let properties = match properties {
        Some(properties) => properties,
        None if section == INHERITED_SECTION => {
            return Err(missing_key(section, key));
        }
        None => {
            return Err(ConfigError::MissingSection {
                section: section.to_string(),
            });
        }
    };

    let find = |properties: &'a ini::Properties| {
        properties
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v)
    };
    find(properties)
        .or_else(|| config.section(Some(INHERITED_SECTION)).and_then(find))
        .ok_or_else(|| missing_key(section, key))
}

fn missing_key(section: &str, key: &str) -> ConfigError {
    ConfigError::MissingKey {
        section: section.to_string(),
        key: key.to_string(),
    }
}
