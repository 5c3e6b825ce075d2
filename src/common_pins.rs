//! Common PIN list management
//!
//! Handles loading and querying the list of well-known PINs.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use secrecy::SecretString;
use thiserror::Error;

use crate::normalize::normalize;

static COMMON_PINS: RwLock<Option<HashSet<String>>> = RwLock::new(None);

/// Environment variable overriding the list location.
pub const COMMON_PINS_PATH_ENV: &str = "MPIN_COMMON_PINS_PATH";
const DEFAULT_COMMON_PINS_PATH: &str = "./assets/common-pins.txt";

#[derive(Error, Debug)]
pub enum CommonPinsError {
    #[error("Common PIN file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read common PIN file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Common PIN file is empty")]
    EmptyFile,
}

/// Returns the common PIN file path.
///
/// Priority:
/// 1. Environment variable `MPIN_COMMON_PINS_PATH`
/// 2. Default path `./assets/common-pins.txt`
pub fn get_common_pins_path() -> PathBuf {
    std::env::var(COMMON_PINS_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_COMMON_PINS_PATH))
}

/// Loads the common PIN list from the configured path.
///
/// Call once at startup. Evaluation works without it; no PIN is then
/// considered common.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
pub fn init_common_pins() -> Result<usize, CommonPinsError> {
    init_common_pins_from_path(get_common_pins_path())
}

/// Loads the common PIN list from a specific file path.
///
/// One PIN per line. Lines that are not a valid 4 or 6 digit PIN are
/// skipped. Returns the number of PINs loaded; if the list is already
/// loaded, returns its size without reading the file.
pub fn init_common_pins_from_path<P: AsRef<Path>>(path: P) -> Result<usize, CommonPinsError> {
    {
        let guard = COMMON_PINS.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(pins) = guard.as_ref() {
            return Ok(pins.len());
        }
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Common PIN list initialization FAILED: file not found {:?}", path);
        return Err(CommonPinsError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Common PIN list initialization FAILED: empty file {:?}", path);
        return Err(CommonPinsError::EmptyFile);
    }

    let mut pins = HashSet::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match normalize(&SecretString::new(line.into())) {
            Ok(pin) => {
                pins.insert(pin.expose().to_string());
            }
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Skipping invalid common PIN entry: {}", _err);
            }
        }
    }

    let count = pins.len();
    {
        let mut guard = COMMON_PINS.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(pins);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Common PIN list initialized: {} PINs from {:?}", count, path);

    Ok(count)
}

/// Returns `true` if the PIN is on the loaded list.
///
/// Returns `false` if the list has not been loaded.
pub fn is_common_pin(pin: &str) -> bool {
    COMMON_PINS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .is_some_and(|pins| pins.contains(pin))
}

/// Number of loaded PINs, `None` before initialization.
pub fn common_pins_len() -> Option<usize> {
    COMMON_PINS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .map(HashSet::len)
}

#[cfg(test)]
pub fn reset_common_pins_for_testing() {
    let mut guard = COMMON_PINS.write().unwrap_or_else(PoisonError::into_inner);
    *guard = None;
}
