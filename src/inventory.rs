//! JSON ファイルもしくは標準入力からコレクションを読み込む。
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::summary::ClusterInventory;

/// 入力元。`-` は標準入力を表す。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    #[must_use]
    pub fn from_arg(arg: Option<&Path>) -> Self {
        match arg {
            None => Self::Stdin,
            Some(path) if path.as_os_str() == "-" => Self::Stdin,
            Some(path) => Self::File(path.to_path_buf()),
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::Stdin => "<stdin>".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("failed to read {origin}: {source}")]
    Io {
        origin: String,
        #[source]
        source: io::Error,
    },
    #[error("invalid JSON in {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

fn read_source(source: &InputSource) -> Result<String, InventoryError> {
    let origin = source.describe();
    let payload = match source {
        InputSource::Stdin => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map(|_| buffer)
        }
        InputSource::File(path) => fs::read_to_string(path),
    };
    payload.map_err(|source| InventoryError::Io { origin, source })
}

fn parse<T: DeserializeOwned>(source: &InputSource) -> Result<T, InventoryError> {
    let payload = read_source(source)?;
    debug!(origin = %source.describe(), bytes = payload.len(), "input loaded");
    serde_json::from_str(&payload).map_err(|error| InventoryError::Parse {
        origin: source.describe(),
        source: error,
    })
}

/// `{ assets, courses, liveClassrooms, searchSections }` 形式の JSON を読み込む。
///
/// # Errors
/// 読み込みに失敗した場合、もしくは JSON として解釈できない場合は [`InventoryError`] を返す。
pub fn load_inventory(source: &InputSource) -> Result<ClusterInventory, InventoryError> {
    parse(source)
}

/// 単一の項目もしくは項目の配列を読み込む。単一の項目は要素1つの配列として返す。
///
/// # Errors
/// 読み込みに失敗した場合、もしくは JSON として解釈できない場合は [`InventoryError`] を返す。
pub fn load_items(source: &InputSource) -> Result<Vec<Value>, InventoryError> {
    match parse::<Value>(source)? {
        Value::Array(items) => Ok(items),
        item => Ok(vec![item]),
    }
}
