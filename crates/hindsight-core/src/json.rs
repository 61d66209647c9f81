//! Structured config store.
//!
//! A `JsonFile` pairs a path with serialize/deserialize. Checked creation of
//! the file is the caller's step; `write` only replaces content.

use crate::error::Result;
use crate::io;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};

pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize `value` into the file. `pretty` selects human-readable
    /// indentation. Propagates both serialization and write failures.
    pub fn write<T: Serialize>(&self, value: &T, pretty: bool) -> Result<()> {
        let mut data = if pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        data.push('\n');
        io::put_contents(&self.path, data.as_bytes())?;
        Ok(())
    }

    /// Deserialize the file's content.
    pub fn read<T: DeserializeOwned>(&self) -> Result<T> {
        let data = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }
}
