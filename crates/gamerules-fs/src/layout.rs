//! On-disk layout of a mod instance directory
//!
//! Each mod instance owns one directory holding the config file and the
//! generated schema file side by side:
//!
//! ```text
//! <config root>/<instance>/
//!   config.json          user-facing configuration
//!   config.schema.json   generated JSON Schema
//! ```

use std::fs;

use crate::{Error, NormalizedPath, Result};

/// File name of the user-facing configuration.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// File name of the generated JSON Schema.
pub const SCHEMA_FILE_NAME: &str = "config.schema.json";

/// Paths of a single mod instance directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceLayout {
    root: NormalizedPath,
}

impl InstanceLayout {
    /// Create a layout rooted at the given instance directory.
    pub fn new(root: impl Into<NormalizedPath>) -> Self {
        Self { root: root.into() }
    }

    /// The instance directory itself.
    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    /// Path of the configuration file.
    pub fn config_path(&self) -> NormalizedPath {
        self.root.join(CONFIG_FILE_NAME)
    }

    /// Path of the schema file.
    pub fn schema_path(&self) -> NormalizedPath {
        self.root.join(SCHEMA_FILE_NAME)
    }

    /// Canonical URI of the schema file, for the config's `$schema` field.
    pub fn schema_uri(&self) -> String {
        self.schema_path().to_file_uri()
    }

    /// Create the instance directory if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the filesystem denies directory creation.
    pub fn ensure_dir(&self) -> Result<()> {
        let native = self.root.to_native();
        if !native.is_dir() {
            fs::create_dir_all(&native).map_err(|e| Error::io(&native, e))?;
        }
        Ok(())
    }
}
