//! Filesystem layer for the game rule defaults engine.
//!
//! Provides normalized path handling, atomic file I/O, a typed config
//! store, and the on-disk layout of a mod instance directory.

pub mod error;
pub mod io;
pub mod layout;
pub mod path;
pub mod store;

pub use error::{Error, Result};
pub use layout::{CONFIG_FILE_NAME, InstanceLayout, SCHEMA_FILE_NAME};
pub use path::NormalizedPath;
pub use store::ConfigStore;
