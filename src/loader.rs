//! Loading machine definitions from JSON documents, files, and directories.

use crate::types::{MachineDef, MachineError};
use std::fs;
use std::path::{Path, PathBuf};

/// `MachineLoader` is a utility struct for loading machine definitions.
/// It provides methods to load definitions from individual `.json` files,
/// from string content, and to discover all `.json` files in a directory.
pub struct MachineLoader;

impl MachineLoader {
    /// Loads a single machine definition from the specified file path.
    ///
    /// # Returns
    ///
    /// * `Ok(MachineDef)` if the file is successfully read and parsed.
    /// * `Err(MachineError::FileError)` if the file cannot be read.
    /// * `Err(MachineError::ParseError)` if the content is not a valid definition.
    pub fn load_def(path: &Path) -> Result<MachineDef, MachineError> {
        let content = fs::read_to_string(path).map_err(|e| {
            MachineError::FileError(format!("Failed to read file {}: {}", path.display(), e))
        })?;

        Self::load_def_from_string(&content)
    }

    /// Loads a single machine definition from the provided string content.
    ///
    /// Useful for definitions that are not stored in files, e.g. embedded
    /// documents or user input.
    pub fn load_def_from_string(content: &str) -> Result<MachineDef, MachineError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Loads all machine definition files (`.json` extension) from a given
    /// directory. Subdirectories and files with other extensions are skipped.
    ///
    /// # Returns
    ///
    /// A vector of `(path, parse result)` pairs, one per `.json` file found,
    /// so callers can report broken definitions without losing good ones.
    pub fn load_defs_from_directory(
        directory: &Path,
    ) -> Result<Vec<(PathBuf, Result<MachineDef, MachineError>)>, MachineError> {
        let entries = fs::read_dir(directory).map_err(|e| {
            MachineError::FileError(format!(
                "Failed to read directory {}: {}",
                directory.display(),
                e
            ))
        })?;

        let mut defs = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                MachineError::FileError(format!("Failed to read directory entry: {}", e))
            })?;
            let path = entry.path();

            if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                let result = Self::load_def(&path);
                defs.push((path, result));
            }
        }

        defs.sort_by(|(a, _), (b, _)| a.cmp(b));
        Ok(defs)
    }
}
