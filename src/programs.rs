use crate::loader::MachineLoader;
use crate::types::{MachineDef, MachineError};

use std::sync::RwLock;

// Default embedded machine definitions
const MACHINE_TEXTS: [&str; 3] = [
    include_str!("../machines/one-hash.json"),
    include_str!("../machines/two-hash.json"),
    include_str!("../machines/w-hash-w.json"),
];

lazy_static::lazy_static! {
    pub static ref MACHINES: RwLock<Vec<MachineDef>> = RwLock::new(Vec::new());
}

pub struct MachineManager;

impl MachineManager {
    /// Initialize the MachineManager with the embedded machine definitions
    pub fn load() -> Result<(), MachineError> {
        // Load embedded definitions first
        let mut machines = Vec::new();

        for machine_text in MACHINE_TEXTS {
            if let Ok(def) = MachineLoader::load_def_from_string(machine_text) {
                machines.push(def);
            } else {
                eprintln!("Failed to parse embedded machine definition");
            }
        }

        // Store the loaded definitions
        if let Ok(mut write_guard) = MACHINES.write() {
            *write_guard = machines;
        } else {
            return Err(MachineError::FileError(
                "Failed to acquire write lock".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the number of available machines
    pub fn get_machine_count() -> usize {
        // Initialize with embedded definitions if not already initialized
        let _ = Self::load();

        MACHINES.read().map(|machines| machines.len()).unwrap_or(0)
    }

    /// Get a machine definition by its index
    pub fn get_machine_by_index(index: usize) -> Result<MachineDef, MachineError> {
        // Initialize with embedded definitions if not already initialized
        let _ = Self::load();

        MACHINES
            .read()
            .map_err(|_| MachineError::FileError("Failed to acquire read lock".to_string()))?
            .get(index)
            .cloned()
            .ok_or_else(|| {
                MachineError::ValidationError(format!("Machine index {} out of range", index))
            })
    }

    /// Get a machine definition by its name
    pub fn get_machine_by_name(name: &str) -> Result<MachineDef, MachineError> {
        // Initialize with embedded definitions if not already initialized
        let _ = Self::load();

        MACHINES
            .read()
            .map_err(|_| MachineError::FileError("Failed to acquire read lock".to_string()))?
            .iter()
            .find(|def| def.name == name)
            .cloned()
            .ok_or_else(|| {
                MachineError::ValidationError(format!("No machine named {:?}", name))
            })
    }

    /// Get the names of all available machines
    pub fn get_machine_names() -> Vec<String> {
        let _ = Self::load();

        MACHINES
            .read()
            .map(|machines| machines.iter().map(|def| def.name.clone()).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_machines_load() {
        assert_eq!(MachineManager::get_machine_count(), 3);
        assert_eq!(
            MachineManager::get_machine_names(),
            vec!["one-hash", "two-hash", "w-hash-w"]
        );
    }

    #[test]
    fn test_get_machine_by_index() {
        let def = MachineManager::get_machine_by_index(0).unwrap();
        assert_eq!(def.name, "one-hash");

        let result = MachineManager::get_machine_by_index(99);
        assert!(matches!(result, Err(MachineError::ValidationError(_))));
    }

    #[test]
    fn test_get_machine_by_name() {
        let result = MachineManager::get_machine_by_name("no-such-machine");
        assert!(matches!(result, Err(MachineError::ValidationError(_))));
    }

    #[test]
    fn test_embedded_one_hash_behaves() {
        let machine = MachineManager::get_machine_by_name("one-hash")
            .unwrap()
            .build();

        assert!(machine.accepts("#"));
        assert!(machine.rejects("##"));
        assert!(machine.rejects(""));
    }

    #[test]
    fn test_embedded_two_hash_behaves() {
        let machine = MachineManager::get_machine_by_name("two-hash")
            .unwrap()
            .build();

        assert!(machine.accepts("##"));
        assert!(machine.rejects("#"));
        assert!(machine.rejects("###"));
    }

    #[test]
    fn test_embedded_w_hash_w_behaves() {
        let machine = MachineManager::get_machine_by_name("w-hash-w")
            .unwrap()
            .build();

        assert!(machine.evaluate("0#0", 1000).is_accepted());
        assert!(machine.evaluate("1001#1001", 1000).is_accepted());
        assert!(machine.evaluate("10#1", 1000).is_rejected());
        assert!(machine.accepts("#"));
        assert!(machine.rejects("##"));
    }
}
