//! Test double for `ProjectFilesystem`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::ProjectFilesystem;

/// In-memory project tree. Clones share the same files.
#[derive(Clone, Debug, Default)]
pub struct MemoryFilesystem {
    files: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file.
    pub fn add(&self, path: &str, content: &str) {
        self.files.lock().unwrap().insert(path.to_string(), content.to_string());
    }

    pub fn get(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    /// Every stored path, sorted.
    pub fn paths(&self) -> Vec<String> {
        let mut paths: Vec<String> = self.files.lock().unwrap().keys().cloned().collect();
        paths.sort();
        paths
    }
}

impl ProjectFilesystem for MemoryFilesystem {
    fn read_file(&self, path: &str) -> Result<String, AppError> {
        self.get(path).ok_or_else(|| {
            AppError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "Mock file not found"))
        })
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        self.add(path, content);
        Ok(())
    }

    fn remove_file(&self, path: &str) -> Result<(), AppError> {
        self.files.lock().unwrap().remove(path);
        Ok(())
    }

    fn file_exists(&self, path: &str) -> bool {
        self.contains(path)
    }

    fn append_locked(
        &self,
        path: &str,
        compute: &mut dyn FnMut(&str) -> String,
    ) -> Result<(), AppError> {
        let mut files = self.files.lock().unwrap();
        let entry = files.entry(path.to_string()).or_default();
        let addition = compute(entry);
        entry.push_str(&addition);
        Ok(())
    }
}
