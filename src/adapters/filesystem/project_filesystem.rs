//! `ProjectFilesystem` implementation for `FilesystemStore`.

use std::fs::{self, OpenOptions};
use std::io::{Read, Write};

use fs2::FileExt;

use crate::domain::AppError;
use crate::ports::ProjectFilesystem;

use super::FilesystemStore;

impl ProjectFilesystem for FilesystemStore {
    fn read_file(&self, path: &str) -> Result<String, AppError> {
        let full_path = self.resolve(path)?;
        fs::read_to_string(full_path).map_err(AppError::from)
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        let full_path = self.resolve(path)?;
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(full_path, content).map_err(AppError::from)
    }

    fn remove_file(&self, path: &str) -> Result<(), AppError> {
        let full_path = self.resolve(path)?;
        if full_path.exists() {
            fs::remove_file(full_path)?;
        }
        Ok(())
    }

    fn file_exists(&self, path: &str) -> bool {
        match self.resolve(path) {
            Ok(full_path) => full_path.is_file(),
            Err(_) => false,
        }
    }

    fn append_locked(
        &self,
        path: &str,
        compute: &mut dyn FnMut(&str) -> String,
    ) -> Result<(), AppError> {
        let full_path = self.resolve(path)?;
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new().create(true).read(true).append(true).open(&full_path)?;
        file.lock_exclusive()?;

        let result = (|| -> Result<(), AppError> {
            let mut existing = String::new();
            file.read_to_string(&mut existing)?;

            let addition = compute(&existing);
            if addition.is_empty() {
                return Ok(());
            }
            file.write_all(addition.as_bytes())?;
            file.sync_all()?;
            Ok(())
        })();

        let unlocked = FileExt::unlock(&file);
        result?;
        unlocked.map_err(AppError::from)
    }
}
