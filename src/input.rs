//! Reading puzzle input for a form submission.
//!
//! Sample inputs live in one directory per day, named by slug:
//! `<root>/2023.07/example.txt`.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::{error::InputError, puzzles::PuzzleId};

#[derive(Debug, Clone)]
pub struct SampleInputs {
    root: PathBuf,
}

impl SampleInputs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn dir(&self, id: PuzzleId) -> PathBuf {
        self.root.join(id.slug())
    }

    /// File names available for a day, sorted. A day without a directory
    /// simply has no samples.
    pub fn list(&self, id: PuzzleId) -> Result<Vec<String>, InputError> {
        let dir = self.dir(id);
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(vec![]),
            Err(source) => return Err(InputError::Io { path: dir, source }),
        };

        let mut names = vec![];
        for entry in entries {
            let entry = entry.map_err(|source| InputError::Io {
                path: dir.clone(),
                source,
            })?;
            let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
            if let (true, Some(name)) = (is_file, entry.file_name().to_str()) {
                if is_valid_name(name) {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    pub fn read(&self, id: PuzzleId, name: &str) -> Result<String, InputError> {
        if !is_valid_name(name) {
            return Err(InputError::InvalidName(name.to_string()));
        }

        let path = self.dir(id).join(name);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(contents),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(InputError::NotFound(format!("{}/{}", id.slug(), name)))
            }
            Err(source) => Err(InputError::Io { path, source }),
        }
    }

    /// Pasted text wins when it has any content, otherwise the selected
    /// sample file is read. Line endings come back as plain `\n`.
    pub fn resolve(
        &self,
        id: PuzzleId,
        raw_input: Option<&str>,
        selected: Option<&str>,
    ) -> Result<String, InputError> {
        let text = match raw_input.filter(|raw| !raw.trim().is_empty()) {
            Some(raw) => raw.to_string(),
            None => match selected.map(str::trim).filter(|name| !name.is_empty()) {
                Some(name) => self.read(id, name)?,
                None => return Err(InputError::NoneGiven),
            },
        };

        Ok(text.replace("\r\n", "\n"))
    }
}

/// A bare file name: no separators, no parent references, no dotfiles
fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('.')
        && !name.contains(['/', '\\'])
        && !name.contains("..")
}
