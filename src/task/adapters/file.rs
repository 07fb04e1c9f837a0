//! File-backed key-value store.
//!
//! Each key maps to `<key>.json` inside a single directory opened through
//! `cap-std`, so the store cannot reach outside that directory. Writes go to
//! a temporary sibling first and are renamed into place.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;

use crate::task::ports::{KeyValueStore, StorageError, StorageResult};

const VALUE_EXTENSION: &str = "json";
const TEMP_SUFFIX: &str = "tmp";

/// Key-value store keeping one file per key in a directory.
#[derive(Debug)]
pub struct FileKeyValueStore {
    root: Utf8PathBuf,
    dir: Dir,
}

impl FileKeyValueStore {
    /// Opens the store rooted at `path`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] when the directory cannot be created or
    /// opened.
    pub fn open(path: impl AsRef<Utf8Path>) -> StorageResult<Self> {
        let root = path.as_ref();
        Dir::create_ambient_dir_all(root, ambient_authority()).map_err(StorageError::io)?;
        let dir = Dir::open_ambient_dir(root, ambient_authority()).map_err(StorageError::io)?;
        Ok(Self {
            root: root.to_owned(),
            dir,
        })
    }

    /// Returns the directory this store writes into.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Returns the file path backing `key`, relative to [`Self::root`].
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::InvalidKey`] when `key` is not a plain name.
    pub fn file_name_for(key: &str) -> StorageResult<String> {
        let is_plain = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.'));
        if !is_plain {
            return Err(StorageError::InvalidKey(key.to_owned()));
        }
        Ok(format!("{key}.{VALUE_EXTENSION}"))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let file_name = Self::file_name_for(key)?;
        match self.dir.read_to_string(&file_name) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::io(err)),
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let file_name = Self::file_name_for(key)?;
        let temp_name = format!("{file_name}.{TEMP_SUFFIX}");
        self.dir
            .write(&temp_name, value)
            .map_err(StorageError::io)?;
        self.dir
            .rename(&temp_name, &self.dir, &file_name)
            .map_err(StorageError::io)
    }
}
