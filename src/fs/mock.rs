// src/fs/mock.rs

//! In-memory filesystem with a logical clock.
//!
//! Every mutation advances the clock by one second and stamps the touched
//! file with the new time, so "A was written after B" holds without sleeping.

use super::FileSystem;
use anyhow::{anyhow, Result};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, SystemTime};

#[derive(Debug, Clone)]
pub enum MockEntry {
    File { content: Vec<u8>, modified: SystemTime },
    Dir(Vec<String>), // List of child names
}

#[derive(Debug)]
struct MockState {
    entries: HashMap<PathBuf, MockEntry>,
    symlinks: HashSet<PathBuf>,
    clock: SystemTime,
    writes: usize,
}

#[derive(Debug, Clone)]
pub struct MockFileSystem {
    state: Arc<Mutex<MockState>>,
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl MockFileSystem {
    pub fn new() -> Self {
        let mut entries = HashMap::new();
        // Ensure root exists
        entries.insert(PathBuf::from("."), MockEntry::Dir(Vec::new()));

        Self {
            state: Arc::new(Mutex::new(MockState {
                entries,
                symlinks: HashSet::new(),
                clock: SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000),
                writes: 0,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current value of the logical clock.
    pub fn now(&self) -> SystemTime {
        self.lock().clock
    }

    /// Number of successful `write` calls so far.
    pub fn write_count(&self) -> usize {
        self.lock().writes
    }

    /// Create (or replace) a file, creating missing parent directories.
    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) {
        let path = path.as_ref();
        let mut state = self.lock();
        let modified = tick(&mut state);
        if let Some(parent) = parent_of(path) {
            ensure_dir_entry(&mut state.entries, parent);
            link_child(&mut state.entries, parent, path);
        }
        state.entries.insert(
            path.to_path_buf(),
            MockEntry::File {
                content: content.into(),
                modified,
            },
        );
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let mut state = self.lock();
        ensure_dir_entry(&mut state.entries, path.as_ref());
    }

    /// Create a directory that reports itself as a symbolic link. Its
    /// contents are whatever is added under it afterwards.
    pub fn add_dir_symlink(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        let mut state = self.lock();
        ensure_dir_entry(&mut state.entries, path);
        state.symlinks.insert(path.to_path_buf());
    }

    /// Bump the modification time of an existing file to "now".
    pub fn touch(&self, path: impl AsRef<Path>) -> Result<SystemTime> {
        let mut state = self.lock();
        let now = tick(&mut state);
        match state.entries.get_mut(path.as_ref()) {
            Some(MockEntry::File { modified, .. }) => {
                *modified = now;
                Ok(now)
            }
            _ => Err(anyhow!("File not found: {:?}", path.as_ref())),
        }
    }

    /// Force the modification time of an existing file.
    pub fn set_modified(&self, path: impl AsRef<Path>, time: SystemTime) -> Result<()> {
        let mut state = self.lock();
        match state.entries.get_mut(path.as_ref()) {
            Some(MockEntry::File { modified, .. }) => {
                *modified = time;
                Ok(())
            }
            _ => Err(anyhow!("File not found: {:?}", path.as_ref())),
        }
    }

    /// Drop a file from the tree (and from its parent's listing).
    pub fn remove_file(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        let mut state = self.lock();
        state.entries.remove(path);
        if let (Some(parent), Some(name)) = (parent_of(path), path.file_name()) {
            let name = name.to_string_lossy().into_owned();
            if let Some(MockEntry::Dir(children)) = state.entries.get_mut(parent) {
                children.retain(|c| *c != name);
            }
        }
    }
}

fn tick(state: &mut MockState) -> SystemTime {
    state.clock += Duration::from_secs(1);
    state.clock
}

fn parent_of(path: &Path) -> Option<&Path> {
    path.parent().map(|parent| {
        if parent.as_os_str().is_empty() {
            Path::new(".")
        } else {
            parent
        }
    })
}

fn link_child(entries: &mut HashMap<PathBuf, MockEntry>, parent: &Path, child: &Path) {
    if let Some(MockEntry::Dir(children)) = entries.get_mut(parent) {
        if let Some(name) = child.file_name().and_then(|n| n.to_str()) {
            if !children.iter().any(|c| c == name) {
                children.push(name.to_string());
            }
        }
    }
}

fn ensure_dir_entry(entries: &mut HashMap<PathBuf, MockEntry>, path: &Path) {
    if entries.contains_key(path) {
        return;
    }
    entries.insert(path.to_path_buf(), MockEntry::Dir(Vec::new()));
    if let Some(parent) = parent_of(path) {
        if parent != path {
            // Avoid infinite loop at root
            ensure_dir_entry(entries, parent);
            link_child(entries, parent, path);
        }
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        let state = self.lock();
        match state.entries.get(path) {
            Some(MockEntry::File { content, .. }) => {
                String::from_utf8(content.clone()).map_err(|e| anyhow!("Invalid UTF-8: {}", e))
            }
            Some(MockEntry::Dir(_)) => Err(anyhow!("Is a directory: {:?}", path)),
            None => Err(anyhow!("File not found: {:?}", path)),
        }
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        let mut state = self.lock();
        let parent = parent_of(path).ok_or_else(|| anyhow!("No parent for {:?}", path))?;
        if !matches!(state.entries.get(parent), Some(MockEntry::Dir(_))) {
            return Err(anyhow!("Parent directory not found: {:?}", parent));
        }
        if matches!(state.entries.get(path), Some(MockEntry::Dir(_))) {
            return Err(anyhow!("Is a directory: {:?}", path));
        }
        let modified = tick(&mut state);
        link_child(&mut state.entries, parent, path);
        state.entries.insert(
            path.to_path_buf(),
            MockEntry::File {
                content: contents.to_vec(),
                modified,
            },
        );
        state.writes += 1;
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        let mut state = self.lock();
        if matches!(state.entries.get(path), Some(MockEntry::File { .. })) {
            return Err(anyhow!("Not a directory: {:?}", path));
        }
        ensure_dir_entry(&mut state.entries, path);
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.lock().entries.contains_key(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        matches!(self.lock().entries.get(path), Some(MockEntry::File { .. }))
    }

    fn is_dir(&self, path: &Path) -> bool {
        matches!(self.lock().entries.get(path), Some(MockEntry::Dir(_)))
    }

    fn is_symlink(&self, path: &Path) -> bool {
        self.lock().symlinks.contains(path)
    }

    fn modified(&self, path: &Path) -> Result<SystemTime> {
        match self.lock().entries.get(path) {
            Some(MockEntry::File { modified, .. }) => Ok(*modified),
            Some(MockEntry::Dir(_)) => Err(anyhow!("Is a directory: {:?}", path)),
            None => Err(anyhow!("File not found: {:?}", path)),
        }
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        match self.lock().entries.get(path) {
            Some(MockEntry::Dir(children)) => {
                Ok(children.iter().map(|name| path.join(name)).collect())
            }
            _ => Err(anyhow!("Not a directory or not found: {:?}", path)),
        }
    }
}
