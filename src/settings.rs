//! Persistent boolean user settings
//!
//! Settings are independent of the analytics; the CLI reads them to adjust
//! presentation. Stores implement [`SettingsStore`] so commands can be tested
//! against [`MemorySettingsStore`].

use crate::infra::{FileSystem, RealFileSystem};
use anyhow::{Context, Result};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

/// Directory holding the settings file, relative to the project root
pub const SETTINGS_DIR: &str = ".next-build-parser";

/// Settings file name inside [`SETTINGS_DIR`]
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Settings the CLI understands, with a short description
pub const KNOWN_SETTINGS: &[(&str, &str)] =
    &[("compact", "Hide the top-route tables in the dashboard report")];

/// Whether `key` is one of [`KNOWN_SETTINGS`]
pub fn is_known_setting(key: &str) -> bool {
    KNOWN_SETTINGS.iter().any(|(k, _)| *k == key)
}

/// Location of the settings file for a project
pub fn settings_path(project_root: &Path) -> PathBuf {
    project_root.join(SETTINGS_DIR).join(SETTINGS_FILE_NAME)
}

/// Key-value store of boolean settings
pub trait SettingsStore {
    /// Current value of `key`, `None` when it was never set
    fn get(&self, key: &str) -> Result<Option<bool>>;

    /// Set `key` to `value`
    fn set(&mut self, key: &str, value: bool) -> Result<()>;
}

/// Flip a setting and return its new value
///
/// An unset key counts as `false`, so the first toggle sets it to `true`.
///
/// # Examples
///
/// ```
/// use next_build_parser::settings::{toggle, MemorySettingsStore, SettingsStore};
///
/// let mut store = MemorySettingsStore::default();
/// assert!(toggle(&mut store, "compact")?);
/// assert!(!toggle(&mut store, "compact")?);
/// assert_eq!(store.get("compact")?, Some(false));
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn toggle<S: SettingsStore + ?Sized>(store: &mut S, key: &str) -> Result<bool> {
    let value = !store.get(key)?.unwrap_or(false);
    store.set(key, value)?;
    Ok(value)
}

/// Settings kept in memory only
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    values: HashMap<String, bool>,
}

impl SettingsStore for MemorySettingsStore {
    fn get(&self, key: &str) -> Result<Option<bool>> {
        Ok(self.values.get(key).copied())
    }

    fn set(&mut self, key: &str, value: bool) -> Result<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// Settings persisted as a JSON object in `.next-build-parser/settings.json`
///
/// The file is read once on open and rewritten on every `set`. It is only
/// created by the first write.
pub struct JsonSettingsStore<FS: FileSystem = RealFileSystem> {
    fs: FS,
    path: PathBuf,
    values: BTreeMap<String, bool>,
}

impl JsonSettingsStore<RealFileSystem> {
    /// Open the settings of the project at `project_root`
    pub fn open(project_root: &Path) -> Result<Self> {
        Self::open_with_fs(project_root, RealFileSystem)
    }
}

impl<FS: FileSystem> JsonSettingsStore<FS> {
    /// Open settings with a custom filesystem implementation
    ///
    /// A missing file is an empty store. A file that is not a JSON object of
    /// booleans is ignored with a warning and replaced on the next write.
    pub fn open_with_fs(project_root: &Path, fs: FS) -> Result<Self> {
        let path = settings_path(project_root);

        let values = match fs.read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(values) => values,
                Err(e) => {
                    log::warn!(
                        "Ignoring unreadable settings file {}: {}",
                        path.display(),
                        e
                    );
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                return Err(e).context(format!("Failed to read {}", path.display()));
            }
        };

        log::debug!("Opened settings at {}", path.display());
        Ok(Self { fs, path, values })
    }

    /// Path this store writes to
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            self.fs
                .create_dir_all(dir)
                .context(format!("Failed to create {}", dir.display()))?;
        }
        let contents =
            serde_json::to_string_pretty(&self.values).context("Failed to serialize settings")?;
        self.fs
            .write(&self.path, contents)
            .context(format!("Failed to write {}", self.path.display()))
    }
}

impl<FS: FileSystem> SettingsStore for JsonSettingsStore<FS> {
    fn get(&self, key: &str) -> Result<Option<bool>> {
        Ok(self.values.get(key).copied())
    }

    fn set(&mut self, key: &str, value: bool) -> Result<()> {
        self.values.insert(key.to_string(), value);
        self.save()
    }
}
