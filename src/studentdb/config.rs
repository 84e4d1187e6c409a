use crate::backend::{self, BackendKind};
use crate::error::{Result, StudentDbError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "studentdb.config.json";

/// Configuration for studentdb, stored in `studentdb.config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StudentDbConfig {
    /// Which representation to read and write
    #[serde(default)]
    pub backend: BackendKind,

    /// Data file used by the binary backend
    #[serde(default = "default_binary_file")]
    pub binary_file: PathBuf,

    /// Data file used by the JSON backend
    #[serde(default = "default_json_file")]
    pub json_file: PathBuf,
}

fn default_binary_file() -> PathBuf {
    PathBuf::from(backend::binary::DEFAULT_FILE_NAME)
}

fn default_json_file() -> PathBuf {
    PathBuf::from(backend::json::DEFAULT_FILE_NAME)
}

impl Default for StudentDbConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            binary_file: default_binary_file(),
            json_file: default_json_file(),
        }
    }
}

impl StudentDbConfig {
    /// Load config from `config_dir`, or return defaults if there is none.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        Self::load_file(config_dir.as_ref().join(CONFIG_FILENAME))
    }

    /// Load config from an explicit file, or return defaults if it does not exist.
    pub fn load_file<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path).map_err(StudentDbError::Io)?;
        serde_json::from_str(&content).map_err(|e| {
            StudentDbError::Config(format!("{}: {}", config_path.display(), e))
        })
    }

    /// Save config to `config_dir`.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(StudentDbError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(StudentDbError::Serialization)?;
        fs::write(config_path, content).map_err(StudentDbError::Io)?;
        Ok(())
    }

    /// The data file for the configured backend.
    pub fn data_file(&self) -> &Path {
        match self.backend {
            BackendKind::Binary => &self.binary_file,
            BackendKind::Json => &self.json_file,
        }
    }

    /// Apply command-line overrides. An explicit file replaces the path of
    /// whichever backend ends up selected.
    pub fn with_overrides(mut self, backend: Option<BackendKind>, file: Option<PathBuf>) -> Self {
        if let Some(kind) = backend {
            self.backend = kind;
        }
        if let Some(file) = file {
            match self.backend {
                BackendKind::Binary => self.binary_file = file,
                BackendKind::Json => self.json_file = file,
            }
        }
        self
    }
}
