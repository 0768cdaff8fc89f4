use std::env;
use std::path::{Path, PathBuf};

use booking::Catalog;
use directories::ProjectDirs;
use lazy_static::lazy_static;
use serde::Deserialize;
use tracing::{debug, warn};

pub const PROJECT_NAME: &str = "BOOKING";

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub data_dir: PathBuf,
    #[serde(default)]
    pub config_dir: PathBuf,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    /// Clinic and services shown beside the form.
    #[serde(default)]
    pub catalog: Catalog,
    /// Files that were read, in load order. Empty when only defaults apply.
    #[serde(skip)]
    pub loaded_from: Vec<PathBuf>,
}

lazy_static! {
    pub static ref DATA_FOLDER: Option<PathBuf> =
        env::var(format!("{PROJECT_NAME}_DATA")).ok().map(PathBuf::from);
    pub static ref CONFIG_FOLDER: Option<PathBuf> =
        env::var(format!("{PROJECT_NAME}_CONFIG")).ok().map(PathBuf::from);
}

const CONFIG_FILES: [(&str, config::FileFormat); 2] = [
    ("config.json5", config::FileFormat::Json5),
    ("config.toml", config::FileFormat::Toml),
];

impl Config {
    /// Load from the platform directories, then `explicit` on top.
    pub fn new(explicit: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::load(&get_config_dir(), &get_data_dir(), explicit)
    }

    /// Defaults, then `config.json5` / `config.toml` from `config_dir` if
    /// present, then `explicit`, which must exist.
    pub fn load(
        config_dir: &Path,
        data_dir: &Path,
        explicit: Option<&Path>,
    ) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .set_default("data_dir", data_dir.to_string_lossy().into_owned())?
            .set_default("config_dir", config_dir.to_string_lossy().into_owned())?;

        let mut loaded_from = Vec::new();
        for (file, format) in &CONFIG_FILES {
            let path = config_dir.join(file);
            if path.exists() {
                loaded_from.push(path.clone());
            }
            builder = builder.add_source(config::File::from(path).format(*format).required(false));
        }
        if let Some(path) = explicit {
            loaded_from.push(path.to_path_buf());
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;
        cfg.loaded_from = loaded_from;
        Ok(cfg)
    }

    /// Loading happens before the subscriber exists, so what was loaded is
    /// recorded here once logging is up.
    pub fn log_sources(&self) {
        if self.loaded_from.is_empty() {
            warn!(dir = %self.config.config_dir.display(), "no configuration file found, using defaults");
        }
        for path in &self.loaded_from {
            debug!(file = %path.display(), "configuration file read");
        }
        debug!(
            services = self.catalog.services.len(),
            clinic = %self.catalog.clinic.name,
            data_dir = %self.config.data_dir.display(),
            "config loaded"
        );
    }
}

pub fn get_data_dir() -> PathBuf {
    if let Some(s) = DATA_FOLDER.clone() {
        s
    } else if let Some(proj_dirs) = project_directory() {
        proj_dirs.data_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".data")
    }
}

pub fn get_config_dir() -> PathBuf {
    if let Some(s) = CONFIG_FOLDER.clone() {
        s
    } else if let Some(proj_dirs) = project_directory() {
        proj_dirs.config_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".config")
    }
}

fn project_directory() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "goldspa", "booking")
}
