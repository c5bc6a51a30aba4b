use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::Logger;

use crate::catalog::Catalog;

/// Everything a route needs, cloned into each filter.
#[derive(Clone)]
pub struct Environment {
    pub logger: Arc<Logger>,
    pub catalog: Arc<Catalog>,
    pub config: Config,
}

impl Environment {
    pub fn new(logger: Arc<Logger>, catalog: Arc<Catalog>, config: Config) -> Self {
        Self {
            logger,
            catalog,
            config,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    /// The running environment name, echoed by the health probe.
    pub environment: String,

    /// Directory holding the built interface documents and their assets.
    pub(crate) assets_dir: PathBuf,
}

impl Config {
    pub fn new(environment: impl Into<String>, assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            environment: environment.into(),
            assets_dir: assets_dir.into(),
        }
    }

    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }

    /// The primary document, served at the root.
    pub fn index_document(&self) -> PathBuf {
        self.assets_dir.join("index.html")
    }

    /// The alternate build artifact, served at `/enhanced`.
    pub fn enhanced_document(&self) -> PathBuf {
        self.assets_dir.join("enhanced.html")
    }
}
