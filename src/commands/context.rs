//! Shared setup for commands
//!
//! Loads the config, opens the settings hive and wires the catalog and the
//! status flag on top of it.

use std::sync::Arc;

use log::debug;

use hardentools::adapters::{MemoryBackend, TomlHive};
use hardentools::config::Config;
use hardentools::core::ports::SettingsBackend;
use hardentools::core::services::{Catalog, FlagStore, Overview};
use hardentools::subjects;

/// Everything a command needs to query or run the catalog
pub struct Context {
    pub config: Config,
    pub catalog: Catalog,
    pub status: FlagStore,
    pub dry_run: bool,
}

impl Context {
    /// Open the configured hive
    ///
    /// With `dry_run`, the hive is copied into memory so nothing is written.
    pub fn open(config: Config, dry_run: bool) -> anyhow::Result<Self> {
        let hive = TomlHive::new(config.hive_path());
        debug!("using settings hive {}", hive.path().display());

        let backend: Arc<dyn SettingsBackend> = if dry_run {
            Arc::new(MemoryBackend::with_hive(hive.load()?))
        } else {
            Arc::new(hive)
        };

        Ok(Self {
            catalog: subjects::builtin(&backend)?,
            status: FlagStore::new(backend),
            config,
            dry_run,
        })
    }

    /// Collect the overview, applying the configured exclusions
    pub fn overview(&self) -> Overview {
        Overview::collect_excluding(&self.catalog, &self.status, &self.config.excluded())
    }
}
