//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use dhingra_cache::Cache;
use dhingra_commerce::cart::CartStore;
use dhingra_commerce::catalog::Catalog;
use dhingra_commerce::notify::Notification;

use crate::config::CliConfig;
use crate::output::Output;

/// Config file names searched for, in order.
pub const CONFIG_NAMES: [&str; 3] = ["dhingra.toml", ".dhingra.toml", "dhingra.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Config file in use, if any.
    pub config_path: Option<PathBuf>,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            let path = PathBuf::from(path);
            (CliConfig::load(&path)?, Some(path))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        if let Some(path) = &config_path {
            output.debug(&format!("Using config: {}", path.display()));
        }

        Ok(Self {
            config,
            output,
            cwd,
            config_path,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    match CliConfig::load(&config_path) {
                        Ok(config) => return Some((config, config_path)),
                        Err(e) => tracing::warn!(
                            path = %config_path.display(),
                            error = %format!("{e:#}"),
                            "skipping unreadable config"
                        ),
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Directory relative paths in the config are resolved against.
    pub fn base_dir(&self) -> PathBuf {
        self.config_path
            .as_ref()
            .and_then(|p| p.parent())
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.cwd.clone())
    }

    /// Resolve a configured path.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.base_dir().join(path)
        }
    }

    /// Load and validate the configured catalog.
    pub fn catalog(&self) -> Result<Catalog> {
        let path = self.resolve_path(&self.config.catalog.path);
        let json = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
        let catalog = Catalog::from_json(&json)
            .with_context(|| format!("Invalid catalog: {}", path.display()))?;
        self.output.debug(&format!(
            "Loaded {} products from {}",
            catalog.products().len(),
            path.display()
        ));
        Ok(catalog)
    }

    /// Open the persisted cart, printing notifications as they happen.
    pub fn cart_store(&self) -> Result<CartStore> {
        let dir = self.resolve_path(&self.config.storage.dir);
        let cache = Cache::open_dir(&dir)
            .with_context(|| format!("Failed to open storage: {}", dir.display()))?;

        let cart_config = self.config.cart_config();
        cache
            .exists(&cart_config.storage_key)
            .with_context(|| format!("Unusable cart key {:?}", cart_config.storage_key))?;

        let output = self.output.clone();
        Ok(CartStore::with_config(
            cache,
            &cart_config,
            move |n: Notification| output.notification(&n),
        ))
    }
}
