//! CLI execution context.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use nutcart_cache::Cache;
use nutcart_commerce::catalog::Catalog;
use nutcart_commerce::storefront::Storefront;
use nutcart_commerce::Currency;

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Config file in effect, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        if let Some(path) = &config_path {
            tracing::debug!(path = %path.display(), "using config file");
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    match CliConfig::load(config_path.to_str()?) {
                        Ok(config) => return Some((config, config_path)),
                        Err(e) => {
                            tracing::warn!(path = %config_path.display(), error = %e, "skipping unreadable config");
                        }
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Directory that relative config paths are anchored to: the one
    /// holding the config file, or the working directory without one.
    pub fn base_dir(&self) -> PathBuf {
        match self.config_path.as_deref().and_then(Path::parent) {
            Some(dir) if dir.is_absolute() => dir.to_path_buf(),
            Some(dir) => self.cwd.join(dir),
            None => self.cwd.clone(),
        }
    }

    /// Resolve a configured path relative to [`Context::base_dir`].
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir().join(path)
        }
    }

    /// Currency configured for the catalog.
    pub fn currency(&self) -> Result<Currency> {
        let code = &self.config.catalog.currency;
        code.parse::<Currency>()
            .with_context(|| format!("Invalid catalog currency: {}", code))
    }

    /// Load the configured catalog.
    pub fn catalog(&self) -> Result<Arc<Catalog>> {
        let currency = self.currency()?;
        let catalog = match &self.config.catalog.path {
            Some(path) => {
                let path = self.resolve_path(path);
                let json = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
                Catalog::from_json(&json, currency)
                    .with_context(|| format!("Failed to load catalog: {}", path.display()))?
            }
            None => Catalog::builtin(currency).context("Failed to load built-in catalog")?,
        };
        Ok(Arc::new(catalog))
    }

    /// Directory of the key-value store.
    pub fn data_dir(&self) -> PathBuf {
        self.resolve_path(&self.config.store.data_dir)
    }

    /// Open the storefront over the configured catalog and data directory.
    pub fn storefront(&self) -> Result<Storefront> {
        let catalog = self.catalog()?;
        let data_dir = self.data_dir();
        let cache = Cache::open_dir(&data_dir)
            .with_context(|| format!("Failed to open data directory: {}", data_dir.display()))?;
        Ok(Storefront::open(catalog, cache))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::generate_default_config;
    use nutcart_commerce::ProductId;

    fn context_in(dir: &Path, config: CliConfig) -> Context {
        Context {
            config,
            config_path: None,
            output: Output::new(false, true),
            cwd: dir.to_path_buf(),
        }
    }

    #[test]
    fn test_find_config_walks_upward() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("nutcart.toml"),
            "[catalog]\ncurrency = \"USD\"\n",
        )
        .unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let (config, path) = Context::find_config(&nested).unwrap();
        assert_eq!(config.catalog.currency, "USD");
        assert_eq!(path, dir.path().join("nutcart.toml"));
    }

    #[test]
    fn test_custom_catalog_and_store() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("mini.json"),
            r#"[{"title": "Pecans", "price": 10.5, "weight_g": 200, "rating": 4.1,
                "review_count": 3, "image": "", "category": "Nuts",
                "stock_status": "in_stock", "tags": ["offer"]}]"#,
        )
        .unwrap();

        let mut config = CliConfig::default();
        config.catalog.path = Some(PathBuf::from("mini.json"));
        config.catalog.currency = "USD".into();
        let ctx = context_in(dir.path(), config);

        let catalog = ctx.catalog().unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.currency(), Currency::USD);

        let mut store = ctx.storefront().unwrap();
        store.add_to_cart(&ProductId::new("1"), 2).unwrap();
        assert!(ctx.data_dir().join("nutcart.cart.json").is_file());

        let reopened = ctx.storefront().unwrap();
        assert_eq!(reopened.quantity_in_cart(&ProductId::new("1")), 2);
    }

    #[test]
    fn test_store_is_shared_from_nested_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("nutcart.toml"), generate_default_config()).unwrap();
        let nested = dir.path().join("sub");
        std::fs::create_dir_all(&nested).unwrap();

        let open_from = |cwd: &Path| {
            let (config, path) = Context::find_config(cwd).unwrap();
            Context {
                config_path: Some(path),
                ..context_in(cwd, config)
            }
        };

        let root = open_from(dir.path());
        let sub = open_from(&nested);
        assert_eq!(root.data_dir(), sub.data_dir());
        assert_eq!(sub.data_dir(), dir.path().join(".nutcart"));

        let mut store = root.storefront().unwrap();
        store.add_to_cart(&ProductId::new("1"), 2).unwrap();

        let reopened = sub.storefront().unwrap();
        assert_eq!(reopened.quantity_in_cart(&ProductId::new("1")), 2);
    }

    #[test]
    fn test_relative_config_path_anchors_to_cwd() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = Context {
            config_path: Some(PathBuf::from("conf/nutcart.toml")),
            ..context_in(dir.path(), CliConfig::default())
        };
        assert_eq!(ctx.base_dir(), dir.path().join("conf"));

        let ctx = Context {
            config_path: Some(PathBuf::from("nutcart.toml")),
            ..context_in(dir.path(), CliConfig::default())
        };
        assert_eq!(ctx.base_dir(), dir.path().to_path_buf());
    }

    #[test]
    fn test_bad_currency() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = CliConfig::default();
        config.catalog.currency = "XYZ".into();
        assert!(context_in(dir.path(), config).catalog().is_err());
    }
}
