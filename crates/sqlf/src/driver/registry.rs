use super::{Driver, MarkDriver, NumberedDriver};
use crate::error::{FormatError, FormatResult};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Constructor producing a fresh driver instance.
pub type DriverFactory = Arc<dyn Fn() -> Box<dyn Driver> + Send + Sync>;

/// Name of the driver selected by [`Registry::new`].
const BUILTIN_DEFAULT: &str = "postgres";

struct Inner {
    factories: HashMap<String, DriverFactory>,
    default: String,
}

/// Name-to-driver registry with a selected default.
///
/// Builders that are not pinned to a driver resolve the registry's default on
/// every render, so changing the default affects their next render.
///
/// ```ignore
/// let registry = Arc::new(Registry::new());
/// registry.set_default("mysql")?;
///
/// let q = sqlf::format("id = %p", args![1]).with_registry(registry.clone());
/// assert_eq!(q.to_sql()?, "id = ?");
/// ```
pub struct Registry {
    inner: RwLock<Inner>,
}

static GLOBAL: LazyLock<Registry> = LazyLock::new(Registry::new);

impl Registry {
    /// Registry with the built-in `postgres`, `mysql` and `sqlite` drivers,
    /// defaulting to `postgres`.
    pub fn new() -> Self {
        let registry = Self {
            inner: RwLock::new(Inner {
                factories: HashMap::new(),
                default: BUILTIN_DEFAULT.to_string(),
            }),
        };
        registry.register("postgres", || Box::new(NumberedDriver::new()));
        registry.register("mysql", || Box::new(MarkDriver::mysql()));
        registry.register("sqlite", || Box::new(MarkDriver::sqlite()));
        registry
    }

    /// The process-wide registry used by builders without an explicit one.
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Register (or replace) a driver constructor under `name`.
    pub fn register<F>(&self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> Box<dyn Driver> + Send + Sync + 'static,
    {
        let name = name.into();
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "sqlf.driver", driver = %name, "registered driver");
        self.write().factories.insert(name, Arc::new(factory));
    }

    /// Select the default driver. Fails if `name` was never registered.
    pub fn set_default(&self, name: &str) -> FormatResult<()> {
        let mut inner = self.write();
        if !inner.factories.contains_key(name) {
            return Err(FormatError::UnknownDriver(name.to_string()));
        }
        inner.default = name.to_string();
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "sqlf.driver", driver = %name, "default driver changed");
        Ok(())
    }

    /// Name of the current default driver.
    pub fn default_name(&self) -> String {
        self.read().default.clone()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.read().factories.contains_key(name)
    }

    /// Registered driver names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.read().factories.keys().cloned().collect();
        names.sort();
        names
    }

    /// A fresh instance of the driver registered under `name`.
    pub fn resolve(&self, name: &str) -> FormatResult<Box<dyn Driver>> {
        let factory = self
            .read()
            .factories
            .get(name)
            .cloned()
            .ok_or_else(|| FormatError::UnknownDriver(name.to_string()))?;
        Ok(factory())
    }

    /// A fresh instance of the current default driver.
    pub fn resolve_default(&self) -> Box<dyn Driver> {
        let factory = {
            let inner = self.read();
            inner.factories.get(&inner.default).cloned()
        };
        // `set_default` only accepts registered names and entries are never
        // removed, so the lookup always succeeds.
        match factory {
            Some(factory) => factory(),
            None => Box::new(NumberedDriver::new()),
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("drivers", &self.names())
            .field("default", &self.default_name())
            .finish()
    }
}

/// Register a driver in the process-wide registry.
pub fn register_driver<F>(name: impl Into<String>, factory: F)
where
    F: Fn() -> Box<dyn Driver> + Send + Sync + 'static,
{
    Registry::global().register(name, factory);
}

/// Select the process-wide default driver.
pub fn set_default_driver(name: &str) -> FormatResult<()> {
    Registry::global().set_default(name)
}

/// A fresh instance of the process-wide default driver.
pub fn default_driver() -> Box<dyn Driver> {
    Registry::global().resolve_default()
}
