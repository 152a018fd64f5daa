//! Composable format builder.
//!
//! A [`Builder`] is an ordered list of `(template, args)` segments. Rendering
//! joins the segments with a separator (`" AND "` by default) and expands the
//! verbs of each template against its own arguments.
//!
//! # Example
//!
//! ```ignore
//! use sqlf::{args, format, new};
//!
//! let mut values = new().separated_by(", ");
//! values.append("(%+p)", args![1, "Tom", 12]);
//! values.append("(%+p)", args![2, "Huckleberry", 13]);
//!
//! let q = format("INSERT INTO users (id, name, age) VALUES %s", args![values]);
//! assert_eq!(
//!     q.to_sql()?,
//!     "INSERT INTO users (id, name, age) VALUES ($1, $2, $3), ($4, $5, $6)"
//! );
//! assert_eq!(q.params()?.len(), 6);
//! ```

mod params;
pub(crate) mod render;


pub use params::ParamList;

use crate::driver::{Driver, Registry};
use crate::error::FormatResult;
use crate::value::Value;
use std::sync::Arc;

/// Separator used between segments unless overridden.
pub const DEFAULT_SEPARATOR: &str = " AND ";

#[derive(Debug, Clone, PartialEq)]
struct Segment {
    template: String,
    args: Vec<Value>,
}

/// Where a builder gets its driver from at render time.
#[derive(Debug, Clone)]
enum DriverSource {
    /// Current default of [`Registry::global`], re-read on every render.
    Global,
    /// Current default of a caller-supplied registry, re-read on every render.
    Registry(Arc<Registry>),
    /// Explicitly assigned driver; each render starts from a clone of it.
    Pinned(Box<dyn Driver>),
}

/// A composable SQL format builder.
///
/// See the [module docs](self) for the verb grammar and composition rules.
#[must_use]
#[derive(Debug, Clone)]
pub struct Builder {
    segments: Vec<Segment>,
    driver: DriverSource,
    separator: String,
}

impl Builder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
            driver: DriverSource::Global,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }

    /// Create a builder with one initial segment.
    pub fn format<A>(template: impl Into<String>, args: A) -> Self
    where
        A: IntoIterator,
        A::Item: Into<Value>,
    {
        let mut builder = Self::new();
        builder.append(template, args);
        builder
    }

    /// Append a `(template, args)` segment.
    pub fn append<A>(&mut self, template: impl Into<String>, args: A) -> &mut Self
    where
        A: IntoIterator,
        A::Item: Into<Value>,
    {
        self.segments.push(Segment {
            template: template.into(),
            args: args.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Append a segment (consuming version of [`Builder::append`]).
    pub fn appended<A>(mut self, template: impl Into<String>, args: A) -> Self
    where
        A: IntoIterator,
        A::Item: Into<Value>,
    {
        self.append(template, args);
        self
    }

    /// Pin this builder to `driver`.
    ///
    /// A pinned builder ignores later changes to any registry default. Every
    /// render starts from a clone of `driver`, so a driver that has already
    /// issued placeholders continues from its count each time.
    pub fn set_driver<D: Driver + 'static>(&mut self, driver: D) -> &mut Self {
        self.driver = DriverSource::Pinned(Box::new(driver));
        self
    }

    /// Pin this builder to `driver` (consuming version of [`Builder::set_driver`]).
    pub fn with_driver<D: Driver + 'static>(mut self, driver: D) -> Self {
        self.set_driver(driver);
        self
    }

    /// Resolve the default driver from `registry` instead of the global one.
    ///
    /// This unpins a previously pinned builder.
    pub fn set_registry(&mut self, registry: Arc<Registry>) -> &mut Self {
        self.driver = DriverSource::Registry(registry);
        self
    }

    /// Consuming version of [`Builder::set_registry`].
    pub fn with_registry(mut self, registry: Arc<Registry>) -> Self {
        self.set_registry(registry);
        self
    }

    /// Set the text inserted between segments, e.g. `" OR "` or `", "`.
    ///
    /// Applies to segments already appended as well as future ones.
    pub fn set_separator(&mut self, separator: impl Into<String>) -> &mut Self {
        self.separator = separator.into();
        self
    }

    /// Consuming version of [`Builder::set_separator`].
    pub fn separated_by(mut self, separator: impl Into<String>) -> Self {
        self.set_separator(separator);
        self
    }

    /// Text inserted between segments.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Whether a driver was explicitly assigned.
    pub fn is_pinned(&self) -> bool {
        matches!(self.driver, DriverSource::Pinned(_))
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether no segment has been appended.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// A fresh driver for one top-level render.
    pub fn resolve_driver(&self) -> Box<dyn Driver> {
        match &self.driver {
            DriverSource::Global => Registry::global().resolve_default(),
            DriverSource::Registry(registry) => registry.resolve_default(),
            DriverSource::Pinned(driver) => driver.clone(),
        }
    }

    /// Render the SQL text.
    ///
    /// Fails with [`FormatError::MissingArgument`](crate::FormatError::MissingArgument)
    /// when a verb has no argument left; no partial text is returned.
    pub fn to_sql(&self) -> FormatResult<String> {
        let mut driver = self.resolve_driver();
        let mut out = String::new();
        self.write_sql(&mut *driver, &mut out)?;

        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "sqlf.render",
            driver = driver.name(),
            segments = self.segments.len(),
            len = out.len(),
            "rendered sql"
        );

        Ok(out)
    }

    /// Render into `out` using `driver`, continuing whatever numbering the
    /// driver has already issued. The builder's own driver is not consulted.
    ///
    /// On error `out` may hold a partial rendering.
    pub fn write_sql(&self, driver: &mut dyn Driver, out: &mut String) -> FormatResult<()> {
        render::write_sql(self, driver, out)
    }

    /// The bound values, in placeholder order.
    ///
    /// `%p`/`%+p` operands are flattened into leaf values; `%s`/`%+s` operands
    /// contribute only the params of nested builders they contain.
    pub fn params(&self) -> FormatResult<ParamList> {
        let mut out = ParamList::new();
        render::collect_params(self, &mut out)?;
        Ok(out)
    }

    /// Render the SQL text and collect the params in one call.
    pub fn build(&self) -> FormatResult<(String, ParamList)> {
        Ok((self.to_sql()?, self.params()?))
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builders compare by content: segments and separator, not driver.
impl PartialEq for Builder {
    fn eq(&self, other: &Self) -> bool {
        self.segments == other.segments && self.separator == other.separator
    }
}
