//! # sqlf
//!
//! printf-style assembly of SQL text and bound parameters.
//!
//! ## Features
//!
//! - **Two verbs**: `%p` binds an argument behind a dialect placeholder,
//!   `%s` splices it in as literal text
//! - **Spread**: `%+p` / `%+s` consume every remaining argument of the segment
//! - **Nesting**: a [`Builder`] passed as an argument is rendered in place and
//!   its params are spliced into the parent's, with continuous numbering
//! - **Dialects**: `$1, $2, ...` for Postgres, `?` for MySQL/SQLite, or any
//!   registered [`Driver`]
//! - **tokio-postgres ready**: [`ParamList::as_refs`] feeds `client.query` directly
//!
//! ## Example
//!
//! ```ignore
//! use sqlf::{args, format};
//!
//! let filter = format("name = %p", args!["Tom"]).appended("age > %p", args![12]);
//! let q = format(
//!     "SELECT id FROM users WHERE status = %p AND %s ORDER BY %s LIMIT %p",
//!     args!["active", filter, "id", 10],
//! );
//!
//! assert_eq!(
//!     q.to_sql()?,
//!     "SELECT id FROM users WHERE status = $1 AND name = $2 AND age > $3 ORDER BY id LIMIT $4"
//! );
//! let rows = client.query(&q.to_sql()?, &q.params()?.as_refs()).await?;
//! ```

pub mod builder;
pub mod driver;
pub mod error;
pub mod template;
pub mod value;

pub use builder::{Builder, DEFAULT_SEPARATOR, ParamList};
pub use driver::{
    Driver, DriverFactory, MarkDriver, NumberedDriver, Registry, default_driver, register_driver,
    set_default_driver,
};
pub use error::{FormatError, FormatResult};
pub use template::{Verb, VerbKind};
pub use value::Value;

/// Start a builder with one `(template, args)` segment.
///
/// ```ignore
/// let q = sqlf::format("SELECT id FROM t WHERE name = %p LIMIT %p OFFSET %p", args!["Tom", 10, 0]);
/// assert_eq!(q.to_sql()?, "SELECT id FROM t WHERE name = $1 LIMIT $2 OFFSET $3");
/// ```
pub fn format<A>(template: impl Into<String>, args: A) -> Builder
where
    A: IntoIterator,
    A::Item: Into<Value>,
{
    Builder::format(template, args)
}

/// Start an empty builder.
pub fn new() -> Builder {
    Builder::new()
}

/// Build a `Vec<Value>` from heterogeneous arguments.
///
/// ```ignore
/// let args = sqlf::args![1, "Tom", vec![1, 2, 3], None::<i32>];
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::Value::from($arg)),+]
    };
}
