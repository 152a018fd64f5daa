//! Placeholder drivers.
//!
//! A [`Driver`] turns "this operand needs N bound slots" into dialect
//! placeholder text. One driver instance lives for one top-level render, so a
//! numbering driver keeps counting across segments and nested builders.
//!
//! Built-in drivers:
//! - [`NumberedDriver`]: `$1, $2, ...` (registered as `postgres`)
//! - [`MarkDriver`]: `?, ?, ...` (registered as `mysql` and `sqlite`)

mod mark;
mod numbered;
mod registry;


pub use mark::MarkDriver;
pub use numbered::NumberedDriver;
pub use registry::{
    DriverFactory, Registry, default_driver, register_driver, set_default_driver,
};

use crate::value::Value;
use dyn_clone::DynClone;
use std::fmt;

/// Separator between placeholders of a multi-slot operand.
pub(crate) const LIST_SEPARATOR: &str = ", ";

/// Dialect placeholder generator.
///
/// Cloning a driver snapshots its state; a builder pinned to a driver renders
/// from a fresh clone each time, which keeps rendering idempotent.
pub trait Driver: DynClone + Send + Sync + fmt::Debug {
    /// Short dialect name, used in logs.
    fn name(&self) -> &str;

    /// Append `n` placeholders joined by `", "` to `out`.
    ///
    /// `n == 0` writes nothing.
    fn write_placeholders(&mut self, n: usize, out: &mut String);

    /// Placeholder text for `value`, sized by [`Value::count`].
    fn placeholder(&mut self, value: &Value) -> String {
        let mut out = String::new();
        self.write_placeholders(value.count(), &mut out);
        out
    }
}

dyn_clone::clone_trait_object!(Driver);

impl Driver for Box<dyn Driver> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn write_placeholders(&mut self, n: usize, out: &mut String) {
        (**self).write_placeholders(n, out)
    }
}
