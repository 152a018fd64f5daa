//! The two passes over a builder's segments.
//!
//! [`write_sql`] and [`collect_params`] walk the same [`pieces`] and consume
//! arguments through the same [`ArgCursor`], so the n-th placeholder written by
//! one always lines up with the n-th value pushed by the other.

use super::{Builder, ParamList};
use crate::driver::{Driver, LIST_SEPARATOR};
use crate::error::{FormatError, FormatResult};
use crate::template::{Piece, Verb, VerbKind, pieces};
use crate::value::{Value, count_all};

/// Left-to-right argument consumption for one segment.
struct ArgCursor<'a> {
    segment: usize,
    args: &'a [Value],
    next: usize,
}

impl<'a> ArgCursor<'a> {
    fn new(segment: usize, args: &'a [Value]) -> Self {
        Self {
            segment,
            args,
            next: 0,
        }
    }

    /// The operand of `verb`: one argument, or every remaining one for spreads.
    fn take(&mut self, verb: Verb) -> FormatResult<&'a [Value]> {
        if self.next >= self.args.len() {
            return Err(FormatError::MissingArgument {
                verb,
                segment: self.segment,
                available: self.args.len(),
            });
        }
        let start = self.next;
        self.next = if verb.spread {
            self.args.len()
        } else {
            start + 1
        };
        Ok(&self.args[start..self.next])
    }
}

/// Render every segment of `builder` into `out`, joined by its separator.
pub(super) fn write_sql(
    builder: &Builder,
    driver: &mut dyn Driver,
    out: &mut String,
) -> FormatResult<()> {
    for (n, segment) in builder.segments.iter().enumerate() {
        if n > 0 {
            out.push_str(&builder.separator);
        }
        let mut args = ArgCursor::new(n, &segment.args);
        for piece in pieces(&segment.template) {
            match piece {
                Piece::Text(text) => out.push_str(text),
                Piece::Verb(verb) => {
                    let operand = args.take(verb)?;
                    match verb.kind {
                        VerbKind::Bind => write_bound_run(operand, driver, out)?,
                        VerbKind::Literal => write_literal_run(operand, driver, out)?,
                    }
                }
            }
        }
    }
    Ok(())
}

/// Append the bound values of `builder` in placeholder order.
pub(super) fn collect_params(builder: &Builder, out: &mut ParamList) -> FormatResult<()> {
    for (n, segment) in builder.segments.iter().enumerate() {
        let mut args = ArgCursor::new(n, &segment.args);
        for piece in pieces(&segment.template) {
            let Piece::Verb(verb) = piece else {
                continue;
            };
            let operand = args.take(verb)?;
            match verb.kind {
                VerbKind::Bind => bind_values(operand, out)?,
                VerbKind::Literal => nested_params(operand, out)?,
            }
        }
    }
    Ok(())
}

fn write_bound_run(
    values: &[Value],
    driver: &mut dyn Driver,
    out: &mut String,
) -> FormatResult<()> {
    if !values.iter().any(Value::contains_builder) {
        driver.write_placeholders(count_all(values), out);
        return Ok(());
    }

    // Nested builders contribute their own text, so placeholders are written
    // per element and empty pieces are skipped to avoid dangling separators.
    let mut first = true;
    for value in values {
        let mut piece = String::new();
        write_bound(value, driver, &mut piece)?;
        if piece.is_empty() {
            continue;
        }
        if !first {
            out.push_str(LIST_SEPARATOR);
        }
        first = false;
        out.push_str(&piece);
    }
    Ok(())
}

fn write_bound(value: &Value, driver: &mut dyn Driver, out: &mut String) -> FormatResult<()> {
    match value {
        Value::List(items) => write_bound_run(items, driver, out),
        Value::Builder(nested) => nested.write_sql(driver, out),
        _ => {
            driver.write_placeholders(1, out);
            Ok(())
        }
    }
}

fn write_literal_run(
    values: &[Value],
    driver: &mut dyn Driver,
    out: &mut String,
) -> FormatResult<()> {
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.push_str(LIST_SEPARATOR);
        }
        write_literal(value, driver, out)?;
    }
    Ok(())
}

pub(crate) fn write_literal(
    value: &Value,
    driver: &mut dyn Driver,
    out: &mut String,
) -> FormatResult<()> {
    match value {
        Value::List(items) => write_literal_run(items, driver, out),
        // The nested builder shares the parent's driver so numbering continues.
        Value::Builder(nested) => nested.write_sql(driver, out),
        scalar => {
            scalar.write_scalar(out);
            Ok(())
        }
    }
}

fn bind_values(values: &[Value], out: &mut ParamList) -> FormatResult<()> {
    for value in values {
        match value {
            Value::List(items) => bind_values(items, out)?,
            Value::Builder(nested) => collect_params(nested, out)?,
            leaf => out.push(leaf.clone()),
        }
    }
    Ok(())
}

/// Literal operands bind nothing themselves, but nested builders inside them
/// still carry bound values.
fn nested_params(values: &[Value], out: &mut ParamList) -> FormatResult<()> {
    for value in values {
        match value {
            Value::List(items) => nested_params(items, out)?,
            Value::Builder(nested) => collect_params(nested, out)?,
            _ => {}
        }
    }
    Ok(())
}
