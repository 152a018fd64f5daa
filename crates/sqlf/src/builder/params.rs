//! Bound parameter list produced by [`Builder::params`](super::Builder::params).

use crate::value::Value;
use tokio_postgres::types::ToSql;

/// Flat, ordered list of bound values.
///
/// The n-th value corresponds to the n-th placeholder of the rendered SQL.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParamList {
    params: Vec<Value>,
}

impl ParamList {
    /// Create a new empty parameter list.
    pub fn new() -> Self {
        Self { params: Vec::new() }
    }

    pub(crate) fn push(&mut self, value: Value) {
        self.params.push(value);
    }

    /// Get the current parameter count.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterate over the values in placeholder order.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.params.iter()
    }

    /// Borrow the values as a slice.
    pub fn as_slice(&self) -> &[Value] {
        &self.params
    }

    /// Take the values out of the list.
    pub fn into_vec(self) -> Vec<Value> {
        self.params
    }

    /// Get all parameters as references for tokio-postgres.
    ///
    /// ```ignore
    /// let (sql, params) = q.build()?;
    /// let rows = client.query(&sql, &params.as_refs()).await?;
    /// ```
    pub fn as_refs(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.params
            .iter()
            .map(|p| p as &(dyn ToSql + Sync))
            .collect()
    }
}

impl From<Vec<Value>> for ParamList {
    fn from(params: Vec<Value>) -> Self {
        Self { params }
    }
}

impl PartialEq<Vec<Value>> for ParamList {
    fn eq(&self, other: &Vec<Value>) -> bool {
        &self.params == other
    }
}

impl IntoIterator for ParamList {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.into_iter()
    }
}

impl<'a> IntoIterator for &'a ParamList {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.iter()
    }
}
