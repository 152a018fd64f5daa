use super::{Driver, LIST_SEPARATOR};

/// Positional placeholders that repeat one fixed mark (`?` for MySQL/SQLite).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkDriver {
    name: &'static str,
    mark: char,
}

impl MarkDriver {
    /// A driver emitting `mark` for every slot.
    pub fn new(name: &'static str, mark: char) -> Self {
        Self { name, mark }
    }

    /// `?` marks, named `mysql`.
    pub fn mysql() -> Self {
        Self::new("mysql", '?')
    }

    /// `?` marks, named `sqlite`.
    pub fn sqlite() -> Self {
        Self::new("sqlite", '?')
    }

    pub fn mark(&self) -> char {
        self.mark
    }
}

impl Default for MarkDriver {
    fn default() -> Self {
        Self::mysql()
    }
}

impl Driver for MarkDriver {
    fn name(&self) -> &str {
        self.name
    }

    fn write_placeholders(&mut self, n: usize, out: &mut String) {
        if n == 0 {
            return;
        }
        out.reserve(n * self.mark.len_utf8() + (n - 1) * LIST_SEPARATOR.len());
        out.push(self.mark);
        for _ in 1..n {
            out.push_str(LIST_SEPARATOR);
            out.push(self.mark);
        }
    }
}
