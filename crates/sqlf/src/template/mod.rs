//! Verb scanner for format templates.
//!
//! A template is plain SQL text with `%` verbs:
//!
//! | Sequence | Meaning |
//! |---|---|
//! | `%%` | literal `%` |
//! | `%p` | next argument as placeholder(s), bound |
//! | `%s` | next argument as literal text, not bound |
//! | `%+p` | all remaining arguments as placeholders, bound |
//! | `%+s` | all remaining arguments as literal text, not bound |
//!
//! Anything else after `%` is passed through untouched. Both the SQL pass and
//! the params pass drive the same [`Pieces`] iterator, so they always agree on
//! which argument each verb consumes.

use std::fmt;


/// How a verb renders its operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbKind {
    /// `p`: dialect placeholders, values are bound.
    Bind,
    /// `s`: literal text, values are not bound.
    Literal,
}

/// A recognized verb occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verb {
    pub kind: VerbKind,
    /// Consume every remaining argument of the segment instead of one.
    pub spread: bool,
}

impl Verb {
    pub const BIND: Verb = Verb {
        kind: VerbKind::Bind,
        spread: false,
    };
    pub const LITERAL: Verb = Verb {
        kind: VerbKind::Literal,
        spread: false,
    };
    pub const SPREAD_BIND: Verb = Verb {
        kind: VerbKind::Bind,
        spread: true,
    };
    pub const SPREAD_LITERAL: Verb = Verb {
        kind: VerbKind::Literal,
        spread: true,
    };

    /// Canonical template spelling.
    pub fn as_str(&self) -> &'static str {
        match (self.kind, self.spread) {
            (VerbKind::Bind, false) => "%p",
            (VerbKind::Literal, false) => "%s",
            (VerbKind::Bind, true) => "%+p",
            (VerbKind::Literal, true) => "%+s",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One scanned piece of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece<'a> {
    /// Text copied to the output as-is.
    Text(&'a str),
    Verb(Verb),
}

/// Iterator over the pieces of a template.
#[derive(Debug, Clone)]
pub struct Pieces<'a> {
    template: &'a str,
    pos: usize,
}

/// Scan `template` into text and verb pieces.
pub fn pieces(template: &str) -> Pieces<'_> {
    Pieces { template, pos: 0 }
}

impl<'a> Iterator for Pieces<'a> {
    type Item = Piece<'a>;

    fn next(&mut self) -> Option<Piece<'a>> {
        let rest = &self.template[self.pos..];
        let bytes = rest.as_bytes();
        let first = *bytes.first()?;

        if first != b'%' {
            let end = rest.find('%').unwrap_or(rest.len());
            self.pos += end;
            return Some(Piece::Text(&rest[..end]));
        }

        // All bytes inspected below are ASCII, so every slice index lands on
        // a char boundary.
        let pluses = bytes[1..].iter().take_while(|&&b| b == b'+').count();
        let after = 1 + pluses;
        let spread = pluses > 0;

        let (piece, consumed) = match bytes.get(after) {
            Some(b'p') => (
                Piece::Verb(Verb {
                    kind: VerbKind::Bind,
                    spread,
                }),
                after + 1,
            ),
            Some(b's') => (
                Piece::Verb(Verb {
                    kind: VerbKind::Literal,
                    spread,
                }),
                after + 1,
            ),
            Some(b'%') if !spread => (Piece::Text("%"), 2),
            // `%+%`: literal, and the closing `%` does not open a new verb.
            Some(b'%') => (Piece::Text(&rest[..after + 1]), after + 1),
            _ => (Piece::Text(&rest[..after]), after),
        };

        self.pos += consumed;
        Some(piece)
    }
}
