use super::{Driver, LIST_SEPARATOR};

/// Postgres-style `$n` placeholders with a running counter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberedDriver {
    issued: usize,
}

impl NumberedDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue numbering after `issued` existing placeholders; the first
    /// marker written is `$<issued + 1>`.
    pub fn starting_after(issued: usize) -> Self {
        Self { issued }
    }

    /// Number of placeholders issued so far.
    pub fn issued(&self) -> usize {
        self.issued
    }
}

// Fast integer digit count (avoids division loop for common cases).
#[inline]
fn decimal_digits(n: usize) -> usize {
    if n < 10 {
        1
    } else if n < 100 {
        2
    } else if n < 1000 {
        3
    } else if n < 10000 {
        4
    } else {
        (n.ilog10() as usize) + 1
    }
}

// Write a usize as decimal digits into `out` without going through fmt.
#[inline]
fn push_usize(out: &mut String, mut n: usize) {
    if n < 10 {
        out.push((b'0' + n as u8) as char);
        return;
    }
    // Stack buffer for up to 20 digits (u64::MAX).
    let mut buf = [0u8; 20];
    let mut pos = buf.len();
    while n > 0 {
        pos -= 1;
        buf[pos] = b'0' + (n % 10) as u8;
        n /= 10;
    }
    for &digit in &buf[pos..] {
        out.push(digit as char);
    }
}

impl Driver for NumberedDriver {
    fn name(&self) -> &str {
        "postgres"
    }

    fn write_placeholders(&mut self, n: usize, out: &mut String) {
        if n == 0 {
            return;
        }

        let last = self.issued + n;
        out.reserve(n * (1 + decimal_digits(last)) + (n - 1) * LIST_SEPARATOR.len());

        for i in 0..n {
            if i > 0 {
                out.push_str(LIST_SEPARATOR);
            }
            self.issued += 1;
            out.push('$');
            push_usize(out, self.issued);
        }
    }
}
