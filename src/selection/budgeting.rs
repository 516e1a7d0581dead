use std::fmt;

use serde::{Deserialize, Serialize};

/// Unit in which summary length is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeUnit {
    Tokens,
    #[default]
    Chars,
}

impl SizeUnit {
    /// `words` is the invocation-surface flag: tokens when set, characters otherwise.
    pub fn from_words_flag(words: bool) -> Self {
        if words {
            SizeUnit::Tokens
        } else {
            SizeUnit::Chars
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SizeUnit::Tokens => "tokens",
            SizeUnit::Chars => "chars",
        }
    }
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Size limit for one optimizer run. Zero and negative limits are legal and
/// admit nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeBudget {
    pub limit: i64,
    pub unit: SizeUnit,
}

impl SizeBudget {
    pub fn new(limit: i64, unit: SizeUnit) -> Self {
        Self { limit, unit }
    }

    pub fn chars(limit: i64) -> Self {
        Self::new(limit, SizeUnit::Chars)
    }

    pub fn tokens(limit: i64) -> Self {
        Self::new(limit, SizeUnit::Tokens)
    }

    /// Budget left once `used` units have been spent. May be negative.
    pub fn remaining(&self, used: usize) -> i64 {
        self.limit.saturating_sub(as_signed(used))
    }

    pub fn is_exhausted(&self, used: usize) -> bool {
        as_signed(used) >= self.limit
    }

    /// Feasibility gate: `used + size <= limit`.
    pub fn admits(&self, used: usize, size: usize) -> bool {
        as_signed(used).saturating_add(as_signed(size)) <= self.limit
    }

    /// Whether a sentence of `size` can still be considered, i.e. is strictly
    /// smaller than the remaining budget.
    pub fn keeps(&self, used: usize, size: usize) -> bool {
        as_signed(size) < self.remaining(used)
    }
}

fn as_signed(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}
