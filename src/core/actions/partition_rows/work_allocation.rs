use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// How image rows are split between render threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkAllocation {
    /// One contiguous block of `height / thread_count` rows per thread.
    #[default]
    Static,
    /// Rows dealt round-robin: thread `t` takes `t, t + n, t + 2n, ...`.
    Dynamic,
}

impl WorkAllocation {
    pub const ALL: &'static [Self] = &[Self::Static, Self::Dynamic];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Dynamic => "dynamic",
        }
    }
}

impl fmt::Display for WorkAllocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownWorkAllocation(pub String);

impl fmt::Display for UnknownWorkAllocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid work allocation type '{}', use 'static' or 'dynamic'",
            self.0
        )
    }
}

impl Error for UnknownWorkAllocation {}

impl FromStr for WorkAllocation {
    type Err = UnknownWorkAllocation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|allocation| allocation.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownWorkAllocation(s.to_string()))
    }
}
