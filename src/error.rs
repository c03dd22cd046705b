use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Failure of the nested record id check.
#[derive(Debug, PartialEq, Eq)]
pub struct SelfCheckFailed {
    msg: String,
}

impl SelfCheckFailed {
    pub fn new(msg: String) -> Self {
        Self { msg }
    }

    pub fn not_consecutive(first: usize, second: usize) -> Self {
        Self::new(format!(
            "Nested records should have consecutive IDs, got {} followed by {}",
            first, second
        ))
    }

    pub fn malformed_render(rendered: &str, expected: usize) -> Self {
        Self::new(format!(
            "Nested records should have consecutive IDs, rendered \"{}\" instead of \"ID: {}\"",
            rendered, expected
        ))
    }

    pub fn msg(&self) -> &str {
        &self.msg
    }
}

impl Display for SelfCheckFailed {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.msg)
    }
}

impl Error for SelfCheckFailed {}
