//! Error types for the ledger.

/// All errors surfaced by ledger boundary operations.
///
/// Every failure is local and synchronous; a failed mutation leaves the
/// prior store and filter state untouched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Filter input that does not parse as a calendar date.
    #[error("invalid date '{0}': expected DD/MM/YYYY or YYYY-MM-DD")]
    InvalidDate(String),

    /// Generation requested with a count of zero.
    #[error("order count must be at least 1, got {0}")]
    InvalidCount(usize),

    /// Category string that names no known category.
    #[error("unknown category '{0}': expected Traditional, Special, or Sweet")]
    UnknownCategory(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            format!("{}", Error::InvalidCount(0)),
            "order count must be at least 1, got 0"
        );
        assert!(format!("{}", Error::InvalidDate("junk".into())).contains("'junk'"));
        assert!(format!("{}", Error::UnknownCategory("savory".into())).contains("'savory'"));
    }

    #[test]
    fn is_error() {
        let err: Box<dyn std::error::Error> = Box::new(Error::InvalidCount(0));
        assert!(err.to_string().contains("count"));
    }
}
