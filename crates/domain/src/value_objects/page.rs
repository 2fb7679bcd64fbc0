//! Pagination window for list queries

use crate::error::DomainError;

/// Largest `limit`/`offset` the server accepts.
pub const MAX_PAGE_VALUE: u32 = 1000;

/// A `limit`/`offset` window.
///
/// `Page::default()` leaves both unset so the server applies its own defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Page {
    limit: Option<u32>,
    offset: Option<u32>,
}

impl Page {
    /// Create a page window.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ArgumentInvalid` if either value exceeds
    /// [`MAX_PAGE_VALUE`].
    pub fn new(limit: u32, offset: u32) -> Result<Self, DomainError> {
        if limit > MAX_PAGE_VALUE {
            return Err(DomainError::argument_invalid(format!(
                "limit cannot exceed {}",
                MAX_PAGE_VALUE
            )));
        }
        if offset > MAX_PAGE_VALUE {
            return Err(DomainError::argument_invalid(format!(
                "offset cannot exceed {}",
                MAX_PAGE_VALUE
            )));
        }
        Ok(Self {
            limit: Some(limit),
            offset: Some(offset),
        })
    }

    pub fn limit(&self) -> Option<u32> {
        self.limit
    }

    pub fn offset(&self) -> Option<u32> {
        self.offset
    }

    /// Query pairs to append to a list URL; empty for the default page.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset", offset.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_page_has_no_query() {
        assert!(Page::default().query_pairs().is_empty());
    }

    #[test]
    fn explicit_page_renders_both_pairs() {
        let page = Page::new(20, 40).unwrap();
        assert_eq!(
            page.query_pairs(),
            vec![("limit", "20".to_string()), ("offset", "40".to_string())]
        );
    }

    #[test]
    fn rejects_values_above_limit() {
        assert!(matches!(
            Page::new(MAX_PAGE_VALUE + 1, 0),
            Err(DomainError::ArgumentInvalid(_))
        ));
        assert!(matches!(
            Page::new(10, MAX_PAGE_VALUE + 1),
            Err(DomainError::ArgumentInvalid(_))
        ));
        assert!(Page::new(MAX_PAGE_VALUE, MAX_PAGE_VALUE).is_ok());
    }
}
