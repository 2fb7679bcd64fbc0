//! Person name value object

use std::fmt;

use crate::common::is_empty;
use crate::error::DomainError;

/// A person's full name.
///
/// Only `name` is required; `surname` and `middlename` may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FullName {
    name: String,
    surname: String,
    middlename: String,
}

impl FullName {
    /// Create a new full name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ArgumentNotProvided` if `name` is empty.
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        middlename: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if is_empty(&name) {
            return Err(DomainError::argument_not_provided("missing name in fullname"));
        }
        Ok(Self {
            name,
            surname: surname.into(),
            middlename: middlename.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn middlename(&self) -> &str {
        &self.middlename
    }
}

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = [&self.name, &self.middlename, &self.surname];
        let mut first = true;
        for part in parts.into_iter().filter(|p| !p.is_empty()) {
            if !first {
                f.write_str(" ")?;
            }
            f.write_str(part)?;
            first = false;
        }
        Ok(())
    }
}
