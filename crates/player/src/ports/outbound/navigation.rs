//! Navigation requests raised outside the UI tree.

/// Lets infrastructure ask the UI to leave the current page.
#[cfg_attr(test, mockall::automock)]
pub trait NavigationPort: Send + Sync {
    /// Send the user to the sign-in page.
    fn redirect_to_login(&self);
}
