//! Channel-backed navigation port.
//!
//! The HTTP layer runs outside the component tree and cannot reach the
//! router, so it posts redirect requests into a channel that a layout
//! component drains.

use std::sync::Mutex;

use futures_channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};

use crate::ports::outbound::NavigationPort;

/// A request to show the sign-in page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginRedirect;

pub struct LoginRedirects {
    sender: UnboundedSender<LoginRedirect>,
    receiver: Mutex<Option<UnboundedReceiver<LoginRedirect>>>,
}

impl Default for LoginRedirects {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginRedirects {
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self {
            sender,
            receiver: Mutex::new(Some(receiver)),
        }
    }

    /// Hand out the receiving end. Only the first caller gets it.
    pub fn take_receiver(&self) -> Option<UnboundedReceiver<LoginRedirect>> {
        self.receiver
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take()
    }
}

impl NavigationPort for LoginRedirects {
    fn redirect_to_login(&self) {
        tracing::info!("Session could not be refreshed, redirecting to sign in");
        if let Err(e) = self.sender.unbounded_send(LoginRedirect) {
            tracing::debug!(error = %e, "No listener for login redirect");
        }
    }
}
