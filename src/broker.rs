//! Collaborator contract for the privileged tab process.
//!
//! The broker performs the actual enumeration, activation, and closure; the
//! session core only ever sees [`TabEntry`] records and opaque ids. Every
//! boundary call is attempted once, no retries.

use thiserror::Error;

use crate::config::SearchScope;
use crate::tab::{TabEntry, TabId};

/// Failures reported by the privileged process.
#[derive(Debug, Error)]
pub enum BrokerError {
    /// Tab enumeration could not complete.
    #[error("tab query failed: {0}")]
    Query(String),

    /// The id no longer refers to an open tab.
    #[error("tab {0} not found")]
    NotFound(TabId),

    /// The tab exists but its window could not be focused.
    #[error("window operation failed: {0}")]
    Window(String),
}

/// Epoch stamp for one session's tab-set fetch.
///
/// Issued when a session opens and compared on delivery, so a response that
/// arrives after the session was dismissed (or after a newer session opened)
/// is discarded instead of resurrecting torn-down UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    epoch: u64,
}

impl FetchTicket {
    pub(crate) fn new(epoch: u64) -> Self {
        Self { epoch }
    }
}

/// The privileged tab API.
///
/// `request_tabs` is fire-and-forget: the host forwards the enumeration
/// request and later hands the response to the session together with the
/// ticket. Activation and closure are request/response calls attempted once
/// from the session's single thread.
pub trait TabBroker {
    /// Ask the privileged process for the current tab set. The response is
    /// delivered back through the session with the same ticket.
    fn request_tabs(&mut self, ticket: FetchTicket, scope: SearchScope);

    /// Focus the tab's window and make the tab active.
    fn activate_tab(&mut self, id: TabId) -> Result<(), BrokerError>;

    /// Close the tab. The session has already removed it locally by the time
    /// this is called; errors are informational only.
    fn close_tab(&mut self, id: TabId) -> Result<(), BrokerError>;
}

/// Result of one tab-set fetch as delivered by the host.
pub type FetchResult = Result<Vec<TabEntry>, BrokerError>;
