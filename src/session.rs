//! Session controller: the overlay's open/filter/navigate/activate state
//! machine.
//!
//! [`TabSwitcher`] guards the single-session invariant and routes events;
//! `Session` holds the state of one open-to-close cycle. All event methods
//! run turn-by-turn on one thread; asynchrony enters only through the
//! epoch-stamped tab fetch and the host-driven debounce timer.

use std::sync::Arc;

use tracing::{debug, info};

use crate::broker::{FetchResult, FetchTicket, TabBroker};
use crate::config::SwitcherConfig;
use crate::debounce::{DebounceGate, DebounceTicket};
use crate::error::{ResultExt, SwitchError};
use crate::highlight::highlight;
use crate::search::filter_and_rank;
use crate::subscription::SubscriptionSet;
use crate::tab::{TabEntry, TabId};
use crate::view::{ListRender, OverlayView, RowModel};

/// Navigation keys the overlay forwards from the search input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    /// Advance by one, wrapping to the top past the end.
    Down,
    /// Same as `Down`.
    Tab,
    /// Retreat by one, wrapping to the bottom before the start.
    Up,
    /// Jump forward by the page stride, clamped to the last row.
    PageDown,
    /// Same as `PageDown`.
    Right,
    /// Jump back by the page stride, clamped to the first row.
    PageUp,
    /// Same as `PageUp`.
    Left,
}

/// State of one open overlay.
struct Session<V: OverlayView> {
    view: V,
    subscriptions: SubscriptionSet,
    debounce: DebounceGate,
    fetch: FetchTicket,
    /// Full fetched set, fetch order preserved.
    candidates: Vec<Arc<TabEntry>>,
    /// Currently rendered (filtered) list.
    rendered: Vec<Arc<TabEntry>>,
    query: String,
    /// Index into `rendered`, `None` when nothing is selected.
    cursor: Option<usize>,
}

/// One switcher per page. Owns the broker and at most one open session;
/// `handle_show` while a session is open is a no-op, so duplicate show
/// triggers cannot stack overlays.
pub struct TabSwitcher<B: TabBroker, V: OverlayView> {
    config: SwitcherConfig,
    broker: B,
    session: Option<Session<V>>,
    /// Bumped on every open; stamps fetch tickets so a response for a
    /// dismissed session can never land in a newer one.
    epoch: u64,
}

impl<B: TabBroker, V: OverlayView> TabSwitcher<B, V> {
    pub fn new(config: SwitcherConfig, broker: B) -> Self {
        Self {
            config,
            broker,
            session: None,
            epoch: 0,
        }
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Query text of the open session, if any.
    pub fn query(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.query.as_str())
    }

    /// Cursor position within the rendered list of the open session.
    pub fn cursor(&self) -> Option<usize> {
        self.session.as_ref().and_then(|s| s.cursor)
    }

    /// Ids of the currently rendered rows, in display order.
    pub fn rendered_ids(&self) -> Vec<TabId> {
        self.session
            .as_ref()
            .map(|s| s.rendered.iter().map(|t| t.id).collect())
            .unwrap_or_default()
    }

    /// Open the overlay and request the tab set.
    ///
    /// `open_view` builds the overlay surface and registers the session's
    /// document-level listeners; it is only invoked when a session actually
    /// opens. Returns the fetch ticket the host must hand back with the
    /// enumeration response, or `None` when a session was already open.
    pub fn handle_show(
        &mut self,
        open_view: impl FnOnce() -> (V, SubscriptionSet),
    ) -> Option<FetchTicket> {
        if self.session.is_some() {
            debug!("show ignored, session already open");
            return None;
        }

        self.epoch += 1;
        let ticket = FetchTicket::new(self.epoch);
        let (mut view, subscriptions) = open_view();
        view.open();

        self.session = Some(Session {
            view,
            subscriptions,
            debounce: DebounceGate::new(),
            fetch: ticket,
            candidates: Vec::new(),
            rendered: Vec::new(),
            query: String::new(),
            cursor: None,
        });

        info!(epoch = self.epoch, "overlay session opened");
        self.broker.request_tabs(ticket, self.config.scope);
        Some(ticket)
    }

    /// Deliver the enumeration response for `ticket`.
    ///
    /// A response whose ticket does not match the live session (the session
    /// was dismissed, or a newer one opened) is discarded. A failed fetch
    /// degrades to an empty list; the overlay stays open.
    pub fn deliver_tabs(&mut self, ticket: FetchTicket, result: FetchResult) {
        let Some(session) = self.session.as_mut() else {
            debug!("discarding tab fetch result, no open session");
            return;
        };
        if session.fetch != ticket {
            debug!("discarding stale tab fetch result");
            return;
        }

        session.candidates = result
            .map_err(SwitchError::Fetch)
            .log_err()
            .map(|tabs| tabs.into_iter().map(Arc::new).collect())
            .unwrap_or_default();
        session.query.clear();
        session.cursor = None;
        session.rerender();
    }

    /// Record new query text. Returns the debounce ticket the host should
    /// fire after [`SwitcherConfig::debounce`] of quiet, or `None` when no
    /// session is open.
    pub fn handle_input(&mut self, text: &str) -> Option<DebounceTicket> {
        let session = self.session.as_mut()?;
        session.query = text.to_string();
        Some(session.debounce.schedule())
    }

    /// A debounce timer fired. Commits a re-filter only when `ticket` is
    /// still the most recently scheduled one; earlier keystrokes' timers are
    /// discarded so a burst coalesces into a single computation over the
    /// final text.
    pub fn debounce_fired(&mut self, ticket: DebounceTicket) {
        let Some(session) = self.session.as_mut() else {
            debug!("discarding debounce fire, no open session");
            return;
        };
        if !session.debounce.is_current(ticket) {
            debug!("discarding superseded debounce fire");
            return;
        }
        session.cursor = None;
        session.rerender();
    }

    /// Move the selection cursor. No-op when the rendered list is empty.
    pub fn navigate(&mut self, key: NavKey) {
        let page_jump = self.config.page_jump as i64;
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let count = session.rendered.len() as i64;
        if count == 0 {
            return;
        }

        let current = session.cursor.map(|i| i as i64).unwrap_or(-1);
        let last = count - 1;
        let next = match key {
            NavKey::Down | NavKey::Tab => {
                if current < last {
                    current + 1
                } else {
                    0
                }
            }
            NavKey::Up => {
                if current <= 0 {
                    last
                } else {
                    current - 1
                }
            }
            NavKey::PageDown | NavKey::Right => (current + page_jump).min(last),
            NavKey::PageUp | NavKey::Left => (current - page_jump).max(0),
        };

        session.cursor = Some(next as usize);
        session.view.update_selection(session.cursor);
        session.view.scroll_into_view(next as usize);
    }

    /// Activate the tab under the cursor. Ignored when nothing is selected.
    /// Returns true when the tab was activated and the session closed.
    pub fn activate_selected(&mut self) -> bool {
        let Some(session) = self.session.as_ref() else {
            return false;
        };
        match session.cursor {
            Some(index) => self.activate_index(index),
            None => {
                debug!("activate ignored, no selection");
                false
            }
        }
    }

    /// Activate the row at `index` directly (mouse click or hovered item):
    /// equivalent to navigating to that row and activating it.
    pub fn activate_at(&mut self, index: usize) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if index >= session.rendered.len() {
            debug!(index, "activate ignored, row out of range");
            return false;
        }
        session.cursor = Some(index);
        session.view.update_selection(session.cursor);
        self.activate_index(index)
    }

    fn activate_index(&mut self, index: usize) -> bool {
        let Some(session) = self.session.as_ref() else {
            return false;
        };
        let Some(tab) = session.rendered.get(index) else {
            debug!(index, "activate ignored, row out of range");
            return false;
        };
        let id = tab.id;

        // One attempt, no retry. Failure leaves the session untouched; the
        // user can pick another row.
        let activated = self
            .broker
            .activate_tab(id)
            .map_err(SwitchError::Activate)
            .warn_on_err()
            .is_some();
        if activated {
            info!(%id, "tab activated");
            self.close_session("activated");
        }
        activated
    }

    /// Close the tab with `id`: remove it from the local candidate set
    /// immediately, fire the remote closure, and re-render with the current
    /// query re-applied. The session stays open.
    ///
    /// Apply locally, fire-and-forget remote, reconcile never: a failed
    /// remote closure leaves the real tab open while the list no longer
    /// shows it.
    pub fn close_item(&mut self, id: TabId) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let before = session.candidates.len();
        session.candidates.retain(|t| t.id != id);
        if session.candidates.len() == before {
            debug!(%id, "close ignored, id not in candidate set");
            return;
        }

        let _ = self
            .broker
            .close_tab(id)
            .map_err(SwitchError::Close)
            .warn_on_err();

        if let Some(session) = self.session.as_mut() {
            session.rerender();
        }
    }

    /// Dismiss the overlay: Escape, a pointer event on the backdrop, or the
    /// page becoming hidden.
    pub fn dismiss(&mut self) {
        if self.session.is_some() {
            self.close_session("dismissed");
        }
    }

    fn close_session(&mut self, reason: &str) {
        if let Some(mut session) = self.session.take() {
            session.debounce.cancel_pending();
            session.subscriptions.clear();
            session.view.teardown();
            info!(reason, "overlay session closed");
        }
    }
}

impl<V: OverlayView> Session<V> {
    /// Recompute the rendered list for the current query and push it to the
    /// view. Clamps the cursor so it stays inside the new list.
    fn rerender(&mut self) {
        let matches = filter_and_rank(&self.candidates, &self.query);
        self.rendered = matches.into_iter().map(|m| m.tab).collect();

        self.cursor = match self.cursor {
            Some(_) if self.rendered.is_empty() => None,
            Some(i) => Some(i.min(self.rendered.len() - 1)),
            None => None,
        };

        // Only substring occurrences get emphasis; a whitespace-only query
        // renders unfiltered and unmarked.
        let mark_query = if self.query.trim().is_empty() {
            ""
        } else {
            self.query.as_str()
        };

        let rows: Vec<RowModel> = self
            .rendered
            .iter()
            .map(|tab| RowModel {
                id: tab.id,
                title_markup: highlight(tab.display_title(), mark_query),
                host: tab.display_host().to_string(),
                favicon: tab.favicon().map(str::to_string),
            })
            .collect();

        let list = ListRender {
            count_line: format!("{} of {} tabs", rows.len(), self.candidates.len()),
            rows,
            selected: self.cursor,
        };
        self.view.render(&list);
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
