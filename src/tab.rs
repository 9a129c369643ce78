//! Tab candidate records as seen by the overlay.
//!
//! One `TabEntry` per open tab, built fresh from each enumeration response.
//! The id is the only identifier carried across the privileged boundary and
//! is opaque beyond "stable for the lifetime of the tab".

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Opaque tab identifier assigned by the privileged process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TabId(pub u32);

impl std::fmt::Display for TabId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One open tab exposed to the ranking and session logic.
///
/// Never mutated in place; closure removes the entry from the session's
/// candidate set instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabEntry {
    pub id: TabId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    /// Icon address; `None` (or empty on the wire) means the row shows no icon.
    #[serde(default, rename = "favIconUrl")]
    pub favicon: Option<String>,
    /// Grouping identifier owned by the privileged process; pass-through only.
    #[serde(default, rename = "windowId")]
    pub window_id: u64,
}

impl TabEntry {
    /// Title for display, falling back to "Untitled" for tabs that have none.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "Untitled"
        } else {
            &self.title
        }
    }

    /// Hostname of the tab's address for the secondary row line, or "No URL"
    /// when the address is empty or has no recognizable host.
    pub fn display_host(&self) -> &str {
        match host_of(&self.url) {
            Some(host) if !host.is_empty() => host,
            _ => "No URL",
        }
    }

    /// Favicon address if one is present and non-blank.
    pub fn favicon(&self) -> Option<&str> {
        self.favicon
            .as_deref()
            .map(str::trim)
            .filter(|f| !f.is_empty())
    }
}

/// Extract the host portion of an absolute URL.
///
/// Scheme and userinfo are stripped, as is any port or path suffix.
/// Returns `None` when there is no `scheme://` prefix to anchor on.
fn host_of(url: &str) -> Option<&str> {
    let rest = url.split_once("://").map(|(_, r)| r)?;
    let authority = rest.split(['/', '?', '#']).next().unwrap_or(rest);
    let host = match authority.rsplit_once('@') {
        Some((_, h)) => h,
        None => authority,
    };
    Some(host.split(':').next().unwrap_or(host))
}

/// Decode an enumeration response, dropping malformed entries.
///
/// The privileged process serializes tabs as a JSON array; an entry that
/// fails to decode (missing or negative id, wrong shape) is skipped rather
/// than failing the whole response.
pub fn parse_tab_list(raw: &serde_json::Value) -> Vec<TabEntry> {
    let Some(items) = raw.as_array() else {
        debug!(payload = %raw, "tab enumeration payload is not an array");
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| match serde_json::from_value::<TabEntry>(item.clone()) {
            Ok(entry) => Some(entry),
            Err(e) => {
                debug!(error = %e, "dropping malformed tab entry");
                None
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "tab_tests.rs"]
mod tab_tests;
