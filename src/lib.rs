//! Tab Omnibar - ranking engine and session controller for a browser tab switcher.
//!
//! The privileged tab API and the overlay surface are collaborator traits
//! ([`broker::TabBroker`], [`view::OverlayView`]) implemented by host glue;
//! this crate owns scoring, ordering, highlighting, and the
//! open/filter/navigate/activate session state machine.

pub mod broker;
pub mod config;
pub mod debounce;
pub mod error;
pub mod highlight;
pub mod logging;
pub mod search;
pub mod session;
pub mod subscription;
pub mod tab;
pub mod view;
