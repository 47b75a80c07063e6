//! notoconf
pub mod catalog;
pub mod command;
pub mod core;
pub mod logging;
pub mod reconcile;
pub mod selection;
pub mod session;
#[cfg(feature = "tui")]
pub mod tui;
