//! Web part host
//!
//! Drives configurable web parts through their `init → render → dispose`
//! lifecycle and provides the pieces a property pane needs:
//! - [`options::OptionsCache`]: load-once option lists with a disabled gate
//! - [`options::OptionSource`]: injected async fetch collaborators
//! - [`pane`]: the serializable property pane model
//! - [`parts::HelloPropertyPane`]: the demo web part tying it together

pub mod options;
pub mod pane;
pub mod parts;
pub mod webpart;
