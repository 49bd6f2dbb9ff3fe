//! Web parts shipped with the host

mod hello;

pub use hello::{COLOR_OPTIONS, HelloProperties, HelloPropertyPane, HelloView};
