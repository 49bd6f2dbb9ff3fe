//! Host context and environment detection
//!
//! Everything here is pure: the host shell supplies a [`HostContext`] once per
//! activation and [`resolve`] maps it to an [`EnvironmentMessage`] key.

mod environment;
mod host;

pub use environment::{resolve, EnvironmentMessage};
pub use host::{HostContext, HostName};
