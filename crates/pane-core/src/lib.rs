//! Core types and configuration for property-pane web parts
//!
//! This crate provides the host-independent pieces shared by the web part host
//! and the `pane` CLI:
//! - Host context and the environment message decision table
//! - Selectable option and people-picker schema types
//! - Layered configuration (`.pane.toml`, global config, env, CLI)
//! - Logging initialization

pub mod config;
pub mod context;
pub mod home;
pub mod logging;
pub mod schema;
pub mod text;

pub use context::{EnvironmentMessage, HostContext, HostName};
pub use schema::{PersonOrGroup, PrincipalType, SelectableOption, SourceItem};
