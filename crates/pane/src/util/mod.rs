//! Shared helpers for CLI commands

pub mod activation;
