//! snapdeps - SNAPSHOT sibling dependency resolver library
//!
//! This library finds the in-development siblings a project depends on:
//! - Snapshot properties (`<name>-version = "...-SNAPSHOT"`) name the siblings
//! - Each sibling is looked up next to the root checkout first
//! - Otherwise its repository is derived from the root repository and probed

pub mod cli;
pub mod descriptor;
pub mod domain;
pub mod error;
pub mod locator;
pub mod orchestrator;
pub mod output;
pub mod progress;
pub mod remote;
