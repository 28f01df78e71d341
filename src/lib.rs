//! Appraise TUI - a terminal client for the Appraise technology assessment agent
//!
//! This library exposes modules for use in integration tests.

pub mod agent;
pub mod app;
pub mod assessment;
pub mod config;
pub mod markdown;
pub mod models;
pub mod session;
pub mod sse;
pub mod ui;
