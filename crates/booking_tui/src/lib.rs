//! Terminal front-end for the appointment booking form.
//!
//! `main.rs` wires these modules together: the CLI is parsed, error hooks and
//! logging are installed, the config is loaded and then either the
//! interactive [`app::App`] runs or the `services` report is printed.

pub mod action;
pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod errors;
pub mod logging;
pub mod pages;
pub mod report;
pub mod tui;
