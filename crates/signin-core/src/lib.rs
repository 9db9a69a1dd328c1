//! Core sign-in library (form model, submission controller, ports, config).

pub mod auth;
pub mod config;
pub mod error;
pub mod form;
pub mod interrupt;
pub mod logging;
pub mod ports;
pub mod session;
pub mod submission;
