//! Inbound adapters (entry points driving the application).

pub mod cli;
