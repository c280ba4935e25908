//! CLI module graph.

pub mod command;
pub mod config;
pub mod evaluate;
pub mod output;
