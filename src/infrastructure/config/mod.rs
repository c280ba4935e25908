//! Infrastructure configuration modules.

pub mod arbitrage;
pub mod logging;
pub mod market;
pub mod settings;
