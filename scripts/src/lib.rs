//! Scripts for deploying, wiring up and inspecting the vault & strategy contracts.

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod accounting;
pub mod artifacts;
pub mod chain;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod contracts;
pub mod errors;
pub mod units;
pub mod utils;
