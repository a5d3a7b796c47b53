#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! model-signing — sign and verify ML models from the CLI.
//!
//! The crate is the command-line orchestrator: it parses global options,
//! optionally redirects command output to a file, sets up logging and hands
//! `sign`/`verify` requests to a [`signing::SigningBackend`].

pub mod cli;
pub mod commands;
pub mod errors;
pub mod logging;
pub mod signing;
pub mod types;
