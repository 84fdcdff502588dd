//! squaremat-cli: command-line front end for the squaremat core.
//!
//! Each subcommand maps onto one core operation; `demo` runs a [`session::Session`]
//! that generates two random matrices and walks through every operation.
pub mod commands;
pub mod config;
pub mod session;
