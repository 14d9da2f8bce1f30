//! Core library components.
//!
//! Alias tables, context/namespace resolution, placeholder substitution and
//! argument building. Nothing here parses command lines or prints to the
//! terminal; external processes are only started through [`process`] and
//! [`select`].

pub mod aliases;
pub mod builder;
pub mod cluster;
pub mod command;
pub mod config;
pub mod constants;
pub mod env;
pub mod process;
pub mod resolve;
pub mod select;
pub mod substitute;
pub mod types;
