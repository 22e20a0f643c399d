//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! - [`config`] - Configuration management (get, set, list, path)
//! - [`convert`] - Show every view of a coordinate or code
//! - [`place`] - The five-slot place book (list, show, set, rename, edit)
//! - [`register`] - Pack and unpack the 32-bit location register

pub mod common;
pub mod config;
pub mod convert;
pub mod place;
pub mod register;
