//! Bridge between the UI command queue and the worker runtime that talks to
//! the mail service and the filesystem.

pub mod commands;
pub mod runtime;

pub use runtime::launch;
