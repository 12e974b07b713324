//! Command interpreter and terminal session.
//!
//! The terminal is a registry-based dispatch system. Commands implement the
//! `Command` trait and are registered by name. A `Session` owns the
//! navigation state and output log, parses submitted lines, and dispatches
//! them through the registry.

mod banner;
mod commands;
mod interpreter;
mod loading;
mod session;

/// Build the welcome banner lines.
pub use banner::welcome_lines;
/// Register the built-in commands (ls, cd, cat, help, clear) into a registry.
pub use commands::register_builtins;
/// A single executable command trait.
pub use interpreter::Command;
/// Output produced by a command (text or clear signal).
pub use interpreter::CommandOutput;
/// Registry of available commands with dispatch.
pub use interpreter::CommandRegistry;
/// Navigation state passed to every command.
pub use interpreter::Environment;
/// One-shot timer driving the loading animation.
pub use loading::LoadingTimer;
pub use session::{ECHO_PREFIX, InputResult, Phase, Session};
