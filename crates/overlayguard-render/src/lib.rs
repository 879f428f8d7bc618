//! Rendering of policy decisions for the terminal.

#![forbid(unsafe_code)]

mod text;

pub use text::{EXIT_ALLOWED, EXIT_BLOCKED, RenderedDecision, exit_code, render, render_text};
