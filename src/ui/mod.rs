//! UI module for consistent, modern CLI experience
//!
//! Uses `cliclack` (Rust port of @clack/prompts) for styled output
//! with automatic fallback to plain output in CI/non-interactive
//! environments.

mod context;
mod output;
mod theme;

pub use context::UiContext;
pub use output::{intro, outro_success, step_ok, step_ok_detail};
pub use theme::{init_theme, PrewarmTheme};
