//! Command handlers
//!
//! Each handler builds its use case from the resolved configuration, runs it
//! and prints a short summary.

pub mod account;
pub mod organization;
pub mod ou;
pub mod policy;

use is_terminal::IsTerminal;
use orgov::presentation::TextRenderer;

pub(crate) fn renderer() -> TextRenderer {
    TextRenderer {
        unicode: std::io::stdout().is_terminal(),
    }
}
