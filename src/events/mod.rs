//! Event handlers for updates that are not commands.

pub mod callback;
pub mod text;

pub use callback::handle_callback;
pub use text::handle_text;
