//! Bot module - update routing core and its Telegram adapters.

pub mod command;
pub mod dispatcher;
pub mod messenger;
pub mod router;
mod runtime;
pub mod types;

#[cfg(test)]
pub mod testing;

pub use dispatcher::Dispatcher;
pub use router::Router;
pub use runtime::run;
