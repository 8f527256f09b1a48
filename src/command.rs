//! Async command pattern for side effects.
//!
//! Commands represent async operations that run outside the main event loop.
//! Screens return commands from `update()`, and the app spawns them with
//! completion tracking. Results travel back to the owning screen through its
//! message channel.

mod clipboard;

use async_trait::async_trait;
pub use clipboard::CopyToClipboardCmd;

/// Async command that performs a side effect.
#[async_trait]
pub trait Command: Send + 'static {
    /// Human-readable name for status display and logging.
    fn name(&self) -> String;

    /// Execute the command.
    async fn execute(self: Box<Self>) -> color_eyre::Result<()>;
}
