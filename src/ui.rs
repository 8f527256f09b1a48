//! UI trait hierarchy.
//!
//! - [`Component`] - reusable, interactive building blocks
//! - [`Screen`] - full-page views selected by the navigation rail
//! - [`Handled`] - result of handling an input event

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::Theme;
use crate::command::Command;
use crate::navigation::Route;

/// Result type alias for UI operations.
pub type Result<T> = std::result::Result<T, color_eyre::Report>;

/// Result of handling an input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handled<E> {
    /// Input was not handled, parent should process it.
    Ignored,
    /// Input was consumed but produced no event.
    Consumed,
    /// Input was consumed and produced an event.
    Event(E),
}

impl<E> Handled<E> {
    /// Returns true if the input was consumed (not ignored).
    pub const fn is_consumed(&self) -> bool {
        !matches!(self, Self::Ignored)
    }

    /// Returns the event if present.
    pub fn event(self) -> Option<E> {
        match self {
            Self::Event(e) => Some(e),
            _ => None,
        }
    }
}

impl<E> From<E> for Handled<E> {
    fn from(event: E) -> Self {
        Self::Event(event)
    }
}

/// Reusable UI component. Components manage their own internal state and
/// emit events for interactions the parent should act on.
pub trait Component {
    /// The event type emitted by this component.
    type Output;

    /// Handle a key event.
    fn handle_key(&mut self, key: KeyEvent) -> Result<Handled<Self::Output>> {
        let _ = key;
        Ok(Handled::Ignored)
    }

    /// Called on each tick for animations and time-based updates.
    fn handle_tick(&mut self) {}

    /// Render the component to the frame.
    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme);
}

/// Which parts of the shared chrome a screen participates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chrome {
    /// Top bar, navigation rail, divider, then the content region.
    Railed,
    /// Top bar and content only (the settings screen).
    BarOnly,
}

/// Result from [`Screen::update`].
pub enum ScreenMsg {
    /// No action needed.
    Idle,
    /// Spawn these commands.
    Commands(Vec<Box<dyn Command>>),
    /// Surface an error to the user.
    Error(String),
}

impl<T: Command> From<T> for ScreenMsg {
    fn from(value: T) -> Self {
        Self::Commands(vec![Box::new(value)])
    }
}

/// A full-page view.
///
/// Screens manage their own state and message queue. The app calls methods
/// in this order:
///
/// 1. `init()` - once when the screen becomes active
/// 2. For each event: `handle_tick()` or `handle_key()`
/// 3. `update()` - processes queued messages; THE SINGLE FUNNEL. Only
///    `update()` can return commands to spawn or report errors.
/// 4. `render_content()` - on each frame
pub trait Screen {
    /// The route this screen is bound to.
    fn route(&self) -> Route;

    /// Chrome variant composed around the content region.
    fn chrome(&self) -> Chrome {
        Chrome::Railed
    }

    /// Title shown in the top bar.
    fn title(&self) -> &'static str {
        concat!("partscout | v", env!("CARGO_PKG_VERSION"))
    }

    /// Queue startup message(s). Called once when the screen becomes active.
    fn init(&mut self) {}

    /// Handle a tick event for animations.
    fn handle_tick(&mut self) {}

    /// Handle a key event. Returns `true` if the key was consumed; the app
    /// only applies global bindings to keys a screen left untouched.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let _ = key;
        false
    }

    /// Process all queued messages and return the result.
    fn update(&mut self) -> ScreenMsg {
        ScreenMsg::Idle
    }

    /// Render the screen-specific content region. The default is an empty
    /// region; concrete screens override this.
    fn render_content(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let _ = (frame, area, theme);
    }
}
