//! Reusable UI building blocks.
//!
//! Components know nothing about routes or the search workflow; they handle
//! keys and emit events for the owning screen or the app to act on.

mod error_dialog;
mod nav_rail;
mod spinner;
mod supplier_select;
mod text_input;
mod top_bar;

pub use error_dialog::{ErrorDialog, ErrorDialogEvent};
pub use nav_rail::{NavRail, RAIL_WIDTH};
pub use spinner::Spinner;
pub use supplier_select::{SupplierSelect, SupplierSelectEvent};
pub use text_input::{TextInput, TextInputEvent};
pub use top_bar::TopBar;
