//! Messages for the search screen.
//!
//! All internal communication for the search workflow flows through this
//! single message type: user actions and async results alike.

use crate::catalog::SupplierRecord;
use crate::form::FormField;

#[derive(Debug)]
pub enum SearchMsg {
    /// User triggered the search action.
    Trigger,
    /// Supplier chosen in the selector popup.
    SupplierChosen(String),
    /// Copy a form field's value to the clipboard.
    CopyField(FormField),

    // === Async results ===
    /// Catalog lookup finished; `None` means no match.
    ResultLoaded(Option<SupplierRecord>),
    /// Catalog lookup failed.
    SearchFailed(String),
}
