//! Full-page screens, one per route.

pub mod inventree;
pub mod kicad;
pub mod search;
pub mod settings;

pub use inventree::InventreeScreen;
pub use kicad::KicadScreen;
pub use search::SearchScreen;
pub use settings::SettingsScreen;
