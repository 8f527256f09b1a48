//! Application routes and navigation rail state.
//!
//! The rail table is configuration: a fixed, ordered mapping from a rail
//! position to a route, plus the label and icon pair shown for each entry.
//! It is read-only after startup. The [`NavState`] holding the active
//! selection is created once by the app and handed to whatever needs it;
//! there is no global chrome state.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Search,
    Kicad,
    Inventree,
    /// Reachable from the top bar only; has no rail position.
    Settings,
}

/// One entry of the navigation rail.
pub struct RailEntry {
    pub route: Route,
    pub label: &'static str,
    pub icon: &'static str,
    pub icon_selected: &'static str,
}

/// Fixed rail table: position in this slice is the navigation index.
pub const RAIL: &[RailEntry] = &[
    RailEntry {
        route: Route::Search,
        label: "Search",
        icon: "\u{2315}",
        icon_selected: "\u{2316}",
    },
    RailEntry {
        route: Route::Kicad,
        label: "KiCad",
        icon: "\u{25a1}",
        icon_selected: "\u{25a0}",
    },
    RailEntry {
        route: Route::Inventree,
        label: "InvenTree",
        icon: "\u{25c7}",
        icon_selected: "\u{25c6}",
    },
];

/// Active rail selection.
///
/// The rail highlight is always derived from this state, so a programmatic
/// [`NavState::select`] and the visible highlight cannot drift apart.
#[derive(Debug, Clone)]
pub struct NavState {
    selected: usize,
}

impl Default for NavState {
    fn default() -> Self {
        Self::new()
    }
}

impl NavState {
    pub const fn new() -> Self {
        Self { selected: 0 }
    }

    /// Route at the given rail index. Out-of-range indices resolve to
    /// `None`; callers treat that as a no-op rather than an error.
    pub fn route_at(&self, index: usize) -> Option<Route> {
        RAIL.get(index).map(|entry| entry.route)
    }

    /// Number of rail entries.
    pub const fn len(&self) -> usize {
        RAIL.len()
    }

    pub const fn is_empty(&self) -> bool {
        RAIL.is_empty()
    }

    /// Switch the selection to the rail entry for `route`.
    ///
    /// Returns `false` (leaving the selection unchanged) for routes without
    /// a rail position, i.e. [`Route::Settings`].
    pub fn select(&mut self, route: Route) -> bool {
        match RAIL.iter().position(|entry| entry.route == route) {
            Some(index) => {
                self.selected = index;
                true
            }
            None => false,
        }
    }

    pub const fn selected_index(&self) -> usize {
        self.selected
    }

    /// Route of the currently highlighted rail entry.
    pub fn selected_route(&self) -> Route {
        RAIL[self.selected].route
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rail_indices_map_to_routes() {
        let nav = NavState::new();
        assert_eq!(nav.route_at(0), Some(Route::Search));
        assert_eq!(nav.route_at(1), Some(Route::Kicad));
        assert_eq!(nav.route_at(2), Some(Route::Inventree));
    }

    #[test]
    fn route_at_is_stable_across_calls() {
        let nav = NavState::new();
        for index in 0..nav.len() {
            let first = nav.route_at(index);
            for _ in 0..10 {
                assert_eq!(nav.route_at(index), first);
            }
        }
    }

    #[test]
    fn out_of_range_index_resolves_to_none() {
        let nav = NavState::new();
        assert_eq!(nav.route_at(RAIL.len()), None);
        assert_eq!(nav.route_at(usize::MAX), None);
    }

    #[test]
    fn select_updates_highlight() {
        let mut nav = NavState::new();
        assert!(nav.select(Route::Inventree));
        assert_eq!(nav.selected_index(), 2);
        assert_eq!(nav.selected_route(), Route::Inventree);
    }

    #[test]
    fn settings_has_no_rail_position() {
        let mut nav = NavState::new();
        nav.select(Route::Kicad);
        assert!(!nav.select(Route::Settings));
        // Selection keeps pointing at the last rail route.
        assert_eq!(nav.selected_route(), Route::Kicad);
    }
}
