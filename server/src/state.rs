//! The navigation state machine. One explicit, serializable structure
//! carries everything the interface needs to know: which screen is up,
//! which destination (if any) is selected, which tab and view mode are
//! active, and the search/region filters. State changes only happen
//! through the transition methods; invalid transitions are no-ops rather
//! than panics or error states.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::content::Destination;
use crate::filter::{filter_destinations, RegionFilter};

/// How the home screen presents the destination set.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Map,
    Grid,
}

/// The content tabs of the destination detail screen.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentTab {
    Overview,
    Food,
    Activities,
    Stay,
}

/// Which screen is showing.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    Home,
    Detail {
        destination_id: String,
        active_tab: ContentTab,
    },
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ViewState {
    screen: Screen,
    /// Kept while a destination is open so that backing out restores the
    /// home screen exactly as it was left.
    view_mode: ViewMode,
    search_term: String,
    region: RegionFilter,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// The session's starting point: home, map view, no filters.
    pub fn new() -> Self {
        Self {
            screen: Screen::Home,
            view_mode: ViewMode::Map,
            search_term: String::new(),
            region: RegionFilter::All,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn region(&self) -> RegionFilter {
        self.region
    }

    /// The selected destination id, while on the detail screen.
    pub fn selected_destination(&self) -> Option<&str> {
        match &self.screen {
            Screen::Detail { destination_id, .. } => Some(destination_id),
            Screen::Home => None,
        }
    }

    /// The active tab, while on the detail screen.
    pub fn active_tab(&self) -> Option<ContentTab> {
        match &self.screen {
            Screen::Detail { active_tab, .. } => Some(*active_tab),
            Screen::Home => None,
        }
    }

    /// Opens the detail screen for `destination_id`, starting on the
    /// overview tab. Ids the catalog does not know are ignored.
    pub fn select_destination(&mut self, catalog: &Catalog, destination_id: &str) {
        if !catalog.contains_destination(destination_id) {
            return;
        }

        self.screen = Screen::Detail {
            destination_id: destination_id.to_owned(),
            active_tab: ContentTab::Overview,
        };
    }

    /// Returns to the home screen. The view mode and the filters survive
    /// the round trip.
    pub fn return_home(&mut self) {
        self.screen = Screen::Home;
    }

    /// Switches the detail-screen tab. The selected destination never
    /// changes; on the home screen this does nothing.
    pub fn select_tab(&mut self, tab: ContentTab) {
        if let Screen::Detail { active_tab, .. } = &mut self.screen {
            *active_tab = tab;
        }
    }

    /// Toggles between map and grid. Filters are untouched.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn set_region(&mut self, region: RegionFilter) {
        self.region = region;
    }

    /// The destinations the home screen should show under the current
    /// filters.
    pub fn visible_destinations<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Destination> {
        filter_destinations(catalog.destinations(), &self.search_term, self.region)
    }
}
