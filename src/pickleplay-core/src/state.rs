use serde::{Deserialize, Serialize};

use crate::{
    CoreResult, CourtId, CourtSorting, CourtSource, CourtsQuery, DiscoveryOptions, Listing,
    LocationState, MapSettings, MapView, discover,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewMode {
    #[default]
    List,
    Grid,
    Map,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterPanel {
    Open,
    #[default]
    Closed,
}

impl FilterPanel {
    pub fn toggle(self) -> Self {
        match self {
            FilterPanel::Open => FilterPanel::Closed,
            FilterPanel::Closed => FilterPanel::Open,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DiscoveryEvent {
    Search(String),
    MinRating(Option<f64>),
    ToggleRegion(String),
    ToggleAmenity(String),
    Nearby(bool),
    Sort(Option<CourtSorting>),
    LocationRequested,
    LocationResolved(LocationState),
    Select(CourtId),
    ClearSelection,
    ViewMode(ViewMode),
    ToggleFilterPanel,
    /// Resets every filter, keeps sorting, location and view.
    ClearFilters,
}

/// UI-local state of the court discovery screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiscoveryState {
    pub query: CourtsQuery,
    pub location: LocationState,
    pub view_mode: ViewMode,
    pub filter_panel: FilterPanel,
    pub selected: Option<CourtId>,
    pub options: DiscoveryOptions,
}

impl DiscoveryState {
    pub fn new(options: DiscoveryOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    pub fn apply(&mut self, event: DiscoveryEvent) {
        match event {
            DiscoveryEvent::Search(search) => self.query.search = Some(search),
            DiscoveryEvent::MinRating(min) => self.query.min_rating = min,
            DiscoveryEvent::ToggleRegion(region) => toggle(&mut self.query.regions, region),
            DiscoveryEvent::ToggleAmenity(amenity) => toggle(&mut self.query.amenities, amenity),
            DiscoveryEvent::Nearby(nearby) => {
                self.query.nearby = nearby && self.location.is_known();
            }
            DiscoveryEvent::Sort(sorting) => self.query.sorting = sorting,
            DiscoveryEvent::LocationRequested => self.location = LocationState::Pending,
            DiscoveryEvent::LocationResolved(location) => {
                self.location = location;
                match location {
                    LocationState::Known(_) => self.query.nearby = true,
                    LocationState::Unknown | LocationState::Pending => {
                        self.query.nearby = false;
                        if self.query.sorting == Some(CourtSorting::Distance) {
                            self.query.sorting = Some(CourtSorting::Rating);
                        }
                    }
                }
            }
            DiscoveryEvent::Select(id) => self.selected = Some(id),
            DiscoveryEvent::ClearSelection => self.selected = None,
            DiscoveryEvent::ViewMode(mode) => self.view_mode = mode,
            DiscoveryEvent::ToggleFilterPanel => self.filter_panel = self.filter_panel.toggle(),
            DiscoveryEvent::ClearFilters => {
                self.query = CourtsQuery {
                    sorting: self.query.sorting,
                    ..Default::default()
                };
            }
        }
    }

    pub fn distance_sort_available(&self) -> bool {
        self.location.is_known()
    }

    pub fn listing<'a, S: CourtSource + ?Sized>(&self, source: &'a S) -> Listing<'a> {
        discover(source.courts(), &self.query, &self.location, &self.options)
    }

    pub fn map_view<S: CourtSource + ?Sized>(
        &self,
        settings: &MapSettings,
        source: &S,
    ) -> CoreResult<MapView> {
        MapView::build(
            settings,
            &self.location,
            &self.listing(source),
            self.selected.as_ref(),
        )
    }
}

fn toggle(set: &mut Option<std::collections::BTreeSet<String>>, value: String) {
    let set = set.get_or_insert_with(Default::default);
    if !set.remove(&value) {
        set.insert(value);
    }
}
