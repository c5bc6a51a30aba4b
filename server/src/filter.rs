use serde::Serialize;

use crate::content::{Accommodation, Activity, ActivityType, Destination, PriceRange, Region, Restaurant};
use crate::normalization;

/// The region criterion for destination filtering: either everything, or
/// exactly one region.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionFilter {
    All,
    Only(Region),
}

impl RegionFilter {
    fn admits(&self, region: Region) -> bool {
        match self {
            RegionFilter::All => true,
            RegionFilter::Only(only) => *only == region,
        }
    }
}

/// Computes the visible destination subset for a search term and a region
/// criterion. A destination is included iff its region passes the
/// criterion and the term (when non-empty) appears, case-insensitively, in
/// its name, its description or at least one highlight. The input order is
/// preserved and an empty result is an ordinary value.
pub fn filter_destinations<'a>(
    destinations: &'a [Destination],
    search_term: &str,
    region: RegionFilter,
) -> Vec<&'a Destination> {
    let term = normalization::fold(search_term);

    destinations
        .iter()
        .filter(|destination| region.admits(destination.region) && matches_search(destination, &term))
        .collect()
}

fn matches_search(destination: &Destination, folded_term: &str) -> bool {
    if folded_term.is_empty() {
        return true;
    }

    normalization::contains_term(&destination.name, folded_term)
        || normalization::contains_term(&destination.description, folded_term)
        || destination
            .highlights
            .iter()
            .any(|highlight| normalization::contains_term(highlight, folded_term))
}

/// A listing with a price band. Lets the price filter run over restaurants
/// and accommodations alike.
pub trait Priced {
    fn price_range(&self) -> PriceRange;
}

impl Priced for Restaurant {
    fn price_range(&self) -> PriceRange {
        self.price_range
    }
}

impl Priced for Accommodation {
    fn price_range(&self) -> PriceRange {
        self.price_range
    }
}

/// The restaurants Bourdain ate at, in input order.
pub fn bourdain_picks(restaurants: &[Restaurant]) -> Vec<&Restaurant> {
    restaurants.iter().filter(|r| r.bourdain_pick).collect()
}

/// The listings in a given price band, in input order.
pub fn with_price_range<T: Priced>(listings: &[T], range: PriceRange) -> Vec<&T> {
    listings
        .iter()
        .filter(|listing| listing.price_range() == range)
        .collect()
}

/// The activities of a given kind, in input order.
pub fn with_activity_type(activities: &[Activity], kind: ActivityType) -> Vec<&Activity> {
    activities.iter().filter(|a| a.kind == kind).collect()
}
