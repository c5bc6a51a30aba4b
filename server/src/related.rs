use crate::catalog::Catalog;
use crate::content::{Accommodation, Activity, Destination, Restaurant};

/// A record that belongs to a destination. Restaurants, activities and
/// accommodations all resolve the same way.
pub trait Listed {
    fn id(&self) -> &str;

    fn destination_id(&self) -> &str;
}

impl Listed for Restaurant {
    fn id(&self) -> &str {
        &self.id
    }

    fn destination_id(&self) -> &str {
        &self.destination_id
    }
}

impl Listed for Activity {
    fn id(&self) -> &str {
        &self.id
    }

    fn destination_id(&self) -> &str {
        &self.destination_id
    }
}

impl Listed for Accommodation {
    fn id(&self) -> &str {
        &self.id
    }

    fn destination_id(&self) -> &str {
        &self.destination_id
    }
}

/// Projects the ordered subsequence of `collection` belonging to the given
/// destination. Empty when nothing matches; never an error.
pub fn related_to<'a, T: Listed>(destination_id: &str, collection: &'a [T]) -> Vec<&'a T> {
    collection
        .iter()
        .filter(|listing| listing.destination_id() == destination_id)
        .collect()
}

/// Everything listed under one destination, projected in one pass over the
/// catalog.
pub struct DestinationListings<'a> {
    pub restaurants: Vec<&'a Restaurant>,
    pub activities: Vec<&'a Activity>,
    pub accommodations: Vec<&'a Accommodation>,
}

/// Counts shown on the detail-page tab badges.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TabCounts {
    pub overview: usize,
    pub food: usize,
    pub activities: usize,
    pub stay: usize,
}

impl<'a> DestinationListings<'a> {
    pub fn for_destination(catalog: &'a Catalog, destination_id: &str) -> Self {
        Self {
            restaurants: related_to(destination_id, catalog.restaurants()),
            activities: related_to(destination_id, catalog.activities()),
            accommodations: related_to(destination_id, catalog.accommodations()),
        }
    }

    pub fn tab_counts(&self, destination: &Destination) -> TabCounts {
        TabCounts {
            overview: destination.highlights.len(),
            food: self.restaurants.len(),
            activities: self.activities.len(),
            stay: self.accommodations.len(),
        }
    }
}
