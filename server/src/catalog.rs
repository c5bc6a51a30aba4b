use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use log::{info, warn, Logger};

use crate::content::{Accommodation, Activity, Destination, Region, Restaurant};
use crate::errors::GuideError;
use crate::related::Listed;

/// The immutable content store: every record the application knows about,
/// loaded once and never touched again. All other components borrow from
/// here.
#[derive(Debug)]
pub struct Catalog {
    destinations: Vec<Destination>,
    restaurants: Vec<Restaurant>,
    activities: Vec<Activity>,
    accommodations: Vec<Accommodation>,
}

/// Destinations per region, for the travel-overview tiles.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct RegionCounts {
    pub north: usize,
    pub central: usize,
    pub south: usize,
}

impl Catalog {
    /// Assembles a catalog from in-memory collections.
    pub fn new(
        destinations: Vec<Destination>,
        restaurants: Vec<Restaurant>,
        activities: Vec<Activity>,
        accommodations: Vec<Accommodation>,
    ) -> Self {
        Self {
            destinations,
            restaurants,
            activities,
            accommodations,
        }
    }

    /// Reads the four collections from `directory`. All-or-nothing: any
    /// unreadable or malformed file fails the whole load, and the error
    /// names the file. Listings that reference a destination id with no
    /// matching destination are kept but warned about; they can never be
    /// surfaced through a valid selection.
    pub fn load(logger: &Logger, directory: &Path) -> Result<Self, GuideError> {
        let destinations: Vec<Destination> =
            read_collection(directory.join("destinations.json"))?;
        let restaurants: Vec<Restaurant> = read_collection(directory.join("restaurants.json"))?;
        let activities: Vec<Activity> = read_collection(directory.join("activities.json"))?;
        let accommodations: Vec<Accommodation> =
            read_collection(directory.join("accommodations.json"))?;

        let catalog = Catalog::new(destinations, restaurants, activities, accommodations);

        info!(logger, "Loaded content catalog";
            "destinations" => catalog.destinations.len(),
            "restaurants" => catalog.restaurants.len(),
            "activities" => catalog.activities.len(),
            "accommodations" => catalog.accommodations.len());

        let known: HashSet<&str> = catalog.destinations.iter().map(|d| d.id.as_str()).collect();
        warn_dangling(logger, "restaurant", &catalog.restaurants, &known);
        warn_dangling(logger, "activity", &catalog.activities, &known);
        warn_dangling(logger, "accommodation", &catalog.accommodations, &known);

        Ok(catalog)
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn accommodations(&self) -> &[Accommodation] {
        &self.accommodations
    }

    pub fn destination(&self, id: &str) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.id == id)
    }

    pub fn contains_destination(&self, id: &str) -> bool {
        self.destination(id).is_some()
    }

    pub fn region_counts(&self) -> RegionCounts {
        let mut counts = RegionCounts::default();

        for destination in &self.destinations {
            match destination.region {
                Region::North => counts.north += 1,
                Region::Central => counts.central += 1,
                Region::South => counts.south += 1,
            }
        }

        counts
    }
}

fn read_collection<T: DeserializeOwned>(path: std::path::PathBuf) -> Result<Vec<T>, GuideError> {
    let raw = fs::read_to_string(&path).map_err(|source| GuideError::UnreadableContent {
        path: path.clone(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| GuideError::MalformedContent { path, source })
}

fn warn_dangling<T: Listed>(logger: &Logger, kind: &'static str, listings: &[T], known: &HashSet<&str>) {
    for listing in listings {
        if !known.contains(listing.destination_id()) {
            warn!(logger, "Listing references unknown destination";
                "kind" => kind,
                "id" => %listing.id(),
                "destination_id" => %listing.destination_id());
        }
    }
}
