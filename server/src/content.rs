use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

/// A named travel location. Destinations anchor every other record kind:
/// restaurants, activities and accommodations all point back at one by id.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    /// Stable identifier, referenced by listings.
    pub id: String,

    /// The display name.
    pub name: String,

    /// The part of the country it lies in.
    pub region: Region,

    /// Where it sits on the map. Display only.
    pub coordinates: Coordinates,

    /// A short introduction.
    pub description: String,

    /// Selling points, in display order.
    pub highlights: Vec<String>,

    /// Suggested length of stay.
    pub duration: String,

    /// The months or season worth travelling in.
    pub best_time_to_visit: String,

    /// How to get there from Hanoi, if that leg makes sense.
    pub transport_from_hanoi: Option<String>,

    /// How to get there from Saigon, if that leg makes sense.
    pub transport_from_saigon: Option<String>,
}

/// The three travel regions of Vietnam.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    North,
    Central,
    South,
}

/// A latitude and longitude pair. No geometry is computed on these; they
/// pass straight through to the map display.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct Coordinates(pub f64, pub f64);

impl Coordinates {
    pub fn latitude(&self) -> f64 {
        self.0
    }

    pub fn longitude(&self) -> f64 {
        self.1
    }
}

/// A place to eat at a destination.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    /// Stable identifier.
    pub id: String,

    /// The display name.
    pub name: String,

    /// The destination this restaurant belongs to.
    pub destination_id: String,

    /// Street address, where known.
    pub address: Option<String>,

    pub coordinates: Option<Coordinates>,

    /// The dish the kitchen is known for.
    pub specialty: String,

    pub description: String,

    pub price_range: PriceRange,

    /// Set on places Anthony Bourdain ate at on camera.
    #[serde(default)]
    pub bourdain_pick: bool,

    /// Aggregate visitor rating out of five, where collected.
    pub user_rating: Option<f32>,

    pub opening_hours: Option<String>,

    /// Freeform labels used for display chips.
    pub tags: Vec<String>,
}

/// A thing to do at a destination.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Stable identifier.
    pub id: String,

    /// The display name.
    pub name: String,

    /// The destination this activity belongs to.
    pub destination_id: String,

    #[serde(rename = "type")]
    pub kind: ActivityType,

    pub description: String,

    /// How long to set aside.
    pub duration: String,

    pub difficulty: Option<Difficulty>,

    /// Indicative cost, freeform.
    pub cost: Option<String>,

    pub coordinates: Option<Coordinates>,

    /// Practical advice, in display order.
    #[serde(default)]
    pub tips: Vec<String>,
}

/// A place to stay at a destination.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Accommodation {
    /// Stable identifier.
    pub id: String,

    /// The display name.
    pub name: String,

    /// The destination this accommodation belongs to.
    pub destination_id: String,

    #[serde(rename = "type")]
    pub kind: AccommodationType,

    /// Booking or detail page, where one exists.
    pub url: Option<Url>,

    pub description: Option<String>,

    pub price_range: PriceRange,

    /// Neighbourhood or landmark, freeform.
    pub location: Option<String>,
}

/// Price bands, rendered as dollar signs.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum PriceRange {
    #[serde(rename = "$")]
    Budget,
    #[serde(rename = "$$")]
    Moderate,
    #[serde(rename = "$$$")]
    Upscale,
}

impl PriceRange {
    pub fn symbol(&self) -> &'static str {
        match self {
            PriceRange::Budget => "$",
            PriceRange::Moderate => "$$",
            PriceRange::Upscale => "$$$",
        }
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Cultural,
    Adventure,
    Nature,
    Food,
    Nightlife,
    Historical,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Moderate,
    Difficult,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccommodationType {
    Hotel,
    Hostel,
    Airbnb,
    Homestay,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_parse_from_lowercase_names() {
        let region: Region = serde_json::from_str("\"central\"").expect("parse region");
        assert_eq!(region, Region::Central);
    }

    #[test]
    fn out_of_set_region_is_rejected() {
        assert!(serde_json::from_str::<Region>("\"eastern\"").is_err());
    }

    #[test]
    fn coordinates_parse_from_latitude_longitude_pairs() {
        let coordinates: Coordinates =
            serde_json::from_str("[21.0285, 105.8542]").expect("parse coordinates");
        assert_eq!(coordinates.latitude(), 21.0285);
        assert_eq!(coordinates.longitude(), 105.8542);
    }

    #[test]
    fn price_ranges_parse_from_dollar_signs() {
        let range: PriceRange = serde_json::from_str("\"$$\"").expect("parse price range");
        assert_eq!(range, PriceRange::Moderate);
        assert_eq!(range.to_string(), "$$");
    }

    #[test]
    fn missing_optional_fields_deserialize_to_defaults() {
        let restaurant: Restaurant = serde_json::from_str(
            r#"{
                "id": "r1",
                "name": "Pho Stand",
                "destinationId": "hanoi",
                "specialty": "Pho bo",
                "description": "A street stall.",
                "priceRange": "$",
                "tags": ["street-food"]
            }"#,
        )
        .expect("parse restaurant");

        assert!(!restaurant.bourdain_pick);
        assert!(restaurant.user_rating.is_none());
        assert!(restaurant.address.is_none());
    }
}
