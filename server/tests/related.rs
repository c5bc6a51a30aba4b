use std::path::Path;

use guide::catalog::Catalog;
use guide::content::{ActivityType, PriceRange};
use guide::filter::{bourdain_picks, with_activity_type, with_price_range};
use guide::related::{related_to, DestinationListings};
use log::initialize_discard_logger;

fn shipped_catalog() -> Catalog {
    let logger = initialize_discard_logger();
    Catalog::load(
        &logger,
        &Path::new(env!("CARGO_MANIFEST_DIR")).join("data"),
    )
    .expect("load shipped content")
}

#[test]
fn related_listings_belong_to_the_destination_in_input_order() {
    let catalog = shipped_catalog();

    let restaurants = related_to("hanoi", catalog.restaurants());

    assert!(!restaurants.is_empty());
    assert!(restaurants.iter().all(|r| r.destination_id == "hanoi"));

    // Input order: the projection's order matches a walk over the source.
    let expected: Vec<&str> = catalog
        .restaurants()
        .iter()
        .filter(|r| r.destination_id == "hanoi")
        .map(|r| r.id.as_str())
        .collect();
    let actual: Vec<&str> = restaurants.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(actual, expected);
}

#[test]
fn a_destination_with_no_listings_of_a_kind_yields_an_empty_projection() {
    let catalog = shipped_catalog();

    // Ninh Binh ships with activities and accommodation but no restaurants.
    assert!(related_to("ninh-binh", catalog.restaurants()).is_empty());
    assert!(!related_to("ninh-binh", catalog.activities()).is_empty());
}

#[test]
fn projections_are_deterministic() {
    let catalog = shipped_catalog();

    let first: Vec<&str> = related_to("hoi-an", catalog.activities())
        .iter()
        .map(|a| a.id.as_str())
        .collect();
    let second: Vec<&str> = related_to("hoi-an", catalog.activities())
        .iter()
        .map(|a| a.id.as_str())
        .collect();

    assert_eq!(first, second);
}

#[test]
fn destination_listings_bundle_all_three_kinds_with_tab_counts() {
    let catalog = shipped_catalog();
    let destination = catalog.destination("hoi-an").expect("hoi-an is shipped");

    let listings = DestinationListings::for_destination(&catalog, &destination.id);
    let counts = listings.tab_counts(destination);

    assert_eq!(counts.overview, destination.highlights.len());
    assert_eq!(counts.food, listings.restaurants.len());
    assert_eq!(counts.activities, listings.activities.len());
    assert_eq!(counts.stay, listings.accommodations.len());
    assert!(counts.food > 0);
}

#[test]
fn bourdain_picks_are_flagged_restaurants_only() {
    let catalog = shipped_catalog();

    let picks = bourdain_picks(catalog.restaurants());

    assert!(!picks.is_empty());
    assert!(picks.iter().all(|r| r.bourdain_pick));

    let ids: Vec<&str> = picks.iter().map(|r| r.id.as_str()).collect();
    assert!(ids.contains(&"bun-cha-huong-lien"));
}

#[test]
fn price_filtering_covers_restaurants_and_accommodations() {
    let catalog = shipped_catalog();

    let cheap_eats = with_price_range(catalog.restaurants(), PriceRange::Budget);
    assert!(cheap_eats
        .iter()
        .all(|r| r.price_range == PriceRange::Budget));
    assert!(!cheap_eats.is_empty());

    let splurge_stays = with_price_range(catalog.accommodations(), PriceRange::Upscale);
    assert!(splurge_stays
        .iter()
        .all(|a| a.price_range == PriceRange::Upscale));
}

#[test]
fn activity_type_filtering_selects_one_kind() {
    let catalog = shipped_catalog();

    let adventures = with_activity_type(catalog.activities(), ActivityType::Adventure);

    assert!(!adventures.is_empty());
    assert!(adventures
        .iter()
        .all(|a| a.kind == ActivityType::Adventure));
}
