//! Search Mode Example
//!
//! This example demonstrates how a raw search request is validated and
//! classified into exactly one search mode, and what each rejection
//! looks like when filters conflict or come in incomplete.

use geodir::store::MemoryStore;
use geodir::{Geodir, SearchRequest};
use geodir_types::category::Category;
use geodir_types::listing::{Listing, Location};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== Geodir - Search Modes ===\n");

    let mut store = MemoryStore::new();
    store.insert_category(Category::new(1, "Food", None))?;
    store.insert_category(Category::new(2, "Dairy", Some(1)))?;
    store.insert_location(Location::new(1, "Red Square, Moscow", 55.7539, 37.6208))?;
    store.insert_listing(Listing::new(1, "Milk & More", 1).with_category(2))?;
    let directory = Geodir::new(store);
    println!("✓ Seeded a one-listing directory\n");

    // ========================================
    // 1. One filter shape, one mode
    // ========================================
    println!("1. Valid Requests");
    println!("-----------------");

    let requests = [
        SearchRequest::by_name("milk"),
        SearchRequest::by_category("Food"),
        SearchRequest::within_radius(55.7539, 37.6208, 5.0),
        SearchRequest::within_rect(55.0, 56.0, 37.0, 38.0),
    ];

    for request in &requests {
        let mode = request.classify()?;
        let found = directory.search(request)?;
        println!("   {:?} -> {} listing(s)", mode, found.len());
    }
    println!();

    // ========================================
    // 2. Mixed filter shapes are rejected
    // ========================================
    println!("2. Conflicting Filters");
    println!("----------------------");

    let name_and_geo = SearchRequest {
        name: Some("milk".to_string()),
        lat: Some(55.7539),
        ..SearchRequest::default()
    };
    print_rejection("name + geo", &directory, &name_and_geo);

    let category_and_rect = SearchRequest {
        category_name: Some("Food".to_string()),
        min_lat: Some(55.0),
        ..SearchRequest::default()
    };
    print_rejection("category + rect", &directory, &category_and_rect);

    let radius_and_rect = SearchRequest {
        lat: Some(55.7539),
        lng: Some(37.6208),
        radius: Some(5.0),
        max_lng: Some(38.0),
        ..SearchRequest::default()
    };
    print_rejection("radius + rect", &directory, &radius_and_rect);
    println!();

    // ========================================
    // 3. Incomplete shapes name what is missing
    // ========================================
    println!("3. Incomplete Shapes");
    println!("--------------------");

    let partial_radius = SearchRequest {
        lat: Some(55.7539),
        ..SearchRequest::default()
    };
    print_rejection("lat only", &directory, &partial_radius);

    let partial_rect = SearchRequest {
        min_lat: Some(55.0),
        max_lng: Some(38.0),
        ..SearchRequest::default()
    };
    print_rejection("two rect corners only", &directory, &partial_rect);
    println!();

    // ========================================
    // 4. Degenerate and empty requests
    // ========================================
    println!("4. Degenerate Requests");
    println!("----------------------");

    let inverted = SearchRequest::within_rect(56.0, 55.0, 37.0, 38.0);
    print_rejection("inverted rectangle", &directory, &inverted);

    let blank = SearchRequest {
        name: Some("".to_string()),
        ..SearchRequest::default()
    };
    print_rejection("blank name only", &directory, &blank);

    println!("\n=== Done ===");
    Ok(())
}

fn print_rejection(label: &str, directory: &Geodir, request: &SearchRequest) {
    match directory.search(request) {
        Ok(_) => println!("   {}: unexpectedly accepted", label),
        Err(err) => println!("   {}: rejected ({})", label, err),
    }
}
