use geodir::store::MemoryStore;
use geodir::taxonomy::CategoryRef;
use geodir::{Geodir, SearchRequest};
use geodir_types::category::Category;
use geodir_types::listing::{Listing, Location};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (set RUST_LOG=debug to see detailed logs)
    env_logger::init();

    println!("=== Geodir - Getting Started ===\n");

    // Build an in-memory directory store
    let mut store = MemoryStore::new();
    println!("✓ Created in-memory store\n");

    // === CATEGORY TAXONOMY ===
    println!("1. Category Taxonomy");
    println!("--------------------");

    // Up to three levels: root > subcategory > leaf
    store.insert_category(Category::new(1, "Food", None))?;
    store.insert_category(Category::new(2, "Meat products", Some(1)))?;
    store.insert_category(Category::new(3, "Dairy", Some(1)))?;
    store.insert_category(Category::new(4, "Milk", Some(3)))?;
    store.insert_category(Category::new(5, "Cheese", Some(3)))?;
    println!("   Inserted 5 categories across 3 levels\n");

    // === LOCATIONS AND LISTINGS ===
    println!("2. Locations and Listings");
    println!("-------------------------");

    store.insert_location(Location::new(1, "Red Square, Moscow", 55.7539, 37.6208))?;
    store.insert_location(Location::new(2, "Arbat St, Moscow", 55.7494, 37.5912))?;
    store.insert_location(Location::new(3, "Nevsky Ave, St Petersburg", 59.9343, 30.3351))?;

    store.insert_listing(
        Listing::new(1, "Milk & More", 1)
            .with_phone("+7 495 000-00-01")
            .with_category(4),
    )?;
    store.insert_listing(Listing::new(2, "Cheese Corner", 2).with_category(5))?;
    store.insert_listing(Listing::new(3, "Meat Master", 1).with_category(2))?;
    store.insert_listing(Listing::new(4, "Northern Dairy", 3).with_category(4))?;
    println!("   Inserted 3 locations and 4 listings\n");

    let directory = Geodir::new(store);

    // === NAME SEARCH ===
    println!("3. Name Search");
    println!("--------------");

    let found = directory.search(&SearchRequest::by_name("milk"))?;
    println!("   Listings matching \"milk\":");
    for listing in &found {
        println!("     - {}", listing.name);
    }
    println!();

    // === CATEGORY SEARCH ===
    println!("4. Category Search");
    println!("------------------");

    // A root category expands level by level down to its leaves
    let resolved = directory.resolve_category(&CategoryRef::Name("Food".to_string()))?;
    println!("   \"Food\" expands to category ids: {:?}", resolved);

    let found = directory.search(&SearchRequest::by_category("Food"))?;
    println!("   Listings under Food and its descendants:");
    for listing in &found {
        println!("     - {}", listing.name);
    }
    println!();

    // === GEOGRAPHIC SEARCH ===
    println!("5. Geographic Search");
    println!("--------------------");

    let nearby = directory.search(&SearchRequest::within_radius(55.7539, 37.6208, 5.0))?;
    println!("   Within 5 km of Red Square: {} listings", nearby.len());

    let in_rect = directory.search(&SearchRequest::within_rect(59.0, 60.0, 30.0, 31.0))?;
    println!("   Inside the St Petersburg rectangle: {} listings", in_rect.len());
    println!();

    // === DIRECTORY STATISTICS ===
    println!("6. Directory Statistics");
    println!("-----------------------");

    let stats = directory.stats()?;
    println!(
        "   {} categories, {} locations, {} listings",
        stats.categories, stats.locations, stats.listings
    );

    println!("\n=== Done ===");
    Ok(())
}
