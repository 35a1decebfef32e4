use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use geodir::store::MemoryStore;
use geodir::taxonomy::CategoryRef;
use geodir::{Directory, SearchRequest, bounding_box, haversine, resolve_category};
use geodir_types::category::Category;
use geodir_types::listing::{Listing, Location};

// Food (1) with five children, each carrying four leaf grandchildren.
fn seeded_store() -> MemoryStore {
    let mut store = MemoryStore::new();

    store.insert_category(Category::new(1, "Food", None)).unwrap();
    for child in 2u64..=6 {
        store
            .insert_category(Category::new(child, format!("Group {}", child), Some(1)))
            .unwrap();
        for slot in 0u64..4 {
            let leaf = 7 + (child - 2) * 4 + slot;
            store
                .insert_category(Category::new(leaf, format!("Leaf {}", leaf), Some(child)))
                .unwrap();
        }
    }

    // 60x60 grid around Moscow, 0.01 degree spacing
    for i in 0..60u64 {
        for j in 0..60u64 {
            let id = i * 60 + j + 1;
            let lat = 55.0 + (i as f64) * 0.01;
            let lng = 37.0 + (j as f64) * 0.01;
            store
                .insert_location(Location::new(id, format!("grid cell {}", id), lat, lng))
                .unwrap();
            store
                .insert_listing(
                    Listing::new(id, format!("Listing {}", id), id).with_category(7 + id % 20),
                )
                .unwrap();
        }
    }

    store
}

fn benchmark_category_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("category_resolution");

    let store = seeded_store();

    // Root expansion walks two levels of children
    group.bench_function("resolve_root_by_id", |b| {
        b.iter(|| resolve_category(&store, black_box(&CategoryRef::Id(1))).unwrap())
    });

    group.bench_function("resolve_leaf_by_id", |b| {
        b.iter(|| resolve_category(&store, black_box(&CategoryRef::Id(9))).unwrap())
    });

    group.bench_function("resolve_by_name", |b| {
        let reference = CategoryRef::Name("group 3".to_string());
        b.iter(|| resolve_category(&store, black_box(&reference)).unwrap())
    });

    group.finish();
}

fn benchmark_spatial_math(c: &mut Criterion) {
    let mut group = c.benchmark_group("spatial_math");

    group.bench_function("haversine", |b| {
        b.iter(|| {
            haversine(
                black_box(55.7539),
                black_box(37.6208),
                black_box(59.9343),
                black_box(30.3351),
            )
        })
    });

    group.bench_function("bounding_box", |b| {
        b.iter(|| bounding_box(black_box(55.7539), black_box(37.6208), black_box(10.0)))
    });

    group.finish();
}

fn benchmark_search_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_operations");

    let directory = Directory::new(seeded_store());

    group.bench_function("name_search", |b| {
        let request = SearchRequest::by_name("Listing 12");
        b.iter(|| directory.search(black_box(&request)).unwrap())
    });

    group.bench_function("category_search_root", |b| {
        let request = SearchRequest::by_category("Food");
        b.iter(|| directory.search(black_box(&request)).unwrap())
    });

    for radius_km in [1.0, 5.0, 25.0] {
        group.bench_with_input(
            BenchmarkId::new("radius_search", radius_km),
            &radius_km,
            |b, &radius_km| {
                let request = SearchRequest::within_radius(55.3, 37.3, radius_km);
                b.iter(|| directory.search(black_box(&request)).unwrap())
            },
        );
    }

    group.bench_function("rect_search", |b| {
        let request = SearchRequest::within_rect(55.2, 55.4, 37.2, 37.4);
        b.iter(|| directory.search(black_box(&request)).unwrap())
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_category_resolution,
    benchmark_spatial_math,
    benchmark_search_operations
);

criterion_main!(benches);
