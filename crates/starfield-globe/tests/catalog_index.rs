use starfield_arena::{Alignment, Arena};
use starfield_core::{Area, Catalog, Position, Section};
use starfield_globe::{GlobeTree, OverlapMode};
use starfield_test_utils::fixtures::{grid_catalog, synthetic_catalog};
use starfield_test_utils::{counting_arena, MockObject, NamedCatalog};

#[test]
fn tree_size_matches_catalog_count() {
    let catalog = grid_catalog(1.0);
    let arena = Arena::identity(Alignment::Eight);
    let tree = GlobeTree::new_root(&arena, &catalog);
    assert_eq!(tree.size(), catalog.object_count());
}

#[test]
fn small_search_near_origin_finds_objects() {
    let catalog = grid_catalog(1.0);
    let arena = Arena::identity(Alignment::Eight);
    let tree = GlobeTree::new_root(&arena, &catalog);

    let scratch = Arena::identity(Alignment::Eight);
    let query = Section::new(Position::new(0.0, 0.0), Area::new(2.0, 2.0));
    let hits = tree.search(&scratch, &query);
    // Grid points (0..=2, 0..=2) lie on or inside the query edges.
    assert_eq!(hits.len(), 9);
    for object in hits.objects() {
        assert!(query.contains_point(&object.position));
    }
}

#[test]
fn full_search_returns_size() {
    let catalog = synthetic_catalog(5000, 2024);
    let arena = Arena::identity(Alignment::Eight);
    let tree = GlobeTree::new_root(&arena, &catalog);
    let scratch = Arena::identity(Alignment::Eight);
    assert_eq!(tree.search(&scratch, &Section::FULL_SKY).len(), tree.size());
}

#[test]
fn queries_inside_the_sky_are_bounded_by_size() {
    let catalog = synthetic_catalog(2000, 77);
    let arena = Arena::identity(Alignment::Eight);
    let tree = GlobeTree::new_root(&arena, &catalog);
    let mut scratch = Arena::identity(Alignment::Four);

    let queries = [
        Section::new(Position::raw(10.0, -10.0), Area::new(5.0, 5.0)),
        Section::new(Position::raw(170.0, -20.0), Area::new(20.0, 40.0)),
        Section::new(Position::raw(300.0, 60.0), Area::new(59.0, 29.0)),
        Section::new(Position::raw(0.0, -90.0), Area::new(360.0, 1.0)),
    ];
    for query in &queries {
        let hits = tree.search(&scratch, query).len();
        assert!(hits <= tree.size(), "{query}: {hits} hits");
        scratch.clear();
    }
}

#[test]
fn corner_mode_never_finds_more_than_exact() {
    let catalog = synthetic_catalog(1500, 99);
    let arena = Arena::identity(Alignment::Eight);
    let exact = GlobeTree::new_root(&arena, &catalog);
    let corners = GlobeTree::new_root_with_config(
        &arena,
        &catalog,
        starfield_globe::GlobeConfig {
            overlap: OverlapMode::Corners,
            ..Default::default()
        },
    )
    .unwrap();

    let scratch = Arena::identity(Alignment::Eight);
    let query = Section::new(Position::raw(40.0, -30.0), Area::new(50.0, 30.0));
    let exact_hits = exact.search(&scratch, &query).len();
    let corner_hits = corners.search(&scratch, &query).len();
    assert!(corner_hits <= exact_hits);

    let everything = corners.search(&scratch, &Section::FULL_SKY);
    assert_eq!(everything.len(), corners.size());
}

#[test]
fn interleaved_queries_keep_separate_results() {
    let catalog = synthetic_catalog(2000, 5);
    let arena = Arena::identity(Alignment::Eight);
    let tree = GlobeTree::new_root(&arena, &catalog);

    let north_scratch = Arena::identity(Alignment::Eight);
    let south_scratch = Arena::identity(Alignment::Four);
    let north = Section::new(Position::raw(0.0, 10.0), Area::new(360.0, 80.0));
    let south = Section::new(Position::raw(0.0, -90.0), Area::new(360.0, 80.0));

    let north_hits = tree.search(&north_scratch, &north);
    let south_hits = tree.search(&south_scratch, &south);
    let north_again = tree.search(&north_scratch, &north);

    assert_eq!(north_hits.len(), north_again.len());
    assert!(north_hits.len() + south_hits.len() <= tree.size());
    for node in &north_hits {
        assert!(north.overlaps(node.section()));
    }
    for node in &south_hits {
        assert!(south.overlaps(node.section()));
    }
}

#[test]
fn named_catalog_indexes_in_insertion_order() {
    let mut catalog = NamedCatalog::new();
    catalog.insert("M31", MockObject::extended(10.68, 41.27, 11_000.0));
    catalog.insert("M42", MockObject::extended(83.82, -5.39, 3_900.0));
    catalog.insert("Polaris", MockObject::star(37.95, 89.26));

    let arena = Arena::identity(Alignment::Eight);
    let tree = GlobeTree::new_root(&arena, &catalog);
    assert_eq!(tree.size(), 3);

    let polaris = catalog.get("Polaris").unwrap();
    let node = tree.locate(polaris).unwrap();
    assert!(std::ptr::eq(node.object(), polaris));

    let scratch = Arena::identity(Alignment::Eight);
    let hits = tree.search(&scratch, &Section::FULL_SKY);
    assert_eq!(hits.len(), 3);
}

#[test]
fn dropping_both_arenas_releases_every_block() {
    let catalog = synthetic_catalog(3000, 1);
    let (arena, tree_counter) = counting_arena(Alignment::Eight);
    let (scratch, scratch_counter) = counting_arena(Alignment::Eight);
    {
        let tree = GlobeTree::new_root(&arena, &catalog);
        let hits = tree.search(&scratch, &Section::FULL_SKY);
        assert_eq!(hits.len(), 3000);
    }
    assert!(tree_counter.reserves() > 1);
    assert!(scratch_counter.reserves() > 1);

    drop(scratch);
    drop(arena);
    assert_eq!(tree_counter.reserves(), tree_counter.releases());
    assert_eq!(scratch_counter.reserves(), scratch_counter.releases());
    assert_eq!(tree_counter.live_bytes(), 0);
}
