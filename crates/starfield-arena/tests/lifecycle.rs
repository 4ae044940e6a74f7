use starfield_arena::{Alignment, Arena, ArenaConfig, CountingAllocator, SystemAllocator};

fn address(arena: &Arena, size: usize) -> usize {
    arena.alloc(size).as_ptr() as usize
}

#[test]
fn clear_then_alloc_uses_single_aligned_block() {
    for bytes in [1, 4, 8] {
        let alignment = Alignment::try_from(bytes).unwrap();
        let mut arena = Arena::identity(alignment);
        arena.alloc(100);
        arena.alloc(ArenaConfig::DEFAULT_BLOCK_SIZE);
        arena.clear();

        assert_eq!(address(&arena, 1) % bytes, 0);
        assert_eq!(arena.block_count(), 1);
    }
}

#[test]
fn alloc_larger_than_default_block_grows() {
    let arena = Arena::identity(Alignment::Eight);
    let before = arena.alloc_bytes(32);
    before.copy_from_slice(&[0x5A; 32]);

    let big = arena.alloc_bytes(8192);
    big.fill(0xC3);

    assert!(arena.block_count() >= 2);
    assert!(before.iter().all(|&b| b == 0x5A));
    assert!(big.iter().all(|&b| b == 0xC3));
    assert!(arena.total_reserved() >= 4096 + 8192);
}

#[test]
fn destroyed_arena_is_inert() {
    let allocator = CountingAllocator::new(SystemAllocator);
    let counter = allocator.counter();
    let mut arena = Arena::make(Alignment::Eight, allocator);
    for _ in 0..20 {
        arena.alloc(1000);
    }
    arena.destroy();

    assert_eq!(arena.block_count(), 0);
    assert!(arena.current_block().is_none());
    assert!(!arena.has_allocator());
    assert_eq!(counter.reserves(), counter.releases());
    drop(arena);
    assert_eq!(counter.live_blocks(), 0);
}

#[test]
fn block_ids_restart_after_clear() {
    let mut arena = Arena::identity(Alignment::Four);
    for _ in 0..10 {
        arena.alloc(2000);
    }
    let ids: Vec<usize> = arena.blocks().iter().map(|b| b.id).collect();
    assert_eq!(ids, (0..ids.len()).collect::<Vec<_>>());

    arena.clear();
    assert_eq!(arena.blocks().len(), 1);
    assert_eq!(arena.blocks()[0].id, 0);
    assert_eq!(arena.blocks()[0].used, 0);
}
