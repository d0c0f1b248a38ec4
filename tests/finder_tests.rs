// Host-side tests for the finder component, driven through a fake stage.

use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sound_core::*;
use std::collections::HashMap;

#[derive(Default)]
struct FakeStage {
    viewport: Viewport,
    // document-space top-left per rendered block
    positions: HashMap<BlockId, Coordinate>,
}

impl FakeStage {
    fn square(size: f64) -> Self {
        Self {
            viewport: Viewport {
                width: size,
                height: size,
                scroll_x: 0.0,
                scroll_y: 0.0,
            },
            positions: HashMap::new(),
        }
    }

    fn place_all(&mut self, blocks: &[Block], at: Coordinate) {
        for b in blocks {
            self.positions.insert(b.id, at);
        }
    }
}

impl Stage for FakeStage {
    fn viewport(&self) -> Viewport {
        self.viewport
    }
    fn block_coordinate(&self, id: BlockId) -> Option<Coordinate> {
        self.positions.get(&id).copied()
    }
}

fn make_finder(seed: u64, stage: &FakeStage) -> SoundFinder<StdRng> {
    let config = FinderConfig {
        generate_count: 40,
        ..FinderConfig::default()
    };
    SoundFinder::new(config, StdRng::seed_from_u64(seed), &stage.viewport())
}

#[test]
fn generate_appends_exactly_count_blocks() {
    let stage = FakeStage::square(1000.0);
    let mut finder = make_finder(1, &stage);
    assert!(finder.blocks().is_empty());

    finder.generate_blocks(0);
    assert_eq!(finder.blocks().len(), 0);

    finder.generate_blocks(25);
    assert_eq!(finder.blocks().len(), 25);
    finder.generate_blocks(7);
    assert_eq!(finder.blocks().len(), 32);

    for b in finder.blocks() {
        assert!((BLOCK_HEIGHT_MIN..=BLOCK_HEIGHT_MAX).contains(&b.height));
        assert!(BLOCK_PALETTE.contains(&b.color));
    }
}

#[test]
fn block_ids_stay_unique_across_regenerations() {
    let stage = FakeStage::square(1000.0);
    let mut finder = make_finder(2, &stage);
    finder.begin_generate();
    let first: Vec<BlockId> = finder.blocks().iter().map(|b| b.id).collect();
    finder.begin_generate();
    assert_eq!(finder.blocks().len(), 40);
    for b in finder.blocks() {
        assert!(!first.contains(&b.id));
    }
}

#[test]
fn choose_on_empty_sequence_is_a_no_op() {
    let stage = FakeStage::square(1000.0);
    let mut finder = make_finder(3, &stage);
    assert_eq!(finder.choose_random_block(&stage), None);
    assert_eq!(finder.chosen_index(), None);
    assert_eq!(finder.chosen_block_coordinate(), None);
    assert_eq!(finder.sound_volume(), 0.0);
}

#[test]
fn chosen_index_is_always_in_bounds() {
    for seed in 0..50 {
        let mut stage = FakeStage::square(800.0);
        let mut finder = make_finder(seed, &stage);
        let len = 1 + (seed as usize % 9);
        finder.generate_blocks(len);
        stage.place_all(finder.blocks(), DVec2::new(10.0, 20.0));

        let idx = finder.choose_random_block(&stage).expect("block chosen");
        assert!(idx < len);
        assert_eq!(finder.chosen_index(), Some(idx));
        assert_eq!(
            finder.chosen().map(|c| c.id),
            Some(finder.blocks()[idx].id)
        );
        assert_eq!(
            finder.chosen_block_coordinate(),
            Some(DVec2::new(10.0, 20.0))
        );
    }
}

#[test]
fn unrendered_block_leaves_selection_unchanged() {
    let stage = FakeStage::square(1000.0);
    let mut finder = make_finder(4, &stage);
    finder.generate_blocks(5);
    assert_eq!(finder.choose_random_block(&stage), None);
    assert_eq!(finder.chosen(), None);
}

#[test]
fn volume_is_zero_without_a_chosen_block() {
    let mut stage = FakeStage::square(1000.0);
    let mut finder = make_finder(5, &stage);
    assert_eq!(finder.collide_vector(), None);
    assert_eq!(finder.sound_volume(), 0.0);

    finder.generate_blocks(10);
    stage.viewport.scroll_y = 400.0;
    finder.on_scroll(&stage);
    assert_eq!(finder.sound_volume(), 0.0);
}

#[test]
fn volume_is_one_when_block_sits_at_center() {
    let mut stage = FakeStage::square(1000.0);
    let mut finder = make_finder(6, &stage);
    finder.generate_blocks(3);
    stage.place_all(finder.blocks(), DVec2::new(500.0, 500.0));
    finder.choose_random_block(&stage);
    assert_eq!(finder.collide_vector(), Some(DVec2::ZERO));
    assert_eq!(finder.sound_volume(), 1.0);
}

#[test]
fn volume_scenario_quarter_range_below_center() {
    let mut stage = FakeStage::square(1000.0);
    let mut finder = make_finder(7, &stage);
    finder.generate_blocks(4);
    stage.place_all(finder.blocks(), DVec2::new(500.0, 750.0));
    finder.choose_random_block(&stage);
    assert_eq!(finder.center_coordinate(), DVec2::new(500.0, 500.0));
    assert_eq!(finder.collide_vector(), Some(DVec2::new(0.0, -250.0)));
    assert_eq!(finder.sound_volume(), 0.875);
}

#[test]
fn scroll_moves_center_but_not_chosen_block() {
    let mut stage = FakeStage::square(1000.0);
    let mut finder = make_finder(8, &stage);
    finder.generate_blocks(6);
    stage.place_all(finder.blocks(), DVec2::new(500.0, 750.0));
    finder.choose_random_block(&stage);

    // Layout shifts that only a resize would pick up.
    stage.place_all(finder.blocks(), DVec2::new(0.0, 0.0));
    stage.viewport.scroll_y = 250.0;
    finder.on_scroll(&stage);

    assert_eq!(finder.center_coordinate(), DVec2::new(500.0, 750.0));
    assert_eq!(
        finder.chosen_block_coordinate(),
        Some(DVec2::new(500.0, 750.0))
    );
    assert_eq!(finder.sound_volume(), 1.0);
}

#[test]
fn resize_refreshes_center_and_chosen_block() {
    let mut stage = FakeStage::square(1000.0);
    let mut finder = make_finder(9, &stage);
    finder.generate_blocks(6);
    stage.place_all(finder.blocks(), DVec2::new(100.0, 100.0));
    finder.choose_random_block(&stage);

    stage.viewport.width = 400.0;
    stage.viewport.height = 600.0;
    stage.place_all(finder.blocks(), DVec2::new(200.0, 300.0));
    finder.on_resize(&stage);

    assert_eq!(finder.center_coordinate(), DVec2::new(200.0, 300.0));
    assert_eq!(
        finder.chosen_block_coordinate(),
        Some(DVec2::new(200.0, 300.0))
    );
    assert_eq!(finder.sound_volume(), 1.0);
}

#[test]
fn resize_without_selection_only_moves_center() {
    let mut stage = FakeStage::square(1000.0);
    let mut finder = make_finder(10, &stage);
    stage.viewport.width = 200.0;
    finder.on_resize(&stage);
    assert_eq!(finder.center_coordinate(), DVec2::new(100.0, 500.0));
    assert_eq!(finder.chosen_block_coordinate(), None);
}

#[test]
fn cleared_blocks_keep_last_known_selection() {
    let mut stage = FakeStage::square(1000.0);
    let mut finder = make_finder(11, &stage);
    finder.generate_blocks(5);
    stage.place_all(finder.blocks(), DVec2::new(300.0, 500.0));
    let idx = finder.choose_random_block(&stage);

    finder.clear_blocks();
    stage.positions.clear();
    finder.on_resize(&stage);

    assert_eq!(finder.chosen_index(), idx);
    assert_eq!(
        finder.chosen_block_coordinate(),
        Some(DVec2::new(300.0, 500.0))
    );
    assert!((finder.sound_volume() - 0.9).abs() < 1e-12);
}

#[test]
fn superseded_generation_does_not_choose() {
    let mut stage = FakeStage::square(1000.0);
    let mut finder = make_finder(12, &stage);
    let stale = finder.begin_generate();
    let current = finder.begin_generate();
    stage.place_all(finder.blocks(), DVec2::new(500.0, 500.0));

    assert!(!finder.is_current(stale));
    assert_eq!(finder.finish_generate(stale, &stage), None);
    assert_eq!(finder.chosen(), None);

    let idx = finder.finish_generate(current, &stage).expect("chosen");
    assert!(idx < finder.blocks().len());
    assert_eq!(finder.sound_volume(), 1.0);
}

#[test]
fn layout_handle_is_replaced_per_generation() {
    let stage = FakeStage::square(1000.0);
    let mut finder = make_finder(13, &stage);
    let masonry = Masonry::new(MasonryOptions::default()).expect("valid options");
    assert!(finder.layout().is_none());

    finder.begin_generate();
    let first = finder.apply_layout(&masonry, 1000.0, 1000.0, 10.0).clone();
    assert_eq!(first.layout.placements.len(), 40);
    assert_eq!(first.layout.columns, MASONRY_COLUMNS);

    finder.begin_generate();
    finder.generate_blocks(2);
    let second = finder.apply_layout(&masonry, 1000.0, 400.0, 10.0);
    assert!(second.generation > first.generation);
    assert_eq!(second.layout.placements.len(), 42);
    assert_eq!(second.layout.columns, 6);
}

#[test]
fn cancelled_generation_does_not_choose() {
    let mut stage = FakeStage::square(1000.0);
    let mut finder = make_finder(14, &stage);
    let ticket = finder.begin_generate();
    stage.place_all(finder.blocks(), DVec2::new(500.0, 500.0));

    finder.cancel_pending();

    assert!(!finder.is_current(ticket));
    assert_eq!(finder.finish_generate(ticket, &stage), None);
    assert_eq!(finder.chosen(), None);
    assert_eq!(finder.sound_volume(), 0.0);
    // blocks stay as rendered
    assert_eq!(finder.blocks().len(), 40);
}
