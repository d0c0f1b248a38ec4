// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod web_constants {
    include!("../src/constants.rs");
}

use web_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn core_constants_are_consistent() {
    assert!(sound_core::BLOCK_HEIGHT_MIN <= sound_core::BLOCK_HEIGHT_MAX);
    assert!(sound_core::VOLUME_RANGE > 0.0);
    assert!(sound_core::MASONRY_MARGIN >= 0.0);
    for (width, cols) in sound_core::MASONRY_BREAK_AT {
        assert!(width > 0);
        assert!(cols > 0 && cols <= sound_core::MASONRY_COLUMNS);
    }
}

#[test]
fn finder_config_defaults_match_constants() {
    let c = sound_core::FinderConfig::default();
    assert_eq!(c.volume_range, 1000.0);
    assert_eq!(c.generate_count, 500);
    assert_eq!((c.height_min, c.height_max), (5, 10));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn web_constants_are_usable() {
    assert!(PX_PER_HEIGHT_UNIT > 0.0);
    assert!(BLOCK_WRAPPER_SELECTOR.starts_with('.'));
    assert!(!GENERATE_BUTTON_ID.is_empty());
    assert!(!VOLUME_READOUT_ID.is_empty());
    assert_ne!(BLOCK_CLASS, CHOSEN_CLASS);
}
