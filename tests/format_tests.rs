// Host-side tests for readout formatting.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod format {
    include!("../src/format.rs");
}
mod web_constants {
    include!("../src/constants.rs");
}

use format::*;
use web_constants::VOLUME_DECIMALS;

#[test]
fn readout_uses_three_decimals() {
    assert_eq!(VOLUME_DECIMALS, 3);
    assert_eq!(format_volume(0.875, VOLUME_DECIMALS), "0.875");
    assert_eq!(format_volume(1.0, VOLUME_DECIMALS), "1.000");
    assert_eq!(format_volume(0.0, VOLUME_DECIMALS), "0.000");
}

#[test]
fn readout_rounds_to_nearest() {
    assert_eq!(format_volume(0.12345, VOLUME_DECIMALS), "0.123");
    assert_eq!(format_volume(0.9876, VOLUME_DECIMALS), "0.988");
}
