use crate::block::BlockColor;

// Shared tuning constants used by the core and the web frontend.

// Block generation
pub const BLOCK_PALETTE: [BlockColor; 5] = [
    BlockColor::Red,
    BlockColor::Green,
    BlockColor::Blue,
    BlockColor::Yellow,
    BlockColor::Grey,
];
pub const BLOCK_HEIGHT_MIN: u32 = 5;
pub const BLOCK_HEIGHT_MAX: u32 = 10; // inclusive
pub const GENERATE_COUNT: usize = 500; // blocks per click

// Distance (px) at which volume reaches zero on one axis
pub const VOLUME_RANGE: f64 = 1000.0;

// Masonry
pub const MASONRY_MARGIN: f64 = 30.0;
pub const MASONRY_COLUMNS: usize = 10;
pub const MASONRY_BREAK_AT: [(u32, usize); 1] = [(480, 6)]; // viewport width <= 480 -> 6 columns

/// Tunables for a [`crate::SoundFinder`].
///
/// The defaults reproduce the stock widget; tests shrink `generate_count` to
/// keep fixtures small.
#[derive(Clone, Debug)]
pub struct FinderConfig {
    pub volume_range: f64,
    pub generate_count: usize,
    pub height_min: u32,
    pub height_max: u32,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            volume_range: VOLUME_RANGE,
            generate_count: GENERATE_COUNT,
            height_min: BLOCK_HEIGHT_MIN,
            height_max: BLOCK_HEIGHT_MAX,
        }
    }
}
