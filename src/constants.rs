// DOM hooks and presentation constants for the web frontend.

// Element lookups
pub const BLOCK_WRAPPER_SELECTOR: &str = ".block-wrapper";
pub const GENERATE_BUTTON_ID: &str = "generate-blocks";
pub const VOLUME_READOUT_ID: &str = "sound-volume";

// Classes applied to rendered blocks
pub const BLOCK_CLASS: &str = "block";
pub const CHOSEN_CLASS: &str = "chosen";
pub const BLOCK_ID_ATTR: &str = "data-block-id";

// CSS pixels per unit of block height
pub const PX_PER_HEIGHT_UNIT: f64 = 10.0;

// Decimal places shown in the volume readout
pub const VOLUME_DECIMALS: usize = 3;
