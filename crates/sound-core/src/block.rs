use crate::constants::BLOCK_PALETTE;
use rand::prelude::*;
use std::fmt;

/// Stable identity of a generated block. Ids are never reused, even after the
/// block sequence is cleared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(pub u64);

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlockColor {
    Red,
    Green,
    Blue,
    Yellow,
    Grey,
}

impl BlockColor {
    #[inline]
    pub fn css_name(self) -> &'static str {
        match self {
            BlockColor::Red => "red",
            BlockColor::Green => "green",
            BlockColor::Blue => "blue",
            BlockColor::Yellow => "yellow",
            BlockColor::Grey => "grey",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    pub id: BlockId,
    pub height: u32,
    pub color: BlockColor,
}

/// Produce `count` blocks with uniformly random heights in
/// `height_min..=height_max` and colors drawn with replacement from the palette.
///
/// `next_id` is advanced once per block.
pub fn generate_blocks<R: Rng + ?Sized>(
    rng: &mut R,
    next_id: &mut u64,
    count: usize,
    height_min: u32,
    height_max: u32,
) -> Vec<Block> {
    let (lo, hi) = if height_min <= height_max {
        (height_min, height_max)
    } else {
        (height_max, height_min)
    };
    (0..count)
        .map(|_| {
            let id = BlockId(*next_id);
            *next_id += 1;
            Block {
                id,
                height: rng.gen_range(lo..=hi),
                color: *BLOCK_PALETTE.choose(rng).unwrap_or(&BlockColor::Grey),
            }
        })
        .collect()
}
