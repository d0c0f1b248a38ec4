//! Component state for the sound finder widget.
//!
//! The finder owns the block sequence and the selection; everything that has
//! to touch the page goes through a [`Stage`]. Derived values
//! ([`SoundFinder::collide_vector`], [`SoundFinder::sound_volume`]) are
//! recomputed on every read so they always reflect the latest coordinates.

use crate::block::{generate_blocks, Block, BlockId};
use crate::constants::FinderConfig;
use crate::geometry::{viewport_center, Coordinate, Viewport};
use crate::layout::{LayoutHandle, Masonry};
use crate::volume;
use glam::DVec2;
use rand::prelude::*;

/// Host services the finder needs from the rendering layer.
pub trait Stage {
    fn viewport(&self) -> Viewport;
    /// Document-space top-left of the rendered block, if it is on the page.
    fn block_coordinate(&self, id: BlockId) -> Option<Coordinate>;
}

/// Identifies one generate action. Only the most recent ticket is current.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationTicket(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChosenBlock {
    pub index: usize,
    pub id: BlockId,
}

pub struct SoundFinder<R: Rng> {
    config: FinderConfig,
    rng: R,
    blocks: Vec<Block>,
    next_id: u64,
    generation: u64,
    layout: Option<LayoutHandle>,
    center: Coordinate,
    chosen: Option<ChosenBlock>,
    chosen_coordinate: Option<Coordinate>,
}

impl<R: Rng> SoundFinder<R> {
    pub fn new(config: FinderConfig, rng: R, viewport: &Viewport) -> Self {
        Self {
            config,
            rng,
            blocks: Vec::new(),
            next_id: 0,
            generation: 0,
            layout: None,
            center: viewport_center(viewport),
            chosen: None,
            chosen_coordinate: None,
        }
    }

    pub fn config(&self) -> &FinderConfig {
        &self.config
    }
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }
    pub fn layout(&self) -> Option<&LayoutHandle> {
        self.layout.as_ref()
    }
    pub fn center_coordinate(&self) -> Coordinate {
        self.center
    }
    pub fn chosen(&self) -> Option<ChosenBlock> {
        self.chosen
    }
    pub fn chosen_index(&self) -> Option<usize> {
        self.chosen.map(|c| c.index)
    }
    pub fn chosen_block_coordinate(&self) -> Option<Coordinate> {
        self.chosen_coordinate
    }
    pub fn volume_range(&self) -> f64 {
        self.config.volume_range
    }

    pub fn clear_blocks(&mut self) {
        self.blocks.clear();
    }

    /// Append `count` blocks. Does not clear; callers that want a fresh grid
    /// call [`Self::clear_blocks`] first.
    pub fn generate_blocks(&mut self, count: usize) -> GenerationTicket {
        let mut fresh = generate_blocks(
            &mut self.rng,
            &mut self.next_id,
            count,
            self.config.height_min,
            self.config.height_max,
        );
        self.blocks.append(&mut fresh);
        self.generation += 1;
        log::debug!(
            "[finder] generation={} appended={} total={}",
            self.generation,
            count,
            self.blocks.len()
        );
        GenerationTicket(self.generation)
    }

    #[inline]
    pub fn is_current(&self, ticket: GenerationTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Make every outstanding ticket stale so no in-flight generate finishes.
    pub fn cancel_pending(&mut self) {
        self.generation += 1;
        log::debug!("[finder] pending generate cancelled at generation {}", self.generation);
    }

    /// Phase one of a generate action: clear, then append the configured
    /// number of blocks. The host renders and waits for layout to settle
    /// before calling [`Self::finish_generate`].
    pub fn begin_generate(&mut self) -> GenerationTicket {
        self.clear_blocks();
        let count = self.config.generate_count;
        self.generate_blocks(count)
    }

    /// Phase two of a generate action: choose a block, unless a newer
    /// generate has started in the meantime.
    pub fn finish_generate(&mut self, ticket: GenerationTicket, stage: &impl Stage) -> Option<usize> {
        if !self.is_current(ticket) {
            log::debug!(
                "[finder] generation {} superseded by {}",
                ticket.0,
                self.generation
            );
            return None;
        }
        self.choose_random_block(stage)
    }

    /// Pack the current blocks and replace the layout handle.
    pub fn apply_layout(
        &mut self,
        masonry: &Masonry,
        container_width: f64,
        viewport_width: f64,
        px_per_unit: f64,
    ) -> &LayoutHandle {
        let heights: Vec<f64> = self
            .blocks
            .iter()
            .map(|b| b.height as f64 * px_per_unit)
            .collect();
        let layout = masonry.pack(container_width, viewport_width, &heights);
        self.layout.insert(LayoutHandle {
            generation: self.generation,
            layout,
        })
    }

    /// Pick one block uniformly at random and record its coordinate. No-op
    /// when there are no blocks or the chosen block is not on the stage.
    pub fn choose_random_block(&mut self, stage: &impl Stage) -> Option<usize> {
        if self.blocks.is_empty() {
            log::debug!("[finder] choose skipped: no blocks");
            return None;
        }
        let index = self.rng.gen_range(0..self.blocks.len());
        let id = self.blocks[index].id;
        let Some(coordinate) = stage.block_coordinate(id) else {
            log::warn!("[finder] block {} is not rendered; selection unchanged", id);
            return None;
        };
        self.chosen = Some(ChosenBlock { index, id });
        self.chosen_coordinate = Some(coordinate);
        log::debug!(
            "[finder] chose index={} id={} at ({:.1},{:.1})",
            index,
            id,
            coordinate.x,
            coordinate.y
        );
        Some(index)
    }

    pub fn update_center_coordinate(&mut self, stage: &impl Stage) {
        self.center = viewport_center(&stage.viewport());
    }

    /// Re-read the chosen block's position. A block that has left the stage
    /// keeps its last known coordinate.
    pub fn update_chosen_block_coordinate(&mut self, stage: &impl Stage) {
        if let Some(chosen) = self.chosen {
            match stage.block_coordinate(chosen.id) {
                Some(c) => self.chosen_coordinate = Some(c),
                None => log::debug!("[finder] chosen block {} no longer rendered", chosen.id),
            }
        }
    }

    pub fn on_resize(&mut self, stage: &impl Stage) {
        self.update_center_coordinate(stage);
        self.update_chosen_block_coordinate(stage);
    }

    // Document-space element positions do not move on scroll.
    pub fn on_scroll(&mut self, stage: &impl Stage) {
        self.update_center_coordinate(stage);
    }

    pub fn collide_vector(&self) -> Option<DVec2> {
        volume::collide_vector(Some(self.center), self.chosen_coordinate)
    }

    pub fn sound_volume(&self) -> f64 {
        volume::sound_volume(self.collide_vector(), self.config.volume_range)
    }
}
