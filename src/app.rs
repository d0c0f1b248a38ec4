use crate::constants::PX_PER_HEIGHT_UNIT;
use crate::dom;
use crate::readout;
use crate::render::{self, BlockElements};
use instant::Instant;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use sound_core::{
    BlockId, Coordinate, FinderConfig, Masonry, MasonryOptions, SoundFinder, Stage, Viewport,
};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Live page as seen by the finder: window geometry plus the rendered block
/// elements, looked up by id.
pub struct WebStage<'a> {
    elements: &'a BlockElements,
}

impl Stage for WebStage<'_> {
    fn viewport(&self) -> Viewport {
        dom::current_viewport()
    }

    fn block_coordinate(&self, id: BlockId) -> Option<Coordinate> {
        let el = self.elements.get(&id)?;
        if !el.is_connected() {
            return None;
        }
        Some(dom::element_document_coordinate(el, &self.viewport()))
    }
}

pub struct App {
    pub document: web::Document,
    pub container: web::HtmlElement,
    pub finder: SoundFinder<SmallRng>,
    pub masonry: Masonry,
    pub elements: BlockElements,
    marked: Option<BlockId>,
}

impl App {
    pub fn new(document: web::Document, container: web::HtmlElement) -> anyhow::Result<Self> {
        let masonry = Masonry::new(MasonryOptions::default())?;
        let finder = SoundFinder::new(
            FinderConfig::default(),
            SmallRng::from_entropy(),
            &dom::current_viewport(),
        );
        Ok(Self {
            document,
            container,
            finder,
            masonry,
            elements: BlockElements::default(),
            marked: None,
        })
    }

    /// Re-pack the current blocks against the container's width and move the
    /// elements into place.
    pub fn reflow(&mut self) {
        let container_width = self.container.client_width() as f64;
        let viewport_width = dom::current_viewport().width;
        self.finder.apply_layout(
            &self.masonry,
            container_width,
            viewport_width,
            PX_PER_HEIGHT_UNIT,
        );
        if let Some(handle) = self.finder.layout() {
            render::apply_layout(
                &self.container,
                self.finder.blocks(),
                &self.elements,
                &handle.layout,
            );
        }
    }

    pub fn on_resize(&mut self) {
        if !self.elements.is_empty() {
            self.reflow();
        }
        let stage = WebStage {
            elements: &self.elements,
        };
        self.finder.on_resize(&stage);
        self.refresh();
    }

    pub fn on_scroll(&mut self) {
        let stage = WebStage {
            elements: &self.elements,
        };
        self.finder.on_scroll(&stage);
        self.refresh();
    }

    /// Push derived state to the page: the volume readout and the chosen
    /// block's highlight.
    pub fn refresh(&mut self) {
        readout::update_volume(&self.document, self.finder.sound_volume());
        let current = self.finder.chosen().map(|c| c.id);
        if current != self.marked {
            readout::mark_chosen(
                self.marked.and_then(|id| self.elements.get(&id)),
                current.and_then(|id| self.elements.get(&id)),
            );
            self.marked = current;
        }
    }
}

/// Clear, generate, wait one frame for the new elements to render, lay out,
/// then choose. A click that arrives while waiting supersedes this one.
pub async fn generate(app: Rc<RefCell<App>>) -> anyhow::Result<()> {
    let started = Instant::now();
    let ticket = {
        let mut a = app.borrow_mut();
        let ticket = a.finder.begin_generate();
        let elements = render::render_blocks(&a.document, &a.container, a.finder.blocks())?;
        a.elements = elements;
        a.marked = None;
        ticket
    };

    dom::next_frame().await?;

    let mut a = app.borrow_mut();
    if !a.finder.is_current(ticket) {
        return Ok(());
    }
    a.reflow();
    let a = &mut *a;
    let stage = WebStage {
        elements: &a.elements,
    };
    let chosen = a.finder.finish_generate(ticket, &stage);
    a.refresh();
    log::info!(
        "[generate] blocks={} chosen={:?} volume={:.3} in {:.1}ms",
        a.finder.blocks().len(),
        chosen,
        a.finder.sound_volume(),
        started.elapsed().as_secs_f64() * 1000.0
    );
    Ok(())
}
