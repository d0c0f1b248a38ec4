use crate::constants::{BLOCK_CLASS, BLOCK_ID_ATTR, PX_PER_HEIGHT_UNIT};
use fnv::FnvHashMap;
use sound_core::{Block, BlockId, MasonryLayout};
use wasm_bindgen::JsCast;
use web_sys as web;

pub type BlockElements = FnvHashMap<BlockId, web::HtmlElement>;

#[inline]
fn js_err(e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Replace the container's children with one element per block, in block
/// order. Returns the id -> element mapping used for selection lookups.
pub fn render_blocks(
    document: &web::Document,
    container: &web::HtmlElement,
    blocks: &[Block],
) -> anyhow::Result<BlockElements> {
    container.set_inner_html("");
    let mut elements = FnvHashMap::with_capacity_and_hasher(blocks.len(), Default::default());
    for block in blocks {
        let el: web::HtmlElement = document
            .create_element("div")
            .map_err(js_err)?
            .dyn_into()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        el.set_class_name(BLOCK_CLASS);
        el.set_attribute(BLOCK_ID_ATTR, &block.id.to_string())
            .map_err(js_err)?;
        let style = el.style();
        let _ = style.set_property("background-color", block.color.css_name());
        let _ = style.set_property(
            "height",
            &format!("{}px", block.height as f64 * PX_PER_HEIGHT_UNIT),
        );
        container.append_child(&el).map_err(js_err)?;
        elements.insert(block.id, el);
    }
    Ok(elements)
}

/// Position rendered blocks according to a packed layout.
pub fn apply_layout(
    container: &web::HtmlElement,
    blocks: &[Block],
    elements: &BlockElements,
    layout: &MasonryLayout,
) {
    let cs = container.style();
    let _ = cs.set_property("position", "relative");
    let _ = cs.set_property("height", &format!("{}px", layout.container_height));
    for (block, p) in blocks.iter().zip(&layout.placements) {
        if let Some(el) = elements.get(&block.id) {
            let s = el.style();
            let _ = s.set_property("position", "absolute");
            let _ = s.set_property("left", &format!("{}px", p.x));
            let _ = s.set_property("top", &format!("{}px", p.y));
            let _ = s.set_property("width", &format!("{}px", p.width));
        }
    }
}
