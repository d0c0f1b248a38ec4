#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod app;
mod constants;
mod dom;
mod events;
mod format;
mod readout;
mod render;

use app::App;
use constants::BLOCK_WRAPPER_SELECTOR;

struct Mounted {
    app: Rc<RefCell<App>>,
    listeners: events::Listeners,
}

thread_local! {
    static MOUNTED: RefCell<Option<Mounted>> = const { RefCell::new(None) };
}

static STARTED: AtomicBool = AtomicBool::new(false);

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("sound-finder-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    let mounted = mount_into_page();
    if mounted.is_err() {
        STARTED.store(false, Ordering::SeqCst);
    }
    mounted
}

fn mount_into_page() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let container: web::HtmlElement = document
        .query_selector(BLOCK_WRAPPER_SELECTOR)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("missing {}", BLOCK_WRAPPER_SELECTOR))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let app = Rc::new(RefCell::new(App::new(document, container)?));
    let listeners = events::wire(&window, &app);
    app.borrow_mut().refresh();
    MOUNTED.with(|m| *m.borrow_mut() = Some(Mounted { app, listeners }));
    log::info!("sound-finder mounted");
    Ok(())
}

/// Mount again after [`unmount`]. No-op while already mounted.
#[wasm_bindgen]
pub fn mount() {
    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("mount error: {:?}", e);
        }
    });
}

/// Current derived volume, 0 when nothing is mounted or chosen.
#[wasm_bindgen]
pub fn sound_volume() -> f64 {
    MOUNTED.with(|m| {
        m.borrow()
            .as_ref()
            .map(|m| m.app.borrow().finder.sound_volume())
            .unwrap_or(0.0)
    })
}

/// Same as clicking the generate button.
#[wasm_bindgen]
pub fn generate() {
    let app = MOUNTED.with(|m| m.borrow().as_ref().map(|m| m.app.clone()));
    match app {
        Some(app) => events::spawn_generate(app),
        None => log::warn!("generate called before mount"),
    }
}

/// Detach window and button listeners. The page keeps its last render.
#[wasm_bindgen]
pub fn unmount() {
    let mounted = MOUNTED.with(|m| m.borrow_mut().take());
    if let (Some(mounted), Some(window)) = (mounted, web::window()) {
        match mounted.app.try_borrow_mut() {
            Ok(mut app) => app.finder.cancel_pending(),
            Err(_) => log::warn!("unmount while app is busy; pending generate not cancelled"),
        }
        mounted.listeners.teardown(&window);
        log::info!("sound-finder unmounted");
    }
    STARTED.store(false, Ordering::SeqCst);
}
