use crate::app::{self, App};
use crate::constants::GENERATE_BUTTON_ID;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Listeners registered at mount. Dropping this without calling
/// [`Listeners::teardown`] leaves dangling callbacks in the page.
pub struct Listeners {
    resize: Closure<dyn FnMut()>,
    scroll: Closure<dyn FnMut()>,
    click: Option<(web::Element, Closure<dyn FnMut()>)>,
}

pub fn spawn_generate(app: Rc<RefCell<App>>) {
    spawn_local(async move {
        if let Err(e) = app::generate(app).await {
            log::error!("generate error: {:?}", e);
        }
    });
}

pub fn wire(window: &web::Window, app: &Rc<RefCell<App>>) -> Listeners {
    let app_resize = app.clone();
    let resize = Closure::wrap(Box::new(move || {
        app_resize.borrow_mut().on_resize();
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref());

    let app_scroll = app.clone();
    let scroll = Closure::wrap(Box::new(move || {
        app_scroll.borrow_mut().on_scroll();
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("scroll", scroll.as_ref().unchecked_ref());

    let app_click = app.clone();
    let click = dom::add_click_listener(&app.borrow().document, GENERATE_BUTTON_ID, move || {
        spawn_generate(app_click.clone());
    });
    if click.is_none() {
        log::warn!("#{} not found; generate is only reachable from JS", GENERATE_BUTTON_ID);
    }

    Listeners {
        resize,
        scroll,
        click,
    }
}

impl Listeners {
    /// Remove exactly the callbacks that [`wire`] registered.
    pub fn teardown(self, window: &web::Window) {
        let _ = window
            .remove_event_listener_with_callback("resize", self.resize.as_ref().unchecked_ref());
        let _ = window
            .remove_event_listener_with_callback("scroll", self.scroll.as_ref().unchecked_ref());
        if let Some((el, click)) = &self.click {
            let _ = el.remove_event_listener_with_callback("click", click.as_ref().unchecked_ref());
        }
    }
}
