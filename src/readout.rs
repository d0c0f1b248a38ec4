use crate::constants::{CHOSEN_CLASS, VOLUME_DECIMALS, VOLUME_READOUT_ID};
use crate::format::format_volume;
use web_sys as web;

/// Write the current volume into the readout element, if the page has one.
pub fn update_volume(document: &web::Document, volume: f64) {
    if let Some(el) = document.get_element_by_id(VOLUME_READOUT_ID) {
        el.set_text_content(Some(&format_volume(volume, VOLUME_DECIMALS)));
        let _ = el.set_attribute("data-volume", &volume.to_string());
    }
}

pub fn mark_chosen(previous: Option<&web::HtmlElement>, current: Option<&web::HtmlElement>) {
    if let Some(el) = previous {
        let _ = el.class_list().remove_1(CHOSEN_CLASS);
    }
    if let Some(el) = current {
        let _ = el.class_list().add_1(CHOSEN_CLASS);
    }
}
