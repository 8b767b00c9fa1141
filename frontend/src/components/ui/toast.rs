//! Transient notifications at the bottom of the screen.

use std::fmt::Display;

use common::error::{StoreError, StoreResult};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

const TOAST_MILLIS: u32 = 3000;

/// Shows `message` for a few seconds. Used to report the outcome of
/// mutations, since failures never interrupt the page.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };

    toast.set_text_content(Some(message));
    let toast: HtmlElement = toast.unchecked_into();
    let style = toast.style();
    for (property, value) in [
        ("position", "fixed"),
        ("bottom", "20px"),
        ("left", "50%"),
        ("transform", "translateX(-50%)"),
        ("background", "rgba(0, 0, 0, 0.8)"),
        ("color", "#fff"),
        ("padding", "10px 20px"),
        ("border-radius", "4px"),
        ("z-index", "10000"),
    ] {
        style.set_property(property, value).ok();
    }

    if body.append_child(&toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_MILLIS).await;
            if let Some(parent) = toast.parent_node() {
                parent.remove_child(&toast).ok();
            }
        });
    }
}

/// Toast text for a finished delete. A declined confirmation says nothing;
/// transport failures are reported so they don't look like a cancel.
pub fn delete_outcome(noun: &str, id: impl Display, result: &StoreResult<()>) -> Option<String> {
    match result {
        Ok(()) => Some(format!("{} {} deleted.", noun, id)),
        Err(StoreError::NotConfirmed) => None,
        Err(err) => Some(format!("Could not delete {} {}: {}", noun.to_lowercase(), id, err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::error::ApiError;

    #[test]
    fn declined_delete_is_silent() {
        assert_eq!(delete_outcome("User", 2, &Err(StoreError::NotConfirmed)), None);
    }

    #[test]
    fn failed_delete_is_reported() {
        let result = Err(StoreError::Network(ApiError::Status {
            status: 403,
            body: "forbidden".to_string(),
        }));
        let message = delete_outcome("Reservation", 7, &result).unwrap();
        assert!(message.starts_with("Could not delete reservation 7: "));
    }

    #[test]
    fn successful_delete_is_announced() {
        assert_eq!(
            delete_outcome("Reservation", 7, &Ok(())).as_deref(),
            Some("Reservation 7 deleted.")
        );
    }
}
