//! One-shot entrance animations for `reveal`-tagged elements.
//!
//! The stylesheet in `index.html` gives `.reveal` elements a transparent,
//! vertically offset initial state; adding `is-visible` transitions them to
//! their final state. A single `IntersectionObserver` watches every tagged
//! element and unobserves each one after its first intersection, so the
//! transition runs exactly once per element.

use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Marks an element for the entrance animation.
pub const REVEAL_CLASS: &str = "reveal";

/// Added when the element first enters the viewport.
pub const VISIBLE_CLASS: &str = "is-visible";

/// Fraction of an element that must be visible before it animates.
const THRESHOLD: f64 = 0.15;

fn selector() -> String {
    format!(".{REVEAL_CLASS}")
}

/// Observe every `reveal` element in the current document.
///
/// Call once, after the page has been mounted. Does nothing outside a
/// browser context or if the observer cannot be constructed.
pub fn observe_all() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let on_intersect = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1(VISIBLE_CLASS);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(THRESHOLD));
    let Ok(observer) =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)
    else {
        return;
    };

    if let Ok(nodes) = document.query_selector_all(&selector()) {
        for index in 0..nodes.length() {
            if let Some(element) = nodes.item(index).and_then(|n| n.dyn_into::<Element>().ok()) {
                observer.observe(&element);
            }
        }
    }

    // The observer lives for the rest of the page; the callback must too.
    on_intersect.forget();
}
