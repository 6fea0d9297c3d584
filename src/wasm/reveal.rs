//! IntersectionObserver glue for the entrance animations.
//!
//! Elements matching the reveal selectors get the `reveal` class; once 12%
//! of an element crosses the trigger line it gains `visible` after a
//! staggered delay and is dropped from the observer (one-shot).

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Document, Element, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::reveal::{stagger_delay, REVEAL_ROOT_MARGIN, REVEAL_SELECTORS, REVEAL_THRESHOLD};

pub fn init(document: &Document) -> Result<(), JsValue> {
    for selector in REVEAL_SELECTORS {
        let nodes = document.query_selector_all(selector)?;
        for i in 0..nodes.length() {
            if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                let _ = el.class_list().add_1("reveal");
            }
        }
    }

    let on_intersect = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for (index, entry) in entries.iter().enumerate() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let base = target
                    .get_attribute("data-delay")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(0);
                schedule_reveal(&target, stagger_delay(base, index as i32));
                observer.unobserve(&target);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)?;
    on_intersect.forget();

    let marked = document.query_selector_all(".reveal")?;
    for i in 0..marked.length() {
        if let Some(el) = marked.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            observer.observe(&el);
        }
    }
    Ok(())
}

/// Adds `visible` after the cascade delay. One leaked timer closure per
/// revealed element, bounded by the number of tagged elements.
fn schedule_reveal(target: &Element, delay_ms: i32) {
    let Some(window) = window() else {
        return;
    };
    let target = target.clone();
    let show = Closure::wrap(Box::new(move || {
        let _ = target.class_list().add_1("visible");
    }) as Box<dyn FnMut()>);
    if window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            show.as_ref().unchecked_ref(),
            delay_ms,
        )
        .is_ok()
    {
        show.forget();
    }
}
