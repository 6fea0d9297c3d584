//! Cursor glow: a fixed-position halo that trails the mouse and parks
//! offscreen when the pointer leaves the window.

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, HtmlElement, MouseEvent};

const PARKED: &str = "-999px";

const GLOW_STYLES: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("pointer-events", "none"),
    ("z-index", "9999"),
    ("width", "100px"),
    ("height", "100px"),
    ("border-radius", "50%"),
    (
        "background",
        "radial-gradient(circle, rgba(13,89,242,0.08) 0%, transparent 70%)",
    ),
    ("transform", "translate(-50%, -50%)"),
    ("transition", "left 0.12s ease, top 0.12s ease"),
    ("left", PARKED),
    ("top", PARKED),
];

pub fn init(document: &Document) -> Result<(), JsValue> {
    let Some(body) = document.body() else {
        log::warn!("no <body>; cursor glow disabled");
        return Ok(());
    };

    let glow: HtmlElement = document.create_element("div")?.dyn_into()?;
    glow.set_id("cursor-glow");
    let style = glow.style();
    for (name, value) in GLOW_STYLES {
        style.set_property(name, value)?;
    }
    body.append_child(&glow)?;

    let on_move = {
        let glow = glow.clone();
        Closure::wrap(Box::new(move |event: MouseEvent| {
            let style = glow.style();
            let _ = style.set_property("left", &format!("{}px", event.client_x()));
            let _ = style.set_property("top", &format!("{}px", event.client_y()));
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    document.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
    on_move.forget();

    let on_leave = Closure::wrap(Box::new(move || {
        let style = glow.style();
        let _ = style.set_property("left", PARKED);
        let _ = style.set_property("top", PARKED);
    }) as Box<dyn FnMut()>);
    document.add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref())?;
    on_leave.forget();
    Ok(())
}
