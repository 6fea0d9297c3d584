#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use portfolio_wasm::wasm::{circuit, lang};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

/// The start function runs when the module is instantiated. The harness page
/// has none of the portfolio elements, so every feature must skip instead of
/// failing; only the cursor glow (no DOM prerequisites) gets installed.
#[wasm_bindgen_test]
fn startup_on_a_bare_page_installs_only_the_cursor_glow() {
    assert!(document().get_element_by_id("cursor-glow").is_some());
}

#[wasm_bindgen_test]
fn circuit_start_sizes_the_canvas_to_the_viewport() {
    let document = document();
    let canvas: web_sys::HtmlCanvasElement = document
        .create_element("canvas")
        .unwrap()
        .dyn_into()
        .unwrap();
    canvas.set_id("bg-canvas");
    document.body().unwrap().append_child(&canvas).unwrap();

    circuit::start(&document).unwrap();

    let window = web_sys::window().unwrap();
    let width = window.inner_width().unwrap().as_f64().unwrap() as u32;
    let height = window.inner_height().unwrap().as_f64().unwrap() as u32;
    assert_eq!(canvas.width(), width);
    assert_eq!(canvas.height(), height);

    canvas.remove();
}

#[wasm_bindgen_test]
fn lang_toggle_swaps_translated_text_and_labels() {
    let document = document();
    let body = document.body().unwrap();

    let button = document.create_element("button").unwrap();
    button.set_id("langToggle");
    button.set_inner_html(
        r#"<span class="lang-en accent">EN</span><span class="lang-es">ES</span>"#,
    );
    body.append_child(&button).unwrap();

    let greeting = document.create_element("p").unwrap();
    greeting.set_attribute("data-en", "Hello").unwrap();
    greeting.set_attribute("data-es", "Hola").unwrap();
    greeting.set_text_content(Some("Hello"));
    body.append_child(&greeting).unwrap();

    lang::init(&document).unwrap();

    let es_label = button.query_selector(".lang-es").unwrap().unwrap();
    button
        .dispatch_event(&web_sys::Event::new("click").unwrap())
        .unwrap();
    assert_eq!(greeting.text_content().as_deref(), Some("Hola"));
    assert!(es_label.class_list().contains("accent"));

    button
        .dispatch_event(&web_sys::Event::new("click").unwrap())
        .unwrap();
    assert_eq!(greeting.text_content().as_deref(), Some("Hello"));

    button.remove();
    greeting.remove();
}
