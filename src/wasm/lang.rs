//! Language toggle glue: one button swaps every translated element between
//! its `data-en` and `data-es` text.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, Element};

use crate::lang::Lang;

pub fn init(document: &Document) -> Result<(), JsValue> {
    let Some(button) = document.get_element_by_id("langToggle") else {
        log::warn!("#langToggle missing; language toggle disabled");
        return Ok(());
    };
    let span_en = button.query_selector(".lang-en")?;
    let span_es = button.query_selector(".lang-es")?;

    let current = Rc::new(Cell::new(Lang::default()));
    let on_click = {
        let document = document.clone();
        Closure::wrap(Box::new(move || {
            let lang = current.get().toggled();
            current.set(lang);

            if let (Some(en), Some(es)) = (&span_en, &span_es) {
                let (active, inactive) = match lang {
                    Lang::En => (en, es),
                    Lang::Es => (es, en),
                };
                let _ = active.class_list().add_1("accent");
                let _ = inactive.class_list().remove_1("accent");
            }

            if let Err(err) = apply_language(&document, lang) {
                log::warn!("language swap failed: {err:?}");
            }
        }) as Box<dyn FnMut()>)
    };
    button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}

/// Rewrites the text of every element carrying both translations.
fn apply_language(document: &Document, lang: Lang) -> Result<(), JsValue> {
    let nodes = document.query_selector_all("[data-en][data-es]")?;
    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        if let Some(text) = el.get_attribute(lang.attr()) {
            el.set_text_content(Some(&text));
        }
    }
    Ok(())
}
