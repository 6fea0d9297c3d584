//! Navigation behaviour: navbar scroll styling, the hamburger menu, smooth
//! anchor scrolling and the hero buttons.

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Document, Element, Event, HtmlElement, ScrollBehavior, ScrollToOptions};

/// Scroll offset past which the navbar gets its opaque treatment.
const SCROLL_THRESHOLD: f64 = 20.0;

pub fn init(document: &Document) -> Result<(), JsValue> {
    init_scroll_effect(document)?;
    init_hamburger(document)?;
    init_anchor_scroll(document)?;
    init_hero_buttons(document)?;
    Ok(())
}

fn init_scroll_effect(document: &Document) -> Result<(), JsValue> {
    let Some(navbar) = document.get_element_by_id("navbar") else {
        log::warn!("#navbar missing; scroll effect disabled");
        return Ok(());
    };
    let navbar: HtmlElement = navbar.dyn_into()?;

    let on_scroll = Closure::wrap(Box::new(move || {
        let scrolled = window()
            .and_then(|w| w.scroll_y().ok())
            .is_some_and(|y| y > SCROLL_THRESHOLD);
        let style = navbar.style();
        if scrolled {
            let _ = style.set_property("border-bottom-color", "rgba(13, 89, 242, 0.35)");
            let _ = style.set_property("box-shadow", "0 4px 30px rgba(0,0,0,0.4)");
        } else {
            let _ = style.remove_property("border-bottom-color");
            let _ = style.remove_property("box-shadow");
        }
    }) as Box<dyn FnMut()>);
    window()
        .ok_or("no window")?
        .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
    on_scroll.forget();
    Ok(())
}

fn init_hamburger(document: &Document) -> Result<(), JsValue> {
    let (Some(hamburger), Some(menu)) = (
        document.get_element_by_id("hamburger"),
        document.get_element_by_id("mobile-menu"),
    ) else {
        log::warn!("#hamburger/#mobile-menu missing; mobile nav disabled");
        return Ok(());
    };

    let on_toggle = {
        let hamburger = hamburger.clone();
        let menu = menu.clone();
        Closure::wrap(Box::new(move || {
            let open = menu.class_list().toggle("open").unwrap_or(false);
            set_hamburger_icon(&hamburger, open);
        }) as Box<dyn FnMut()>)
    };
    hamburger.add_event_listener_with_callback("click", on_toggle.as_ref().unchecked_ref())?;
    on_toggle.forget();

    // Clicking any menu link closes the menu again.
    let links = menu.query_selector_all("a")?;
    for i in 0..links.length() {
        let Some(link) = links.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let on_close = {
            let hamburger = hamburger.clone();
            let menu = menu.clone();
            Closure::wrap(Box::new(move || {
                let _ = menu.class_list().remove_1("open");
                set_hamburger_icon(&hamburger, false);
            }) as Box<dyn FnMut()>)
        };
        link.add_event_listener_with_callback("click", on_close.as_ref().unchecked_ref())?;
        on_close.forget();
    }
    Ok(())
}

fn set_hamburger_icon(hamburger: &Element, open: bool) {
    if let Ok(Some(icon)) = hamburger.query_selector(".material-symbols-outlined") {
        icon.set_text_content(Some(if open { "close" } else { "menu" }));
    }
}

/// In-page anchors scroll smoothly to their target, offset by the navbar
/// height so the fixed bar never covers the section heading.
fn init_anchor_scroll(document: &Document) -> Result<(), JsValue> {
    let anchors = document.query_selector_all(r##"a[href^="#"]"##)?;
    for i in 0..anchors.length() {
        let Some(anchor) = anchors.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let on_click = {
            let anchor = anchor.clone();
            let document = document.clone();
            Closure::wrap(Box::new(move |event: Event| {
                let Some(href) = anchor.get_attribute("href") else {
                    return;
                };
                if href == "#" {
                    return;
                }
                let Ok(Some(target)) = document.query_selector(&href) else {
                    return;
                };
                event.prevent_default();
                scroll_to_section(&document, &target);
            }) as Box<dyn FnMut(Event)>)
        };
        anchor.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    Ok(())
}

fn init_hero_buttons(document: &Document) -> Result<(), JsValue> {
    if let Some(ghost) = document.query_selector(".hero-actions .btn-ghost")? {
        let on_click = {
            let document = document.clone();
            Closure::wrap(Box::new(move || {
                if let Some(projects) = document.get_element_by_id("projects") {
                    scroll_to_section(&document, &projects);
                }
            }) as Box<dyn FnMut()>)
        };
        ghost.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    // Placeholder until a real CV link is wired up.
    if let Some(cv) = document.query_selector(".btn-primary")? {
        let on_click = Closure::wrap(Box::new(move || {
            if let Some(win) = window() {
                let _ = win.alert_with_message("CV disponible próximamente 🚀");
            }
        }) as Box<dyn FnMut()>);
        cv.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    Ok(())
}

fn scroll_to_section(document: &Document, target: &Element) {
    let Some(window) = window() else {
        return;
    };
    let navbar_height = document
        .get_element_by_id("navbar")
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map_or(0.0, |nav| f64::from(nav.offset_height()));
    let top =
        target.get_bounding_client_rect().top() + window.scroll_y().unwrap_or(0.0) - navbar_height;

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
