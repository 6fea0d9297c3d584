//! Animated portfolio front-end: a circuit-grid canvas background, navbar
//! behaviour, reveal-on-scroll animations and an EN/ES language toggle.
//!
//! The numeric rules live in the platform-agnostic modules below so they run
//! under plain `cargo test` on the host; everything DOM-facing is gated to
//! wasm32 and wired up from a single `#[wasm_bindgen(start)]` entry point.

pub mod lang;
pub mod pattern;
pub mod reveal;

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;

    pub mod circuit;
    pub mod cursor;
    pub mod lang;
    pub mod nav;
    pub mod reveal;

    /// Page entry point. Each feature binds its own DOM collaborators and
    /// skips quietly when they are absent, so a partial page still loads.
    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        circuit::start(&document)?;
        nav::init(&document)?;
        reveal::init(&document)?;
        lang::init(&document)?;
        cursor::init(&document)?;

        log::info!("portfolio front-end ready");
        Ok(())
    }
}
