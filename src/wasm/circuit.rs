//! Canvas driver for the circuit-grid background.
//!
//! Owns a [`PatternState`], keeps the canvas sized to the viewport and runs
//! a `requestAnimationFrame` loop for the lifetime of the page. All geometry
//! comes from `crate::pattern`; this module only turns it into 2D context
//! calls.

use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, CanvasRenderingContext2d, Document, HtmlCanvasElement};

use crate::pattern::{self, PatternState, CELL, NODE_RADIUS, RING_RADIUS};

/* Theme colours; the primary blue matches the page stylesheet. */
const GRID_STROKE: &str = "rgba(13, 89, 242, 0.07)";
const NODE_FILL: &str = "rgba(13, 89, 242, 0.25)";
const RING_STROKE: &str = "rgba(13, 89, 242, 0.4)";
const TRAIL_TAIL: &str = "rgba(13, 89, 242, 0)";
const TRAIL_BODY: &str = "rgba(13, 89, 242, 0.4)";
const TRAIL_HOT: &str = "rgba(80, 150, 255, 0.7)";
const TRAIL_TIP: &str = "rgba(180, 220, 255, 0.9)";
const HEAD_FILL: &str = "rgba(160, 210, 255, 0.9)";
const HEAD_RADIUS: f64 = 2.0;

/// Binds `#bg-canvas` and starts the render loop. A page without the canvas
/// simply has no background animation.
pub fn start(document: &Document) -> Result<(), JsValue> {
    let Some(element) = document.get_element_by_id("bg-canvas") else {
        log::warn!("#bg-canvas missing; background animation disabled");
        return Ok(());
    };
    let canvas: HtmlCanvasElement = element.dyn_into()?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or("2d context unavailable")?
        .dyn_into()?;

    let state = Rc::new(RefCell::new(PatternState::new(0.0, 0.0)));
    fit_canvas(&canvas, &mut state.borrow_mut())?;

    // Keep the surface matched to the viewport; the next frame picks up the
    // new dimensions.
    let on_resize = {
        let canvas = canvas.clone();
        let state = state.clone();
        Closure::wrap(Box::new(move || {
            if let Err(err) = fit_canvas(&canvas, &mut state.borrow_mut()) {
                log::warn!("canvas resize failed: {err:?}");
            }
        }) as Box<dyn FnMut()>)
    };
    window()
        .ok_or("no window")?
        .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    on_resize.forget();

    let mut rng = SmallRng::seed_from_u64(js_sys::Date::now() as u64);
    state.borrow_mut().seed(&mut rng);

    // Animation loop. `f` holds the frame closure so it can re-request
    // itself; the loop runs for the lifetime of the page and is torn down
    // with the rest of the context on navigation.
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        {
            let mut state = state.borrow_mut();
            state.step(&mut rng);
            if let Err(err) = draw_frame(&ctx, &state) {
                log::warn!("frame draw failed: {err:?}");
            }
        }
        if let Some(win) = window() {
            let _ = win
                .request_animation_frame(f.borrow().as_ref().unwrap().as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));

    window()
        .ok_or("no window")?
        .request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref())?;

    Ok(())
}

/// Reads the viewport size into the canvas backing store and the pattern
/// state. Runs once at startup and on every window resize.
fn fit_canvas(canvas: &HtmlCanvasElement, state: &mut PatternState) -> Result<(), JsValue> {
    let window = window().ok_or("no window")?;
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    state.resize(width, height);
    Ok(())
}

fn draw_frame(ctx: &CanvasRenderingContext2d, state: &PatternState) -> Result<(), JsValue> {
    let grid = state.grid();
    ctx.clear_rect(0.0, 0.0, grid.width, grid.height);

    // Grid lines.
    ctx.set_stroke_style_str(GRID_STROKE);
    ctx.set_line_width(0.8);
    for c in 0..=grid.cols {
        let x = f64::from(c) * CELL;
        ctx.begin_path();
        ctx.move_to(x, 0.0);
        ctx.line_to(x, grid.height);
        ctx.stroke();
    }
    for r in 0..=grid.rows {
        let y = f64::from(r) * CELL;
        ctx.begin_path();
        ctx.move_to(0.0, y);
        ctx.line_to(grid.width, y);
        ctx.stroke();
    }

    // Sparse dots at one third of the intersections.
    ctx.set_fill_style_str(NODE_FILL);
    for c in 0..=grid.cols {
        for r in 0..=grid.rows {
            if pattern::node_at(c, r) {
                ctx.begin_path();
                ctx.arc(f64::from(c) * CELL, f64::from(r) * CELL, NODE_RADIUS, 0.0, TAU)?;
                ctx.fill();
            }
        }
    }

    // Highlight rings on their own, rarer lattice.
    ctx.set_stroke_style_str(RING_STROKE);
    ctx.set_line_width(1.0);
    for c in 0..=grid.cols {
        for r in 0..=grid.rows {
            if pattern::ring_at(c, r) {
                ctx.begin_path();
                ctx.arc(f64::from(c) * CELL, f64::from(r) * CELL, RING_RADIUS, 0.0, TAU)?;
                ctx.stroke();
            }
        }
    }

    // Pulse trails: transparent tail brightening towards a white-hot tip.
    for pulse in state.pulses() {
        let (tail_x, tail_y) = pulse.tail();
        let grad = ctx.create_linear_gradient(tail_x, tail_y, pulse.x, pulse.y);
        grad.add_color_stop(0.0, TRAIL_TAIL)?;
        grad.add_color_stop(0.6, TRAIL_BODY)?;
        grad.add_color_stop(0.85, TRAIL_HOT)?;
        grad.add_color_stop(1.0, TRAIL_TIP)?;

        ctx.begin_path();
        ctx.set_stroke_style_canvas_gradient(&grad);
        ctx.set_line_width(1.5);
        ctx.move_to(tail_x, tail_y);
        ctx.line_to(pulse.x, pulse.y);
        ctx.stroke();

        ctx.begin_path();
        ctx.set_fill_style_str(HEAD_FILL);
        ctx.arc(pulse.x, pulse.y, HEAD_RADIUS, 0.0, TAU)?;
        ctx.fill();
    }

    Ok(())
}
