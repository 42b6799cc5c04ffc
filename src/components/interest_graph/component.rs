use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, MouseEvent};

use super::render;
use super::state::GraphState;

fn event_coords(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

fn theme_is_dark() -> bool {
	web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.document_element())
		.and_then(|e| e.get_attribute("data-theme"))
		.is_some_and(|t| t == "dark")
}

/// Follow a node's url: fragments are handed to the section router by
/// clicking the matching nav link, anything else opens in a new tab.
fn follow_url(url: &str) {
	let Some(window) = web_sys::window() else {
		return;
	};
	if let Some(target) = url.strip_prefix('#') {
		let selector = format!("a[href='#{target}']");
		if let Some(link) = window
			.document()
			.and_then(|d| d.query_selector(&selector).ok().flatten())
			.and_then(|e| e.dyn_into::<HtmlElement>().ok())
		{
			link.click();
		}
	} else {
		let _ = window.open_with_url_and_target_and_features(url, "_blank", "noopener");
	}
}

/// Canvas rendering of the interest network: a gently drifting force layout
/// with hover, click-through and drag. Fails quietly if the canvas or its 2d
/// context is unavailable.
#[component]
pub fn InterestGraph() -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<GraphState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	// A click arriving after actual drag movement is not a navigation.
	let drag_moved = Rc::new(Cell::new(false));
	let (state_init, animate_init) = (state.clone(), animate.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = (
			canvas
				.parent_element()
				.map(|p| p.client_width() as f64)
				.filter(|w| *w > 0.0)
				.unwrap_or(800.0),
			canvas
				.parent_element()
				.map(|p| p.client_height() as f64)
				.filter(|h| *h > 0.0)
				.unwrap_or(480.0),
		);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			return;
		};
		*state_init.borrow_mut() = Some(GraphState::new(w, h, js_sys::Date::now() as u64));

		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick(0.016, js_sys::Date::now());
				render::render(s, &ctx, theme_is_dark());
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Some(win) = web_sys::window() {
					let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let (state_md, moved_md) = (state.clone(), drag_moved.clone());
	let on_mousedown = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let (x, y) = event_coords(&canvas.into(), &ev);
		if let Some(ref mut s) = *state_md.borrow_mut() {
			if let Some(idx) = s.node_at_position(x, y) {
				s.begin_drag(idx, x, y);
				moved_md.set(false);
			}
		}
	};

	let (state_mm, moved_mm) = (state.clone(), drag_moved.clone());
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let (x, y) = event_coords(&canvas.into(), &ev);
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			if s.drag.active {
				s.drag_to(x, y);
				moved_mm.set(true);
			} else {
				let hovered = s.node_at_position(x, y);
				s.set_hover(hovered);
			}
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			s.end_drag();
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.end_drag();
			s.set_hover(None);
		}
	};

	let (state_cl, moved_cl) = (state.clone(), drag_moved.clone());
	let on_click = move |ev: MouseEvent| {
		if moved_cl.replace(false) {
			return;
		}
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let (x, y) = event_coords(&canvas.into(), &ev);
		let url = state_cl.borrow().as_ref().and_then(|s| s.url_at_position(x, y));
		if let Some(url) = url {
			follow_url(url);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="interest-graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:click=on_click
			style="display: block;"
		/>
	}
}
