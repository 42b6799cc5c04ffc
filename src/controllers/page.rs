//! Miscellaneous page-load handlers: external-link hardening, scroll-based
//! nav styling, keyboard shortcuts, lazy images and the load fade.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement, HtmlImageElement, IntersectionObserver, KeyboardEvent};

/// Section order backing the digit shortcuts.
pub const SECTION_ORDER: &[&str] = &["home", "projects", "essays", "contact"];

/// Scroll offset past which the nav takes its `scrolled` styling.
const NAV_SCROLL_THRESHOLD: f64 = 60.0;

/// Every external link opens in a new tab without an opener reference.
pub fn harden_external_links() {
	let Some(document) = web_sys::window().and_then(|w| w.document()) else {
		return;
	};
	let Ok(links) = document.query_selector_all("a[href^='http']") else {
		return;
	};
	for i in 0..links.length() {
		if let Some(link) = links.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
			let _ = link.set_attribute("target", "_blank");
			let _ = link.set_attribute("rel", "noopener noreferrer");
		}
	}
}

/// Owns the last seen scroll offset and toggles `.nav.scrolled`.
pub struct NavScroll {
	last_scroll_top: Cell<f64>,
}

impl NavScroll {
	pub fn init() {
		let Some(window) = web_sys::window() else {
			return;
		};
		let controller = Rc::new(Self { last_scroll_top: Cell::new(0.0) });
		let on_scroll: Closure<dyn FnMut()> = Closure::new(move || controller.on_scroll());
		let _ = window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
		on_scroll.forget();
	}

	fn on_scroll(&self) {
		let Some(window) = web_sys::window() else {
			return;
		};
		let Some(nav) = window
			.document()
			.and_then(|d| d.query_selector(".nav").ok().flatten())
		else {
			return;
		};
		let scroll_top = window.page_y_offset().unwrap_or(0.0);
		if scroll_top > NAV_SCROLL_THRESHOLD {
			let _ = nav.class_list().add_1("scrolled");
		} else {
			let _ = nav.class_list().remove_1("scrolled");
		}
		self.last_scroll_top.set(scroll_top);
	}
}

/// Map a keydown to the section it should navigate to, if any.
pub fn section_for_key(key: &str) -> Option<&'static str> {
	if key == "Escape" {
		return Some(SECTION_ORDER[0]);
	}
	let digit: usize = key.parse().ok()?;
	(1..=SECTION_ORDER.len())
		.contains(&digit)
		.then(|| SECTION_ORDER[digit - 1])
}

/// Escape returns home; digits 1-4 jump by position. Navigation goes through
/// the matching nav link so the router owns the transition.
pub fn init_keyboard_shortcuts() {
	let Some(document) = web_sys::window().and_then(|w| w.document()) else {
		return;
	};
	let on_keydown: Closure<dyn FnMut(KeyboardEvent)> = Closure::new(|ev: KeyboardEvent| {
		let Some(target) = section_for_key(&ev.key()) else {
			return;
		};
		let selector = format!("a[href='#{target}']");
		if let Some(link) = web_sys::window()
			.and_then(|w| w.document())
			.and_then(|d| d.query_selector(&selector).ok().flatten())
			.and_then(|e| e.dyn_into::<HtmlElement>().ok())
		{
			link.click();
		}
	});
	let _ = document.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
	on_keydown.forget();
}

/// Promote `img[data-src]` to `src` on first sight, then stop watching.
pub fn lazy_load_images() {
	let Some(document) = web_sys::window().and_then(|w| w.document()) else {
		return;
	};
	let Ok(images) = document.query_selector_all("img[data-src]") else {
		return;
	};
	if images.length() == 0 {
		return;
	}

	let observer: Rc<Cell<Option<IntersectionObserver>>> = Rc::new(Cell::new(None));
	let observer_cb = observer.clone();
	let callback: Closure<dyn FnMut(js_sys::Array)> = Closure::new(move |entries: js_sys::Array| {
		for entry in entries.iter() {
			let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
				continue;
			};
			if !entry.is_intersecting() {
				continue;
			}
			let target = entry.target();
			if let Ok(img) = target.clone().dyn_into::<HtmlImageElement>() {
				if let Some(src) = img.get_attribute("data-src") {
					img.set_src(&src);
					let _ = img.remove_attribute("data-src");
				}
			}
			if let Some(obs) = observer_cb.take() {
				obs.unobserve(&target);
				observer_cb.set(Some(obs));
			}
		}
	});
	let Ok(obs) = IntersectionObserver::new(callback.as_ref().unchecked_ref()) else {
		return;
	};
	callback.forget();

	for i in 0..images.length() {
		if let Some(img) = images.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
			obs.observe(&img);
		}
	}
	observer.set(Some(obs));
}

/// Fade the page in once loading settles; the CSS transition does the rest.
pub fn init_load_fade() {
	let Some(document) = web_sys::window().and_then(|w| w.document()) else {
		return;
	};
	let mark_loaded = || {
		if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
			let _ = body.class_list().add_1("loaded");
		}
	};
	// wasm usually starts after the load event has already fired
	if document.ready_state() == "complete" {
		mark_loaded();
		return;
	}
	let on_load: Closure<dyn FnMut()> = Closure::new(mark_loaded);
	if let Some(window) = web_sys::window() {
		let _ = window.add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref());
	}
	on_load.forget();
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn escape_goes_home() {
		assert_eq!(section_for_key("Escape"), Some("home"));
	}

	#[test]
	fn digits_map_by_position() {
		assert_eq!(section_for_key("1"), Some("home"));
		assert_eq!(section_for_key("2"), Some("projects"));
		assert_eq!(section_for_key("3"), Some("essays"));
		assert_eq!(section_for_key("4"), Some("contact"));
	}

	#[test]
	fn other_keys_do_nothing() {
		assert_eq!(section_for_key("0"), None);
		assert_eq!(section_for_key("5"), None);
		assert_eq!(section_for_key("a"), None);
		assert_eq!(section_for_key("Enter"), None);
	}
}
