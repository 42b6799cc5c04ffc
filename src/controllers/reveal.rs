//! Scroll-into-view reveals: cards and essay items get `animate-in` once
//! they cross 10% visibility (minus a 50px bottom margin). The class is
//! permanent and reapplying it is a no-op, so elements stay observed.

use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

const OBSERVED_SELECTORS: &[&str] = &[".project-card", ".essay-item"];

pub struct RevealAnimator;

impl RevealAnimator {
	pub fn init() {
		let Some(document) = web_sys::window().and_then(|w| w.document()) else {
			return;
		};

		let callback: Closure<dyn FnMut(js_sys::Array)> = Closure::new(|entries: js_sys::Array| {
			for entry in entries.iter() {
				let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
					continue;
				};
				if entry.is_intersecting() {
					let _ = entry.target().class_list().add_1("animate-in");
				}
			}
		});

		let options = IntersectionObserverInit::new();
		options.set_threshold(&JsValue::from_f64(0.1));
		options.set_root_margin("0px 0px -50px 0px");
		let Ok(observer) = IntersectionObserver::new_with_options(
			callback.as_ref().unchecked_ref(),
			&options,
		) else {
			return;
		};
		callback.forget();

		for selector in OBSERVED_SELECTORS {
			let Ok(elements) = document.query_selector_all(selector) else {
				continue;
			};
			for i in 0..elements.length() {
				if let Some(el) = elements.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
					observer.observe(&el);
				}
			}
		}
	}
}
