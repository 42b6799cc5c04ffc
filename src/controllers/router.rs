//! Fragment-based section switching: one `.section` visible at a time,
//! history kept in sync, nav highlight following along.

use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, ScrollBehavior, ScrollToOptions};

/// Fragment to fall back on when the url carries none.
pub const HOME: &str = "home";

/// Strip the leading `#` from a location hash and default to home.
pub fn fragment_or_home(hash: &str) -> &str {
	let frag = hash.strip_prefix('#').unwrap_or(hash);
	if frag.is_empty() { HOME } else { frag }
}

pub struct SectionRouter;

impl SectionRouter {
	/// Attach click interception to nav links and intro buttons, hook
	/// `popstate`, and resolve the fragment the page loaded with.
	pub fn init() {
		let Some(document) = web_sys::window().and_then(|w| w.document()) else {
			return;
		};

		Self::intercept_clicks(&document, ".nav-link");
		Self::intercept_clicks(&document, ".link-button");

		let on_popstate: Closure<dyn FnMut()> = Closure::new(|| {
			let hash = web_sys::window()
				.map(|w| w.location().hash().unwrap_or_default())
				.unwrap_or_default();
			let target = fragment_or_home(&hash).to_owned();
			// back/forward already moved the url; only visibility changes
			Self::reveal(&target);
			Self::update_active_nav(&target);
		});
		if let Some(window) = web_sys::window() {
			let _ = window
				.add_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref());
		}
		// listeners live for the page lifetime
		on_popstate.forget();

		let hash = web_sys::window()
			.map(|w| w.location().hash().unwrap_or_default())
			.unwrap_or_default();
		Self::navigate(fragment_or_home(&hash));
	}

	fn intercept_clicks(document: &Document, selector: &str) {
		let Ok(links) = document.query_selector_all(selector) else {
			return;
		};
		for i in 0..links.length() {
			let Some(link) = links.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
				continue;
			};
			let on_click: Closure<dyn FnMut(web_sys::Event)> = Closure::new(move |ev: web_sys::Event| {
				ev.prevent_default();
				let Some(href) = ev
					.current_target()
					.and_then(|t| t.dyn_into::<Element>().ok())
					.and_then(|e| e.get_attribute("href"))
				else {
					return;
				};
				Self::navigate(fragment_or_home(&href));
			});
			let _ = link.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
			on_click.forget();
		}
	}

	/// Show the target section and sync the nav highlight. Unknown targets
	/// change nothing.
	pub fn navigate(target: &str) {
		debug!("navigate: #{target}");
		Self::show_section(target);
		Self::update_active_nav(target);
	}

	/// Switch visibility, push `#target` onto the history and scroll to top.
	fn show_section(target: &str) {
		if !Self::reveal(target) {
			return;
		}
		let Some(window) = web_sys::window() else {
			return;
		};
		if let Ok(history) = window.history() {
			let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&format!("#{target}")));
		}
		let opts = ScrollToOptions::new();
		opts.set_top(0.0);
		opts.set_behavior(ScrollBehavior::Smooth);
		window.scroll_to_with_scroll_to_options(&opts);
	}

	/// Flip the `active` class to the target section. Returns false (and
	/// touches nothing) when no section matches.
	fn reveal(target: &str) -> bool {
		let Some(document) = web_sys::window().and_then(|w| w.document()) else {
			return false;
		};
		let Some(section) = document.get_element_by_id(target) else {
			return false;
		};
		if !section.class_list().contains("section") {
			return false;
		}
		if let Ok(sections) = document.query_selector_all(".section") {
			for i in 0..sections.length() {
				if let Some(el) = sections.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
					let _ = el.class_list().remove_1("active");
				}
			}
		}
		let _ = section.class_list().add_1("active");
		true
	}

	/// Move the `active` highlight to the nav link for the target, if one
	/// exists; intro buttons never take the highlight.
	fn update_active_nav(target: &str) {
		let Some(document) = web_sys::window().and_then(|w| w.document()) else {
			return;
		};
		if let Ok(links) = document.query_selector_all(".nav-link") {
			for i in 0..links.length() {
				if let Some(el) = links.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
					let _ = el.class_list().remove_1("active");
				}
			}
		}
		let selector = format!("a[href='#{target}']");
		if let Ok(Some(link)) = document.query_selector(&selector) {
			if link.class_list().contains("nav-link") {
				let _ = link.class_list().add_1("active");
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_hash_defaults_to_home() {
		assert_eq!(fragment_or_home(""), "home");
		assert_eq!(fragment_or_home("#"), "home");
	}

	#[test]
	fn fragment_is_extracted() {
		assert_eq!(fragment_or_home("#projects"), "projects");
		assert_eq!(fragment_or_home("#essays"), "essays");
	}

	#[test]
	fn bare_fragment_passes_through() {
		assert_eq!(fragment_or_home("contact"), "contact");
	}
}
