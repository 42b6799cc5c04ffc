//! Light/dark theming. The preference lives under one `localStorage` key and
//! is resolved against the OS color scheme when set to auto.

use std::cell::Cell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::MediaQueryList;

const STORAGE_KEY: &str = "theme";
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
	#[default]
	Light,
	Dark,
	Auto,
}

impl Theme {
	pub fn as_str(self) -> &'static str {
		match self {
			Theme::Light => "light",
			Theme::Dark => "dark",
			Theme::Auto => "auto",
		}
	}

	/// Lenient parse; anything unrecognized falls back to light.
	pub fn parse(s: &str) -> Theme {
		match s {
			"dark" => Theme::Dark,
			"auto" => Theme::Auto,
			_ => Theme::Light,
		}
	}
}

/// Resolve a preference to the value the stylesheet consumes.
pub fn resolved(preference: Theme, os_prefers_dark: bool) -> &'static str {
	match preference {
		Theme::Dark => "dark",
		Theme::Light => "light",
		Theme::Auto => {
			if os_prefers_dark {
				"dark"
			} else {
				"light"
			}
		}
	}
}

pub struct ThemeManager {
	theme: Cell<Theme>,
}

impl ThemeManager {
	/// Load the persisted preference, apply it, and re-resolve on OS scheme
	/// changes while the preference is auto.
	pub fn init() -> Rc<Self> {
		let stored = web_sys::window()
			.and_then(|w| w.local_storage().ok().flatten())
			.and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
			.map(|v| Theme::parse(&v))
			.unwrap_or_default();

		let manager = Rc::new(Self { theme: Cell::new(stored) });
		manager.apply();

		let listener_manager = manager.clone();
		let on_change: Closure<dyn FnMut()> = Closure::new(move || {
			if listener_manager.theme.get() == Theme::Auto {
				listener_manager.apply();
			}
		});
		if let Some(query) = media_query() {
			let _ = query
				.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref());
		}
		on_change.forget();

		manager
	}

	/// Persist a new preference and reapply immediately.
	pub fn set_theme(&self, theme: Theme) {
		self.theme.set(theme);
		if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
			let _ = storage.set_item(STORAGE_KEY, theme.as_str());
		}
		self.apply();
	}

	fn apply(&self) {
		let value = resolved(self.theme.get(), os_prefers_dark());
		debug!("theme: {} -> {value}", self.theme.get().as_str());
		if let Some(root) = web_sys::window()
			.and_then(|w| w.document())
			.and_then(|d| d.document_element())
		{
			let _ = root.set_attribute("data-theme", value);
		}
	}
}

fn media_query() -> Option<MediaQueryList> {
	web_sys::window()?.match_media(DARK_QUERY).ok().flatten()
}

fn os_prefers_dark() -> bool {
	media_query().is_some_and(|q| q.matches())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn explicit_preferences_ignore_the_os() {
		assert_eq!(resolved(Theme::Dark, false), "dark");
		assert_eq!(resolved(Theme::Dark, true), "dark");
		assert_eq!(resolved(Theme::Light, false), "light");
		assert_eq!(resolved(Theme::Light, true), "light");
	}

	#[test]
	fn auto_follows_the_os() {
		assert_eq!(resolved(Theme::Auto, true), "dark");
		assert_eq!(resolved(Theme::Auto, false), "light");
	}

	#[test]
	fn parse_defaults_to_light() {
		assert_eq!(Theme::parse("dark"), Theme::Dark);
		assert_eq!(Theme::parse("auto"), Theme::Auto);
		assert_eq!(Theme::parse("light"), Theme::Light);
		assert_eq!(Theme::parse("solarized"), Theme::Light);
		assert_eq!(Theme::parse(""), Theme::Light);
	}

	#[test]
	fn round_trips_through_as_str() {
		for theme in [Theme::Light, Theme::Dark, Theme::Auto] {
			assert_eq!(Theme::parse(theme.as_str()), theme);
		}
	}
}
