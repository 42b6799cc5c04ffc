//! DOM-driven controllers. Each one owns its state, attaches its own browser
//! event listeners on init, and from then on reacts independently; all of
//! them degrade to a no-op when their DOM targets are missing.

pub mod page;
pub mod reveal;
pub mod router;
pub mod theme;
pub mod typing;

use log::debug;

/// Wire up every controller against the freshly rendered page. Called once
/// from the home page's mount effect.
pub fn init() {
	router::SectionRouter::init();
	reveal::RevealAnimator::init();
	theme::ThemeManager::init();
	page::harden_external_links();
	page::lazy_load_images();
	page::NavScroll::init();
	page::init_keyboard_shortcuts();
	page::init_load_fade();

	if typing::TYPING_ENABLED {
		typing::start_intro_typing();
	}

	debug!("Controllers initialized");
}
