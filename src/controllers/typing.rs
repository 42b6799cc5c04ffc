//! Type/delete cycling for the intro subtitle. The effect is wired but
//! dormant: flip [`TYPING_ENABLED`] to turn it on.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

/// Deliberately off, matching the site as shipped.
pub const TYPING_ENABLED: bool = false;

const END_PAUSE_MS: u32 = 2000;
const WRAP_PAUSE_MS: u32 = 500;

/// One scheduled step: what to show now and how long to wait before the next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
	pub text: String,
	pub delay_ms: u32,
}

/// The restartable step function behind the animation: grows the current
/// string one char at a time, pauses when full, shrinks at double speed,
/// pauses when empty, then advances to the next string (wrapping).
pub struct TypingState {
	texts: Vec<String>,
	speed_ms: u32,
	text_index: usize,
	char_index: usize,
	deleting: bool,
}

impl TypingState {
	pub fn new(texts: Vec<String>, speed_ms: u32) -> Self {
		Self {
			texts,
			speed_ms,
			text_index: 0,
			char_index: 0,
			deleting: false,
		}
	}

	pub fn step(&mut self) -> Step {
		// nothing to type: idle instead of indexing into nothing
		if self.texts.is_empty() {
			return Step { text: String::new(), delay_ms: END_PAUSE_MS };
		}
		let full: Vec<char> = self.texts[self.text_index].chars().collect();

		if self.deleting {
			self.char_index = self.char_index.saturating_sub(1);
		} else if self.char_index < full.len() {
			self.char_index += 1;
		}
		let text: String = full[..self.char_index].iter().collect();

		let mut delay_ms = if self.deleting {
			self.speed_ms / 2
		} else {
			self.speed_ms
		};

		if !self.deleting && self.char_index == full.len() {
			delay_ms = END_PAUSE_MS;
			self.deleting = true;
		} else if self.deleting && self.char_index == 0 {
			self.deleting = false;
			self.text_index = (self.text_index + 1) % self.texts.len();
			delay_ms = WRAP_PAUSE_MS;
		}

		Step { text, delay_ms }
	}
}

/// Self-rescheduling driver: each step writes the element text and arms a
/// timeout for the next. Cancellation is simply ceasing to reschedule.
pub struct TypingAnimation {
	cancelled: Rc<std::cell::Cell<bool>>,
}

impl TypingAnimation {
	pub fn start(element: Element, texts: Vec<String>, speed_ms: u32) -> Self {
		let cancelled = Rc::new(std::cell::Cell::new(false));
		let state = Rc::new(RefCell::new(TypingState::new(texts, speed_ms)));

		let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
		let (tick_inner, cancel_inner) = (tick.clone(), cancelled.clone());
		*tick.borrow_mut() = Some(Closure::new(move || {
			if cancel_inner.get() {
				return;
			}
			let step = state.borrow_mut().step();
			element.set_text_content(Some(&step.text));
			if let Some(ref cb) = *tick_inner.borrow() {
				schedule(cb, step.delay_ms);
			}
		}));
		if let Some(ref cb) = *tick.borrow() {
			schedule(cb, speed_ms);
		}
		// the closure keeps itself alive through tick_inner
		std::mem::forget(tick);

		Self { cancelled }
	}

	pub fn stop(&self) {
		self.cancelled.set(true);
	}
}

fn schedule(cb: &Closure<dyn FnMut()>, delay_ms: u32) {
	if let Some(window) = web_sys::window() {
		let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
			cb.as_ref().unchecked_ref(),
			delay_ms as i32,
		);
	}
}

/// Attach the animation to the intro subtitle, if present.
pub fn start_intro_typing() {
	let Some(subtitle) = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.query_selector(".intro-subtitle").ok().flatten())
	else {
		return;
	};
	let texts = vec![
		"Software engineer, 23".to_owned(),
		"Building small, sharp tools".to_owned(),
		"Learning every day".to_owned(),
	];
	let animation = TypingAnimation::start(subtitle, texts, 150);
	// page-lifetime effect, nothing ever stops it
	std::mem::forget(animation);
}

#[cfg(test)]
mod tests {
	use super::*;

	fn state(texts: &[&str], speed: u32) -> TypingState {
		TypingState::new(texts.iter().map(|s| s.to_string()).collect(), speed)
	}

	#[test]
	fn grows_one_char_at_a_time() {
		let mut s = state(&["hi"], 100);
		assert_eq!(s.step(), Step { text: "h".into(), delay_ms: 100 });
		assert_eq!(s.step(), Step { text: "hi".into(), delay_ms: 2000 });
	}

	#[test]
	fn deletes_at_double_speed_then_wraps() {
		let mut s = state(&["ab", "xyz"], 100);
		s.step(); // a
		s.step(); // ab, end pause
		assert_eq!(s.step(), Step { text: "a".into(), delay_ms: 50 });
		assert_eq!(s.step(), Step { text: "".into(), delay_ms: 500 });
		// next string
		assert_eq!(s.step(), Step { text: "x".into(), delay_ms: 100 });
	}

	#[test]
	fn wraps_back_to_the_first_string() {
		let mut s = state(&["a", "b"], 80);
		// a: type, delete; b: type, delete; back to a
		let texts: Vec<String> = (0..8).map(|_| s.step().text).collect();
		assert_eq!(texts, vec!["a", "", "b", "", "a", "", "b", ""]);
	}

	#[test]
	fn empty_string_is_instantly_full_then_wraps() {
		let mut s = state(&["", "ok"], 100);
		// zero chars: already "full", pause and flip straight to deleting
		assert_eq!(s.step(), Step { text: "".into(), delay_ms: 2000 });
		assert_eq!(s.step(), Step { text: "".into(), delay_ms: 500 });
		assert_eq!(s.step(), Step { text: "o".into(), delay_ms: 100 });
	}

	#[test]
	fn no_texts_is_inert() {
		let mut s = TypingState::new(Vec::new(), 100);
		for _ in 0..3 {
			assert_eq!(s.step(), Step { text: "".into(), delay_ms: 2000 });
		}
	}

	#[test]
	fn single_char_cycle_delays() {
		let mut s = state(&["a"], 100);
		assert_eq!(s.step(), Step { text: "a".into(), delay_ms: 2000 });
		assert_eq!(s.step(), Step { text: "".into(), delay_ms: 500 });
		assert_eq!(s.step(), Step { text: "a".into(), delay_ms: 2000 });
	}
}
