use super::data;
use super::layout;
use super::rand::Lcg;
use super::scale;
use super::sim::{self, Simulation};
use super::types::{GraphData, NodeKind};

pub const LEAF_RADIUS: f64 = 3.0;
const HIT_PADDING: f64 = 4.0;
/// Hover grows a node's radius by this factor at full transition.
pub const HOVER_GROWTH: f64 = 0.15;
const HOVER_IN_SECS: f64 = 0.18;
const HOVER_OUT_SECS: f64 = 0.25;

#[derive(Clone, Copy, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node: Option<usize>,
}

/// Hover transition bookkeeping: `t` ramps up on the current node while
/// `prev_t` eases the previous one back down, so a direct handoff from one
/// node to another fades both at once.
#[derive(Clone, Copy, Debug, Default)]
pub struct HoverState {
	pub node: Option<usize>,
	pub t: f64,
	pub prev: Option<usize>,
	pub prev_t: f64,
}

pub struct GraphState {
	pub data: GraphData,
	pub sim: Simulation,
	pub drag: DragState,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
}

impl GraphState {
	pub fn new(width: f64, height: f64, seed: u64) -> Self {
		let data = data::build_graph();
		let mut rng = Lcg::new(seed);
		let positions = layout::initial_layout(&data, width, height, &mut rng);
		let sim = Simulation::new(&data, &positions, width, height, seed ^ 0x9e37_79b9);
		Self {
			data,
			sim,
			drag: DragState::default(),
			hover: HoverState::default(),
			width,
			height,
		}
	}

	/// Base (unhovered) display radius of a node.
	pub fn base_radius(&self, idx: usize) -> f64 {
		let node = &self.data.nodes[idx];
		match node.kind {
			NodeKind::Leaf => LEAF_RADIUS,
			_ => scale::radius(node.weight),
		}
	}

	/// Display radius including the hover enlargement.
	pub fn display_radius(&self, idx: usize) -> f64 {
		let base = self.base_radius(idx);
		if self.hover.node == Some(idx) {
			base * (1.0 + HOVER_GROWTH * ease_out(self.hover.t))
		} else if self.hover.prev == Some(idx) {
			base * (1.0 + HOVER_GROWTH * ease_out(self.hover.prev_t))
		} else {
			base
		}
	}

	pub fn node_at_position(&self, x: f64, y: f64) -> Option<usize> {
		let mut found = None;
		for (idx, node) in self.sim.nodes.iter().enumerate() {
			let (dx, dy) = (node.x - x, node.y - y);
			let hit = self.base_radius(idx) + HIT_PADDING;
			if (dx * dx + dy * dy).sqrt() < hit {
				found = Some(idx);
			}
		}
		found
	}

	/// Hover only reacts on root and interest nodes; leaves are decoration.
	pub fn set_hover(&mut self, node: Option<usize>) {
		let node = node.filter(|&i| self.data.nodes[i].kind != NodeKind::Leaf);
		if self.hover.node == node {
			return;
		}
		if self.hover.node.is_some() {
			// outgoing node keeps its current growth and eases back from it
			self.hover.prev = self.hover.node.take();
			self.hover.prev_t = self.hover.t;
		}
		if node.is_some() {
			self.hover.t = 0.0;
		}
		self.hover.node = node;
	}

	pub fn begin_drag(&mut self, idx: usize, x: f64, y: f64) {
		self.drag.active = true;
		self.drag.node = Some(idx);
		self.sim.pin(idx, x, y);
		self.sim.set_alpha_target(sim::ALPHA_DRAG);
	}

	pub fn drag_to(&mut self, x: f64, y: f64) {
		if let (true, Some(idx)) = (self.drag.active, self.drag.node) {
			self.sim.pin(idx, x, y);
		}
	}

	pub fn end_drag(&mut self) {
		if let Some(idx) = self.drag.node.take() {
			self.sim.unpin(idx);
		}
		self.drag.active = false;
	}

	/// Url of the node under the pointer, if it carries one.
	pub fn url_at_position(&self, x: f64, y: f64) -> Option<&'static str> {
		self.node_at_position(x, y)
			.and_then(|idx| self.data.nodes[idx].url)
	}

	/// Advance one frame: modulate the target energy off the wall clock
	/// (unless a drag holds it high), step the simulation, ease the hover.
	pub fn tick(&mut self, dt: f64, now_ms: f64) {
		let target = if self.drag.active {
			sim::ALPHA_DRAG
		} else {
			sim::alpha_target_at(now_ms)
		};
		self.sim.set_alpha_target(target);
		self.sim.tick();

		if self.hover.node.is_some() {
			self.hover.t = (self.hover.t + dt / HOVER_IN_SECS).min(1.0);
		}
		if self.hover.prev.is_some() {
			self.hover.prev_t -= dt / HOVER_OUT_SECS;
			if self.hover.prev_t <= 0.0 {
				self.hover.prev_t = 0.0;
				self.hover.prev = None;
			}
		}
	}
}

fn ease_out(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn make_state() -> GraphState {
		GraphState::new(800.0, 600.0, 11)
	}

	#[test]
	fn hit_test_finds_the_root_at_center() {
		let state = make_state();
		let idx = state.node_at_position(400.0, 300.0).unwrap();
		assert_eq!(state.data.nodes[idx].kind, NodeKind::Root);
	}

	#[test]
	fn hit_test_misses_empty_space() {
		let state = make_state();
		assert_eq!(state.node_at_position(2.0, 2.0), None);
	}

	#[test]
	fn hover_ignores_leaves() {
		let mut state = make_state();
		let leaf = state
			.data
			.nodes
			.iter()
			.position(|n| n.kind == NodeKind::Leaf)
			.unwrap();
		state.set_hover(Some(leaf));
		assert_eq!(state.hover.node, None);
	}

	#[test]
	fn hover_grows_and_reverts() {
		let mut state = make_state();
		state.set_hover(Some(1));
		for _ in 0..20 {
			state.tick(0.016, 0.0);
		}
		let grown = state.display_radius(1);
		assert!((grown / state.base_radius(1) - 1.15).abs() < 1e-6);

		state.set_hover(None);
		for _ in 0..30 {
			state.tick(0.016, 0.0);
		}
		assert_eq!(state.display_radius(1), state.base_radius(1));
	}

	#[test]
	fn direct_hover_handoff_eases_the_old_node_out() {
		let mut state = make_state();
		state.set_hover(Some(1));
		for _ in 0..20 {
			state.tick(0.016, 0.0);
		}
		let grown = state.display_radius(1);

		state.set_hover(Some(2));
		// no snap: the outgoing node starts easing from its grown radius
		assert_eq!(state.display_radius(1), grown);
		state.tick(0.016, 0.0);
		let easing = state.display_radius(1);
		assert!(easing < grown);
		assert!(easing > state.base_radius(1));

		for _ in 0..30 {
			state.tick(0.016, 0.0);
		}
		assert_eq!(state.display_radius(1), state.base_radius(1));
		assert!(state.display_radius(2) > state.base_radius(2));
	}

	#[test]
	fn drag_pins_and_release_unpins() {
		let mut state = make_state();
		state.begin_drag(1, 50.0, 60.0);
		state.tick(0.016, 0.0);
		assert_eq!((state.sim.nodes[1].x, state.sim.nodes[1].y), (50.0, 60.0));
		state.drag_to(70.0, 90.0);
		state.tick(0.016, 0.0);
		assert_eq!((state.sim.nodes[1].x, state.sim.nodes[1].y), (70.0, 90.0));
		state.end_drag();
		state.tick(0.016, 0.0);
		assert_ne!((state.sim.nodes[1].x, state.sim.nodes[1].y), (70.0, 90.0));
	}

	#[test]
	fn url_lookup_uses_node_data() {
		let state = make_state();
		// root sits at canvas center and links home
		assert_eq!(state.url_at_position(400.0, 300.0), Some("#home"));
	}
}
