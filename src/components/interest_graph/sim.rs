//! Force simulation driving the interest graph: mutual repulsion, a
//! centering pull, per-kind link attraction, collision avoidance and a
//! sinusoidal drift that keeps the layout gently moving forever.
//!
//! Velocity/alpha semantics follow the d3-force model: every force injects
//! velocity scaled by the simulation's current energy (`alpha`), which decays
//! toward a target that the caller modulates frame by frame.

use super::rand::Lcg;
use super::scale;
use super::types::{GraphData, LinkKind, NodeKind};

pub const ALPHA_INITIAL: f64 = 0.65;
pub const ALPHA_DECAY: f64 = 0.018;
pub const ALPHA_BASELINE: f64 = 0.06;
/// Raised target while a drag is active.
pub const ALPHA_DRAG: f64 = 0.15;
const VELOCITY_DECAY: f64 = 0.4;
const CHARGE_DISTANCE_MAX: f64 = 380.0;

/// Breathing modulation of the alpha target: 5 second cycle, never settling.
pub fn alpha_target_at(now_ms: f64) -> f64 {
	0.055 + 0.02 * (now_ms / 5000.0).sin()
}

#[derive(Clone, Copy, Debug)]
pub struct DriftParams {
	pub strength: f64,
	pub speed: f64,
	pub noise: f64,
}

impl Default for DriftParams {
	fn default() -> Self {
		Self { strength: 0.28, speed: 0.0075, noise: 0.28 }
	}
}

/// Attenuation of the drift force for leaf nodes.
const LEAF_DRIFT: f64 = 0.55;

#[derive(Clone, Debug)]
pub struct SimNode {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	/// Pinned position while dragging.
	pub fx: Option<f64>,
	pub fy: Option<f64>,
	pub kind: NodeKind,
	charge: f64,
	collide_radius: f64,
	phase: f64,
}

#[derive(Clone, Copy, Debug)]
struct SimLink {
	source: usize,
	target: usize,
	distance: f64,
	strength: f64,
}

fn charge_for(kind: NodeKind) -> f64 {
	match kind {
		NodeKind::Leaf => -12.0,
		NodeKind::Root => -85.0,
		NodeKind::Interest => -55.0,
	}
}

fn collide_radius_for(kind: NodeKind, weight: u32) -> f64 {
	match kind {
		NodeKind::Root => scale::radius(weight) + 24.0,
		NodeKind::Interest => scale::radius(weight) + 16.0,
		NodeKind::Leaf => 9.0,
	}
}

fn link_params(kind: LinkKind) -> (f64, f64) {
	match kind {
		LinkKind::Hub => (170.0, 0.4),
		LinkKind::Leaf => (50.0, 0.9),
		LinkKind::Core => (120.0, 0.55),
	}
}

pub struct Simulation {
	pub nodes: Vec<SimNode>,
	links: Vec<SimLink>,
	degree: Vec<f64>,
	center: (f64, f64),
	alpha: f64,
	alpha_target: f64,
	drift: DriftParams,
	drift_t: f64,
	rng: Lcg,
}

impl Simulation {
	pub fn new(data: &GraphData, positions: &[(f64, f64)], width: f64, height: f64, seed: u64) -> Self {
		let mut rng = Lcg::new(seed);
		let drift_t = rng.next_f64() * 50.0;

		let nodes: Vec<SimNode> = data
			.nodes
			.iter()
			.map(|n| {
				let (x, y) = positions[n.id];
				SimNode {
					x,
					y,
					vx: 0.0,
					vy: 0.0,
					fx: None,
					fy: None,
					kind: n.kind,
					charge: charge_for(n.kind),
					collide_radius: collide_radius_for(n.kind, n.weight),
					phase: n.id as f64 * 0.91 + rng.next_f64() * 4.0,
				}
			})
			.collect();

		let mut degree = vec![0.0; nodes.len()];
		let links: Vec<SimLink> = data
			.links
			.iter()
			.map(|l| {
				degree[l.source] += 1.0;
				degree[l.target] += 1.0;
				let (distance, strength) = link_params(l.kind);
				SimLink { source: l.source, target: l.target, distance, strength }
			})
			.collect();

		Self {
			nodes,
			links,
			degree,
			center: (width / 2.0, height / 2.0),
			alpha: ALPHA_INITIAL,
			alpha_target: ALPHA_BASELINE,
			drift: DriftParams::default(),
			drift_t,
			rng,
		}
	}

	pub fn alpha(&self) -> f64 {
		self.alpha
	}

	pub fn set_alpha_target(&mut self, target: f64) {
		self.alpha_target = target;
	}

	pub fn pin(&mut self, idx: usize, x: f64, y: f64) {
		if let Some(node) = self.nodes.get_mut(idx) {
			node.fx = Some(x);
			node.fy = Some(y);
		}
	}

	pub fn unpin(&mut self, idx: usize) {
		if let Some(node) = self.nodes.get_mut(idx) {
			node.fx = None;
			node.fy = None;
		}
	}

	/// Advance the simulation one step. The root is re-pinned to the canvas
	/// center at the end of every tick, whatever drag or drift did to it.
	pub fn tick(&mut self) {
		self.alpha += (self.alpha_target - self.alpha) * ALPHA_DECAY;

		self.apply_links();
		self.apply_charge();
		self.apply_center();
		self.apply_collide();
		self.apply_collide();
		self.apply_drift();

		for node in &mut self.nodes {
			match (node.fx, node.fy) {
				(Some(fx), Some(fy)) => {
					node.x = fx;
					node.y = fy;
					node.vx = 0.0;
					node.vy = 0.0;
				}
				_ => {
					node.vx *= 1.0 - VELOCITY_DECAY;
					node.vy *= 1.0 - VELOCITY_DECAY;
					node.x += node.vx;
					node.y += node.vy;
				}
			}
		}

		if let Some(root) = self.nodes.iter_mut().find(|n| n.kind == NodeKind::Root) {
			root.x = self.center.0;
			root.y = self.center.1;
			root.vx = 0.0;
			root.vy = 0.0;
		}
	}

	fn apply_links(&mut self) {
		for link in &self.links {
			let (s, t) = (link.source, link.target);
			let dx = (self.nodes[t].x + self.nodes[t].vx) - (self.nodes[s].x + self.nodes[s].vx);
			let dy = (self.nodes[t].y + self.nodes[t].vy) - (self.nodes[s].y + self.nodes[s].vy);
			let len = (dx * dx + dy * dy).sqrt().max(1e-6);
			let k = (len - link.distance) / len * self.alpha * link.strength;
			let bias = self.degree[s] / (self.degree[s] + self.degree[t]);
			self.nodes[t].vx -= dx * k * bias;
			self.nodes[t].vy -= dy * k * bias;
			self.nodes[s].vx += dx * k * (1.0 - bias);
			self.nodes[s].vy += dy * k * (1.0 - bias);
		}
	}

	fn apply_charge(&mut self) {
		let max2 = CHARGE_DISTANCE_MAX * CHARGE_DISTANCE_MAX;
		for i in 0..self.nodes.len() {
			for j in (i + 1)..self.nodes.len() {
				let dx = self.nodes[j].x - self.nodes[i].x;
				let dy = self.nodes[j].y - self.nodes[i].y;
				let d2 = (dx * dx + dy * dy).max(1.0);
				if d2 > max2 {
					continue;
				}
				let wi = self.nodes[j].charge * self.alpha / d2;
				self.nodes[i].vx += dx * wi;
				self.nodes[i].vy += dy * wi;
				let wj = self.nodes[i].charge * self.alpha / d2;
				self.nodes[j].vx -= dx * wj;
				self.nodes[j].vy -= dy * wj;
			}
		}
	}

	fn apply_center(&mut self) {
		let n = self.nodes.len() as f64;
		let sx = self.nodes.iter().map(|n| n.x).sum::<f64>() / n - self.center.0;
		let sy = self.nodes.iter().map(|n| n.y).sum::<f64>() / n - self.center.1;
		for node in &mut self.nodes {
			node.x -= sx;
			node.y -= sy;
		}
	}

	fn apply_collide(&mut self) {
		for i in 0..self.nodes.len() {
			for j in (i + 1)..self.nodes.len() {
				let r = self.nodes[i].collide_radius + self.nodes[j].collide_radius;
				let dx = (self.nodes[i].x + self.nodes[i].vx)
					- (self.nodes[j].x + self.nodes[j].vx);
				let dy = (self.nodes[i].y + self.nodes[i].vy)
					- (self.nodes[j].y + self.nodes[j].vy);
				let d = (dx * dx + dy * dy).sqrt().max(1e-6);
				if d >= r {
					continue;
				}
				let push = (r - d) / d * 0.5;
				self.nodes[i].vx += dx * push;
				self.nodes[i].vy += dy * push;
				self.nodes[j].vx -= dx * push;
				self.nodes[j].vy -= dy * push;
			}
		}
	}

	fn apply_drift(&mut self) {
		self.drift_t += self.drift.speed;
		let drift_scale = self.alpha * 0.35;
		let jitter_half = self.drift.noise * 0.0025;
		for node in &mut self.nodes {
			if node.kind == NodeKind::Root {
				continue;
			}
			let local = if node.kind == NodeKind::Leaf {
				self.drift.strength * LEAF_DRIFT
			} else {
				self.drift.strength
			};
			node.vx += local * 0.04 * (self.drift_t + node.phase).sin() * drift_scale;
			node.vy += local * 0.04 * (self.drift_t * 0.85 + node.phase * 0.7).cos() * drift_scale;
			node.vx += self.rng.jitter(local * jitter_half);
			node.vy += self.rng.jitter(local * jitter_half);
		}
	}
}
