//! Deterministic initial placement, run before the first simulation tick so
//! the graph never flashes from a random overlap into shape.

use std::f64::consts::PI;

use super::rand::Lcg;
use super::types::{GraphData, NodeKind};

/// Hand-authored angle (degrees, 0 = +x, counter-clockwise) per interest.
const ORDERED_ANGLES: &[(&str, f64)] = &[
	("Software Engineering", 210.0),
	("AI", 240.0),
	("Electrical Engineering", 150.0),
	("3D Printing", 120.0),
	("Books", 15.0),
	("Philosophy", 330.0),
	("Guitar", 270.0),
	("Chess", 300.0),
];

fn ordered_angle(label: &str) -> Option<f64> {
	ORDERED_ANGLES
		.iter()
		.find(|(l, _)| *l == label)
		.map(|&(_, a)| a)
}

/// Ring radius for a canvas of the given size.
pub fn ring_radius(width: f64, height: f64) -> f64 {
	width.min(height) / 2.0 - 45.0
}

/// Compute an initial (x, y) per node, indexed by node id. Root at center,
/// interests on a ring at their authored angle, leaves just outward of their
/// parent along the parent's center-relative direction.
pub fn initial_layout(data: &GraphData, width: f64, height: f64, rng: &mut Lcg) -> Vec<(f64, f64)> {
	let (cx, cy) = (width / 2.0, height / 2.0);
	let base_radius = ring_radius(width, height);
	let mut positions = vec![(cx, cy); data.nodes.len()];

	for node in &data.nodes {
		if node.kind != NodeKind::Interest {
			continue;
		}
		let deg = node
			.label
			.and_then(ordered_angle)
			.unwrap_or_else(|| rng.next_f64() * 360.0);
		let a = deg * PI / 180.0;
		positions[node.id] = (
			cx + base_radius * a.cos() + rng.jitter(4.0),
			cy + base_radius * a.sin() + rng.jitter(4.0),
		);
	}

	// Parents carry lower ids than their leaves, so parent positions are final.
	for node in &data.nodes {
		let (NodeKind::Leaf, Some(parent)) = (node.kind, node.parent) else {
			continue;
		};
		let (px, py) = positions[parent];
		let (dx, dy) = (px - cx, py - cy);
		let mag = (dx * dx + dy * dy).sqrt().max(1.0);
		let outward = 16.0 + rng.next_f64() * 22.0;
		positions[node.id] = (
			px + dx / mag * outward + rng.jitter(3.0),
			py + dy / mag * outward + rng.jitter(3.0),
		);
	}

	positions
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::interest_graph::data::build_graph;

	const W: f64 = 800.0;
	const H: f64 = 600.0;

	#[test]
	fn root_starts_at_center() {
		let data = build_graph();
		let pos = initial_layout(&data, W, H, &mut Lcg::new(1));
		assert_eq!(pos[0], (400.0, 300.0));
	}

	#[test]
	fn interests_sit_on_the_ring() {
		let data = build_graph();
		let pos = initial_layout(&data, W, H, &mut Lcg::new(2));
		let expected = ring_radius(W, H);
		for node in data.nodes.iter().filter(|n| n.kind == NodeKind::Interest) {
			let (x, y) = pos[node.id];
			let r = ((x - 400.0).powi(2) + (y - 300.0).powi(2)).sqrt();
			// jitter is at most 4px per axis
			assert!((r - expected).abs() < 6.0, "{:?} at r={r}", node.label);
		}
	}

	#[test]
	fn known_labels_use_authored_angles() {
		let data = build_graph();
		let pos = initial_layout(&data, W, H, &mut Lcg::new(3));
		let se = data
			.nodes
			.iter()
			.find(|n| n.label == Some("Software Engineering"))
			.unwrap();
		let (x, y) = pos[se.id];
		let angle = (y - 300.0).atan2(x - 400.0).to_degrees().rem_euclid(360.0);
		assert!((angle - 210.0).abs() < 2.0, "angle {angle}");
	}

	#[test]
	fn leaves_sit_outward_of_their_parent() {
		let data = build_graph();
		let pos = initial_layout(&data, W, H, &mut Lcg::new(4));
		for node in data.nodes.iter().filter(|n| n.kind == NodeKind::Leaf) {
			let (px, py) = pos[node.parent.unwrap()];
			let (x, y) = pos[node.id];
			let d = ((x - px).powi(2) + (y - py).powi(2)).sqrt();
			// [16, 38] offset plus at most ~3px jitter per axis
			assert!((11.0..=43.0).contains(&d), "leaf {} at d={d}", node.id);
			let parent_r = ((px - 400.0).powi(2) + (py - 300.0).powi(2)).sqrt();
			let leaf_r = ((x - 400.0).powi(2) + (y - 300.0).powi(2)).sqrt();
			assert!(leaf_r > parent_r - 6.0, "leaf {} drifted inward", node.id);
		}
	}
}
