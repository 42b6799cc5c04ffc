use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::scale;
use super::state::GraphState;
use super::types::{LinkKind, NodeKind};

/// Canvas colors per theme; the SVG original leaned on CSS variables, here
/// the palette is resolved from the `data-theme` attribute each frame.
pub struct Palette {
	pub root: &'static str,
	pub interest: &'static str,
	pub leaf: &'static str,
	pub link: &'static str,
	pub label: &'static str,
}

pub fn palette(dark: bool) -> Palette {
	if dark {
		Palette {
			root: "#7aa2f7",
			interest: "#9ece6a",
			leaf: "#565f89",
			link: "148, 163, 204",
			label: "#c0caf5",
		}
	} else {
		Palette {
			root: "#3b5bdb",
			interest: "#2f9e44",
			leaf: "#adb5bd",
			link: "73, 80, 87",
			label: "#343a40",
		}
	}
}

pub fn render(state: &GraphState, ctx: &CanvasRenderingContext2d, dark: bool) {
	let colors = palette(dark);
	ctx.clear_rect(0.0, 0.0, state.width, state.height);
	draw_links(state, ctx, &colors);
	draw_terminals(state, ctx, &colors);
	draw_nodes(state, ctx, &colors);
}

fn draw_links(state: &GraphState, ctx: &CanvasRenderingContext2d, colors: &Palette) {
	for link in &state.data.links {
		let s = &state.sim.nodes[link.source];
		let t = &state.sim.nodes[link.target];
		let (alpha, width) = match link.kind {
			LinkKind::Leaf => (0.4, 1.0),
			LinkKind::Core => (0.7, 1.5),
			LinkKind::Hub => (0.7, 1.2),
		};
		ctx.set_stroke_style_str(&format!("rgba({}, {})", colors.link, alpha));
		ctx.set_line_width(width);
		ctx.begin_path();
		ctx.move_to(s.x, s.y);
		ctx.line_to(t.x, t.y);
		ctx.stroke();
	}
}

/// Small outward dot just beyond each leaf, a visual full stop on the branch.
fn draw_terminals(state: &GraphState, ctx: &CanvasRenderingContext2d, colors: &Palette) {
	for link in &state.data.links {
		if link.kind != LinkKind::Leaf {
			continue;
		}
		let s = &state.sim.nodes[link.source];
		let t = &state.sim.nodes[link.target];
		let (dx, dy) = (t.x - s.x, t.y - s.y);
		let mag = (dx * dx + dy * dy).sqrt().max(1.0);
		let (ex, ey) = (t.x + dx / mag * 6.0, t.y + dy / mag * 6.0);
		ctx.set_fill_style_str(colors.leaf);
		ctx.begin_path();
		let _ = ctx.arc(ex, ey, 1.8, 0.0, 2.0 * PI);
		ctx.fill();
	}
}

fn draw_nodes(state: &GraphState, ctx: &CanvasRenderingContext2d, colors: &Palette) {
	for (idx, node) in state.data.nodes.iter().enumerate() {
		let sim_node = &state.sim.nodes[idx];
		let (x, y) = (sim_node.x, sim_node.y);
		let radius = state.display_radius(idx);

		if node.kind == NodeKind::Root {
			draw_glow(ctx, x, y, radius, colors.root);
		}

		let fill = match node.kind {
			NodeKind::Root => colors.root,
			NodeKind::Interest => colors.interest,
			NodeKind::Leaf => colors.leaf,
		};
		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(fill);
		ctx.fill();

		if let Some(label) = node.label {
			ctx.set_fill_style_str(colors.label);
			ctx.set_font(&format!("{}px sans-serif", scale::font_size(node.weight)));
			ctx.set_text_align("center");
			let _ = ctx.fill_text(label, x, label_y(state, idx, y));
		}
	}
}

/// Labels anchor to the base radius so they hold still while hover grows the
/// node under them.
fn label_y(state: &GraphState, idx: usize, y: f64) -> f64 {
	y - (state.base_radius(idx) + 8.0)
}

/// Soft radial glow behind the root node, standing in for the SVG blur the
/// original applied to it.
fn draw_glow(ctx: &CanvasRenderingContext2d, x: f64, y: f64, radius: f64, color: &str) {
	let glow_radius = radius * 2.2;
	let Ok(gradient) = ctx.create_radial_gradient(x, y, radius * 0.4, x, y, glow_radius) else {
		return;
	};
	let _ = gradient.add_color_stop(0.0, &format!("{color}55"));
	let _ = gradient.add_color_stop(1.0, &format!("{color}00"));
	ctx.begin_path();
	let _ = ctx.arc(x, y, glow_radius, 0.0, 2.0 * PI);
	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill();
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn label_offset_ignores_hover_growth() {
		let mut state = GraphState::new(800.0, 600.0, 3);
		let before = label_y(&state, 1, 100.0);

		state.set_hover(Some(1));
		for _ in 0..20 {
			state.tick(0.016, 0.0);
		}
		assert!(state.display_radius(1) > state.base_radius(1));
		assert_eq!(label_y(&state, 1, 100.0), before);
	}
}
