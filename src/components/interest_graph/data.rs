//! Static description of the interest graph and its construction rules.

use super::types::{GraphData, GraphLink, GraphNode, LinkKind, NodeKind};

pub struct Interest {
	pub label: &'static str,
	pub weight: u32,
	pub url: Option<&'static str>,
}

pub const ROOT_LABEL: &str = "Me";
pub const ROOT_WEIGHT: u32 = 4;
pub const ROOT_URL: &str = "#home";

/// Interests with weights (1 small .. 4 largest) and optional links.
pub const INTERESTS: &[Interest] = &[
	Interest { label: "Software Engineering", weight: 3, url: Some("#projects") },
	Interest { label: "AI", weight: 3, url: Some("#projects") },
	Interest { label: "Philosophy", weight: 2, url: Some("#essays") },
	Interest { label: "Electrical Engineering", weight: 2, url: None },
	Interest { label: "3D Printing", weight: 1, url: None },
	Interest { label: "Guitar", weight: 1, url: None },
	Interest { label: "Books", weight: 1, url: Some("#essays") },
	Interest { label: "Chess", weight: 1, url: None },
];

/// Hand-authored interest-to-interest connections.
pub const CORE_LINKS: &[(&str, &str)] = &[
	("Software Engineering", "AI"),
	("Software Engineering", "Electrical Engineering"),
	("Electrical Engineering", "3D Printing"),
	("Books", "Philosophy"),
];

/// Interests that stay open-ended: no decorative leaves.
pub const LEAF_EXCLUSIONS: &[&str] = &["Guitar", "Chess"];

/// Decorative leaf count for an interest of the given weight.
pub fn leaf_count(weight: u32) -> usize {
	match weight {
		3 => 3,
		2 => 2,
		_ => 1,
	}
}

/// Build the full node/link set: root, interests, hub and core edges, and
/// decorative leaves per the weight rule. Ids are sequential, root first.
pub fn build_graph() -> GraphData {
	let mut nodes = vec![GraphNode {
		id: 0,
		kind: NodeKind::Root,
		label: Some(ROOT_LABEL),
		weight: ROOT_WEIGHT,
		url: Some(ROOT_URL),
		parent: None,
	}];
	let mut links = Vec::new();

	for interest in INTERESTS {
		let id = nodes.len();
		nodes.push(GraphNode {
			id,
			kind: NodeKind::Interest,
			label: Some(interest.label),
			weight: interest.weight,
			url: interest.url,
			parent: None,
		});
		links.push(GraphLink { source: 0, target: id, kind: LinkKind::Hub });
	}

	let index_of = |label: &str| nodes.iter().find(|n| n.label == Some(label)).map(|n| n.id);
	for &(a, b) in CORE_LINKS {
		if let (Some(source), Some(target)) = (index_of(a), index_of(b)) {
			links.push(GraphLink { source, target, kind: LinkKind::Core });
		}
	}

	let parents: Vec<(usize, u32)> = nodes
		.iter()
		.filter(|n| {
			n.kind == NodeKind::Interest
				&& !LEAF_EXCLUSIONS.contains(&n.label.unwrap_or_default())
		})
		.map(|n| (n.id, n.weight))
		.collect();
	for (parent, weight) in parents {
		for _ in 0..leaf_count(weight) {
			let id = nodes.len();
			nodes.push(GraphNode {
				id,
				kind: NodeKind::Leaf,
				label: None,
				weight: 1,
				url: None,
				parent: Some(parent),
			});
			links.push(GraphLink { source: parent, target: id, kind: LinkKind::Leaf });
		}
	}

	GraphData { nodes, links }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn exactly_one_root_and_it_is_first() {
		let data = build_graph();
		let roots: Vec<_> = data.nodes.iter().filter(|n| n.kind == NodeKind::Root).collect();
		assert_eq!(roots.len(), 1);
		assert_eq!(roots[0].id, 0);
		assert_eq!(roots[0].label, Some("Me"));
	}

	#[test]
	fn every_interest_has_one_hub_edge() {
		let data = build_graph();
		for node in data.nodes.iter().filter(|n| n.kind == NodeKind::Interest) {
			let hubs = data
				.links
				.iter()
				.filter(|l| l.kind == LinkKind::Hub && l.target == node.id && l.source == 0)
				.count();
			assert_eq!(hubs, 1, "{:?}", node.label);
		}
	}

	#[test]
	fn leaf_counts_follow_weight_rule() {
		let data = build_graph();
		for node in data.nodes.iter().filter(|n| n.kind == NodeKind::Interest) {
			let label = node.label.unwrap();
			let leaves = data
				.nodes
				.iter()
				.filter(|n| n.kind == NodeKind::Leaf && n.parent == Some(node.id))
				.count();
			if LEAF_EXCLUSIONS.contains(&label) {
				assert_eq!(leaves, 0, "{label}");
			} else {
				assert_eq!(leaves, leaf_count(node.weight), "{label}");
			}
		}
	}

	#[test]
	fn leaf_edges_join_leaf_to_parent() {
		let data = build_graph();
		for link in data.links.iter().filter(|l| l.kind == LinkKind::Leaf) {
			let leaf = &data.nodes[link.target];
			assert_eq!(leaf.kind, NodeKind::Leaf);
			assert_eq!(leaf.parent, Some(link.source));
		}
	}

	#[test]
	fn core_links_are_present() {
		let data = build_graph();
		let cores = data.links.iter().filter(|l| l.kind == LinkKind::Core).count();
		assert_eq!(cores, CORE_LINKS.len());
	}

	#[test]
	fn ids_are_sequential() {
		let data = build_graph();
		for (i, node) in data.nodes.iter().enumerate() {
			assert_eq!(node.id, i);
		}
	}
}
