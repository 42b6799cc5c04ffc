#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
	Root,
	Interest,
	Leaf,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
	Hub,
	Core,
	Leaf,
}

#[derive(Clone, Debug)]
pub struct GraphNode {
	pub id: usize,
	pub kind: NodeKind,
	pub label: Option<&'static str>,
	pub weight: u32,
	pub url: Option<&'static str>,
	/// Parent interest id, set for leaf nodes only.
	pub parent: Option<usize>,
}

#[derive(Clone, Copy, Debug)]
pub struct GraphLink {
	pub source: usize,
	pub target: usize,
	pub kind: LinkKind,
}

#[derive(Clone, Debug, Default)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
	pub links: Vec<GraphLink>,
}
