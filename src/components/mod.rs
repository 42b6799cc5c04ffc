pub mod interest_graph;
