mod component;
pub mod data;
pub mod layout;
mod rand;
mod render;
pub mod scale;
pub mod sim;
mod state;
mod types;

pub use component::InterestGraph;
