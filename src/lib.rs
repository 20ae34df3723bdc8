pub mod bridge;
pub mod config;
pub mod graph;
pub mod path_finder;
pub mod types;
pub mod util;

#[cfg(test)]
mod tests;

pub use bridge::{BRIDGE_TOKENS, is_bridge_token};
pub use config::Config;
pub use graph::PairGraph;
pub use path_finder::{MultiHop, PathFinder, backtrace_multi_hop};
pub use types::{Edge, Path, TokenPair};
