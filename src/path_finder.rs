use log::{debug, trace};

use crate::bridge::is_bridge_token;
use crate::graph::PairGraph;
use crate::types::{Path, TokenPair};

/// Anything that can route a swap from `src` to `dst` over a set of pairs
/// using exactly `hops` intermediate tokens.
///
/// Intermediate tokens are limited to the bridge set: DAI, USDC, USDT, WETH.
pub trait MultiHop {
    fn multi_hop_swap(&self, pairs: &[TokenPair], src: &str, dst: &str, hops: u32) -> Vec<Path>;
}

// Plain functions and closures with the right shape are routers too
impl<F> MultiHop for F
where
    F: Fn(&[TokenPair], &str, &str, u32) -> Vec<Path>,
{
    fn multi_hop_swap(&self, pairs: &[TokenPair], src: &str, dst: &str, hops: u32) -> Vec<Path> {
        self(pairs, src, dst, hops)
    }
}

/// Exhaustive depth first router
#[derive(Debug, Default, Clone, Copy)]
pub struct PathFinder;

impl MultiHop for PathFinder {
    fn multi_hop_swap(&self, pairs: &[TokenPair], src: &str, dst: &str, hops: u32) -> Vec<Path> {
        backtrace_multi_hop(pairs, src, dst, hops)
    }
}

/// Find every route from `src` to `dst` with exactly `hops` intermediate tokens
///
/// Routes come back in depth first order following the order of `pairs`.
/// Unknown tokens or an unreachable destination give an empty result.
pub fn backtrace_multi_hop(pairs: &[TokenPair], src: &str, dst: &str, hops: u32) -> Vec<Path> {
    let graph = PairGraph::build_graph(pairs);
    debug!(
        "Searching {} -> {} over {} tokens, {} edges, {} hops",
        src,
        dst,
        graph.token_count(),
        graph.edge_count(),
        hops
    );

    let mut all_paths = Vec::new();
    let mut current_path = vec![src.to_string()];
    construct_paths(&graph, src, dst, hops, &mut current_path, &mut all_paths);

    debug!("Found {} paths", all_paths.len());
    all_paths
}

// Walk out of `current_token`, spending one hop per level until none are left
fn construct_paths(
    graph: &PairGraph<'_>,
    current_token: &str,
    dst: &str,
    hops_left: u32,
    current_path: &mut Vec<String>,
    all_paths: &mut Vec<Path>,
) {
    for edge in graph.edges(current_token) {
        let next_token = edge.token_out;

        if hops_left == 0 {
            if next_token == dst {
                let mut path = current_path.clone();
                path.push(dst.to_string());
                trace!("Path found: {:?}", path);
                all_paths.push(path);
                // any other match from here is the same path
                return;
            }
            continue;
        }

        // the token right before the final hop may be anything
        if hops_left != 1 && !is_bridge_token(next_token) {
            continue;
        }

        current_path.push(next_token.to_string());
        construct_paths(graph, next_token, dst, hops_left - 1, current_path, all_paths);
        current_path.pop();
    }
}

#[cfg(test)]
mod test_path_finder {
    use super::*;

    fn pair(token0: &str, token1: &str) -> TokenPair {
        TokenPair::new(token0, "0x0", token1, "0x0")
    }

    #[test]
    pub fn test_direct_edge_with_zero_hops() {
        let pairs = vec![pair("FRAX", "MOCK"), pair("FRAX", "RAY")];

        assert_eq!(backtrace_multi_hop(&pairs, "FRAX", "RAY", 0), vec![vec!["FRAX", "RAY"]]);
        // edges are one way
        assert!(backtrace_multi_hop(&pairs, "RAY", "FRAX", 0).is_empty());
    }

    #[test]
    pub fn test_duplicate_final_edge_reported_once() {
        let pairs = vec![pair("FRAX", "WETH"), pair("FRAX", "WETH")];

        assert_eq!(backtrace_multi_hop(&pairs, "FRAX", "WETH", 0).len(), 1);
    }

    #[test]
    pub fn test_duplicate_intermediate_edges_are_kept() {
        let pairs = vec![pair("FRAX", "USDC"), pair("FRAX", "USDC"), pair("USDC", "WETH")];

        assert_eq!(
            backtrace_multi_hop(&pairs, "FRAX", "WETH", 1),
            vec![vec!["FRAX", "USDC", "WETH"], vec!["FRAX", "USDC", "WETH"]]
        );
    }

    #[test]
    pub fn test_cycles_bounded_by_hops() {
        let pairs = vec![pair("USDC", "USDT"), pair("USDT", "USDC")];

        assert_eq!(
            backtrace_multi_hop(&pairs, "USDC", "USDT", 2),
            vec![vec!["USDC", "USDT", "USDC", "USDT"]]
        );
    }

    #[test]
    pub fn test_closure_as_router() {
        let fixed = |_: &[TokenPair], src: &str, dst: &str, _: u32| -> Vec<Path> {
            vec![vec![src.to_string(), dst.to_string()]]
        };
        let routers: [&dyn MultiHop; 2] = [&PathFinder, &fixed];
        let pairs = vec![pair("FRAX", "USDC")];

        for router in routers {
            assert_eq!(router.multi_hop_swap(&pairs, "FRAX", "USDC", 0), vec![vec!["FRAX", "USDC"]]);
        }
    }
}
