use serde::{Deserialize, Serialize};

/// A tradable token pair as supplied by the pair source
///
/// Only the two symbols take part in routing. The addresses and the
/// display label ride along for whoever builds the swaps afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenPair {
    pub token0_symbol: String,
    pub token0_address: String,
    pub token1_symbol: String,
    pub token1_address: String,
    pub pair: String,
}

/// Directed view of a pair, token0 -> token1
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge<'a> {
    pub token_in: &'a str,
    pub token_out: &'a str,
}

impl TokenPair {
    pub fn new(
        token0_symbol: impl Into<String>,
        token0_address: impl Into<String>,
        token1_symbol: impl Into<String>,
        token1_address: impl Into<String>,
    ) -> Self {
        let token0_symbol = token0_symbol.into();
        let token1_symbol = token1_symbol.into();
        let pair = format!("{}/{}", token0_symbol, token1_symbol);
        Self {
            token0_symbol,
            token0_address: token0_address.into(),
            token1_symbol,
            token1_address: token1_address.into(),
            pair,
        }
    }

    pub fn edge(&self) -> Edge<'_> {
        Edge {
            token_in: &self.token0_symbol,
            token_out: &self.token1_symbol,
        }
    }
}

// A route of token symbols, source first and destination last
pub type Path = Vec<String>;
