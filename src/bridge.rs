use lazy_static::lazy_static;
use rustc_hash::FxHashSet;

// Tokens allowed to sit in the middle of a route
pub const BRIDGE_TOKENS: [&str; 4] = ["DAI", "USDC", "USDT", "WETH"];

lazy_static! {
    static ref BRIDGE_SET: FxHashSet<&'static str> = BRIDGE_TOKENS.into_iter().collect();
}

/// Check if a symbol may be used as an intermediate hop
pub fn is_bridge_token(symbol: &str) -> bool {
    BRIDGE_SET.contains(symbol)
}
