
// Tests breakdown
// --------------------
// test_utils.rs: pair fixtures and result comparison
// test_multi_hop.rs: routing table over the bridge tokens, one case per shape of graph
