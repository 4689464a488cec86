// ============================================================================
// CERTORA SUNBEAM FORMAL VERIFICATION SPECIFICATIONS
// ============================================================================
//
// Rules over the liquidity ledger's pure accounting transitions: the
// proportional quote, the reserve updates and the invariant predicates in
// `invariants.rs`. Token movement is left to the token contract's own rules.
//
// USAGE:
// - Unit tests: cargo test -p rmm-liquidity-manager
// - Certora build: cargo build --features certora -p rmm-liquidity-manager
// - Verification: certoraSorobanProver rmm_liquidity_manager.conf
//
// ============================================================================

pub mod ledger_specs;
