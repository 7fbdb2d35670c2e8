use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * Seed labels for every PDA the airdrop program derives. Each role has its
 * own label so pool, vault and claim addresses can never collide, even when
 * the remaining seed keys happen to coincide.
 */

/// ===== PDA SEED CONSTANTS =====

/// Seed for pool PDA derivation
/// - Used in: ["airdrop_pool", mint]
/// - One pool per mint
/// - The pool PDA is also the token authority of the vault
#[constant]
pub const POOL_SEED: &str = "airdrop_pool";

/// Seed for vault PDA derivation
/// - Used in: ["airdrop_vault", pool, mint]
/// - Token account holding the undistributed balance
#[constant]
pub const VAULT_SEED: &str = "airdrop_vault";

/// Seed for claim record PDA derivation
/// - Used in: ["airdrop_claim", pool, claimant]
/// - One record per (pool, claimant) pair, created on the first claim
#[constant]
pub const CLAIM_SEED: &str = "airdrop_claim";
