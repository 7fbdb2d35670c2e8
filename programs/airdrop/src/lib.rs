use anchor_lang::prelude::*;

declare_id!("5m94oNVhSyFesxHorRsDCAv7VYYxAcftmDc1sAQa8JPh");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod ledger;
pub mod pda;
pub mod processor;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;

/**
 * Airdrop Program
 *
 * A Solana program for a single-pool, flat-amount token airdrop. An authority
 * funds a vault for a mint, and each claimant can withdraw from it once.
 *
 * Key Features:
 * - Exactly-once claims enforced by a per-claimant claim record PDA
 * - Vault owned by the pool PDA, so only this program can move pool funds
 * - Deterministic addresses that clients can derive off-chain (see `pda`)
 * - Cross-program call event emission for composability
 * - Support for both SPL Token and Token 2022
 *
 * Architecture:
 * - Pool PDA: ["airdrop_pool", mint], records authority and mint
 * - Vault PDA: ["airdrop_vault", pool, mint], token account holding the pool balance
 * - Claim PDAs: ["airdrop_claim", pool, claimant], one claimed flag per claimant
 *
 * Workflow:
 * 1. Authority initializes the pool and deposits tokens
 * 2. Claimants call claim_tokens, each succeeding at most once
 */
#[program]
pub mod airdrop {
    use super::*;

    /**
     * Creates the pool for a mint and funds its vault
     *
     * @param ctx - Account context containing pool, vault, source and authority accounts
     * @param amount - Amount of tokens deposited into the vault
     *
     * Access Control: Authority signs and funds
     * Note: Fails with PoolAlreadyInitialized if the mint already has a pool
     */
    pub fn initialize_pool(ctx: Context<InitializePool>, amount: u64) -> Result<()> {
        handle_initialize_pool(ctx, amount)
    }

    /**
     * Pays `amount` from the pool vault to the claimant
     *
     * @param ctx - Account context containing pool, vault, claim record and token accounts
     * @param amount - Amount of tokens to claim
     *
     * Access Control: Claimant signs, once per pool
     */
    pub fn claim_tokens(ctx: Context<ClaimTokens>, amount: u64) -> Result<()> {
        handle_claim_tokens(ctx, amount)
    }
}
