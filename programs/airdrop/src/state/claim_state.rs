use anchor_lang::prelude::*;

use crate::error::AirdropError;

/**
 * Per-claimant claim record
 *
 * Prevents a claimant from being paid twice by the same pool. An absent
 * record and a record with `claimed == false` mean the same thing.
 *
 * Derivation: ["airdrop_claim", pool, claimant]
 *
 * Lifecycle:
 * 1. Created on the first claim attempt (init_if_needed)
 * 2. Flipped to claimed exactly once
 * 3. Never closed, so the flag can never be reset
 */
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct ClaimState {
    /// Pool this record belongs to
    pub pool: Pubkey,

    /// Claimant this record belongs to
    pub claimant: Pubkey,

    /// Whether the claimant has been paid
    pub claimed: bool,

    /// Amount paid out on the claim
    pub amount: u64,

    /// Bump seed of the claim PDA
    pub bump: u8,
}

impl ClaimState {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<ClaimState>();

    pub fn ensure_unclaimed(&self) -> Result<()> {
        require!(!self.claimed, AirdropError::AlreadyClaimed);
        Ok(())
    }

    /// The only transition a claim record ever makes: unclaimed -> claimed.
    pub fn mark_claimed(
        &mut self,
        pool: Pubkey,
        claimant: Pubkey,
        amount: u64,
        bump: u8,
    ) -> Result<()> {
        self.ensure_unclaimed()?;

        self.pool = pool;
        self.claimant = claimant;
        self.claimed = true;
        self.amount = amount;
        self.bump = bump;
        Ok(())
    }
}
