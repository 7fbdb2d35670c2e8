use anchor_lang::prelude::*;

/// Event emitted when a pool is created and funded
#[event]
#[derive(Debug, PartialEq, Eq)]
pub struct PoolInitialized {
    /// The pool account public key
    pub pool: Pubkey,
    /// Authority that created and funded the pool
    pub authority: Pubkey,
    /// Token mint distributed by the pool
    pub mint: Pubkey,
    /// Vault token account holding the pool balance
    pub vault: Pubkey,
    /// Amount moved from the funding account into the vault
    pub amount: u64,
}

/// Event emitted when a claimant is paid out
#[event]
#[derive(Debug, PartialEq, Eq)]
pub struct TokensClaimed {
    /// The pool account public key
    pub pool: Pubkey,
    /// Address of the claimant
    pub claimant: Pubkey,
    /// Token account credited with the claim
    pub destination: Pubkey,
    /// Amount paid out
    pub amount: u64,
    /// Vault balance left after this claim
    pub vault_remaining: u64,
}
