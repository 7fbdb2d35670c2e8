use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::AirdropError;

/// Pool PDA for `mint`: ["airdrop_pool", mint]
pub fn pool_address(mint: &Pubkey) -> (Pubkey, u8) {
    pool_address_with_program_id(mint, &crate::ID)
}

/// Vault token account PDA for `pool`: ["airdrop_vault", pool, mint]
pub fn vault_address(pool: &Pubkey, mint: &Pubkey) -> (Pubkey, u8) {
    vault_address_with_program_id(pool, mint, &crate::ID)
}

/// Claim record PDA for `claimant` in `pool`: ["airdrop_claim", pool, claimant]
pub fn claim_address(claimant: &Pubkey, pool: &Pubkey) -> (Pubkey, u8) {
    claim_address_with_program_id(claimant, pool, &crate::ID)
}

/// Vault PDA rebuilt from the bump stored in the pool, without a bump search.
pub fn vault_address_with_bump(pool: &Pubkey, mint: &Pubkey, bump: u8) -> Result<Pubkey> {
    Pubkey::create_program_address(
        &[VAULT_SEED.as_bytes(), pool.as_ref(), mint.as_ref(), &[bump]],
        &crate::ID,
    )
    .map_err(|_| error!(AirdropError::InvalidVaultAddress))
}

pub fn pool_address_with_program_id(mint: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[POOL_SEED.as_bytes(), mint.as_ref()], program_id)
}

pub fn vault_address_with_program_id(
    pool: &Pubkey,
    mint: &Pubkey,
    program_id: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[VAULT_SEED.as_bytes(), pool.as_ref(), mint.as_ref()],
        program_id,
    )
}

pub fn claim_address_with_program_id(
    claimant: &Pubkey,
    pool: &Pubkey,
    program_id: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[CLAIM_SEED.as_bytes(), pool.as_ref(), claimant.as_ref()],
        program_id,
    )
}
