use anchor_lang::prelude::*;

use crate::error::AirdropError;
use crate::event::{PoolInitialized, TokensClaimed};
use crate::ledger::{load, serialize, Ledger, TokenBalance};
use crate::pda;
use crate::state::{ClaimState, PoolState};
use crate::utils::vault_remaining_after_claim;

/**
 * Ledger-backed pool initialization
 *
 * Same rules as the on-chain initialize_pool instruction, expressed against
 * the ledger traits so any host (or test) can drive the protocol.
 *
 * @param ledger - Host account store and balance ledger
 * @param signers - Keys that signed the enclosing transaction
 * @param authority - Pool authority, must be a signer and own `source`
 * @param source - Token account funding the vault
 * @param mint - Token mint distributed by the pool
 * @param amount - Amount moved from `source` into the vault
 *
 * Every check runs before the first write. Hosts that apply the operation
 * atomically (see `InMemoryLedger::process`) also roll back if a write fails.
 */
pub fn initialize_pool<L: Ledger>(
    ledger: &mut L,
    signers: &[Pubkey],
    authority: &Pubkey,
    source: &Pubkey,
    mint: &Pubkey,
    amount: u64,
) -> Result<PoolInitialized> {
    // ===== VALIDATION PHASE =====

    require!(signers.contains(authority), AirdropError::Unauthorized);

    let (pool, bump) = pda::pool_address(mint);
    let (vault, vault_bump) = pda::vault_address(&pool, mint);

    require!(ledger.get(&pool).is_none(), AirdropError::PoolAlreadyInitialized);

    let funding = token_account(&*ledger, source)?;
    require_keys_eq!(funding.owner, *authority, AirdropError::Unauthorized);
    require_keys_eq!(funding.mint, *mint, AirdropError::MintMismatch);
    require!(funding.amount >= amount, AirdropError::InsufficientFunds);

    // ===== EFFECTS PHASE =====

    let state = PoolState {
        authority: *authority,
        mint: *mint,
        vault,
        bump,
        vault_bump,
        initial_amount: amount,
    };
    ledger.create(pool, serialize(&state)?)?;

    // Vault tokens can only be moved by the pool PDA
    ledger.create_token_account(vault, *mint, pool)?;
    ledger.transfer(source, &vault, amount)?;

    msg!("Pool {} initialized for mint {} with {} tokens", pool, mint, amount);

    Ok(PoolInitialized {
        pool,
        authority: *authority,
        mint: *mint,
        vault,
        amount,
    })
}

/**
 * Ledger-backed claim
 *
 * @param ledger - Host account store and balance ledger
 * @param signers - Keys that signed the enclosing transaction
 * @param claimant - Claimant, must be a signer and own `destination`
 * @param pool - Pool address supplied by the caller
 * @param vault - Vault address supplied by the caller
 * @param destination - Token account credited with the claim
 * @param mint - Token mint distributed by the pool
 * @param amount - Amount paid to the claimant
 *
 * Validation order: signer, pool address, pool record, vault address,
 * claim record, amount, vault balance, destination account. The amount is
 * caller-chosen and bounded only by the vault balance.
 */
#[allow(clippy::too_many_arguments)]
pub fn claim_tokens<L: Ledger>(
    ledger: &mut L,
    signers: &[Pubkey],
    claimant: &Pubkey,
    pool: &Pubkey,
    vault: &Pubkey,
    destination: &Pubkey,
    mint: &Pubkey,
    amount: u64,
) -> Result<TokensClaimed> {
    // ===== VALIDATION PHASE =====

    require!(signers.contains(claimant), AirdropError::Unauthorized);

    require_keys_eq!(*pool, pda::pool_address(mint).0, AirdropError::InvalidPoolAddress);
    let pool_state = load::<PoolState>(&*ledger, pool)?
        .ok_or_else(|| error!(AirdropError::PoolNotInitialized))?;
    require_keys_eq!(pool_state.mint, *mint, AirdropError::MintMismatch);
    pool_state.verify_vault(pool, vault)?;

    let (claim, claim_bump) = pda::claim_address(claimant, pool);
    let existing = load::<ClaimState>(&*ledger, &claim)?;
    let mut claim_state = existing.clone().unwrap_or_default();
    claim_state.ensure_unclaimed()?;

    require!(amount > 0, AirdropError::InvalidAmount);

    let vault_balance = token_account(&*ledger, vault)?.amount;
    let vault_remaining = vault_remaining_after_claim(vault_balance, amount)?;

    let receiver = token_account(&*ledger, destination)?;
    require_keys_eq!(receiver.owner, *claimant, AirdropError::Unauthorized);
    require_keys_eq!(receiver.mint, *mint, AirdropError::MintMismatch);

    // ===== EFFECTS PHASE =====

    claim_state.mark_claimed(*pool, *claimant, amount, claim_bump)?;
    let data = serialize(&claim_state)?;
    match existing {
        Some(_) => ledger.put(claim, data)?,
        None => ledger.create(claim, data)?,
    }

    ledger.transfer(vault, destination, amount)?;

    msg!(
        "Claimant {} claimed {} tokens, {} left in pool",
        claimant,
        amount,
        vault_remaining
    );

    Ok(TokensClaimed {
        pool: *pool,
        claimant: *claimant,
        destination: *destination,
        amount,
        vault_remaining,
    })
}

fn token_account<L: Ledger>(ledger: &L, address: &Pubkey) -> Result<TokenBalance> {
    ledger
        .token_account(address)
        .copied()
        .ok_or_else(|| error!(AirdropError::AccountNotFound))
}
