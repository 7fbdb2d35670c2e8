use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{transfer_token, vault_remaining_after_claim};
use anchor_lang::prelude::*;
use anchor_lang::{system_program, CheckOwner};
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/**
 * Account context for claiming tokens
 *
 * Pays a claimant out of the pool vault at most once. The claim record is
 * created on the first attempt and flipped to claimed in the same
 * transaction that moves the tokens, so a failed claim leaves no trace.
 *
 * Pool and vault are taken unchecked and only read after their addresses
 * match the derivations, so a wrong account always fails with
 * InvalidPoolAddress or InvalidVaultAddress.
 *
 * Access Control: Any signer, once per pool
 */
#[event_cpi]
#[derive(Accounts)]
pub struct ClaimTokens<'info> {
    /// The claimant receiving tokens
    /// - Must sign the transaction
    /// - Pays for the claim record on the first attempt
    #[account(mut)]
    pub claimant: Signer<'info>,

    /// The pool being claimed from
    /// CHECK: Address, owner and data are validated by PoolState::load_checked
    pub pool: UncheckedAccount<'info>,

    /// Vault token account paying the claim
    /// CHECK: Address is validated against the pool's stored vault bump before use
    #[account(mut)]
    pub vault: UncheckedAccount<'info>,

    /// Claim record for this (pool, claimant) pair
    /// - Derived from: ["airdrop_claim", pool, claimant]
    /// - Rolled back with the transaction if the pool turns out to be invalid
    #[account(
        init_if_needed,
        payer = claimant,
        space = ClaimState::LEN,
        seeds = [CLAIM_SEED.as_bytes(), pool.key().as_ref(), claimant.key().as_ref()],
        bump
    )]
    pub claim_state: Account<'info, ClaimState>,

    /// Claimant's token account to receive the tokens
    #[account(
        mut,
        token::mint = mint,
        token::authority = claimant,
        token::token_program = token_program,
    )]
    pub destination: InterfaceAccount<'info, TokenAccount>,

    /// The token mint distributed by the pool
    #[account(
        mint::token_program = token_program,
    )]
    pub mint: InterfaceAccount<'info, Mint>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Processes a single claim
 *
 * @param ctx - The account context containing all required accounts
 * @param amount - Amount of tokens to pay the claimant
 *
 * The amount is chosen by the caller and bounded only by the vault balance;
 * a single claimant may take everything that is left. Deployments that need
 * a flat amount fix it in the client that builds the transaction.
 *
 * Validation Process:
 * 1. Pool address matches ["airdrop_pool", mint] and holds a PoolState
 * 2. Vault address matches the pool's vault PDA (stored bump)
 * 3. The claimant has not claimed before
 * 4. The vault holds at least `amount`
 */
pub fn handle_claim_tokens(ctx: Context<ClaimTokens>, amount: u64) -> Result<()> {
    let mint_key = ctx.accounts.mint.key();
    let pool_key = ctx.accounts.pool.key();

    // ===== VALIDATION PHASE =====

    let pool_info = ctx.accounts.pool.to_account_info();
    let pool = PoolState::load_checked(&pool_info, &mint_key)?;

    let vault_info = ctx.accounts.vault.to_account_info();
    pool.verify_vault(&pool_key, vault_info.key)?;
    // Same checks as InterfaceAccount::try_from, which needs an 'info-lived borrow
    if vault_info.owner == &system_program::ID && vault_info.lamports() == 0 {
        return Err(ErrorCode::AccountNotInitialized.into());
    }
    <TokenAccount as CheckOwner>::check_owner(vault_info.owner)?;
    let vault = TokenAccount::try_deserialize(&mut &vault_info.try_borrow_data()?[..])?;

    ctx.accounts.claim_state.ensure_unclaimed()?;
    require!(amount > 0, AirdropError::InvalidAmount);

    let vault_remaining = vault_remaining_after_claim(vault.amount, amount)?;

    // ===== EFFECTS PHASE =====

    ctx.accounts.claim_state.mark_claimed(
        pool_key,
        ctx.accounts.claimant.key(),
        amount,
        ctx.bumps.claim_state,
    )?;

    // ===== INTERACTIONS PHASE =====

    let seeds = &[POOL_SEED.as_bytes(), mint_key.as_ref(), &[pool.bump]];
    let signer = &[&seeds[..]];

    transfer_token(
        pool_info,
        vault_info.clone(),
        ctx.accounts.destination.to_account_info(),
        ctx.accounts.mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.mint.decimals,
        Some(signer),
    )?;

    msg!(
        "Claimant {} claimed {} tokens, {} left in pool",
        ctx.accounts.claimant.key(),
        amount,
        vault_remaining
    );

    emit_cpi!(TokensClaimed {
        pool: pool_key,
        claimant: ctx.accounts.claimant.key(),
        destination: ctx.accounts.destination.key(),
        amount,
        vault_remaining,
    });

    Ok(())
}
