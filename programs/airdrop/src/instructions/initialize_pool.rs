use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_token;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/**
 * Account context for initializing an airdrop pool
 *
 * This instruction sets up the single pool for a mint:
 * - Creates the pool PDA recording the authority and mint
 * - Creates the vault token account with the pool PDA as token authority
 * - Transfers the funding amount from the authority into the vault
 *
 * Both PDAs use init_if_needed so that a second call reaches the handler
 * and fails with PoolAlreadyInitialized instead of a system program error.
 *
 * Access Control: Any signer may create the pool for a mint it can fund
 */
#[event_cpi]
#[derive(Accounts)]
pub struct InitializePool<'info> {
    /// Authority creating and funding the pool
    /// - Pays for the pool and vault accounts
    #[account(mut)]
    pub authority: Signer<'info>,

    /// The pool account (PDA)
    /// - Derived from: ["airdrop_pool", mint]
    #[account(
        init_if_needed,
        payer = authority,
        space = PoolState::LEN,
        seeds = [POOL_SEED.as_bytes(), mint.key().as_ref()],
        bump
    )]
    pub pool: Account<'info, PoolState>,

    /// Vault token account (PDA) holding the pool balance
    /// - Controlled by the pool PDA as token authority
    /// - Derived from: ["airdrop_vault", pool, mint]
    #[account(
        init_if_needed,
        payer = authority,
        token::mint = mint,
        token::authority = pool,
        token::token_program = token_program,
        seeds = [VAULT_SEED.as_bytes(), pool.key().as_ref(), mint.key().as_ref()],
        bump
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    /// Authority's token account funding the vault
    #[account(
        mut,
        token::mint = mint,
        token::authority = authority,
        token::token_program = token_program,
    )]
    pub source: InterfaceAccount<'info, TokenAccount>,

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
 * Initializes the pool and funds its vault
 *
 * @param ctx - The account context containing all required accounts
 * @param amount - Amount of tokens to move from source into the vault
 */
pub fn handle_initialize_pool(ctx: Context<InitializePool>, amount: u64) -> Result<()> {
    // ===== VALIDATION PHASE =====

    require!(
        !ctx.accounts.pool.is_initialized(),
        AirdropError::PoolAlreadyInitialized
    );
    require!(
        ctx.accounts.source.amount >= amount,
        AirdropError::InsufficientFunds
    );

    // ===== EFFECTS PHASE =====

    let pool = &mut ctx.accounts.pool;
    pool.authority = ctx.accounts.authority.key();
    pool.mint = ctx.accounts.mint.key();
    pool.vault = ctx.accounts.vault.key();
    pool.bump = ctx.bumps.pool;
    pool.vault_bump = ctx.bumps.vault;
    pool.initial_amount = amount;

    // ===== INTERACTIONS PHASE =====

    if amount > 0 {
        transfer_token(
            ctx.accounts.authority.to_account_info(),
            ctx.accounts.source.to_account_info(),
            ctx.accounts.vault.to_account_info(),
            ctx.accounts.mint.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            amount,
            ctx.accounts.mint.decimals,
            None, // Authority signs the transaction directly
        )?;
    }

    msg!(
        "Pool {} initialized for mint {} with {} tokens",
        ctx.accounts.pool.key(),
        ctx.accounts.mint.key(),
        amount
    );

    emit_cpi!(PoolInitialized {
        pool: ctx.accounts.pool.key(),
        authority: ctx.accounts.authority.key(),
        mint: ctx.accounts.mint.key(),
        vault: ctx.accounts.vault.key(),
        amount,
    });

    Ok(())
}
