use anchor_lang::prelude::*;

#[error_code]
pub enum AirdropError {
    // Access control errors
    #[msg("Required signer is missing or does not own the account")]
    Unauthorized,

    // Pool lifecycle errors
    #[msg("Pool has already been initialized for this mint")]
    PoolAlreadyInitialized,
    #[msg("Pool has not been initialized")]
    PoolNotInitialized,

    // Address validation errors
    #[msg("Pool address does not match the derived pool PDA")]
    InvalidPoolAddress,
    #[msg("Vault address does not match the derived vault PDA")]
    InvalidVaultAddress,

    // Claim errors
    #[msg("Claimant has already claimed from this pool")]
    AlreadyClaimed,
    #[msg("Invalid amount")]
    InvalidAmount,

    // Balance errors
    #[msg("Funding account balance is too low")]
    InsufficientFunds,
    #[msg("Pool vault balance is too low for this claim")]
    InsufficientPoolBalance,

    // Ledger errors
    #[msg("Token account mint does not match the pool mint")]
    MintMismatch,
    #[msg("Account not found")]
    AccountNotFound,
    #[msg("Account already exists")]
    AccountAlreadyExists,

    // System level errors
    #[msg("Arithmetic underflow")]
    ArithmeticUnderflow,
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
