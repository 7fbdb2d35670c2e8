use anchor_lang::prelude::*;

use crate::error::AirdropError;

/// Vault balance left after paying `amount`. Never wraps.
pub fn vault_remaining_after_claim(vault_balance: u64, amount: u64) -> Result<u64> {
    require!(vault_balance >= amount, AirdropError::InsufficientPoolBalance);
    vault_balance
        .checked_sub(amount)
        .ok_or_else(|| error!(AirdropError::ArithmeticUnderflow))
}
