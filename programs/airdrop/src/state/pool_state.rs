use anchor_lang::prelude::*;

use crate::error::AirdropError;
use crate::pda;

/**
 * Distribution pool account
 *
 * One pool per mint. The pool PDA owns the vault token account, so only
 * this program (signing with the pool seeds) can move vault funds.
 *
 * Derivation: ["airdrop_pool", mint]
 *
 * Lifecycle:
 * 1. Created and funded by initialize_pool
 * 2. Read by every claim_tokens call
 * 3. Never closed; fields never change after creation
 */
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct PoolState {
    /// Authority that initialized and funded the pool
    /// - Recorded only, claims do not check it
    pub authority: Pubkey,

    /// Token mint distributed by this pool
    pub mint: Pubkey,

    /// Vault token account address
    /// - Derived from: ["airdrop_vault", pool, mint]
    pub vault: Pubkey,

    /// Bump seed of the pool PDA
    /// - Needed to sign vault transfers
    pub bump: u8,

    /// Bump seed of the vault PDA
    pub vault_bump: u8,

    /// Amount deposited into the vault at initialization
    pub initial_amount: u64,
}

impl PoolState {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<PoolState>();

    /// A freshly allocated pool account is all zeroes.
    pub fn is_initialized(&self) -> bool {
        self.authority != Pubkey::default()
    }

    /// Reads the pool for `mint` from an unchecked account, checking the
    /// address before the owner or the data are looked at.
    pub fn load_checked(info: &AccountInfo, mint: &Pubkey) -> Result<PoolState> {
        require_keys_eq!(
            *info.key,
            pda::pool_address(mint).0,
            AirdropError::InvalidPoolAddress
        );
        require!(
            info.owner == &crate::ID && !info.data_is_empty(),
            AirdropError::PoolNotInitialized
        );

        let data = info.try_borrow_data()?;
        let pool = PoolState::try_deserialize(&mut data.as_ref())?;
        require_keys_eq!(pool.mint, *mint, AirdropError::MintMismatch);
        Ok(pool)
    }

    /// Checks `vault` against the vault PDA of the pool at `pool`.
    pub fn verify_vault(&self, pool: &Pubkey, vault: &Pubkey) -> Result<()> {
        let expected = pda::vault_address_with_bump(pool, &self.mint, self.vault_bump)?;
        require_keys_eq!(*vault, expected, AirdropError::InvalidVaultAddress);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;
    use crate::ledger::serialize;

    fn funded_state(mint: Pubkey) -> (Pubkey, PoolState) {
        let (pool, bump) = pda::pool_address(&mint);
        let (vault, vault_bump) = pda::vault_address(&pool, &mint);
        let state = PoolState {
            authority: Pubkey::new_unique(),
            mint,
            vault,
            bump,
            vault_bump,
            initial_amount: 1_000,
        };
        (pool, state)
    }

    #[test]
    fn test_load_checked_reads_pool() {
        let mint = Pubkey::new_unique();
        let (pool, state) = funded_state(mint);
        let mut data = serialize(&state).unwrap();
        let mut lamports: u64 = 1_000_000;
        let info = AccountInfo::new(&pool, false, false, &mut lamports, &mut data, &crate::ID, false, 0);

        assert_eq!(PoolState::load_checked(&info, &mint).unwrap(), state);
    }

    #[test]
    fn test_load_checked_rejects_foreign_account_as_invalid_address() {
        // Not program owned and not a PoolState: still reported by address
        let mint = Pubkey::new_unique();
        let bogus = Pubkey::new_unique();
        let system = Pubkey::default();
        let mut data: Vec<u8> = vec![];
        let mut lamports: u64 = 1_000_000;
        let info = AccountInfo::new(&bogus, false, false, &mut lamports, &mut data, &system, false, 0);

        let err = PoolState::load_checked(&info, &mint).unwrap_err();
        assert_eq!(err, Error::from(AirdropError::InvalidPoolAddress));
    }

    #[test]
    fn test_load_checked_uninitialized_pool() {
        let mint = Pubkey::new_unique();
        let (pool, _) = pda::pool_address(&mint);
        let system = Pubkey::default();
        let mut data: Vec<u8> = vec![];
        let mut lamports: u64 = 0;
        let info = AccountInfo::new(&pool, false, false, &mut lamports, &mut data, &system, false, 0);

        let err = PoolState::load_checked(&info, &mint).unwrap_err();
        assert_eq!(err, Error::from(AirdropError::PoolNotInitialized));
    }

    #[test]
    fn test_verify_vault_uses_stored_bump() {
        let mint = Pubkey::new_unique();
        let (pool, state) = funded_state(mint);

        assert!(state.verify_vault(&pool, &state.vault).is_ok());

        let err = state.verify_vault(&pool, &Pubkey::new_unique()).unwrap_err();
        assert_eq!(err, Error::from(AirdropError::InvalidVaultAddress));
    }
}
