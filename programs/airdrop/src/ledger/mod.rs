//! Ledger abstractions the processor runs against.
//!
//! On chain these roles are played by the runtime account database and the
//! token program. Off chain they are implemented by [`InMemoryLedger`], which
//! applies each operation as one serializable, all-or-nothing transaction.

use anchor_lang::prelude::*;

use crate::error::AirdropError;

#[cfg(not(target_os = "solana"))]
pub mod memory;

#[cfg(not(target_os = "solana"))]
pub use memory::*;

/// Balance record of a single token account.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TokenBalance {
    pub mint: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
}

/// Program-owned account data keyed by address.
pub trait AccountStore {
    fn get(&self, address: &Pubkey) -> Option<&[u8]>;

    /// Insert-if-absent. Fails with `AccountAlreadyExists` when the address
    /// already holds data.
    fn create(&mut self, address: Pubkey, data: Vec<u8>) -> Result<()>;

    fn put(&mut self, address: Pubkey, data: Vec<u8>) -> Result<()>;
}

/// Token accounts with non-negative balances.
pub trait BalanceLedger {
    fn token_account(&self, address: &Pubkey) -> Option<&TokenBalance>;

    fn create_token_account(&mut self, address: Pubkey, mint: Pubkey, owner: Pubkey) -> Result<()>;

    fn debit(&mut self, address: &Pubkey, amount: u64) -> Result<()>;

    fn credit(&mut self, address: &Pubkey, amount: u64) -> Result<()>;

    /// Moves `amount` between two token accounts of the same mint.
    fn transfer(&mut self, from: &Pubkey, to: &Pubkey, amount: u64) -> Result<()> {
        let from_mint = self
            .token_account(from)
            .ok_or_else(|| error!(AirdropError::AccountNotFound))?
            .mint;
        let to_mint = self
            .token_account(to)
            .ok_or_else(|| error!(AirdropError::AccountNotFound))?
            .mint;
        require_keys_eq!(from_mint, to_mint, AirdropError::MintMismatch);

        self.debit(from, amount)?;
        self.credit(to, amount)
    }
}

/// Everything an operation needs from its host.
pub trait Ledger: AccountStore + BalanceLedger {}

impl<T: AccountStore + BalanceLedger> Ledger for T {}

/// Deserializes the account at `address`, checking its discriminator.
pub fn load<T: AccountDeserialize>(store: &impl AccountStore, address: &Pubkey) -> Result<Option<T>> {
    match store.get(address) {
        Some(mut data) => Ok(Some(T::try_deserialize(&mut data)?)),
        None => Ok(None),
    }
}

pub fn serialize<T: AccountSerialize>(account: &T) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    account.try_serialize(&mut data)?;
    Ok(data)
}
