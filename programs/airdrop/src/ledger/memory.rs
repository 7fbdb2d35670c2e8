use std::collections::HashMap;

use anchor_lang::prelude::*;
use parking_lot::Mutex;

use super::{AccountStore, BalanceLedger, TokenBalance};
use crate::error::AirdropError;

/// Account and token state of an [`InMemoryLedger`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LedgerState {
    accounts: HashMap<Pubkey, Vec<u8>>,
    token_accounts: HashMap<Pubkey, TokenBalance>,
}

impl AccountStore for LedgerState {
    fn get(&self, address: &Pubkey) -> Option<&[u8]> {
        self.accounts.get(address).map(Vec::as_slice)
    }

    fn create(&mut self, address: Pubkey, data: Vec<u8>) -> Result<()> {
        require!(
            !self.accounts.contains_key(&address) && !self.token_accounts.contains_key(&address),
            AirdropError::AccountAlreadyExists
        );
        self.accounts.insert(address, data);
        Ok(())
    }

    fn put(&mut self, address: Pubkey, data: Vec<u8>) -> Result<()> {
        let slot = self
            .accounts
            .get_mut(&address)
            .ok_or_else(|| error!(AirdropError::AccountNotFound))?;
        *slot = data;
        Ok(())
    }
}

impl BalanceLedger for LedgerState {
    fn token_account(&self, address: &Pubkey) -> Option<&TokenBalance> {
        self.token_accounts.get(address)
    }

    fn create_token_account(&mut self, address: Pubkey, mint: Pubkey, owner: Pubkey) -> Result<()> {
        require!(
            !self.accounts.contains_key(&address) && !self.token_accounts.contains_key(&address),
            AirdropError::AccountAlreadyExists
        );
        self.token_accounts.insert(
            address,
            TokenBalance {
                mint,
                owner,
                amount: 0,
            },
        );
        Ok(())
    }

    fn debit(&mut self, address: &Pubkey, amount: u64) -> Result<()> {
        let account = self
            .token_accounts
            .get_mut(address)
            .ok_or_else(|| error!(AirdropError::AccountNotFound))?;
        account.amount = account
            .amount
            .checked_sub(amount)
            .ok_or_else(|| error!(AirdropError::InsufficientFunds))?;
        Ok(())
    }

    fn credit(&mut self, address: &Pubkey, amount: u64) -> Result<()> {
        let account = self
            .token_accounts
            .get_mut(address)
            .ok_or_else(|| error!(AirdropError::AccountNotFound))?;
        account.amount = account
            .amount
            .checked_add(amount)
            .ok_or_else(|| error!(AirdropError::ArithmeticOverflow))?;
        Ok(())
    }
}

/**
 * In-memory host ledger
 *
 * Serializes every operation behind one lock, the way the runtime
 * serializes transactions that write the same account. Each operation runs
 * against a working copy of the state that replaces the committed state
 * only if the operation returns `Ok`, so a failed operation has no
 * observable effect.
 */
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    state: Mutex<LedgerState>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `op` as a single transaction.
    pub fn process<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&mut LedgerState) -> Result<T>,
    {
        let mut committed = self.state.lock();
        let mut working = committed.clone();
        let output = op(&mut working)?;
        *committed = working;
        Ok(output)
    }

    /// Copy of the committed state.
    pub fn snapshot(&self) -> LedgerState {
        self.state.lock().clone()
    }

    /// Creates an empty token account of `mint` owned by `owner`.
    pub fn open_token_account(&self, address: Pubkey, mint: Pubkey, owner: Pubkey) -> Result<()> {
        self.process(|state| state.create_token_account(address, mint, owner))
    }

    /// Mints `amount` new tokens into `address`.
    pub fn mint_to(&self, address: &Pubkey, amount: u64) -> Result<()> {
        self.process(|state| state.credit(address, amount))
    }

    pub fn balance(&self, address: &Pubkey) -> Option<u64> {
        self.state.lock().token_account(address).map(|account| account.amount)
    }
}
