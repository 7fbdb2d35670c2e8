mod test_initialize_pool;

use anchor_lang::error::Error;
use anchor_lang::prelude::*;

use crate::error::AirdropError;
use crate::event::PoolInitialized;
use crate::ledger::InMemoryLedger;
use crate::processor;

/// A mint with a funded owner account, ready for pool initialization.
struct Fixture {
    ledger: InMemoryLedger,
    mint: Pubkey,
    authority: Pubkey,
    source: Pubkey,
}

impl Fixture {
    fn new(source_amount: u64) -> Self {
        let ledger = InMemoryLedger::new();
        let mint = Pubkey::new_unique();
        let authority = Pubkey::new_unique();
        let source = Pubkey::new_unique();

        ledger.open_token_account(source, mint, authority).unwrap();
        ledger.mint_to(&source, source_amount).unwrap();

        Fixture {
            ledger,
            mint,
            authority,
            source,
        }
    }

    fn initialize_pool(&self, amount: u64) -> Result<PoolInitialized> {
        self.ledger.process(|state| {
            processor::initialize_pool(
                state,
                &[self.authority],
                &self.authority,
                &self.source,
                &self.mint,
                amount,
            )
        })
    }

    /// Creates a claimant with an empty token account of the pool mint.
    fn new_claimant(&self) -> Claimant {
        let key = Pubkey::new_unique();
        let destination = Pubkey::new_unique();
        self.ledger
            .open_token_account(destination, self.mint, key)
            .unwrap();
        Claimant { key, destination }
    }
}

#[derive(Clone, Copy)]
struct Claimant {
    key: Pubkey,
    destination: Pubkey,
}

fn assert_airdrop_err<T: std::fmt::Debug>(result: Result<T>, expected: AirdropError) {
    assert_eq!(result.unwrap_err(), Error::from(expected));
}
