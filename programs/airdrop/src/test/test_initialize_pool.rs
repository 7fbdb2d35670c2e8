use super::*;
use crate::ledger::{load, AccountStore, BalanceLedger};
use crate::pda;
use crate::state::PoolState;

#[test]
fn test_initialize_pool_funds_vault() {
    // Scenario: 600,000 of a 1,000,000 balance goes into the pool
    let fixture = Fixture::new(1_000_000);

    let event = fixture.initialize_pool(600_000).unwrap();

    let (pool, _) = pda::pool_address(&fixture.mint);
    let (vault, _) = pda::vault_address(&pool, &fixture.mint);
    assert_eq!(event.pool, pool);
    assert_eq!(event.vault, vault);
    assert_eq!(event.amount, 600_000);

    assert_eq!(fixture.ledger.balance(&vault), Some(600_000));
    assert_eq!(fixture.ledger.balance(&fixture.source), Some(400_000));

    let state = fixture.ledger.snapshot();
    let pool_state = load::<PoolState>(&state, &pool).unwrap().unwrap();
    assert_eq!(pool_state.authority, fixture.authority);
    assert_eq!(pool_state.mint, fixture.mint);
    assert_eq!(pool_state.vault, vault);
    assert_eq!(pool_state.initial_amount, 600_000);
    assert!(pool_state.is_initialized());
}

#[test]
fn test_vault_is_owned_by_pool() {
    let fixture = Fixture::new(1_000);
    let event = fixture.initialize_pool(1_000).unwrap();

    let state = fixture.ledger.snapshot();
    let vault = state.token_account(&event.vault).unwrap();
    assert_eq!(vault.owner, event.pool);
    assert_ne!(vault.owner, fixture.authority);
    assert_eq!(vault.mint, fixture.mint);
}

#[test]
fn test_reinitialize_fails_and_keeps_pool() {
    let fixture = Fixture::new(1_000_000);
    fixture.initialize_pool(600_000).unwrap();
    let before = fixture.ledger.snapshot();

    assert_airdrop_err(
        fixture.initialize_pool(100_000),
        AirdropError::PoolAlreadyInitialized,
    );

    assert_eq!(fixture.ledger.snapshot(), before);
}

#[test]
fn test_initialize_pool_insufficient_funds() {
    let fixture = Fixture::new(500);
    let before = fixture.ledger.snapshot();

    assert_airdrop_err(fixture.initialize_pool(501), AirdropError::InsufficientFunds);

    // Nothing was created, so a correctly funded retry still works
    assert_eq!(fixture.ledger.snapshot(), before);
    let (pool, _) = pda::pool_address(&fixture.mint);
    assert!(before.get(&pool).is_none());
    fixture.initialize_pool(500).unwrap();
}

#[test]
fn test_initialize_pool_requires_authority_signature() {
    let fixture = Fixture::new(1_000);
    let stranger = Pubkey::new_unique();

    let result = fixture.ledger.process(|state| {
        processor::initialize_pool(
            state,
            &[stranger],
            &fixture.authority,
            &fixture.source,
            &fixture.mint,
            1_000,
        )
    });
    assert_airdrop_err(result, AirdropError::Unauthorized);
}

#[test]
fn test_initialize_pool_rejects_foreign_source() {
    // Signer is valid but does not own the funding account
    let fixture = Fixture::new(1_000);
    let stranger = Pubkey::new_unique();

    let result = fixture.ledger.process(|state| {
        processor::initialize_pool(
            state,
            &[stranger],
            &stranger,
            &fixture.source,
            &fixture.mint,
            1_000,
        )
    });
    assert_airdrop_err(result, AirdropError::Unauthorized);
    assert_eq!(fixture.ledger.balance(&fixture.source), Some(1_000));
}

#[test]
fn test_initialize_pool_rejects_other_mint() {
    let fixture = Fixture::new(1_000);
    let other_mint = Pubkey::new_unique();

    let result = fixture.ledger.process(|state| {
        processor::initialize_pool(
            state,
            &[fixture.authority],
            &fixture.authority,
            &fixture.source,
            &other_mint,
            1_000,
        )
    });
    assert_airdrop_err(result, AirdropError::MintMismatch);
}

#[test]
fn test_pools_are_per_mint() {
    let fixture = Fixture::new(1_000);
    fixture.initialize_pool(1_000).unwrap();

    let other_mint = Pubkey::new_unique();
    let other_source = Pubkey::new_unique();
    fixture
        .ledger
        .open_token_account(other_source, other_mint, fixture.authority)
        .unwrap();
    fixture.ledger.mint_to(&other_source, 2_000).unwrap();

    let event = fixture
        .ledger
        .process(|state| {
            processor::initialize_pool(
                state,
                &[fixture.authority],
                &fixture.authority,
                &other_source,
                &other_mint,
                2_000,
            )
        })
        .unwrap();

    assert_ne!(event.pool, pda::pool_address(&fixture.mint).0);
    assert_eq!(fixture.ledger.balance(&event.vault), Some(2_000));
}
