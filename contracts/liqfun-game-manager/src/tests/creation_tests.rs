/// Game Creation Tests
///
/// Covers the fee constants, creation-fee collection, end-block arithmetic,
/// canonical pair-key lookup and the one-active-game-per-pair rule.
use super::testutils::{
    assert_contract_error, setup_fixture, side_pool_version, Error, CREATOR_FUNDS,
};
use crate::types::{CREATION_FEE, GAME_DURATION_BLOCKS, LIQUIDATION_FEE};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::Address;

// ============================================================================
// Constants
// ============================================================================

#[test]
fn test_fee_constants() {
    let fixture = setup_fixture();

    // 0.005 base token units at 7 decimals
    assert_eq!(fixture.manager.creation_fee(), 50_000);
    assert_eq!(fixture.manager.creation_fee(), CREATION_FEE);
    assert_eq!(fixture.manager.liquidation_fee(), 5);
    assert_eq!(fixture.manager.liquidation_fee(), LIQUIDATION_FEE);
}

// ============================================================================
// Creation
// ============================================================================

#[test]
fn test_create_game() {
    let fixture = setup_fixture();

    let start_block = fixture.create_default_game();
    let game = fixture
        .manager
        .get_game(&fixture.token_x.address, &fixture.token_y.address);

    assert_eq!(game.start_block, start_block);
    assert_eq!(game.end_block, start_block + GAME_DURATION_BLOCKS);
    assert_eq!(game.end_block, start_block + 120);
    assert!(!game.has_completed);
    assert_eq!(game.token1_amount, 0);
    assert_eq!(game.token2_amount, 0);

    // Canonical ordering holds regardless of creation argument order
    assert!(game.token1 < game.token2);
}

#[test]
fn test_lookup_is_order_independent() {
    let fixture = setup_fixture();
    fixture.create_default_game();

    let forward = fixture
        .manager
        .get_game(&fixture.token_x.address, &fixture.token_y.address);
    let reversed = fixture
        .manager
        .get_game(&fixture.token_y.address, &fixture.token_x.address);

    assert_eq!(forward, reversed);
    assert_eq!(
        fixture.manager.get_game_by_hash(&forward.game_hash),
        forward
    );
}

#[test]
fn test_pool_parameters_follow_their_tokens() {
    let fixture = setup_fixture();

    // token_x side was created with pool version 3, token_y side with 2
    fixture.create_default_game();
    let game = fixture
        .manager
        .get_game(&fixture.token_x.address, &fixture.token_y.address);

    assert_eq!(side_pool_version(&game, &fixture.token_x.address), 3);
    assert_eq!(side_pool_version(&game, &fixture.token_y.address), 2);
}

#[test]
fn test_creation_fee_collected_into_sink() {
    let fixture = setup_fixture();

    assert_eq!(fixture.base.balance(&fixture.fee_recipient), 0);
    fixture.create_default_game();

    assert_eq!(fixture.base.balance(&fixture.fee_recipient), CREATION_FEE);
    assert_eq!(
        fixture.base.balance(&fixture.creator),
        CREATOR_FUNDS - CREATION_FEE
    );
}

// ============================================================================
// Precondition Failures
// ============================================================================

#[test]
fn test_duplicate_game_rejected() {
    let fixture = setup_fixture();
    let start_block = fixture.create_default_game();

    // Second creation for the same pair, reversed argument order
    let result = fixture.manager.try_create_game(
        &fixture.creator,
        &fixture.token_y.address,
        &fixture.token_x.address,
        &2,
        &2,
        &0,
        &0,
        &start_block,
    );
    assert_contract_error(&result, Error::GameAlreadyExists);
}

#[test]
fn test_identical_tokens_rejected() {
    let fixture = setup_fixture();

    let result = fixture.manager.try_create_game(
        &fixture.creator,
        &fixture.token_x.address,
        &fixture.token_x.address,
        &2,
        &2,
        &0,
        &0,
        &fixture.sequence(),
    );
    assert_contract_error(&result, Error::IdenticalTokens);
}

#[test]
fn test_unsupported_pool_version_rejected() {
    let fixture = setup_fixture();

    let result = fixture.manager.try_create_game(
        &fixture.creator,
        &fixture.token_x.address,
        &fixture.token_y.address,
        &4,
        &2,
        &0,
        &0,
        &fixture.sequence(),
    );
    assert_contract_error(&result, Error::InvalidPoolVersion);
}

#[test]
fn test_unfunded_creator_rejected() {
    let fixture = setup_fixture();
    let broke = Address::generate(&fixture.env);

    let result = fixture.manager.try_create_game(
        &broke,
        &fixture.token_x.address,
        &fixture.token_y.address,
        &3,
        &2,
        &0,
        &0,
        &fixture.sequence(),
    );
    assert_contract_error(&result, Error::InsufficientFee);

    // Nothing was stored for the pair
    let lookup = fixture
        .manager
        .try_get_game(&fixture.token_x.address, &fixture.token_y.address);
    assert_contract_error(&lookup, Error::GameNotFound);
}

#[test]
fn test_unrelated_pair_not_found() {
    let fixture = setup_fixture();
    fixture.create_default_game();

    let other = Address::generate(&fixture.env);
    let result = fixture
        .manager
        .try_get_game(&fixture.token_x.address, &other);
    assert_contract_error(&result, Error::GameNotFound);
}
