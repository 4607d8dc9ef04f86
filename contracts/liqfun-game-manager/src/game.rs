use soroban_sdk::{token, xdr::ToXdr, Address, Bytes, BytesN, Env};

use crate::errors::Error;
use crate::events::emit_game_created;
use crate::storage;
use crate::types::{Game, StakePosition, CREATION_FEE, GAME_DURATION_BLOCKS};

// ============================================================================
// Game Registry
// ============================================================================
// Keyed by the canonical (order-independent) token pair. At most one
// non-completed game may exist per pair; completed games are retained under
// their hash for historical reads.

/// Create a new game for a token pair
///
/// Collects the fixed creation fee in base token from the creator, builds the
/// canonical game record with `end_block = start_block + 120`, and points the
/// pair at it.
///
/// Pool versions and fee tiers follow the creation argument order and are
/// re-sorted along with the tokens during canonicalization.
///
/// # Errors
/// * `IdenticalTokens` - If both sides are the same token
/// * `InvalidPoolVersion` - If either pool version is not 2 or 3
/// * `GameAlreadyExists` - If a non-completed game exists for the pair
/// * `InsufficientFee` - If the creation fee cannot be collected
#[allow(clippy::too_many_arguments)]
pub(crate) fn create_game(
    env: &Env,
    creator: &Address,
    token_a: &Address,
    token_b: &Address,
    pool_version_a: u32,
    pool_version_b: u32,
    pool_fee_a: u32,
    pool_fee_b: u32,
    start_block: u32,
) -> Result<BytesN<32>, Error> {
    // Creator consents to the fee pull
    creator.require_auth();

    if token_a == token_b {
        return Err(Error::IdenticalTokens);
    }
    if !is_valid_pool_version(pool_version_a) || !is_valid_pool_version(pool_version_b) {
        return Err(Error::InvalidPoolVersion);
    }

    // Canonicalize: token1 < token2, carrying each side's pool parameters along
    let (token1, token2, versions, fees) = if token_a < token_b {
        (
            token_a.clone(),
            token_b.clone(),
            (pool_version_a, pool_version_b),
            (pool_fee_a, pool_fee_b),
        )
    } else {
        (
            token_b.clone(),
            token_a.clone(),
            (pool_version_b, pool_version_a),
            (pool_fee_b, pool_fee_a),
        )
    };

    // Exactly one non-completed game per pair
    if let Some(existing_hash) = storage::get_current_game_hash(env, &token1, &token2) {
        let existing = storage::get_game(env, &existing_hash).ok_or(Error::GameNotFound)?;
        if !existing.has_completed {
            return Err(Error::GameAlreadyExists);
        }
    }

    // Collect the creation fee into the fee sink before storing anything
    let config = storage::get_config(env);
    let base_client = token::Client::new(env, &config.base_token);
    if base_client
        .try_transfer(creator, &config.fee_recipient, &CREATION_FEE)
        .is_err()
    {
        return Err(Error::InsufficientFee);
    }

    let end_block = start_block
        .checked_add(GAME_DURATION_BLOCKS)
        .ok_or(Error::OverflowError)?;

    let game_hash = compute_game_hash(env, &token1, &token2, versions, fees, start_block);

    let game = Game {
        game_hash: game_hash.clone(),
        start_block,
        end_block,
        token1: token1.clone(),
        token2: token2.clone(),
        token1_amount: 0,
        token2_amount: 0,
        token1_pool_version: versions.0,
        token2_pool_version: versions.1,
        token1_pool_fee: fees.0,
        token2_pool_fee: fees.1,
        has_completed: false,
    };

    storage::set_game(env, &game_hash, &game);
    storage::set_current_game_hash(env, &token1, &token2, &game_hash);

    emit_game_created(
        env,
        &token1,
        &token2,
        &game_hash,
        creator,
        start_block,
        end_block,
    );

    Ok(game_hash)
}

/// Look up the current game for a pair, in either argument order
///
/// # Errors
/// * `GameNotFound` - If no game has ever been created for the pair
pub(crate) fn get_game(env: &Env, token_a: &Address, token_b: &Address) -> Result<Game, Error> {
    let (token1, token2) = canonical_pair(token_a, token_b);
    let game_hash =
        storage::get_current_game_hash(env, &token1, &token2).ok_or(Error::GameNotFound)?;
    storage::get_game(env, &game_hash).ok_or(Error::GameNotFound)
}

/// Look up a game (current or historical) by its hash
pub(crate) fn get_game_by_hash(env: &Env, game_hash: &BytesN<32>) -> Result<Game, Error> {
    storage::get_game(env, game_hash).ok_or(Error::GameNotFound)
}

/// A depositor's recorded position in the current game for a pair
///
/// Returns a zero position if the depositor never staked.
pub(crate) fn get_stake(
    env: &Env,
    token_a: &Address,
    token_b: &Address,
    depositor: &Address,
) -> Result<StakePosition, Error> {
    let game = get_game(env, token_a, token_b)?;
    Ok(
        storage::get_stake(env, &game.game_hash, depositor).unwrap_or(StakePosition {
            token1_amount: 0,
            token2_amount: 0,
        }),
    )
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Order-independent pair key: lesser address first
pub(crate) fn canonical_pair(token_a: &Address, token_b: &Address) -> (Address, Address) {
    if token_a < token_b {
        (token_a.clone(), token_b.clone())
    } else {
        (token_b.clone(), token_a.clone())
    }
}

fn is_valid_pool_version(version: u32) -> bool {
    version == 2 || version == 3
}

/// Unique game identifier: sha256 over the canonical pair, the creation
/// parameters and the creation ledger
///
/// The creation ledger sequence keeps the hash unique even when a pair is
/// re-created with identical arguments: completion requires the sequence to
/// pass the old game's end block first, so the two creations can never share
/// a ledger. Without it, an identical re-creation would overwrite the
/// retained historical record.
fn compute_game_hash(
    env: &Env,
    token1: &Address,
    token2: &Address,
    versions: (u32, u32),
    fees: (u32, u32),
    start_block: u32,
) -> BytesN<32> {
    let mut preimage = Bytes::new(env);
    preimage.append(&token1.clone().to_xdr(env));
    preimage.append(&token2.clone().to_xdr(env));
    preimage.append(&versions.0.to_xdr(env));
    preimage.append(&versions.1.to_xdr(env));
    preimage.append(&fees.0.to_xdr(env));
    preimage.append(&fees.1.to_xdr(env));
    preimage.append(&start_block.to_xdr(env));
    preimage.append(&env.ledger().sequence().to_xdr(env));
    env.crypto().sha256(&preimage).to_bytes()
}
