use soroban_sdk::{token, Address, Env};

use crate::errors::Error;
use crate::events::emit_game_staked;
use crate::game;
use crate::storage;
use crate::types::{Side, StakePosition};

// ============================================================================
// Staking Ledger
// ============================================================================
// Per-game, per-side cumulative amounts plus per-depositor positions.
// Staked funds are pulled into contract custody before any balance is
// credited; the ledger is consumed exactly once by the settlement engine.

/// Stake into one side of the current game for a pair
///
/// Window policy: staking is open from creation until the ledger sequence
/// passes `end_block`. There is no lower gate on `start_block`.
///
/// # Errors
/// * `GameNotFound` - If no game exists for the pair
/// * `GameAlreadyCompleted` - If the current game has completed
/// * `GameClosed` - If the staking window has passed
/// * `InvalidAmount` - If `amount <= 0`
/// * `InvalidToken` - If `chosen_token` is neither pair member
/// * `TransferFailed` - If the custody transfer fails
pub(crate) fn stake_in_game(
    env: &Env,
    depositor: &Address,
    token_a: &Address,
    token_b: &Address,
    amount: i128,
    chosen_token: &Address,
) -> Result<(), Error> {
    // Depositor consents to the custody pull
    depositor.require_auth();

    let mut game = game::get_game(env, token_a, token_b)?;

    if game.has_completed {
        return Err(Error::GameAlreadyCompleted);
    }
    if env.ledger().sequence() > game.end_block {
        return Err(Error::GameClosed);
    }
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    let side = game.side_of(chosen_token).ok_or(Error::InvalidToken)?;

    // Pull the stake into contract custody before crediting anything
    let token_client = token::Client::new(env, chosen_token);
    if token_client
        .try_transfer(depositor, &env.current_contract_address(), &amount)
        .is_err()
    {
        return Err(Error::TransferFailed);
    }

    // Credit the side's cumulative amount
    match side {
        Side::Token1 => {
            game.token1_amount = game
                .token1_amount
                .checked_add(amount)
                .ok_or(Error::OverflowError)?;
        }
        Side::Token2 => {
            game.token2_amount = game
                .token2_amount
                .checked_add(amount)
                .ok_or(Error::OverflowError)?;
        }
    }
    storage::set_game(env, &game.game_hash, &game);

    // Credit the depositor's position, indexing first-time depositors
    let mut position =
        storage::get_stake(env, &game.game_hash, depositor).unwrap_or(StakePosition {
            token1_amount: 0,
            token2_amount: 0,
        });
    if position.token1_amount == 0 && position.token2_amount == 0 {
        let mut depositors = storage::get_depositors(env, &game.game_hash);
        depositors.push_back(depositor.clone());
        storage::set_depositors(env, &game.game_hash, &depositors);
    }
    match side {
        Side::Token1 => {
            position.token1_amount = position
                .token1_amount
                .checked_add(amount)
                .ok_or(Error::OverflowError)?;
        }
        Side::Token2 => {
            position.token2_amount = position
                .token2_amount
                .checked_add(amount)
                .ok_or(Error::OverflowError)?;
        }
    }
    storage::set_stake(env, &game.game_hash, depositor, &position);

    emit_game_staked(env, &game.game_hash, depositor, chosen_token, amount);

    Ok(())
}
