use soroban_sdk::{
    auth::{ContractContext, InvokerContractAuthEntry, SubContractInvocation},
    token, vec, Address, Env, IntoVal, Symbol, Vec,
};

use crate::errors::Error;
use crate::events::{emit_game_completed, emit_side_liquidated};
use crate::fees;
use crate::game;
use crate::router::Client as RouterClient;
use crate::storage;
use crate::types::{Config, Game, Side, SWAP_DEADLINE_SECS};

// ============================================================================
// Settlement Engine
// ============================================================================
// Block-window state machine: Created (staking open) -> Expired (sequence past
// end_block) -> Completed (terminal). Completion liquidates each staked side
// through the side's recorded router, takes the liquidation fee, and pays the
// side's net proceeds out pro-rata to that side's depositors.

/// Complete an expired game
///
/// Checks-effects-interactions: the ledger is consumed and the terminal flag
/// persisted before any external router or token call, so a retry (or any
/// nested call) observes `has_completed` and fails. A failed swap aborts the
/// whole invocation, rolling the state flip back with it.
///
/// # Errors
/// * `GameNotFound` - If no game exists for the pair
/// * `GameAlreadyCompleted` - If the game was already settled
/// * `GameNotExpired` - If the ledger sequence has not passed `end_block`
/// * `LiquidationFailed` - If a router swap fails
pub(crate) fn complete_game(env: &Env, token_a: &Address, token_b: &Address) -> Result<(), Error> {
    let mut game = game::get_game(env, token_a, token_b)?;

    if game.has_completed {
        return Err(Error::GameAlreadyCompleted);
    }
    if env.ledger().sequence() <= game.end_block {
        return Err(Error::GameNotExpired);
    }

    // Snapshot and consume the staked totals, then flip the terminal flag,
    // all before the first external call
    let token1_amount = game.token1_amount;
    let token2_amount = game.token2_amount;
    game.token1_amount = 0;
    game.token2_amount = 0;
    game.has_completed = true;
    storage::set_game(env, &game.game_hash, &game);

    let config = storage::get_config(env);

    let token1_proceeds = liquidate_side(env, &config, &game, Side::Token1, token1_amount)?;
    let token2_proceeds = liquidate_side(env, &config, &game, Side::Token2, token2_amount)?;

    emit_game_completed(
        env,
        &game.token1,
        &game.token2,
        &game.game_hash,
        token1_proceeds,
        token2_proceeds,
    );

    Ok(())
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Liquidate one side's staked balance and distribute the proceeds
///
/// Process:
/// 1. Swap the full side balance to base token through the side's router
/// 2. Measure proceeds as the base-token balance delta
/// 3. Pay each of the side's depositors their floored pro-rata share of the
///    net (post-fee) proceeds
/// 4. Sweep the fee plus rounding dust to the fee sink in a single transfer
///
/// Returns the gross proceeds for the side (0 if nothing was staked).
fn liquidate_side(
    env: &Env,
    config: &Config,
    game: &Game,
    side: Side,
    amount: i128,
) -> Result<i128, Error> {
    if amount <= 0 {
        return Ok(0);
    }

    let (staked_token, pool_version, pool_fee) = match side {
        Side::Token1 => (&game.token1, game.token1_pool_version, game.token1_pool_fee),
        Side::Token2 => (&game.token2, game.token2_pool_version, game.token2_pool_fee),
    };

    let contract = env.current_contract_address();
    let base_client = token::Client::new(env, &config.base_token);

    // Capture pre-swap base balance; only the delta from this swap counts
    let pre_balance = base_client.balance(&contract);

    let router_client = RouterClient::new(env, router_for_version(config, pool_version));

    // The router pulls the input token from `to`, so authorize the transfer
    // from this contract to the pair before swapping
    let pair = match router_client.try_router_pair_for(staked_token, &config.base_token) {
        Ok(Ok(pair)) => pair,
        _ => return Err(Error::LiquidationFailed),
    };
    env.authorize_as_current_contract(vec![
        env,
        InvokerContractAuthEntry::Contract(SubContractInvocation {
            context: ContractContext {
                contract: staked_token.clone(),
                fn_name: Symbol::new(env, "transfer"),
                args: (contract.clone(), pair, amount).into_val(env),
            },
            sub_invocations: vec![env],
        }),
    ]);

    let path: Vec<Address> = vec![env, staked_token.clone(), config.base_token.clone()];
    let deadline = env.ledger().timestamp() + SWAP_DEADLINE_SECS;

    // Accepting any output amount; the window gate, not price protection,
    // decides when settlement runs
    match router_client.try_swap_exact_tokens_for_tokens(&amount, &0, &path, &contract, &deadline)
    {
        Ok(Ok(_)) => {}
        _ => return Err(Error::LiquidationFailed),
    }

    let post_balance = base_client.balance(&contract);
    let proceeds = post_balance
        .checked_sub(pre_balance)
        .ok_or(Error::OverflowError)?;
    if proceeds <= 0 {
        return Err(Error::LiquidationFailed);
    }

    let fee = fees::liquidation_fee(proceeds)?;
    let net = proceeds.checked_sub(fee).ok_or(Error::OverflowError)?;

    // Pro-rata distribution over this side's recorded contributions
    let depositors = storage::get_depositors(env, &game.game_hash);
    let mut paid: i128 = 0;
    for depositor in depositors.iter() {
        let stake = storage::get_stake(env, &game.game_hash, &depositor)
            .map(|position| match side {
                Side::Token1 => position.token1_amount,
                Side::Token2 => position.token2_amount,
            })
            .unwrap_or(0);
        let share = fees::pro_rata_share(net, stake, amount)?;
        if share > 0 {
            base_client.transfer(&contract, &depositor, &share);
            paid = paid.checked_add(share).ok_or(Error::OverflowError)?;
        }
    }

    // Fee plus flooring dust, swept in one transfer
    let sink_amount = proceeds.checked_sub(paid).ok_or(Error::OverflowError)?;
    if sink_amount > 0 {
        base_client.transfer(&contract, &config.fee_recipient, &sink_amount);
    }

    emit_side_liquidated(
        env,
        &game.game_hash,
        staked_token,
        pool_version,
        pool_fee,
        amount,
        proceeds,
        fee,
    );

    Ok(proceeds)
}

/// Router handling a side's recorded pool version
fn router_for_version(config: &Config, pool_version: u32) -> &Address {
    if pool_version == 3 {
        &config.router_manager
    } else {
        &config.swap_router
    }
}
