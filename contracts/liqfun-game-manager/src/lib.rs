#![no_std]

//! # LiqFun Game Manager
//!
//! A time-boxed, two-token competitive staking game on Soroban.
//!
//! ## Architecture
//! - Anyone opens a game for a token pair by paying a fixed creation fee
//! - Depositors stake either pair token into contract custody during a fixed
//!   120-ledger window
//! - Once the window has passed, anyone may complete the game: each staked
//!   side is liquidated to the base asset through an external AMM router, a
//!   liquidation fee is routed to the fee sink, and the net proceeds are paid
//!   pro-rata to that side's depositors
//!
//! ## External Dependencies
//! - Soroswap-interface routers: liquidation swaps (one per pool version)
//! - SEP-41 tokens: staked assets and the base/settlement asset
//! - soroban-fixed-point-math: safe fee and pro-rata arithmetic

use soroban_sdk::{contract, contractimpl, Address, BytesN, Env};

mod errors;
mod events;
mod storage;
mod types;

mod fees;
mod game;
mod settlement;
mod stake;

// External contract type definitions
mod router;

use errors::Error;
use types::{Config, Game, StakePosition, CREATION_FEE, LIQUIDATION_FEE};

// ============================================================================
// Contract Definition
// ============================================================================

#[contract]
pub struct LiqfunGameManager;

#[contractimpl]
impl LiqfunGameManager {
    // ========================================================================
    // Initialization
    // ========================================================================

    /// Initialize the contract
    ///
    /// Stores the five collaborator addresses. There is no admin surface;
    /// the configuration is immutable for the contract's lifetime.
    ///
    /// # Arguments
    /// * `router_manager` - Router handling pool-version-3 liquidations
    /// * `swap_router` - Router handling pool-version-2 liquidations
    /// * `pool_factory` - AMM pool factory
    /// * `base_token` - Reference base asset (liquidation target and
    ///   creation-fee currency)
    /// * `fee_recipient` - Fee sink for creation and liquidation fees
    pub fn __constructor(
        env: Env,
        router_manager: Address,
        swap_router: Address,
        pool_factory: Address,
        base_token: Address,
        fee_recipient: Address,
    ) {
        let config = Config {
            router_manager,
            swap_router,
            pool_factory,
            base_token,
            fee_recipient,
        };

        storage::set_config(&env, &config);
        storage::extend_instance_ttl(&env);
    }

    // ========================================================================
    // Read Interface
    // ========================================================================

    /// Fixed creation fee in base token units
    pub fn creation_fee() -> i128 {
        CREATION_FEE
    }

    /// Liquidation fee rate numerator (percent: 5 means 5%)
    pub fn liquidation_fee() -> i128 {
        LIQUIDATION_FEE
    }

    /// Get the current configuration
    pub fn get_config(env: Env) -> Config {
        storage::get_config(&env)
    }

    /// Look up the current game for a pair, in either token order
    ///
    /// # Errors
    /// * `GameNotFound` - If no game has ever been created for the pair
    pub fn get_game(env: Env, token_a: Address, token_b: Address) -> Result<Game, Error> {
        game::get_game(&env, &token_a, &token_b)
    }

    /// Look up a game (current or historical) by its hash
    ///
    /// # Errors
    /// * `GameNotFound` - If no game exists under this hash
    pub fn get_game_by_hash(env: Env, game_hash: BytesN<32>) -> Result<Game, Error> {
        game::get_game_by_hash(&env, &game_hash)
    }

    /// A depositor's recorded position in the current game for a pair
    ///
    /// Returns a zero position if the depositor never staked.
    ///
    /// # Errors
    /// * `GameNotFound` - If no game exists for the pair
    pub fn get_stake(
        env: Env,
        token_a: Address,
        token_b: Address,
        depositor: Address,
    ) -> Result<StakePosition, Error> {
        game::get_stake(&env, &token_a, &token_b, &depositor)
    }

    // ========================================================================
    // Game Lifecycle
    // ========================================================================

    /// Create a new game for a token pair
    ///
    /// Collects the fixed creation fee in base token from the creator and
    /// opens a 120-ledger staking window starting at `start_block`. Pool
    /// versions and fee tiers are recorded per side and route that side's
    /// liquidation at completion.
    ///
    /// # Returns
    /// The new game's hash
    ///
    /// # Errors
    /// * `IdenticalTokens` - If both sides are the same token
    /// * `InvalidPoolVersion` - If either pool version is not 2 or 3
    /// * `GameAlreadyExists` - If a non-completed game exists for the pair
    /// * `InsufficientFee` - If the creation fee cannot be collected
    #[allow(clippy::too_many_arguments)]
    pub fn create_game(
        env: Env,
        creator: Address,
        token_a: Address,
        token_b: Address,
        pool_version_a: u32,
        pool_version_b: u32,
        pool_fee_a: u32,
        pool_fee_b: u32,
        start_block: u32,
    ) -> Result<BytesN<32>, Error> {
        game::create_game(
            &env,
            &creator,
            &token_a,
            &token_b,
            pool_version_a,
            pool_version_b,
            pool_fee_a,
            pool_fee_b,
            start_block,
        )
    }

    /// Stake into one side of the current game for a pair
    ///
    /// Pulls `amount` of `chosen_token` from the depositor into contract
    /// custody and credits the matching side. Staking stays open until the
    /// ledger sequence passes the game's `end_block`.
    ///
    /// # Errors
    /// * `GameNotFound` - If no game exists for the pair
    /// * `GameAlreadyCompleted` - If the current game has completed
    /// * `GameClosed` - If the staking window has passed
    /// * `InvalidAmount` - If `amount <= 0`
    /// * `InvalidToken` - If `chosen_token` is neither pair member
    /// * `TransferFailed` - If the custody transfer fails
    pub fn stake_in_game(
        env: Env,
        depositor: Address,
        token_a: Address,
        token_b: Address,
        amount: i128,
        chosen_token: Address,
    ) -> Result<(), Error> {
        stake::stake_in_game(&env, &depositor, &token_a, &token_b, amount, &chosen_token)
    }

    /// Complete an expired game
    ///
    /// Permissionless: any caller may settle once the ledger sequence has
    /// passed the game's `end_block`. Liquidates each staked side through its
    /// recorded router, routes the liquidation fee to the fee sink, and pays
    /// each side's net proceeds pro-rata to that side's depositors. Terminal
    /// and one-shot: a repeat call fails.
    ///
    /// # Errors
    /// * `GameNotFound` - If no game exists for the pair
    /// * `GameAlreadyCompleted` - If the game was already settled
    /// * `GameNotExpired` - If the ledger sequence has not passed `end_block`
    /// * `LiquidationFailed` - If a router swap fails
    pub fn complete_game(env: Env, token_a: Address, token_b: Address) -> Result<(), Error> {
        settlement::complete_game(&env, &token_a, &token_b)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests;
