use soroban_sdk::{contracttype, Address, BytesN, Env, Vec};

use crate::types::{Config, Game, StakePosition};

// ============================================================================
// Storage Keys
// ============================================================================
// Uses type-safe enum keys to prevent storage collisions and improve type safety
//
// Storage Types:
// - Instance: Config
// - Persistent: CurrentGame, Game, Stake, Depositors

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Global configuration - singleton (Instance storage)
    Config,

    /// Hash of the most recent game for a canonical pair -
    /// CurrentGame(token1, token2) -> BytesN<32> (Persistent storage)
    CurrentGame(Address, Address),

    /// Game record - Game(game_hash) -> Game (Persistent storage)
    /// Completed games are retained here for historical reads.
    Game(BytesN<32>),

    /// Depositor's position - Stake(game_hash, depositor) -> StakePosition
    /// (Persistent storage)
    Stake(BytesN<32>, Address),

    /// Depositor index for payout iteration -
    /// Depositors(game_hash) -> Vec<Address> (Persistent storage)
    Depositors(BytesN<32>),
}

// ============================================================================
// Storage Utilities
// ============================================================================

/// Get the global configuration
pub(crate) fn get_config(env: &Env) -> Config {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .expect("Config not set")
}

/// Set the global configuration
pub(crate) fn set_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
}

/// Get the current game hash for a canonical pair
pub(crate) fn get_current_game_hash(
    env: &Env,
    token1: &Address,
    token2: &Address,
) -> Option<BytesN<32>> {
    let key = DataKey::CurrentGame(token1.clone(), token2.clone());
    let result = env.storage().persistent().get(&key);
    if result.is_some() {
        extend_persistent_ttl(env, &key);
    }
    result
}

/// Point a canonical pair at a new current game
pub(crate) fn set_current_game_hash(
    env: &Env,
    token1: &Address,
    token2: &Address,
    game_hash: &BytesN<32>,
) {
    let key = DataKey::CurrentGame(token1.clone(), token2.clone());
    env.storage().persistent().set(&key, game_hash);
    extend_persistent_ttl(env, &key);
}

/// Get a game record by hash
pub(crate) fn get_game(env: &Env, game_hash: &BytesN<32>) -> Option<Game> {
    let key = DataKey::Game(game_hash.clone());
    let result = env.storage().persistent().get(&key);
    if result.is_some() {
        extend_persistent_ttl(env, &key);
    }
    result
}

/// Set a game record
pub(crate) fn set_game(env: &Env, game_hash: &BytesN<32>, game: &Game) {
    let key = DataKey::Game(game_hash.clone());
    env.storage().persistent().set(&key, game);
    extend_persistent_ttl(env, &key);
}

/// Get a depositor's stake position for a game
pub(crate) fn get_stake(
    env: &Env,
    game_hash: &BytesN<32>,
    depositor: &Address,
) -> Option<StakePosition> {
    let key = DataKey::Stake(game_hash.clone(), depositor.clone());
    let result = env.storage().persistent().get(&key);
    if result.is_some() {
        extend_persistent_ttl(env, &key);
    }
    result
}

/// Set a depositor's stake position for a game
pub(crate) fn set_stake(
    env: &Env,
    game_hash: &BytesN<32>,
    depositor: &Address,
    position: &StakePosition,
) {
    let key = DataKey::Stake(game_hash.clone(), depositor.clone());
    env.storage().persistent().set(&key, position);
    extend_persistent_ttl(env, &key);
}

/// Get the depositor index for a game
pub(crate) fn get_depositors(env: &Env, game_hash: &BytesN<32>) -> Vec<Address> {
    let key = DataKey::Depositors(game_hash.clone());
    match env.storage().persistent().get(&key) {
        Some(depositors) => {
            extend_persistent_ttl(env, &key);
            depositors
        }
        None => Vec::new(env),
    }
}

/// Set the depositor index for a game
pub(crate) fn set_depositors(env: &Env, game_hash: &BytesN<32>, depositors: &Vec<Address>) {
    let key = DataKey::Depositors(game_hash.clone());
    env.storage().persistent().set(&key, depositors);
    extend_persistent_ttl(env, &key);
}

// ============================================================================
// Storage TTL Management
// ============================================================================
// TTL (Time To Live) management ensures data doesn't expire unexpectedly
// - Instance storage: Config, tied to contract lifetime
// - Persistent storage: game, stake and index data - extends to 30 days when accessed

/// TTL thresholds and extensions (in ledgers, ~5 seconds per ledger)
/// ~30 days = 518,400 ledgers
/// ~7 days = 120,960 ledgers
const TTL_THRESHOLD_LEDGERS: u32 = 120_960; // Extend if < 7 days remaining
const TTL_EXTEND_TO_LEDGERS: u32 = 518_400; // Extend to 30 days

/// Extend TTL for a persistent entry
/// Should be called whenever the entry is read/written
pub(crate) fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD_LEDGERS, TTL_EXTEND_TO_LEDGERS);
}

/// Extend TTL for instance storage (contract-wide data)
/// Should be called during initialization and periodically
pub(crate) fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD_LEDGERS, TTL_EXTEND_TO_LEDGERS);
}
