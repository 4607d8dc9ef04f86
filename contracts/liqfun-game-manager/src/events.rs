use soroban_sdk::{contractevent, Address, BytesN, Env};

// ============================================================================
// Event Definitions using #[contractevent] Macro
// ============================================================================

#[contractevent]
pub struct GameCreated {
    #[topic]
    pub token1: Address,
    #[topic]
    pub token2: Address,
    pub game_hash: BytesN<32>,
    pub creator: Address,
    pub start_block: u32,
    pub end_block: u32,
}

#[contractevent]
pub struct GameStaked {
    #[topic]
    pub game_hash: BytesN<32>,
    #[topic]
    pub depositor: Address,
    pub token: Address,
    pub amount: i128,
}

#[contractevent]
pub struct SideLiquidated {
    #[topic]
    pub game_hash: BytesN<32>,
    pub token: Address,
    pub pool_version: u32,
    pub pool_fee: u32,
    pub amount_in: i128,
    pub proceeds: i128,
    pub fee: i128,
}

#[contractevent]
pub struct GameCompleted {
    #[topic]
    pub token1: Address,
    #[topic]
    pub token2: Address,
    pub game_hash: BytesN<32>,
    pub token1_proceeds: i128,
    pub token2_proceeds: i128,
}

// ============================================================================
// Event Emission Helper Functions
// ============================================================================

/// Emit game created event
pub(crate) fn emit_game_created(
    env: &Env,
    token1: &Address,
    token2: &Address,
    game_hash: &BytesN<32>,
    creator: &Address,
    start_block: u32,
    end_block: u32,
) {
    GameCreated {
        token1: token1.clone(),
        token2: token2.clone(),
        game_hash: game_hash.clone(),
        creator: creator.clone(),
        start_block,
        end_block,
    }
    .publish(env);
}

/// Emit stake recorded event
pub(crate) fn emit_game_staked(
    env: &Env,
    game_hash: &BytesN<32>,
    depositor: &Address,
    token: &Address,
    amount: i128,
) {
    GameStaked {
        game_hash: game_hash.clone(),
        depositor: depositor.clone(),
        token: token.clone(),
        amount,
    }
    .publish(env);
}

/// Emit per-side liquidation event
#[allow(clippy::too_many_arguments)]
pub(crate) fn emit_side_liquidated(
    env: &Env,
    game_hash: &BytesN<32>,
    token: &Address,
    pool_version: u32,
    pool_fee: u32,
    amount_in: i128,
    proceeds: i128,
    fee: i128,
) {
    SideLiquidated {
        game_hash: game_hash.clone(),
        token: token.clone(),
        pool_version,
        pool_fee,
        amount_in,
        proceeds,
        fee,
    }
    .publish(env);
}

/// Emit game completed event
pub(crate) fn emit_game_completed(
    env: &Env,
    token1: &Address,
    token2: &Address,
    game_hash: &BytesN<32>,
    token1_proceeds: i128,
    token2_proceeds: i128,
) {
    GameCompleted {
        token1: token1.clone(),
        token2: token2.clone(),
        game_hash: game_hash.clone(),
        token1_proceeds,
        token2_proceeds,
    }
    .publish(env);
}
