use soroban_sdk::{contracttype, Address, BytesN};

// ============================================================================
// Storage Data Structures
// ============================================================================

/// A two-token competitive staking game
///
/// The pair is canonicalized at creation (`token1 < token2` by address
/// ordering) so lookups resolve identically regardless of argument order.
/// Pool versions and fee tiers are recorded per side and used to route that
/// side's liquidation at completion.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Game {
    /// Unique identifier: sha256 over the canonical pair, pool parameters
    /// and start block
    pub game_hash: BytesN<32>,

    /// Ledger sequence at which the game window opens
    pub start_block: u32,

    /// Ledger sequence at which the window closes (start_block + GAME_DURATION_BLOCKS)
    /// Fixed at creation, never mutated.
    pub end_block: u32,

    /// First pair token (lesser address)
    pub token1: Address,

    /// Second pair token (greater address)
    pub token2: Address,

    /// Cumulative amount staked on the token1 side
    pub token1_amount: i128,

    /// Cumulative amount staked on the token2 side
    pub token2_amount: i128,

    /// AMM pool version to liquidate the token1 side through (2 or 3)
    pub token1_pool_version: u32,

    /// AMM pool version to liquidate the token2 side through (2 or 3)
    pub token2_pool_version: u32,

    /// Swap fee tier for the token1 side's pool
    pub token1_pool_fee: u32,

    /// Swap fee tier for the token2 side's pool
    pub token2_pool_fee: u32,

    /// Terminal flag, flipped false -> true exactly once by complete_game
    pub has_completed: bool,
}

impl Game {
    /// Which side of the pair a token belongs to, if any
    pub fn side_of(&self, token: &Address) -> Option<Side> {
        if *token == self.token1 {
            Some(Side::Token1)
        } else if *token == self.token2 {
            Some(Side::Token2)
        } else {
            None
        }
    }
}

/// One side of a game's pair
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Side {
    Token1,
    Token2,
}

/// A depositor's cumulative contribution to one game
///
/// Tracked per (game_hash, depositor) so settlement can pay each side's net
/// proceeds out pro-rata.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakePosition {
    /// Amount staked on the token1 side
    pub token1_amount: i128,

    /// Amount staked on the token2 side
    pub token2_amount: i128,
}

// ============================================================================
// Configuration
// ============================================================================

/// Global configuration, set once by the constructor
///
/// All five collaborator addresses are opaque: the managers/routers expose a
/// Soroswap-style swap interface, the factory backs pair resolution, and the
/// base token doubles as creation-fee currency and liquidation target.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Router handling pool-version-3 liquidations
    pub router_manager: Address,

    /// Router handling pool-version-2 liquidations
    pub swap_router: Address,

    /// AMM pool factory
    pub pool_factory: Address,

    /// Reference base asset (e.g. wrapped native): liquidation target and
    /// creation-fee currency
    pub base_token: Address,

    /// Fee sink receiving creation and liquidation fees
    pub fee_recipient: Address,
}

// ============================================================================
// Constants
// ============================================================================

/// Fixed game window length in ledgers
pub const GAME_DURATION_BLOCKS: u32 = 120;

/// Creation fee in base token units (0.005 at 7 decimals)
pub const CREATION_FEE: i128 = 50_000;

/// Liquidation fee numerator, applied over FEE_DENOMINATOR (5%)
pub const LIQUIDATION_FEE: i128 = 5;

/// Liquidation fee denominator
pub const FEE_DENOMINATOR: i128 = 100;

/// Seconds allowed for a router swap before its deadline lapses
pub const SWAP_DEADLINE_SECS: u64 = 300;
