use soroban_sdk::contracterror;

/// Error codes for the LiqFun game manager
///
/// All errors are represented as u32 values for efficient storage and transmission.
/// Error codes are grouped by category for better organization.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // ========================================================================
    // Creation errors (1-9)
    // ========================================================================
    /// Creation fee could not be collected from the creator
    InsufficientFee = 1,

    /// A non-completed game already exists for this token pair
    GameAlreadyExists = 2,

    /// Both sides of the pair are the same token
    IdenticalTokens = 3,

    /// Pool version is not a supported AMM version (2 or 3)
    InvalidPoolVersion = 4,

    // ========================================================================
    // Staking errors (10-19)
    // ========================================================================
    /// No game exists for this token pair
    GameNotFound = 10,

    /// Staking window has closed (past the game's end block)
    GameClosed = 11,

    /// Amount is invalid (zero or negative)
    InvalidAmount = 12,

    /// Chosen token is not one of the game's pair tokens
    InvalidToken = 13,

    /// Token custody transfer failed (allowance or balance)
    TransferFailed = 14,

    // ========================================================================
    // Settlement errors (20-29)
    // ========================================================================
    /// Completion attempted before the game's end block has passed
    GameNotExpired = 20,

    /// Game has already been completed
    GameAlreadyCompleted = 21,

    /// External router swap failed during liquidation
    LiquidationFailed = 22,

    // ========================================================================
    // Math errors (60-69)
    // ========================================================================
    /// Arithmetic overflow occurred
    OverflowError = 60,
}
