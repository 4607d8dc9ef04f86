//! External AMM router interface
//!
//! Soroswap-style swap router client, narrowed to the surface the settlement
//! engine consumes. Both configured routers (pool version 2 and 3) expose
//! this interface.

#[allow(dead_code)]
#[soroban_sdk::contractargs(name = "Args")]
#[soroban_sdk::contractclient(name = "Client")]
pub trait Contract {
    fn swap_exact_tokens_for_tokens(
        env: soroban_sdk::Env,
        amount_in: i128,
        amount_out_min: i128,
        path: soroban_sdk::Vec<soroban_sdk::Address>,
        to: soroban_sdk::Address,
        deadline: u64,
    ) -> Result<soroban_sdk::Vec<i128>, CombinedRouterError>;
    fn router_pair_for(
        env: soroban_sdk::Env,
        token_a: soroban_sdk::Address,
        token_b: soroban_sdk::Address,
    ) -> Result<soroban_sdk::Address, CombinedRouterError>;
}

#[soroban_sdk::contracterror(export = false)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub enum CombinedRouterError {
    RouterNotInitialized = 501,
    RouterNegativeNotAllowed = 502,
    RouterDeadlineExpired = 503,
    RouterInitializeAlreadyInitialized = 504,
    RouterInsufficientAAmount = 505,
    RouterInsufficientBAmount = 506,
    RouterInsufficientOutputAmount = 507,
    RouterExcessiveInputAmount = 508,
    RouterPairDoesNotExist = 509,
    LibraryInsufficientAmount = 510,
    LibraryInsufficientLiquidity = 511,
    LibraryInsufficientInputAmount = 512,
    LibraryInsufficientOutputAmount = 513,
    LibraryInvalidPath = 514,
    LibrarySortIdenticalTokens = 515,
}
