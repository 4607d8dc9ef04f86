use soroban_fixed_point_math::FixedPoint;

use crate::errors::Error;
use crate::types::{FEE_DENOMINATOR, LIQUIDATION_FEE};

// ============================================================================
// Fee Policy
// ============================================================================
// Pure fee math. The creation fee is a fixed base-token amount collected at
// create_game; the liquidation fee is a fraction of each side's proceeds,
// routed to the fee sink at completion.

/// Liquidation fee on a side's proceeds: proceeds * LIQUIDATION_FEE / FEE_DENOMINATOR,
/// floored
pub(crate) fn liquidation_fee(proceeds: i128) -> Result<i128, Error> {
    proceeds
        .fixed_mul_floor(LIQUIDATION_FEE, FEE_DENOMINATOR)
        .ok_or(Error::OverflowError)
}

/// A depositor's floored pro-rata share of a side's net proceeds:
/// net * stake / side_total
///
/// Flooring means the sum of shares never exceeds `net`; the rounding dust
/// is swept to the fee sink by the settlement engine.
pub(crate) fn pro_rata_share(net: i128, stake: i128, side_total: i128) -> Result<i128, Error> {
    if stake == 0 {
        return Ok(0);
    }
    net.fixed_mul_floor(stake, side_total)
        .ok_or(Error::OverflowError)
}
