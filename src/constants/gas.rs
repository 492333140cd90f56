/// Gas multiplier percentage that leaves the remote estimation untouched.
pub const GAS_MULTIPLIER_IDENTITY_PERCENT: u64 = 100;

/// Default gas estimation multiplier (as a percentage).
pub const DEFAULT_GAS_MULTIPLIER_PERCENT: u64 = GAS_MULTIPLIER_IDENTITY_PERCENT;

/// Percentage of the observed block gas limit considered safe to use,
/// tolerating small fluctuations between fetch time and inclusion time.
pub const BLOCK_GAS_LIMIT_SAFETY_PERCENT: u64 = 95;

/// Reward percentile requested from `eth_feeHistory` (median).
pub const DEFAULT_REWARD_PERCENTILE: f64 = 50.0;

/// Number of consecutive full blocks the projected max fee must stay valid
/// for. Each full block can raise the base fee by at most 1/8.
pub const DEFAULT_FULL_BLOCKS_PREFERENCE: u32 = 3;

/// Base fee bump applied per full block, as an integer ratio (9/8 = +12.5%).
pub const BASE_FEE_BUMP_NUMERATOR: u64 = 9;
pub const BASE_FEE_BUMP_DENOMINATOR: u64 = 8;

/// Substring identifying an estimation failure caused by the call reverting
/// rather than by transport problems. Matched case-insensitively.
pub const EXECUTION_ERROR_PATTERN: &str = "execution error";
