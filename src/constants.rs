// Defaults for the key generator and the command line report.

/// 2^16 + 1, the usual balance of speed and safety.
pub const DEFAULT_EXPONENT: u64 = 65537;

/// Primes are drawn from [2^PRIME_LOWER_BITS, 2^PRIME_UPPER_BITS).
pub const PRIME_LOWER_BITS: usize = 1000;
pub const PRIME_UPPER_BITS: usize = 1100;

pub const MAX_ATTEMPTS: usize = 1000;

pub const REPORT_WIDTH: usize = 70;
