use log::{trace, debug};
use num::{BigUint, Integer, One, Zero};
use num::bigint::RandBigInt;
use num_prime::nt_funcs;
use num_prime::PrimalityTestConfig;
use rand::Rng;
use crate::math::constants::SMALL_PRIMES;

/// Random probable prime in [lower, upper).
///
/// A start point is drawn uniformly from the range and the first prime at or
/// above it is taken, wrapping around to `lower` when the top of the range has
/// none. Returns `None` only when the whole range is prime free.
pub fn random_prime<R: Rng + ?Sized>(rng: &mut R, lower: &BigUint, upper: &BigUint) -> Option<BigUint> {
    if lower >= upper {
        return None
    }
    debug!("Generating prime of {} to {} bits", lower.bits(), upper.bits());
    let start = rng.gen_biguint_range(lower, upper);
    trace!("Prime search start: {}", start);
    first_prime_in(&start, upper).or_else(|| first_prime_in(lower, &start))
}

/// Smallest probable prime in [from, to).
pub fn first_prime_in(from: &BigUint, to: &BigUint) -> Option<BigUint> {
    let two = BigUint::from(2u8);
    if from <= &two && &two < to {
        return Some(two)
    }
    let mut candidate = from.clone();
    if candidate.is_even() {
        candidate += 1u8;
    }
    while &candidate < to {
        if is_prime(&candidate) {
            trace!("Successful Prime: {}", candidate);
            return Some(candidate)
        }
        candidate += 2u8;
    }
    None
}

pub fn is_prime(candidate: &BigUint) -> bool {
    if candidate <= &BigUint::one() {
        return false
    }
    if candidate.is_even() {
        return candidate == &BigUint::from(2u8)
    }
    match divide_small_primes(candidate) {
        Some(verdict) => verdict,
        None => nt_funcs::is_prime(candidate, Some(PrimalityTestConfig::default())).probably()
    }
}

/// Settles small candidates and ones with a small factor, `None` means undecided.
fn divide_small_primes(number: &BigUint) -> Option<bool> {
    for i in SMALL_PRIMES.iter() {
        let divisor = BigUint::from(*i);
        if number == &divisor {
            return Some(true)
        }
        if (number % &divisor).is_zero() {
            return Some(false)
        }
    }
    None
}
