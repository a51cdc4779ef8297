mod constants;
pub mod prime;
use num::{BigUint, Integer, One, Zero};

/// base^exponent mod modulus by square and multiply.
pub fn modular_pow(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> BigUint {
    if modulus.is_one() {
        BigUint::ZERO
    }
    else {
        base.modpow(exponent, modulus)
    }
}

/// Inverse of `value` modulo `modulus`, `None` when gcd(value, modulus) != 1.
pub fn modular_inverse(value: &BigUint, modulus: &BigUint) -> Option<BigUint> {
    if modulus.is_zero() {
        return None
    }
    value.modinv(modulus)
}

pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    a.gcd(b)
}

pub fn lcm(a: &BigUint, b: &BigUint) -> BigUint {
    a.lcm(b)
}

/// Number of digits in the decimal representation.
pub fn digit_count(number: &BigUint) -> usize {
    number.to_str_radix(10).len()
}
