use log::{debug, info, trace};
use more_asserts as ma;
use num::{BigUint, One};
use rand::Rng;
use crate::codec;
use crate::constants::{DEFAULT_EXPONENT, MAX_ATTEMPTS, PRIME_LOWER_BITS, PRIME_UPPER_BITS};
use crate::error::{Result, RsaError};
use crate::math::{digit_count, gcd, lcm, modular_inverse, modular_pow};
use crate::math::prime::random_prime;

/// Parameters of one key generation run.
#[derive(Debug, PartialEq, Clone, Eq)]
pub struct RsaConfig {
    pub exponent: BigUint,
    /// Inclusive.
    pub prime_lower: BigUint,
    /// Exclusive.
    pub prime_upper: BigUint,
    pub max_attempts: usize
}

impl Default for RsaConfig {
    fn default() -> Self {
        Self::from_bits(DEFAULT_EXPONENT, PRIME_LOWER_BITS, PRIME_UPPER_BITS, MAX_ATTEMPTS)
    }
}

impl RsaConfig {
    /// Primes are drawn from [2^lower_bits, 2^upper_bits).
    pub fn from_bits(exponent: u64, lower_bits: usize, upper_bits: usize, max_attempts: usize) -> Self {
        Self {
            exponent: BigUint::from(exponent),
            prime_lower: BigUint::one() << lower_bits,
            prime_upper: BigUint::one() << upper_bits,
            max_attempts
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_attempts == 0 {
            return Err(RsaError::invalid_config("the attempt budget must be at least 1"))
        }
        if self.prime_lower < BigUint::from(2u8) {
            return Err(RsaError::invalid_config("the prime range must start at 2 or above"))
        }
        if self.prime_lower >= self.prime_upper {
            return Err(RsaError::invalid_config(format!(
                "the prime range [{}, {}) is empty",
                self.prime_lower,
                self.prime_upper
            )))
        }
        if self.exponent <= BigUint::one() {
            return Err(RsaError::invalid_config("the public exponent must be greater than 1"))
        }
        Ok(())
    }
}

/// One half of a key pair: an exponent and the shared modulus.
#[derive(Debug, PartialEq, Clone, Eq)]
pub struct Key {
    exponent: BigUint,
    modulus: BigUint
}

#[derive(Debug, Clone)]
pub struct KeySet {
    private_key: Key,
    public_key: Key
}

impl Key {
    pub fn new(exponent: BigUint, modulus: BigUint) -> Self {
        Self {
            exponent,
            modulus
        }
    }

    /// input^exponent mod modulus. `input` must already be below the modulus.
    pub fn apply(&self, input: &BigUint) -> BigUint {
        ma::debug_assert_lt!(input, &self.modulus);
        modular_pow(input, &self.exponent, &self.modulus)
    }

    pub fn encrypt_message(&self, message: &str) -> Result<BigUint> {
        trace!("Running encrypt: {}", message);
        let encoded = codec::encode(message)?;
        self.check_domain(&encoded)?;
        Ok(self.apply(&encoded))
    }

    pub fn decrypt_message(&self, ciphertext: &BigUint) -> Result<String> {
        trace!("Running decrypt: {}", ciphertext);
        self.check_domain(ciphertext)?;
        let decrypted = self.apply(ciphertext);
        trace!("Decrypted integer: {}", decrypted);
        codec::decode(&decrypted)
    }

    /// Messages are never chunked, so anything at or above the modulus is refused.
    fn check_domain(&self, value: &BigUint) -> Result<()> {
        if value >= &self.modulus {
            return Err(RsaError::MessageTooLarge {
                digits: digit_count(value),
                limit: digit_count(&self.modulus) - 1
            })
        }
        Ok(())
    }

    pub fn exponent(&self) -> &BigUint {
        &self.exponent
    }

    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }
}

impl KeySet {
    pub fn generate(config: &RsaConfig) -> Result<Self> {
        let mut rng = rand::thread_rng();
        Self::generate_with(config, &mut rng)
    }

    pub fn generate_with<R: Rng + ?Sized>(config: &RsaConfig, rng: &mut R) -> Result<Self> {
        info!("Generating new RSA keyset");
        config.validate()?;
        let (p, q) = generate_primes(config, rng)?;
        Self::from_primes(config, &p, &q)
    }

    /// Derives the key pair from an already chosen prime pair.
    ///
    /// The exponent is fixed, so every attempt sees the same (e, t) and either
    /// the first one succeeds or the budget runs out.
    pub fn from_primes(config: &RsaConfig, p: &BigUint, q: &BigUint) -> Result<Self> {
        let n = public_modulus(p, q);
        for attempt in 1..=config.max_attempts {
            let t = carmichael_totient(p, q);
            let e = public_exponent(config);
            if !validated_public(&e, &t) {
                trace!("Public exponent {} rejected for totient on attempt {}", e, attempt);
                continue
            }
            let d = private_exponent(&e, &t).ok_or_else(|| {
                RsaError::Unexpected(format!("{} has no inverse modulo the totient", e))
            })?;
            debug!("Derived key pair with {} bit modulus", n.bits());
            return Ok(Self {
                private_key: Key::new(d, n.clone()),
                public_key: Key::new(e, n)
            })
        }
        Err(RsaError::GenerationExhausted {
            stage: "public exponent",
            attempts: config.max_attempts
        })
    }

    pub fn public_key(&self) -> &Key {
        &self.public_key
    }

    pub fn private_key(&self) -> &Key {
        &self.private_key
    }

    /// (n, e, d)
    pub fn into_parts(self) -> (BigUint, BigUint, BigUint) {
        (self.public_key.modulus, self.public_key.exponent, self.private_key.exponent)
    }
}

/// Fresh key pair as (n, e, d).
pub fn generate_keys(config: &RsaConfig) -> Result<(BigUint, BigUint, BigUint)> {
    KeySet::generate(config).map(KeySet::into_parts)
}

pub fn encrypt(n: &BigUint, e: &BigUint, m: &BigUint) -> BigUint {
    Key::new(e.clone(), n.clone()).apply(m)
}

pub fn decrypt(n: &BigUint, d: &BigUint, c: &BigUint) -> BigUint {
    Key::new(d.clone(), n.clone()).apply(c)
}

/// Draws prime pairs until one passes [`validated_primes`].
pub fn generate_primes<R: Rng + ?Sized>(config: &RsaConfig, rng: &mut R) -> Result<(BigUint, BigUint)> {
    let exhausted = || RsaError::GenerationExhausted {
        stage: "prime pair",
        attempts: config.max_attempts
    };
    for attempt in 1..=config.max_attempts {
        let p = random_prime(rng, &config.prime_lower, &config.prime_upper);
        let q = random_prime(rng, &config.prime_lower, &config.prime_upper);
        let (Some(p), Some(q)) = (p, q) else {
            return Err(exhausted())
        };
        if validated_primes(&p, &q) {
            debug!("Accepted prime pair on attempt {}", attempt);
            return Ok((p, q))
        }
        trace!("Rejected prime pair {} and {}", p, q);
    }
    Err(exhausted())
}

pub fn validated_primes(p: &BigUint, q: &BigUint) -> bool {
    unique_primes(p, q) && different_digits(p, q)
}

pub fn unique_primes(p: &BigUint, q: &BigUint) -> bool {
    p != q
}

/// Primes of different decimal lengths. A leftover heuristic against
/// factoring, it does not make the modulus any harder to break.
pub fn different_digits(p: &BigUint, q: &BigUint) -> bool {
    digit_count(p) != digit_count(q)
}

pub fn public_modulus(p: &BigUint, q: &BigUint) -> BigUint {
    p * q
}

/// lcm(p - 1, q - 1)
pub fn carmichael_totient(p: &BigUint, q: &BigUint) -> BigUint {
    lcm(&(p - 1u8), &(q - 1u8))
}

pub fn public_exponent(config: &RsaConfig) -> BigUint {
    config.exponent.clone()
}

/// 1 < e < t and gcd(e, t) = 1
pub fn validated_public(e: &BigUint, t: &BigUint) -> bool {
    &BigUint::one() < e && e < t && gcd(e, t).is_one()
}

/// e^-1 mod t. Only defined once [`validated_public`] holds.
pub fn private_exponent(e: &BigUint, t: &BigUint) -> Option<BigUint> {
    modular_inverse(e, t)
}
