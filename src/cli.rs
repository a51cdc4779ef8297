use std::io::Write;
use std::time::Instant;
use clap::Parser;
use log::{debug, info};
use crate::constants::{DEFAULT_EXPONENT, MAX_ATTEMPTS, PRIME_LOWER_BITS, PRIME_UPPER_BITS, REPORT_WIDTH};
use crate::error::{Result, RsaError};
use crate::rsa::{KeySet, RsaConfig};

pub const APOLOGY: &str = "Uh-oh, something went wrong. Please open an issue and it will be fixed right away!";

#[derive(Parser, Debug)]
#[command(name = "textbook-rsa")]
#[command(version, about = "Encrypt and decrypt a message with a freshly generated textbook RSA key pair", long_about = None)]
pub struct Cli {
    /// The message to encrypt, quote it if it contains spaces
    #[arg(value_name = "MESSAGE")]
    pub message: Vec<String>,
    /// Public exponent, defaults to 65537
    #[arg(short, long, default_value_t = DEFAULT_EXPONENT)]
    pub exponent: u64,
    /// Primes are at least 2^LOWER_BITS, defaults to 1000
    #[arg(short, long, default_value_t = PRIME_LOWER_BITS)]
    pub lower_bits: usize,
    /// Primes are below 2^UPPER_BITS, defaults to 1100
    #[arg(short, long, default_value_t = PRIME_UPPER_BITS)]
    pub upper_bits: usize,
    /// Attempts allowed for each generation step, defaults to 1000
    #[arg(short, long, default_value_t = MAX_ATTEMPTS)]
    pub max_attempts: usize,
    /// Width of the report, defaults to 70
    #[arg(short, long, default_value_t = REPORT_WIDTH)]
    pub width: usize,
    #[command(flatten)]
    pub(crate) verbose: clap_verbosity_flag::Verbosity
}

impl Cli {
    /// The single positional message.
    pub fn message(&self) -> Result<&str> {
        match self.message.as_slice() {
            [] => Err(RsaError::invalid_argument("No message provided")),
            [message] => Ok(message.as_str()),
            _ => Err(RsaError::invalid_argument("Too many arguments"))
        }
    }

    pub fn config(&self) -> RsaConfig {
        RsaConfig::from_bits(self.exponent, self.lower_bits, self.upper_bits, self.max_attempts)
    }

    pub fn execute(&self, out: &mut impl Write) -> Result<()> {
        let message = self.message()?;
        let config = self.config();

        let perf_start = Instant::now();
        let keyset = KeySet::generate(&config)?;
        info!("Key generation took {:?}", perf_start.elapsed());

        let ciphertext = keyset.public_key().encrypt_message(message)?;
        debug!("Ciphertext: {}", ciphertext);
        let decrypted = keyset.private_key().decrypt_message(&ciphertext)?;

        write_report(out, message, &ciphertext.to_string(), &decrypted, self.width)
            .map_err(|err| RsaError::Unexpected(err.to_string()))
    }
}

/// Prints the three results between rule lines, wrapping the ciphertext.
pub fn write_report(
    out: &mut impl Write,
    message: &str,
    ciphertext: &str,
    decrypted: &str,
    width: usize
) -> std::io::Result<()> {
    let rule = "-".repeat(width);
    writeln!(out, "{}", rule)?;
    writeln!(out, "Original message: {}", message)?;
    writeln!(out, "{}", rule)?;
    for line in wrap(&format!("Ciphertext: {}", ciphertext), width) {
        writeln!(out, "{}", line)?;
    }
    writeln!(out, "{}", rule)?;
    writeln!(out, "Decrypted message: {}", decrypted)?;
    writeln!(out, "{}", rule)
}

/// Hard wraps `text` every `width` characters. A width of 0 leaves it whole.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()]
    }
    text.chars()
        .collect::<Vec<char>>()
        .chunks(width)
        .map(|line| line.iter().collect())
        .collect()
}
