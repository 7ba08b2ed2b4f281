use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use thiserror::Error;

use crate::models::PasswordGenerationOptions;

pub const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";
// Full ASCII punctuation set
pub const SYMBOLS: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Password length {length} is out of range ({min}-{max})")]
    LengthOutOfRange { length: usize, min: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Random password generator over letters plus optional digits and symbols.
///
/// Every character is drawn independently from the pool, so an enabled
/// class is not guaranteed to appear in the output. The thread-local RNG
/// is not a cryptographic source.
#[derive(Debug, Default, Clone, Copy)]
pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    pub fn generate_password(&self, options: &PasswordGenerationOptions) -> String {
        self.generate(options.length, options.include_numbers, options.include_symbols)
    }

    pub fn generate(&self, length: usize, use_digits: bool, use_special: bool) -> String {
        let mut rng = rand::thread_rng();
        self.generate_with(&mut rng, length, use_digits, use_special)
    }

    pub fn generate_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        length: usize,
        use_digits: bool,
        use_special: bool,
    ) -> String {
        let chars = Self::pool(use_digits, use_special);
        let dist = Uniform::from(0..chars.len());

        let password: String = (0..length)
            .map(|_| chars[dist.sample(&mut *rng)] as char)
            .collect();

        log::debug!(
            "Generated {} character password from a pool of {}",
            length,
            chars.len()
        );

        password
    }

    // Letters are always present, so the pool is never empty
    pub fn pool(use_digits: bool, use_special: bool) -> Vec<u8> {
        let mut chars = Vec::with_capacity(LETTERS.len() + DIGITS.len() + SYMBOLS.len());
        chars.extend_from_slice(LETTERS);
        if use_digits {
            chars.extend_from_slice(DIGITS);
        }
        if use_special {
            chars.extend_from_slice(SYMBOLS);
        }
        chars
    }

    /// Reject lengths outside `[min, max]` before generating.
    pub fn validate_length(length: usize, min: usize, max: usize) -> Result<usize> {
        if length < min || length > max {
            return Err(GeneratorError::LengthOutOfRange { length, min, max });
        }
        Ok(length)
    }
}
