use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const CREDENTIAL_LENGTH: usize = 8;

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()-_+=<>?";

const CLASSES: [&[u8]; 4] = [UPPERCASE, LOWERCASE, DIGITS, SYMBOLS];

/// Shared secret authorizing deposits and withdrawals on one account.
///
/// Comparison is exact and case-sensitive. `Debug` is redacted so the secret
/// never ends up in logs; `Display` reveals it for handing back to the holder.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, candidate: &str) -> bool {
        self.0 == candidate
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "Credential(********)");
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}

/// Produces credentials with one uppercase letter, one lowercase letter, one digit
/// and one symbol in the first four positions, followed by characters drawn
/// uniformly from the union of all four classes.
#[derive(Debug)]
pub struct CredentialGenerator<R = StdRng> {
    rng: R,
    alphabet: Vec<u8>,
}

impl CredentialGenerator<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> CredentialGenerator<R> {
    pub fn new(rng: R) -> Self {
        return Self {
            rng,
            alphabet: CLASSES.concat(),
        };
    }

    pub fn generate(&mut self) -> Credential {
        let mut password = String::with_capacity(CREDENTIAL_LENGTH);

        for class in CLASSES {
            let c = self.pick(class);
            password.push(c);
        }

        while password.len() < CREDENTIAL_LENGTH {
            let idx = self.rng.gen_range(0..self.alphabet.len());
            password.push(char::from(self.alphabet[idx]));
        }

        Credential(password)
    }

    fn pick(&mut self, class: &[u8]) -> char {
        let idx = self.rng.gen_range(0..class.len());
        char::from(class[idx])
    }
}
