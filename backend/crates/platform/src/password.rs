//! Password Hashing and Verification
//!
//! NIST SP 800-63B style password handling:
//! - Argon2id hashing with a per-hash random salt embedded in the PHC string
//! - Zeroization of clear text on drop
//! - Constant-time comparison (inside `argon2`)
//! - Optional application-wide pepper
//! - Verify-only support for bcrypt hashes (`$2a$`/`$2b$`/`$2y$`) carried
//!   over from older stores; these always report `needs_rehash`
//!
//! Policy checks apply only when a password is *set*. Verification of a
//! presented password only normalises it, so a login attempt never leaks
//! which policy rule a guess violates.

use std::fmt;
use std::sync::OnceLock;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

// ============================================================================
// Constants (NIST SP 800-63B compliant)
// ============================================================================

/// Minimum password length (NIST: SHALL be at least 8)
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length (NIST: SHOULD permit at least 64)
pub const MAX_PASSWORD_LENGTH: usize = 128;

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("Password must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },

    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("Password cannot be empty or contain only whitespace")]
    EmptyOrWhitespace,

    #[error("Password contains invalid control characters")]
    InvalidCharacter,

    #[error("Password is too common or follows a predictable pattern")]
    CommonPattern,
}

/// Password hashing errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// ## Security
/// - Implements `Zeroize` and `ZeroizeOnDrop`
/// - Does not implement `Clone` to prevent accidental copies
/// - Debug output is redacted
///
/// ## Examples
/// ```rust
/// use platform::password::ClearTextPassword;
///
/// let password = ClearTextPassword::new("MiContrasenaDePere123!".to_string()).unwrap();
/// let hashed = password.hash(None).unwrap();
/// assert!(hashed.verify(&password, None));
/// ```
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Create a password that is about to be stored, enforcing the policy
    ///
    /// - 8 to 128 Unicode code points
    /// - No control characters (space, tab and newline allowed)
    /// - Not empty/whitespace only
    /// - Not a common or sequential pattern
    ///
    /// Unicode is normalized using NFKC before validation.
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        let password = Self::for_verification(raw);
        password.check_policy()?;
        Ok(password)
    }

    /// Wrap a presented password for verification only
    ///
    /// Applies the same NFKC normalisation as [`ClearTextPassword::new`] so the
    /// bytes match what was hashed, but enforces no policy.
    pub fn for_verification(raw: String) -> Self {
        let raw = Zeroizing::new(raw);
        Self(raw.nfkc().collect())
    }

    fn check_policy(&self) -> Result<(), PasswordPolicyError> {
        let normalized = self.0.as_str();

        if normalized.trim().is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        // Code points, not bytes
        let char_count = normalized.chars().count();

        if char_count < MIN_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: MIN_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        if char_count > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        if normalized
            .chars()
            .any(|ch| ch.is_control() && ch != '\t' && ch != '\n')
        {
            return Err(PasswordPolicyError::InvalidCharacter);
        }

        if is_common_pattern(normalized) {
            return Err(PasswordPolicyError::CommonPattern);
        }

        Ok(())
    }

    fn peppered(&self, pepper: Option<&[u8]>) -> Zeroizing<Vec<u8>> {
        let mut bytes = self.0.as_bytes().to_vec();
        if let Some(p) = pepper {
            bytes.extend_from_slice(p);
        }
        Zeroizing::new(bytes)
    }

    /// Hash the password using Argon2id
    ///
    /// ## Arguments
    /// * `pepper` - Optional application-wide secret appended before hashing
    ///
    /// ## Returns
    /// PHC-formatted hash string wrapped in `HashedPassword`
    pub fn hash(&self, pepper: Option<&[u8]>) -> Result<HashedPassword, PasswordHashError> {
        let password_bytes = self.peppered(pepper);

        // 128-bit random salt
        let salt = SaltString::generate(OsRng);

        // OWASP parameters: m=19456 (19 MiB), t=2, p=1
        let hash = Argon2::default()
            .hash_password(&password_bytes, &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword {
            hash: hash.to_string(),
        })
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Prefixes of the bcrypt variants accepted for verification
const BCRYPT_PREFIXES: [&str; 3] = ["$2a$", "$2b$", "$2y$"];

/// Length of a modular-crypt bcrypt hash
const BCRYPT_HASH_LEN: usize = 60;

fn is_bcrypt_hash(hash: &str) -> bool {
    hash.len() == BCRYPT_HASH_LEN && BCRYPT_PREFIXES.iter().any(|p| hash.starts_with(p))
}

/// Hashed password in PHC string format
///
/// The PHC string carries algorithm, version, cost parameters, salt and hash,
/// so a stored value is self-describing. Legacy bcrypt strings are accepted
/// too; new hashes are always Argon2id.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Create from a PHC string, rejecting anything that does not parse
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();
        if !is_bcrypt_hash(&hash) {
            PasswordHash::new(&hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;
        }
        Ok(Self { hash })
    }

    /// Wrap a stored value without validating it
    ///
    /// A corrupt column must not fail the lookup that loaded it;
    /// [`HashedPassword::verify`] reports it as a mismatch instead.
    pub fn from_db(s: impl Into<String>) -> Self {
        Self { hash: s.into() }
    }

    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }

    /// Verify a password against this hash
    ///
    /// Returns `false` on mismatch, on a malformed hash and on any algorithm
    /// error. Never panics. Bcrypt hashes predate the pepper and are checked
    /// without it.
    pub fn verify(&self, password: &ClearTextPassword, pepper: Option<&[u8]>) -> bool {
        if self.is_bcrypt() {
            return bcrypt::verify(password.0.as_bytes(), &self.hash).unwrap_or(false);
        }

        let Ok(parsed_hash) = PasswordHash::new(&self.hash) else {
            return false;
        };

        let password_bytes = password.peppered(pepper);

        Argon2::default()
            .verify_password(&password_bytes, &parsed_hash)
            .is_ok()
    }

    pub fn is_bcrypt(&self) -> bool {
        is_bcrypt_hash(&self.hash)
    }

    /// Whether the hash was produced by something other than Argon2id
    pub fn needs_rehash(&self) -> bool {
        if self.is_bcrypt() {
            return true;
        }
        match PasswordHash::new(&self.hash) {
            Ok(parsed) => parsed.algorithm != argon2::Algorithm::Argon2id.ident(),
            Err(_) => true,
        }
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Free functions
// ============================================================================

/// Hash a plaintext password, bypassing the policy
pub fn hash_password(
    plaintext: &str,
    pepper: Option<&[u8]>,
) -> Result<HashedPassword, PasswordHashError> {
    ClearTextPassword::for_verification(plaintext.to_string()).hash(pepper)
}

/// Verify a plaintext password against a stored PHC string
pub fn verify_password(plaintext: &str, stored_hash: &str, pepper: Option<&[u8]>) -> bool {
    let password = ClearTextPassword::for_verification(plaintext.to_string());
    HashedPassword::from_db(stored_hash).verify(&password, pepper)
}

static DUMMY_HASH: OnceLock<Option<HashedPassword>> = OnceLock::new();

fn dummy_hash() -> Option<&'static HashedPassword> {
    DUMMY_HASH
        .get_or_init(|| hash_password("dummy-password-for-timing", None).ok())
        .as_ref()
}

/// Build the dummy hash now instead of on the first unknown-user sign-in
///
/// Otherwise that one request would pay for two Argon2 runs.
pub fn warm_up_dummy_hash() {
    let _ = dummy_hash();
}

/// Whether [`warm_up_dummy_hash`] (or a dummy verification) already ran
pub fn is_dummy_hash_ready() -> bool {
    DUMMY_HASH.get().is_some()
}

/// Spend the same Argon2 work as a real verification, always failing
///
/// Called when the user does not exist so that response time does not reveal
/// whether a user name is known.
pub fn verify_against_dummy(password: &ClearTextPassword) -> bool {
    if let Some(dummy) = dummy_hash() {
        let _ = dummy.verify(password, None);
    }
    false
}

// ============================================================================
// Helper Functions
// ============================================================================

fn is_common_pattern(password: &str) -> bool {
    let lower = password.to_lowercase();

    // Single repeated character, e.g. "aaaaaaaa"
    let mut chars = lower.chars();
    if let Some(first) = chars.next()
        && chars.all(|c| c == first)
    {
        return true;
    }

    if is_sequential_numbers(&lower) {
        return true;
    }

    const KEYBOARD_PATTERNS: &[&str] = &[
        "qwerty",
        "qwertyuiop",
        "asdfgh",
        "asdfghjkl",
        "zxcvbn",
        "qazwsx",
        "1qaz2wsx",
    ];

    if KEYBOARD_PATTERNS.iter().any(|p| lower.contains(p)) {
        return true;
    }

    const COMMON_PASSWORDS: &[&str] = &[
        "password",
        "password1",
        "password123",
        "contrasena",
        "contrasena123",
        "12345678",
        "123456789",
        "1234567890",
        "abcdefgh",
        "letmein",
        "welcome",
        "admin123",
        "administrador",
        "iloveyou",
        "sunshine",
        "princess",
        "football",
        "baseball",
        "trustno1",
    ];

    COMMON_PASSWORDS.contains(&lower.as_str())
}

fn is_sequential_numbers(s: &str) -> bool {
    if s.chars().any(|c| !c.is_ascii_digit()) {
        return false;
    }
    let digits: Vec<u32> = s.chars().filter_map(|c| c.to_digit(10)).collect();

    if digits.len() < 4 {
        return false;
    }

    let is_ascending = digits
        .windows(2)
        .all(|w| w[1] == w[0] + 1 || (w[0] == 9 && w[1] == 0));

    let is_descending = digits
        .windows(2)
        .all(|w| w[0] == w[1] + 1 || (w[0] == 0 && w[1] == 9));

    is_ascending || is_descending
}

// ============================================================================
// Tests
// ============================================================================
