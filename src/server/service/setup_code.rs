use rand::Rng;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Time-to-live for setup codes in seconds
const SETUP_CODE_TTL_SECONDS: u64 = 600;

/// Stored setup code with expiration timestamp
#[derive(Clone)]
struct SetupCode {
    code: String,
    expires_at: Instant,
}

impl SetupCode {
    fn new(code: String) -> Self {
        Self {
            code,
            expires_at: Instant::now() + Duration::from_secs(SETUP_CODE_TTL_SECONDS),
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    fn matches(&self, input: &str) -> bool {
        self.code == input
    }
}

/// Service for managing the temporary setup code used for first-run registration.
///
/// The setup code is generated once on server startup if no user account exists,
/// printed to the server log, and stored in memory with a 10-minute TTL. Whoever
/// presents it during registration becomes the first admin. It can be validated
/// once and is automatically invalidated after successful use or expiration.
#[derive(Clone)]
pub struct SetupCodeService {
    code: Arc<RwLock<Option<SetupCode>>>,
}

impl SetupCodeService {
    /// Creates a new SetupCodeService instance.
    pub fn new() -> Self {
        Self {
            code: Arc::new(RwLock::new(None)),
        }
    }

    /// Generates a new random setup code and stores it with a 10-minute TTL.
    ///
    /// The code is a cryptographically secure random string of 32 characters
    /// using alphanumeric characters.
    ///
    /// # Returns
    /// The generated setup code string.
    pub async fn generate(&self) -> String {
        let code_string = Self::generate_random_code();
        let setup_code = SetupCode::new(code_string.clone());
        *self.code.write().await = Some(setup_code);
        code_string
    }

    /// Validates the provided code against the stored setup code.
    ///
    /// If validation is successful, the code is automatically invalidated
    /// to prevent reuse. Expired codes are also invalidated and fail validation.
    ///
    /// # Arguments
    /// * `input_code` - The code to validate
    ///
    /// # Returns
    /// `true` if the code matches and was valid (not expired), `false` otherwise.
    pub async fn validate_and_consume(&self, input_code: &str) -> bool {
        let mut code = self.code.write().await;

        if let Some(stored_code) = code.as_ref() {
            if stored_code.is_expired() {
                *code = None;
                return false;
            }

            if stored_code.matches(input_code) {
                *code = None;
                return true;
            }
        }

        false
    }

    /// Generates a cryptographically secure random alphanumeric code.
    ///
    /// # Returns
    /// A 32-character random string.
    fn generate_random_code() -> String {
        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                 abcdefghijklmnopqrstuvwxyz\
                                 0123456789";
        const CODE_LENGTH: usize = 32;

        let mut rng = rand::rng();

        (0..CODE_LENGTH)
            .map(|_| {
                let idx = rng.random_range(0..CHARSET.len());
                CHARSET[idx] as char
            })
            .collect()
    }

    /// Checks if a setup code currently exists and is valid (not expired).
    ///
    /// This method also cleans up expired codes.
    ///
    /// # Returns
    /// `true` if a valid, non-expired code is stored, `false` otherwise.
    #[cfg(test)]
    pub async fn has_valid_code(&self) -> bool {
        let mut code = self.code.write().await;

        if let Some(stored_code) = code.as_ref() {
            if stored_code.is_expired() {
                *code = None;
                return false;
            }
            return true;
        }

        false
    }

    /// Rewinds the stored code's expiry so expiration paths can be tested
    /// without waiting out the TTL.
    #[cfg(test)]
    pub async fn force_expire(&self) {
        let mut code = self.code.write().await;

        if let Some(stored_code) = code.as_mut() {
            stored_code.expires_at = Instant::now() - Duration::from_secs(1);
        }
    }
}

impl Default for SetupCodeService {
    fn default() -> Self {
        Self::new()
    }
}
