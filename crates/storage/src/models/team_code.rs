use rand::Rng;
use std::fmt;

const CODE_LEN: usize = 6;
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// A six-character join code, always uppercase ASCII alphanumerics.
///
/// Codes typed by users are compared through [`TeamCode::normalize`], so
/// `" abc123 "` and `"ABC123"` refer to the same team.
///
/// # Examples
///
/// ```
/// use storage::models::TeamCode;
///
/// let code = TeamCode::generate();
/// assert_eq!(code.as_str().len(), 6);
/// assert_eq!(TeamCode::normalize(" abc123 "), "ABC123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TeamCode(String);

impl TeamCode {
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let code = (0..CODE_LEN)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect();
        Self(code)
    }

    pub fn normalize(input: &str) -> String {
        input.trim().to_uppercase()
    }

    pub fn matches(code: &str, input: &str) -> bool {
        Self::normalize(code) == Self::normalize(input)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for TeamCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
