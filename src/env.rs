//! Defines the environment variables to use.

#![cfg(feature = "env")]

use std::{env, fmt};

/// The repository to operate on, in `owner/name` format.
pub const GITHUB_REPOSITORY: &str = "GITHUB_REPOSITORY";

/// The optional GitHub token.
pub const GITHUB_TOKEN: &str = "GITHUB_TOKEN";

/// The severity threshold of the bandit gate.
pub const SECURITY_FAIL_LEVEL: &str = "SECURITY_FAIL_LEVEL";

/// A bearer token attached to outbound GitHub requests.
///
/// The secret never shows up in [`Debug`] output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wraps a token.
    pub fn new<T: Into<String>>(token: T) -> Self {
        Self(token.into())
    }

    /// The raw token.
    pub fn token(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Reads [`GITHUB_TOKEN`] from the environment. An unset or empty variable means unauthenticated access.
pub fn github_token() -> Option<Credential> {
    env::var(GITHUB_TOKEN)
        .ok()
        .filter(|token| !token.trim().is_empty())
        .map(Credential)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_the_token() {
        let credential = Credential::new("ghp_secret");
        assert_eq!(format!("{credential:?}"), "Credential(***)");
        assert_eq!(credential.token(), "ghp_secret");
    }
}
