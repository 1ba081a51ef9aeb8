//! Environment configuration.
//!
//! The only configuration this backend reads from the environment is the
//! completion API credential. Everything else (bind address, verbosity) is
//! handled by the CLI layer.

use secrecy::SecretString;
use tracing::warn;

/// Primary credential variable.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Legacy/alternate credential variable, checked second.
pub const API_KEY_FALLBACK_VAR: &str = "OPENAI_API_KEY_ENV_VAR";

/// Placeholder used when neither variable is set. Every chat request will
/// fail upstream with an authentication error, which is the intended
/// degraded mode -- the process still serves contact and history routes.
const PLACEHOLDER_KEY: &str = "default_key";

/// Resolve the completion API key from the process environment.
pub fn resolve_api_key() -> SecretString {
    resolve_api_key_from(
        std::env::var(API_KEY_VAR).ok(),
        std::env::var(API_KEY_FALLBACK_VAR).ok(),
    )
}

/// Credential resolution chain: primary, then fallback, then placeholder.
fn resolve_api_key_from(primary: Option<String>, fallback: Option<String>) -> SecretString {
    let key = match (primary, fallback) {
        (Some(key), _) if !key.is_empty() => key,
        (_, Some(key)) if !key.is_empty() => key,
        _ => {
            warn!(
                "neither {API_KEY_VAR} nor {API_KEY_FALLBACK_VAR} is set; \
                 chat requests will fail upstream"
            );
            PLACEHOLDER_KEY.to_string()
        }
    };
    SecretString::from(key)
}
