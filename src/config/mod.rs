//! # Configuration
//!
//! Settings loaded from environment variables (populated from a ConfigMap via
//! `envFrom` in the deployment). Every value has a default.

mod status;

pub use status::StatusConfig;

/// Read an environment variable, falling back to `default` when it is unset
pub fn env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Read and parse an environment variable or return the default value
///
/// Unparseable values fall back to the default.
pub(crate) fn env_var_or_default<T: std::str::FromStr>(key: &str, default: T) -> T
where
    <T as std::str::FromStr>::Err: std::fmt::Debug,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_or_default_reads_value() {
        std::env::set_var("SUBMARINER_STATUS_TEST_ENV", "test_val");
        let value = env_or_default("SUBMARINER_STATUS_TEST_ENV", "default_val");
        std::env::remove_var("SUBMARINER_STATUS_TEST_ENV");
        assert_eq!(value, "test_val");
    }

    #[test]
    fn test_env_or_default_missing() {
        assert_eq!(
            env_or_default("SUBMARINER_STATUS_NONEXISTENT", "default_val"),
            "default_val"
        );
    }

    #[test]
    fn test_env_var_or_default_unparseable() {
        std::env::set_var("SUBMARINER_STATUS_TEST_NUMBER", "not-a-number");
        let value: u32 = env_var_or_default("SUBMARINER_STATUS_TEST_NUMBER", 7);
        std::env::remove_var("SUBMARINER_STATUS_TEST_NUMBER");
        assert_eq!(value, 7);
    }
}
