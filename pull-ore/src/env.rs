//! Utilities for reading environment variables.

use std::ffi::OsStr;

/// Returns true if the environment variable is set, and is _not_ one of the following:
/// `'0', '', 'no', 'false'`.
pub fn is_truthy<K: AsRef<OsStr>>(var: K) -> bool {
    static CANDIDATES: &[&str] = &["0", "", "no", "false"];

    let Some(mut value) = std::env::var_os(var) else {
        return false;
    };

    OsStr::make_ascii_lowercase(&mut value);
    let is_falsey = CANDIDATES.iter().any(|falsey| value == *falsey);

    !is_falsey
}

/// Returns the value of the environment variable, or `default` if it's unset or not unicode.
pub fn var_or<K: AsRef<OsStr>>(var: K, default: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_vars_are_not_truthy() {
        assert!(!is_truthy("PULL_ORE_DEFINITELY_NOT_SET_3f9c"));
        assert_eq!(var_or("PULL_ORE_DEFINITELY_NOT_SET_3f9c", "trace"), "trace");
    }

    #[test]
    fn truthy_values() {
        // SAFETY: the variable names are unique to this test, nothing else reads them.
        unsafe {
            std::env::set_var("PULL_ORE_TRUTHY_YES", "yes");
            std::env::set_var("PULL_ORE_TRUTHY_FALSE", "FALSE");
            std::env::set_var("PULL_ORE_TRUTHY_ZERO", "0");
        }
        assert!(is_truthy("PULL_ORE_TRUTHY_YES"));
        assert!(!is_truthy("PULL_ORE_TRUTHY_FALSE"));
        assert!(!is_truthy("PULL_ORE_TRUTHY_ZERO"));
    }
}
