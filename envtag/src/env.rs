//! Environment variable sources

use std::collections::{BTreeMap, HashMap};
use std::env;

/// A place environment variables are looked up in.
///
/// [`ProcessEnv`] reads the real process environment. Maps are useful in
/// tests and for layering values that did not come from the process.
pub trait EnvSource {
    /// Return the value of `name`, or `None` if it is not set.
    ///
    /// A variable explicitly set to the empty string is `Some("")`.
    fn lookup(&self, name: &str) -> Option<String>;
}

/// The environment of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn lookup(&self, name: &str) -> Option<String> {
        // Non-UTF-8 values are kept rather than treated as unset.
        env::var_os(name).map(|value| value.to_string_lossy().into_owned())
    }
}

impl EnvSource for HashMap<String, String> {
    fn lookup(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn lookup(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl<S: EnvSource + ?Sized> EnvSource for &S {
    fn lookup(&self, name: &str) -> Option<String> {
        (**self).lookup(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_process_env_lookup() {
        env::set_var("ENVTAG_TEST_LOOKUP", "value");
        assert_eq!(
            ProcessEnv.lookup("ENVTAG_TEST_LOOKUP"),
            Some("value".to_string())
        );
        env::remove_var("ENVTAG_TEST_LOOKUP");
        assert_eq!(ProcessEnv.lookup("ENVTAG_TEST_LOOKUP"), None);
    }

    #[test]
    #[serial]
    fn test_process_env_empty_is_present() {
        env::set_var("ENVTAG_TEST_EMPTY", "");
        assert_eq!(ProcessEnv.lookup("ENVTAG_TEST_EMPTY"), Some(String::new()));
        env::remove_var("ENVTAG_TEST_EMPTY");
    }

    #[test]
    fn test_map_lookup() {
        let mut map = HashMap::new();
        map.insert("PORT".to_string(), "8080".to_string());
        assert_eq!(map.lookup("PORT"), Some("8080".to_string()));
        assert_eq!(map.lookup("HOST"), None);

        let by_ref = &map;
        assert_eq!(by_ref.lookup("PORT"), Some("8080".to_string()));
    }
}
