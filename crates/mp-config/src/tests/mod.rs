
use crate::CONFIG_DIR_ENV;

use std::env;
use std::path::Path;

use tempfile::TempDir;

/// Every variable `Config::load` reads besides the config dir
const OVERRIDE_VARS: [&str; 6] = [
    "MP_API_BASE_URL",
    "MP_API_TIMEOUT_SECS",
    "MP_STORAGE_DIR",
    "MP_LOG_LEVEL",
    "MP_LOG_COLORED",
    "MP_LOG_FILE",
];

/// A throwaway config directory wired up through `MP_CONFIG_DIR`, with all
/// overrides cleared. Variables touched through it are restored on drop.
///
/// Process environment is global: tests using this must be `#[serial]`.
pub(crate) struct TestEnv {
    dir: TempDir,
    saved: Vec<(&'static str, Option<String>)>,
}

impl TestEnv {
    pub(crate) fn new() -> Self {
        let mut test_env = Self {
            dir: TempDir::new().unwrap(),
            saved: Vec::new(),
        };

        let dir = test_env.dir.path().to_str().unwrap().to_string();
        test_env.set(CONFIG_DIR_ENV, &dir);
        for key in OVERRIDE_VARS {
            test_env.save(key);
            unsafe { env::remove_var(key) };
        }

        test_env
    }

    pub(crate) fn path(&self) -> &Path {
        self.dir.path()
    }

    pub(crate) fn write_config(&self, contents: &str) {
        std::fs::write(self.dir.path().join(crate::CONFIG_FILENAME), contents).unwrap();
    }

    pub(crate) fn set(&mut self, key: &'static str, value: &str) {
        self.save(key);
        unsafe { env::set_var(key, value) };
    }

    fn save(&mut self, key: &'static str) {
        if !self.saved.iter().any(|(saved, _)| *saved == key) {
            self.saved.push((key, env::var(key).ok()));
        }
    }
}

impl Drop for TestEnv {
    fn drop(&mut self) {
        for (key, original) in self.saved.drain(..).rev() {
            unsafe {
                match original {
                    Some(value) => env::set_var(key, value),
                    None => env::remove_var(key),
                }
            }
        }
    }
}
