// Not every test binary uses every helper.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::{collections::HashMap, env, fs};

use tempfile::TempDir;

/// Env guard that restores previous env vars on drop.
pub struct EnvGuard {
    old: HashMap<String, Option<String>>,
}

impl EnvGuard {
    pub fn set(vars: &[(&str, Option<String>)]) -> Self {
        let mut old = HashMap::new();
        for (k, v) in vars {
            old.insert((*k).to_string(), env::var(k).ok());
            match v {
                Some(v) => env::set_var(k, v),
                None => env::remove_var(k),
            }
        }
        Self { old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (k, prev) in self.old.drain() {
            match prev {
                Some(v) => env::set_var(k, v),
                None => env::remove_var(k),
            }
        }
    }
}

/// Create a temp sandbox with its own HOME and XDG_DATA_HOME so config
/// resolution (and the diagnostic log file) never touch the real user dirs.
pub fn sandbox_env() -> (TempDir, EnvGuard) {
    let td = TempDir::new().expect("tempdir");
    let home = td.path().join("home");
    let data = td.path().join("data");
    fs::create_dir_all(&home).unwrap();
    fs::create_dir_all(&data).unwrap();

    let guard = EnvGuard::set(&[
        ("HOME", Some(home.to_string_lossy().to_string())),
        ("XDG_DATA_HOME", Some(data.to_string_lossy().to_string())),
    ]);

    (td, guard)
}

/// Write `dualview/bridge.json` under the sandbox data dir.
pub fn write_bridge_config(sandbox: &Path, json: &str) -> PathBuf {
    let dir = sandbox.join("data").join("dualview");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("bridge.json");
    fs::write(&path, json).unwrap();
    path
}
