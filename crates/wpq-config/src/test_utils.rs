use std::path::PathBuf;

use crate::config::CONFIG_PATH;

pub fn with_env<F>(vars: Vec<(&str, &str)>, f: F)
where
    F: FnOnce(),
{
    let old_vars: Vec<_> = vars
        .iter()
        .map(|(k, _)| (*k, std::env::var(k).ok()))
        .collect();

    for (key, value) in &vars {
        std::env::set_var(key, value);
    }

    f();

    for (key, old_value) in old_vars {
        match old_value {
            Some(v) => std::env::set_var(key, v),
            None => std::env::remove_var(key),
        }
    }
}

/// Points [`CONFIG_PATH`] at `path` while `f` runs.
pub fn with_config_path<F>(path: PathBuf, f: F)
where
    F: FnOnce(),
{
    let old_path = std::mem::replace(&mut *CONFIG_PATH.write().unwrap(), path);
    f();
    *CONFIG_PATH.write().unwrap() = old_path;
}
