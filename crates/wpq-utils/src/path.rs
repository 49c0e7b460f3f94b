//! Resolution of user-supplied paths.

use std::{env, iter::Peekable, path::PathBuf, str::Chars};

use crate::error::{PathError, PathResult};

/// Resolves a path string that may contain environment variables.
///
/// Expands `$VAR` and `${VAR}`, replaces a leading `~` with the home
/// directory and makes relative paths absolute against the current working
/// directory.
///
/// # Errors
///
/// * [`PathError::Empty`] if the path is empty
/// * [`PathError::CurrentDir`] if the current directory cannot be determined
/// * [`PathError::MissingEnvVar`] if a referenced variable is undefined
/// * [`PathError::UnclosedVariable`] if a `${` is never closed
///
/// # Example
///
/// ```
/// use wpq_utils::{error::PathResult, path::resolve_path};
///
/// fn main() -> PathResult<()> {
///     let resolved = resolve_path("$HOME/blog.sqlite")?;
///     assert!(resolved.is_absolute());
///     Ok(())
/// }
/// ```
pub fn resolve_path(path: &str) -> PathResult<PathBuf> {
    let path = path.trim();

    if path.is_empty() {
        return Err(PathError::Empty);
    }

    let path_buf = PathBuf::from(expand_variables(path)?);

    if path_buf.is_absolute() {
        Ok(path_buf)
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(path_buf))
            .map_err(|err| PathError::CurrentDir { source: err })
    }
}

/// Returns the user's home directory.
///
/// Uses `HOME`, falling back to `/home/$USER` and finally `/`.
pub fn home_dir() -> PathBuf {
    env::var("HOME").map(PathBuf::from).unwrap_or_else(|_| {
        env::var("USER")
            .map(|user| PathBuf::from(format!("/home/{user}")))
            .unwrap_or_else(|_| PathBuf::from("/"))
    })
}

/// Returns `XDG_CONFIG_HOME`, defaulting to `$HOME/.config`.
pub fn xdg_config_home() -> PathBuf {
    env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
}

fn expand_variables(path: &str) -> PathResult<String> {
    let mut result = String::with_capacity(path.len());
    let mut chars = path.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '$' => {
                if chars.peek() == Some(&'{') {
                    chars.next();
                    let var_name = consume_until(&mut chars, '}')?;
                    expand_env_var(&var_name, &mut result, path)?;
                } else {
                    let var_name = consume_var_name(&mut chars);
                    if var_name.is_empty() {
                        result.push('$');
                    } else {
                        expand_env_var(&var_name, &mut result, path)?;
                    }
                }
            }
            '~' if result.is_empty() => result.push_str(&home_dir().to_string_lossy()),
            _ => result.push(c),
        }
    }

    Ok(result)
}

fn consume_until(chars: &mut Peekable<Chars>, delimiter: char) -> PathResult<String> {
    let mut var_name = String::new();

    for c in chars.by_ref() {
        if c == delimiter {
            return Ok(var_name);
        }
        var_name.push(c);
    }

    Err(PathError::UnclosedVariable {
        input: format!("${{{var_name}"),
    })
}

fn consume_var_name(chars: &mut Peekable<Chars>) -> String {
    let mut var_name = String::new();

    while let Some(c) = chars.next_if(|c| c.is_alphanumeric() || *c == '_') {
        var_name.push(c);
    }

    var_name
}

fn expand_env_var(var_name: &str, result: &mut String, original: &str) -> PathResult<()> {
    match var_name {
        "HOME" => result.push_str(&home_dir().to_string_lossy()),
        "XDG_CONFIG_HOME" => result.push_str(&xdg_config_home().to_string_lossy()),
        _ => {
            let value = env::var(var_name).map_err(|_| PathError::MissingEnvVar {
                input: original.into(),
                var: var_name.into(),
            })?;
            result.push_str(&value);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    fn setup_test_env(vars: &[(&str, &str)]) {
        for (var, value) in vars {
            env::set_var(var, value);
        }
    }

    fn cleanup_test_env(vars: &[&str]) {
        for key in vars {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_expand_variables() {
        setup_test_env(&[("WPQ_TEST_VAR", "value"), ("WPQ_TEST_OTHER", "other")]);

        assert_eq!(expand_variables("$WPQ_TEST_VAR/path").unwrap(), "value/path");
        assert_eq!(expand_variables("${WPQ_TEST_VAR}/path").unwrap(), "value/path");
        assert_eq!(
            expand_variables("$WPQ_TEST_VAR/${WPQ_TEST_OTHER}").unwrap(),
            "value/other"
        );

        cleanup_test_env(&["WPQ_TEST_VAR", "WPQ_TEST_OTHER"]);
    }

    #[test]
    #[serial]
    fn test_expand_variables_errors() {
        assert!(matches!(
            expand_variables("${WPQ_TEST_VAR"),
            Err(PathError::UnclosedVariable { .. })
        ));
        assert!(matches!(
            expand_variables("$WPQ_THIS_VAR_DOESNT_EXIST"),
            Err(PathError::MissingEnvVar { .. })
        ));
    }

    #[test]
    #[serial]
    fn test_expand_variables_edge_cases() {
        setup_test_env(&[("HOME", "/tmp/home")]);

        assert_eq!(expand_variables("path/$").unwrap(), "path/$");
        assert_eq!(expand_variables("path/$!x").unwrap(), "path/$!x");
        assert_eq!(expand_variables("~/blog").unwrap(), "/tmp/home/blog");
        assert_eq!(expand_variables("a/~/b").unwrap(), "a/~/b");

        cleanup_test_env(&["HOME"]);
    }

    #[test]
    #[serial]
    fn test_consume_var_name() {
        let mut chars = "VAR_NAME_123/extra".chars().peekable();
        assert_eq!(consume_var_name(&mut chars), "VAR_NAME_123");
        assert_eq!(chars.next(), Some('/'));
    }

    #[test]
    #[serial]
    fn test_resolve_path() {
        setup_test_env(&[("HOME", "/tmp/home")]);

        assert!(matches!(resolve_path("  "), Err(PathError::Empty)));
        assert_eq!(
            resolve_path("/srv/blog.sqlite").unwrap(),
            PathBuf::from("/srv/blog.sqlite")
        );
        assert_eq!(
            resolve_path("relative/blog.sqlite").unwrap(),
            env::current_dir().unwrap().join("relative/blog.sqlite")
        );
        assert_eq!(resolve_path("~").unwrap(), PathBuf::from("/tmp/home"));
        assert_eq!(
            resolve_path("$HOME/blog.sqlite").unwrap(),
            PathBuf::from("/tmp/home/blog.sqlite")
        );

        cleanup_test_env(&["HOME"]);
    }

    #[test]
    #[serial]
    fn test_xdg_config_home() {
        setup_test_env(&[("HOME", "/tmp/home")]);
        cleanup_test_env(&["XDG_CONFIG_HOME"]);
        assert_eq!(xdg_config_home(), PathBuf::from("/tmp/home/.config"));

        setup_test_env(&[("XDG_CONFIG_HOME", "/tmp/config")]);
        assert_eq!(xdg_config_home(), PathBuf::from("/tmp/config"));

        cleanup_test_env(&["XDG_CONFIG_HOME", "HOME"]);
    }

    #[test]
    #[serial]
    fn test_home_dir_fallback() {
        let home = env::var("HOME").ok();
        cleanup_test_env(&["HOME"]);
        setup_test_env(&[("USER", "wpq")]);

        assert_eq!(home_dir(), PathBuf::from("/home/wpq"));

        if let Some(home) = home {
            setup_test_env(&[("HOME", &home)]);
        }
    }

    #[test]
    #[serial]
    fn test_resolve_path_without_cwd() {
        let temp_dir = tempfile::tempdir().unwrap();
        let gone = temp_dir.path().join("gone");
        std::fs::create_dir(&gone).unwrap();

        let original_cwd = env::current_dir().unwrap();
        env::set_current_dir(&gone).unwrap();
        std::fs::remove_dir(&gone).unwrap();

        let result = resolve_path("relative/path");
        env::set_current_dir(original_cwd).unwrap();

        assert!(matches!(result, Err(PathError::CurrentDir { .. })));
    }
}
