//! Platform directory resolution.
//!
//! Follows the XDG base directory convention: `$XDG_CONFIG_HOME` and
//! `$XDG_DATA_HOME` when set, otherwise `~/.config` and `~/.local/share` under
//! the home directory reported by [`dirs::home_dir`]. Without any home
//! directory the system temp directory is used, never the working directory.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Subdirectory name used under the config and data roots.
pub const APP_DIR: &str = "dashframe";

fn xdg_dir(var: &str, fallback: &[&str]) -> PathBuf {
    resolve_base(env::var_os(var), dirs::home_dir(), fallback).join(APP_DIR)
}

fn resolve_base(xdg: Option<OsString>, home: Option<PathBuf>, fallback: &[&str]) -> PathBuf {
    xdg.filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| home.map(|home| fallback.iter().fold(home, |p, part| p.join(part))))
        .unwrap_or_else(env::temp_dir)
}

/// Directory holding `config.toml` and custom themes.
///
/// ```
/// use dashframe::infrastructure::config_dir;
///
/// assert!(config_dir().ends_with("dashframe"));
/// ```
#[must_use]
pub fn config_dir() -> PathBuf {
    xdg_dir("XDG_CONFIG_HOME", &[".config"])
}

/// Directory holding the rotating log file.
#[must_use]
pub fn data_dir() -> PathBuf {
    xdg_dir("XDG_DATA_HOME", &[".local", "share"])
}

/// Expands a leading `~` to the home directory.
///
/// Paths without a tilde, or when no home directory is known, are returned as is.
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    expand_with(path, dirs::home_dir())
}

fn expand_with(path: &str, home: Option<PathBuf>) -> PathBuf {
    let Some(home) = home else {
        return PathBuf::from(path);
    };
    if path == "~" {
        home
    } else if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest)
    } else {
        Path::new(path).to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_paths_are_untouched() {
        assert_eq!(expand_tilde("/etc/dashframe.toml"), PathBuf::from("/etc/dashframe.toml"));
        assert_eq!(expand_tilde("relative/theme.toml"), PathBuf::from("relative/theme.toml"));
    }

    #[test]
    fn tilde_expands_under_home() {
        let home = PathBuf::from("/home/alex");
        assert_eq!(expand_with("~/themes/x.toml", Some(home.clone())), home.join("themes/x.toml"));
        assert_eq!(expand_with("~", Some(home.clone())), home);
        assert_eq!(expand_with("~/x", None), PathBuf::from("~/x"));
    }

    #[test]
    fn xdg_variable_wins_over_home() {
        let base = resolve_base(
            Some(OsString::from("/xdg/config")),
            Some(PathBuf::from("/home/alex")),
            &[".config"],
        );
        assert_eq!(base, PathBuf::from("/xdg/config"));
    }

    #[test]
    fn empty_xdg_variable_falls_back_to_home() {
        let base = resolve_base(
            Some(OsString::new()),
            Some(PathBuf::from("/home/alex")),
            &[".local", "share"],
        );
        assert_eq!(base, PathBuf::from("/home/alex/.local/share"));
    }

    #[test]
    fn missing_home_never_resolves_to_working_directory() {
        let base = resolve_base(None, None, &[".config"]);
        assert_eq!(base, env::temp_dir());
        assert_ne!(base, PathBuf::from("."));
    }

    #[test]
    fn directories_end_in_app_dir() {
        assert!(config_dir().ends_with(APP_DIR));
        assert!(data_dir().ends_with(APP_DIR));
        assert!(!config_dir().starts_with("."));
    }
}
