use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|e| e.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_cadenza_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("CADENZA_CONFIG_PATH", "/tmp/cadenza-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        PathBuf::from("/tmp/cadenza-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    assert_eq!(
        default_config_path().unwrap(),
        PathBuf::from("/tmp/xdg-config-home")
            .join("cadenza")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    assert_eq!(
        default_config_path().unwrap(),
        PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("cadenza")
            .join("config.toml")
    );
}

#[test]
fn defaults_match_the_classic_player() {
    let s = Settings::default();
    assert_eq!(s.library.extensions, vec!["mp3".to_string()]);
    assert!(s.library.dir.is_none());
    assert_eq!(s.playback.volume, 50.0);
    assert_eq!(s.playback.volume_step, 10.0);
    assert_eq!(s.playback.seek_seconds, 10);
    assert!(!s.playback.shuffle);
    assert!(!s.playback.loop_enabled);
    assert!(!s.playback.auto_advance);
    assert_eq!(s.state.file, PathBuf::from("last_track.txt"));
    assert!(s.validate().is_ok());
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[library]
dir = "/srv/music"
extensions = ["mp3", "flac"]
include_hidden = false

[playback]
volume = 80.0
volume_step = 5.0
seek_seconds = 15
shuffle = true
loop_enabled = true
auto_advance = true
shuffle_seed = 7

[state]
file = "/tmp/cadenza-last"

[input]
poll_interval_ms = 50

[log]
file = "/tmp/cadenza.log"
filter = "debug"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("CADENZA_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("CADENZA__PLAYBACK__VOLUME");

    let s = Settings::load().unwrap();
    assert_eq!(s.library.dir, Some(PathBuf::from("/srv/music")));
    assert_eq!(s.library.extensions, vec!["mp3".to_string(), "flac".to_string()]);
    assert!(!s.library.include_hidden);
    assert!(s.library.follow_links);
    assert_eq!(s.playback.volume, 80.0);
    assert_eq!(s.playback.volume_step, 5.0);
    assert_eq!(s.playback.seek_seconds, 15);
    assert!(s.playback.shuffle);
    assert!(s.playback.loop_enabled);
    assert!(s.playback.auto_advance);
    assert_eq!(s.playback.shuffle_seed, Some(7));
    assert_eq!(s.state.file, PathBuf::from("/tmp/cadenza-last"));
    assert_eq!(s.input.poll_interval_ms, 50);
    assert_eq!(s.log.file, PathBuf::from("/tmp/cadenza.log"));
    assert_eq!(s.log.filter, "debug");
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[playback]
volume = 80.0
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("CADENZA_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("CADENZA__PLAYBACK__VOLUME", "30");

    let s = Settings::load().unwrap();
    assert_eq!(s.playback.volume, 30.0);
}

#[test]
fn settings_env_reads_extensions_as_a_comma_list() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("absent.toml");

    let _g1 = EnvGuard::set("CADENZA_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("CADENZA__LIBRARY__EXTENSIONS", "mp3,flac");
    let _g3 = EnvGuard::set("CADENZA__PLAYBACK__SEEK_SECONDS", "5");

    let s = Settings::load().unwrap();
    assert_eq!(s.library.extensions, vec!["mp3".to_string(), "flac".to_string()]);
    assert_eq!(s.playback.seek_seconds, 5);
}

#[test]
fn validate_rejects_out_of_range_values() {
    let mut s = Settings::default();
    s.playback.volume = 120.0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.playback.volume_step = 0.0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.playback.seek_seconds = 0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.library.extensions = vec![" . ".into()];
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.input.poll_interval_ms = 0;
    assert!(s.validate().is_err());
}
