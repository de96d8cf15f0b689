use fiscal_core::config::{Config, ConfigManager};

#[test]
fn load_returns_defaults_when_missing() {
    let dir = tempfile::tempdir().unwrap();
    let manager = ConfigManager::with_base(dir.path().to_path_buf()).unwrap();

    let config = manager.load().unwrap();
    assert_eq!(config.locale, "es-AR");
    assert_eq!(config.currency, "ARS");
    assert!(!manager.path().exists());
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let manager = ConfigManager::with_base(dir.path().to_path_buf()).unwrap();

    let config = Config {
        locale: "en-US".into(),
        currency: "USD".into(),
    };
    manager.save(&config).unwrap();

    let loaded = manager.load().unwrap();
    assert_eq!(loaded.locale, "en-US");
    assert_eq!(loaded.currency, "USD");
    assert!(manager.path().exists());
}
