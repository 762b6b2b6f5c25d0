use tempfile::TempDir;
use tethermarks::config::Config;
use tethermarks::editor::mode::MarkScope;

#[test]
fn test_config_defaults() {
    let config = Config::default();

    assert_eq!(config.theme, "default-dark");
    assert!(config.open_mark_in_new_tab);
    assert!(!config.experimental_goto);
    assert_eq!(config.harpoon_register_list, "hjkl");
    assert!(!config.register_sort_by_list);
    assert!(config.harpoon_register_sort_by_list);
    assert!(config.harpoon_register_gap_removal);
}

#[test]
fn test_default_register_list() {
    let config = Config::default();
    let registers = config.registers(MarkScope::General);

    assert_eq!(registers.len(), 62);
    assert_eq!(registers.get(0), Some("a"));
    assert_eq!(registers.get(26), Some("A"));
    assert_eq!(registers.get(61), Some("9"));
}

#[test]
fn test_keybind_overrides_default_to_empty() {
    let config = Config::default();

    assert!(config.list_up.is_empty());
    assert!(config.list_down.is_empty());
    assert!(config.list_select.is_empty());
    assert!(config.list_cancel.is_empty());
    assert!(config.list_delete.is_empty());
    assert!(config.list_undo.is_empty());
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let toml_str = r#"
        harpoon_register_list = "asdf"
        experimental_goto = true
        list_delete = "ctrl+x"
    "#;

    let config: Config = toml::from_str(toml_str).unwrap();

    assert_eq!(config.harpoon_register_list, "asdf");
    assert!(config.experimental_goto);
    assert_eq!(config.list_delete, "ctrl+x");
    // untouched fields
    assert_eq!(config.theme, "default-dark");
    assert!(config.open_mark_in_new_tab);
    assert!(config.harpoon_register_gap_removal);
}

#[test]
fn test_config_serialization() {
    let config = Config {
        theme: "nord".to_string(),
        open_mark_in_new_tab: false,
        register_sort_by_list: true,
        ..Config::default()
    };

    let toml_str = toml::to_string(&config).unwrap();
    assert!(toml_str.contains("theme = \"nord\""));
    assert!(toml_str.contains("open_mark_in_new_tab = false"));

    let parsed: Config = toml::from_str(&toml_str).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_save_to_and_load_from() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let config = Config {
        harpoon_register_list: "1234".to_string(),
        ..Config::default()
    };
    config.save_to(&path).unwrap();

    assert_eq!(Config::load_from(&path), config);
}

#[test]
fn test_load_from_invalid_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "theme = [not toml").unwrap();

    assert_eq!(Config::load_from(&path), Config::default());
}

#[test]
fn test_load_from_missing_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    assert_eq!(
        Config::load_from(&dir.path().join("missing.toml")),
        Config::default()
    );
}
