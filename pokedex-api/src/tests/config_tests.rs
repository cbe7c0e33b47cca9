use super::*;

#[test]
fn defaults_without_any_source() {
    let config = ClientConfig::resolve(None, None, None).unwrap();
    assert_eq!(config, ClientConfig::default());
    assert_eq!(config.base_url, "https://pokeapi.co/api/v2");
    assert_eq!(config.page_size, 20);
}

#[test]
fn env_overrides_file() {
    let file = CatalogSection {
        base_url: Some("http://file.example/api".to_string()),
        page_size: Some(50),
    };
    let config = ClientConfig::resolve(
        Some("http://env.example/api/".to_string()),
        Some("10".to_string()),
        Some(file),
    )
    .unwrap();
    assert_eq!(config.base_url, "http://env.example/api");
    assert_eq!(config.page_size, 10);
}

#[test]
fn file_fills_missing_env() {
    let file = CatalogSection {
        base_url: None,
        page_size: Some(50),
    };
    let config = ClientConfig::resolve(None, None, Some(file)).unwrap();
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.page_size, 50);
}

#[test]
fn invalid_env_page_size_is_config_error() {
    let err = ClientConfig::resolve(None, Some("lots".to_string()), None).unwrap_err();
    assert!(matches!(err, CatalogError::Config(_)));
}

#[test]
fn zero_page_size_rejected() {
    assert!(matches!(
        ClientConfig::default().with_page_size(0),
        Err(CatalogError::Config(_))
    ));
}

#[test]
fn save_then_load_from_path() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("nested").join("config.toml");

    let config = ClientConfig::default()
        .with_base_url("http://localhost:8080/api/v2")
        .with_page_size(40)
        .unwrap();
    save_to_path(&config, &path).unwrap();

    assert_eq!(ClientConfig::load_from_path(&path).unwrap(), config);
}

#[test]
fn defaults_are_not_persisted() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("config.toml");
    save_to_path(&ClientConfig::default(), &path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(!written.contains("base_url"));
    assert!(!written.contains("page_size"));
}

#[test]
fn malformed_file_is_ignored() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("config.toml");
    std::fs::write(&path, "[catalog\npage_size = ").unwrap();

    assert_eq!(
        ClientConfig::load_from_path(&path).unwrap(),
        ClientConfig::default()
    );
}
