use pinchguard_services::{LayoutAlgorithm, SettingsRegistry};
use std::fs;

#[tokio::test]
async fn test_load_from_paths_later_file_wins() {
    let test_dir = std::env::temp_dir().join("pinchguard_settings_test");
    if test_dir.exists() {
        fs::remove_dir_all(&test_dir).unwrap();
    }
    fs::create_dir_all(&test_dir).unwrap();

    let system = test_dir.join("system.toml");
    fs::write(
        &system,
        "[general]\nlog_level = \"warn\"\n\n[surface]\nlayout_algorithm = \"single-column\"\n",
    )
    .unwrap();

    let user = test_dir.join("user.toml");
    fs::write(&user, "[surface]\nlayout_algorithm = \"text-autosizing\"\nload_with_overview_mode = false\n").unwrap();

    let broken = test_dir.join("broken.toml");
    fs::write(&broken, "[surface\n").unwrap();

    let missing = test_dir.join("missing.toml");

    let mut registry = SettingsRegistry::with_defaults();
    let results = registry
        .load_from_paths_async(vec![system, user, broken, missing])
        .await;

    assert!(results[0].is_ok());
    assert!(results[1].is_ok());
    assert!(results[2].is_err(), "Broken file should fail to parse");
    assert!(results[3].is_err(), "Missing file should fail to read");

    let profile = registry.surface_profile();
    assert_eq!(profile.layout_algorithm, LayoutAlgorithm::TextAutosizing);
    assert!(!profile.load_with_overview_mode);
    assert_eq!(registry.log_level(), log::LevelFilter::Warn);

    fs::remove_dir_all(&test_dir).unwrap();
}
