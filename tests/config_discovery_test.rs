use indoc::indoc;
use mueller::config::{discover_config, load_config_from, Preset, CONFIG_FILE_NAME};
use mueller::{OutputFormat, ShellState, StokesVector};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_discovers_config_in_ancestor_directory() {
    let root = TempDir::new().unwrap();
    fs::write(
        root.path().join(CONFIG_FILE_NAME),
        indoc! {r#"
            [defaults]
            preset = "horizontal-polarizer"

            [output]
            format = "markdown"
        "#},
    )
    .unwrap();
    let nested = root.path().join("a").join("b");
    fs::create_dir_all(&nested).unwrap();

    let config = discover_config(nested);
    assert_eq!(config.defaults().preset, Some(Preset::HorizontalPolarizer));
    assert_eq!(config.output().format, Some(OutputFormat::Markdown));

    let calc = ShellState::from_defaults(&config.defaults())
        .calculate()
        .unwrap();
    assert_eq!(calc.output, StokesVector::new(0.5, 0.5, 0.0, 0.0));
}

#[test]
fn test_nearest_config_wins() {
    let root = TempDir::new().unwrap();
    fs::write(
        root.path().join(CONFIG_FILE_NAME),
        "[defaults]\nvector = \"2, 0, 0, 0\"\n",
    )
    .unwrap();
    let child = root.path().join("child");
    fs::create_dir_all(&child).unwrap();
    fs::write(
        child.join(CONFIG_FILE_NAME),
        "[defaults]\nvector = \"3, 0, 0, 0\"\n",
    )
    .unwrap();

    let config = discover_config(child);
    assert_eq!(config.defaults().vector, "3, 0, 0, 0");
}

#[test]
fn test_invalid_discovered_config_is_skipped() {
    let root = TempDir::new().unwrap();
    fs::write(
        root.path().join(CONFIG_FILE_NAME),
        "[defaults]\nvector = \"2, 0, 0, 0\"\n",
    )
    .unwrap();
    let child = root.path().join("child");
    fs::create_dir_all(&child).unwrap();
    fs::write(child.join(CONFIG_FILE_NAME), "[defaults\n").unwrap();

    let config = discover_config(child);
    assert_eq!(config.defaults().vector, "2, 0, 0, 0");
}

#[test]
fn test_explicit_config_errors_are_reported() {
    let root = TempDir::new().unwrap();
    let path = root.path().join("broken.toml");
    fs::write(&path, "[defaults]\nvector = \"1, 0, 0\"\n").unwrap();

    let err = load_config_from(&path).unwrap_err();
    assert!(err.to_string().contains("expected 4 values, found 3"));

    let missing = root.path().join("missing.toml");
    assert!(load_config_from(&missing).is_err());
}
