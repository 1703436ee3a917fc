use log::LevelFilter;
use minesweeper_view::{parse_level, RenderConfig, CELL_HREF, ROW_CLASS, ROW_TAG};

#[test]
fn test_default_uses_well_known_mount_point() {
    let config = RenderConfig::default();
    assert_eq!(config.mount_id, "minesweeper");
    assert_eq!(config.cell_tag, "a");
    assert_eq!(config.cell_href, CELL_HREF);
}

#[test]
fn test_partial_json_keeps_defaults() {
    let config: RenderConfig =
        serde_json::from_str(r#"{"mount_id": "board", "cell_class": "cell"}"#).unwrap();
    assert_eq!(config.mount_id, "board");
    assert_eq!(config.cell_class, "cell");
    assert_eq!(config.row_class, ROW_CLASS);
    assert_eq!(config.row_tag, ROW_TAG);
    assert_eq!(
        config,
        RenderConfig {
            mount_id: "board".into(),
            cell_class: "cell".into(),
            ..RenderConfig::default()
        }
    );
}

#[test]
fn test_with_mount_id() {
    let config = RenderConfig::with_mount_id("game");
    assert_eq!(config.mount_id, "game");
    assert_eq!(config.row_tag, ROW_TAG);
}

#[test]
fn test_parses_log_level_names() {
    assert_eq!(parse_level("debug"), Some(LevelFilter::Debug));
    assert_eq!(parse_level(" TRACE "), Some(LevelFilter::Trace));
    assert_eq!(parse_level("loud"), None);
}
