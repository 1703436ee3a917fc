use serde::{Deserialize, Serialize};

/// Id of the container element the board is rendered into.
pub const MOUNT_POINT_ID: &str = "minesweeper";
pub const ROW_TAG: &str = "div";
pub const ROW_CLASS: &str = "row";
pub const CELL_TAG: &str = "a";
pub const CELL_CLASS: &str = "field";
/// Cells are anchors so they are focusable; the default navigation is suppressed.
pub const CELL_HREF: &str = "#";

/// Element names used when building the board tree.
///
/// Missing fields fall back to the constants above, so a partial JSON
/// document such as `{"mount_id": "board"}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub mount_id: String,
    pub row_tag: String,
    pub row_class: String,
    pub cell_tag: String,
    pub cell_class: String,
    pub cell_href: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            mount_id: MOUNT_POINT_ID.into(),
            row_tag: ROW_TAG.into(),
            row_class: ROW_CLASS.into(),
            cell_tag: CELL_TAG.into(),
            cell_class: CELL_CLASS.into(),
            cell_href: CELL_HREF.into(),
        }
    }
}

impl RenderConfig {
    /// Default configuration rendering into the element with `id`.
    pub fn with_mount_id(id: impl Into<String>) -> Self {
        Self {
            mount_id: id.into(),
            ..Self::default()
        }
    }
}
