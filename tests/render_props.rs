use std::rc::Rc;

use minesweeper_view::document::{Document, HeadlessDocument};
use minesweeper_view::{BoardRenderer, ControllerCall, RecordingController};
use proptest::prelude::*;

fn rows() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec("[0-9F.]{1,2}", 0..7), 0..7)
}

fn to_text(rows: &[Vec<String>]) -> String {
    rows.iter().map(|row| format!("{}\n", row.join("  "))).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn rendered_tree_mirrors_board(rows in rows()) {
        let doc = HeadlessDocument::with_mount("minesweeper");
        let controller = Rc::new(RecordingController::new());
        let renderer = BoardRenderer::new(doc.clone(), controller.clone());
        renderer.render(&to_text(&rows)).unwrap();

        let mount = doc.get_element_by_id("minesweeper").unwrap();
        let rendered = mount.children();
        prop_assert_eq!(rendered.len(), rows.len());
        for (y, (row_el, row)) in rendered.iter().zip(&rows).enumerate() {
            let cells = row_el.children();
            prop_assert_eq!(cells.len(), row.len());
            for (x, (cell, label)) in cells.iter().zip(row).enumerate() {
                prop_assert_eq!(&cell.text(), label);
                prop_assert!(cell.click().default_prevented);
                prop_assert!(cell.context_menu().default_prevented);
                prop_assert_eq!(
                    controller.take(),
                    vec![ControllerCall::Open { x, y }, ControllerCall::ToggleFlag { x, y }]
                );
            }
        }
    }

    #[test]
    fn second_render_supersedes_first(first in rows(), second in rows()) {
        let doc = HeadlessDocument::with_mount("minesweeper");
        let controller = Rc::new(RecordingController::new());
        let renderer = BoardRenderer::new(doc.clone(), controller.clone());
        renderer.render(&to_text(&first)).unwrap();
        renderer.render(&to_text(&second)).unwrap();

        let fresh = HeadlessDocument::with_mount("minesweeper");
        let other = BoardRenderer::new(fresh.clone(), Rc::new(RecordingController::new()));
        other.render(&to_text(&second)).unwrap();

        prop_assert_eq!(
            doc.get_element_by_id("minesweeper").unwrap().snapshot(),
            fresh.get_element_by_id("minesweeper").unwrap().snapshot()
        );
    }
}
