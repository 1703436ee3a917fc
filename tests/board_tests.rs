use minesweeper_view::Board;

#[test]
fn test_parse_example_board() {
    let board = Board::parse("1 1 0\nF . .\n");
    assert_eq!(board.row_count(), 2);
    assert_eq!(board.rows()[0], vec!["1", "1", "0"]);
    assert_eq!(board.rows()[1], vec!["F", ".", "."]);
    assert_eq!(board.get(0, 1), Some("F"));
    assert_eq!(board.get(2, 0), Some("0"));
    assert_eq!(board.get(3, 0), None);
}

#[test]
fn test_empty_text_has_no_rows() {
    let board = Board::parse("");
    assert!(board.is_empty());
    assert_eq!(board.cell_count(), 0);
    assert_eq!(board.width(), 0);
}

#[test]
fn test_blank_rows_are_kept_empty() {
    let board = Board::parse("a b\n   \n\nc\n");
    assert_eq!(board.row_count(), 4);
    assert!(board.rows()[1].is_empty());
    assert!(board.rows()[2].is_empty());
    assert_eq!(board.rows()[3], vec!["c"]);
}

#[test]
fn test_irregular_whitespace_is_collapsed() {
    let board = Board::parse("\t 1  \t 2 3   \r\n  4\t5 \r\n");
    assert_eq!(board.rows()[0], vec!["1", "2", "3"]);
    assert_eq!(board.rows()[1], vec!["4", "5"]);
    assert_eq!(board.row_count(), 2);
}

#[test]
fn test_ragged_board_is_accepted() {
    let board = Board::parse("1 2 3\n4\n5 6\n");
    assert!(!board.is_rectangular());
    assert_eq!(board.width(), 3);
    assert_eq!(board.cell_count(), 6);
    assert!(Board::parse("1 2\n3 4\n").is_rectangular());
}

#[test]
fn test_labels_are_opaque() {
    let board = Board::parse("🟪 🚩 💣\n⬜ 1 ?\n");
    assert_eq!(board.get(1, 0), Some("🚩"));
    assert_eq!(board.get(2, 1), Some("?"));
}

#[test]
fn test_from_str_matches_parse() {
    let board: Board = "x y\nz".parse().unwrap();
    assert_eq!(board, Board::parse("x y\nz\n"));
    assert_eq!(
        board,
        Board::from_rows(vec![vec!["x".into(), "y".into()], vec!["z".into()]])
    );
}

#[test]
fn test_display_reparses_to_same_board() {
    let board = Board::parse("  1   2\t3 \n\nF .\n");
    assert_eq!(board.to_string(), "1 2 3\n\nF .\n");
    assert_eq!(Board::parse(&board.to_string()), board);
}

#[test]
fn test_iter_cells_is_row_major() {
    let board = Board::parse("a b\nc\n");
    let cells: Vec<_> = board.iter_cells().collect();
    assert_eq!(cells, vec![(0, 0, "a"), (1, 0, "b"), (0, 1, "c")]);
}

#[test]
fn test_serializes_rows() {
    let json = serde_json::to_value(Board::parse("1 F\n\n")).unwrap();
    assert_eq!(json, serde_json::json!({"rows": [["1", "F"], []]}));
}
