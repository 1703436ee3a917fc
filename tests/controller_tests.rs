use minesweeper_view::{Controller, ControllerCall, RecordingController};

#[test]
fn test_records_in_call_order() {
    let controller = RecordingController::new();
    controller.toggle_flag(2, 0);
    controller.open(0, 1);
    assert_eq!(
        controller.take(),
        vec![
            ControllerCall::ToggleFlag { x: 2, y: 0 },
            ControllerCall::Open { x: 0, y: 1 },
        ]
    );
    assert!(controller.calls().is_empty());
}

#[test]
fn test_calls_serialize_with_action_tag() {
    let json = serde_json::to_string(&ControllerCall::ToggleFlag { x: 1, y: 2 }).unwrap();
    assert_eq!(json, r#"{"action":"toggle_flag","x":1,"y":2}"#);
}
