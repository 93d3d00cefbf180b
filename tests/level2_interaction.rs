//! Level 2: Press, Drag & Release Tests
//!
//! Tests the interaction cycle through the host entry points: press
//! notifications, drag movement, release, and the deferred release when the
//! cursor leaves the panel mid-press.

mod common;

use common::harness::PanelHarness;
use slint_graph_panel::Point;

#[test]
fn test_press_notifies_with_node_position() {
    let mut harness = PanelHarness::with_dialogue_nodes(1);
    harness.panel.set_node_position(0, Point::new(120.0, 80.0));

    harness.press(0);
    harness.tick();

    assert_eq!(harness.events.pressed, vec![(0, Point::new(120.0, 80.0))]);
    assert!(harness.events.released.is_empty());
}

#[test]
fn test_press_without_pointer_history_is_not_cancelled() {
    // A press arriving before any pointer event must not be mistaken for
    // cursor loss and cancelled on the next ticks.
    let mut harness = PanelHarness::with_dialogue_nodes(1);
    harness.press(0);
    harness.tick();
    harness.tick();

    assert_eq!(harness.events.pressed.len(), 1);
    assert!(harness.events.released.is_empty());
}

#[test]
fn test_second_press_during_gesture_is_ignored() {
    let mut harness = PanelHarness::with_dialogue_nodes(2);
    harness.move_cursor(400.0, 300.0);

    harness.press(0);
    harness.press(1);
    harness.tick();

    assert_eq!(harness.events.pressed.len(), 1);
    assert_eq!(harness.events.pressed[0].0, 0);
}

#[test]
fn test_drag_follows_cursor_delta() {
    let harness = PanelHarness::with_dialogue_nodes(1);
    harness.panel.set_node_position(0, Point::new(100.0, 100.0));

    harness.move_cursor(150.0, 150.0);
    harness.press(0);
    harness.move_cursor(170.0, 140.0);
    harness.move_cursor(180.0, 160.0);

    // Cumulative cursor delta is (30, 10)
    assert_eq!(
        harness.panel.node_position(0),
        Some(Point::new(130.0, 110.0))
    );
}

#[test]
fn test_drag_without_press_moves_nothing() {
    let harness = PanelHarness::with_dialogue_nodes(1);
    harness.panel.set_node_position(0, Point::new(100.0, 100.0));

    harness.move_cursor(150.0, 150.0);
    harness.move_cursor(250.0, 250.0);

    assert_eq!(
        harness.panel.node_position(0),
        Some(Point::new(100.0, 100.0))
    );
}

#[test]
fn test_non_dragable_node_still_notifies_but_stays_put() {
    let mut harness = PanelHarness::with_dialogue_nodes(1);
    harness.panel.set_node_position(0, Point::new(100.0, 100.0));
    harness.panel.set_node_dragable(0, false);

    harness.move_cursor(150.0, 150.0);
    harness.press(0);
    harness.move_cursor(300.0, 300.0);
    harness.release(0);
    harness.tick();

    assert_eq!(harness.panel.node_position(0), Some(Point::new(100.0, 100.0)));
    // Pinned nodes still participate in the notification cycle
    assert_eq!(harness.events.pressed.len(), 1);
    assert_eq!(harness.events.released.len(), 1);
}

#[test]
fn test_release_reports_final_position_and_requests_redraw() {
    let mut harness = PanelHarness::with_dialogue_nodes(1);
    harness.panel.set_node_position(0, Point::new(100.0, 100.0));

    harness.move_cursor(150.0, 150.0);
    harness.press(0);
    harness.move_cursor(200.0, 150.0);
    harness.release(0);
    harness.tick();

    assert_eq!(harness.events.released, vec![(0, Point::new(150.0, 100.0))]);
    assert!(harness.panel.take_redraw_request());
    assert!(!harness.panel.take_redraw_request());
}

#[test]
fn test_off_panel_release_defers_one_tick() {
    let mut harness = PanelHarness::with_dialogue_nodes(1);
    harness.move_cursor(150.0, 150.0);
    harness.press(0);
    harness.tick();
    harness.events.clear();

    harness.move_cursor_off_panel();

    // Tick 1: node hidden, no notification yet
    let list = harness.tick();
    assert!(list.nodes.is_empty());
    assert_eq!(harness.events.total(), 0);

    // Tick 2: release fires exactly once and drawing resumes
    let list = harness.tick();
    assert_eq!(list.nodes.len(), 1);
    assert_eq!(harness.events.released.len(), 1);
    assert!(harness.panel.take_redraw_request());

    // Tick 3: nothing further
    harness.tick();
    assert_eq!(harness.events.released.len(), 1);
}

#[test]
fn test_cursor_returning_does_not_resurrect_press() {
    let mut harness = PanelHarness::with_dialogue_nodes(1);
    harness.move_cursor(150.0, 150.0);
    harness.press(0);
    harness.tick();
    harness.events.clear();

    harness.move_cursor_off_panel();
    harness.tick();
    harness.move_cursor(150.0, 150.0);
    harness.tick();

    assert_eq!(harness.events.released.len(), 1);
    // Dragging after the deferred release moves nothing
    let before = harness.panel.node_position(0);
    harness.move_cursor(300.0, 300.0);
    assert_eq!(harness.panel.node_position(0), before);
}

#[test]
fn test_press_after_gesture_completes_starts_fresh() {
    let mut harness = PanelHarness::with_dialogue_nodes(2);
    harness.move_cursor(150.0, 150.0);
    harness.press(0);
    harness.release(0);
    harness.tick();
    harness.events.clear();

    harness.press(1);
    harness.tick();
    assert_eq!(harness.events.pressed.len(), 1);
    assert_eq!(harness.events.pressed[0].0, 1);
}

#[test]
fn test_stale_window_id_after_removal_is_ignored() {
    let mut harness = PanelHarness::with_dialogue_nodes(1);
    let stale_id = harness.panel.window_id(0);
    harness.panel.remove_node(0);

    harness.panel.node_pressed(stale_id);
    harness.tick();
    assert_eq!(harness.events.total(), 0);
}
