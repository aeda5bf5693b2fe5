use paged_geometry::ScrollMetrics;
use paged_gesture::{BoundaryDirection, GestureArbiter, PropagationDecision, TouchPoint};

const NO_OVERFLOW: ScrollMetrics = ScrollMetrics {
    scroll_top: 0.0,
    scroll_height: 500.0,
    client_height: 500.0,
};

const AT_TOP: ScrollMetrics = ScrollMetrics {
    scroll_top: 0.0,
    scroll_height: 1000.0,
    client_height: 500.0,
};

const IN_MIDDLE: ScrollMetrics = ScrollMetrics {
    scroll_top: 320.0,
    scroll_height: 1000.0,
    client_height: 500.0,
};

const AT_BOTTOM: ScrollMetrics = ScrollMetrics {
    scroll_top: 500.0,
    scroll_height: 1000.0,
    client_height: 500.0,
};

fn touch(x: f64, y: f64) -> [TouchPoint; 1] {
    [TouchPoint::new(x, y)]
}

#[test]
fn scenario_a_content_without_overflow_lets_paging_happen() {
    let mut arbiter = GestureArbiter::new();
    arbiter.touch_start(&touch(100.0, 200.0));

    let decision = arbiter.touch_move(&touch(105.0, 240.0), &NO_OVERFLOW);

    assert_eq!(
        decision,
        PropagationDecision {
            stop_propagation: false,
            prevent_default: false,
        }
    );
    assert!(arbiter.session().is_responder_captured());
}

#[test]
fn scenario_b_downward_drag_at_top_releases_to_paging() {
    let mut arbiter = GestureArbiter::new();
    arbiter.touch_start(&touch(100.0, 200.0));

    let decision = arbiter.touch_move(&touch(102.0, 230.0), &AT_TOP);

    assert!(arbiter.session().is_at_boundary());
    assert_eq!(arbiter.session().boundary_direction(), BoundaryDirection::Top);
    assert!(!decision.stop_propagation);
}

#[test]
fn scenario_c_upward_drag_at_top_returns_to_content() {
    let mut arbiter = GestureArbiter::new();
    arbiter.touch_start(&touch(100.0, 200.0));

    let decision = arbiter.touch_move(&touch(102.0, 170.0), &AT_TOP);

    assert!(!arbiter.session().is_at_boundary());
    assert_eq!(arbiter.session().boundary_direction(), BoundaryDirection::None);
    assert!(decision.stop_propagation);
    assert!(decision.prevent_default);
}

#[test]
fn scenario_d_touch_end_outside_capture_stops_and_rechecks() {
    let mut arbiter = GestureArbiter::new();
    arbiter.touch_start(&touch(100.0, 400.0));
    // Scroll down into the content, leaving the top boundary
    arbiter.touch_move(&touch(100.0, 300.0), &AT_TOP);
    arbiter.touch_move(&touch(100.0, 100.0), &IN_MIDDLE);
    assert!(!arbiter.session().is_responder_captured());

    // The finger lifts exactly at the bottom edge
    let decision = arbiter.touch_end(Some(&AT_BOTTOM));

    assert!(decision.stop_propagation);
    assert!(!decision.prevent_default);
    assert_eq!(arbiter.session().boundary_direction(), BoundaryDirection::Bottom);
    assert!(!arbiter.session().is_ended());
}

#[test]
fn scenario_e_page_change_to_higher_index() {
    let mut arbiter = GestureArbiter::new();
    arbiter.touch_start(&touch(0.0, 0.0));
    arbiter.touch_move(&touch(0.0, 50.0), &NO_OVERFLOW);
    assert!(arbiter.session().is_responder_captured());

    arbiter.page_changed(2, 1);

    let session = arbiter.session();
    assert_eq!(session.boundary_direction(), BoundaryDirection::Top);
    assert!(session.is_at_boundary());
    assert!(!session.is_responder_captured());
    assert_eq!(arbiter.current_page(), 2);
}

#[test]
fn page_change_to_lower_index_rests_on_bottom() {
    let mut arbiter = GestureArbiter::new();
    arbiter.page_changed(1, 2);
    assert_eq!(arbiter.session().boundary_direction(), BoundaryDirection::Bottom);

    // Arriving from below, an upward drag pages onward
    arbiter.touch_start(&touch(0.0, 300.0));
    let decision = arbiter.touch_move(&touch(0.0, 260.0), &AT_BOTTOM);
    assert!(decision.allows_propagation());
    assert!(arbiter.session().is_responder_captured());
}

/// Dragging back into content from an edge drops the boundary even though
/// the content cannot scroll any further in that direction yet.
#[test]
fn pinned_boundary_release_when_dragging_back_into_content() {
    let mut arbiter = GestureArbiter::new();
    arbiter.page_changed(1, 0);
    arbiter.touch_start(&touch(0.0, 300.0));

    let decision = arbiter.touch_move(&touch(0.0, 280.0), &AT_TOP);
    assert_eq!(decision, PropagationDecision::SUPPRESS);
    assert!(!arbiter.session().is_at_boundary());

    // Reversing within the same gesture no longer pages: the boundary is gone
    let decision = arbiter.touch_move(&touch(0.0, 330.0), &AT_TOP);
    assert_eq!(decision, PropagationDecision::SUPPRESS);
    assert!(!arbiter.session().is_at_boundary());
}

#[test]
fn momentum_scroll_commits_boundary_after_touch_end() {
    let mut arbiter = GestureArbiter::new();
    arbiter.touch_start(&touch(0.0, 400.0));
    arbiter.touch_move(&touch(0.0, 350.0), &AT_TOP);
    arbiter.touch_move(&touch(0.0, 200.0), &IN_MIDDLE);

    arbiter.touch_end(Some(&IN_MIDDLE));
    assert!(arbiter.session().is_ended());
    assert!(!arbiter.session().is_at_boundary());

    let still_moving = ScrollMetrics::new(440.0, 1000.0, 500.0);
    arbiter.scroll(&still_moving);
    assert!(arbiter.session().is_ended());

    let decision = arbiter.scroll(&AT_BOTTOM);
    assert_eq!(decision, PropagationDecision::ALLOW);
    assert_eq!(arbiter.session().boundary_direction(), BoundaryDirection::Bottom);
    assert!(!arbiter.session().is_ended());

    // Next gesture pulls further past the bottom and pages
    arbiter.touch_start(&touch(0.0, 400.0));
    let decision = arbiter.touch_move(&touch(0.0, 340.0), &AT_BOTTOM);
    assert!(decision.allows_propagation());
}

#[test]
fn missing_touch_point_is_a_noop() {
    let mut arbiter = GestureArbiter::new();
    arbiter.touch_start(&touch(10.0, 10.0));
    let before = arbiter.session();

    assert_eq!(arbiter.touch_start(&[]), PropagationDecision::ALLOW);
    assert_eq!(arbiter.touch_move(&[], &AT_TOP), PropagationDecision::ALLOW);
    assert_eq!(arbiter.session(), before);
}
