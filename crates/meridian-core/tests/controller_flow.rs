// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Behavioral tests for the controller state machine: command ordering,
//! staleness handling, input coalescing, and the startup flows.

use meridian_core::{
    Cell, CommandRequest, CommandResult, ControllerState, Coordinate, DisplayText, MapController,
    Msg, PanDirection, Rgb, TextImage, TileStyle, ViewportAction, Viewport, ZoomDirection,
};

fn controller_at(center: Coordinate, zoom: u8) -> MapController {
    MapController::new(Viewport::new(center, zoom), TileStyle::OpenStreetMaps, 80, 24)
}

fn frame() -> TextImage {
    let cell = Cell {
        top: Rgb::new(0, 0, 0),
        bottom: Rgb::new(255, 255, 255),
    };
    TextImage::from_rows(vec![vec![cell]])
}

fn render_ok(generation: u64) -> Msg {
    Msg::Command(CommandResult::RenderSucceeded {
        generation,
        image: frame(),
    })
}

fn zoom_in() -> Msg {
    Msg::Input(ViewportAction::Zoom(ZoomDirection::In))
}

fn pan(direction: PanDirection) -> Msg {
    Msg::Input(ViewportAction::Pan(direction))
}

#[test]
fn first_run_dispatches_an_initial_render() {
    let mut controller = controller_at(Coordinate::new(0.0, 0.0), 10);
    let request = controller.start().expect("initial render");
    assert!(matches!(request, CommandRequest::Render { generation: 1, .. }));
    assert_eq!(controller.state(), ControllerState::AwaitingRender);

    // Once a frame exists, settling emits nothing further.
    assert_eq!(controller.update(render_ok(1)), None);
    assert_eq!(controller.state(), ControllerState::Idle);
    assert!(matches!(controller.display(), DisplayText::Frame(_)));
}

#[test]
fn startup_query_geocodes_then_renders_exactly_once_each() {
    let mut viewport = Viewport::default();
    viewport.set_query("New York");
    let mut controller = MapController::new(viewport, TileStyle::OpenStreetMaps, 80, 24);

    let first = controller.start().expect("geocode dispatch");
    let generation = first.generation();
    assert!(matches!(first, CommandRequest::Geocode { ref query, .. } if query == "New York"));
    assert_eq!(controller.state(), ControllerState::AwaitingGeocode);

    let second = controller
        .update(Msg::Command(CommandResult::GeocodeSucceeded {
            generation,
            coordinate: Coordinate::new(40.7128, -74.0060),
        }))
        .expect("render dispatch");
    assert_eq!(controller.state(), ControllerState::AwaitingRender);
    match second {
        CommandRequest::Render { center, generation, .. } => {
            assert_eq!(center, Coordinate::new(40.7128, -74.0060));
            // Exactly two commands dispatched so far.
            assert_eq!(generation, 2);
            assert_eq!(controller.update(render_ok(generation)), None);
        }
        other => panic!("expected a render request, got {other:?}"),
    }
    assert_eq!(controller.state(), ControllerState::Idle);
    assert!(matches!(controller.display(), DisplayText::Frame(_)));
}

#[test]
fn geocode_failure_shows_the_message_and_dispatches_nothing() {
    let mut viewport = Viewport::default();
    viewport.set_query("nowhere at all");
    let mut controller = MapController::new(viewport, TileStyle::OpenStreetMaps, 80, 24);

    let request = controller.start().expect("geocode dispatch");
    let follow_up = controller.update(Msg::Command(CommandResult::GeocodeFailed {
        generation: request.generation(),
        message: "Location not found".into(),
    }));

    assert_eq!(follow_up, None);
    assert_eq!(controller.state(), ControllerState::Idle);
    assert_eq!(
        controller.display(),
        &DisplayText::Notice("Location not found".into())
    );
}

#[test]
fn render_failure_shows_the_message_and_returns_to_idle() {
    let mut controller = controller_at(Coordinate::new(0.0, 0.0), 10);
    let request = controller.start().unwrap();

    let follow_up = controller.update(Msg::Command(CommandResult::RenderFailed {
        generation: request.generation(),
        message: "tile compositing failed: 503".into(),
    }));

    // Display is no longer blank, so nothing re-dispatches.
    assert_eq!(follow_up, None);
    assert_eq!(controller.state(), ControllerState::Idle);
    assert_eq!(
        controller.display(),
        &DisplayText::Notice("tile compositing failed: 503".into())
    );

    // The controller still accepts input afterwards.
    assert!(controller.update(zoom_in()).is_some());
}

#[test]
fn stale_render_result_is_discarded() {
    let mut controller = controller_at(Coordinate::new(0.0, 0.0), 10);
    let first = controller.start().unwrap();
    controller.update(render_ok(first.generation()));

    // A newer command goes out; then a completion for the older generation
    // straggles in.
    let newer = controller.update(zoom_in()).unwrap();
    let stale = Msg::Command(CommandResult::RenderFailed {
        generation: first.generation(),
        message: "stale pixels".into(),
    });
    assert_eq!(controller.update(stale), None);

    // Still awaiting the newer render, display untouched.
    assert_eq!(controller.state(), ControllerState::AwaitingRender);
    assert!(matches!(controller.display(), DisplayText::Frame(_)));

    // The current-generation result still folds normally.
    assert_eq!(controller.update(render_ok(newer.generation())), None);
    assert_eq!(controller.state(), ControllerState::Idle);
}

#[test]
fn twenty_zoom_ins_from_fifteen_clamp_at_sixteen_with_a_render_each() {
    let mut controller = controller_at(Coordinate::new(0.0, 0.0), 15);
    let initial = controller.start().unwrap();
    controller.update(render_ok(initial.generation()));

    let mut renders = 0;
    for _ in 0..20 {
        let request = controller.update(zoom_in()).expect("every keystroke is a hit");
        assert!(matches!(request, CommandRequest::Render { .. }));
        renders += 1;
        controller.update(render_ok(request.generation()));
    }

    assert_eq!(renders, 20);
    assert_eq!(controller.viewport().zoom(), 16);
}

#[test]
fn input_while_busy_coalesces_latest_wins() {
    let mut controller = controller_at(Coordinate::new(0.0, 0.0), 10);
    let initial = controller.start().unwrap();

    // Two keys land while the initial render is still in flight; only the
    // later one survives.
    assert_eq!(controller.update(pan(PanDirection::North)), None);
    assert_eq!(controller.update(zoom_in()), None);

    let follow_up = controller.update(render_ok(initial.generation())).expect("coalesced dispatch");
    match follow_up {
        CommandRequest::Render { zoom, center, generation, .. } => {
            assert_eq!(zoom, 11, "the zoom key won");
            assert_eq!(center.lat, 0.0, "the pan key was dropped");
            // Nothing further queued once this render resolves.
            assert_eq!(controller.update(render_ok(generation)), None);
        }
        other => panic!("expected a render request, got {other:?}"),
    }
}

#[test]
fn input_during_geocode_waits_for_the_follow_up_render() {
    let mut viewport = Viewport::default();
    viewport.set_query("Berlin");
    let mut controller = MapController::new(viewport, TileStyle::OpenStreetMaps, 80, 24);
    let geocode = controller.start().unwrap();

    assert_eq!(controller.update(pan(PanDirection::East)), None);

    // Geocode resolves: the render for the resolved center goes out first,
    // the queued key replays only after it completes.
    let render = controller
        .update(Msg::Command(CommandResult::GeocodeSucceeded {
            generation: geocode.generation(),
            coordinate: Coordinate::new(52.52, 13.405),
        }))
        .unwrap();
    let replay = controller.update(render_ok(render.generation())).expect("queued pan replays");
    match replay {
        CommandRequest::Render { center, .. } => assert!(center.lng > 13.405),
        other => panic!("expected a render request, got {other:?}"),
    }
}

#[test]
fn resize_while_idle_renders_with_the_new_grid() {
    let mut controller = controller_at(Coordinate::new(0.0, 0.0), 10);
    let initial = controller.start().unwrap();
    controller.update(render_ok(initial.generation()));

    let request = controller
        .update(Msg::Resize {
            width: 120,
            height: 40,
        })
        .expect("resize re-renders");
    assert!(
        matches!(request, CommandRequest::Render { width: 120, height: 40, .. }),
        "render snapshots the new grid"
    );
}

#[test]
fn resize_while_busy_defers_exactly_one_render() {
    let mut controller = controller_at(Coordinate::new(0.0, 0.0), 10);
    let initial = controller.start().unwrap();

    assert_eq!(controller.update(Msg::Resize { width: 100, height: 30 }), None);
    assert_eq!(controller.update(Msg::Resize { width: 90, height: 28 }), None);

    let deferred = controller.update(render_ok(initial.generation())).expect("deferred render");
    match deferred {
        CommandRequest::Render { width, height, generation, .. } => {
            assert_eq!((width, height), (90, 28), "latest size wins");
            assert_eq!(controller.update(render_ok(generation)), None, "only one deferred render");
        }
        other => panic!("expected a render request, got {other:?}"),
    }
}

#[test]
fn clamped_zoom_key_still_dispatches_a_render() {
    let mut controller = controller_at(Coordinate::new(0.0, 0.0), 16);
    let initial = controller.start().unwrap();
    controller.update(render_ok(initial.generation()));

    let request = controller.update(zoom_in()).expect("hit despite clamping");
    assert!(matches!(request, CommandRequest::Render { zoom: 16, .. }));
}

#[test]
fn pan_requests_snapshot_the_mutated_center() {
    let mut controller = controller_at(Coordinate::new(10.0, 20.0), 4);
    let initial = controller.start().unwrap();
    controller.update(render_ok(initial.generation()));

    let step = controller.viewport().pan_step();
    let request = controller.update(pan(PanDirection::North)).unwrap();
    match request {
        CommandRequest::Render { center, .. } => {
            assert!((center.lat - (10.0 + step)).abs() < 1e-12);
            assert_eq!(center.lng, 20.0);
        }
        other => panic!("expected a render request, got {other:?}"),
    }
}
