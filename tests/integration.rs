// SPDX-License-Identifier: MPL-2.0
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::{Duration, Instant};
use tempfile::tempdir;
use tube_lens::config::{self, Config};
use tube_lens::domain::video::PlayerState;
use tube_lens::error::PlayerError;
use tube_lens::ui::shutter::{Effect, Message};
use tube_lens::ui::state::OverlayTimeout;
use tube_lens::ui::{ControlsLayout, ProgressBar, TouchShutter};
use tube_lens::video_player::{
    format_duration, resolve_id, resolve_id_trimmed, PlayerController, PlayerFlags,
    SurfaceEvent, VideoMetadata,
};

const ID: &str = "dQw4w9WgXcQ";

fn ready_controller(flags: PlayerFlags) -> Rc<PlayerController> {
    let controller = Rc::new(PlayerController::new(ID, flags));
    controller.handle_surface_event(SurfaceEvent::Ready);
    controller.handle_surface_event(SurfaceEvent::Metadata(VideoMetadata {
        video_id: ID.to_string(),
        title: "Never Gonna Give You Up".to_string(),
        author: "Rick Astley".to_string(),
        duration: Duration::from_secs(212),
    }));
    controller
}

#[test]
fn test_resolve_id_examples() {
    assert_eq!(
        resolve_id_trimmed("https://www.youtube.com/watch?v=dQw4w9WgXcQ").as_deref(),
        Some(ID)
    );
    assert_eq!(
        resolve_id_trimmed("https://youtu.be/dQw4w9WgXcQ").as_deref(),
        Some(ID)
    );
    assert_eq!(
        resolve_id_trimmed("https://www.youtube.com/embed/dQw4w9WgXcQ").as_deref(),
        Some(ID)
    );
    assert_eq!(resolve_id_trimmed(ID).as_deref(), Some(ID));
    assert_eq!(resolve_id_trimmed("https://example.com/video"), None);
    assert_eq!(resolve_id(" dQw4w9WgXcQ ", false), None);
}

#[test]
fn test_format_duration_examples() {
    assert_eq!(format_duration(Duration::from_secs(125)), "02:05");
    assert_eq!(format_duration(Duration::from_secs(3725)), "01:02:05");
}

#[test]
fn test_seek_clamps_into_known_duration() {
    let controller = ready_controller(PlayerFlags::default());

    controller.seek_to_millis(-1);
    assert_eq!(controller.progress().position, Duration::ZERO);

    controller.seek_to(Duration::from_secs(10_000));
    assert_eq!(controller.progress().position, Duration::from_secs(212));
}

#[test]
fn test_listeners_fan_out_in_order_and_detach() {
    let controller = ready_controller(PlayerFlags::default());
    let log = Rc::new(RefCell::new(Vec::new()));

    let ids: Vec<_> = (0..4)
        .map(|n| {
            let log = Rc::clone(&log);
            controller.add_listener(move || log.borrow_mut().push(n))
        })
        .collect();

    controller.toggle_full_screen_mode();
    assert_eq!(*log.borrow(), vec![0, 1, 2, 3]);

    assert!(controller.remove_listener(ids[2]));
    assert!(!controller.remove_listener(ids[2]));
    log.borrow_mut().clear();

    controller.toggle_full_screen_mode();
    assert_eq!(*log.borrow(), vec![0, 1, 3]);
}

#[test]
fn test_subscription_guard_detaches_on_drop() {
    let controller = ready_controller(PlayerFlags::default());
    let calls = Rc::new(Cell::new(0));

    {
        let calls = Rc::clone(&calls);
        let _subscription = controller.subscribe(move || calls.set(calls.get() + 1));
        controller.mute();
    }
    controller.un_mute();

    assert_eq!(calls.get(), 1);
}

#[test]
fn test_buffering_round_trip_restores_intent() {
    for intent in [PlayerState::Playing, PlayerState::Paused] {
        let controller = ready_controller(PlayerFlags::default());
        controller.handle_surface_event(SurfaceEvent::StateChanged(intent));
        controller.handle_surface_event(SurfaceEvent::StateChanged(PlayerState::Buffering));
        controller.handle_surface_event(SurfaceEvent::BufferingComplete);

        assert_eq!(controller.value().player_state, intent);
    }
}

#[test]
fn test_auto_hide_timer() {
    let controller = ready_controller(PlayerFlags::default());
    let mut shutter = TouchShutter::new(&controller, OverlayTimeout::new(3));
    let start = Instant::now();

    // Before the timeout the controls stay.
    shutter.handle(Message::Tapped(start));
    shutter.handle(Message::Tick(start + Duration::from_secs(2)));
    assert!(controller.value().is_controls_visible);

    // Past the timeout with no drag they hide.
    assert_eq!(
        shutter.handle(Message::Tick(start + Duration::from_secs(3))),
        Effect::ControlsVisibilityChanged(false)
    );
    assert!(!controller.value().is_controls_visible);

    // A drag in progress at expiry keeps them.
    let again = start + Duration::from_secs(10);
    shutter.handle(Message::Tapped(again));
    shutter.handle(Message::DragStarted { x: 0.0, at: again });
    shutter.handle(Message::Tick(again + Duration::from_secs(4)));
    assert!(controller.value().is_controls_visible);
    assert!(controller.value().is_dragging);
}

#[test]
fn test_auto_hide_waits_for_scrubber_drag() {
    let controller = ready_controller(PlayerFlags::default());
    let mut shutter = TouchShutter::new(&controller, OverlayTimeout::new(3));
    let start = Instant::now();
    shutter.handle(Message::Tapped(start));

    // The progress bar scrubber reports its drag through the controller.
    controller.set_dragging(true);
    shutter.handle(Message::Tick(start + Duration::from_secs(4)));
    assert!(controller.value().is_controls_visible);

    controller.set_dragging(false);
    shutter.handle(Message::Tapped(start + Duration::from_secs(5)));
    shutter.handle(Message::Tapped(start + Duration::from_secs(5)));
    assert_eq!(
        shutter.handle(Message::Tick(start + Duration::from_secs(8))),
        Effect::ControlsVisibilityChanged(false)
    );
}

#[test]
fn test_error_path_and_recovery() {
    let controller = ready_controller(PlayerFlags::default());
    controller.handle_surface_event(SurfaceEvent::Error(101));

    let layout = ControlsLayout::from_controller(&controller);
    assert_eq!(layout.error, Some(PlayerError::EmbeddingNotAllowed(101)));

    controller.load("https://youtu.be/aaaaaaaaaaa", Duration::ZERO, None);
    assert!(controller.error().is_none());
    assert_eq!(controller.video_id(), "aaaaaaaaaaa");

    controller.handle_surface_event(SurfaceEvent::Ready);
    controller.play();
    assert_eq!(controller.value().player_state, PlayerState::Playing);
}

#[test]
fn test_progress_bar_tracks_controller() {
    let controller = ready_controller(PlayerFlags::default());
    let bar = Rc::new(RefCell::new(ProgressBar::from_controller(&controller)));

    let weak = Rc::downgrade(&controller);
    let sink = Rc::clone(&bar);
    let _subscription = controller.subscribe_progress(move || {
        if let Some(controller) = weak.upgrade() {
            *sink.borrow_mut() = ProgressBar::from_controller(&controller);
        }
    });

    controller.handle_surface_event(SurfaceEvent::Progress {
        position: Duration::from_secs(62),
        buffered: 0.5,
    });

    let bar = bar.borrow();
    assert_eq!(bar.position_label, "01:02");
    assert_eq!(bar.remaining_label, "- 02:30");
    assert_eq!(bar.buffered, 0.5);
}

#[test]
fn test_config_drives_overlay_timeout() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let config = Config {
        overlay_timeout_secs: Some(5),
        ..Config::default()
    };
    config::save_to_path(&config, &path).expect("Failed to write config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config file");

    let controller = ready_controller(PlayerFlags::default());
    let mut shutter = TouchShutter::new(&controller, loaded.overlay_timeout());
    let start = Instant::now();
    shutter.handle(Message::Tapped(start));

    assert_eq!(shutter.deadline(), Some(start + Duration::from_secs(5)));
}
