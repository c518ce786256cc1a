// Host-side tests for the widget controller, driven through a recording host.

use glam::Vec2;
use orbit_core::{
    ActivationSource, AnchorRect, CapabilitySignals, DeferredAction, FrameHandle, FramePose,
    MenuState, TiltAngle, WidgetConfig, WidgetController, WidgetEvent, WidgetHost,
};

#[derive(Default)]
struct RecordingHost {
    viewport: Option<Vec2>,
    anchor: Option<AnchorRect>,
    radius: Option<f32>,
    signals: CapabilitySignals,
    links: bool,
    hidden: bool,

    poses: Vec<FramePose>,
    resets: usize,
    presented: Vec<bool>,
    trigger_focus: usize,
    link_focus: usize,
    deferred: Vec<(DeferredAction, u32)>,

    next_frame: i32,
    outstanding: Option<FrameHandle>,
}

impl RecordingHost {
    fn desktop() -> Self {
        Self {
            viewport: Some(Vec2::new(1000.0, 800.0)),
            // 40x40 trigger centred on (100, 100)
            anchor: Some(AnchorRect {
                left: 80.0,
                top: 80.0,
                width: 40.0,
                height: 40.0,
            }),
            radius: Some(220.0),
            links: true,
            ..Default::default()
        }
    }

    fn touch() -> Self {
        Self {
            signals: CapabilitySignals {
                max_touch_points: 5,
                ..Default::default()
            },
            ..Self::desktop()
        }
    }
}

impl WidgetHost for RecordingHost {
    fn viewport(&self) -> Option<Vec2> {
        self.viewport
    }
    fn anchor_rect(&self) -> Option<AnchorRect> {
        self.anchor
    }
    fn orbit_radius(&self) -> Option<f32> {
        self.radius
    }
    fn capability_signals(&self) -> CapabilitySignals {
        self.signals
    }
    fn has_links(&self) -> bool {
        self.links
    }
    fn page_hidden(&self) -> bool {
        self.hidden
    }
    fn apply_pose(&mut self, pose: &FramePose) {
        self.poses.push(*pose);
    }
    fn reset_pose(&mut self) {
        self.resets += 1;
    }
    fn present_menu(&mut self, open: bool) {
        self.presented.push(open);
    }
    fn focus_trigger(&mut self) {
        self.trigger_focus += 1;
    }
    fn focus_first_link(&mut self) {
        self.link_focus += 1;
    }
    fn request_frame(&mut self) -> Option<FrameHandle> {
        assert!(self.outstanding.is_none(), "second frame requested");
        self.next_frame += 1;
        let h = FrameHandle(self.next_frame);
        self.outstanding = Some(h);
        Some(h)
    }
    fn cancel_frame(&mut self, handle: FrameHandle) {
        assert_eq!(self.outstanding, Some(handle));
        self.outstanding = None;
    }
    fn defer(&mut self, action: DeferredAction, delay_ms: u32) {
        self.deferred.push((action, delay_ms));
    }
}

fn setup(mut host: RecordingHost) -> (WidgetController, RecordingHost) {
    let mut ctl = WidgetController::new(WidgetConfig::default(), true);
    ctl.init(&mut host);
    (ctl, host)
}

/// Deliver the outstanding animation frame, if any.
fn fire_frame(ctl: &mut WidgetController, host: &mut RecordingHost) -> bool {
    if host.outstanding.take().is_some() {
        ctl.dispatch(WidgetEvent::Frame, host);
        true
    } else {
        false
    }
}

fn move_to(ctl: &mut WidgetController, host: &mut RecordingHost, x: f32, y: f32) {
    ctl.dispatch(WidgetEvent::PointerMove { x, y }, host);
}

#[test]
fn desktop_init_starts_rendering() {
    let (ctl, host) = setup(RecordingHost::desktop());
    assert!(ctl.parallax_enabled());
    assert!(ctl.is_rendering());
    assert!(host.outstanding.is_some());
    assert_eq!(ctl.menu_state(), MenuState::Closed);
    assert_eq!(ctl.current_tilt(), TiltAngle::new(12.0, 0.0));
}

#[test]
fn frames_apply_integrated_pose_and_reschedule() {
    let (mut ctl, mut host) = setup(RecordingHost::desktop());
    move_to(&mut ctl, &mut host, 1000.0, 800.0);
    assert_eq!(ctl.target_tilt(), TiltAngle::new(19.5, -4.0));

    for _ in 0..3 {
        assert!(fire_frame(&mut ctl, &mut host));
    }
    assert_eq!(host.poses.len(), 3);
    let last = host.poses[2];
    assert_eq!(last.poster.rotate, ctl.current_tilt());
    assert_eq!(last.mark.rotate, ctl.current_tilt().inverted());
    assert_eq!(last.menu.rotate, ctl.current_tilt().inverted());
    assert!(host.outstanding.is_some());
}

#[test]
fn settles_to_base_after_pointer_leaves() {
    let (mut ctl, mut host) = setup(RecordingHost::desktop());
    move_to(&mut ctl, &mut host, 0.0, 0.0);
    for _ in 0..10 {
        fire_frame(&mut ctl, &mut host);
    }
    ctl.dispatch(WidgetEvent::PointerLeave, &mut host);
    assert_eq!(ctl.target_tilt(), TiltAngle::new(12.0, 0.0));

    for _ in 0..200 {
        fire_frame(&mut ctl, &mut host);
    }
    let c = ctl.current_tilt();
    assert!((c.x - 12.0).abs() < 1e-3 && c.y.abs() < 1e-3);
}

#[test]
fn proximity_scenario_open_then_close() {
    let (mut ctl, mut host) = setup(RecordingHost::desktop());
    // distance 200 against 220 * 1.2 = 264
    move_to(&mut ctl, &mut host, 300.0, 100.0);
    assert_eq!(ctl.menu_state(), MenuState::OpenProximity);
    // distance 300
    move_to(&mut ctl, &mut host, 400.0, 100.0);
    assert_eq!(ctl.menu_state(), MenuState::Closed);
    assert_eq!(host.presented, vec![true, false]);
}

#[test]
fn missing_orbit_radius_falls_back_to_default() {
    let mut host = RecordingHost::desktop();
    host.radius = None;
    let (mut ctl, mut host) = setup(host);
    // distance 250 is inside 220 * 1.2
    move_to(&mut ctl, &mut host, 350.0, 100.0);
    assert_eq!(ctl.menu_state(), MenuState::OpenProximity);
}

#[test]
fn measures_radius_on_every_check() {
    let (mut ctl, mut host) = setup(RecordingHost::desktop());
    move_to(&mut ctl, &mut host, 300.0, 100.0);
    assert_eq!(ctl.menu_state(), MenuState::OpenProximity);
    // layout shrank the orbit: 100 * 1.2 = 120 < 200
    host.radius = Some(100.0);
    move_to(&mut ctl, &mut host, 300.0, 100.0);
    assert_eq!(ctl.menu_state(), MenuState::Closed);
}

#[test]
fn missing_anchor_skips_proximity() {
    let mut host = RecordingHost::desktop();
    host.anchor = None;
    let (mut ctl, mut host) = setup(host);
    move_to(&mut ctl, &mut host, 100.0, 100.0);
    assert_eq!(ctl.menu_state(), MenuState::Closed);
    assert!(host.presented.is_empty());
}

#[test]
fn click_open_is_sticky_until_escape() {
    let (mut ctl, mut host) = setup(RecordingHost::desktop());
    ctl.dispatch(
        WidgetEvent::TriggerActivated(ActivationSource::Pointer),
        &mut host,
    );
    assert_eq!(ctl.menu_state(), MenuState::OpenManual);

    move_to(&mut ctl, &mut host, 900.0, 700.0);
    assert_eq!(ctl.menu_state(), MenuState::OpenManual);

    ctl.dispatch(WidgetEvent::Escape, &mut host);
    assert_eq!(ctl.menu_state(), MenuState::Closed);
    assert_eq!(host.trigger_focus, 1);
    assert_eq!(host.presented, vec![true, false]);
}

#[test]
fn repeated_close_has_no_side_effects() {
    let (mut ctl, mut host) = setup(RecordingHost::desktop());
    ctl.dispatch(WidgetEvent::Escape, &mut host);
    ctl.dispatch(
        WidgetEvent::DocumentClick {
            inside_widget: false,
        },
        &mut host,
    );
    ctl.dispatch(WidgetEvent::FocusOut { into_widget: false }, &mut host);
    ctl.dispatch(WidgetEvent::Deferred(DeferredAction::CloseMenu), &mut host);
    assert_eq!(ctl.menu_state(), MenuState::Closed);
    assert!(host.presented.is_empty());
    assert_eq!(host.trigger_focus, 0);
}

#[test]
fn clicks_and_focus_inside_widget_keep_menu_open() {
    let (mut ctl, mut host) = setup(RecordingHost::desktop());
    ctl.dispatch(
        WidgetEvent::TriggerActivated(ActivationSource::Pointer),
        &mut host,
    );
    ctl.dispatch(WidgetEvent::DocumentClick { inside_widget: true }, &mut host);
    ctl.dispatch(WidgetEvent::FocusOut { into_widget: true }, &mut host);
    assert_eq!(ctl.menu_state(), MenuState::OpenManual);

    ctl.dispatch(WidgetEvent::FocusOut { into_widget: false }, &mut host);
    assert_eq!(ctl.menu_state(), MenuState::Closed);
}

#[test]
fn outside_click_closes_proximity_open() {
    let (mut ctl, mut host) = setup(RecordingHost::desktop());
    move_to(&mut ctl, &mut host, 120.0, 120.0);
    assert_eq!(ctl.menu_state(), MenuState::OpenProximity);
    ctl.dispatch(
        WidgetEvent::DocumentClick {
            inside_widget: false,
        },
        &mut host,
    );
    assert_eq!(ctl.menu_state(), MenuState::Closed);
}

#[test]
fn link_click_closes_when_timer_fires() {
    let (mut ctl, mut host) = setup(RecordingHost::desktop());
    ctl.dispatch(
        WidgetEvent::TriggerActivated(ActivationSource::Pointer),
        &mut host,
    );
    ctl.dispatch(WidgetEvent::LinkActivated, &mut host);
    assert_eq!(host.deferred, vec![(DeferredAction::CloseMenu, 100)]);
    assert_eq!(ctl.menu_state(), MenuState::OpenManual);

    ctl.dispatch(WidgetEvent::Deferred(DeferredAction::CloseMenu), &mut host);
    assert_eq!(ctl.menu_state(), MenuState::Closed);
}

#[test]
fn keyboard_open_focuses_first_link_later() {
    let (mut ctl, mut host) = setup(RecordingHost::desktop());
    ctl.dispatch(
        WidgetEvent::TriggerActivated(ActivationSource::Keyboard),
        &mut host,
    );
    assert_eq!(ctl.menu_state(), MenuState::OpenManual);
    assert_eq!(host.deferred, vec![(DeferredAction::FocusFirstLink, 50)]);
    assert_eq!(host.link_focus, 0);

    ctl.dispatch(
        WidgetEvent::Deferred(DeferredAction::FocusFirstLink),
        &mut host,
    );
    assert_eq!(host.link_focus, 1);
}

#[test]
fn touch_disables_tilt_and_proximity_but_not_manual_open() {
    let (mut ctl, mut host) = setup(RecordingHost::touch());
    assert!(ctl.capabilities().is_touch);
    assert!(!ctl.parallax_enabled());
    assert!(!ctl.is_rendering());

    move_to(&mut ctl, &mut host, 100.0, 100.0);
    assert_eq!(ctl.target_tilt(), TiltAngle::new(12.0, 0.0));
    assert_eq!(ctl.menu_state(), MenuState::Closed);

    ctl.dispatch(
        WidgetEvent::Orientation {
            beta: Some(30.0),
            gamma: Some(30.0),
        },
        &mut host,
    );
    assert_eq!(ctl.target_tilt(), TiltAngle::new(12.0, 0.0));

    ctl.dispatch(
        WidgetEvent::TriggerActivated(ActivationSource::Pointer),
        &mut host,
    );
    assert_eq!(ctl.menu_state(), MenuState::OpenManual);
}

#[test]
fn coarse_pointer_counts_as_touch() {
    let mut host = RecordingHost::desktop();
    host.signals.coarse_pointer = true;
    let (ctl, _host) = setup(host);
    assert!(ctl.capabilities().is_touch);
    assert!(!ctl.parallax_enabled());
}

#[test]
fn orientation_with_null_reading_keeps_target() {
    let (mut ctl, mut host) = setup(RecordingHost::desktop());
    move_to(&mut ctl, &mut host, 1000.0, 400.0);
    let before = ctl.target_tilt();
    ctl.dispatch(
        WidgetEvent::Orientation {
            beta: None,
            gamma: Some(10.0),
        },
        &mut host,
    );
    assert_eq!(ctl.target_tilt(), before);
}

#[test]
fn orientation_last_write_wins() {
    let (mut ctl, mut host) = setup(RecordingHost::desktop());
    move_to(&mut ctl, &mut host, 1000.0, 400.0);
    ctl.dispatch(
        WidgetEvent::Orientation {
            beta: Some(45.0),
            gamma: Some(0.0),
        },
        &mut host,
    );
    assert_eq!(ctl.target_tilt(), TiltAngle::new(19.5, 0.0));
}

#[test]
fn reduced_motion_stops_loop_and_resets_pose() {
    let (mut ctl, mut host) = setup(RecordingHost::desktop());
    assert!(ctl.is_rendering());

    host.signals.reduced_motion = true;
    ctl.dispatch(WidgetEvent::ReducedMotionChanged, &mut host);
    assert!(!ctl.parallax_enabled());
    assert!(!ctl.is_rendering());
    assert!(host.outstanding.is_none());
    assert_eq!(host.resets, 1);

    // a second notification with the same preference does nothing new
    ctl.dispatch(WidgetEvent::ReducedMotionChanged, &mut host);
    assert_eq!(host.resets, 1);

    host.signals.reduced_motion = false;
    ctl.dispatch(WidgetEvent::ReducedMotionChanged, &mut host);
    assert!(ctl.parallax_enabled());
    assert!(ctl.is_rendering());
}

#[test]
fn resize_into_touch_disables_parallax() {
    let (mut ctl, mut host) = setup(RecordingHost::desktop());
    host.signals.touch_start = true;
    ctl.dispatch(WidgetEvent::Resize, &mut host);
    assert!(!ctl.is_rendering());
    assert_eq!(host.resets, 1);
}

#[test]
fn hidden_page_pauses_and_resumes_with_state() {
    let (mut ctl, mut host) = setup(RecordingHost::desktop());
    move_to(&mut ctl, &mut host, 0.0, 0.0);
    fire_frame(&mut ctl, &mut host);
    let tilt = ctl.current_tilt();

    ctl.dispatch(WidgetEvent::VisibilityChanged { hidden: true }, &mut host);
    assert!(!ctl.is_rendering());
    assert!(host.outstanding.is_none());

    // a frame that slipped through after cancel is ignored
    let poses = host.poses.len();
    ctl.dispatch(WidgetEvent::Frame, &mut host);
    assert_eq!(host.poses.len(), poses);
    assert_eq!(ctl.current_tilt(), tilt);

    // stopping twice is harmless
    ctl.dispatch(WidgetEvent::VisibilityChanged { hidden: true }, &mut host);

    ctl.dispatch(WidgetEvent::VisibilityChanged { hidden: false }, &mut host);
    assert!(ctl.is_rendering());
    assert_eq!(ctl.current_tilt(), tilt);
}

#[test]
fn visible_again_stays_stopped_when_disabled() {
    let (mut ctl, mut host) = setup(RecordingHost::touch());
    ctl.dispatch(WidgetEvent::VisibilityChanged { hidden: true }, &mut host);
    ctl.dispatch(WidgetEvent::VisibilityChanged { hidden: false }, &mut host);
    assert!(!ctl.is_rendering());
}

#[test]
fn starts_paused_on_hidden_page() {
    let mut host = RecordingHost::desktop();
    host.hidden = true;
    let (mut ctl, mut host) = setup(host);
    assert!(ctl.parallax_enabled());
    assert!(!ctl.is_rendering());

    ctl.dispatch(WidgetEvent::VisibilityChanged { hidden: false }, &mut host);
    assert!(ctl.is_rendering());
}

#[test]
fn missing_poster_disables_proximity_but_not_manual_open() {
    let mut host = RecordingHost::desktop();
    let mut ctl = WidgetController::new(WidgetConfig::default(), false);
    ctl.init(&mut host);
    assert!(!ctl.parallax_enabled());
    assert!(!ctl.is_rendering());

    move_to(&mut ctl, &mut host, 120.0, 100.0);
    assert_eq!(ctl.menu_state(), MenuState::Closed);
    assert!(host.presented.is_empty());

    ctl.dispatch(
        WidgetEvent::TriggerActivated(ActivationSource::Pointer),
        &mut host,
    );
    assert_eq!(ctl.menu_state(), MenuState::OpenManual);
    assert_eq!(host.presented, vec![true]);
}

#[test]
fn reduced_motion_disables_proximity_but_not_keyboard_open() {
    let mut host = RecordingHost::desktop();
    host.signals.reduced_motion = true;
    let (mut ctl, mut host) = setup(host);
    assert!(!ctl.parallax_enabled());

    move_to(&mut ctl, &mut host, 100.0, 100.0);
    assert_eq!(ctl.menu_state(), MenuState::Closed);
    assert!(host.presented.is_empty());

    ctl.dispatch(
        WidgetEvent::TriggerActivated(ActivationSource::Keyboard),
        &mut host,
    );
    assert_eq!(ctl.menu_state(), MenuState::OpenManual);
    assert_eq!(host.deferred, vec![(DeferredAction::FocusFirstLink, 50)]);
}

#[test]
fn reduced_motion_turned_on_stops_proximity() {
    let (mut ctl, mut host) = setup(RecordingHost::desktop());
    host.signals.reduced_motion = true;
    ctl.dispatch(WidgetEvent::ReducedMotionChanged, &mut host);

    move_to(&mut ctl, &mut host, 100.0, 100.0);
    assert_eq!(ctl.menu_state(), MenuState::Closed);
}

#[test]
fn link_activated_while_closed_still_schedules_close() {
    let (mut ctl, mut host) = setup(RecordingHost::desktop());
    ctl.dispatch(WidgetEvent::LinkActivated, &mut host);
    assert_eq!(host.deferred, vec![(DeferredAction::CloseMenu, 100)]);
    assert_eq!(ctl.menu_state(), MenuState::Closed);

    move_to(&mut ctl, &mut host, 100.0, 100.0);
    assert_eq!(ctl.menu_state(), MenuState::OpenProximity);
    ctl.dispatch(WidgetEvent::Deferred(DeferredAction::CloseMenu), &mut host);
    assert_eq!(ctl.menu_state(), MenuState::Closed);
}
