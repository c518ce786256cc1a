//! The single owned widget instance.
//!
//! All input arrives as [`WidgetEvent`]s through [`WidgetController::dispatch`];
//! the controller reads layout from and writes presentation to a
//! [`WidgetHost`] within that same call.

use crate::capability::Capabilities;
use crate::config::WidgetConfig;
use crate::event::WidgetEvent;
use crate::host::WidgetHost;
use crate::mapping;
use crate::menu::{MenuEffect, MenuEffects, MenuMachine, MenuState};
use crate::proximity;
use crate::render_loop::{FramePose, RenderLoop};
use crate::tilt::{TiltAngle, TiltIntegrator};
use glam::Vec2;

#[derive(Debug)]
pub struct WidgetController {
    config: WidgetConfig,
    caps: Capabilities,
    /// False when the page has no poster; parallax then never runs.
    poster_available: bool,
    hidden: bool,
    tilt: TiltIntegrator,
    menu: MenuMachine,
    render_loop: RenderLoop,
}

impl WidgetController {
    pub fn new(config: WidgetConfig, poster_available: bool) -> Self {
        let base = mapping::rest_target(&config.parallax);
        Self {
            tilt: TiltIntegrator::at_rest(base),
            menu: MenuMachine::new(config.timing),
            render_loop: RenderLoop::default(),
            caps: Capabilities::default(),
            poster_available,
            hidden: false,
            config,
        }
    }

    /// Detect capabilities and start the render loop when parallax is allowed.
    pub fn init(&mut self, host: &mut impl WidgetHost) {
        self.hidden = host.page_hidden();
        self.refresh_capabilities(host);
        log::info!(
            "[widget] ready touch={} reduced_motion={} parallax={}",
            self.caps.is_touch,
            self.caps.reduced_motion,
            self.config.parallax.enabled
        );
    }

    pub fn dispatch(&mut self, event: WidgetEvent, host: &mut impl WidgetHost) {
        match event {
            WidgetEvent::PointerMove { x, y } => self.on_pointer_move(Vec2::new(x, y), host),
            WidgetEvent::PointerLeave => {
                if self.config.parallax.enabled {
                    self.tilt
                        .set_target(mapping::rest_target(&self.config.parallax));
                }
            }
            WidgetEvent::Orientation { beta, gamma } => {
                if !self.config.parallax.enabled {
                    return;
                }
                if let Some(t) = mapping::orientation_target(beta, gamma, &self.config.parallax) {
                    self.tilt.set_target(t);
                }
            }
            WidgetEvent::TriggerActivated(source) => {
                let fx = self.menu.on_activate(source, host.has_links());
                apply_menu_effects(fx, host);
            }
            WidgetEvent::Escape => {
                let fx = self.menu.on_escape();
                apply_menu_effects(fx, host);
            }
            WidgetEvent::DocumentClick { inside_widget } => {
                if !inside_widget {
                    let fx = self.menu.on_outside_click();
                    apply_menu_effects(fx, host);
                }
            }
            WidgetEvent::LinkActivated => {
                let fx = self.menu.on_link_activated();
                apply_menu_effects(fx, host);
            }
            WidgetEvent::FocusOut { into_widget } => {
                if !into_widget {
                    let fx = self.menu.on_focus_left();
                    apply_menu_effects(fx, host);
                }
            }
            WidgetEvent::Resize | WidgetEvent::ReducedMotionChanged => {
                self.refresh_capabilities(host)
            }
            WidgetEvent::VisibilityChanged { hidden } => {
                self.hidden = hidden;
                if hidden {
                    self.render_loop.stop(host);
                } else if self.config.parallax.enabled {
                    self.render_loop.start(host);
                }
            }
            WidgetEvent::Frame => self.on_frame(host),
            WidgetEvent::Deferred(action) => {
                let fx = self.menu.on_deferred(action);
                apply_menu_effects(fx, host);
            }
        }
    }

    fn on_pointer_move(&mut self, pos: Vec2, host: &mut impl WidgetHost) {
        if self.config.parallax.enabled {
            let target = host
                .viewport()
                .and_then(|vp| mapping::pointer_target(pos, vp, &self.config.parallax));
            if let Some(t) = target {
                self.tilt.set_target(t);
            }
        }

        // parallax off (touch, reduced motion, no poster) also silences proximity
        if !self.config.parallax.enabled || self.menu.state() == MenuState::OpenManual {
            return;
        }
        let Some(anchor) = host.anchor_rect() else {
            return;
        };
        let activation = &self.config.activation;
        let radius = activation.base_radius(host.orbit_radius());
        let inside = proximity::evaluate(pos, &anchor, radius, activation.expansion);
        let fx = self.menu.on_proximity(inside, self.caps.is_touch);
        apply_menu_effects(fx, host);
    }

    fn on_frame(&mut self, host: &mut impl WidgetHost) {
        if !self.render_loop.begin_frame() {
            return;
        }
        let tilt = self.tilt.advance(self.config.parallax.smoothing);
        host.apply_pose(&FramePose::from_tilt(tilt));
        if self.config.parallax.enabled && !self.hidden {
            self.render_loop.start(host);
        }
    }

    fn refresh_capabilities(&mut self, host: &mut impl WidgetHost) {
        let caps = Capabilities::detect(&host.capability_signals());
        if caps != self.caps {
            log::info!(
                "[caps] touch={} reduced_motion={}",
                caps.is_touch,
                caps.reduced_motion
            );
        }
        self.caps = caps;

        let was_enabled = self.config.parallax.enabled;
        let enabled = self.poster_available && caps.allows_parallax();
        self.config.parallax.enabled = enabled;

        if !enabled {
            if was_enabled {
                log::info!("[loop] parallax disabled");
                self.render_loop.stop(host);
                host.reset_pose();
            }
        } else if !self.hidden {
            if !was_enabled {
                log::info!("[loop] parallax enabled");
            }
            self.render_loop.start(host);
        }
    }

    #[inline]
    pub fn menu_state(&self) -> MenuState {
        self.menu.state()
    }

    #[inline]
    pub fn capabilities(&self) -> Capabilities {
        self.caps
    }

    #[inline]
    pub fn parallax_enabled(&self) -> bool {
        self.config.parallax.enabled
    }

    #[inline]
    pub fn is_rendering(&self) -> bool {
        self.render_loop.is_running()
    }

    #[inline]
    pub fn current_tilt(&self) -> TiltAngle {
        self.tilt.current()
    }

    #[inline]
    pub fn target_tilt(&self) -> TiltAngle {
        self.tilt.target()
    }
}

fn apply_menu_effects(fx: MenuEffects, host: &mut impl WidgetHost) {
    for effect in fx {
        match effect {
            MenuEffect::Present { open } => host.present_menu(open),
            MenuEffect::FocusTrigger => host.focus_trigger(),
            MenuEffect::FocusFirstLink => host.focus_first_link(),
            MenuEffect::Defer { action, delay_ms } => host.defer(action, delay_ms),
        }
    }
}
