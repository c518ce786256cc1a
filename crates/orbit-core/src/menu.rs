//! Orbit menu state machine.
//!
//! Three states instead of an `is_open`/`is_manual` flag pair: the fourth
//! combination (closed but manual) cannot be represented. Every transition
//! returns the side effects the host must apply right away; a call that does
//! not change state returns no effects, except link activation, which always
//! schedules its deferred close.

use crate::config::MenuTiming;
use smallvec::{smallvec, SmallVec};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    /// Opened because the pointer came near the trigger.
    OpenProximity,
    /// Opened by click or keyboard. Proximity loss does not close it.
    OpenManual,
}

impl MenuState {
    #[inline]
    pub fn is_open(self) -> bool {
        !matches!(self, MenuState::Closed)
    }
}

impl fmt::Display for MenuState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MenuState::Closed => "Closed",
            MenuState::OpenProximity => "OpenProximity",
            MenuState::OpenManual => "OpenManual",
        };
        f.write_str(s)
    }
}

/// How the trigger was activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationSource {
    Pointer,
    /// Enter or Space while the trigger has focus.
    Keyboard,
}

/// Actions scheduled on the host's timer and fed back as events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredAction {
    CloseMenu,
    FocusFirstLink,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEffect {
    /// Set or clear the open indicator and `aria-expanded`.
    Present { open: bool },
    FocusTrigger,
    FocusFirstLink,
    Defer { action: DeferredAction, delay_ms: u32 },
}

pub type MenuEffects = SmallVec<[MenuEffect; 2]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cause {
    Proximity,
    Activation,
    Escape,
    OutsideClick,
    Link,
    FocusLeft,
}

#[derive(Debug, Clone, Default)]
pub struct MenuMachine {
    state: MenuState,
    timing: MenuTiming,
}

impl MenuMachine {
    pub fn new(timing: MenuTiming) -> Self {
        Self {
            state: MenuState::Closed,
            timing,
        }
    }

    #[inline]
    pub fn state(&self) -> MenuState {
        self.state
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Feed one proximity evaluation. Ignored on touch devices and while
    /// manually open.
    pub fn on_proximity(&mut self, inside: bool, is_touch: bool) -> MenuEffects {
        if is_touch {
            return MenuEffects::new();
        }
        match (self.state, inside) {
            (MenuState::Closed, true) => self.open(MenuState::OpenProximity, Cause::Proximity),
            (MenuState::OpenProximity, false) => self.close(Cause::Proximity),
            _ => MenuEffects::new(),
        }
    }

    /// Toggle from the trigger. Any open state closes; closed opens manually.
    ///
    /// A keyboard open with links present also schedules moving focus to the
    /// first link once the open transition has had time to lay out.
    pub fn on_activate(&mut self, source: ActivationSource, has_links: bool) -> MenuEffects {
        if self.state.is_open() {
            return self.close(Cause::Activation);
        }
        let mut fx = self.open(MenuState::OpenManual, Cause::Activation);
        if source == ActivationSource::Keyboard && has_links {
            fx.push(MenuEffect::Defer {
                action: DeferredAction::FocusFirstLink,
                delay_ms: self.timing.first_link_focus_ms,
            });
        }
        fx
    }

    /// Escape closes and hands focus back to the trigger.
    pub fn on_escape(&mut self) -> MenuEffects {
        let mut fx = self.close(Cause::Escape);
        if !fx.is_empty() {
            fx.push(MenuEffect::FocusTrigger);
        }
        fx
    }

    pub fn on_outside_click(&mut self) -> MenuEffects {
        self.close(Cause::OutsideClick)
    }

    /// A navigation link was activated; collapse shortly after so the link's
    /// own feedback registers first. Scheduled even while closed, so a menu
    /// that opens inside the delay still collapses.
    pub fn on_link_activated(&mut self) -> MenuEffects {
        smallvec![MenuEffect::Defer {
            action: DeferredAction::CloseMenu,
            delay_ms: self.timing.link_close_ms,
        }]
    }

    /// Focus moved somewhere outside the trigger and menu.
    pub fn on_focus_left(&mut self) -> MenuEffects {
        self.close(Cause::FocusLeft)
    }

    /// A deferred action came due. Stale actions are harmless: closing a
    /// closed menu does nothing and focus only moves while still open.
    pub fn on_deferred(&mut self, action: DeferredAction) -> MenuEffects {
        match action {
            DeferredAction::CloseMenu => self.close(Cause::Link),
            DeferredAction::FocusFirstLink if self.state.is_open() => {
                smallvec![MenuEffect::FocusFirstLink]
            }
            DeferredAction::FocusFirstLink => MenuEffects::new(),
        }
    }

    fn open(&mut self, to: MenuState, cause: Cause) -> MenuEffects {
        log::debug!("[menu] {} -> {} ({:?})", self.state, to, cause);
        self.state = to;
        smallvec![MenuEffect::Present { open: true }]
    }

    fn close(&mut self, cause: Cause) -> MenuEffects {
        if !self.state.is_open() {
            return MenuEffects::new();
        }
        log::debug!("[menu] {} -> Closed ({:?})", self.state, cause);
        self.state = MenuState::Closed;
        smallvec![MenuEffect::Present { open: false }]
    }
}
