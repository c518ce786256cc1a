use crate::dom::Elements;
use crate::host::WebHost;
use orbit_core::{Mailbox, WidgetConfig, WidgetController, WidgetEvent};
use std::cell::RefCell;
use std::rc::Rc;

/// Controller, host and mailbox for the one widget on the page.
///
/// Every DOM callback funnels through [`Runtime::post`]; the mailbox makes
/// delivery serial even when a side effect raises another DOM event
/// synchronously.
pub struct Runtime {
    controller: RefCell<WidgetController>,
    host: RefCell<WebHost>,
    mailbox: Mailbox<WidgetEvent>,
}

impl Runtime {
    pub fn new(config: WidgetConfig, els: Elements) -> Rc<Self> {
        let poster_available = els.poster.is_some();
        Rc::new_cyclic(|weak| Runtime {
            controller: RefCell::new(WidgetController::new(config, poster_available)),
            host: RefCell::new(WebHost::new(els, weak.clone())),
            mailbox: Mailbox::new(),
        })
    }

    pub fn init(&self) {
        let mut host = self.host.borrow_mut();
        self.controller.borrow_mut().init(&mut *host);
    }

    pub fn post(&self, event: WidgetEvent) {
        self.mailbox.post(event, |ev| {
            let mut host = self.host.borrow_mut();
            self.controller.borrow_mut().dispatch(ev, &mut *host);
        });
    }
}
