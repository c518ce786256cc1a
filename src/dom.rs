use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Page contract
pub const HUB_SELECTOR: &str = ".hub";
pub const TRIGGER_ID: &str = "logoTrigger";
pub const MENU_ID: &str = "navMenu";
pub const LINK_SELECTOR: &str = ".nav-link";
pub const POSTER_ID: &str = "poster";
pub const MARK_SELECTOR: &str = ".logo-mark";

pub const OPEN_CLASS: &str = "is-open";
pub const ORBIT_RADIUS_VAR: &str = "--orbit-radius";
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
pub const COARSE_POINTER_QUERY: &str = "(pointer: coarse)";

/// Elements the widget touches, looked up once at startup.
#[derive(Clone)]
pub struct Elements {
    pub hub: web::Element,
    pub trigger: web::HtmlElement,
    pub menu: web::HtmlElement,
    pub links: Vec<web::HtmlElement>,
    pub poster: Option<web::HtmlElement>,
    pub mark: Option<web::HtmlElement>,
}

impl Elements {
    pub fn find(document: &web::Document) -> anyhow::Result<Self> {
        let hub = query(document, HUB_SELECTOR)
            .ok_or_else(|| anyhow::anyhow!("missing {}", HUB_SELECTOR))?;
        let trigger = by_id(document, TRIGGER_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", TRIGGER_ID))?;
        let menu =
            by_id(document, MENU_ID).ok_or_else(|| anyhow::anyhow!("missing #{}", MENU_ID))?;

        let mut links = Vec::new();
        if let Ok(list) = menu.query_selector_all(LINK_SELECTOR) {
            for i in 0..list.length() {
                if let Some(el) = list.get(i).and_then(|n| n.dyn_into::<web::HtmlElement>().ok()) {
                    links.push(el);
                }
            }
        }

        let poster = by_id(document, POSTER_ID);
        if poster.is_none() {
            log::warn!("[dom] no #{}; parallax disabled", POSTER_ID);
        }
        let mark = query(document, MARK_SELECTOR).and_then(|e| e.dyn_into().ok());

        Ok(Self {
            hub,
            trigger,
            menu,
            links,
            poster,
            mark,
        })
    }

    /// True when `target` is the trigger or sits inside trigger or menu.
    pub fn in_trigger_or_menu(&self, target: Option<&web::Node>) -> bool {
        self.trigger.contains(target) || self.menu.contains(target)
    }
}

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
fn query(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

#[inline]
fn by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|e| e.dyn_into::<web::HtmlElement>().ok())
}

/// Attach `handler` for `event` on `target` for the lifetime of the page.
pub fn listen<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Same as [`listen`] but registered passive, for high-rate input.
pub fn listen_passive<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}
