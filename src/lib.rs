#![cfg(target_arch = "wasm32")]
use orbit_core::constants::{BASE_TILT_X, BASE_TILT_Y, MAX_TILT_X, MAX_TILT_Y, SMOOTHING};
use orbit_core::{ParallaxConfig, WidgetConfig};
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

mod dom;
mod events;
mod frame;
mod host;
mod media;
mod runtime;
mod style;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("orbit-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Resolve once the DOM is parsed. Returns immediately if it already is.
async fn dom_ready(document: &web::Document) -> anyhow::Result<()> {
    if document.ready_state() != "loading" {
        return Ok(());
    }
    let doc = document.clone();
    let ready = js_sys::Promise::new(&mut |resolve, _reject| {
        let opts = web::AddEventListenerOptions::new();
        opts.set_once(true);
        _ = doc.add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            &resolve,
            &opts,
        );
    });
    JsFuture::from(ready)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    dom_ready(&document).await?;

    // One widget per page, even if the module gets started twice
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let config = WidgetConfig {
        parallax: ParallaxConfig::new(MAX_TILT_X, MAX_TILT_Y, BASE_TILT_X, BASE_TILT_Y, SMOOTHING)?,
        ..WidgetConfig::default()
    };

    let els = dom::Elements::find(&document)?;
    let rt = runtime::Runtime::new(config, els.clone());
    rt.init();

    events::wire_menu_handlers(&rt, &document, &els);
    events::wire_keydown(&rt, &document, &els);
    events::wire_pointer_handlers(&rt, &document, &window);
    events::wire_page_handlers(&rt, &document, &window);

    log::info!("[widget] {} nav links wired", els.links.len());
    Ok(())
}
