//! Entry point and listener wiring
//!
//! `use_dynamic_adapt` builds the engine over the live document,
//! subscribes one `change` listener per breakpoint media query, and
//! fires each handler once immediately so the current viewport state is
//! applied without waiting for a transition.
//!
//! The engine instance and the listener closures are page-lifetime
//! singletons. `web_sys::Element` handles are not `Send`, so they live
//! in `thread_local!` storage rather than a `lazy_static` mutex; all
//! access happens on the single UI thread.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{MediaQueryList, MediaQueryListEvent};

use crate::api::error::AdaptError;
use crate::api::helpers;
use crate::dom::WebDom;
use crate::engine::AdaptEngine;
use crate::models::MediaMode;

type MediaListener = (MediaQueryList, Closure<dyn FnMut(MediaQueryListEvent)>);

thread_local! {
    // WASM-owned engine state (canonical source of truth)
    static ENGINE: RefCell<Option<AdaptEngine<WebDom>>> = RefCell::new(None);
    // Keeps the change-listener closures alive for the page lifetime
    static LISTENERS: RefCell<Vec<MediaListener>> = RefCell::new(Vec::new());
}

fn dispatch(breakpoint: u32, matches: bool) {
    ENGINE.with(|slot| {
        if let Some(engine) = slot.borrow_mut().as_mut() {
            engine.handle(breakpoint, matches);
        }
    });
}

/// Initialize responsive relocation over the live document.
///
/// `mode` selects the breakpoint comparison direction: `"min"` for
/// min-width conditions, anything else (or `undefined`) for the
/// max-width default. Safe to call exactly once after page load.
#[wasm_bindgen]
pub fn use_dynamic_adapt(mode: Option<String>) -> Result<(), JsValue> {
    let mode = mode.as_deref().map(MediaMode::parse).unwrap_or_default();
    let window = web_sys::window().ok_or(AdaptError::NoWindow)?;
    let document = window.document().ok_or(AdaptError::NoDocument)?;

    let engine = AdaptEngine::new(WebDom::new(document), mode);
    let queries = engine.media_queries();
    ENGINE.with(|slot| *slot.borrow_mut() = Some(engine));

    for query in queries {
        let media_query_list = window
            .match_media(&query.css())
            .ok()
            .flatten()
            .ok_or_else(|| AdaptError::MatchMedia(query.css()))?;

        let breakpoint = query.breakpoint;
        let listener = Closure::<dyn FnMut(MediaQueryListEvent)>::new(
            move |event: MediaQueryListEvent| dispatch(breakpoint, event.matches()),
        );
        media_query_list
            .add_event_listener_with_callback("change", listener.as_ref().unchecked_ref())
            .map_err(|_| AdaptError::MatchMedia(query.css()))?;

        // Apply the current viewport state right away.
        dispatch(breakpoint, media_query_list.matches());

        LISTENERS.with(|slot| slot.borrow_mut().push((media_query_list, listener)));
    }

    Ok(())
}

/// Current state of every registered relocation, serialized for
/// devtools inspection.
#[wasm_bindgen]
pub fn relocation_report() -> Result<JsValue, JsValue> {
    let snapshots = ENGINE
        .with(|slot| slot.borrow().as_ref().map(|engine| engine.snapshots()))
        .ok_or(AdaptError::NotInitialized)?;

    helpers::serialize(&snapshots, "Failed to serialize relocation report")
}
