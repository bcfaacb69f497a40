//! Browser entry point
//!
//! Runs once per page load (every navigation is a full document load):
//! reads the embedded config, picks the page from the location, renders its
//! frame, subscribes the results region to the page's resource and starts
//! the single fetch. On `pagehide` the resource is unmounted and dropped so
//! a late response has nowhere to land.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Document, Element, Event, HtmlInputElement, Window};

use crate::client::ApiClient;
use crate::config::{CONFIG_ELEMENT_ID, UiConfig};
use crate::dashboard::MOUNT_ID;
use crate::error::{Result, UiError};
use crate::logging;
use crate::pages::help;
use crate::pages::home;
use crate::pages::risk_profiles::RiskProfilesPage;
use crate::pages::strategies::StrategiesPage;
use crate::pages::tickers::{SYMBOL_ATTR, TickersPage};
use crate::pages::{
    ListPage, Page, RESULTS_ID, SEARCH_ID, list_frame, list_results, not_found_frame,
};
use crate::state::{Resource, SharedResource, decode_collection, decode_document, load};

thread_local! {
    /// Unmount hook of the page currently on screen
    static CURRENT: RefCell<Option<Box<dyn FnOnce()>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> std::result::Result<(), JsValue> {
    console_error_panic_hook::set_once();

    run().map_err(|e| {
        log::error!("{e}");
        JsValue::from_str(&e.to_string())
    })
}

fn run() -> Result<()> {
    let window = web_sys::window().ok_or_else(|| UiError::Dom("no window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| UiError::Dom("no document".into()))?;

    let config = read_config(&window, &document)?;
    logging::init(config.level_filter());
    config.validate()?;

    let location = window.location().pathname().map_err(dom_err)?;
    let page = Page::from_path(&location);
    log::info!("mounting {page:?} ({})", config.environment);

    let root = by_id(&document, MOUNT_ID)?;
    let client = ApiClient::new(config);

    match page {
        Page::Home => root.set_inner_html(&home::frame()),
        Page::NotFound => root.set_inner_html(&not_found_frame()),
        Page::Strategies => {
            let resource = mount_list::<StrategiesPage>(&document, &root, client)?;
            keep(resource);
        }
        Page::RiskProfiles => {
            let resource = mount_list::<RiskProfilesPage>(&document, &root, client)?;
            keep(resource);
        }
        Page::Tickers => {
            let resource = mount_list::<TickersPage>(&document, &root, client)?;
            wire_search(&document, &resource)?;
            wire_copy(&by_id(&document, RESULTS_ID)?)?;
            keep(resource);
        }
        Page::Help => {
            let resource = mount_help(&document, &root, client)?;
            keep(resource);
        }
    }

    unmount_on_pagehide(&window)
}

fn read_config(window: &Window, document: &Document) -> Result<UiConfig> {
    let raw = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
        .unwrap_or_default();
    let origin = window.location().origin().map_err(dom_err)?;
    Ok(UiConfig::from_json(&raw)?.with_origin(&origin))
}

/// Render the frame, hook the results region to a fresh resource, start the fetch
fn mount_list<P: ListPage + 'static>(
    document: &Document,
    root: &Element,
    client: ApiClient,
) -> Result<SharedResource<Vec<P::Item>>> {
    root.set_inner_html(&list_frame::<P>());
    let results = by_id(document, RESULTS_ID)?;

    let resource = Resource::<Vec<P::Item>>::shared();
    {
        let mut page = resource.borrow_mut();
        results.set_inner_html(&list_results::<P>(page.state(), page.query()));
        page.subscribe(move |state, query| {
            results.set_inner_html(&list_results::<P>(state, query));
        });
    }

    let handle = Rc::downgrade(&resource);
    spawn_local(async move {
        load(handle, client, P::ENDPOINT, decode_collection::<P::Item>).await;
    });
    Ok(resource)
}

fn mount_help(
    document: &Document,
    root: &Element,
    client: ApiClient,
) -> Result<SharedResource<crate::types::HelpDoc>> {
    root.set_inner_html(&help::frame());
    let results = by_id(document, RESULTS_ID)?;
    let api_base = client.config().api_base().to_string();

    let resource = Resource::shared();
    {
        let mut page = resource.borrow_mut();
        results.set_inner_html(&help::results(page.state(), &api_base));
        page.subscribe(move |state, _query| {
            results.set_inner_html(&help::results(state, &api_base));
        });
    }

    let handle = Rc::downgrade(&resource);
    spawn_local(async move {
        load(handle, client, help::ENDPOINT, decode_document).await;
    });
    Ok(resource)
}

/// Typing narrows the already-loaded tickers; works while the fetch is pending
fn wire_search<T: 'static>(document: &Document, resource: &SharedResource<T>) -> Result<()> {
    let input: HtmlInputElement = by_id(document, SEARCH_ID)?
        .dyn_into()
        .map_err(|_| UiError::Dom(format!("#{SEARCH_ID} is not an input")))?;

    let handle = Rc::downgrade(resource);
    let source = input.clone();
    let on_input = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        if let Some(page) = handle.upgrade() {
            page.borrow_mut().set_query(source.value());
        }
    });
    input
        .add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())
        .map_err(dom_err)?;
    on_input.forget();
    Ok(())
}

/// Clicking a ticker card copies its symbol
fn wire_copy(results: &Element) -> Result<()> {
    let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let Ok(Some(card)) = target.closest(&format!("[{SYMBOL_ATTR}]")) else {
            return;
        };
        if let Some(symbol) = card.get_attribute(SYMBOL_ATTR) {
            copy_to_clipboard(symbol);
        }
    });
    results
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(dom_err)?;
    on_click.forget();
    Ok(())
}

fn copy_to_clipboard(text: String) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let navigator = window.navigator();
    let Ok(clipboard) = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard")) else {
        return;
    };
    let write = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok());
    let Some(write) = write else {
        log::warn!("clipboard not available");
        return;
    };

    match write
        .call1(&clipboard, &JsValue::from_str(&text))
        .and_then(JsCast::dyn_into::<js_sys::Promise>)
    {
        Ok(promise) => spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => log::info!("copied {text}"),
                Err(e) => log::warn!("clipboard write failed: {e:?}"),
            }
        }),
        Err(e) => log::warn!("clipboard write failed: {e:?}"),
    }
}

/// Hold the page's resource until the page goes away
fn keep<T: 'static>(resource: SharedResource<T>) {
    let unmount = move || {
        resource.borrow_mut().unmount();
        drop(resource);
    };
    CURRENT.with(|current| *current.borrow_mut() = Some(Box::new(unmount)));
}

fn unmount_on_pagehide(window: &Window) -> Result<()> {
    let on_hide = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        let unmount = CURRENT.with(|current| current.borrow_mut().take());
        if let Some(unmount) = unmount {
            log::debug!("page hidden, dropping resource");
            unmount();
        }
    });
    window
        .add_event_listener_with_callback("pagehide", on_hide.as_ref().unchecked_ref())
        .map_err(dom_err)?;
    on_hide.forget();
    Ok(())
}

fn by_id(document: &Document, id: &str) -> Result<Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| UiError::Dom(format!("missing #{id}")))
}

fn dom_err(err: JsValue) -> UiError {
    UiError::Dom(format!("{err:?}"))
}
