mod dom;
mod fetch;
mod location;
mod logging;

use std::cell::RefCell;
use std::rc::Rc;

use project_board::location::read_param;
use project_board::view::list::{CODE_ATTR, ROW_CLASS};
use project_board::{Board, BoardConfig};
use tracing::error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event};

use dom::{DomSurface, MountError};
use location::BrowserAddressBar;

type WebBoard = Board<DomSurface, BrowserAddressBar>;

fn main() {
    let debug = web_sys::window()
        .and_then(|window| window.location().search().ok())
        .is_some_and(|search| debug_requested(&search));
    logging::init(debug);

    if let Err(err) = run() {
        error!(error = %err, "Project board failed to start");
    }
}

/// `?debug=1` turns on debug-level console logging
fn debug_requested(search: &str) -> bool {
    read_param(search, "debug").is_some_and(|value| value == "1")
}

fn run() -> Result<(), MountError> {
    let window = web_sys::window().ok_or(MountError::NoWindow)?;
    let document = window.document().ok_or(MountError::NoDocument)?;

    let config = BoardConfig::default();
    let surface = DomSurface::mount(&document, &config)?;
    let config = config.with_data_url(surface.data_source());
    let list = surface.list().clone();

    let board = Rc::new(RefCell::new(Board::new(
        &config,
        surface,
        BrowserAddressBar::new(window.clone()),
    )));

    board.borrow_mut().show_year(current_year());
    bind_selection(&list, &board)?;

    spawn_local(async move {
        let loaded = fetch::fetch_projects(&window, &config.data_url).await;
        board.borrow_mut().start(loaded);
    });

    Ok(())
}

fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

/// One delegated click listener on the list; rows are re-created on render.
fn bind_selection(list: &Element, board: &Rc<RefCell<WebBoard>>) -> Result<(), MountError> {
    let board = Rc::clone(board);
    let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let Some(code) = clicked_code(&event) else {
            return;
        };
        if let Ok(mut board) = board.try_borrow_mut() {
            board.select_project(&code);
        }
    });

    list.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(|err| MountError::Listener {
            event: "click",
            message: describe_js_error(&err),
        })?;

    // The listener lives as long as the page
    on_click.forget();
    Ok(())
}

fn clicked_code(event: &Event) -> Option<String> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let row = target.closest(&row_selector()).ok()??;
    row.get_attribute(CODE_ATTR)
}

fn row_selector() -> String {
    format!(".{ROW_CLASS}")
}

pub(crate) fn describe_js_error(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|err| String::from(err.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}
