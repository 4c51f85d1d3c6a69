use project_board::loader::{check_status, parse_projects, LoadError};
use project_board::Project;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCache, RequestInit, Response, Window};

use crate::describe_js_error;

/// Fetches the project list once, revalidating with the server.
pub async fn fetch_projects(window: &Window, url: &str) -> Result<Vec<Project>, LoadError> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_cache(RequestCache::NoCache);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|err| LoadError::Network(describe_js_error(&err)))?;

    let response_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|err| LoadError::Network(describe_js_error(&err)))?;

    let response: Response = response_value
        .dyn_into()
        .map_err(|_| LoadError::Network("fetch did not return a Response".to_string()))?;

    check_status(response.status())?;

    let text_promise = response
        .text()
        .map_err(|err| LoadError::Body(describe_js_error(&err)))?;
    let body = JsFuture::from(text_promise)
        .await
        .map_err(|err| LoadError::Body(describe_js_error(&err)))?
        .as_string()
        .unwrap_or_default();

    parse_projects(&body)
}
