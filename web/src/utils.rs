use anyhow::{anyhow, Context, Result};
use gloo_utils::errors::JsError;
use url::Url;
use wasm_bindgen::JsValue;

pub fn current_origin() -> Result<Url> {
    let window = web_sys::window().context("Unable to load `window`")?;
    Ok(Url::parse(&window.location().origin().map_err(js_error)?)?)
}

pub fn get_local_storage() -> Result<web_sys::Storage> {
    let window = web_sys::window().context("Unable to get the window object")?;
    window
        .local_storage()
        .map_err(js_error)?
        .context("No local storage available")
}

fn js_error(err: JsValue) -> anyhow::Error {
    match JsError::try_from(err) {
        Ok(err) => anyhow!("{err}"),
        Err(err) => anyhow!("{err}"),
    }
}
