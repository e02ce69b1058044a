use anyhow::{anyhow, Result};
use url::Url;
use wasm_bindgen::prelude::*;

use crate::utils::current_origin;

#[wasm_bindgen(module = "/js/api.js")]
extern "C" {
    fn api_base_url() -> String;
}

pub fn get_api_base_url() -> Result<Url> {
    resolve_api_base_url(&api_base_url(), current_origin)
}

/// An absolute URL is used as is, a relative one is joined to the page origin.
fn resolve_api_base_url(value: &str, origin: impl FnOnce() -> Result<Url>) -> Result<Url> {
    let url = match Url::parse(value) {
        Ok(url) => url,
        Err(err) => origin()?
            .join(value)
            .map_err(|_| anyhow!("Failed to parse api_base_url: {}", err))?,
    };

    // `Url::join` drops the last path segment unless it ends with a slash
    if url.path().ends_with('/') {
        Ok(url)
    } else {
        Ok(Url::parse(&format!("{url}/"))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wasm_bindgen_test::*;

    fn origin() -> Result<Url> {
        Ok(Url::parse("https://foodgram.example")?)
    }

    #[wasm_bindgen_test]
    fn test_absolute_api_base_url() {
        assert_eq!(
            resolve_api_base_url("http://localhost:8000/api/", origin)
                .unwrap()
                .as_str(),
            "http://localhost:8000/api/"
        );
    }

    #[wasm_bindgen_test]
    fn test_relative_api_base_url() {
        assert_eq!(
            resolve_api_base_url("/api/", origin).unwrap().as_str(),
            "https://foodgram.example/api/"
        );
    }

    #[wasm_bindgen_test]
    fn test_api_base_url_without_trailing_slash() {
        let url = resolve_api_base_url("/api", origin).unwrap();

        assert_eq!(url.as_str(), "https://foodgram.example/api/");
        assert_eq!(
            url.join("users/").unwrap().as_str(),
            "https://foodgram.example/api/users/"
        );
    }
}
