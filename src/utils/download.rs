use crate::models::error::AppError;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, Document, HtmlAnchorElement, HtmlElement, Url};

fn js_error(context: &str, err: JsValue) -> AppError {
    AppError::DownloadError(format!("{context}: {err:?}"))
}

/// Saves `contents` as a JSON file in the browser's downloads.
///
/// Wraps the text in a `Blob`, points a temporary `<a download>` element at an object
/// URL for it and clicks the anchor. The object URL is revoked whether or not the click
/// went through.
pub fn download_json(filename: &str, contents: &str) -> Result<(), AppError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| AppError::DownloadError("No document available".to_string()))?;
    let body = document
        .body()
        .ok_or_else(|| AppError::DownloadError("Document has no body".to_string()))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let options = BlobPropertyBag::new();
    options.set_type("application/json");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|e| js_error("Failed to create blob", e))?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| js_error("Failed to create object URL", e))?;

    with_cleanup(
        || click_link(&document, &body, &url, filename),
        || Url::revoke_object_url(&url),
    )?;

    gloo::console::log!(&format!("Exported climate data to {filename}"));
    Ok(())
}

/// Runs `action`, then `cleanup` on every path. A cleanup failure is logged and does
/// not replace the action's result.
fn with_cleanup<T, E: std::fmt::Debug>(
    action: impl FnOnce() -> Result<T, AppError>,
    cleanup: impl FnOnce() -> Result<(), E>,
) -> Result<T, AppError> {
    let result = action();
    if let Err(e) = cleanup() {
        gloo::console::warn!(&format!("Download cleanup failed: {e:?}"));
    }
    result
}

fn click_link(
    document: &Document,
    body: &HtmlElement,
    url: &str,
    filename: &str,
) -> Result<(), AppError> {
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| js_error("Failed to create link", e))?
        .dyn_into()
        .map_err(|_| AppError::DownloadError("Created element is not a link".to_string()))?;
    anchor.set_href(url);
    anchor.set_download(filename);

    body.append_child(&anchor)
        .map_err(|e| js_error("Failed to attach link", e))?;
    anchor.click();
    if let Err(e) = body.remove_child(&anchor) {
        gloo::console::warn!(&format!("Failed to remove download link: {e:?}"));
    }
    Ok(())
}
