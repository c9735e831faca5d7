//! Descarga de blobs en el navegador vía object URL + ancla temporal.

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Crea un blob con los bytes recibidos y dispara la descarga con el
/// nombre indicado. El object URL se revoca inmediatamente después.
pub fn download_bytes(bytes: &[u8], mime: &str, filename: &str) -> Result<(), String> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array.buffer());

    let properties = BlobPropertyBag::new();
    properties.set_type(mime);

    let blob = Blob::new_with_buffer_source_sequence_and_options(&parts, &properties)
        .map_err(|e| format!("No se pudo crear el blob: {:?}", e))?;

    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("No se pudo crear el object URL: {:?}", e))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let document = window.document().ok_or_else(|| "no document".to_string())?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("No se pudo crear el ancla: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("No se pudo castear el ancla: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    Url::revoke_object_url(&url).map_err(|e| format!("No se pudo revocar el URL: {:?}", e))?;

    Ok(())
}

/// Abre un documento HTML en una ventana nueva (boleta imprimible).
pub fn open_html_in_new_window(html: &str) -> Result<(), String> {
    let parts = js_sys::Array::new();
    parts.push(&wasm_bindgen::JsValue::from_str(html));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/html;charset=utf-8");

    let blob = Blob::new_with_str_sequence_and_options(&parts, &properties)
        .map_err(|e| format!("No se pudo crear el blob: {:?}", e))?;

    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("No se pudo crear el object URL: {:?}", e))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    window
        .open_with_url_and_target(&url, "_blank")
        .map_err(|e| format!("No se pudo abrir la ventana: {:?}", e))?;

    // No se revoca de inmediato: la ventana nueva todavía está cargando el
    // documento desde el object URL.
    Ok(())
}
