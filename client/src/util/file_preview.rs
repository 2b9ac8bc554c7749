//! Read a picked file into a data URL for the upload preview.
//!
//! Wraps the callback-based `FileReader` in a future. Requires a browser
//! environment, so the module only exists with the `hydrate` feature.

use futures::channel::oneshot;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// Read `file` as a `data:` URL.
///
/// # Errors
///
/// Returns an error string if the reader cannot start or finishes without a
/// string result (for example, when the read fails).
pub async fn read_data_url(file: &web_sys::File) -> Result<String, String> {
    let reader = web_sys::FileReader::new().map_err(|e| format!("{e:?}"))?;
    let (tx, rx) = oneshot::channel::<Result<String, String>>();

    let finished = reader.clone();
    let on_load_end = Closure::once(move |_: web_sys::Event| {
        let result = finished
            .result()
            .ok()
            .and_then(|value| value.as_string())
            .ok_or_else(|| "preview read failed".to_owned());
        let _ = tx.send(result);
    });
    reader.set_onloadend(Some(on_load_end.as_ref().unchecked_ref()));
    reader
        .read_as_data_url(file)
        .map_err(|e| format!("{e:?}"))?;

    let result = rx.await.map_err(|_| "preview read cancelled".to_owned())?;
    reader.set_onloadend(None);
    drop(on_load_end);
    result
}
