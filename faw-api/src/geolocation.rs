//! Best-effort browser geolocation.

use js_sys::{Array, Promise};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Position, PositionError};

/// Resolve the current position as `(latitude, longitude)`.
///
/// A browser without geolocation support, a denied permission prompt,
/// and a lookup failure all come back as `Err` with the browser's
/// message, so callers always get exactly one of the two outcomes. No
/// timeout is applied beyond the browser's own permission flow.
pub async fn current_position() -> Result<(f64, f64), String> {
    let geolocation = web_sys::window().and_then(|w| w.navigator().geolocation().ok());
    let Some(geolocation) = geolocation else {
        return Err("geolocation unsupported".to_string());
    };

    let promise = Promise::new(&mut |resolve, reject| {
        let sync_reject = reject.clone();
        let granted = Closure::once(move |position: Position| {
            let coords = position.coords();
            let pair = Array::of2(&coords.latitude().into(), &coords.longitude().into());
            let _ = resolve.call1(&JsValue::NULL, &pair);
        });
        let denied = Closure::once(move |error: PositionError| {
            let _ = reject.call1(&JsValue::NULL, &JsValue::from_str(&error.message()));
        });
        if let Err(e) = geolocation.get_current_position_with_error_callback(
            granted.as_ref().unchecked_ref(),
            Some(denied.as_ref().unchecked_ref()),
        ) {
            log::warn!("geolocation request rejected: {e:?}");
            let _ = sync_reject.call1(
                &JsValue::NULL,
                &JsValue::from_str("geolocation request rejected"),
            );
        }
        // The browser owns the callbacks from here; each fires at most once.
        granted.forget();
        denied.forget();
    });

    match JsFuture::from(promise).await {
        Ok(value) => {
            let pair: Array = value.unchecked_into();
            let latitude = pair.get(0).as_f64().ok_or("bad latitude")?;
            let longitude = pair.get(1).as_f64().ok_or("bad longitude")?;
            Ok((latitude, longitude))
        }
        Err(reason) => Err(reason
            .as_string()
            .unwrap_or_else(|| format!("{reason:?}"))),
    }
}
