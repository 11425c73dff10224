//! Staggered scroll-reveal for gallery items.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each item gets an animation delay proportional to its index and a
//! one-shot `IntersectionObserver` that fires the first time the item enters
//! the viewport, then unobserves it. Observer glue is browser-only; the delay
//! math is shared with native tests.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::time::Duration;

/// Class added to an item once it has been revealed.
pub const REVEAL_CLASS: &str = "animate__fadeIn";

/// Delay before item `index` starts its reveal animation.
#[must_use]
pub fn reveal_delay(index: usize, stagger: Duration) -> Duration {
    stagger.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
}

/// Inline style fragment carrying the reveal delay.
#[must_use]
pub fn animation_delay_style(delay: Duration) -> String {
    format!("animation-delay: {}ms", delay.as_millis())
}

/// Call `on_visible` the first time `element` intersects the viewport.
///
/// The observer unobserves the element right after firing, so the callback
/// runs at most once. Observer construction failures are logged and the
/// element is simply never revealed.
#[cfg(feature = "csr")]
pub fn observe_once(element: &web_sys::Element, on_visible: impl FnOnce() + 'static) {
    use std::cell::RefCell;
    use wasm_bindgen::{JsCast, closure::Closure};

    let pending = RefCell::new(Some(on_visible));
    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                observer.unobserve(&entry.target());
                if let Some(fire) = pending.borrow_mut().take() {
                    fire();
                }
            }
        },
    );

    match web_sys::IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
        Ok(observer) => {
            observer.observe(element);
            callback.forget();
        }
        Err(err) => log::warn!("intersection observer unavailable: {err:?}"),
    }
}
