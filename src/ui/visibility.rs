//! IntersectionObserver-backed visibility source
//!
//! Client build only: the server never observes anything, so the view
//! controller carries no observer there.

#[cfg(not(feature = "ssr"))]
pub use dom::DomVisibility;

#[cfg(not(feature = "ssr"))]
mod dom {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::JsValue;
    use wasm_bindgen::closure::Closure;

    use crate::core::{ObserverOptions, Subscription, VisibilitySource};

    /// Watches DOM elements by id with `IntersectionObserver`
    #[derive(Clone, Copy, Debug, Default)]
    pub struct DomVisibility;

    impl VisibilitySource for DomVisibility {
        fn observe(
            &self,
            region_id: &str,
            options: &ObserverOptions,
            on_change: Box<dyn Fn(bool)>,
        ) -> Option<Subscription> {
            let target = web_sys::window()?
                .document()?
                .get_element_by_id(region_id)?;

            // The region is a single element, so only the first entry matters
            let callback =
                Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
                    move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
                        if let Ok(entry) = entries
                            .get(0)
                            .dyn_into::<web_sys::IntersectionObserverEntry>()
                        {
                            on_change(entry.is_intersecting());
                        }
                    },
                );

            let init = web_sys::IntersectionObserverInit::new();
            init.set_threshold(&JsValue::from_f64(options.threshold));
            init.set_root_margin(options.root_margin);

            let observer = match web_sys::IntersectionObserver::new_with_options(
                callback.as_ref().unchecked_ref(),
                &init,
            ) {
                Ok(observer) => observer,
                Err(err) => {
                    tracing::warn!(?err, "failed to create IntersectionObserver");
                    return None;
                }
            };
            observer.observe(&target);

            Some(Subscription::new(move || {
                observer.unobserve(&target);
                observer.disconnect();
                // The JS side can no longer call into the closure
                drop(callback);
            }))
        }
    }
}

/// Jump the viewport back to the origin
pub fn scroll_to_top() {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}
