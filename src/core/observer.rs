//! Scoped visibility subscriptions and the landing theme observer
//!
//! A `VisibilitySource` turns "is this region on screen?" into a stream of
//! boolean callbacks. The returned `Subscription` owns the underlying
//! platform resource and releases it when dropped, so every exit path
//! (navigation, unmount, early return) tears the watch down.

use std::fmt;

/// DOM id of the landing region whose visibility drives the theme flag
pub const THEME_REGION_ID: &str = "dark-mode-section";

/// Intersection parameters for a visibility watch
#[derive(Clone, Debug, PartialEq)]
pub struct ObserverOptions {
    /// Fraction of the region that must be inside the root to count as visible
    pub threshold: f64,
    /// CSS margin applied to the viewport before intersecting
    pub root_margin: &'static str,
}

impl ObserverOptions {
    /// 10% of the region inside the viewport shrunk by 50px top and bottom
    pub fn theme() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "-50px 0px -50px 0px",
        }
    }
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self::theme()
    }
}

/// Handle to an active watch; releases it on drop
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Release now instead of at end of scope
    pub fn cancel(mut self) {
        self.run_release();
    }

    fn run_release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

/// Something that can watch a region of the page for visibility changes
pub trait VisibilitySource {
    /// Start watching `region_id`.
    ///
    /// Returns `None` when the region is not present; that is not an error.
    fn observe(
        &self,
        region_id: &str,
        options: &ObserverOptions,
        on_change: Box<dyn Fn(bool)>,
    ) -> Option<Subscription>;
}

/// Owns at most one watch on the theme region at a time
pub struct ThemeObserver<S> {
    source: S,
    region_id: &'static str,
    options: ObserverOptions,
    active: Option<Subscription>,
    acquisitions: u64,
}

impl<S: VisibilitySource> ThemeObserver<S> {
    pub fn new(source: S) -> Self {
        Self::with_region(source, THEME_REGION_ID, ObserverOptions::theme())
    }

    pub fn with_region(source: S, region_id: &'static str, options: ObserverOptions) -> Self {
        Self {
            source,
            region_id,
            options,
            active: None,
            acquisitions: 0,
        }
    }

    /// Acquire a watch on the region, dropping any previous one first.
    ///
    /// Returns whether a watch is now held.
    pub fn activate(&mut self, on_change: impl Fn(bool) + 'static) -> bool {
        self.release();
        match self
            .source
            .observe(self.region_id, &self.options, Box::new(on_change))
        {
            Some(subscription) => {
                self.acquisitions += 1;
                self.active = Some(subscription);
                tracing::debug!(
                    region = self.region_id,
                    acquisitions = self.acquisitions,
                    "theme observer armed"
                );
                true
            }
            None => {
                tracing::debug!(region = self.region_id, "theme region not found, observer idle");
                false
            }
        }
    }

    /// Release the current watch, if any. Returns whether one was held.
    pub fn release(&mut self) -> bool {
        match self.active.take() {
            Some(subscription) => {
                subscription.cancel();
                tracing::debug!(region = self.region_id, "theme observer released");
                true
            }
            None => false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Total number of watches acquired over the observer's life
    pub fn acquisitions(&self) -> u64 {
        self.acquisitions
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory visibility source for exercising the observer lifecycle

    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Inner {
        region_present: bool,
        live: usize,
        callback: Option<Rc<dyn Fn(bool)>>,
        last_options: Option<ObserverOptions>,
        last_region: Option<String>,
        on_release: Option<Rc<dyn Fn()>>,
    }

    /// Fake source that counts live watches and lets tests fire events
    #[derive(Clone, Default)]
    pub struct FakeVisibility {
        inner: Rc<RefCell<Inner>>,
    }

    impl FakeVisibility {
        pub fn with_region() -> Self {
            let fake = Self::default();
            fake.set_region_present(true);
            fake
        }

        pub fn set_region_present(&self, present: bool) {
            self.inner.borrow_mut().region_present = present;
        }

        pub fn live_watches(&self) -> usize {
            self.inner.borrow().live
        }

        pub fn last_options(&self) -> Option<ObserverOptions> {
            self.inner.borrow().last_options.clone()
        }

        pub fn last_region(&self) -> Option<String> {
            self.inner.borrow().last_region.clone()
        }

        /// Run `hook` whenever a watch is released
        pub fn on_release(&self, hook: impl Fn() + 'static) {
            self.inner.borrow_mut().on_release = Some(Rc::new(hook));
        }

        /// Deliver a visibility event to the current watch.
        ///
        /// Returns false when no watch is live.
        pub fn fire(&self, is_intersecting: bool) -> bool {
            let callback = self.inner.borrow().callback.clone();
            match callback {
                Some(callback) => {
                    callback(is_intersecting);
                    true
                }
                None => false,
            }
        }
    }

    impl VisibilitySource for FakeVisibility {
        fn observe(
            &self,
            region_id: &str,
            options: &ObserverOptions,
            on_change: Box<dyn Fn(bool)>,
        ) -> Option<Subscription> {
            let mut inner = self.inner.borrow_mut();
            if !inner.region_present {
                return None;
            }
            inner.live += 1;
            inner.callback = Some(Rc::from(on_change));
            inner.last_options = Some(options.clone());
            inner.last_region = Some(region_id.to_string());

            let handle = Rc::clone(&self.inner);
            Some(Subscription::new(move || {
                let hook = {
                    let mut inner = handle.borrow_mut();
                    inner.live -= 1;
                    inner.callback = None;
                    inner.on_release.clone()
                };
                if let Some(hook) = hook {
                    hook();
                }
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::FakeVisibility;
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_subscription_releases_on_drop() {
        let released = Rc::new(Cell::new(0));
        {
            let released = Rc::clone(&released);
            let _sub = Subscription::new(move || released.set(released.get() + 1));
        }
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn test_subscription_cancel_runs_once() {
        let released = Rc::new(Cell::new(0));
        let counter = Rc::clone(&released);
        let sub = Subscription::new(move || counter.set(counter.get() + 1));
        sub.cancel();
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn test_theme_options() {
        let options = ObserverOptions::default();
        assert_eq!(options.threshold, 0.1);
        assert_eq!(options.root_margin, "-50px 0px -50px 0px");
    }

    #[test]
    fn test_activate_observes_theme_region() {
        let fake = FakeVisibility::with_region();
        let mut observer = ThemeObserver::new(fake.clone());

        assert!(observer.activate(|_| {}));
        assert!(observer.is_active());
        assert_eq!(fake.live_watches(), 1);
        assert_eq!(fake.last_region().as_deref(), Some(THEME_REGION_ID));
        assert_eq!(fake.last_options(), Some(ObserverOptions::theme()));
    }

    #[test]
    fn test_reactivate_does_not_double_acquire() {
        let fake = FakeVisibility::with_region();
        let mut observer = ThemeObserver::new(fake.clone());

        observer.activate(|_| {});
        observer.activate(|_| {});
        assert_eq!(fake.live_watches(), 1);
        assert_eq!(observer.acquisitions(), 2);
    }

    #[test]
    fn test_missing_region_is_noop() {
        let fake = FakeVisibility::default();
        let mut observer = ThemeObserver::new(fake.clone());

        assert!(!observer.activate(|_| {}));
        assert!(!observer.is_active());
        assert_eq!(observer.acquisitions(), 0);
        assert!(!fake.fire(true));
    }

    #[test]
    fn test_release_without_watch() {
        let mut observer = ThemeObserver::new(FakeVisibility::with_region());
        assert!(!observer.release());
    }

    #[test]
    fn test_drop_observer_releases_watch() {
        let fake = FakeVisibility::with_region();
        {
            let mut observer = ThemeObserver::new(fake.clone());
            observer.activate(|_| {});
            assert_eq!(fake.live_watches(), 1);
        }
        assert_eq!(fake.live_watches(), 0);
    }

    #[test]
    fn test_events_pass_straight_through() {
        let fake = FakeVisibility::with_region();
        let mut observer = ThemeObserver::new(fake.clone());
        let seen = Rc::new(Cell::new(false));
        let sink = Rc::clone(&seen);
        observer.activate(move |v| sink.set(v));

        fake.fire(true);
        assert!(seen.get());
        fake.fire(false);
        assert!(!seen.get());

        observer.release();
        assert!(!fake.fire(true));
        assert!(!seen.get());
    }
}
