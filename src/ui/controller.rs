//! Reactive view controller context
//!
//! Wraps the core `ViewState` in a signal and owns the landing theme
//! observer. Screens never touch the state directly: they call the
//! transition methods here, which release any visibility watch before the
//! new view is published and scroll back to the top when the transition
//! asks for it.

use leptos::prelude::*;

use crate::core::{ArmKey, Intent, ScreenProps, Transition, ViewState};
use crate::ui::visibility::scroll_to_top;
#[cfg(any(not(feature = "ssr"), test))]
use crate::core::ThemeObserver;

#[cfg(not(feature = "ssr"))]
type RegionSource = crate::ui::visibility::DomVisibility;
#[cfg(all(feature = "ssr", test))]
type RegionSource = crate::core::observer::testing::FakeVisibility;

/// Navigation context shared by every screen
#[derive(Clone, Copy)]
pub struct ViewController {
    state: RwSignal<ViewState>,
    /// DOM handles are `!Send`, so the observer lives in local storage and
    /// only exists in the client build
    #[cfg(any(not(feature = "ssr"), test))]
    observer: StoredValue<ThemeObserver<RegionSource>, LocalStorage>,
}

impl ViewController {
    /// Props snapshot without subscribing to changes
    pub fn props_untracked(&self) -> ScreenProps {
        self.state.with_untracked(|s| s.props())
    }

    /// Whether the landing page is in its dark treatment (tracked)
    pub fn is_dark_mode(&self) -> bool {
        self.state.with(|s| s.props().is_dark_mode)
    }

    /// Props for the active screen set (tracked)
    pub fn props(&self) -> ScreenProps {
        self.state.with(|s| s.props())
    }

    /// Changes on every view switch and every re-entry into landing,
    /// but not on theme signals
    pub fn arm_key(&self) -> Memo<ArmKey> {
        let state = self.state;
        Memo::new(move |_| state.with(|s| s.arm_key()))
    }

    /// Apply a screen intent. Returns `None` only if the state was disposed.
    pub fn dispatch(&self, intent: Intent) -> Option<Transition> {
        // Drop the watch first so no visibility callback lands after the switch
        self.release_theme_observer();
        let transition = self.state.try_update(|s| s.dispatch(intent))?;
        if transition.scroll_to_top {
            scroll_to_top();
        }
        Some(transition)
    }

    /// Callback that dispatches a fixed intent
    pub fn callback(&self, intent: Intent) -> Callback<()> {
        let controller = *self;
        Callback::new(move |_: ()| {
            controller.dispatch(intent.clone());
        })
    }

    /// Visibility signal from the theme observer
    pub fn set_theme(&self, dark: bool) {
        self.state
            .maybe_update(|s| s.is_dark_mode() != dark && s.set_theme(dark));
    }

    /// Watch the theme region if the landing view is showing.
    ///
    /// Call after the landing screen has mounted so the region exists.
    pub fn arm_theme_observer(&self) {
        if !self.state.with_untracked(|s| s.view().is_landing()) {
            return;
        }
        #[cfg(any(not(feature = "ssr"), test))]
        {
            let controller = *self;
            self.observer.update_value(|observer| {
                observer.activate(move |dark| controller.set_theme(dark));
            });
        }
    }

    pub fn release_theme_observer(&self) {
        #[cfg(any(not(feature = "ssr"), test))]
        self.observer.try_update_value(|observer| {
            observer.release();
        });
    }
}

/// Provide the view controller to the component tree
pub fn provide_view_controller() -> ViewController {
    let ctx = ViewController {
        state: RwSignal::new(ViewState::new()),
        #[cfg(any(not(feature = "ssr"), test))]
        observer: StoredValue::new_local(ThemeObserver::new(RegionSource::default())),
    };

    provide_context(ctx);
    ctx
}

/// Get the view controller from the component tree
pub fn use_view_controller() -> ViewController {
    expect_context::<ViewController>()
}
