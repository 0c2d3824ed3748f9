//! State every animation carries regardless of how it is driven.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use super::traits::{Animation, AnimationListener, SharedListener};
use crate::controller::ControllerKind;

/// Duration used when none was set explicitly.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(300);

/// Explicit duration, direction, running flag, controller selection and
/// listeners of one animation.
#[derive(Default)]
pub struct AnimationBase {
    duration: Cell<Option<Duration>>,
    reverse: Cell<bool>,
    animating: Cell<bool>,
    controller_kind: Cell<ControllerKind>,
    listeners: RefCell<Vec<SharedListener>>,
}

impl AnimationBase {
    /// Fresh state: no explicit duration, forward, idle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Explicit duration, if one was set.
    #[must_use]
    pub fn explicit_duration(&self) -> Option<Duration> {
        self.duration.get()
    }

    /// Set or clear the explicit duration.
    pub fn set_explicit_duration(&self, duration: Option<Duration>) {
        self.duration.set(duration);
    }

    /// Playback direction.
    #[must_use]
    pub fn is_reverse(&self) -> bool {
        self.reverse.get()
    }

    /// Set the playback direction.
    pub fn set_reverse(&self, reverse: bool) {
        self.reverse.set(reverse);
    }

    /// Whether a run is in progress.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animating.get()
    }

    /// Mark a run as in progress or finished.
    pub fn set_animating(&self, animating: bool) {
        self.animating.set(animating);
    }

    /// Selected driver variant.
    #[must_use]
    pub fn controller_kind(&self) -> ControllerKind {
        self.controller_kind.get()
    }

    /// Select the driver variant.
    pub fn set_controller_kind(&self, kind: ControllerKind) {
        self.controller_kind.set(kind);
    }

    /// Register a listener once per handle.
    pub fn add_listener(&self, listener: SharedListener) {
        let mut listeners = self.listeners.borrow_mut();
        if !listeners.iter().any(|l| Rc::ptr_eq(l, &listener)) {
            listeners.push(listener);
        }
    }

    /// Unregister a listener. Returns whether it was registered.
    #[must_use]
    pub fn remove_listener(&self, listener: &SharedListener) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let Some(index) = listeners.iter().position(|l| Rc::ptr_eq(l, listener))
        else {
            return false;
        };
        let _ = listeners.remove(index);
        true
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Whether `listener` is registered.
    #[must_use]
    pub fn has_listener(&self, listener: &SharedListener) -> bool {
        self.listeners.borrow().iter().any(|l| Rc::ptr_eq(l, listener))
    }

    /// Tell every listener that `source` started.
    pub fn notify_start(&self, source: &dyn Animation) {
        self.notify(|l| l.on_start(source));
    }

    /// Tell every listener that `source` ended.
    pub fn notify_end(&self, source: &dyn Animation) {
        self.notify(|l| l.on_end(source));
    }

    /// Tell every listener that `source` was cancelled.
    pub fn notify_cancel(&self, source: &dyn Animation) {
        self.notify(|l| l.on_cancel(source));
    }

    /// Tell every listener that `source` was reset.
    pub fn notify_reset(&self, source: &dyn Animation) {
        self.notify(|l| l.on_reset(source));
    }

    // Listeners may add or remove listeners from inside a callback, so
    // iterate a snapshot.
    fn notify(&self, event: impl Fn(&dyn AnimationListener)) {
        let listeners = self.listeners.borrow().clone();
        for listener in &listeners {
            event(listener.as_ref());
        }
    }
}

impl std::fmt::Debug for AnimationBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationBase")
            .field("duration", &self.duration.get())
            .field("reverse", &self.reverse.get())
            .field("animating", &self.animating.get())
            .field("controller_kind", &self.controller_kind.get())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Silent;

    impl AnimationListener for Silent {}

    #[test]
    fn test_add_listener_is_idempotent_per_handle() {
        let base = AnimationBase::new();
        let listener: SharedListener = Rc::new(Silent);
        let other: SharedListener = Rc::new(Silent);

        base.add_listener(listener.clone());
        base.add_listener(listener.clone());
        base.add_listener(other.clone());
        assert_eq!(base.listener_count(), 2);

        assert!(base.remove_listener(&listener));
        assert!(!base.remove_listener(&listener));
        assert!(base.has_listener(&other));
        assert_eq!(base.listener_count(), 1);
    }

    #[test]
    fn test_defaults() {
        let base = AnimationBase::new();
        assert_eq!(base.explicit_duration(), None);
        assert!(!base.is_reverse());
        assert!(!base.is_animating());
        assert_eq!(base.controller_kind(), ControllerKind::Animator);
    }
}
