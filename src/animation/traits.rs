//! Core traits for playable animations and their observers.

use std::rc::Rc;
use std::time::Duration;

use super::base::{AnimationBase, DEFAULT_DURATION};
use crate::controller::{ControllerKind, SharedController};
use crate::error::AnimationError;
use crate::transition::SharedTransition;

/// Observes the lifecycle of an [`Animation`].
///
/// Every callback defaults to a no-op so observers only implement what they
/// care about.
pub trait AnimationListener {
    /// Playback started.
    fn on_start(&self, _source: &dyn Animation) {}
    /// Playback reached its end.
    fn on_end(&self, _source: &dyn Animation) {}
    /// Playback was cancelled.
    fn on_cancel(&self, _source: &dyn Animation) {}
    /// Playback was reset to its starting values.
    fn on_reset(&self, _source: &dyn Animation) {}
}

/// Type alias for shared listener references. Listeners are identified by
/// handle, so keep the `Rc` around to remove one later.
pub type SharedListener = Rc<dyn AnimationListener>;

/// Something that can be played, paused, reversed and observed.
///
/// All methods take `&self`: animations are shared handles living on the UI
/// thread, and lifecycle callbacks may re-enter the animation that fired
/// them. Shared bookkeeping lives in the [`AnimationBase`] returned by
/// [`base`](Self::base); the provided methods read and write it.
pub trait Animation {
    /// Bookkeeping shared by every animation.
    fn base(&self) -> &AnimationBase;

    /// Start with this animation's own [`duration`](Self::duration).
    fn start(&self) -> Result<(), AnimationError> {
        self.start_with_duration(self.duration())
    }

    /// Start over `duration`. Starting while animating cancels the current
    /// run first.
    fn start_with_duration(&self, duration: Duration)
        -> Result<(), AnimationError>;

    /// Stop mid-run and report cancel.
    fn cancel(&self);

    /// Stop advancing, keeping current values.
    fn pause(&self);

    /// Continue after [`pause`](Self::pause).
    fn resume(&self);

    /// Jump to the end and report end.
    fn end(&self);

    /// Restore starting values and report reset.
    fn reset(&self);

    /// Advance by one frame delta. Returns whether still running.
    fn tick(&self, delta: Duration) -> bool;

    /// Effective duration.
    fn duration(&self) -> Duration {
        self.base().explicit_duration().unwrap_or(DEFAULT_DURATION)
    }

    /// Set (`Some`) or clear (`None`) the explicit duration.
    fn set_duration(&self, duration: Option<Duration>) {
        self.base().set_explicit_duration(duration);
    }

    /// Whether playback runs backwards.
    fn is_reverse(&self) -> bool {
        self.base().is_reverse()
    }

    /// Set the playback direction.
    fn set_reverse(&self, reverse: bool) {
        self.base().set_reverse(reverse);
    }

    /// Whether a run is in progress.
    fn is_animating(&self) -> bool {
        self.base().is_animating()
    }

    /// Driver variant built when this animation needs a controller.
    fn controller_kind(&self) -> ControllerKind {
        self.base().controller_kind()
    }

    /// Select the driver variant.
    fn set_controller_kind(&self, kind: ControllerKind) {
        self.base().set_controller_kind(kind);
    }

    /// Register a listener. Registering the same handle twice is a no-op.
    fn add_listener(&self, listener: SharedListener) {
        self.base().add_listener(listener);
    }

    /// Unregister a listener. Returns whether it was registered.
    #[must_use]
    fn remove_listener(&self, listener: &SharedListener) -> bool {
        self.base().remove_listener(listener)
    }

    /// Transition capability, for animations backed by a single
    /// [`Transition`](crate::transition::Transition) that can be fused into a
    /// shared controller.
    fn as_transition(&self) -> Option<&dyn TransitionBacked> {
        None
    }
}

/// Type alias for shared animation references.
pub type SharedAnimation = Rc<dyn Animation>;

/// An animation whose playback is fully described by one transition.
pub trait TransitionBacked {
    /// The underlying transition.
    fn transition(&self) -> SharedTransition;

    /// Bind this animation's transition into `controller` instead of
    /// building a driver of its own. `slot` picks the batch position; `None`
    /// appends.
    fn prepare(&self, controller: &SharedController, slot: Option<usize>);
}
