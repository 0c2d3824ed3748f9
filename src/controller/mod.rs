//! State controllers: low-level drivers that play a batch of transitions as
//! one synchronized unit.
//!
//! - [`StateController`]: the driver capability
//! - [`ControllerListener`]: how a driver reports lifecycle back to the
//!   animations bound to it
//! - [`ControllerFactory`]: builds the two driver variants selected by
//!   [`ControllerKind`]
//! - [`FrameController`]: reference driver advanced by explicit frame deltas

mod frame;
mod playhead;

use std::rc::{Rc, Weak};
use std::time::Duration;

pub use frame::{FrameController, FrameControllerFactory};
pub use playhead::{PlaybackPhase, Playhead};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::transition::{SharedTarget, SharedTransition};

/// Which driver variant an animation builds when it needs a controller.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum ControllerKind {
    /// Drives view properties; hosted on the first transition's render
    /// target and constructed with the whole batch up front.
    ViewProperty,
    /// Platform value-animator style driver; batch filled by binding.
    #[default]
    Animator,
}

/// Receives lifecycle events from a controller an animation is bound to.
pub trait ControllerListener {
    /// The controller started playing.
    fn on_controller_start(&self);
    /// The controller reached the end (naturally or via `end`).
    fn on_controller_end(&self);
    /// The controller was cancelled mid-run.
    fn on_controller_cancel(&self);
    /// The controller was reset to its starting values.
    fn on_controller_reset(&self);
}

/// A single low-level driver owning a batch of transitions.
///
/// All methods take `&self`; implementations use interior mutability and
/// must not hold a borrow while notifying listeners, since listeners may
/// call straight back into the controller.
pub trait StateController {
    /// Variant of this driver.
    fn kind(&self) -> ControllerKind;

    /// Set the target duration of the next run.
    fn set_duration(&self, duration: Duration);

    /// Target duration.
    fn duration(&self) -> Duration;

    /// Bind a transition and the animation that owns it.
    ///
    /// The transition joins the batch at `slot` (or the end when `None`)
    /// unless it is already part of it. The listener is registered once.
    fn bind(
        &self,
        transition: SharedTransition,
        listener: Weak<dyn ControllerListener>,
        slot: Option<usize>,
    );

    /// Snapshot of the batch in playback order.
    fn transitions(&self) -> Vec<SharedTransition>;

    /// Start the whole batch from the beginning.
    fn start(&self);

    /// Stop advancing, keeping current values.
    fn pause(&self);

    /// Continue after `pause`.
    fn resume(&self);

    /// Jump to the end values and report end.
    fn end(&self);

    /// Stop where it is and report cancel.
    fn cancel(&self);

    /// Restore starting values and report reset.
    fn reset(&self);

    /// Advance by one frame delta. Returns whether still running.
    fn tick(&self, delta: Duration) -> bool;

    /// Running or paused.
    fn is_running(&self) -> bool;
}

/// Type alias for shared controller references.
pub type SharedController = Rc<dyn StateController>;

/// Builds the driver variants an animation can select.
pub trait ControllerFactory {
    /// View-property driver hosted on `host`, pre-loaded with `batch`.
    fn view_property(
        &self,
        host: SharedTarget,
        reverse: bool,
        batch: Vec<SharedTransition>,
    ) -> SharedController;

    /// Animator driver; its batch is filled through
    /// [`StateController::bind`].
    fn animator(&self, reverse: bool) -> SharedController;
}

/// Type alias for shared factory references.
pub type SharedControllerFactory = Rc<dyn ControllerFactory>;

/// The factory used when none is supplied.
#[must_use]
pub fn default_factory() -> SharedControllerFactory {
    Rc::new(FrameControllerFactory)
}
