//! Animation manager for coordinating a group of animations as one unit.
//!
//! The `AnimationManager` owns an ordered list of member animations and:
//! - starts, pauses, resumes, ends, cancels and resets them together
//! - aggregates their duration (slowest member unless overridden)
//! - fuses them into one shared
//!   [`StateController`](crate::controller::StateController) when every
//!   member is transition-backed, otherwise drives each member
//!   independently
//! - reports group lifecycle to its own listeners
//!
//! # Completion policy
//!
//! The group's state follows its **first member**. On every start the
//! manager listens to that member only; its start, end, cancel and reset
//! are reported as the group's. Members with longer runs keep playing after
//! the group reports end, so give members equal durations (or start the
//! group with an explicit duration) when that matters.
//!
//! # Usage
//!
//! ```
//! use std::time::Duration;
//!
//! use transition_group::animation::{Animation, AnimationManager};
//! use transition_group::transition::{Property, PropertyTarget, Transition};
//!
//! let card = PropertyTarget::shared("card");
//! let manager = AnimationManager::new();
//! manager.add_all_transitions([
//!     Transition::new("fade")
//!         .targeting(card.clone())
//!         .with_track(Property::Alpha, 0.0, 1.0)
//!         .into_shared(),
//!     Transition::new("slide")
//!         .targeting(card.clone())
//!         .with_track(Property::TranslationY, 24.0, 0.0)
//!         .into_shared(),
//! ]);
//!
//! manager.start_with_duration(Duration::from_millis(200)).unwrap();
//! assert!(manager.shared_controller().is_some());
//!
//! // The host's frame loop pumps the group.
//! while manager.tick(Duration::from_millis(16)) {}
//! assert_eq!(card.value(Property::Alpha), Some(1.0));
//! ```

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;

use super::base::AnimationBase;
use super::traits::{
    Animation, AnimationListener, SharedAnimation, SharedListener,
    TransitionBacked,
};
use super::transition_animation::TransitionAnimation;
use crate::controller::{
    default_factory, ControllerKind, SharedController,
    SharedControllerFactory,
};
use crate::error::AnimationError;
use crate::options::GroupOptions;
use crate::transition::{SharedTarget, SharedTransition};

/// Coordinates a group of animations as one logical animation.
///
/// Always handled through an `Rc`: the manager hands members a listener that
/// points back at it. Mutate membership only while the group is not
/// animating; removal during playback is unsupported and not guarded.
pub struct AnimationManager {
    base: AnimationBase,
    members: RefCell<Vec<SharedAnimation>>,
    /// `None` until the next start re-checks membership.
    homogeneous: Cell<Option<bool>>,
    shared_controller: RefCell<Option<SharedController>>,
    factory: SharedControllerFactory,
    listener: SharedListener,
}

/// Control call fanned out to the shared controller or to every member.
#[derive(Debug, Clone, Copy)]
enum Control {
    Cancel,
    Pause,
    Resume,
    End,
    Reset,
}

/// Forwards the representative member's lifecycle to the manager.
struct GroupListener {
    manager: Weak<AnimationManager>,
}

impl AnimationListener for GroupListener {
    fn on_start(&self, _source: &dyn Animation) {
        if let Some(manager) = self.manager.upgrade() {
            manager.base.set_animating(true);
        }
    }

    fn on_end(&self, _source: &dyn Animation) {
        if let Some(manager) = self.manager.upgrade() {
            manager.base.set_animating(false);
            manager.base.notify_end(&*manager);
        }
    }

    fn on_cancel(&self, _source: &dyn Animation) {
        if let Some(manager) = self.manager.upgrade() {
            manager.base.set_animating(false);
            manager.base.notify_cancel(&*manager);
        }
    }

    fn on_reset(&self, _source: &dyn Animation) {
        if let Some(manager) = self.manager.upgrade() {
            manager.base.set_animating(false);
            manager.base.notify_reset(&*manager);
        }
    }
}

impl AnimationManager {
    /// Empty group using [`FrameController`](crate::controller::FrameController)s.
    #[must_use]
    pub fn new() -> Rc<Self> {
        Self::with_factory(default_factory())
    }

    /// Empty group building shared controllers with `factory`.
    #[must_use]
    pub fn with_factory(factory: SharedControllerFactory) -> Rc<Self> {
        Rc::new_cyclic(|manager| Self {
            base: AnimationBase::new(),
            members: RefCell::default(),
            homogeneous: Cell::new(None),
            shared_controller: RefCell::new(None),
            factory,
            listener: Rc::new(GroupListener {
                manager: manager.clone(),
            }),
        })
    }

    /// Empty group configured from `options`.
    #[must_use]
    pub fn from_options(
        options: &GroupOptions,
        factory: SharedControllerFactory,
    ) -> Rc<Self> {
        let manager = Self::with_factory(factory);
        manager.base.set_controller_kind(options.controller);
        manager.base.set_explicit_duration(options.duration());
        manager.base.set_reverse(options.reverse);
        manager
    }

    /// Append one member.
    pub fn add_animation(&self, animation: SharedAnimation) {
        self.members.borrow_mut().push(animation);
        self.invalidate();
    }

    /// Append a batch of members in order.
    pub fn add_all_animations(
        &self,
        animations: impl IntoIterator<Item = SharedAnimation>,
    ) {
        self.members.borrow_mut().extend(animations);
        self.invalidate();
    }

    /// Wrap each transition in a [`TransitionAnimation`] and append them in
    /// order.
    pub fn add_all_transitions(
        &self,
        transitions: impl IntoIterator<Item = SharedTransition>,
    ) {
        let adapters =
            transitions.into_iter().map(|transition| -> SharedAnimation {
                TransitionAnimation::with_factory(
                    transition,
                    self.factory.clone(),
                )
            });
        self.members.borrow_mut().extend(adapters);
        self.invalidate();
    }

    /// Remove the first occurrence of `animation` (by handle) and detach the
    /// group's listener from it. Returns whether a member was removed.
    ///
    /// Must not be called while the group is animating.
    #[must_use]
    pub fn remove_animation(&self, animation: &SharedAnimation) -> bool {
        let removed = {
            let mut members = self.members.borrow_mut();
            let Some(index) =
                members.iter().position(|m| Rc::ptr_eq(m, animation))
            else {
                return false;
            };
            members.remove(index)
        };
        let _ = removed.remove_listener(&self.listener);
        true
    }

    /// Detach the group's listener from every member and clear the group.
    /// Playback already in flight is left alone; cancel first.
    pub fn remove_all_animations(&self) {
        let members = std::mem::take(&mut *self.members.borrow_mut());
        for member in &members {
            let _ = member.remove_listener(&self.listener);
        }
    }

    /// Snapshot of the members in order.
    #[must_use]
    pub fn animations(&self) -> Vec<SharedAnimation> {
        self.members.borrow().clone()
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.borrow().len()
    }

    /// Whether the group has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.borrow().is_empty()
    }

    /// Controller built by the last homogeneous start, if the current run is
    /// fused.
    #[must_use]
    pub fn shared_controller(&self) -> Option<SharedController> {
        self.shared_controller.borrow().clone()
    }

    /// Whether membership changed since the last homogeneity check.
    #[must_use]
    pub fn needs_recheck(&self) -> bool {
        self.homogeneous.get().is_none()
    }

    /// The listener this group attaches to its representative member.
    #[must_use]
    pub fn group_listener(&self) -> &SharedListener {
        &self.listener
    }

    fn invalidate(&self) {
        self.homogeneous.set(None);
    }

    fn is_homogeneous(&self, members: &[SharedAnimation]) -> bool {
        if let Some(cached) = self.homogeneous.get() {
            return cached;
        }
        let result = members.iter().all(|m| m.as_transition().is_some());
        log::debug!(
            "group of {} is {}",
            members.len(),
            if result { "homogeneous" } else { "heterogeneous" }
        );
        self.homogeneous.set(Some(result));
        result
    }

    fn build_shared_controller(
        &self,
        batch: Vec<SharedTransition>,
    ) -> Result<SharedController, AnimationError> {
        let reverse = self.is_reverse();
        match self.controller_kind() {
            ControllerKind::ViewProperty => {
                let host = view_host(&batch)?;
                Ok(self.factory.view_property(host, reverse, batch))
            }
            ControllerKind::Animator => Ok(self.factory.animator(reverse)),
        }
    }

    fn start_fused(
        &self,
        members: &[SharedAnimation],
        duration: Duration,
    ) -> Result<(), AnimationError> {
        let backed: Vec<&dyn TransitionBacked> =
            members.iter().filter_map(|m| m.as_transition()).collect();
        let batch = backed.iter().map(|b| b.transition()).collect();

        let controller = self.build_shared_controller(batch)?;
        controller.set_duration(duration);
        for member in &backed {
            member.prepare(&controller, None);
        }
        *self.shared_controller.borrow_mut() = Some(controller.clone());
        log::debug!(
            "fused {} members into one {:?} controller",
            backed.len(),
            controller.kind()
        );
        controller.start();
        Ok(())
    }

    fn start_each(
        members: &[SharedAnimation],
        duration: Duration,
    ) -> Result<(), AnimationError> {
        log::debug!("starting {} members independently", members.len());
        for member in members {
            member.start_with_duration(duration)?;
        }
        Ok(())
    }

    /// Fan `control` out to the running group. Ignored while idle.
    fn dispatch(&self, control: Control) {
        if self.is_animating() {
            self.fan_out(control);
        }
    }

    /// Unwind a start that failed partway: stop whatever members did start
    /// and close the run with a single cancel.
    fn abort_start(&self, first: &SharedAnimation, err: &AnimationError) {
        log::warn!("group start failed, cancelling: {err}");
        let _ = first.remove_listener(&self.listener);
        self.fan_out(Control::Cancel);
        self.base.set_animating(false);
        self.base.notify_cancel(self);
    }

    fn fan_out(&self, control: Control) {
        if let Some(controller) = self.shared_controller() {
            match control {
                Control::Cancel => controller.cancel(),
                Control::Pause => controller.pause(),
                Control::Resume => controller.resume(),
                Control::End => controller.end(),
                Control::Reset => controller.reset(),
            }
            return;
        }
        for member in self.animations() {
            match control {
                Control::Cancel => member.cancel(),
                Control::Pause => member.pause(),
                Control::Resume => member.resume(),
                Control::End => member.end(),
                Control::Reset => member.reset(),
            }
        }
    }
}

/// Render target hosting a view-property controller: the first transition's.
fn view_host(batch: &[SharedTransition]) -> Result<SharedTarget, AnimationError> {
    let first = batch.first().ok_or_else(|| AnimationError::MissingTarget {
        transition: String::new(),
    })?;
    first.target().cloned().ok_or_else(|| AnimationError::MissingTarget {
        transition: first.id().to_owned(),
    })
}

impl Animation for AnimationManager {
    fn base(&self) -> &AnimationBase {
        &self.base
    }

    fn start_with_duration(
        &self,
        duration: Duration,
    ) -> Result<(), AnimationError> {
        if self.is_animating() {
            self.cancel();
        }
        // A controller from a previous run must never receive controls for
        // this one.
        let _ = self.shared_controller.borrow_mut().take();

        let Some(first) = self.members.borrow().first().cloned() else {
            return Ok(());
        };
        first.add_listener(self.listener.clone());
        // Listeners run before a strategy is chosen so they can still adjust
        // the members.
        self.base.notify_start(self);

        let members = self.animations();
        if members.is_empty() {
            return Ok(());
        }
        let started = if self.is_homogeneous(&members) {
            self.start_fused(&members, duration)
        } else {
            Self::start_each(&members, duration)
        };
        if let Err(err) = started {
            self.abort_start(&first, &err);
            return Err(err);
        }
        Ok(())
    }

    fn cancel(&self) {
        self.dispatch(Control::Cancel);
    }

    fn pause(&self) {
        self.dispatch(Control::Pause);
    }

    fn resume(&self) {
        self.dispatch(Control::Resume);
    }

    fn end(&self) {
        self.dispatch(Control::End);
    }

    fn reset(&self) {
        self.dispatch(Control::Reset);
    }

    fn tick(&self, delta: Duration) -> bool {
        if let Some(controller) = self.shared_controller() {
            return controller.tick(delta);
        }
        let mut running = false;
        for member in self.animations() {
            running |= member.tick(delta);
        }
        running
    }

    /// Explicit duration if set, otherwise the longest member duration
    /// (zero for an empty group). Recomputed on every call.
    fn duration(&self) -> Duration {
        if let Some(explicit) = self.base.explicit_duration() {
            return explicit;
        }
        self.members
            .borrow()
            .iter()
            .map(|m| m.duration())
            .max()
            .unwrap_or(Duration::ZERO)
    }

    /// Flip every member's own direction when the group's direction
    /// changes. Members keep their direction relative to the group, so a
    /// member that was already reversed plays forward in a reversed group.
    fn set_reverse(&self, reverse: bool) {
        if self.base.is_reverse() == reverse {
            return;
        }
        self.base.set_reverse(reverse);
        for member in self.animations() {
            member.set_reverse(!member.is_reverse());
        }
    }
}

impl std::fmt::Debug for AnimationManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationManager")
            .field("members", &self.len())
            .field("homogeneous", &self.homogeneous.get())
            .field("fused", &self.shared_controller.borrow().is_some())
            .field("base", &self.base)
            .finish_non_exhaustive()
    }
}
