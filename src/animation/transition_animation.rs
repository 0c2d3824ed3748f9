//! Adapter that plays a single [`Transition`](crate::transition::Transition)
//! as an [`Animation`].

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use super::base::AnimationBase;
use super::traits::{Animation, TransitionBacked};
use crate::controller::{
    default_factory, ControllerKind, ControllerListener, SharedController,
    SharedControllerFactory,
};
use crate::error::AnimationError;
use crate::transition::SharedTransition;

/// A transition-backed animation.
///
/// Started on its own it builds a private controller of its
/// [`ControllerKind`]. Inside a homogeneous group it is instead
/// [`prepare`](TransitionBacked::prepare)d against the group's shared
/// controller, and every control call is routed there.
pub struct TransitionAnimation {
    base: AnimationBase,
    transition: SharedTransition,
    factory: SharedControllerFactory,
    controller: RefCell<Option<SharedController>>,
    this: Weak<TransitionAnimation>,
}

impl TransitionAnimation {
    /// Wrap `transition` using [`FrameController`](crate::controller::FrameController)s.
    #[must_use]
    pub fn new(transition: SharedTransition) -> Rc<Self> {
        Self::with_factory(transition, default_factory())
    }

    /// Wrap `transition`, building private controllers with `factory`.
    #[must_use]
    pub fn with_factory(
        transition: SharedTransition,
        factory: SharedControllerFactory,
    ) -> Rc<Self> {
        Rc::new_cyclic(|this| Self {
            base: AnimationBase::new(),
            transition,
            factory,
            controller: RefCell::new(None),
            this: this.clone(),
        })
    }

    /// Controller currently driving this animation, private or shared.
    #[must_use]
    pub fn controller(&self) -> Option<SharedController> {
        self.controller.borrow().clone()
    }

    fn build_controller(&self) -> Result<SharedController, AnimationError> {
        let reverse = self.is_reverse();
        match self.controller_kind() {
            ControllerKind::ViewProperty => {
                let host = self.transition.target().cloned().ok_or_else(|| {
                    AnimationError::MissingTarget {
                        transition: self.transition.id().to_owned(),
                    }
                })?;
                Ok(self.factory.view_property(
                    host,
                    reverse,
                    vec![self.transition.clone()],
                ))
            }
            ControllerKind::Animator => Ok(self.factory.animator(reverse)),
        }
    }
}

impl TransitionBacked for TransitionAnimation {
    fn transition(&self) -> SharedTransition {
        self.transition.clone()
    }

    fn prepare(&self, controller: &SharedController, slot: Option<usize>) {
        *self.controller.borrow_mut() = Some(controller.clone());
        let listener: Weak<dyn ControllerListener> = self.this.clone();
        controller.bind(self.transition.clone(), listener, slot);
    }
}

impl ControllerListener for TransitionAnimation {
    fn on_controller_start(&self) {
        self.base.set_animating(true);
        self.base.notify_start(self);
    }

    fn on_controller_end(&self) {
        self.base.set_animating(false);
        self.base.notify_end(self);
    }

    fn on_controller_cancel(&self) {
        self.base.set_animating(false);
        self.base.notify_cancel(self);
    }

    fn on_controller_reset(&self) {
        self.base.set_animating(false);
        self.base.notify_reset(self);
    }
}

impl Animation for TransitionAnimation {
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
        let controller = self.build_controller()?;
        controller.set_duration(duration);
        self.prepare(&controller, None);
        controller.start();
        Ok(())
    }

    fn cancel(&self) {
        if let Some(controller) = self.controller() {
            controller.cancel();
        }
    }

    fn pause(&self) {
        if let Some(controller) = self.controller() {
            controller.pause();
        }
    }

    fn resume(&self) {
        if let Some(controller) = self.controller() {
            controller.resume();
        }
    }

    fn end(&self) {
        if let Some(controller) = self.controller() {
            controller.end();
        }
    }

    fn reset(&self) {
        if let Some(controller) = self.controller() {
            controller.reset();
        }
    }

    fn tick(&self, delta: Duration) -> bool {
        self.controller().is_some_and(|c| c.tick(delta))
    }

    fn as_transition(&self) -> Option<&dyn TransitionBacked> {
        Some(self)
    }
}

impl std::fmt::Debug for TransitionAnimation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransitionAnimation")
            .field("transition", &self.transition.id())
            .field("base", &self.base)
            .field("has_controller", &self.controller.borrow().is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::traits::{AnimationListener, SharedListener};
    use crate::transition::{Property, PropertyTarget, Transition};
    use crate::util::easing::EasingFunction;

    #[derive(Default)]
    struct Recorder {
        events: RefCell<Vec<&'static str>>,
    }

    impl AnimationListener for Recorder {
        fn on_start(&self, _source: &dyn Animation) {
            self.events.borrow_mut().push("start");
        }
        fn on_end(&self, _source: &dyn Animation) {
            self.events.borrow_mut().push("end");
        }
        fn on_cancel(&self, _source: &dyn Animation) {
            self.events.borrow_mut().push("cancel");
        }
        fn on_reset(&self, _source: &dyn Animation) {
            self.events.borrow_mut().push("reset");
        }
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn slide(target: &Rc<PropertyTarget>) -> SharedTransition {
        Transition::new("slide")
            .targeting(target.clone())
            .with_track(Property::TranslationX, 0.0, 40.0)
            .with_easing(EasingFunction::Linear)
            .into_shared()
    }

    #[test]
    fn test_standalone_run_drives_target_and_notifies() {
        let target = PropertyTarget::shared("card");
        let animation = TransitionAnimation::new(slide(&target));
        let recorder = Rc::new(Recorder::default());
        let listener: SharedListener = recorder.clone();
        animation.add_listener(listener);

        animation.start_with_duration(ms(100)).unwrap();
        assert!(animation.is_animating());
        assert!(animation.tick(ms(50)));
        assert_eq!(target.value(Property::TranslationX), Some(20.0));

        assert!(!animation.tick(ms(50)));
        assert!(!animation.is_animating());
        assert_eq!(target.value(Property::TranslationX), Some(40.0));
        assert_eq!(*recorder.events.borrow(), vec!["start", "end"]);
    }

    #[test]
    fn test_restart_cancels_running_playback() {
        let target = PropertyTarget::shared("card");
        let animation = TransitionAnimation::new(slide(&target));
        let recorder = Rc::new(Recorder::default());
        animation.add_listener(recorder.clone());

        animation.start().unwrap();
        animation.start().unwrap();
        assert_eq!(
            *recorder.events.borrow(),
            vec!["start", "cancel", "start"]
        );
    }

    #[test]
    fn test_view_property_requires_target() {
        let orphan = Transition::new("orphan")
            .with_track(Property::Alpha, 0.0, 1.0)
            .into_shared();
        let animation = TransitionAnimation::new(orphan);
        animation.set_controller_kind(ControllerKind::ViewProperty);

        let err = animation.start().unwrap_err();
        assert!(matches!(
            err,
            AnimationError::MissingTarget { ref transition } if transition == "orphan"
        ));
        assert!(!animation.is_animating());
    }

    #[test]
    fn test_view_property_hosts_on_own_target() {
        let target = PropertyTarget::shared("card");
        let animation = TransitionAnimation::new(slide(&target));
        animation.set_controller_kind(ControllerKind::ViewProperty);

        animation.start_with_duration(ms(100)).unwrap();
        let controller = animation.controller().unwrap();
        assert_eq!(controller.kind(), ControllerKind::ViewProperty);
        assert_eq!(controller.transitions().len(), 1);
    }

    #[test]
    fn test_reverse_runs_from_end_values() {
        let target = PropertyTarget::shared("card");
        let animation = TransitionAnimation::new(slide(&target));
        animation.set_reverse(true);

        animation.start_with_duration(ms(100)).unwrap();
        assert_eq!(target.value(Property::TranslationX), Some(40.0));
        animation.end();
        assert_eq!(target.value(Property::TranslationX), Some(0.0));
    }

    #[test]
    fn test_controls_before_start_are_harmless() {
        let target = PropertyTarget::shared("card");
        let animation = TransitionAnimation::new(slide(&target));
        animation.pause();
        animation.resume();
        animation.cancel();
        animation.end();
        animation.reset();
        assert!(!animation.tick(ms(16)));
        assert!(animation.controller().is_none());
    }

    #[test]
    fn test_default_duration() {
        let target = PropertyTarget::shared("card");
        let animation = TransitionAnimation::new(slide(&target));
        assert_eq!(animation.duration(), ms(300));
        animation.set_duration(Some(ms(120)));
        assert_eq!(animation.duration(), ms(120));
    }
}
