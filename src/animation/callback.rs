//! Generic animation driven by a progress closure.

use std::cell::Cell;
use std::time::Duration;

use super::base::AnimationBase;
use super::traits::Animation;
use crate::controller::Playhead;
use crate::error::AnimationError;

/// Plays an arbitrary effect by calling a closure with progress each frame.
///
/// This is the escape hatch for anything a [`Transition`] cannot describe
/// (value animators, custom drawing, audio fades). It owns its own clock and
/// never fuses into a shared controller, so a group containing one is
/// always driven member by member.
///
/// [`Transition`]: crate::transition::Transition
pub struct CallbackAnimation {
    base: AnimationBase,
    name: String,
    on_progress: Box<dyn Fn(f32)>,
    playhead: Cell<Playhead>,
}

impl CallbackAnimation {
    /// Create with an explicit duration. `on_progress` receives progress in
    /// `[0, 1]`, already inverted when reversed.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        duration: Duration,
        on_progress: impl Fn(f32) + 'static,
    ) -> Self {
        let base = AnimationBase::new();
        base.set_explicit_duration(Some(duration));
        Self {
            base,
            name: name.into(),
            on_progress: Box::new(on_progress),
            playhead: Cell::default(),
        }
    }

    /// Name used in logs.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    fn with_playhead<R>(&self, f: impl FnOnce(&mut Playhead) -> R) -> R {
        let mut playhead = self.playhead.get();
        let result = f(&mut playhead);
        self.playhead.set(playhead);
        result
    }

    fn emit(&self, progress: f32) {
        let t = if self.is_reverse() { 1.0 - progress } else { progress };
        (self.on_progress)(t);
    }

    fn finish(&self) {
        self.with_playhead(Playhead::finish);
        self.emit(1.0);
        self.base.set_animating(false);
        self.base.notify_end(self);
    }
}

impl Animation for CallbackAnimation {
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
        self.playhead.set(Playhead::new(duration));
        self.with_playhead(Playhead::start);
        log::trace!("'{}' started over {duration:?}", self.name);
        self.emit(0.0);
        self.base.set_animating(true);
        self.base.notify_start(self);
        Ok(())
    }

    fn cancel(&self) {
        if !self.playhead.get().is_active() {
            return;
        }
        self.with_playhead(Playhead::stop);
        self.base.set_animating(false);
        self.base.notify_cancel(self);
    }

    fn pause(&self) {
        let _ = self.with_playhead(Playhead::pause);
    }

    fn resume(&self) {
        let _ = self.with_playhead(Playhead::resume);
    }

    fn end(&self) {
        if self.playhead.get().is_active() {
            self.finish();
        }
    }

    fn reset(&self) {
        self.with_playhead(Playhead::rewind);
        self.emit(0.0);
        self.base.set_animating(false);
        self.base.notify_reset(self);
    }

    fn tick(&self, delta: Duration) -> bool {
        let Some(progress) = self.with_playhead(|p| p.advance(delta)) else {
            return self.playhead.get().is_active();
        };
        if self.playhead.get().is_complete() {
            self.finish();
            return false;
        }
        self.emit(progress);
        true
    }
}

impl std::fmt::Debug for CallbackAnimation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackAnimation")
            .field("name", &self.name)
            .field("base", &self.base)
            .field("playhead", &self.playhead.get())
            .finish_non_exhaustive()
    }
}
