//! Frame-driven reference implementation of [`StateController`].

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;

use super::{
    ControllerFactory, ControllerKind, ControllerListener, PlaybackPhase,
    Playhead, SharedController, StateController,
};
use crate::transition::{SharedTarget, SharedTransition};

#[derive(Debug, Clone, Copy)]
enum Event {
    Start,
    End,
    Cancel,
    Reset,
}

/// Plays a batch of transitions off one [`Playhead`].
///
/// Progress is advanced by [`StateController::tick`]; every transition in
/// the batch receives the same progress, inverted when the controller was
/// built in reverse.
pub struct FrameController {
    kind: ControllerKind,
    host: Option<SharedTarget>,
    reverse: bool,
    batch: RefCell<Vec<SharedTransition>>,
    listeners: RefCell<Vec<Weak<dyn ControllerListener>>>,
    playhead: Cell<Playhead>,
}

impl FrameController {
    /// View-property driver hosted on `host`, pre-loaded with `batch`.
    #[must_use]
    pub fn view_property(
        host: SharedTarget,
        reverse: bool,
        batch: Vec<SharedTransition>,
    ) -> Self {
        Self {
            kind: ControllerKind::ViewProperty,
            host: Some(host),
            reverse,
            batch: RefCell::new(batch),
            listeners: RefCell::default(),
            playhead: Cell::default(),
        }
    }

    /// Animator driver with an empty batch.
    #[must_use]
    pub fn animator(reverse: bool) -> Self {
        Self {
            kind: ControllerKind::Animator,
            host: None,
            reverse,
            batch: RefCell::default(),
            listeners: RefCell::default(),
            playhead: Cell::default(),
        }
    }

    /// Render target hosting a view-property driver.
    #[must_use]
    pub fn host(&self) -> Option<&SharedTarget> {
        self.host.as_ref()
    }

    /// Whether progress is played backwards.
    #[must_use]
    pub fn is_reverse(&self) -> bool {
        self.reverse
    }

    /// Current playback phase.
    #[must_use]
    pub fn phase(&self) -> PlaybackPhase {
        self.playhead.get().phase()
    }

    /// Number of distinct listeners bound.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn with_playhead<R>(&self, f: impl FnOnce(&mut Playhead) -> R) -> R {
        let mut playhead = self.playhead.get();
        let result = f(&mut playhead);
        self.playhead.set(playhead);
        result
    }

    fn apply(&self, progress: f32) {
        let t = if self.reverse { 1.0 - progress } else { progress };
        for transition in self.transitions() {
            transition.apply(t);
        }
    }

    fn notify(&self, event: Event) {
        let listeners: Vec<Rc<dyn ControllerListener>> = self
            .listeners
            .borrow()
            .iter()
            .filter_map(Weak::upgrade)
            .collect();
        for listener in &listeners {
            match event {
                Event::Start => listener.on_controller_start(),
                Event::End => listener.on_controller_end(),
                Event::Cancel => listener.on_controller_cancel(),
                Event::Reset => listener.on_controller_reset(),
            }
        }
    }

    fn finish(&self) {
        self.with_playhead(Playhead::finish);
        self.apply(1.0);
        log::trace!("{:?} controller finished", self.kind);
        self.notify(Event::End);
    }
}

impl StateController for FrameController {
    fn kind(&self) -> ControllerKind {
        self.kind
    }

    fn set_duration(&self, duration: Duration) {
        self.with_playhead(|p| p.set_duration(duration));
    }

    fn duration(&self) -> Duration {
        self.playhead.get().duration()
    }

    fn bind(
        &self,
        transition: SharedTransition,
        listener: Weak<dyn ControllerListener>,
        slot: Option<usize>,
    ) {
        {
            let mut batch = self.batch.borrow_mut();
            if !batch.iter().any(|t| Rc::ptr_eq(t, &transition)) {
                let index = slot.map_or(batch.len(), |s| s.min(batch.len()));
                batch.insert(index, transition);
            }
        }
        let mut listeners = self.listeners.borrow_mut();
        if !listeners.iter().any(|l| Weak::ptr_eq(l, &listener)) {
            listeners.push(listener);
        }
    }

    fn transitions(&self) -> Vec<SharedTransition> {
        self.batch.borrow().clone()
    }

    fn start(&self) {
        self.with_playhead(Playhead::start);
        log::debug!(
            "starting {:?} controller: {} transitions over {:?}{}",
            self.kind,
            self.batch.borrow().len(),
            self.duration(),
            if self.reverse { " (reversed)" } else { "" },
        );
        self.apply(0.0);
        self.notify(Event::Start);
    }

    fn pause(&self) {
        if self.with_playhead(Playhead::pause) {
            log::trace!("{:?} controller paused", self.kind);
        }
    }

    fn resume(&self) {
        if self.with_playhead(Playhead::resume) {
            log::trace!("{:?} controller resumed", self.kind);
        }
    }

    fn end(&self) {
        if self.playhead.get().is_active() {
            self.finish();
        }
    }

    fn cancel(&self) {
        if !self.playhead.get().is_active() {
            return;
        }
        self.with_playhead(Playhead::stop);
        log::trace!("{:?} controller cancelled", self.kind);
        self.notify(Event::Cancel);
    }

    fn reset(&self) {
        self.with_playhead(Playhead::rewind);
        self.apply(0.0);
        self.notify(Event::Reset);
    }

    fn tick(&self, delta: Duration) -> bool {
        let Some(progress) = self.with_playhead(|p| p.advance(delta)) else {
            return self.is_running();
        };
        if self.playhead.get().is_complete() {
            self.finish();
            return false;
        }
        self.apply(progress);
        true
    }

    fn is_running(&self) -> bool {
        self.playhead.get().is_active()
    }
}

impl std::fmt::Debug for FrameController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameController")
            .field("kind", &self.kind)
            .field("host", &self.host.as_ref().map(|h| h.name()))
            .field("reverse", &self.reverse)
            .field("transitions", &self.batch.borrow().len())
            .field("playhead", &self.playhead.get())
            .finish()
    }
}

/// Builds [`FrameController`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameControllerFactory;

impl ControllerFactory for FrameControllerFactory {
    fn view_property(
        &self,
        host: SharedTarget,
        reverse: bool,
        batch: Vec<SharedTransition>,
    ) -> SharedController {
        Rc::new(FrameController::view_property(host, reverse, batch))
    }

    fn animator(&self, reverse: bool) -> SharedController {
        Rc::new(FrameController::animator(reverse))
    }
}
