//! Transition describes a property change over time, independent of the
//! driver that eventually plays it.
//!
//! A [`Transition`] is declarative: a render target, a set of
//! [`PropertyTrack`]s and an easing curve. Controllers own the clock and call
//! [`Transition::apply`] with raw progress; the transition eases it and
//! writes the interpolated values into its target.

mod target;

use std::rc::Rc;

pub use target::{Property, PropertyTarget, RenderTarget, SharedTarget};

use crate::util::easing::EasingFunction;

/// One property animated from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyTrack {
    /// Property being driven.
    pub property: Property,
    /// Value at progress 0.
    pub from: f32,
    /// Value at progress 1.
    pub to: f32,
}

impl PropertyTrack {
    /// Interpolated value at eased progress `t`.
    #[must_use]
    pub fn value_at(&self, t: f32) -> f32 {
        self.from + (self.to - self.from) * t
    }
}

/// Declarative description of a property change on one render target.
///
/// Built with the consuming builder methods, then shared as a
/// [`SharedTransition`]:
///
/// ```
/// use transition_group::transition::{Property, PropertyTarget, Transition};
///
/// let card = PropertyTarget::shared("card");
/// let fade = Transition::new("fade-in")
///     .targeting(card)
///     .with_track(Property::Alpha, 0.0, 1.0)
///     .into_shared();
/// assert_eq!(fade.tracks().len(), 1);
/// ```
#[derive(Clone)]
pub struct Transition {
    id: String,
    target: Option<SharedTarget>,
    tracks: Vec<PropertyTrack>,
    easing: EasingFunction,
}

/// Type alias for shared transition references.
pub type SharedTransition = Rc<Transition>;

impl Transition {
    /// Create a transition with no target, no tracks and the default curve.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            target: None,
            tracks: Vec::new(),
            easing: EasingFunction::default(),
        }
    }

    /// Set the render target this transition writes into.
    #[must_use]
    pub fn targeting(mut self, target: SharedTarget) -> Self {
        self.target = Some(target);
        self
    }

    /// Add a property track.
    #[must_use]
    pub fn with_track(mut self, property: Property, from: f32, to: f32) -> Self {
        self.tracks.push(PropertyTrack { property, from, to });
        self
    }

    /// Replace the easing curve.
    #[must_use]
    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    /// Wrap in a shared handle.
    #[must_use]
    pub fn into_shared(self) -> SharedTransition {
        Rc::new(self)
    }

    /// Identifier used in logs and errors.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Render target, if one was set.
    #[must_use]
    pub fn target(&self) -> Option<&SharedTarget> {
        self.target.as_ref()
    }

    /// Property tracks in insertion order.
    #[must_use]
    pub fn tracks(&self) -> &[PropertyTrack] {
        &self.tracks
    }

    /// Easing curve.
    #[must_use]
    pub fn easing(&self) -> EasingFunction {
        self.easing
    }

    /// Ease raw `progress` and write every track's value into the target.
    /// A transition without a target is inert.
    pub fn apply(&self, progress: f32) {
        let Some(target) = &self.target else {
            return;
        };
        let t = self.easing.evaluate(progress);
        for track in &self.tracks {
            target.set_property(track.property, track.value_at(t));
        }
    }
}

impl std::fmt::Debug for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transition")
            .field("id", &self.id)
            .field("target", &self.target.as_ref().map(|t| t.name()))
            .field("tracks", &self.tracks)
            .field("easing", &self.easing)
            .finish()
    }
}
