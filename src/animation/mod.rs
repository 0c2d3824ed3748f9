//! Animations and the group coordinator that drives them together.
//!
//! - [`Animation`] / [`AnimationListener`]: the playable unit and its
//!   observers
//! - [`TransitionAnimation`]: plays one transition; fusable into a shared
//!   controller
//! - [`CallbackAnimation`]: plays anything else through a progress closure
//! - [`AnimationManager`]: coordinates a group of animations as one

mod base;
mod callback;
mod manager;
mod traits;
mod transition_animation;

pub use base::{AnimationBase, DEFAULT_DURATION};
pub use callback::CallbackAnimation;
pub use manager::AnimationManager;
pub use traits::{
    Animation, AnimationListener, SharedAnimation, SharedListener,
    TransitionBacked,
};
pub use transition_animation::TransitionAnimation;
