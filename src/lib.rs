// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Coordinates groups of UI transitions as one logical animation.
//!
//! A group starts, pauses, resumes, cancels and resets its members together,
//! reports their aggregated duration, and, when every member is backed by a
//! declarative transition, fuses them into a single shared driver so the
//! whole group plays in lockstep.
//!
//! # Key entry points
//!
//! - [`animation::AnimationManager`] - the group coordinator
//! - [`animation::TransitionAnimation`] - a fusable, transition-backed member
//! - [`animation::CallbackAnimation`] - a generic closure-driven member
//! - [`controller::StateController`] - the low-level driver capability
//! - [`options::GroupOptions`] - TOML-backed group configuration
//!
//! # Threading
//!
//! Everything here lives on the UI thread. Handles are `Rc`, state is
//! `Cell`/`RefCell`, and nothing blocks: the host's frame loop advances
//! playback by calling `tick` with the frame delta.

pub mod animation;
pub mod controller;
pub mod error;
pub mod options;
pub mod transition;
pub mod util;

pub use error::AnimationError;
