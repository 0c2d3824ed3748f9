//! Render targets: the things a transition writes property values into.

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Visual properties a transition can drive on a target.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    /// Opacity, 0.0 (transparent) to 1.0 (opaque).
    Alpha,
    /// Horizontal offset in logical pixels.
    TranslationX,
    /// Vertical offset in logical pixels.
    TranslationY,
    /// Horizontal scale factor.
    ScaleX,
    /// Vertical scale factor.
    ScaleY,
    /// Rotation in degrees.
    Rotation,
    /// Z elevation in logical pixels.
    Elevation,
}

/// Something on screen whose properties can be driven by a transition.
///
/// Implementations live on the UI thread; `set_property` takes `&self` so a
/// target can be shared between several transitions.
pub trait RenderTarget {
    /// Name used in logs and error messages.
    fn name(&self) -> &str;

    /// Write one property value.
    fn set_property(&self, property: Property, value: f32);
}

/// Type alias for shared render target references.
pub type SharedTarget = Rc<dyn RenderTarget>;

/// In-memory render target that records the latest value per property.
///
/// Useful headless, and as the backing store a real view adapter reads from
/// each frame.
#[derive(Debug, Default)]
pub struct PropertyTarget {
    name: String,
    values: RefCell<FxHashMap<Property, f32>>,
}

impl PropertyTarget {
    /// Create an empty target.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: RefCell::default(),
        }
    }

    /// Create an empty target already wrapped in a shared handle.
    #[must_use]
    pub fn shared(name: impl Into<String>) -> Rc<Self> {
        Rc::new(Self::new(name))
    }

    /// Latest value written for `property`, if any.
    #[must_use]
    pub fn value(&self, property: Property) -> Option<f32> {
        self.values.borrow().get(&property).copied()
    }
}

impl RenderTarget for PropertyTarget {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_property(&self, property: Property, value: f32) {
        let _ = self.values.borrow_mut().insert(property, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_target_records_latest_value() {
        let target = PropertyTarget::new("card");
        assert_eq!(target.value(Property::Alpha), None);

        target.set_property(Property::Alpha, 0.25);
        target.set_property(Property::Alpha, 0.75);
        target.set_property(Property::Rotation, 90.0);

        assert_eq!(target.value(Property::Alpha), Some(0.75));
        assert_eq!(target.value(Property::Rotation), Some(90.0));
        assert_eq!(target.name(), "card");
    }
}
