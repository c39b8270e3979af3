//! Animation collaborator contracts.
//!
//! Animations are owned by an external animation engine. A style value may
//! hold a reference to one; the adapter reads its start value so the element
//! renders correctly before the animation begins, and registers the property
//! name back on the animation so the engine knows what to drive.
//!
//! - [`Animation`]: A single animated value
//! - [`AnimationSet`]: An ordered group of animations driven together
//! - [`StaticAnimation`] / [`StaticAnimationSet`]: Minimal implementations
//!   that only record their bindings

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::value::StyleValue;

/// Shared reference to an animation held inside a style value.
pub type AnimationRef = Rc<dyn Animation>;

/// Shared reference to an animation set held inside a style value.
pub type AnimationSetRef = Rc<dyn AnimationSet>;

/// A single animated value.
///
/// Registration methods take `&self`; implementations keep their own
/// interior mutability. Calling them more than once with the same property
/// is expected to be harmless.
pub trait Animation: fmt::Debug {
    /// The value the property renders before the animation starts.
    fn start_value(&self) -> StyleValue;

    /// Binds the animation to a regular style property.
    fn set_style_attribute(&self, property: &str);

    /// Binds the animation to a transform function (e.g. `"scale"`).
    fn set_transform_style_attribute(&self, property: &str);
}

/// One entry of an [`AnimationSet`].
#[derive(Debug, Clone)]
pub struct AnimationSetChild {
    pub animation: AnimationRef,
    /// Whether this child starts after the previous one finishes.
    pub follow: bool,
}

impl AnimationSetChild {
    pub fn new<A: Animation + 'static>(animation: Rc<A>) -> Self {
        Self {
            animation,
            follow: false,
        }
    }

    /// Creates a child that starts after its predecessor.
    pub fn following<A: Animation + 'static>(animation: Rc<A>) -> Self {
        Self {
            animation,
            follow: true,
        }
    }

    pub fn start_value(&self) -> StyleValue {
        self.animation.start_value()
    }
}

/// An ordered group of animations bound to a single property.
pub trait AnimationSet: fmt::Debug {
    fn children(&self) -> &[AnimationSetChild];

    /// Binds the set to a regular style property.
    fn set_style_attribute(&self, property: &str);

    /// Binds the set to a transform function.
    fn set_transform_style_attribute(&self, property: &str);
}

/// Records which kind of property an animation was bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding {
    Style(String),
    Transform(String),
}

/// An animation that never runs on its own; it holds a start value and
/// remembers every binding it receives.
///
/// Useful for renderers that drive animations elsewhere and only need the
/// binding information, and for tests.
///
/// # Example
///
/// ```rust
/// use stylebridge::{resolve_style, Binding, StaticAnimation, StyleFragment, StyleValue};
///
/// let fade = StaticAnimation::new(0.0);
/// let style = StyleFragment::new().with("opacity", StyleValue::animation(fade.clone()));
///
/// let resolved = resolve_style(&style.into());
/// assert_eq!(resolved.get("opacity"), Some(&StyleValue::Number(0.0)));
/// assert_eq!(fade.bindings(), vec![Binding::Style("opacity".into())]);
/// ```
#[derive(Debug)]
pub struct StaticAnimation {
    start_value: StyleValue,
    bindings: RefCell<Vec<Binding>>,
}

impl StaticAnimation {
    pub fn new<V: Into<StyleValue>>(start_value: V) -> Rc<Self> {
        Rc::new(Self {
            start_value: start_value.into(),
            bindings: RefCell::new(Vec::new()),
        })
    }

    /// Every binding received so far, oldest first.
    pub fn bindings(&self) -> Vec<Binding> {
        self.bindings.borrow().clone()
    }
}

impl Animation for StaticAnimation {
    fn start_value(&self) -> StyleValue {
        self.start_value.clone()
    }

    fn set_style_attribute(&self, property: &str) {
        self.bindings
            .borrow_mut()
            .push(Binding::Style(property.to_string()));
    }

    fn set_transform_style_attribute(&self, property: &str) {
        self.bindings
            .borrow_mut()
            .push(Binding::Transform(property.to_string()));
    }
}

/// An animation set counterpart of [`StaticAnimation`].
#[derive(Debug)]
pub struct StaticAnimationSet {
    children: Vec<AnimationSetChild>,
    bindings: RefCell<Vec<Binding>>,
}

impl StaticAnimationSet {
    pub fn new(children: Vec<AnimationSetChild>) -> Rc<Self> {
        Rc::new(Self {
            children,
            bindings: RefCell::new(Vec::new()),
        })
    }

    pub fn bindings(&self) -> Vec<Binding> {
        self.bindings.borrow().clone()
    }
}

impl AnimationSet for StaticAnimationSet {
    fn children(&self) -> &[AnimationSetChild] {
        &self.children
    }

    fn set_style_attribute(&self, property: &str) {
        self.bindings
            .borrow_mut()
            .push(Binding::Style(property.to_string()));
    }

    fn set_transform_style_attribute(&self, property: &str) {
        self.bindings
            .borrow_mut()
            .push(Binding::Transform(property.to_string()));
    }
}
