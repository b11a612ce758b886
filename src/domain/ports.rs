use crate::domain::model::{ElementId, ObserverConfig};
use crate::utils::error::Result;

/// A live visibility-observer resource. Exclusively owned by one controller;
/// dropped resources must have been disconnected first.
///
/// No `Send`/`Sync` bounds: everything runs on a single event loop, and fakes
/// are free to share state through `Rc<RefCell<_>>`.
pub trait VisibilityHandle {
    /// Registers an element for visibility notifications. Fails for elements
    /// the platform cannot observe, e.g. ones detached from the document.
    fn observe(&mut self, element: ElementId) -> Result<()>;

    fn unobserve(&mut self, element: ElementId);

    fn disconnect(&mut self);
}

/// Platform surface the scroll-animation controller runs against: class
/// queries, class mutation, and visibility-observer construction.
pub trait DomAdapter {
    /// Capability probe; false in non-browser or legacy environments.
    fn supports_visibility_observer(&self) -> bool;

    fn elements_with_class(&self, class: &str) -> Vec<ElementId>;

    fn add_class(&self, element: ElementId, class: &str) -> Result<()>;

    fn create_observer(&self, config: &ObserverConfig) -> Result<Box<dyn VisibilityHandle>>;
}
