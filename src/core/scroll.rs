use crate::domain::model::{ElementId, ObserverConfig, VisibilityEntry};
use crate::domain::ports::{DomAdapter, VisibilityHandle};
use std::collections::HashSet;

/// Marker class on elements that should reveal on scroll.
pub const TRIGGER_CLASS: &str = "animate-on-scroll";
/// Class added once an element has entered the viewport.
pub const VISIBLE_CLASS: &str = "visible";

/// Capability probe for the visibility primitive. Pure query; warns so a
/// degraded page still leaves a trace in the logs.
pub fn is_visibility_observer_supported<D: DomAdapter>(dom: &D) -> bool {
    if !dom.supports_visibility_observer() {
        tracing::warn!("Visibility observer is not supported in this environment");
        return false;
    }
    true
}

/// Drives the one-shot scroll-reveal animation over an injected DOM surface.
///
/// Lifecycle: Uninitialized until `init` acquires the observer resource,
/// Active while it is held, back to Uninitialized after `cleanup`. A failed
/// `init` leaves the controller Uninitialized and may simply be retried.
/// Platform failures are logged and degrade to false/no-op; nothing here can
/// take the embedding page down.
pub struct ScrollAnimationController<D: DomAdapter> {
    dom: D,
    config: ObserverConfig,
    observer: Option<Box<dyn VisibilityHandle>>,
    tracked: HashSet<ElementId>,
    initialized: bool,
}

impl<D: DomAdapter> ScrollAnimationController<D> {
    /// Stores the configuration; no resource is acquired yet.
    pub fn new(dom: D, config: ObserverConfig) -> Self {
        Self {
            dom,
            config,
            observer: None,
            tracked: HashSet::new(),
            initialized: false,
        }
    }

    /// Acquires the observer and registers every trigger-class element.
    ///
    /// Returns whether the observer resource was acquired. A second call
    /// without `cleanup` returns false and leaves the held resource untouched.
    /// A page with zero trigger elements still initializes successfully.
    pub fn init(&mut self) -> bool {
        if self.initialized {
            tracing::warn!("Observer already initialized");
            return false;
        }

        if !is_visibility_observer_supported(&self.dom) {
            return false;
        }

        // Release anything a previous failed attempt may have left behind.
        self.cleanup();

        match self.dom.create_observer(&self.config) {
            Ok(observer) => self.observer = Some(observer),
            Err(error) => {
                tracing::error!("Failed to create visibility observer: {}", error);
                return false;
            }
        }

        let elements = self.dom.elements_with_class(TRIGGER_CLASS);
        if elements.is_empty() {
            tracing::info!("No elements found with class {:?}", TRIGGER_CLASS);
        }

        let mut observed = 0usize;
        if let Some(observer) = self.observer.as_mut() {
            for element in elements {
                match observer.observe(element) {
                    Ok(()) => {
                        self.tracked.insert(element);
                        observed += 1;
                    }
                    Err(error) => {
                        tracing::error!("Failed to observe element {:?}: {}", element, error);
                    }
                }
            }
        }

        self.initialized = true;
        tracing::info!(
            "Scroll animation controller initialized, observing {} elements",
            observed
        );
        true
    }

    /// Visibility callback. Each intersecting, still-tracked element gains
    /// the reveal class and is deregistered immediately, so the reveal fires
    /// at most once per element. Non-intersecting entries are ignored.
    pub fn handle_entries(&mut self, entries: &[VisibilityEntry]) {
        if entries.is_empty() {
            return;
        }

        for entry in entries {
            if !entry.is_intersecting {
                continue;
            }

            // Stale notification: already revealed or cleaned up.
            if !self.tracked.remove(&entry.target) {
                continue;
            }

            if let Err(error) = self.dom.add_class(entry.target, VISIBLE_CLASS) {
                tracing::error!(
                    "Failed to add class to element {:?}: {}",
                    entry.target,
                    error
                );
            }

            if let Some(observer) = self.observer.as_mut() {
                observer.unobserve(entry.target);
            }
        }
    }

    /// Disconnects and releases the observer if one is held. Idempotent and
    /// safe in any state; always resets to Uninitialized.
    pub fn cleanup(&mut self) {
        if let Some(mut observer) = self.observer.take() {
            observer.disconnect();
        }
        self.tracked.clear();
        self.initialized = false;
    }

    /// Releases before reacquiring so repeated calls cannot leak observers.
    pub fn reinit(&mut self) -> bool {
        self.cleanup();
        self.init()
    }

    pub fn is_active(&self) -> bool {
        self.initialized && self.observer.is_some()
    }

    /// Number of elements still awaiting their reveal.
    pub fn observed_count(&self) -> usize {
        self.tracked.len()
    }
}

/// Builds a controller with the default configuration and starts it.
pub fn init_scroll_animations<D: DomAdapter>(dom: D) -> ScrollAnimationController<D> {
    let mut controller = ScrollAnimationController::new(dom, ObserverConfig::default());
    controller.init();
    controller
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::{Result, SiteError};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct DomState {
        elements: Vec<(ElementId, HashSet<String>)>,
        detached: HashSet<ElementId>,
        supported: bool,
        fail_observer_creation: bool,
        observers_created: usize,
        disconnects: usize,
        unobserve_calls: Vec<ElementId>,
    }

    #[derive(Clone)]
    struct FakeDom {
        state: Rc<RefCell<DomState>>,
    }

    impl FakeDom {
        fn new(trigger_elements: usize) -> Self {
            let mut state = DomState {
                supported: true,
                ..DomState::default()
            };
            for i in 0..trigger_elements {
                let mut classes = HashSet::new();
                classes.insert(TRIGGER_CLASS.to_string());
                state.elements.push((ElementId(i as u64), classes));
            }
            Self {
                state: Rc::new(RefCell::new(state)),
            }
        }

        fn has_class(&self, element: ElementId, class: &str) -> bool {
            self.state
                .borrow()
                .elements
                .iter()
                .any(|(id, classes)| *id == element && classes.contains(class))
        }
    }

    struct FakeHandle {
        state: Rc<RefCell<DomState>>,
    }

    impl VisibilityHandle for FakeHandle {
        fn observe(&mut self, element: ElementId) -> Result<()> {
            if self.state.borrow().detached.contains(&element) {
                return Err(SiteError::PlatformError {
                    message: format!("element {:?} is detached", element),
                });
            }
            Ok(())
        }

        fn unobserve(&mut self, element: ElementId) {
            self.state.borrow_mut().unobserve_calls.push(element);
        }

        fn disconnect(&mut self) {
            self.state.borrow_mut().disconnects += 1;
        }
    }

    impl DomAdapter for FakeDom {
        fn supports_visibility_observer(&self) -> bool {
            self.state.borrow().supported
        }

        fn elements_with_class(&self, class: &str) -> Vec<ElementId> {
            self.state
                .borrow()
                .elements
                .iter()
                .filter(|(_, classes)| classes.contains(class))
                .map(|(id, _)| *id)
                .collect()
        }

        fn add_class(&self, element: ElementId, class: &str) -> Result<()> {
            let mut state = self.state.borrow_mut();
            match state.elements.iter_mut().find(|(id, _)| *id == element) {
                Some((_, classes)) => {
                    classes.insert(class.to_string());
                    Ok(())
                }
                None => Err(SiteError::PlatformError {
                    message: format!("unknown element {:?}", element),
                }),
            }
        }

        fn create_observer(&self, _config: &ObserverConfig) -> Result<Box<dyn VisibilityHandle>> {
            let mut state = self.state.borrow_mut();
            if state.fail_observer_creation {
                return Err(SiteError::PlatformError {
                    message: "observer construction rejected".to_string(),
                });
            }
            state.observers_created += 1;
            Ok(Box::new(FakeHandle {
                state: Rc::clone(&self.state),
            }))
        }
    }

    fn controller(dom: &FakeDom) -> ScrollAnimationController<FakeDom> {
        ScrollAnimationController::new(dom.clone(), ObserverConfig::default())
    }

    #[test]
    fn test_init_observes_trigger_elements() {
        let dom = FakeDom::new(3);
        let mut ctrl = controller(&dom);

        assert!(ctrl.init());
        assert!(ctrl.is_active());
        assert_eq!(ctrl.observed_count(), 3);
        assert_eq!(dom.state.borrow().observers_created, 1);
    }

    #[test]
    fn test_double_init_is_guarded() {
        let dom = FakeDom::new(2);
        let mut ctrl = controller(&dom);

        assert!(ctrl.init());
        assert!(!ctrl.init());
        assert_eq!(dom.state.borrow().observers_created, 1);

        // The single held observer disconnects exactly once.
        ctrl.cleanup();
        assert_eq!(dom.state.borrow().disconnects, 1);
    }

    #[test]
    fn test_init_with_zero_elements_still_succeeds() {
        let dom = FakeDom::new(0);
        let mut ctrl = controller(&dom);

        assert!(ctrl.init());
        assert!(ctrl.is_active());
        assert_eq!(ctrl.observed_count(), 0);
    }

    #[test]
    fn test_unsupported_environment_fails_init() {
        let dom = FakeDom::new(2);
        dom.state.borrow_mut().supported = false;
        let mut ctrl = controller(&dom);

        assert!(!is_visibility_observer_supported(&dom));
        assert!(!ctrl.init());
        assert!(!ctrl.is_active());
        assert_eq!(dom.state.borrow().observers_created, 0);
    }

    #[test]
    fn test_failed_observer_creation_allows_retry() {
        let dom = FakeDom::new(2);
        dom.state.borrow_mut().fail_observer_creation = true;
        let mut ctrl = controller(&dom);

        assert!(!ctrl.init());
        assert!(!ctrl.is_active());

        dom.state.borrow_mut().fail_observer_creation = false;
        assert!(ctrl.init());
        assert!(ctrl.is_active());
        assert_eq!(ctrl.observed_count(), 2);
    }

    #[test]
    fn test_detached_element_is_skipped_without_aborting() {
        let dom = FakeDom::new(3);
        dom.state.borrow_mut().detached.insert(ElementId(1));
        let mut ctrl = controller(&dom);

        assert!(ctrl.init());
        assert_eq!(ctrl.observed_count(), 2);
    }

    #[test]
    fn test_intersecting_entry_reveals_once() {
        let dom = FakeDom::new(2);
        let mut ctrl = controller(&dom);
        ctrl.init();

        let element = ElementId(0);
        ctrl.handle_entries(&[VisibilityEntry {
            target: element,
            is_intersecting: true,
        }]);

        assert!(dom.has_class(element, VISIBLE_CLASS));
        assert_eq!(dom.state.borrow().unobserve_calls, vec![element]);
        assert_eq!(ctrl.observed_count(), 1);

        // A second synthetic notification for the same element is a no-op.
        ctrl.handle_entries(&[VisibilityEntry {
            target: element,
            is_intersecting: true,
        }]);
        assert_eq!(dom.state.borrow().unobserve_calls.len(), 1);
        assert_eq!(ctrl.observed_count(), 1);
    }

    #[test]
    fn test_non_intersecting_entry_is_ignored() {
        let dom = FakeDom::new(1);
        let mut ctrl = controller(&dom);
        ctrl.init();

        ctrl.handle_entries(&[VisibilityEntry {
            target: ElementId(0),
            is_intersecting: false,
        }]);

        assert!(!dom.has_class(ElementId(0), VISIBLE_CLASS));
        assert_eq!(ctrl.observed_count(), 1);
        assert!(dom.state.borrow().unobserve_calls.is_empty());
    }

    #[test]
    fn test_cleanup_is_idempotent() {
        let dom = FakeDom::new(1);
        let mut ctrl = controller(&dom);
        ctrl.init();

        ctrl.cleanup();
        ctrl.cleanup();

        assert!(!ctrl.is_active());
        assert_eq!(ctrl.observed_count(), 0);
        assert_eq!(dom.state.borrow().disconnects, 1);
    }

    #[test]
    fn test_reinit_releases_previous_observer() {
        let dom = FakeDom::new(2);
        let mut ctrl = controller(&dom);
        ctrl.init();

        assert!(ctrl.reinit());
        assert!(ctrl.is_active());

        let state = dom.state.borrow();
        assert_eq!(state.observers_created, 2);
        assert_eq!(state.disconnects, 1);
    }

    #[test]
    fn test_entries_after_cleanup_are_ignored() {
        let dom = FakeDom::new(1);
        let mut ctrl = controller(&dom);
        ctrl.init();
        ctrl.cleanup();

        ctrl.handle_entries(&[VisibilityEntry {
            target: ElementId(0),
            is_intersecting: true,
        }]);

        assert!(!dom.has_class(ElementId(0), VISIBLE_CLASS));
    }

    #[test]
    fn test_init_scroll_animations_starts_controller() {
        let dom = FakeDom::new(2);
        let ctrl = init_scroll_animations(dom.clone());

        assert!(ctrl.is_active());
        assert_eq!(ctrl.observed_count(), 2);
        assert_eq!(dom.state.borrow().observers_created, 1);
    }
}
