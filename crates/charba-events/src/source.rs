//! Event source identity.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

/// The owner stamped onto an event when it is fired, usually the chart that
/// owns the [`HandlerManager`](crate::HandlerManager).
///
/// Two sources are equal when they point at the same owner instance.
#[derive(Clone)]
pub struct EventSource(Rc<dyn Any>);

impl EventSource {
    /// Wrap an owner
    pub fn new<T: Any>(owner: Rc<T>) -> Self {
        let owner: Rc<dyn Any> = owner;
        Self(owner)
    }

    pub(crate) fn from_any(owner: Rc<dyn Any>) -> Self {
        Self(owner)
    }

    /// Borrow the owner as a concrete type
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        (*self.0).downcast_ref::<T>()
    }

    /// Check if the owner is of type `T`
    pub fn is<T: Any>(&self) -> bool {
        (*self.0).is::<T>()
    }

    /// Check if both sources point at the same owner
    pub fn same_as(&self, other: &EventSource) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.0), Rc::as_ptr(&other.0))
    }
}

impl PartialEq for EventSource {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl Eq for EventSource {}

impl fmt::Debug for EventSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EventSource")
            .field(&Rc::as_ptr(&self.0).cast::<()>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Chart {
        id: &'static str,
    }

    #[test]
    fn test_downcast_to_owner() {
        let source = EventSource::new(Rc::new(Chart { id: "bar-1" }));
        assert!(source.is::<Chart>());
        assert_eq!(source.downcast_ref::<Chart>().map(|c| c.id), Some("bar-1"));
        assert!(source.downcast_ref::<String>().is_none());
    }

    #[test]
    fn test_equality_is_identity() {
        let chart = Rc::new(Chart { id: "line-1" });
        let a = EventSource::new(Rc::clone(&chart));
        let b = EventSource::new(chart);
        let other = EventSource::new(Rc::new(Chart { id: "line-1" }));

        assert_eq!(a, b);
        assert_ne!(a, other);
    }
}
