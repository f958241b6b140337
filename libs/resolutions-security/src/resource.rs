use std::sync::Arc;

/// A domain entity subject to ownership-based policy.
///
/// The authorization core never inspects anything else on a resource.
pub trait OwnedResource {
    /// Name of the identity owning this resource.
    fn owner(&self) -> &str;
}

impl<T: OwnedResource + ?Sized> OwnedResource for &T {
    fn owner(&self) -> &str {
        (**self).owner()
    }
}

impl<T: OwnedResource + ?Sized> OwnedResource for Box<T> {
    fn owner(&self) -> &str {
        (**self).owner()
    }
}

impl<T: OwnedResource + ?Sized> OwnedResource for Arc<T> {
    fn owner(&self) -> &str {
        (**self).owner()
    }
}
