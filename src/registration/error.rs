use crate::sequence::ViewId;

/// Errors raised while assembling registrations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    /// A second chain was inserted for a view that already has one
    #[error("View {0} already has a registration")]
    DuplicateView(ViewId),
}
