//! Ownership contract shared by every resource kind

use kernel::id::UserId;

/// A row that belongs to exactly one user.
///
/// The owner is fixed at creation. Storage filters every read and every
/// mutation by it, in the same operation.
pub trait OwnedResource {
    fn owner_id(&self) -> &UserId;

    fn is_owned_by(&self, user_id: &UserId) -> bool {
        self.owner_id() == user_id
    }
}
