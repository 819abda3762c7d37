use kernel::id::Id;

pub struct RoleMarker;

/// Numeric identity of a `roles` row
pub type RoleId = Id<RoleMarker>;
