use kernel::id::Id;

pub struct UserMarker;

/// Numeric identity of a `users` row
pub type UserId = Id<UserMarker>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_from_raw() {
        let user_id = UserId::from_raw(42);
        assert_eq!(user_id.value(), 42);
        assert_eq!(user_id.to_string(), "42");
    }

    #[test]
    fn test_user_id_equality() {
        assert_eq!(UserId::from_raw(7), UserId::from(7));
        assert_ne!(UserId::from_raw(7), UserId::from_raw(8));
    }
}
