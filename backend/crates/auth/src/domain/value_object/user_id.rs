use kernel::id::Id;

/// Marker type for user IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserMarker;

/// Typed user ID
pub type UserId = Id<UserMarker>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_roundtrip() {
        let user_id = UserId::from_i64(42);
        assert_eq!(user_id.as_i64(), 42);
        assert_eq!(UserId::from(42), user_id);
    }
}
