use crate::id::UserId;

/// A participant account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    /// Opaque session identity issued by the authentication layer.
    pub hash: String,
    pub username: String,
    pub email: String,
    /// Accumulated experience points.
    pub exp: i64,
}
