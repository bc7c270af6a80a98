use std::fmt;

// All persistent entities are referenced by database-generated integer
// identifiers. Each entity gets its own newtype so that ids of different
// entities cannot be mixed up.
macro_rules! entity_id {
    ($(#[$attr:meta])* $name:ident) => {
        $(#[$attr])*
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(i64);

        impl $name {
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            pub const fn into_inner(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(from: i64) -> Self {
                Self(from)
            }
        }

        impl From<$name> for i64 {
            fn from(from: $name) -> Self {
                from.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Identifies a rally.
    RallyId
);
entity_id!(
    /// Identifies a single checkpoint of a rally.
    LocationId
);
entity_id!(
    /// Identifies a participant account.
    UserId
);
entity_id!(
    /// Identifies an organizer account.
    CreatorId
);
