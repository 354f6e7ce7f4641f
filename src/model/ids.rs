//! Newtype ids, one per catalog relation

use std::fmt;

macro_rules! catalog_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub i64);

        impl $name {
            /// Raw row id as stored in the catalog
            pub fn get(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

catalog_id!(
    /// `library_sections.id`
    SectionId
);

catalog_id!(
    /// `tags.id`
    TagId
);

catalog_id!(
    /// `metadata_items.id` (show, season, episode, movie...)
    NodeId
);

catalog_id!(
    /// `media_items.id`, one playable version of a metadata node
    ItemId
);
