//! Strongly typed identifiers assigned by the persistence layer.

macro_rules! catalog_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize)
        )]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(pub i32);

        impl $name {
            pub fn new(id: i32) -> Self {
                $name(id)
            }

            pub fn value(&self) -> i32 {
                self.0
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                $name(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

catalog_id!(
    /// Identifier of a movie
    MovieId
);
catalog_id!(
    /// Identifier of a single medium (disc) of a movie
    MediumId
);
catalog_id!(
    /// Identifier of a show
    ShowId
);
catalog_id!(SeasonId);
catalog_id!(EpisodeId);
catalog_id!(GameId);
catalog_id!(MusicId);
catalog_id!(SongId);
catalog_id!(ProgramId);
catalog_id!(
    /// Identifier of a genre; also the whole payload of a genre reference
    GenreId
);
catalog_id!(
    /// Identifier of a stored picture
    PictureId
);
catalog_id!(BookId);
