mod artist;
mod genre;
mod song;
mod song_genre;

pub use artist::ActiveModel as ArtistActive;
pub use artist::Column as ArtistColumn;
pub use artist::Entity as ArtistEntity;
pub use artist::Model as Artist;
pub use genre::ActiveModel as GenreActive;
pub use genre::Column as GenreColumn;
pub use genre::Entity as GenreEntity;
pub use genre::Model as Genre;
pub use song::ActiveModel as SongActive;
pub use song::Column as SongColumn;
pub use song::Entity as SongEntity;
pub use song::Model as Song;
pub use song_genre::ActiveModel as SongGenreActive;
pub use song_genre::Column as SongGenreColumn;
pub use song_genre::Entity as SongGenreEntity;
pub use song_genre::Model as SongGenre;
