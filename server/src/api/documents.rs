use sea_orm::Set;
use serde::{Deserialize, Serialize};
use serde_valid::{validation::Error as ValidationError, Validate};

// Flat forms are the entity models themselves: scalar fields plus foreign
// key ids. The documents below are the request bodies and the expanded forms
// returned on single-record retrieval.

// Column limits are varchar(N), which counts characters rather than
// grapheme clusters.
fn max_chars(value: &str, limit: usize) -> Result<(), ValidationError> {
    let count = value.chars().count();
    if count > limit {
        return Err(ValidationError::Custom(format!(
            "{} characters, at most {} allowed",
            count, limit
        )));
    }
    Ok(())
}

fn max_chars_50(value: &String) -> Result<(), ValidationError> {
    max_chars(value, 50)
}

fn max_chars_100(value: &String) -> Result<(), ValidationError> {
    max_chars(value, 100)
}

fn max_chars_500(value: &String) -> Result<(), ValidationError> {
    max_chars(value, 500)
}

#[derive(Deserialize, Serialize, Debug, Clone, Validate)]
pub struct ArtistRequest {
    #[validate(custom(max_chars_50))]
    pub name: String,
    #[validate(minimum = 0)]
    pub age: i32,
    #[validate(custom(max_chars_500))]
    pub bio: String,
}

impl ArtistRequest {
    pub fn into_active(self) -> entity::ArtistActive {
        entity::ArtistActive {
            name: Set(self.name),
            age: Set(self.age),
            bio: Set(self.bio),
            ..Default::default()
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Validate)]
pub struct GenreRequest {
    #[validate(custom(max_chars_100))]
    pub description: String,
}

impl GenreRequest {
    pub fn into_active(self) -> entity::GenreActive {
        entity::GenreActive {
            description: Set(self.description),
            ..Default::default()
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Validate)]
pub struct SongRequest {
    #[validate(custom(max_chars_50))]
    pub title: String,
    pub artist_id: i64,
    #[validate(custom(max_chars_50))]
    pub album: String,
    #[validate(minimum = 0)]
    pub length: i32,
}

impl SongRequest {
    pub fn into_active(self) -> entity::SongActive {
        entity::SongActive {
            title: Set(self.title),
            artist_id: Set(self.artist_id),
            album: Set(self.album),
            length: Set(self.length),
            ..Default::default()
        }
    }
}

/// Used for both creating and replacing a link.
#[derive(Deserialize, Serialize, Debug, Clone, Validate)]
pub struct SongGenreRequest {
    pub song_id: i64,
    pub genre_id: i64,
}

impl SongGenreRequest {
    pub fn into_active(self) -> entity::SongGenreActive {
        entity::SongGenreActive {
            song_id: Set(self.song_id),
            genre_id: Set(self.genre_id),
            ..Default::default()
        }
    }
}

/// A song with its artist and genres embedded.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SongDocument {
    pub id: i64,
    pub title: String,
    pub artist: entity::Artist,
    pub album: String,
    pub length: i32,
    pub genres: Vec<entity::Genre>,
}

impl SongDocument {
    pub fn new(song: entity::Song, artist: entity::Artist, genres: Vec<entity::Genre>) -> Self {
        Self {
            id: song.id,
            title: song.title,
            artist,
            album: song.album,
            length: song.length,
            genres,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SongGenreDocument {
    pub id: i64,
    pub song: entity::Song,
    pub genre: entity::Genre,
}

impl SongGenreDocument {
    pub fn new(link: &entity::SongGenre, song: entity::Song, genre: entity::Genre) -> Self {
        Self {
            id: link.id,
            song,
            genre,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn song_document_embeds_artist_and_genres() {
        let song = entity::Song {
            id: 1,
            title: "So What".to_string(),
            artist_id: 1,
            album: "Kind of Blue".to_string(),
            length: 540,
        };
        let artist = entity::Artist {
            id: 1,
            name: "Miles Davis".to_string(),
            age: 60,
            bio: "Trumpeter".to_string(),
        };
        let genres = vec![entity::Genre {
            id: 2,
            description: "Jazz".to_string(),
        }];
        let value = serde_json::to_value(SongDocument::new(song, artist, genres)).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 1,
                "title": "So What",
                "artist": {"id": 1, "name": "Miles Davis", "age": 60, "bio": "Trumpeter"},
                "album": "Kind of Blue",
                "length": 540,
                "genres": [{"id": 2, "description": "Jazz"}],
            })
        );
    }

    #[test]
    fn request_limits_are_enforced() {
        let artist = ArtistRequest {
            name: "x".repeat(51),
            age: 30,
            bio: String::new(),
        };
        assert!(artist.validate().is_err());

        let song = SongRequest {
            title: "So What".to_string(),
            artist_id: 1,
            album: "Kind of Blue".to_string(),
            length: -1,
        };
        assert!(song.validate().is_err());

        let genre = GenreRequest {
            description: "Jazz".to_string(),
        };
        assert!(genre.validate().is_ok());
    }

    #[test]
    fn limits_count_characters_not_graphemes() {
        // 50 graphemes, 100 chars
        let accented = "e\u{0301}".repeat(50);
        let song = SongRequest {
            title: accented.clone(),
            artist_id: 1,
            album: "Kind of Blue".to_string(),
            length: 540,
        };
        assert!(song.validate().is_err());

        let song = SongRequest {
            title: "e\u{0301}".repeat(25),
            ..song
        };
        assert!(song.validate().is_ok());

        let genre = GenreRequest {
            description: accented,
        };
        assert!(genre.validate().is_ok());
    }
}
