//! The CD record and its creation candidate.

use serde::{Deserialize, Serialize};

/// A persisted CD record.
///
/// `id` is assigned by the store on insert and is immutable afterwards.
/// There is no update operation anywhere in the system: records are
/// created, listed, and deleted, nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cd {
    pub id: i32,
    pub title: String,
    pub artist: String,
    pub year: i32,
}

/// A candidate record supplied for creation. Carries no `id`.
///
/// All fields are optional at the deserialization boundary: a missing
/// field travels to the store as NULL and fails the NOT NULL constraint
/// there, surfacing as a [`StoreError`](crate::StoreError) rather than an
/// adapter-side validation error. The store is the only validator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CdDraft {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub year: Option<i32>,
}

impl CdDraft {
    /// Convenience constructor for fully populated drafts.
    pub fn new(title: impl Into<String>, artist: impl Into<String>, year: i32) -> Self {
        Self {
            title: Some(title.into()),
            artist: Some(artist.into()),
            year: Some(year),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cd_serializes_to_flat_json() {
        let cd = Cd {
            id: 1,
            title: "Abbey Road".into(),
            artist: "The Beatles".into(),
            year: 1969,
        };
        let json = serde_json::to_value(&cd).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "title": "Abbey Road",
                "artist": "The Beatles",
                "year": 1969
            })
        );
    }

    #[test]
    fn draft_tolerates_missing_fields() {
        let draft: CdDraft = serde_json::from_str(r#"{"title":"Test Album"}"#).unwrap();
        assert_eq!(draft.title.as_deref(), Some("Test Album"));
        assert!(draft.artist.is_none());
        assert!(draft.year.is_none());
    }

    #[test]
    fn draft_roundtrips_full_payload() {
        let draft: CdDraft =
            serde_json::from_str(r#"{"title":"Thriller","artist":"Michael Jackson","year":1982}"#)
                .unwrap();
        assert_eq!(draft, CdDraft::new("Thriller", "Michael Jackson", 1982));
    }
}
