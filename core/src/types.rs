//! Resource models for the JSONPlaceholder API.
//!
//! # Design
//! Every model serializes with camelCase names and deserializes against the
//! lowercase-folded names produced by `codec::decode`, so multi-word fields
//! carry an explicit `rename(deserialize = ...)`. Decode through
//! `codec::decode`, not `serde_json::from_str`, to get case-insensitive
//! matching.
//!
//! Only `Post` has operations. `User` and `Photo` (with their nested records)
//! mirror the remote shapes and default every absent field.

use serde::{Deserialize, Serialize};

/// A post, either a local draft (`id == 0`) or a record returned by the
/// server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename(deserialize = "userid"))]
    pub user_id: u32,
    /// Server-assigned; zero on drafts and left out of the encoded body.
    #[serde(default, skip_serializing_if = "is_unassigned")]
    pub id: u32,
    pub title: String,
    pub body: String,
}

impl Post {
    /// A draft for `create_post`/`update_post`. The server assigns the id.
    pub fn draft(user_id: u32, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            user_id,
            id: 0,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn is_draft(&self) -> bool {
        is_unassigned(&self.id)
    }
}

fn is_unassigned(id: &u32) -> bool {
    *id == 0
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
    pub id: u32,
    pub name: String,
    pub username: String,
    pub email: String,
    pub address: Address,
    pub phone: String,
    pub website: String,
    pub company: Company,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Geo,
}

/// Coordinates are strings on the wire (`"-37.3159"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    #[serde(rename(deserialize = "catchphrase"))]
    pub catch_phrase: String,
    pub bs: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Photo {
    #[serde(rename(deserialize = "albumid"))]
    pub album_id: u32,
    pub id: u32,
    pub title: String,
    pub url: String,
    #[serde(rename(deserialize = "thumbnailurl"))]
    pub thumbnail_url: String,
}
