use serde::{Deserialize, Serialize};

use super::ids::ArtworkId;

/// A classifiable image record with title/artist/year metadata.
///
/// Immutable once fetched; the workflow replaces it wholesale when a new
/// artwork is loaded. The backend serializes the image path under
/// `imagepath`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: ArtworkId,
    pub title: String,
    pub artist: String,
    pub year: i32,
    #[serde(rename = "imagepath")]
    pub image_path: String,
}
