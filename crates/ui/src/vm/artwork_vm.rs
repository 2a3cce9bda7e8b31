use api::ApiConfig;
use museum_core::model::{Artwork, ArtworkId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtworkCardVm {
    pub id: ArtworkId,
    pub title: String,
    pub artist: String,
    pub year_label: String,
    pub image_url: String,
}

impl ArtworkCardVm {
    /// Case-insensitive match against title and artist; used by the dataset
    /// search box. An empty query matches everything.
    #[must_use]
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(&query) || self.artist.to_lowercase().contains(&query)
    }
}

#[must_use]
pub fn map_artwork_card(config: &ApiConfig, artwork: &Artwork) -> ArtworkCardVm {
    ArtworkCardVm {
        id: artwork.id,
        title: artwork.title.clone(),
        artist: artwork.artist.clone(),
        year_label: artwork.year.to_string(),
        image_url: config.image_url(&artwork.image_path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> ArtworkCardVm {
        let config = ApiConfig::new("http://localhost:8000/api", "http://localhost:8000").unwrap();
        map_artwork_card(
            &config,
            &Artwork {
                id: ArtworkId::new(1),
                title: "The Starry Night".to_string(),
                artist: "Vincent van Gogh".to_string(),
                year: 1889,
                image_path: "starry_night.jpg".to_string(),
            },
        )
    }

    #[test]
    fn image_url_points_at_the_image_host() {
        assert_eq!(
            card().image_url,
            "http://localhost:8000/images/starry_night.jpg"
        );
    }

    #[test]
    fn query_matches_title_or_artist() {
        let card = card();
        assert!(card.matches_query(""));
        assert!(card.matches_query("starry"));
        assert!(card.matches_query("Van Gogh"));
        assert!(!card.matches_query("vermeer"));
    }
}
