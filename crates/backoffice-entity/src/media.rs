//! Image reference decoding.

use serde::{Deserialize, Deserializer};

/// An image as the backend sends it: either a bare URL or an object that
/// carries one.
#[derive(Deserialize)]
#[serde(untagged)]
enum ImageRef {
    Url(String),
    Object {
        #[serde(alias = "imageURL", alias = "ImageUrl", alias = "url")]
        #[serde(rename = "imageUrl")]
        image_url: String,
    },
}

impl ImageRef {
    fn into_url(self) -> String {
        match self {
            Self::Url(url) | Self::Object { image_url: url } => url,
        }
    }
}

/// Decode a possibly-null list of image references into URLs.
pub fn deserialize_urls<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let refs = Option::<Vec<ImageRef>>::deserialize(deserializer)?;
    Ok(refs
        .unwrap_or_default()
        .into_iter()
        .map(ImageRef::into_url)
        .filter(|url| !url.trim().is_empty())
        .collect())
}
