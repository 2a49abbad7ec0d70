use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString, IntoStaticStr};

#[derive(Clone, Copy, Debug, Default, Display, EnumString, Eq, IntoStaticStr, Hash, PartialEq, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ImageStatus {
    Error,
    Success,
    #[default]
    Pending,
}

/// Image displayed in a block of the masonry grid
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageInfo {
    pub width: f64,
    pub height: f64,
    pub url: String,
    pub status: ImageStatus,
}

/// Position and size of a block of the masonry grid, computed by the layout engine
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockInfo {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub is_laid_out: bool,
    pub image: ImageInfo,
}

impl ImageInfo {
    pub fn new(url: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            url: url.into(),
            status: ImageStatus::Pending,
        }
    }
}

impl BlockInfo {
    pub fn new(image: ImageInfo) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width: 0.0,
            height: 0.0,
            is_laid_out: false,
            image,
        }
    }
}
