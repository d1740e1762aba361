use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct ConversionResponse {
    pub status: String,
    #[serde(default)]
    pub items: Vec<FeedItem>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    pub description: Option<String>,
    pub content_text: Option<String>,
    #[serde(default)]
    pub enclosure: Enclosure,
    pub thumbnail: Option<String>,
}

// The conversion API ships an entry's attached media as nothing, a single
// object, or a list of objects. `Multiple` sits before `Single` so untagged
// resolution tries the sequence shape first; `Absent` also absorbs null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Enclosure {
    Multiple(Vec<EnclosureResource>),
    Single(EnclosureResource),
    #[default]
    Absent,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EnclosureResource {
    pub link: Option<String>,
    #[serde(rename = "type")]
    pub media_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplayEntry {
    pub title: String,
    pub link: String,
    pub image_url: Option<String>,
    pub full_description: String,
    pub snippet: String,
}
