use std::fmt;
use std::rc::Rc;

use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const PORTFOLIO_MANIFEST: &str = include_str!("../../assets/portfolio.json");

/// A closed set of category tags a gallery can be filtered by.
///
/// `ALL` is the sentinel: selecting it shows every record, and a record
/// carrying it shows under every filter. A record with no tags at all only
/// shows under `ALL`.
pub trait CategoryTag: Copy + Eq + fmt::Debug + 'static {
    const ALL: Self;

    /// Every tag, in the order the filter bar lists them.
    fn variants() -> &'static [Self];

    fn label(&self) -> &'static str;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PortfolioCategory {
    All,
    Sports,
    Events,
    Portraits,
    Lifestyle,
}

impl CategoryTag for PortfolioCategory {
    const ALL: Self = PortfolioCategory::All;

    fn variants() -> &'static [Self] {
        &[
            PortfolioCategory::All,
            PortfolioCategory::Sports,
            PortfolioCategory::Events,
            PortfolioCategory::Portraits,
            PortfolioCategory::Lifestyle,
        ]
    }

    fn label(&self) -> &'static str {
        match self {
            PortfolioCategory::All => "ALL",
            PortfolioCategory::Sports => "SPORTS",
            PortfolioCategory::Events => "EVENTS",
            PortfolioCategory::Portraits => "PORTRAITS",
            PortfolioCategory::Lifestyle => "LIFESTYLE",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ImageRecord<C> {
    #[serde(rename = "src")]
    pub source: String,
    #[serde(rename = "alt")]
    pub alt_text: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default = "Vec::new")]
    pub categories: Vec<C>,
}

impl<C: CategoryTag> ImageRecord<C> {
    #[cfg(test)]
    pub fn new(source: &str, alt_text: &str, categories: &[C]) -> Self {
        Self {
            source: source.to_string(),
            alt_text: alt_text.to_string(),
            width: 0,
            height: 0,
            categories: categories.to_vec(),
        }
    }

    pub fn is_tagged(&self, tag: C) -> bool {
        self.categories.contains(&tag)
    }

    /// Whether this record belongs in the grid while `filter` is active.
    pub fn matches(&self, filter: C) -> bool {
        filter == C::ALL || self.is_tagged(C::ALL) || self.is_tagged(filter)
    }
}

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("manifest is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("manifest entry {index} has an empty src")]
    MissingSource { index: usize },
}

/// Static, ordered image list. Cloning shares the records.
#[derive(Clone, Debug)]
pub struct Gallery<C> {
    images: Rc<[ImageRecord<C>]>,
}

impl<C> PartialEq for Gallery<C> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.images, &other.images)
    }
}

impl<C: CategoryTag> Gallery<C> {
    pub fn new(images: Vec<ImageRecord<C>>) -> Self {
        Self { images: images.into() }
    }

    pub fn from_manifest(json: &str) -> Result<Self, ManifestError>
    where
        C: for<'de> Deserialize<'de>,
    {
        let images: Vec<ImageRecord<C>> = serde_json::from_str(json)?;
        if let Some(index) = images.iter().position(|img| img.source.trim().is_empty()) {
            return Err(ManifestError::MissingSource { index });
        }
        Ok(Self::new(images))
    }

    #[cfg(test)]
    pub fn images(&self) -> &[ImageRecord<C>] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Records shown under `filter`, in manifest order.
    pub fn visible(&self, filter: C) -> impl Iterator<Item = &ImageRecord<C>> + '_ {
        self.images.iter().filter(move |img| img.matches(filter))
    }
}

impl Gallery<PortfolioCategory> {
    pub fn portfolio() -> Self {
        match Self::from_manifest(PORTFOLIO_MANIFEST) {
            Ok(gallery) => {
                if gallery.is_empty() {
                    warn!("Portfolio manifest has no images");
                } else {
                    info!("Loaded portfolio manifest with {} images", gallery.len());
                }
                gallery
            }
            Err(e) => {
                error!("Failed to load portfolio manifest: {}", e);
                Self::new(Vec::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PortfolioCategory::*;

    #[test]
    fn bundled_manifest_parses() {
        let gallery = Gallery::<PortfolioCategory>::from_manifest(PORTFOLIO_MANIFEST).unwrap();
        assert!(!gallery.is_empty());
        assert!(gallery.images().iter().all(|img| !img.alt_text.is_empty()));
    }

    #[test]
    fn bundled_images_show_under_every_filter() {
        let gallery = Gallery::<PortfolioCategory>::portfolio();
        assert_eq!(gallery.len(), 4);
        for &tag in PortfolioCategory::variants() {
            assert_eq!(gallery.visible(tag).count(), gallery.len(), "{:?}", tag);
        }
    }

    #[test]
    fn manifest_rejects_blank_src() {
        let json = r#"[
            { "src": "/a.jpg", "alt": "a", "categories": ["SPORTS"] },
            { "src": "  ", "alt": "b", "categories": ["EVENTS"] }
        ]"#;
        match Gallery::<PortfolioCategory>::from_manifest(json) {
            Err(ManifestError::MissingSource { index }) => assert_eq!(index, 1),
            other => panic!("expected MissingSource, got {:?}", other),
        }
    }

    #[test]
    fn manifest_rejects_unknown_category() {
        let json = r#"[{ "src": "/a.jpg", "alt": "a", "categories": ["WEDDINGS"] }]"#;
        assert!(matches!(
            Gallery::<PortfolioCategory>::from_manifest(json),
            Err(ManifestError::Malformed(_))
        ));
    }

    #[test]
    fn missing_categories_default_to_empty() {
        let json = r#"[{ "src": "/a.jpg", "alt": "a" }]"#;
        let gallery = Gallery::<PortfolioCategory>::from_manifest(json).unwrap();
        assert!(gallery.images()[0].categories.is_empty());
    }

    #[test]
    fn untagged_record_only_shows_under_all() {
        let img = ImageRecord::new("/a.jpg", "a", &[]);
        assert!(img.matches(All));
        for tag in [Sports, Events, Portraits, Lifestyle] {
            assert!(!img.matches(tag));
        }
    }

    #[test]
    fn all_sentinel_shows_everywhere() {
        let img = ImageRecord::new("/a.jpg", "a", &[All]);
        for tag in PortfolioCategory::variants() {
            assert!(img.matches(*tag));
        }
    }

    #[test]
    fn membership_matches_filter_rule() {
        let images = vec![
            ImageRecord::new("/1.jpg", "1", &[Sports]),
            ImageRecord::new("/2.jpg", "2", &[Events, All]),
            ImageRecord::new("/3.jpg", "3", &[Portraits, Lifestyle]),
            ImageRecord::new("/4.jpg", "4", &[]),
        ];
        let gallery = Gallery::new(images);
        for &tag in PortfolioCategory::variants() {
            let visible: Vec<&str> = gallery.visible(tag).map(|i| i.source.as_str()).collect();
            for img in gallery.images() {
                let expected = tag == All || img.is_tagged(All) || img.is_tagged(tag);
                assert_eq!(visible.contains(&img.source.as_str()), expected, "{:?} {}", tag, img.source);
            }
        }
    }

    #[test]
    fn visible_is_a_subsequence_in_manifest_order() {
        let images = vec![
            ImageRecord::new("/1.jpg", "1", &[Events]),
            ImageRecord::new("/2.jpg", "2", &[Sports]),
            ImageRecord::new("/3.jpg", "3", &[Events, Sports]),
            ImageRecord::new("/4.jpg", "4", &[Events]),
        ];
        let gallery = Gallery::new(images);
        let positions: Vec<usize> = gallery
            .visible(Events)
            .map(|v| gallery.images().iter().position(|i| i.source == v.source).unwrap())
            .collect();
        assert_eq!(positions, vec![0, 2, 3]);
    }

    #[test]
    fn clones_compare_equal_but_rebuilt_galleries_do_not() {
        let a = Gallery::new(vec![ImageRecord::new("/1.jpg", "1", &[Sports])]);
        let b = a.clone();
        let c = Gallery::new(vec![ImageRecord::new("/1.jpg", "1", &[Sports])]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
