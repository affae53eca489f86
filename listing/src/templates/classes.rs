/// Class tokens used by a thumbnail card.
///
/// The tokens are opaque here. The defaults are the symbolic names; a styling
/// pipeline that hashes class names can hand its own mapping in instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailClasses {
    pub wrapper: String,
    pub link: String,
    pub image_wrapper: String,
    pub image: String,
    pub content: String,
    pub info: String,
    pub heading: String,
}

impl Default for ThumbnailClasses {
    fn default() -> Self {
        Self {
            wrapper: "wrapper".to_string(),
            link: "link".to_string(),
            image_wrapper: "imageWrapper".to_string(),
            image: "image".to_string(),
            content: "content".to_string(),
            info: "info".to_string(),
            heading: "heading".to_string(),
        }
    }
}

impl ThumbnailClasses {
    /// Prefixes every token, e.g. `postThumbnail_wrapper`.
    pub fn prefixed(prefix: &str) -> Self {
        let d = Self::default();
        let p = |token: String| format!("{prefix}{token}");

        Self {
            wrapper: p(d.wrapper),
            link: p(d.link),
            image_wrapper: p(d.image_wrapper),
            image: p(d.image),
            content: p(d.content),
            info: p(d.info),
            heading: p(d.heading),
        }
    }
}
