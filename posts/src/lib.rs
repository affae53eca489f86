use thiserror::Error;

pub mod blog;
pub mod heading;
pub mod reading_time;

pub use blog::{Post, Posts, BLOG_PATH_PREFIX};
pub use heading::{Heading, HeadingParseError};
pub use reading_time::{polish_plural, round_half_up, ReadingTime};

#[derive(Debug, Error)]
pub enum PostsError {
    #[error("Post list is not valid JSON")]
    Json(#[from] serde_json::Error),
    #[error("Post list is not valid YAML")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T, E = PostsError> = std::result::Result<T, E>;
