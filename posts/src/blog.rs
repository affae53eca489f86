use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{reading_time::ReadingTime, Result};

pub const BLOG_PATH_PREFIX: &str = "/blog/";

/// A single post as handed over by the data source.
///
/// Field names follow the data source's camelCase shape, so `time_to_read`
/// is read from `timeToRead`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub image: String,
    pub time_to_read: f64,
}

impl Post {
    /// Link target of the post, `/blog/{slug}`.
    pub fn path(&self) -> String {
        format!("{BLOG_PATH_PREFIX}{}", self.slug)
    }

    pub fn reading_time(&self) -> ReadingTime {
        ReadingTime::from_minutes(self.time_to_read)
    }
}

/// An ordered list of posts. Order is never changed after decoding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Posts {
    posts: Vec<Post>,
}

impl Posts {
    #[instrument(skip_all)]
    pub fn from_json(contents: &str) -> Result<Self> {
        let posts: Vec<Post> = serde_json::from_str(contents)?;
        tracing::debug!(count = posts.len(), "Decoded posts from JSON");

        Ok(Self { posts })
    }

    #[instrument(skip_all)]
    pub fn from_yaml(contents: &str) -> Result<Self> {
        let posts: Vec<Post> = serde_yaml::from_str(contents)?;
        tracing::debug!(count = posts.len(), "Decoded posts from YAML");

        Ok(Self { posts })
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Slugs that appear more than once, in order of first appearance.
    pub fn duplicate_slugs(&self) -> Vec<&str> {
        let mut seen: HashMap<&str, usize> = HashMap::new();
        for post in &self.posts {
            *seen.entry(post.slug.as_str()).or_default() += 1;
        }

        let mut duplicates = vec![];
        for post in &self.posts {
            let slug = post.slug.as_str();
            if seen.get(slug).is_some_and(|&count| count > 1) && !duplicates.contains(&slug) {
                duplicates.push(slug);
            }
        }

        duplicates
    }
}

impl FromIterator<Post> for Posts {
    fn from_iter<I: IntoIterator<Item = Post>>(iter: I) -> Self {
        Self {
            posts: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Post>> for Posts {
    fn from(posts: Vec<Post>) -> Self {
        Self { posts }
    }
}
