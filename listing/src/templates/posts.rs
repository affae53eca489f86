use maud::{html, Markup, Render};
use posts::{Heading, Post, Posts};
use tracing::instrument;

use super::{classes::ThumbnailClasses, thumbnail::PostThumbnail};

/// A listing of post cards, one per post, in the order given.
///
/// Rendering is not cached; wrap the listing in [`crate::Memo`] to skip
/// re-rendering unchanged props.
#[derive(Debug, Clone, PartialEq)]
pub struct PostsListing<'a> {
    posts: &'a [Post],
    heading_tag: Heading,
    is_primary: bool,
    classes: ThumbnailClasses,
}

impl<'a> PostsListing<'a> {
    pub fn new(posts: &'a [Post]) -> Self {
        Self {
            posts,
            heading_tag: Heading::default(),
            is_primary: false,
            classes: ThumbnailClasses::default(),
        }
    }

    pub fn with_heading(mut self, heading_tag: Heading) -> Self {
        self.heading_tag = heading_tag;
        self
    }

    /// Marks the listing as the page's primary one. Does not change the markup.
    pub fn primary(mut self, is_primary: bool) -> Self {
        self.is_primary = is_primary;
        self
    }

    pub fn with_classes(mut self, classes: ThumbnailClasses) -> Self {
        self.classes = classes;
        self
    }

    pub fn heading_tag(&self) -> Heading {
        self.heading_tag
    }

    pub fn is_primary(&self) -> bool {
        self.is_primary
    }

    /// Every card paired with its identity key, the post slug.
    ///
    /// Keys are expected to be unique, see [`Posts::duplicate_slugs`].
    pub fn cards(&self) -> Vec<(&'a str, PostThumbnail<'a>)> {
        self.posts
            .iter()
            .map(|post| {
                let card = PostThumbnail::for_post(post)
                    .with_tag(self.heading_tag)
                    .with_classes(self.classes.clone());

                (post.slug.as_str(), card)
            })
            .collect()
    }
}

impl<'a> From<&'a Posts> for PostsListing<'a> {
    fn from(posts: &'a Posts) -> Self {
        Self::new(posts.posts())
    }
}

impl Render for PostsListing<'_> {
    #[instrument(skip_all, fields(posts = self.posts.len(), heading = %self.heading_tag))]
    fn render(&self) -> Markup {
        let cards = self.cards();
        tracing::debug!(cards = cards.len(), "Rendering posts listing");

        html! {
          @for (_, card) in &cards {
            (card)
          }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_helpers::sample_post;

    fn sample_posts(slugs: &[&str]) -> Vec<Post> {
        slugs.iter().map(|slug| sample_post(slug)).collect()
    }

    #[test]
    fn test_empty_listing_renders_nothing() {
        let posts: Vec<Post> = vec![];

        let listing = PostsListing::new(&posts);

        assert!(listing.cards().is_empty());
        assert_eq!(listing.render().into_string(), "");
    }

    #[test]
    fn test_one_card_per_post() {
        let posts = sample_posts(&["a", "b", "c"]);

        let html = PostsListing::new(&posts).render().into_string();

        assert_eq!(html.matches("<article ").count(), 3);
    }

    #[test]
    fn test_order_is_preserved() {
        let posts = sample_posts(&["zeta", "alpha", "mu"]);

        let listing = PostsListing::new(&posts);
        let html = listing.render().into_string();

        let keys: Vec<_> = listing.cards().into_iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mu"]);

        let zeta = html.find("/blog/zeta").unwrap();
        let alpha = html.find("/blog/alpha").unwrap();
        let mu = html.find("/blog/mu").unwrap();
        assert!(zeta < alpha && alpha < mu);
    }

    #[test]
    fn test_cards_link_to_blog_path() {
        let posts = sample_posts(&["hello-world"]);

        let html = PostsListing::new(&posts).render().into_string();

        assert!(html.contains(r#"href="/blog/hello-world""#));
    }

    #[test]
    fn test_default_heading_is_h3() {
        let posts = sample_posts(&["a", "b"]);

        let listing = PostsListing::new(&posts);
        let html = listing.render().into_string();

        assert_eq!(listing.heading_tag(), Heading::H3);
        assert_eq!(html.matches("<h3 ").count(), 2);
    }

    #[test]
    fn test_heading_is_forwarded_to_every_card() {
        let posts = sample_posts(&["a", "b", "c"]);

        let listing = PostsListing::new(&posts).with_heading(Heading::H2);
        let html = listing.render().into_string();

        assert_eq!(html.matches("<h2 ").count(), 3);
        assert!(!html.contains("<h3"));
        assert!(listing
            .cards()
            .iter()
            .all(|(_, card)| card.tag() == Heading::H2));
    }

    #[test]
    fn test_primary_has_no_effect_on_markup() {
        let posts = sample_posts(&["a", "b"]);

        let plain = PostsListing::new(&posts).render().into_string();
        let primary = PostsListing::new(&posts).primary(true);

        assert!(primary.is_primary());
        assert_eq!(primary.render().into_string(), plain);
    }

    #[test]
    fn test_matches_individual_thumbnails() {
        let posts = sample_posts(&["a", "b"]);

        let html = PostsListing::new(&posts).render().into_string();
        let expected: String = posts
            .iter()
            .map(|p| PostThumbnail::for_post(p).render().into_string())
            .collect();

        assert_eq!(html, expected);
    }

    #[test]
    fn test_cards_are_keyed_by_slug_even_with_shared_titles() {
        let mut posts = sample_posts(&["first", "second"]);
        let shared_title = posts[0].title.clone();
        posts[1].title = shared_title;

        let keys: Vec<_> = PostsListing::new(&posts)
            .cards()
            .into_iter()
            .map(|(key, _)| key)
            .collect();

        assert_eq!(keys, vec!["first", "second"]);
    }

    #[test]
    fn test_duplicate_slugs_still_render() {
        let posts = sample_posts(&["a", "a"]);

        let html = PostsListing::new(&posts).render().into_string();

        assert_eq!(html.matches("<article ").count(), 2);
    }

    #[test]
    fn test_from_posts() {
        let posts: Posts = sample_posts(&["a"]).into();

        let html = PostsListing::from(&posts).render().into_string();

        assert!(html.contains("/blog/a"));
    }
}
