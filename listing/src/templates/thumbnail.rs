use maud::{html, Markup, PreEscaped, Render};
use posts::{Heading, Post, ReadingTime};

use super::classes::ThumbnailClasses;

const NBSP: PreEscaped<&str> = PreEscaped("&nbsp;");

/// One post rendered as a linked card.
///
/// `excerpt` is carried for callers that pass it along but is not part of
/// the card markup.
#[derive(Debug, Clone, PartialEq)]
pub struct PostThumbnail<'a> {
    path: String,
    heading: &'a str,
    excerpt: &'a str,
    tag: Heading,
    image: &'a str,
    category: &'a str,
    time_to_read: f64,
    classes: ThumbnailClasses,
}

impl<'a> PostThumbnail<'a> {
    pub fn new(
        path: impl Into<String>,
        heading: &'a str,
        excerpt: &'a str,
        image: &'a str,
        category: &'a str,
        time_to_read: f64,
    ) -> Self {
        Self {
            path: path.into(),
            heading,
            excerpt,
            tag: Heading::default(),
            image,
            category,
            time_to_read,
            classes: ThumbnailClasses::default(),
        }
    }

    pub fn for_post(post: &'a Post) -> Self {
        Self::new(
            post.path(),
            &post.title,
            &post.excerpt,
            &post.image,
            &post.category,
            post.time_to_read,
        )
    }

    pub fn with_tag(mut self, tag: Heading) -> Self {
        self.tag = tag;
        self
    }

    pub fn with_classes(mut self, classes: ThumbnailClasses) -> Self {
        self.classes = classes;
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn excerpt(&self) -> &str {
        self.excerpt
    }

    pub fn tag(&self) -> Heading {
        self.tag
    }

    pub fn formatted_reading_time(&self) -> ReadingTime {
        ReadingTime::from_minutes(self.time_to_read)
    }

    fn title(&self) -> Markup {
        let class = self.classes.heading.as_str();
        let text = self.heading;

        match self.tag {
            Heading::H1 => html! { h1 class=(class) { (text) } },
            Heading::H2 => html! { h2 class=(class) { (text) } },
            Heading::H3 => html! { h3 class=(class) { (text) } },
            Heading::H4 => html! { h4 class=(class) { (text) } },
            Heading::H5 => html! { h5 class=(class) { (text) } },
            Heading::H6 => html! { h6 class=(class) { (text) } },
        }
    }
}

impl Render for PostThumbnail<'_> {
    fn render(&self) -> Markup {
        let classes = &self.classes;
        let reading_time = self.formatted_reading_time();

        html! {
          article class=(classes.wrapper) {
            a class=(classes.link) href=(self.path) {
              div class=(classes.image_wrapper) {
                img class=(classes.image) src=(self.image) alt="";
              }
              div class=(classes.content) {
                span class=(classes.info) {
                  (self.category) " " (NBSP) " | " (NBSP) " "
                  (reading_time.minutes()) " " (reading_time.unit()) " czytania"
                }
                (self.title())
              }
            }
          }
        }
    }
}
