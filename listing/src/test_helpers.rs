use posts::Post;

pub fn sample_post(slug: &str) -> Post {
    Post {
        slug: slug.to_string(),
        title: format!("Post {slug}"),
        excerpt: format!("About {slug}"),
        category: "Rust".to_string(),
        image: format!("/images/{slug}.png"),
        time_to_read: 5.0,
    }
}
