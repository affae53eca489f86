use maud::{html, Markup, DOCTYPE};

pub mod classes;
pub mod posts;
pub mod thumbnail;

pub fn head() -> Markup {
    html! {
      head {
        meta charset="utf-8";
        title { "Blog" }
        link rel="stylesheet" href="/styles/main.css" {}
      }
    }
}

/// Full HTML document around `inner`.
pub fn base(inner: Markup) -> Markup {
    html! {
      (DOCTYPE)
      html lang="pl" {
        (head())

        body {
          (inner)
        }
      }
    }
}
