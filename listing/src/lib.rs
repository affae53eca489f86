pub mod memo;
pub mod templates;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use memo::Memo;
pub use templates::{
    classes::ThumbnailClasses, posts::PostsListing, thumbnail::PostThumbnail,
};
