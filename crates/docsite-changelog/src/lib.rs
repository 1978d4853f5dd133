mod group;
mod image;
mod inline;
mod list;
mod refs;
mod timeline;

pub use group::group_by_version;
pub use image::{ImageAttrs, extract_image, is_image_fragment};
pub use inline::tokenize;
pub use list::{ListItem, build_list_items};
pub use refs::RefLink;
pub use timeline::{Timeline, TimelineGroup, build_timeline};
