mod icons;
mod timeline;

pub(crate) use icons::{IconsFormatter, PlainTextIconsFormatter};
pub(crate) use timeline::{PlainTextTimelineFormatter, TimelineFormatter};
