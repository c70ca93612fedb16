mod external_link;
mod line_link;
mod section;

pub use external_link::ExternalLink;
pub use line_link::{ItineraryLineLink, LineLinkAttrs};
pub use section::Section;
