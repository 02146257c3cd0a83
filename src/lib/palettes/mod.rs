pub mod image;
pub mod pal_gpl;
pub(crate) mod pal_json;
pub mod palette;
pub mod sort;

pub use pal_gpl::GplContents;
pub use palette::{Palette, PaletteEvent, PaletteFormat, SubscriptionId};
pub use sort::SortOrder;
