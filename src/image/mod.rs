pub mod filters;
pub mod grid;
pub mod io;
pub mod mask;
pub mod traits;

pub use self::filters::{median_filter, median_filter_passes, Calibration};
pub use self::grid::PixelGrid;
pub use self::mask::LabelMask;
pub use self::traits::{ImageView, Rows};
