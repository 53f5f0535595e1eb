pub mod body;
pub mod body_extractor;
pub mod boundary;
pub mod cancel;
pub mod outline_exporter;
pub mod path_simplifier;
pub mod pixel;
pub mod pixel_grid;
pub mod utils;
