use std::path::PathBuf;

pub mod cli;
pub mod imgaudit_error;
pub mod report;
pub mod scan;

/// Product image directory, relative to the working directory.
pub const PRODUCTS_DIR: &str = "diamant-rouge/public/images/products";
/// Cap on how many of the matched files are opened and reported.
pub const SAMPLE_SIZE: usize = 10;

pub fn build_products_path() -> PathBuf {
    PathBuf::from(PRODUCTS_DIR)
}
