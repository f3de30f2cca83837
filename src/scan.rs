use glob::{glob_with, MatchOptions};
use std::path::{Path, PathBuf};

/// Extensions that count as product images. Matching is case-sensitive.
pub const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// List product image files directly under `dir`, one glob per extension,
/// groups concatenated in `IMAGE_EXTENSIONS` order. Order within a group is
/// whatever the platform glob yields, not necessarily sorted.
pub fn list_image_files(dir: &Path) -> Vec<PathBuf> {
    let options: MatchOptions = Default::default();
    IMAGE_EXTENSIONS
        .iter()
        .flat_map(|ext| {
            glob_with(
                dir.join(format!("*.{}", ext)).as_os_str().to_str().expect("pattern"),
                options,
            )
            .expect("glob")
            .filter_map(|x| x.ok())
            .collect::<Vec<_>>()
        })
        .collect()
}
