use std::{error::Error, fs, io::Cursor, path::Path};

use image::{ColorType, ImageFormat, ImageReader};

use crate::imgaudit_error::ImgAuditError;
use crate::{scan, SAMPLE_SIZE};

/// Metadata for one image file, decoded from its byte header.
pub struct ImageReport {
    pub name: String,
    pub format: String,
    pub width: u32,
    pub height: u32,
    pub mode: String,
    pub size_mb: f64,
}

impl ImageReport {
    pub fn new(buf: &[u8], path: &Path) -> Result<Self, Box<dyn Error>> {
        let reader = ImageReader::new(Cursor::new(buf)).with_guessed_format()?;
        let format = reader
            .format()
            .ok_or_else(|| ImgAuditError::new("unrecognized image format", path))?;
        let img = reader.decode()?;
        Ok(Self {
            name: basename(path),
            format: format_name(format),
            width: img.width(),
            height: img.height(),
            mode: color_mode(img.color()).to_string(),
            size_mb: buf.len() as f64 / (1024.0 * 1024.0),
        })
    }

    /// Coarse quality label. The file-size check wins over dimensions.
    pub fn quality(&self) -> &'static str {
        if self.size_mb > 3.0 {
            "High resolution but large file size"
        } else if self.width > 1000 && self.height > 1000 {
            "Good resolution"
        } else {
            "Lower resolution"
        }
    }

    pub fn render(&self) -> String {
        format!(
            "File: {}\n  Format: {}\n  Dimensions: {}x{}\n  Color Mode: {}\n  Size: {:.2} MB\n  Quality: {}\n",
            self.name,
            self.format,
            self.width,
            self.height,
            self.mode,
            self.size_mb,
            self.quality()
        )
    }
}

fn basename(path: &Path) -> String {
    path.file_name().and_then(|n| n.to_str()).unwrap_or_default().to_string()
}

fn format_name(format: ImageFormat) -> String {
    match format {
        ImageFormat::Png => "PNG".to_string(),
        ImageFormat::Jpeg => "JPEG".to_string(),
        other => format!("{:?}", other).to_uppercase(),
    }
}

fn color_mode(color: ColorType) -> &'static str {
    match color {
        ColorType::L8 | ColorType::L16 => "L",
        ColorType::La8 | ColorType::La16 => "LA",
        ColorType::Rgb8 | ColorType::Rgb16 | ColorType::Rgb32F => "RGB",
        ColorType::Rgba8 | ColorType::Rgba16 | ColorType::Rgba32F => "RGBA",
        _ => "unknown",
    }
}

/// Report block for one file: the six-line report, or a one-line error when
/// the file cannot be read or decoded. Failures never abort the batch.
pub fn analyze_file(path: &Path) -> String {
    let report = match fs::read(path) {
        Ok(buf) => ImageReport::new(&buf, path),
        Err(e) => Err(e.into()),
    };
    match report {
        Ok(report) => report.render(),
        Err(e) => format!("Error analyzing {}: {}\n", basename(path), e),
    }
}

/// Full run over `dir`: the complete text the tool prints to stdout.
pub fn scan_report(dir: &Path) -> String {
    if !dir.exists() {
        return format!("Directory {} not found\n", dir.display());
    }

    let image_files = scan::list_image_files(dir);
    if image_files.is_empty() {
        return "No image files found\n".to_string();
    }

    let sample_size = SAMPLE_SIZE.min(image_files.len());
    let mut out = format!("Found {} image files\n\n", image_files.len());
    out.push_str(&format!("Analyzing first {} images as a sample:\n\n", sample_size));
    for path in image_files.iter().take(sample_size) {
        out.push_str(&analyze_file(path));
        out.push_str("---\n");
    }
    out
}
