use image::RgbaImage;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Fixed artifact filenames, relative to the output directory
pub const SCREENSHOT_1_FILE: &str = "screenshot1.png";
pub const SCREENSHOT_2_FILE: &str = "screenshot2.png";
pub const VISUAL_DIFF_FILE: &str = "visual_diff.png";
pub const PAGE_URLS_1_FILE: &str = "website1_page_urls.txt";
pub const PAGE_URLS_2_FILE: &str = "website2_page_urls.txt";

/// Persists diff artifacts under fixed names and prints one human-readable
/// line per artifact written.
///
/// Existing files of the same name are overwritten without warning; there is
/// no versioning and no backup.
pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    /// Create a writer rooted at the given output directory
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Writes the side-by-side content diff report
    pub fn write_content_diff(&self, html: &str, file_name: &str) -> Result<PathBuf> {
        let path = self.output_dir.join(file_name);
        fs::write(&path, html)?;
        println!("Content differences saved to {}.", path.display());
        Ok(path)
    }

    /// Writes a PNG screenshot exactly as captured
    pub fn write_screenshot(&self, png: &[u8], file_name: &str) -> Result<PathBuf> {
        let path = self.output_dir.join(file_name);
        fs::write(&path, png)?;
        println!("Screenshot saved to {}.", path.display());
        Ok(path)
    }

    /// Writes the visual difference image
    pub fn write_visual_diff(&self, image: &RgbaImage) -> Result<PathBuf> {
        let path = self.output_dir.join(VISUAL_DIFF_FILE);
        image.save(&path)?;
        println!("Visual differences saved to {}.", path.display());
        Ok(path)
    }

    /// Writes the page URL list for a site, one URL per line under the
    /// `Page URLs for <url>:` header
    pub fn write_page_urls(
        &self,
        site_url: &str,
        urls: &[String],
        file_name: &str,
    ) -> Result<PathBuf> {
        let path = self.output_dir.join(file_name);
        let mut contents = format!("Page URLs for {}:\n", site_url);
        for url in urls {
            contents.push_str(url);
            contents.push('\n');
        }
        fs::write(&path, contents)?;
        println!("Page URLs saved to {}.", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_urls_file_carries_header_and_one_url_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ReportWriter::new(dir.path());

        let urls = vec![
            "http://example.com/a".to_string(),
            "http://example.com/b".to_string(),
        ];
        let path = writer
            .write_page_urls("http://example.com", &urls, PAGE_URLS_1_FILE)
            .unwrap();

        let contents = fs::read_to_string(path).unwrap();
        assert_eq!(
            contents,
            "Page URLs for http://example.com:\nhttp://example.com/a\nhttp://example.com/b\n"
        );
    }

    #[test]
    fn test_existing_artifacts_are_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ReportWriter::new(dir.path());

        writer
            .write_content_diff("<html>old</html>", "content_diff.html")
            .unwrap();
        let path = writer
            .write_content_diff("<html>new</html>", "content_diff.html")
            .unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "<html>new</html>");
    }

    #[test]
    fn test_screenshot_bytes_are_written_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ReportWriter::new(dir.path());

        let bytes = [0x89u8, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];
        let path = writer.write_screenshot(&bytes, SCREENSHOT_1_FILE).unwrap();
        assert_eq!(fs::read(path).unwrap(), bytes);
    }

    #[test]
    fn test_visual_diff_round_trips_through_png() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ReportWriter::new(dir.path());

        let image = RgbaImage::from_pixel(4, 4, image::Rgba([1, 2, 3, 255]));
        let path = writer.write_visual_diff(&image).unwrap();

        let reloaded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(reloaded.dimensions(), (4, 4));
        assert_eq!(reloaded.get_pixel(0, 0).0, [1, 2, 3, 255]);
    }
}
