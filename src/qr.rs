use std::io::Cursor;

use image::{DynamicImage, ImageFormat};
use qrcode::QrCode;

/// Viewing page URL that gets encoded into the QR image.
pub fn page_url(frontend_base: &str, id: &str) -> String {
    format!("{}/user/{id}", frontend_base.trim_end_matches('/'))
}

/// Render `url` as a PNG QR code.
pub fn render_png(url: &str) -> Result<Vec<u8>, String> {
    let code = QrCode::new(url.as_bytes()).map_err(|e| format!("QR encoding failed: {e}"))?;
    let img = code
        .render::<image::Luma<u8>>()
        .min_dimensions(256, 256)
        .build();

    let mut png = Vec::new();
    DynamicImage::ImageLuma8(img)
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|e| format!("QR render failed: {e}"))?;

    Ok(png)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_url_joins_base_and_id() {
        assert_eq!(page_url("http://x.test", "abc"), "http://x.test/user/abc");
        assert_eq!(page_url("http://x.test/", "abc"), "http://x.test/user/abc");
    }

    #[test]
    fn render_png_produces_png_bytes() {
        let png = render_png("http://x.test/user/abc").unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }
}
