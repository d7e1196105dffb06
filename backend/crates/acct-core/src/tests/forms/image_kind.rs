use crate::ImageKind;
use crate::tests::{GIF_BYTES, PNG_BYTES};

#[test]
fn test_decode_recognises_complete_images() {
    assert_eq!(ImageKind::decode(PNG_BYTES), Some(ImageKind::Png));
    assert_eq!(ImageKind::decode(GIF_BYTES), Some(ImageKind::Gif));
}

#[test]
fn test_decode_rejects_other_content() {
    assert_eq!(ImageKind::decode(b""), None);
    assert_eq!(ImageKind::decode(b"<svg xmlns=\"...\"/>"), None);
    assert_eq!(ImageKind::decode(b"RIFF\x10\x00\x00\x00WAVE"), None);
}

#[test]
fn test_decode_rejects_known_header_with_corrupt_body() {
    let mut corrupt = b"\x89PNG\r\n\x1a\n".to_vec();
    corrupt.extend_from_slice(b"this is not image data at all");

    assert_eq!(ImageKind::decode(&corrupt), None);
    assert_eq!(ImageKind::decode(&PNG_BYTES[..PNG_BYTES.len() / 2]), None);
    assert_eq!(ImageKind::decode(&[0xFF, 0xD8, 0xFF, 0xE0, 0x00]), None);
}

#[test]
fn test_from_format_limits_to_supported_kinds() {
    assert_eq!(
        ImageKind::from_format(image::ImageFormat::WebP),
        Some(ImageKind::Webp)
    );
    assert_eq!(ImageKind::from_format(image::ImageFormat::Bmp), None);
}

#[test]
fn test_extension() {
    assert_eq!(ImageKind::Jpeg.extension(), "jpg");
    assert_eq!(ImageKind::Webp.extension(), "webp");
}
