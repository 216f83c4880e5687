use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{GrayImage, ImageFormat};

use crate::errors::*;

/// Output format for `path`: JPEG without an extension, otherwise whatever
/// the extension names.
pub fn format_for(path: &Path) -> Result<ImageFormat> {
    match path.extension() {
        None => Ok(ImageFormat::Jpeg),
        Some(_) => Ok(ImageFormat::from_path(path).map_err(ErrorKind::ImageError)?),
    }
}

/// Encodes `image` into the file at `path`, replacing it if it exists.
///
/// `quality` only applies to JPEG output. The file is only touched once the
/// whole image has been encoded.
pub fn save<P: AsRef<Path>>(image: &GrayImage, path: P, quality: u8) -> Result<()> {
    let path = path.as_ref();
    let format = format_for(path)?;
    let bytes = encode(image, format, quality)?;

    fs::write(path, &bytes).map_err(|cause| ErrorKind::Io { path: path.display().to_string(), cause })?;
    debug!("encoded {}x{} image as {:?} into {} ({} bytes)", image.width(), image.height(), format, path.display(), bytes.len());
    Ok(())
}

/// Encodes `image` in memory.
pub fn encode(image: &GrayImage, format: ImageFormat, quality: u8) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    let encoded = match format {
        ImageFormat::Jpeg => JpegEncoder::new_with_quality(&mut bytes, quality).encode_image(image),
        other => image.write_to(&mut Cursor::new(&mut bytes), other),
    };
    encoded.map_err(ErrorKind::ImageError)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;
    use std::fs;

    fn gradient() -> GrayImage {
        GrayImage::from_fn(32, 16, |x, _| Luma([(x * 8) as u8]))
    }

    #[test]
    fn writes_jpeg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("im.jpg");
        save(&gradient(), &path, 75).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert!(bytes.len() > 2);
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
        let decoded = image::open(&path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (32, 16));
    }

    #[test]
    fn extension_picks_the_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("im.png");
        save(&gradient(), &path, 75).unwrap();
        let decoded = image::open(&path).unwrap().to_luma8();
        assert_eq!(decoded, gradient());

        assert_eq!(format_for(Path::new("plot")).unwrap(), ImageFormat::Jpeg);
        assert_eq!(format_for(Path::new("plot.JPEG")).unwrap(), ImageFormat::Jpeg);
    }

    #[test]
    fn unknown_extension_is_refused_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("im.notaformat");
        let err = save(&gradient(), &path, 75).unwrap_err();
        match err.downcast_ref::<ErrorKind>() {
            Some(ErrorKind::ImageError(_)) => {}
            other => panic!("unexpected error {:?}", other),
        }
        assert!(!path.exists());
    }

    #[test]
    fn unsupported_encoder_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("im.gif");
        assert_eq!(format_for(&path).unwrap(), ImageFormat::Gif);

        let err = save(&gradient(), &path, 75).unwrap_err();
        match err.downcast_ref::<ErrorKind>() {
            Some(ErrorKind::ImageError(_)) => {}
            other => panic!("unexpected error {:?}", other),
        }
        assert!(!path.exists());
    }

    #[test]
    fn failed_save_keeps_the_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("im.gif");
        fs::write(&path, b"previous").unwrap();
        assert!(save(&gradient(), &path, 75).is_err());
        assert_eq!(fs::read(&path).unwrap(), b"previous");
    }

    #[test]
    fn unwritable_path_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("im.jpg");
        let err = save(&gradient(), &path, 75).unwrap_err();
        match err.downcast_ref::<ErrorKind>() {
            Some(ErrorKind::Io { path: p, .. }) => assert!(p.ends_with("im.jpg")),
            other => panic!("unexpected error {:?}", other),
        }
    }
}
