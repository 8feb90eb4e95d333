//! Validates the code examples from README.md compile and behave correctly.

#[test]
fn readme_colors() {
    use bitmap_tools::{Color, parse_from_argb, parse_from_hex, parse_from_rgb};

    let blue = parse_from_hex("0x1e88e5").unwrap();
    assert_eq!(blue, Color::new(0xff, 0x1e, 0x88, 0xe5));

    let yellow = parse_from_argb(0xffffeb3b);
    assert_eq!(yellow, parse_from_hex("#ffffeb3b").unwrap());
    assert_eq!(yellow, parse_from_rgb(0xffeb3b));

    assert!(parse_from_hex("zz00ff").is_err());
}

#[test]
fn readme_images() {
    use bitmap_tools::{BitmapExt, PixelFormat};
    use image::DynamicImage;

    let image = DynamicImage::new_rgb8(64, 48);
    let png = image.to_bytes().unwrap();
    let half = image.resize_by(0.5).unwrap();
    let jpeg = half.compress(75).unwrap();
    let gray = jpeg.change_pixel_format(PixelFormat::Gray8);
    assert_eq!((gray.width(), gray.height()), (32, 24));
    assert!(!png.is_empty());
}

#[cfg(feature = "imgref")]
#[test]
fn readme_bgra_frames() {
    use bitmap_tools::image_ext::from_bgra_frame;
    use bitmap_tools::{BitmapExt, img, parse_from_hex};
    use image::DynamicImage;
    use imgref::ImgRef;

    let blue = parse_from_hex("#1e88e5").unwrap();
    let frame = img::filled(60, 100, blue).unwrap();
    let image = from_bgra_frame(frame.as_ref()).unwrap();
    assert_eq!(image.to_rgba8().get_pixel(0, 0).0, [0x1e, 0x88, 0xe5, 0xff]);

    let photo = DynamicImage::new_rgb8(60, 100);
    let bgra = photo.to_bgra_frame().unwrap();
    assert_eq!(bgra.buf()[0].a, 255);

    // 60 pixels per row, rows 64 pixels apart.
    let padded = vec![bgra.buf()[0]; 64 * 100];
    let image = from_bgra_frame(ImgRef::new_stride(&padded[..], 60, 100, 64)).unwrap();
    assert_eq!((image.width(), image.height()), (60, 100));
}
