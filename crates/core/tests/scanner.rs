use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage};
use ledivilkku_core::{parse_commands, scan_image, set_led_effect_command, Command, Configuration, Error};

const SIDE_LEN: u32 = 16;

fn dark_image() -> RgbImage {
    RgbImage::from_pixel(SIDE_LEN, SIDE_LEN, Rgb([0, 0, 0]))
}

fn image_with_lit(pixels: &[(u32, u32)]) -> RgbImage {
    let mut image = dark_image();
    for &(x, y) in pixels {
        image.put_pixel(x, y, Rgb([255, 255, 255]));
    }
    image
}

#[test]
fn test_scan_dark_image() {
    let config = Configuration::default();

    assert_eq!(scan_image(&config, &dark_image()).unwrap(), "");
}

#[test]
fn test_scan_single_pixel() {
    let config = Configuration::default();
    let image = image_with_lit(&[(0, 0)]);

    let commands = scan_image(&config, &image).unwrap();
    assert_eq!(commands, set_led_effect_command(0, 0));
    assert_eq!(commands.len(), 3);
}

#[test]
fn test_scan_order_is_row_major() {
    let config = Configuration::default();
    // Insert pixels in the reverse order to make sure the scanner sorts them.
    let image = image_with_lit(&[(1, 3), (3, 1)]);

    let commands = scan_image(&config, &image).unwrap();
    assert_eq!(
        commands,
        set_led_effect_command(3, 1) + &set_led_effect_command(1, 3)
    );
    assert_eq!(commands, "s13s31");
}

#[test]
fn test_scan_full_image() {
    let config = Configuration::default();
    let image = RgbImage::from_pixel(SIDE_LEN, SIDE_LEN, Rgb([200, 0, 0]));

    let commands = scan_image(&config, &image).unwrap();
    assert_eq!(commands.len(), 256 * 3);
    assert!(commands.starts_with("s00s01s02"));
    assert!(commands.ends_with("sfdsfesff"));

    let decoded = parse_commands(&commands).unwrap();
    for (i, command) in decoded.into_iter().enumerate() {
        let i = i as u32;
        assert_eq!(
            command,
            Command::SetLed {
                x: i % SIDE_LEN,
                y: i / SIDE_LEN
            }
        );
    }
}

#[test]
fn test_scan_threshold_uses_first_channel_only() {
    let config = Configuration::default();
    let mut image = dark_image();
    // Exactly on the threshold, not lit.
    image.put_pixel(0, 0, Rgb([50, 255, 255]));
    // Bright in other channels only, not lit.
    image.put_pixel(1, 0, Rgb([0, 255, 255]));
    // Just above the threshold.
    image.put_pixel(2, 0, Rgb([51, 0, 0]));

    assert_eq!(scan_image(&config, &image).unwrap(), "s02");
}

#[test]
fn test_scan_ignores_pixels_outside_of_grid() {
    let config = Configuration::default();
    let mut image = RgbImage::from_pixel(32, 24, Rgb([0, 0, 0]));
    image.put_pixel(20, 2, Rgb([255, 0, 0]));
    image.put_pixel(2, 20, Rgb([255, 0, 0]));
    image.put_pixel(15, 15, Rgb([255, 0, 0]));

    assert_eq!(scan_image(&config, &image).unwrap(), "sff");
}

#[test]
fn test_scan_too_small_image() {
    let config = Configuration::default();
    let image = RgbImage::new(8, 16);

    assert_eq!(
        scan_image(&config, &image).unwrap_err(),
        Error::ImageTooSmall {
            width: 8,
            height: 16,
            side_len: 16
        }
    );
}

#[test]
fn test_scan_dynamic_images() {
    let config = Configuration::default();

    let mut rgba = RgbaImage::from_pixel(SIDE_LEN, SIDE_LEN, Rgba([0, 0, 0, 255]));
    rgba.put_pixel(5, 10, Rgba([128, 0, 0, 255]));
    let rgba = DynamicImage::ImageRgba8(rgba);
    assert_eq!(scan_image(&config, &rgba).unwrap(), "sa5");

    let mut gray = GrayImage::from_pixel(SIDE_LEN, SIDE_LEN, Luma([10]));
    gray.put_pixel(5, 10, Luma([128]));
    assert_eq!(scan_image(&config, &gray).unwrap(), "sa5");
    let gray = DynamicImage::ImageLuma8(gray);
    assert_eq!(scan_image(&config, &gray).unwrap(), "sa5");
}
