// 通过公开 API 端到端验证 SVG 渲染与图标居中缩放
use std::path::{Path, PathBuf};

use icon_tool::icon::{IconConfig, IconError, IconHandler, RasterSize, SvgContent, plan_fit};
use image::{Rgba, RgbaImage};

fn write_svg(dir: &Path) -> PathBuf {
    let path = dir.join("public").join("vite.svg");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "<svg xmlns=\"http://www.w3.org/2000/svg\"/>").unwrap();
    path
}

#[test]
fn script_entry_renders_512_icon() {
    let dir = tempfile::tempdir().unwrap();
    let svg = write_svg(dir.path());
    let out = dir.path().join("icon.png");

    let handler = IconHandler::new(IconConfig::default()).unwrap();
    handler
        .svg_to_png(&svg, &out, Some(RasterSize::new(512, 512)))
        .unwrap();

    let png = image::open(&out).unwrap();
    assert_eq!((png.width(), png.height()), (512, 512));
}

#[test]
fn rasterize_overwrites_existing_output() {
    let dir = tempfile::tempdir().unwrap();
    let svg = write_svg(dir.path());
    let out = dir.path().join("icon.png");
    std::fs::write(&out, b"stale").unwrap();

    let handler = IconHandler::new(IconConfig::default()).unwrap();
    handler.svg_to_png(&svg, &out, None).unwrap();

    let png = image::open(&out).unwrap();
    assert_eq!((png.width(), png.height()), (100, 100));
}

#[test]
fn file_mode_and_embedded_mode_share_size_contract() {
    let dir = tempfile::tempdir().unwrap();
    let svg = write_svg(dir.path());

    for content in [SvgContent::Embedded, SvgContent::File] {
        let out = dir.path().join(format!("{content:?}.png"));
        let handler = IconHandler::new(IconConfig {
            svg_content: content,
            ..IconConfig::default()
        })
        .unwrap();

        handler.svg_to_png(&svg, &out, Some(RasterSize::new(30, 20))).unwrap();
        let png = image::open(&out).unwrap();
        assert_eq!((png.width(), png.height()), (30, 20));
    }
}

#[test]
fn missing_svg_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let handler = IconHandler::new(IconConfig::default()).unwrap();

    let err = handler
        .svg_to_png(dir.path().join("public/vite.svg"), dir.path().join("icon.png"), None)
        .unwrap_err();

    assert!(matches!(err, IconError::SourceNotFound(_)));
    assert!(err.to_string().contains("vite.svg"));
}

#[test]
fn shrink_centers_wide_bitmap() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sheetmusic.png");
    let output = dir.path().join("icon.png");
    RgbaImage::from_pixel(64, 16, Rgba([20, 40, 60, 255]))
        .save(&input)
        .unwrap();

    let handler = IconHandler::new(IconConfig::default()).unwrap();
    let plan = handler.shrink_image(&input, &output).unwrap();
    assert_eq!(plan, plan_fit(64, 16, 32, true));

    let icon = image::open(&output).unwrap();
    assert!(matches!(icon, image::DynamicImage::ImageRgba8(_)));
    let icon = icon.to_rgba8();
    assert_eq!(icon.dimensions(), (32, 32));

    for y in 0..32 {
        let inside = (12..20).contains(&y);
        assert_eq!(icon.get_pixel(5, y).0[3] > 0, inside, "row {y}");
    }
}

#[test]
fn shrink_tall_jpeg_source() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("tall.jpg");
    let output = dir.path().join("icon.png");
    image::RgbImage::from_pixel(10, 40, image::Rgb([200, 200, 200]))
        .save(&input)
        .unwrap();

    let handler = IconHandler::new(IconConfig::default()).unwrap();
    let plan = handler.shrink_image(&input, &output).unwrap();

    assert_eq!((plan.new_width, plan.new_height), (8, 32));
    assert_eq!((plan.offset_x, plan.offset_y), (12, 0));
    let icon = image::open(&output).unwrap().to_rgba8();
    assert_eq!(icon.get_pixel(0, 16).0[3], 0);
    assert!(icon.get_pixel(15, 16).0[3] >= 250);
}

// TGA 没有文件签名，格式只能由扩展名决定
#[test]
fn shrink_tga_source() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("d.tga");
    let output = dir.path().join("icon.png");
    RgbaImage::from_pixel(3, 7, Rgba([90, 30, 200, 255]))
        .save(&input)
        .unwrap();

    let handler = IconHandler::new(IconConfig::default()).unwrap();
    let plan = handler.shrink_image(&input, &output).unwrap();

    assert_eq!(plan, plan_fit(3, 7, 32, true));
    assert_eq!(plan.new_width, 13);
    assert_eq!(plan.offset_x, 9);
    let icon = image::open(&output).unwrap().to_rgba8();
    assert_eq!(icon.dimensions(), (32, 32));
    assert_eq!(icon.get_pixel(0, 16).0[3], 0);
    assert!(icon.get_pixel(15, 16).0[3] >= 250);
}
