use image::{Rgba, RgbaImage};
use storydeck::{PanelLayout, StorydeckError, layout_plan, merge};

fn solid(w: u32, h: u32, px: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(w, h, Rgba(px))
}

#[test]
fn grid2x2_panel_geometry() {
    let images: Vec<_> = (0..4u8)
        .map(|i| solid(100, 100, [i + 1, 0, 0, 255]))
        .collect();
    let canvas = merge(&images, PanelLayout::Grid2x2).unwrap();
    assert_eq!(canvas.dimensions(), (200, 200));
    // Image index 2 (row-major) lands at (0, 100).
    assert_eq!(canvas.get_pixel(0, 100), &Rgba([3, 0, 0, 255]));
    assert_eq!(canvas.get_pixel(199, 199), &Rgba([4, 0, 0, 255]));
}

#[test]
fn vertical_strip_for_all_counts() {
    for k in 1..=7u8 {
        let images: Vec<_> = (0..k).map(|i| solid(16, 12, [i + 1, 0, 0, 255])).collect();
        let canvas = merge(&images, PanelLayout::VerticalStrip).unwrap();
        assert_eq!(canvas.dimensions(), (16, 12 * u32::from(k)));
        for i in 0..k {
            let y = u32::from(i) * 12;
            assert_eq!(canvas.get_pixel(8, y), &Rgba([i + 1, 0, 0, 255]));
        }
    }
}

#[test]
fn horizontal_strip_matches_plan_geometry() {
    let plan = layout_plan(PanelLayout::HorizontalStrip, 64, 32, 5);
    assert_eq!((plan.width, plan.height), (320, 32));
    for (i, panel) in plan.panels.iter().enumerate() {
        assert_eq!(panel.x, 64 * i as u32);
        assert_eq!(panel.y, 0);
    }
}

#[test]
fn one_plus_two_feature_panel_dominates() {
    let images = vec![
        solid(100, 100, [1, 0, 0, 255]),
        solid(100, 100, [2, 0, 0, 255]),
        solid(100, 100, [3, 0, 0, 255]),
    ];
    let canvas = merge(&images, PanelLayout::OnePlusTwo).unwrap();
    assert_eq!(canvas.dimensions(), (200, 100));
    // Feature panel spans the rounded 1.33w left region.
    assert_eq!(canvas.get_pixel(132, 99), &Rgba([1, 0, 0, 255]));
    // Right column: top half then bottom half.
    assert_eq!(canvas.get_pixel(133, 0), &Rgba([2, 0, 0, 255]));
    assert_eq!(canvas.get_pixel(199, 49), &Rgba([2, 0, 0, 255]));
    assert_eq!(canvas.get_pixel(133, 50), &Rgba([3, 0, 0, 255]));
    assert_eq!(canvas.get_pixel(199, 99), &Rgba([3, 0, 0, 255]));
}

#[test]
fn one_plus_two_with_only_the_feature_image() {
    let canvas = merge(&[solid(100, 100, [1, 0, 0, 255])], PanelLayout::OnePlusTwo).unwrap();
    assert_eq!(canvas.dimensions(), (200, 100));
    // Right column stays blank.
    assert_eq!(canvas.get_pixel(150, 50), &Rgba([0, 0, 0, 0]));
}

#[test]
fn first_image_dimensions_are_canonical() {
    // Second source is a different native size; it must be stretched into the
    // cell defined by the first image.
    let images = vec![solid(50, 40, [1, 0, 0, 255]), solid(13, 77, [2, 0, 0, 255])];
    let canvas = merge(&images, PanelLayout::Grid2x2).unwrap();
    assert_eq!(canvas.dimensions(), (100, 80));
    assert_eq!(canvas.get_pixel(50, 0), &Rgba([2, 0, 0, 255]));
    assert_eq!(canvas.get_pixel(99, 39), &Rgba([2, 0, 0, 255]));
}

#[test]
fn empty_source_list_is_an_error_not_a_blank_canvas() {
    let err = merge(&[], PanelLayout::VerticalStrip).unwrap_err();
    assert!(matches!(err, StorydeckError::Validation(_)));
}

#[test]
fn compose_writes_a_decodable_png() {
    let dir = tempfile::tempdir().unwrap();
    let images = vec![solid(10, 10, [5, 6, 7, 255]), solid(10, 10, [8, 9, 10, 255])];
    let canvas = merge(&images, PanelLayout::HorizontalStrip).unwrap();

    let path = dir.path().join(storydeck::export_filename());
    std::fs::write(&path, storydeck::encode_png(&canvas).unwrap()).unwrap();

    let name = path.file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("storyboard_puzzle_"));
    assert!(name.ends_with(".png"));

    let decoded = image::open(&path).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (20, 10));
    assert_eq!(decoded.get_pixel(15, 5), &Rgba([8, 9, 10, 255]));
}
