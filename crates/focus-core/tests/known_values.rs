use focal_common::FocalError;
use focal_core::segment::{center_bias, composite_intensity};
use focal_core::{estimate_focus, segment, select_max, FocusConfig, FocusEstimator};
use focal_model::{Block, Kernel, PixelBuffer, Point};

fn canvas(width: u32, height: u32, fill: [u8; 4]) -> Vec<u8> {
    std::iter::repeat(fill)
        .take((width * height) as usize)
        .flatten()
        .collect()
}

fn fill_rect(data: &mut [u8], width: u32, rect: (u32, u32, u32, u32), color: [u8; 4]) {
    let (x0, y0, w, h) = rect;
    for y in y0..y0 + h {
        for x in x0..x0 + w {
            let i = ((y * width + x) * 4) as usize;
            data[i..i + 4].copy_from_slice(&color);
        }
    }
}

#[test]
fn bright_top_right_quadrant_returns_its_midpoint() {
    let mut data = canvas(40, 40, [0, 0, 0, 255]);
    fill_rect(&mut data, 40, (20, 0, 20, 20), [255, 255, 255, 255]);

    let point = estimate_focus(&data, 40, 40, &Kernel::identity(), 20).unwrap();
    assert_eq!(point, Point::new(30.0, 10.0));
}

#[test]
fn each_bright_quadrant_is_found() {
    let cases = [
        ((0, 0), Point::new(10.0, 10.0)),
        ((20, 0), Point::new(30.0, 10.0)),
        ((0, 20), Point::new(10.0, 30.0)),
        ((20, 20), Point::new(30.0, 30.0)),
    ];
    for ((x, y), expected) in cases {
        let mut data = canvas(40, 40, [0, 0, 0, 255]);
        fill_rect(&mut data, 40, (x, y, 20, 20), [255, 255, 255, 255]);
        let point = estimate_focus(&data, 40, 40, &Kernel::identity(), 20).unwrap();
        assert_eq!(point, expected, "quadrant at ({x}, {y})");
    }
}

#[test]
fn identical_blocks_tie_break_to_the_first() {
    // Two 20x20 blocks with the same content; both have bias 0.75.
    let mut data = canvas(40, 20, [0, 0, 0, 255]);
    for x0 in [0, 20] {
        fill_rect(&mut data, 40, (x0 + 4, 4, 6, 9), [120, 30, 200, 255]);
        fill_rect(&mut data, 40, (x0 + 12, 2, 3, 3), [255, 255, 255, 255]);
    }

    let image = PixelBuffer::new(&data, 40, 20).unwrap();
    let blocks = segment(&image, 20).unwrap();
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].intensity, blocks[1].intensity);

    let point = estimate_focus(&data, 40, 20, &Kernel::identity(), 20).unwrap();
    assert_eq!(point, Point::new(10.0, 10.0));
}

#[test]
fn black_square_ties_resolve_to_first_block() {
    // All four blocks of a 40x40 image sit at the same distance from centre.
    let data = canvas(40, 40, [0, 0, 0, 255]);
    let image = PixelBuffer::new(&data, 40, 40).unwrap();
    let blocks = segment(&image, 20).unwrap();

    assert_eq!(blocks.len(), 4);
    assert!(blocks.iter().all(|b| b.intensity == blocks[0].intensity));
    assert_eq!(select_max(&blocks).unwrap().midpoint(), Point::new(10.0, 10.0));
}

#[test]
fn black_image_prefers_the_central_block() {
    let data = canvas(60, 60, [0, 0, 0, 255]);
    let image = PixelBuffer::new(&data, 60, 60).unwrap();
    let blocks = segment(&image, 20).unwrap();

    let top_left = blocks[0];
    let centre = blocks[4];
    assert!(centre.intensity > top_left.intensity);
    assert!((centre.intensity - composite_intensity(1.0, 0.0)).abs() < 1e-12);

    let point = estimate_focus(&data, 60, 60, &Kernel::laplacian(), 20).unwrap();
    assert_eq!(point, Point::new(30.0, 30.0));
}

#[test]
fn clipped_tiling_of_25_by_25() {
    let data = canvas(25, 25, [0, 0, 0, 255]);
    let image = PixelBuffer::new(&data, 25, 25).unwrap();
    let blocks = segment(&image, 20).unwrap();

    let shapes: Vec<(u32, u32)> = blocks.iter().map(|b| (b.w, b.h)).collect();
    assert_eq!(shapes, vec![(20, 20), (5, 20), (20, 5), (5, 5)]);

    // The bias uses the nominal centre even for clipped blocks.
    let expected = composite_intensity(center_bias(25, 25, 30.0, 10.0), 0.0);
    assert!((blocks[1].intensity - expected).abs() < 1e-12);
}

#[test]
fn clipped_winner_midpoint_uses_actual_size() {
    let mut data = canvas(25, 25, [0, 0, 0, 255]);
    fill_rect(&mut data, 25, (20, 20, 5, 5), [255, 255, 255, 255]);

    let point = estimate_focus(&data, 25, 25, &Kernel::identity(), 20).unwrap();
    assert_eq!(point, Point::new(22.5, 22.5));
}

#[test]
fn laplacian_finds_textured_corner() {
    // A one-pixel checkerboard in the top-right block, flat black elsewhere.
    let mut data = canvas(60, 60, [0, 0, 0, 255]);
    for y in 0..20 {
        for x in 40..60 {
            if (x + y) % 2 == 0 {
                fill_rect(&mut data, 60, (x, y, 1, 1), [255, 255, 255, 255]);
            }
        }
    }

    let estimator = FocusEstimator::new(FocusConfig::default(), Kernel::laplacian());
    let image = PixelBuffer::new(&data, 60, 60).unwrap();
    let report = estimator.estimate_with_blocks(&image).unwrap();

    assert_eq!(report.point, Point::new(50.0, 10.0));
    // Nothing outside the textured block responds.
    assert!(report
        .blocks
        .iter()
        .filter(|b| (b.x, b.y) != (40, 0))
        .all(|b| b.intensity <= composite_intensity(1.0, 0.0)));
}

#[test]
fn malformed_input_is_rejected() {
    let kernel = Kernel::laplacian();
    let short = vec![0u8; 40 * 40 * 4 - 1];
    assert!(matches!(
        estimate_focus(&short, 40, 40, &kernel, 20),
        Err(FocalError::InvalidImageShape { .. })
    ));
    assert!(matches!(
        estimate_focus(&[], 0, 40, &kernel, 20),
        Err(FocalError::InvalidImageShape { .. })
    ));
    assert!(matches!(
        estimate_focus(&[], 40, 0, &kernel, 20),
        Err(FocalError::InvalidImageShape { .. })
    ));

    let data = canvas(40, 40, [0, 0, 0, 255]);
    assert!(matches!(
        estimate_focus(&data, 40, 40, &kernel, 0),
        Err(FocalError::InvalidConfiguration { .. })
    ));
}

#[test]
fn estimates_are_deterministic() {
    let mut data = canvas(97, 53, [10, 10, 10, 255]);
    fill_rect(&mut data, 97, (61, 7, 13, 17), [240, 30, 90, 255]);
    fill_rect(&mut data, 97, (5, 30, 8, 8), [30, 250, 60, 255]);

    let estimator = FocusEstimator::with_defaults();
    let image = PixelBuffer::new(&data, 97, 53).unwrap();
    let first = estimator.estimate_with_blocks(&image).unwrap();
    for _ in 0..3 {
        assert_eq!(estimator.estimate_with_blocks(&image).unwrap(), first);
    }
    let blocks: Vec<Block> = first.blocks.clone();
    assert_eq!(select_max(&blocks).unwrap(), first.focal);
}
