//! End-to-end scenarios across pivot-core and pivot-ops.

use pivot_core::{BitDepth, Bitmap, ColorSpace, Direction, InvalidBitmapError, Orientation};
use pivot_ops::{
    OrientationChange, OrientationCycle, PreviewSession, SessionEvent, Strategy, Swipe, orient,
    rotate,
};
use pivot_tests::{packed, pattern};

#[test]
fn test_gray_4x2_clockwise() {
    let src = Bitmap::from_pixels(
        4,
        2,
        BitDepth::U8,
        ColorSpace::Luma,
        vec![1, 2, 3, 4, 5, 6, 7, 8],
    )
    .unwrap();

    let dst = rotate(&src, true).unwrap();

    assert_eq!(dst.dimensions(), (2, 4));
    assert_eq!(dst.row(0), &[5, 1]);
    assert_eq!(dst.row(1), &[6, 2]);
    assert_eq!(dst.row(2), &[7, 3]);
    assert_eq!(dst.row(3), &[8, 4]);
}

#[test]
fn test_rgba_float_with_padding() {
    let src = pattern(5, 3, BitDepth::F32, ColorSpace::Rgba, 12);
    let dst = rotate(&src, false).unwrap();

    assert_eq!(dst.dimensions(), (3, 5));
    assert_eq!(dst.bytes_per_row, 3 * 16);
    assert_eq!(dst.pixels.len(), 3 * 5 * 16);
    // Top-right source pixel becomes top-left after a counter-clockwise turn
    assert_eq!(dst.pixel(0, 0), src.pixel(4, 0));
    assert_eq!(dst.pixel(2, 4), src.pixel(0, 2));
}

#[test]
fn test_zero_width_fails_without_output() {
    let mut bad = pattern(4, 2, BitDepth::U8, ColorSpace::Luma, 0);
    bad.width = 0;
    let err = rotate(&bad, true).unwrap_err();
    assert!(matches!(err, InvalidBitmapError::InvalidDimensions { .. }));
}

#[test]
fn test_short_stride_fails() {
    let mut bad = pattern(4, 2, BitDepth::U8, ColorSpace::Rgb, 0);
    bad.bytes_per_row = 11;
    bad.pixels.truncate(22);
    let err = rotate(&bad, false).unwrap_err();
    assert_eq!(
        err,
        InvalidBitmapError::InvalidStride {
            stride: 11,
            min_stride: 12,
            width: 4
        }
    );
}

#[test]
fn test_cycle_rejects_invalid_then_advances() {
    let mut bad = pattern(2, 2, BitDepth::U8, ColorSpace::Luma, 0);
    bad.height = 0;
    assert!(OrientationCycle::new(bad, Orientation::Up, Strategy::Eager).is_err());

    let good = pattern(3, 2, BitDepth::U8, ColorSpace::Luma, 0);
    let mut cycle = OrientationCycle::new(good.clone(), Orientation::Up, Strategy::Eager).unwrap();
    cycle.advance(Direction::Forward).unwrap();
    assert_eq!(cycle.orientation(), Orientation::Right);
    assert_eq!(cycle.image(), &rotate(&good, true).unwrap());
}

#[test]
fn test_cycle_forward_and_backward_orders() {
    let bmp = pattern(3, 2, BitDepth::U16, ColorSpace::Rgb, 0);
    let mut cycle = OrientationCycle::new(bmp, Orientation::Up, Strategy::TagOnly).unwrap();

    let forward: Vec<_> = (0..4)
        .map(|_| cycle.advance(Direction::Forward).unwrap().0)
        .collect();
    assert_eq!(
        forward,
        [Orientation::Right, Orientation::Down, Orientation::Left, Orientation::Up]
    );

    let backward: Vec<_> = (0..4)
        .map(|_| cycle.advance(Direction::Backward).unwrap().0)
        .collect();
    assert_eq!(
        backward,
        [Orientation::Left, Orientation::Down, Orientation::Right, Orientation::Up]
    );
}

#[test]
fn test_session_flow() {
    let bmp = pattern(4, 2, BitDepth::U8, ColorSpace::Rgba, 0);
    let cycle = OrientationCycle::new(bmp.clone(), Orientation::Up, Strategy::Eager).unwrap();
    let mut session = PreviewSession::new(Some("burst-42".into()), cycle);

    let mut changes = Vec::new();
    for swipe in [Swipe::Right, Swipe::Right, Swipe::Left, Swipe::Down, Swipe::Right] {
        match session.handle_swipe(swipe).unwrap() {
            Some(SessionEvent::Rotated { change, .. }) => changes.push(change),
            Some(SessionEvent::Dismissed) => break,
            None => unreachable!("session still open"),
        }
    }

    assert_eq!(
        changes,
        vec![
            OrientationChange {
                session_id: Some("burst-42".into()),
                orientation: Orientation::Right
            },
            OrientationChange {
                session_id: Some("burst-42".into()),
                orientation: Orientation::Down
            },
            OrientationChange {
                session_id: Some("burst-42".into()),
                orientation: Orientation::Right
            },
        ]
    );
    assert!(session.is_dismissed());

    let (image, orientation) = session.into_cycle().into_parts();
    assert_eq!(orientation, Orientation::Right);
    assert_eq!(image, orient(&bmp, Orientation::Right).unwrap());
}

#[test]
fn test_tag_only_render_drops_padding() {
    let bmp = pattern(3, 3, BitDepth::U8, ColorSpace::LumaA, 2);
    let cycle = OrientationCycle::new(bmp.clone(), Orientation::Up, Strategy::TagOnly).unwrap();
    let rendered = cycle.render().unwrap();
    assert!(rendered.is_tight());
    assert_eq!(rendered.pixels, packed(&bmp));
}
