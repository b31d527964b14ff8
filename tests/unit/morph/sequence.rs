use image::RgbaImage;

use super::*;
use crate::config::MorphConfig;

fn blob(w: u32, h: u32, x0: u32, y0: u32, x1: u32, y1: u32) -> RgbaImage {
    RgbaImage::from_fn(w, h, |x, y| {
        if (x0..x1).contains(&x) && (y0..y1).contains(&y) {
            image::Rgba([200, 30, 30, 255])
        } else {
            image::Rgba([0, 0, 0, 0])
        }
    })
}

fn session(frames: u32) -> MorphSession {
    let cfg = MorphConfig {
        frames,
        points: 32,
        ..MorphConfig::default()
    };
    MorphSession::new(&blob(24, 24, 2, 2, 10, 10), &blob(24, 24, 8, 6, 20, 22), cfg).unwrap()
}

#[test]
fn t_spans_both_endpoints() {
    let ts: Vec<f64> = (0..5).map(|i| frame_t(i, 5, Ease::Linear)).collect();
    assert_eq!(ts, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    for ease in Ease::ALL {
        assert_eq!(frame_t(0, 7, ease), 0.0, "{ease:?}");
        assert_eq!(frame_t(6, 7, ease), 1.0, "{ease:?}");
    }
}

#[test]
fn single_frame_sits_at_t_zero() {
    assert_eq!(frame_t(0, 1, Ease::Linear), 0.0);
    assert_eq!(frame_t(0, 1, Ease::OutQuad), 0.0);

    let s = session(1);
    let frames: Vec<_> = s.frames().collect::<MorphResult<_>>().unwrap();
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].t, 0.0);
    assert_eq!(frames[0], s.render_frame(FrameIndex(0)).unwrap());
}

#[test]
fn frames_are_ordered_exact_size_and_fused() {
    let s = session(6);
    let mut it = s.frames();
    assert_eq!(it.len(), 6);

    let mut prev_t = -1.0;
    for (i, frame) in it.by_ref().enumerate() {
        let frame = frame.unwrap();
        assert_eq!(frame.index, FrameIndex(i as u32));
        assert!(frame.t > prev_t);
        prev_t = frame.t;
    }
    assert_eq!(it.len(), 0);
    assert!(it.next().is_none());
    assert!(it.next().is_none());
}

#[test]
fn partially_consumed_sequence_reports_remaining() {
    let s = session(4);
    let mut it = s.frames();
    it.next().unwrap().unwrap();
    assert_eq!(it.size_hint(), (3, Some(3)));
    let rest: Vec<_> = it.map(|f| f.unwrap().index.0).collect();
    assert_eq!(rest, vec![1, 2, 3]);
}
