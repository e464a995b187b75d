//! End-to-end checks on the shipped promo composition.

use std::sync::Once;

use promoreel::{Composition, FrameIndex, Node, ReelError, fingerprint_tree};

static INIT: Once = Once::new();

fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()))
            .with_test_writer()
            .try_init();
    });
}

#[test]
fn every_frame_renders() {
    init_tracing();
    let comp = Composition::promo().unwrap();
    assert_eq!(comp.total_frames(), 1230);
    for frame in 0..comp.total_frames() {
        let tree = comp
            .render_frame(FrameIndex(frame))
            .unwrap_or_else(|e| panic!("frame {frame} failed: {e}"));
        assert!(tree.count() > 1, "frame {frame} rendered an empty tree");
    }
}

#[test]
fn frames_are_bit_identical_across_evaluations() {
    init_tracing();
    let comp = Composition::promo().unwrap();
    let other = Composition::promo().unwrap();
    for frame in [0, 45, 80, 200, 479, 640, 1000, 1229] {
        let a = fingerprint_tree(&comp.render_frame(FrameIndex(frame)).unwrap());
        let b = fingerprint_tree(&other.render_frame(FrameIndex(frame)).unwrap());
        assert_eq!(a, b, "frame {frame} diverged between instances");
    }
}

#[test]
fn transition_frames_carry_two_weighted_layers() {
    init_tracing();
    let comp = Composition::promo().unwrap();

    // The first overlap spans frames [75, 90).
    for frame in [75u64, 82, 89] {
        let Node::Group(root) = comp.render_frame(FrameIndex(frame)).unwrap() else {
            panic!("expected group root");
        };
        assert_eq!(root.children.len(), 2, "frame {frame}");
    }

    // A mid-scene frame carries exactly one full-opacity layer.
    let Node::Group(root) = comp.render_frame(FrameIndex(500)).unwrap() else {
        panic!("expected group root");
    };
    assert_eq!(root.children.len(), 1);
}

#[test]
fn evaluation_order_does_not_matter() {
    init_tracing();
    let comp = Composition::promo().unwrap();
    let forward: Vec<_> = [10u64, 300, 900]
        .iter()
        .map(|f| fingerprint_tree(&comp.render_frame(FrameIndex(*f)).unwrap()))
        .collect();
    let backward: Vec<_> = [900u64, 300, 10]
        .iter()
        .map(|f| fingerprint_tree(&comp.render_frame(FrameIndex(*f)).unwrap()))
        .collect();
    assert_eq!(forward[0], backward[2]);
    assert_eq!(forward[1], backward[1]);
    assert_eq!(forward[2], backward[0]);
}

#[test]
fn rejects_frames_past_the_end() {
    init_tracing();
    let comp = Composition::promo().unwrap();
    assert!(matches!(
        comp.render_frame(FrameIndex(1230)),
        Err(ReelError::OutOfRange(_))
    ));
}

#[test]
fn trees_serialize_to_tagged_json() {
    init_tracing();
    let comp = Composition::promo().unwrap();
    let tree = comp.render_frame(FrameIndex(0)).unwrap();
    let json = serde_json::to_value(&tree).unwrap();
    assert_eq!(json["kind"], "group");
    assert!(json["children"].is_array());
}
