//! Sequencer behavior through the public API.

use promoreel::{
    FrameIndex, ReelError, ReelResult, Scene, SceneCtx, Timeline, Transition,
    scene::tree::{Group, Node},
};

fn blank(_ctx: &SceneCtx) -> ReelResult<Node> {
    Ok(Node::from(Group::new(vec![])))
}

fn scene(id: &str, duration: u64) -> Scene {
    Scene::new(id, duration, blank)
}

#[test]
fn three_scene_reference_layout() {
    let tl = Timeline::new(vec![
        (scene("a", 90), Some(Transition::fade(15))),
        (scene("b", 120), Some(Transition::fade(15))),
        (scene("c", 150), None),
    ])
    .unwrap();

    assert_eq!(tl.total_frames(), 330);

    // Outside overlaps: exactly one active scene, local = global - start.
    let active = tl.resolve(FrameIndex(100)).unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].index, 1);
    assert_eq!(active[0].local, FrameIndex(25));
    assert_eq!(active[0].blend, 1.0);

    // Inside an overlap: outgoing and incoming with complementary weights.
    for f in 75..90 {
        let active = tl.resolve(FrameIndex(f)).unwrap();
        assert_eq!(active.len(), 2, "frame {f}");
        assert!((active[0].blend + active[1].blend - 1.0).abs() < 1e-12);
    }
}

#[test]
fn nine_scene_promo_layout() {
    let durations = [90u64, 120, 150, 180, 180, 180, 180, 90, 180];
    let n = durations.len();
    let entries = durations
        .iter()
        .enumerate()
        .map(|(i, d)| {
            let tr = (i + 1 < n).then(|| Transition::fade(15));
            (scene(&format!("s{i}"), *d), tr)
        })
        .collect();
    let tl = Timeline::new(entries).unwrap();

    // Sum of durations minus the eight 15-frame overlaps.
    assert_eq!(tl.total_frames(), 1350 - 120);

    // Every frame resolves; weights always sum to 1.
    for f in 0..tl.total_frames() {
        let active = tl.resolve(FrameIndex(f)).unwrap();
        let sum: f64 = active.iter().map(|a| a.blend).sum();
        assert!((sum - 1.0).abs() < 1e-12, "frame {f}: weights sum {sum}");
    }
}

#[test]
fn out_of_range_frames_are_rejected() {
    let tl = Timeline::new(vec![(scene("only", 10), None)]).unwrap();
    assert!(tl.resolve(FrameIndex(9)).is_ok());
    assert!(matches!(
        tl.resolve(FrameIndex(10)),
        Err(ReelError::OutOfRange(_))
    ));
    assert!(matches!(
        tl.resolve(FrameIndex(u64::MAX)),
        Err(ReelError::OutOfRange(_))
    ));
}

#[test]
fn windows_are_static_and_cover_the_axis() {
    let tl = Timeline::new(vec![
        (scene("a", 40), Some(Transition::fade(10))),
        (scene("b", 40), Some(Transition::fade(0))),
        (scene("c", 40), None),
    ])
    .unwrap();
    let windows = tl.windows();
    assert_eq!(windows.len(), 3);
    assert_eq!(windows[0].start.0, 0);
    assert_eq!(windows[1].start.0, 30);
    assert_eq!(windows[2].start.0, 70);
    assert_eq!(tl.total_frames(), 110);

    // Hard cut at the b/c boundary: frame 70 belongs to c alone.
    let active = tl.resolve(FrameIndex(70)).unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].index, 2);
    assert_eq!(active[0].local, FrameIndex(0));
}
