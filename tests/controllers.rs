use std::thread;

use pointlogic::data::paths::{PathId, Status};
use pointlogic::data::scoring::ScoringParams;
use pointlogic::data::session::Target;
use pointlogic::{EventKind, SessionController};

#[test]
fn subscribers_only_see_matching_events() {
    let ctrl = SessionController::new();
    let adds = ctrl.subscribe(EventKind::POINT_ADDED);
    let undos = ctrl.subscribe(EventKind::UNDO);

    ctrl.add_scatter_point(1.0, 2.0);
    ctrl.undo_last(Target::SCATTER);

    let evt = adds.try_recv().unwrap();
    assert!(evt.kinds.contains(EventKind::POINT_ADDED));
    assert_eq!(evt.target, Some(Target::SCATTER));
    assert_eq!(evt.scatter_count, 1);
    assert!(adds.try_recv().is_err());

    let evt = undos.try_recv().unwrap();
    assert_eq!(evt.kinds, EventKind::UNDO);
    assert_eq!(evt.scatter_count, 0);
}

#[test]
fn edits_after_a_run_are_reported_as_scored() {
    let ctrl = SessionController::new();
    let scored = ctrl.subscribe(EventKind::SCORED);

    ctrl.add_path_vertex(1, 0.0, 0.0);
    assert!(scored.try_recv().is_err());

    ctrl.run_scoring(ScoringParams::new(10.0, 0.05));
    assert_eq!(scored.try_recv().unwrap().kinds, EventKind::SCORED);

    ctrl.add_scatter_point(1.0, 0.0);
    let evt = scored.try_recv().unwrap();
    assert!(evt.kinds.contains(EventKind::POINT_ADDED | EventKind::SCORED));

    ctrl.reset_colors();
    assert!(scored.try_recv().is_err());
}

#[test]
fn target_change_is_emitted_once() {
    let ctrl = SessionController::new();
    let rx = ctrl.subscribe(EventKind::TARGET_CHANGED);
    let way = Target::Path(PathId::new(2).unwrap());

    ctrl.set_target(way);
    ctrl.set_target(way);
    assert_eq!(rx.try_iter().count(), 1);

    ctrl.add_point(5.0, 5.0);
    assert_eq!(ctrl.with_session(|s| s.path(PathId::new(2).unwrap()).len()), 1);
}

#[test]
fn dropped_receivers_are_pruned() {
    let ctrl = SessionController::new();
    drop(ctrl.subscribe(EventKind::ALL));
    ctrl.add_scatter_point(0.0, 0.0);
    let rx = ctrl.subscribe(EventKind::ALL);
    ctrl.add_scatter_point(1.0, 0.0);
    assert_eq!(rx.try_iter().count(), 1);
}

#[test]
fn clones_share_one_session_across_threads() {
    let ctrl = SessionController::new();
    ctrl.add_path_vertex(1, 0.0, 0.0);
    ctrl.add_path_vertex(1, 100.0, 0.0);
    ctrl.run_scoring(ScoringParams::new(10.0, 0.05));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let c = ctrl.clone();
            thread::spawn(move || {
                for j in 0..10 {
                    c.add_scatter_point(500.0 + i as f64, j as f64 * 50.0);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    ctrl.add_scatter_point(0.0, 3.0);

    let snap = ctrl.snapshot();
    assert_eq!(snap.scatter_points.len(), 41);
    let seqs: Vec<u32> = snap.scatter_points.iter().map(|p| p.seq).collect();
    assert_eq!(seqs, (1..=41).collect::<Vec<u32>>());
    assert_eq!(snap.paths[0].vertices[0].status, Status::Contact);
    assert_eq!(snap.scoring, Some(ScoringParams::new(10.0, 0.05)));
}

#[test]
fn ignored_calls_emit_nothing() {
    let ctrl = SessionController::new();
    let rx = ctrl.subscribe(EventKind::ALL);

    ctrl.add_path_vertex(9, 1.0, 1.0);
    ctrl.add_scatter_point(f64::NAN, 0.0);
    ctrl.add_point(0.0, f64::INFINITY);
    ctrl.undo_last(Target::SCATTER);
    ctrl.reset_target(Target::Path(PathId::new(3).unwrap()));
    assert_eq!(rx.try_iter().count(), 0);

    ctrl.add_scatter_point(1.0, 1.0);
    assert_eq!(rx.try_iter().count(), 1);
}

#[test]
fn target_change_during_a_run_is_not_scored() {
    let ctrl = SessionController::new();
    ctrl.run_scoring(ScoringParams::new(10.0, 0.05));
    let rx = ctrl.subscribe(EventKind::ALL);

    ctrl.set_target(Target::Path(PathId::new(1).unwrap()));
    let evt = rx.try_recv().unwrap();
    assert_eq!(evt.kinds, EventKind::TARGET_CHANGED);

    ctrl.reset_colors();
    assert_eq!(rx.try_recv().unwrap().kinds, EventKind::COLORS_RESET);
}
