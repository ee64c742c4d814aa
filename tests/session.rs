use pointlogic::data::paths::{PathId, Status};
use pointlogic::data::scoring::ScoringParams;
use pointlogic::data::session::{Session, Target};

fn way(id: u32) -> PathId {
    PathId::new(id).unwrap()
}

#[test]
fn clicks_follow_the_active_target() {
    let mut s = Session::new();
    s.add_point(1.0, 1.0);
    s.set_target(Target::Path(way(2)));
    s.add_point(10.0, 0.0);
    s.add_point(20.0, 0.0);
    s.set_target(Target::Path(way(2)).with_scatter_forced(true));
    s.add_point(5.0, 5.0);

    assert_eq!(s.scatter_points().len(), 2);
    assert_eq!(s.path(way(2)).len(), 2);
    assert!(s.path(way(1)).is_empty());
    let seqs: Vec<u32> = s.path(way(2)).vertices.iter().map(|v| v.seq).collect();
    assert_eq!(seqs, vec![1, 2]);
    assert!(s.path(way(2)).vertices.iter().all(|v| v.path_id == way(2)));
}

#[test]
fn undo_keeps_sequence_numbers_dense() {
    let mut s = Session::new();
    for i in 0..4 {
        s.add_scatter_point(i as f64, 0.0);
    }
    s.undo_last(Target::SCATTER);
    s.add_scatter_point(9.0, 9.0);

    let seqs: Vec<u32> = s.scatter_points().iter().map(|p| p.seq).collect();
    assert_eq!(seqs, vec![1, 2, 3, 4]);
    assert_eq!(s.scatter_points().as_slice()[3].x, 9.0);
}

#[test]
fn undo_and_reset_on_empty_targets_are_noops() {
    let mut s = Session::new();
    assert!(!s.can_undo(Target::SCATTER));
    assert!(!s.can_undo(Target::Path(way(5))));
    assert!(!s.undo_last(Target::SCATTER));
    assert!(!s.undo_last(Target::Path(way(5))));
    assert!(!s.reset_target(Target::Path(way(5))));
    assert!(!s.add_path_vertex(6, 1.0, 1.0));
    assert!(s.scatter_points().is_empty());
    assert!(s.paths().iter().all(|p| p.is_empty()));
}

#[test]
fn reset_only_touches_its_target() {
    let mut s = Session::new();
    s.add_scatter_point(0.0, 0.0);
    s.add_path_vertex(1, 0.0, 0.0);
    s.add_path_vertex(3, 1.0, 1.0);

    s.reset_target(Target::Path(way(1)));
    assert!(s.path(way(1)).is_empty());
    assert_eq!(s.path(way(3)).len(), 1);
    assert_eq!(s.scatter_points().len(), 1);

    s.reset_target(Target::SCATTER);
    assert!(s.scatter_points().is_empty());
    assert_eq!(s.path(way(3)).len(), 1);
}

#[test]
fn unknown_path_ids_are_ignored() {
    let mut s = Session::new();
    s.add_path_vertex(0, 1.0, 1.0);
    s.add_path_vertex(6, 1.0, 1.0);
    assert!(s.paths().iter().all(|p| p.is_empty()));
    assert_eq!(s.paths().iter().count(), 5);
}

#[test]
fn vertices_stay_unset_until_scored() {
    let mut s = Session::new();
    s.add_path_vertex(1, 0.0, 0.0);
    s.add_path_vertex(1, 100.0, 0.0);
    s.add_scatter_point(1.0, 1.0);
    assert!(!s.has_run());
    assert!(s
        .path(way(1))
        .vertices
        .iter()
        .all(|v| v.status == Status::Unset && v.weight == 0.0));
}

#[test]
fn edits_rescore_after_a_run_until_colors_are_reset() {
    let mut s = Session::new();
    s.add_path_vertex(1, 0.0, 0.0);
    s.add_path_vertex(1, 100.0, 0.0);
    s.run_scoring(ScoringParams::new(10.0, 0.05));
    assert!(s.has_run());
    assert!(s
        .path(way(1))
        .vertices
        .iter()
        .all(|v| v.status == Status::Unaligned));

    // New scatter point near the first vertex is picked up immediately.
    s.add_scatter_point(2.0, 0.0);
    assert_eq!(s.path(way(1)).vertices[0].status, Status::Contact);

    // New vertex on the same path is scored too.
    s.add_path_vertex(1, 200.0, 0.0);
    assert_eq!(s.path(way(1)).vertices[2].status, Status::Unaligned);

    s.undo_last(Target::SCATTER);
    assert_eq!(s.path(way(1)).vertices[0].status, Status::Unaligned);

    s.reset_colors();
    assert!(!s.has_run());
    assert!(s
        .path(way(1))
        .vertices
        .iter()
        .all(|v| v.status == Status::Unset && v.weight == 0.0));

    s.add_scatter_point(2.0, 0.0);
    assert_eq!(s.path(way(1)).vertices[0].status, Status::Unset);
}

#[test]
fn scoring_covers_every_path() {
    let mut s = Session::new();
    for id in 1..=5 {
        s.add_path_vertex(id, id as f64 * 100.0, 0.0);
    }
    s.add_scatter_point(300.0, 1.0);
    s.run_scoring(ScoringParams::new(10.0, 0.05));
    for id in PathId::all() {
        let expected = if id.get() == 3 {
            Status::Contact
        } else {
            Status::Unaligned
        };
        assert_eq!(s.path(id).vertices[0].status, expected, "path {id}");
    }
}

#[test]
fn selecting_a_view_carries_forced_scatter() {
    let forced = Target::Path(way(1)).with_scatter_forced(true);
    assert_eq!(forced.select(Some(way(4))), Target::Scatter { over: Some(way(4)) });
    assert_eq!(forced.select(None), Target::SCATTER);
    assert_eq!(Target::Path(way(1)).select(Some(way(4))), Target::Path(way(4)));
    assert_eq!(Target::SCATTER.select(Some(way(2))), Target::Path(way(2)));
    assert!(!Target::SCATTER.is_scatter_forced());
    assert_eq!(Target::SCATTER.viewed_path(), None);
}

#[test]
fn snapshot_reflects_session() {
    let mut s = Session::new();
    s.add_scatter_point(1.0, 2.0);
    s.add_path_vertex(2, 3.0, 4.0);
    s.set_target(Target::Path(way(2)));
    let snap = s.snapshot();
    assert_eq!(snap.target, Target::Path(way(2)));
    assert_eq!(snap.scatter_points.len(), 1);
    assert_eq!(snap.paths.len(), 5);
    assert_eq!(snap.paths[1].vertices[0].x, 3.0);
    assert!(snap.scoring.is_none());
}

#[test]
fn reset_colors_keeps_coordinates_and_sequence() {
    let mut s = Session::new();
    s.add_path_vertex(1, 0.0, 0.0);
    s.add_path_vertex(1, 100.0, 0.0);
    s.add_scatter_point(50.0, 5.0);
    s.run_scoring(ScoringParams::new(10.0, 0.05));
    let before = s.path(way(1)).clone();

    s.reset_colors();
    let after = s.path(way(1));
    assert_eq!(after.len(), before.len());
    for (a, b) in after.vertices.iter().zip(&before.vertices) {
        assert_eq!((a.x, a.y, a.seq), (b.x, b.y, b.seq));
        assert_eq!(a.status, Status::Unset);
        assert_eq!(a.weight, 0.0);
    }
    assert_eq!(s.scatter_points().len(), 1);
}
