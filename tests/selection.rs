use glam::Vec2;
use speculoos::prelude::*;

mod common;

#[test]
fn test_targets_lay_out_along_centerline() {
    let (session, _calls) = common::default_session();

    let expected: Vec<Vec2> = (1..=5).map(|i| Vec2::new(100.0 * i as f32, 300.0)).collect();
    assert_that(&session.targets().to_vec()).is_equal_to(expected);
}

#[test]
fn test_no_selection_when_out_of_range() {
    let (mut session, calls) = common::default_session();
    common::start(&mut session, &calls);

    // Default avatar start is 270 units below the center target, outside the
    // 200-unit chase radius of every target.
    session.tick(session.avatar_position());

    assert_that(&session.selected_target()).is_none();
}

#[test]
fn test_first_target_in_order_wins_over_nearer() {
    let (mut session, calls) = common::default_session();
    common::start(&mut session, &calls);

    // 130 units from target 1, only 70 from target 3: both in radius, but
    // selection scans in layout order rather than picking the nearest.
    let avatar = Vec2::new(330.0, 300.0);
    common::set_avatar_position(&mut session, avatar);
    session.tick(avatar);

    assert_that(&session.selected_target()).is_equal_to(Some(1));
}

#[test]
fn test_selection_clears_when_avatar_leaves() {
    let (mut session, calls) = common::default_session();
    common::start(&mut session, &calls);

    let near = Vec2::new(330.0, 300.0);
    common::set_avatar_position(&mut session, near);
    session.tick(near);
    assert_that(&session.selected_target()).is_equal_to(Some(1));

    // Out of range of all five targets
    let far = Vec2::new(520.0, 80.0);
    common::set_avatar_position(&mut session, far);
    session.tick(far);

    assert_that(&session.selected_target()).is_none();
}

#[test]
fn test_selection_is_recomputed_each_tick() {
    let (mut session, calls) = common::default_session();
    common::start(&mut session, &calls);

    let near_first = Vec2::new(120.0, 300.0);
    common::set_avatar_position(&mut session, near_first);
    session.tick(near_first);
    assert_that(&session.selected_target()).is_equal_to(Some(0));

    // Only the last target is inside the radius from here (target 3 is ~202
    // units away, target 4 ~141).
    let near_last = Vec2::new(555.0, 430.0);
    common::set_avatar_position(&mut session, near_last);
    session.tick(near_last);
    assert_that(&session.selected_target()).is_equal_to(Some(4));
}
