use glam::Vec2;
use speculoos::prelude::*;

mod common;

#[test]
fn test_avatar_eases_toward_pointer() {
    let (mut session, calls) = common::default_session();
    common::start(&mut session, &calls);

    let start = session.avatar_position();
    let pointer = Vec2::new(300.0, 100.0);

    session.tick(pointer);

    // One easing step, not a snap: start + 0.2 * (pointer - start)
    let expected = start + (pointer - start) * 0.2;
    assert_that(&(session.avatar_position().distance(expected) < 1e-3)).is_true();

    // A second tick closes a fifth of the remaining gap again
    let after_one = session.avatar_position();
    session.tick(pointer);
    let expected = after_one + (pointer - after_one) * 0.2;
    assert_that(&(session.avatar_position().distance(expected) < 1e-3)).is_true();
}

#[test]
fn test_avatar_stays_put_when_pointer_matches() {
    let (mut session, calls) = common::default_session();
    common::start(&mut session, &calls);

    let start = session.avatar_position();
    session.tick(start);

    assert_that(&session.avatar_position()).is_equal_to(start);
}

#[test]
fn test_avatar_clamps_at_lower_bounds() {
    let (mut session, calls) = common::default_session();
    common::start(&mut session, &calls);

    // Pointer far outside the playfield is valid input; the avatar settles on
    // the clamping boundary instead of following it out.
    let pointer = Vec2::new(-500.0, -500.0);
    for _ in 0..60 {
        session.tick(pointer);

        let position = session.avatar_position();
        assert_that(&(position.x >= 45.0 && position.x <= 555.0)).is_true();
        assert_that(&(position.y >= 30.0 && position.y <= 570.0)).is_true();
    }

    // Half the 90x60 avatar footprint on each axis
    assert_that(&session.avatar_position()).is_equal_to(Vec2::new(45.0, 30.0));
}

#[test]
fn test_avatar_clamps_at_upper_bounds() {
    let (mut session, calls) = common::default_session();
    common::start(&mut session, &calls);

    let pointer = Vec2::new(10_000.0, 10_000.0);
    for _ in 0..60 {
        session.tick(pointer);
    }

    assert_that(&session.avatar_position()).is_equal_to(Vec2::new(555.0, 570.0));
}

#[test]
fn test_avatar_holds_before_start() {
    let (mut session, _calls) = common::default_session();

    let start = session.avatar_position();
    for _ in 0..10 {
        session.tick(Vec2::new(100.0, 100.0));
    }

    assert_that(&session.avatar_position()).is_equal_to(start);
}
