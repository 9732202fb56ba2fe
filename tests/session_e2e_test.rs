//! End-to-end game scenarios driven tick by tick through `Session`.

use space_garbage::core::SpriteLibrary;
use space_garbage::engine::behaviors::{Fire, FlyGarbage};
use space_garbage::engine::Session;
use space_garbage::types::Key;

fn sprites() -> SpriteLibrary {
    SpriteLibrary::from_parts(
        &["  ^  \n /#\\ \n/___\\", "  ^  \n /#\\ \n/_-_\\"],
        &[("crate", "####\n####\n####")],
        "GAME\nOVER",
    )
}

fn crate_sprite(session: &Session) -> std::rc::Rc<space_garbage::core::Sprite> {
    session.world().sprites.garbage_list()[0].clone()
}

#[test]
fn projectile_destroys_falling_garbage() {
    let mut session = Session::bare(sprites(), 30, 40, 1);
    let sprite = crate_sprite(&session);

    // Garbage at col 10 falls a row per tick; the shot climbs a row per tick
    // from row 25 after a three tick muzzle flash.
    session.spawn(FlyGarbage::with_speed(10, sprite, 1.0));
    session.spawn(Fire::with_delta(25.0, 11.0, -1.0, 0.0));

    for _ in 0..13 {
        session.tick();
        assert_eq!(session.world().obstacles.len(), 1);
    }
    assert!(session.world().canvas.text().contains('|'));

    // Shot reaches row 14 while the crate covers rows 13..=15.
    session.tick();
    assert_eq!(session.task_count(), 1);
    assert_eq!(session.world().obstacles.len(), 1);
    assert!(!session.world().canvas.text().contains('|'));

    // The crate consumes the hit on its next turn and leaves an explosion.
    session.tick();
    assert!(session.world().obstacles.is_empty());
    assert_eq!(session.task_count(), 1);
    assert!(!session.world().canvas.text().contains('#'));

    // Explosion centered on (14, 11): first frame's top line starts at row 12.
    session.tick();
    let row = session.world().canvas.row_text(12);
    assert_eq!(row.find("(_)"), Some(13));

    while session.task_count() > 0 {
        session.tick();
    }
    assert_eq!(session.world().canvas.text().trim(), "");
}

#[test]
fn missed_garbage_leaves_the_screen() {
    let mut session = Session::bare(sprites(), 10, 20, 1);
    let sprite = crate_sprite(&session);
    session.spawn(FlyGarbage::with_speed(3, sprite, 1.0));

    for _ in 0..10 {
        session.tick();
    }
    assert_eq!(session.world().obstacles.len(), 1);
    session.tick();
    assert!(session.world().obstacles.is_empty());
    assert_eq!(session.task_count(), 0);
}

#[test]
fn ship_never_leaves_the_canvas() {
    let (rows, cols) = (16u16, 30u16);
    let mut session = Session::bare(sprites(), rows, cols, 1);
    session.spawn_ship();

    for _ in 0..60 {
        session.push_key(Key::Right);
        session.push_key(Key::Down);
        session.tick();
        let ship = &session.world().ship;
        assert!(ship.row >= 0.0 && ship.row <= (rows - 3) as f64);
        assert!(ship.col >= 0.0 && ship.col <= (cols - 5) as f64);
    }
    assert_eq!(session.world().ship.row, (rows - 3) as f64);
    assert_eq!(session.world().ship.col, (cols - 5) as f64);

    for _ in 0..60 {
        session.push_key(Key::Left);
        session.push_key(Key::Up);
        session.tick();
        let ship = &session.world().ship;
        assert!(ship.row >= 0.0 && ship.col >= 0.0);
    }
    assert_eq!(session.world().ship.row, 0.0);
    assert_eq!(session.world().ship.col, 0.0);
}

#[test]
fn falling_garbage_ends_the_game() {
    let mut session = Session::bare(sprites(), 20, 20, 1);
    session.spawn_ship();
    let sprite = crate_sprite(&session);
    session.spawn(FlyGarbage::with_speed(8, sprite, 1.0));

    let mut ticks = 0;
    while !session.is_game_over() {
        session.tick();
        ticks += 1;
        assert!(ticks < 20, "ship survived a direct hit");
    }

    session.tick();
    let text = session.world().canvas.text();
    assert!(text.contains("GAME"));
    assert!(text.contains("OVER"));
    assert!(!text.contains('^'));
}

#[test]
fn firing_from_the_ship_hits_garbage_above() {
    let mut session = Session::bare(sprites(), 30, 40, 3);
    session.spawn_ship();
    // Ship sits at (15, 20); its nose is column 22.
    let sprite = crate_sprite(&session);
    session.spawn(FlyGarbage::with_speed(20, sprite, 0.0));

    session.tick();
    session.push_key(Key::Fire);
    for _ in 0..30 {
        session.tick();
    }
    assert!(session.world().obstacles.is_empty());
    assert!(!session.is_game_over());
}
