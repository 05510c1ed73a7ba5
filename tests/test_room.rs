use echo_of_the_void::entities::*;
use echo_of_the_void::projectiles::BULLET_LIFETIME;
use echo_of_the_void::room::TickReport;
use echo_of_the_void::{Room, RoomConfig, RoomError};

const DT: f32 = 1.0 / 60.0;
const FAR_AWAY: (f32, f32) = (-100_000.0, -100_000.0);

fn make_room() -> Room {
    Room::with_seed(RoomConfig::default(), 42).unwrap()
}

/// First seeded room that has at least one shooter.
fn room_with_shooter() -> Room {
    (0..50)
        .map(|seed| Room::with_seed(RoomConfig::default(), seed).unwrap())
        .find(|room| room.enemies().iter().any(|e| e.is_shooter))
        .expect("no shooter in 50 seeded rooms")
}

fn draw_rank(kind: DrawKind) -> u8 {
    match kind {
        DrawKind::Wall | DrawKind::Floor => 0,
        DrawKind::Ceiling => 1,
        DrawKind::Platform => 2,
        DrawKind::Enemy | DrawKind::Shooter => 3,
        DrawKind::Bullet => 4,
    }
}

// ── Construction ──────────────────────────────────────────────────────────────

#[test]
fn default_room_bounds() {
    let room = make_room();
    let b = room.bounds();
    assert_eq!((b.left, b.right, b.bottom, b.top), (150.0, 750.0, 200.0, 5200.0));
}

#[test]
fn invalid_config_is_an_error() {
    let err = Room::with_seed(RoomConfig::new(0.0, 0.0, 150.0, 150.0), 1).unwrap_err();
    assert!(matches!(err, RoomError::TooSmall { .. }));
}

#[test]
fn far_away_room_is_refused_up_front() {
    let err = Room::with_seed(RoomConfig::new(0.0, 1.0e10, 600.0, 5000.0), 1).unwrap_err();
    assert!(matches!(err, RoomError::OutOfRange { field: "center_y", .. }));
}

#[test]
fn room_at_coordinate_limit_builds() {
    let room = Room::with_seed(RoomConfig::new(0.0, 1.0e6, 600.0, 5000.0), 1).unwrap();
    assert!(room.platforms().len() >= 41);
}

#[test]
fn room_is_populated_once() {
    let room = make_room();
    assert!(room.platforms().len() >= 41);
    assert!(room.enemies().len() <= 25);
    assert!(room.bullets().is_empty());
    assert_eq!(room.walls().len(), 109);
    assert_eq!(room.ceilings().len(), 7);
}

#[test]
fn same_seed_same_room() {
    let a = make_room();
    let b = make_room();
    assert_eq!(a.platforms(), b.platforms());
    assert_eq!(a.enemies(), b.enemies());
    assert_eq!(a.collision_surfaces(), b.collision_surfaces());
}

#[test]
fn smallest_room_still_builds() {
    let room = Room::with_seed(RoomConfig::new(100.0, 100.0, 200.0, 200.0), 5).unwrap();
    assert!(!room.platforms().is_empty());
    assert!(room.platforms().len() <= 1 + 40);
}

// ── Obstacle set ──────────────────────────────────────────────────────────────

#[test]
fn obstacles_are_walls_ceilings_and_platforms() {
    let room = make_room();
    let surfaces = room.collision_surfaces();
    assert_eq!(
        surfaces.len(),
        room.walls().len() + room.ceilings().len() + room.platforms().len()
    );
    assert_eq!(surfaces[0], room.walls()[0].rect);
    let first_platform = &room.platforms()[0];
    assert_eq!(
        surfaces[room.walls().len() + room.ceilings().len()],
        first_platform.hitbox()
    );
}

#[test]
fn obstacles_never_change() {
    let mut room = room_with_shooter();
    let before = room.collision_surfaces().to_vec();
    let target = room.enemies()[0].position();
    for _ in 0..300 {
        room.update(DT, target.0, target.1);
    }
    assert_eq!(room.collision_surfaces(), before.as_slice());
}

// ── containsPoint / random position ───────────────────────────────────────────

#[test]
fn contains_point_is_strict() {
    let room = make_room();
    assert!(!room.contains_point(150.0, 300.0));
    assert!(room.contains_point(151.0, 300.0));
    assert!(!room.contains_point(400.0, 5200.0));
    assert!(room.contains_point(400.0, 5199.0));
}

#[test]
fn random_position_is_inset() {
    let mut room = make_room();
    for _ in 0..200 {
        let (x, y) = room.random_position();
        assert!((200.0..=700.0).contains(&x));
        assert!((250.0..=5150.0).contains(&y));
    }
}

// ── update ────────────────────────────────────────────────────────────────────

#[test]
fn far_player_is_never_shot_at() {
    let mut room = make_room();
    for _ in 0..600 {
        let report = room.update(DT, FAR_AWAY.0, FAR_AWAY.1);
        assert_eq!(report, TickReport::default());
        for e in room.enemies() {
            assert!(e.x >= 180.0 && e.x <= 720.0);
            assert!(e.y >= 230.0 && e.y <= 5170.0);
        }
    }
    assert!(room.bullets().is_empty());
}

#[test]
fn shooter_fires_and_new_bullets_are_not_advanced() {
    let mut room = room_with_shooter();
    let shooter = room.enemies().iter().position(|e| e.is_shooter).unwrap();

    let mut fired_any = false;
    for _ in 0..300 {
        let target = room.enemies()[shooter].position();
        let report = room.update(DT, target.0, target.1);
        for id in &report.fired {
            fired_any = true;
            let bullet = room.bullets().iter().find(|b| b.id == *id).unwrap();
            assert_eq!(bullet.lifetime, BULLET_LIFETIME);
            assert!(room.enemies().iter().any(|e| (e.x, e.y) == (bullet.x, bullet.y)));
        }
    }
    assert!(fired_any);
}

#[test]
fn fired_ids_are_unique() {
    let mut room = room_with_shooter();
    let shooter = room.enemies().iter().position(|e| e.is_shooter).unwrap();
    let mut seen = Vec::new();
    for _ in 0..600 {
        let target = room.enemies()[shooter].position();
        let report = room.update(DT, target.0, target.1);
        for id in report.fired {
            assert!(!seen.contains(&id));
            assert_ne!(id, BulletId::UNASSIGNED);
            seen.push(id);
        }
    }
}

// ── Bullet handles ────────────────────────────────────────────────────────────

#[test]
fn remove_bullet_by_handle() {
    let mut room = make_room();
    let a = room.spawn_bullet(Bullet::new(400.0, 1000.0, 400.0, 1000.0, 5.0));
    let b = room.spawn_bullet(Bullet::new(500.0, 1000.0, 500.0, 1000.0, 5.0));
    assert_ne!(a, b);
    assert_eq!(room.bullets().len(), 2);

    assert!(room.remove_bullet(a));
    assert!(!room.remove_bullet(a));
    assert_eq!(room.bullets().len(), 1);
    assert_eq!(room.bullets()[0].id, b);
}

#[test]
fn bullets_hitting_reports_overlaps_only() {
    let mut room = make_room();
    let near = room.spawn_bullet(Bullet::new(400.0, 1000.0, 400.0, 1000.0, 5.0));
    let _far = room.spawn_bullet(Bullet::new(600.0, 3000.0, 600.0, 3000.0, 5.0));

    let hitbox = Rect::new(410.0, 1000.0, 24.0, 24.0);
    assert_eq!(room.bullets_hitting(&hitbox), vec![near]);
    assert!(room.bullets_hitting(&Rect::new(0.0, 0.0, 1.0, 1.0)).is_empty());
}

#[test]
fn spawned_bullet_expires_through_update() {
    let mut room = make_room();
    let id = room.spawn_bullet(Bullet::new(400.0, 1000.0, 400.0, 1000.0, 5.0));
    for _ in 1..BULLET_LIFETIME {
        assert!(room.update(DT, FAR_AWAY.0, FAR_AWAY.1).removed.is_empty());
    }
    assert_eq!(room.update(DT, FAR_AWAY.0, FAR_AWAY.1).removed, vec![id]);
}

#[test]
fn enemy_touching_uses_hitboxes() {
    let room = make_room();
    let enemy = &room.enemies()[0];
    assert!(room.enemy_touching(&Rect::new(enemy.x, enemy.y, 24.0, 24.0)));
    assert!(!room.enemy_touching(&Rect::new(FAR_AWAY.0, FAR_AWAY.1, 24.0, 24.0)));
}

// ── draw ──────────────────────────────────────────────────────────────────────

#[test]
fn draw_order_is_back_to_front() {
    let mut room = make_room();
    room.spawn_bullet(Bullet::new(400.0, 1000.0, 400.0, 1000.0, 5.0));
    let items = room.draw();

    assert_eq!(
        items.len(),
        room.walls().len()
            + room.ceilings().len()
            + room.platforms().len()
            + room.enemies().len()
            + 1
    );
    for pair in items.windows(2) {
        assert!(draw_rank(pair[0].kind) <= draw_rank(pair[1].kind));
    }
    assert_eq!(items.last().unwrap().kind, DrawKind::Bullet);
}
