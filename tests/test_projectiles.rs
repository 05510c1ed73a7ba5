use echo_of_the_void::entities::*;
use echo_of_the_void::projectiles::*;

fn open_bounds() -> Bounds {
    Bounds { left: 0.0, right: 1000.0, bottom: 0.0, top: 1000.0 }
}

fn with_id(mut bullet: Bullet, id: u64) -> Bullet {
    bullet.id = BulletId(id);
    bullet
}

// ── Bullet::new ───────────────────────────────────────────────────────────────

#[test]
fn aims_at_target_with_speed() {
    let b = Bullet::new(0.0, 0.0, 3.0, 4.0, 5.0);
    assert_eq!((b.change_x, b.change_y), (3.0, 4.0));
    assert_eq!(b.lifetime, BULLET_LIFETIME);
    assert_eq!(b.lifetime, 180);
}

#[test]
fn zero_distance_bullet_is_stationary() {
    let b = Bullet::new(7.0, 7.0, 7.0, 7.0, 5.0);
    assert_eq!((b.change_x, b.change_y), (0.0, 0.0));
}

#[test]
fn player_and_enemy_shots_share_the_aim_rule() {
    let shooter = Enemy::new(10.0, 20.0, Mount::LeftWall, true, 1.0, 100.0);
    let target = (250.0, -70.0);
    let dir = shooter.aim_direction(target);

    let aimed = Bullet::new(10.0, 20.0, target.0, target.1, 4.0);
    let directed = Bullet::with_direction(10.0, 20.0, dir, 4.0);
    assert_eq!((aimed.change_x, aimed.change_y), (directed.change_x, directed.change_y));
}

#[test]
fn direction_is_fixed_at_creation() {
    let mut b = Bullet::with_direction(0.0, 0.0, (0.0, 1.0), 4.0);
    b.advance();
    b.advance();
    assert_eq!((b.x, b.y), (0.0, 8.0));
    assert_eq!((b.change_x, b.change_y), (0.0, 4.0));
}

// ── advance / escaped ─────────────────────────────────────────────────────────

#[test]
fn lifetime_drops_one_per_tick() {
    let mut b = Bullet::new(500.0, 500.0, 510.0, 500.0, 1.0);
    for expected in (1..BULLET_LIFETIME).rev() {
        assert!(!b.advance());
        assert_eq!(b.lifetime, expected);
    }
    assert!(b.advance());
    assert_eq!(b.lifetime, 0);
}

#[test]
fn escape_margin_is_fifty() {
    let bounds = open_bounds();
    let inside = Bullet::with_direction(1050.0, 500.0, (1.0, 0.0), 0.0);
    let outside = Bullet::with_direction(1050.5, 500.0, (1.0, 0.0), 0.0);
    let below = Bullet::with_direction(500.0, -51.0, (1.0, 0.0), 0.0);
    assert!(!inside.escaped(&bounds));
    assert!(outside.escaped(&bounds));
    assert!(below.escaped(&bounds));
}

// ── update_bullets ────────────────────────────────────────────────────────────

#[test]
fn stationary_bullet_expires_on_tick_180() {
    let bounds = open_bounds();
    let mut bullets = vec![with_id(Bullet::new(500.0, 500.0, 500.0, 500.0, 5.0), 1)];

    for tick in 1..BULLET_LIFETIME {
        let removed = update_bullets(&mut bullets, &bounds);
        assert!(removed.is_empty(), "removed early on tick {tick}");
        assert_eq!(bullets[0].lifetime, BULLET_LIFETIME - tick);
    }
    let removed = update_bullets(&mut bullets, &bounds);
    assert_eq!(removed, vec![BulletId(1)]);
    assert!(bullets.is_empty());
}

#[test]
fn bullet_leaving_the_room_is_dropped() {
    let bounds = open_bounds();
    let mut bullets = vec![with_id(Bullet::new(1040.0, 500.0, 2000.0, 500.0, 5.0), 9)];

    assert!(update_bullets(&mut bullets, &bounds).is_empty()); // 1045
    assert!(update_bullets(&mut bullets, &bounds).is_empty()); // 1050, on the margin
    assert_eq!(update_bullets(&mut bullets, &bounds), vec![BulletId(9)]); // 1055
    assert!(bullets.is_empty());
}

#[test]
fn removal_keeps_survivors_in_order() {
    let bounds = open_bounds();
    let mut almost_spent = with_id(Bullet::new(100.0, 100.0, 100.0, 100.0, 5.0), 2);
    almost_spent.lifetime = 1;
    let mut bullets = vec![
        with_id(Bullet::new(100.0, 100.0, 200.0, 100.0, 5.0), 1),
        almost_spent,
        with_id(Bullet::new(100.0, 100.0, 100.0, 200.0, 5.0), 3),
        with_id(Bullet::with_direction(1100.0, 500.0, (1.0, 0.0), 1.0), 4),
        with_id(Bullet::new(100.0, 100.0, 0.0, 100.0, 5.0), 5),
    ];

    let removed = update_bullets(&mut bullets, &bounds);

    assert_eq!(removed, vec![BulletId(2), BulletId(4)]);
    let ids: Vec<u64> = bullets.iter().map(|b| b.id.0).collect();
    assert_eq!(ids, vec![1, 3, 5]);
    // Survivors moved exactly once
    assert_eq!((bullets[0].x, bullets[0].y), (105.0, 100.0));
    assert_eq!((bullets[1].x, bullets[1].y), (100.0, 105.0));
    assert_eq!((bullets[2].x, bullets[2].y), (95.0, 100.0));
}

#[test]
fn empty_set_is_a_no_op() {
    let mut bullets: Vec<Bullet> = Vec::new();
    assert!(update_bullets(&mut bullets, &open_bounds()).is_empty());
}
