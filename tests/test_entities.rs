use sharp_shooter::entities::*;

#[test]
fn entity_copy_and_eq() {
    // Enums derive PartialEq — equality comparisons must work
    assert_eq!(GamePhase::Playing, GamePhase::Playing);
    assert_ne!(GamePhase::NotStarted, GamePhase::Finished);
    assert_eq!(MovementDirection::default(), MovementDirection::None);
    assert_ne!(MovementDirection::Up, MovementDirection::Down);

    let p = Position::new(1, 2);
    let q = p;
    assert_eq!(p, q);
}

#[test]
fn keys_map_to_directions() {
    assert_eq!(Key::Up.direction(), Some(MovementDirection::Up));
    assert_eq!(Key::Down.direction(), Some(MovementDirection::Down));
    assert_eq!(Key::Left.direction(), Some(MovementDirection::Left));
    assert_eq!(Key::Right.direction(), Some(MovementDirection::Right));
    assert_eq!(Key::Space.direction(), None);
}

#[test]
fn score_state_starts_with_full_magazine() {
    let s = ScoreState::default();
    assert_eq!(s.attempts_remaining, STARTING_ATTEMPTS);
    assert_eq!(s.total_score, 0);
    assert_eq!(s.last_shot_score, 0);
}

#[test]
fn squared_distance_is_exact() {
    let a = Position::new(350, 350);
    assert_eq!(a.distance_squared_to(a), 0);
    assert_eq!(a.distance_squared_to(Position::new(530, 590)), 90_000);
    assert_eq!(Position::new(0, 0).distance_squared_to(Position::new(3, 4)), 25);
}

#[test]
fn target_sits_in_the_middle_of_the_playable_square() {
    assert_eq!(TARGET_CENTER, Position::new(350, 350));
    assert_eq!(MIN_POSITION + MAX_POSITION, FIELD_SIZE);
}

#[test]
fn game_state_clone_is_independent() {
    let original = GameState {
        phase: GamePhase::Playing,
        sight: TARGET_CENTER,
        bullet_holes: Vec::new(),
        score: ScoreState::default(),
        last_direction: MovementDirection::None,
    };
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.sight.x = 99;
    cloned.score.total_score = 999;
    cloned.bullet_holes.push(ShotRecord { x: 5, y: 5 });

    assert_eq!(original.sight.x, 350);
    assert_eq!(original.score.total_score, 0);
    assert!(original.bullet_holes.is_empty());
}
