use std::collections::HashSet;

use glam::IVec2;
use mazechase::entity::direction::Direction;
use mazechase::entity::EntityKind;
use mazechase::game::{Game, RunState};
use mazechase::input::GameCommand;
use mazechase::render;
use pretty_assertions::assert_eq;

const FRAME: f32 = 1.0 / 60.0;

/// Parks the player at the center of a tile with no motion intent.
fn park_player_at(game: &mut Game, tile: IVec2) {
    let center = game.state.maze.center_of_tile(tile);
    let player = game.state.player_mut();
    player.body.position = center;
    player.body.direction = None;
    player.next_direction = None;
}

#[test]
fn test_initial_state() {
    let game = Game::new().unwrap();
    assert_eq!(game.state.score, 0);
    assert_eq!(game.state.player().lives, 3);
    assert_eq!(game.state.entities.len(), 5);
    assert_eq!(game.state.pellets.len(), 274);
    assert_eq!(game.state.power_pellets.len(), 4);
    assert_eq!(game.state.run_state, RunState::Running);
    assert_eq!(game.state.player_tile(), IVec2::new(13, 23));
}

#[test]
fn test_scripted_walk_eats_first_pellet() {
    let mut game = Game::new().unwrap();
    // The player spawns facing left; six frames at 90 px/s cross into
    // (12,23), the first pellet tile on the way.
    for _ in 0..6 {
        game.tick(FRAME);
    }
    assert_eq!(game.state.player_tile(), IVec2::new(12, 23));
    assert_eq!(game.state.score, 10);
    assert!(!game.state.pellets.contains(&IVec2::new(12, 23)));
}

#[test]
fn test_pellet_scores_ten() {
    let mut game = Game::new().unwrap();
    park_player_at(&mut game, IVec2::new(1, 1));
    game.tick(FRAME);
    assert_eq!(game.state.score, 10);
    assert!(!game.state.pellets.contains(&IVec2::new(1, 1)));
}

#[test]
fn test_power_pellet_scores_fifty() {
    let mut game = Game::new().unwrap();
    park_player_at(&mut game, IVec2::new(1, 3));
    game.tick(FRAME);
    assert_eq!(game.state.score, 50);
    assert!(!game.state.power_pellets.contains(&IVec2::new(1, 3)));
}

#[test]
fn test_consumption_is_monotonic() {
    let mut game = Game::new().unwrap();
    park_player_at(&mut game, IVec2::new(1, 1));
    for _ in 0..10 {
        game.tick(FRAME);
    }
    // Revisiting (staying on) a drained tile never re-scores it.
    assert_eq!(game.state.score, 10);
    assert_eq!(game.state.pellets.len(), 273);
    assert_eq!(game.state.power_pellets.len(), 4);
}

#[test]
fn test_move_command_writes_only_the_buffer() {
    let mut game = Game::new().unwrap();
    game.push_command(GameCommand::Move(Direction::Up));

    // Nothing is applied until the tick drains the queue.
    assert_eq!(game.state.player().next_direction, Some(Direction::Left));

    game.tick(0.0);
    // (13,22) is a wall, so the buffered direction cannot be adopted yet;
    // the current direction is untouched and the buffer is retained.
    let player = game.state.player();
    assert_eq!(player.next_direction, Some(Direction::Up));
    assert_eq!(player.body.direction, Some(Direction::Left));
}

#[test]
fn test_frame_delta_is_clamped() {
    let mut game = Game::new().unwrap();
    let start = game.state.maze.center_of_tile(IVec2::new(13, 5));
    {
        let player = game.state.player_mut();
        player.body.position = start;
        player.body.direction = Some(Direction::Right);
        player.next_direction = Some(Direction::Right);
    }

    // A ten second stall still advances at most 50ms of travel.
    game.tick(10.0);
    let moved = game.state.player().body.position.x - start.x;
    assert!((moved - 4.5).abs() < 0.001, "moved {moved} pixels");
}

#[test]
fn test_pause_freezes_the_simulation() {
    let mut game = Game::new().unwrap();
    game.tick(FRAME);

    game.push_command(GameCommand::TogglePause);
    game.tick(FRAME);
    assert!(game.is_paused());

    let entities = game.state.entities.clone();
    let pellets = game.state.pellets.clone();
    let power_pellets = game.state.power_pellets.clone();
    let score = game.state.score;

    for _ in 0..10 {
        game.tick(FRAME);
    }
    assert_eq!(game.state.entities, entities);
    assert_eq!(game.state.pellets, pellets);
    assert_eq!(game.state.power_pellets, power_pellets);
    assert_eq!(game.state.score, score);

    game.push_command(GameCommand::TogglePause);
    let before_x = game.state.player().body.position.x;
    game.tick(FRAME);
    assert!(!game.is_paused());
    assert!(game.state.player().body.position.x < before_x);
}

#[test]
fn test_pursuers_hold_course_while_target_is_unreachable() {
    let mut game = Game::new().unwrap();
    // The player's spawn tile is a wall in this layout, so until the player
    // crosses into a real floor tile no pursuer can path to it. That is a
    // normal outcome: they hold their initial heading.
    game.tick(FRAME);
    for pursuer in game.state.pursuers() {
        assert!(pursuer.path.is_empty());
        assert_eq!(pursuer.body.direction, Some(Direction::Left));
    }
}

#[test]
fn test_pursuers_path_to_a_reachable_player() {
    let mut game = Game::new().unwrap();
    park_player_at(&mut game, IVec2::new(13, 18));
    game.tick(FRAME);

    // Every pursuer starts tile-aligned, so all four recompute on the first
    // tick and steer toward the player's tile.
    for pursuer in game.state.pursuers() {
        assert!(!pursuer.path.is_empty(), "{} found no path", pursuer.kind.as_ref());
        assert_eq!(*pursuer.path.last().unwrap(), IVec2::new(13, 18));
        assert!(pursuer.body.direction.is_some());

        let start = pursuer.kind.spawn_tile();
        let delta = pursuer.path[0] - start;
        assert_eq!(delta.x.abs() + delta.y.abs(), 1, "first step must be adjacent");
    }
}

#[test]
fn test_frame_view_reflects_state() {
    let mut game = Game::new().unwrap();
    let frame = render::frame(&game.state);
    assert_eq!(frame.sprites.len(), 5);
    assert!(!frame.paused);
    assert!(frame.path_overlays.is_empty());
    assert_eq!(frame.pellets.len(), 274);

    let pursuer_colors: HashSet<_> = frame
        .sprites
        .iter()
        .filter(|sprite| sprite.kind == EntityKind::Pursuer)
        .map(|sprite| sprite.color)
        .collect();
    assert_eq!(pursuer_colors.len(), 4, "pursuer colors should be unique");
    drop(frame);

    // Overlays appear only while paused, and only for non-empty paths.
    park_player_at(&mut game, IVec2::new(13, 18));
    game.tick(FRAME);
    game.push_command(GameCommand::TogglePause);
    game.tick(FRAME);

    let frame = render::frame(&game.state);
    assert!(frame.paused);
    assert_eq!(frame.path_overlays.len(), 4);
}
