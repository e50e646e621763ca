//! Headless demo binary: runs the simulation at 60 Hz with scripted input
//! and logs the HUD line once per second. Rendering stays external; this
//! only exercises the engine.

use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

use mazechase::constants::LOOP_TIME;
use mazechase::entity::direction::Direction;
use mazechase::game::Game;
use mazechase::hud;
use mazechase::input::GameCommand;
use mazechase::render;

/// How long the demo runs, in ticks.
const DEMO_TICKS: u32 = 1200;

/// Scripted input: wander a few corridors, with a one-second pause in the
/// middle to exercise the overlay state.
fn scripted_command(tick: u32) -> Option<GameCommand> {
    match tick {
        120 => Some(GameCommand::Move(Direction::Up)),
        300 => Some(GameCommand::Move(Direction::Right)),
        420 => Some(GameCommand::TogglePause),
        480 => Some(GameCommand::TogglePause),
        660 => Some(GameCommand::Move(Direction::Down)),
        840 => Some(GameCommand::Move(Direction::Left)),
        _ => None,
    }
}

fn main() -> Result<()> {
    // Setup tracing
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish()
        .with(ErrorLayer::default());
    tracing::subscriber::set_global_default(subscriber)?;

    let mut game = Game::new()?;

    info!("Starting demo loop ({:.3}ms per tick)", LOOP_TIME.as_secs_f32() * 1000.0);

    let mut last_tick = Instant::now();
    for tick_no in 0..DEMO_TICKS {
        let start = Instant::now();

        if let Some(command) = scripted_command(tick_no) {
            game.push_command(command);
        }

        let dt = last_tick.elapsed().as_secs_f32();
        last_tick = Instant::now();
        game.tick(dt);

        if tick_no % 60 == 0 {
            let frame = render::frame(&game.state);
            info!(
                "{} {} (pellets left: {})",
                hud::format_score(game.state.score),
                hud::format_lives(game.state.player().lives),
                frame.pellets.len() + frame.power_pellets.len(),
            );
        }

        if start.elapsed() < LOOP_TIME {
            let remaining = LOOP_TIME.saturating_sub(start.elapsed());
            if remaining != Duration::ZERO {
                spin_sleep::sleep(remaining);
            }
        }
    }

    info!("Demo finished: {}", hud::format_score(game.state.score));
    Ok(())
}
