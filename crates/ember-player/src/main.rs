//! Ember Player - headless player binary
//!
//! Runs a level with the player controller at a fixed frame rate, optionally
//! driven by a scripted input timeline.
//!
//! Usage:
//!   ember-player <level.toml> [--script <script.toml>] [--seconds N] [--fps N]

use anyhow::{bail, Context, Result};
use clap::Parser;
use ember_physics::PhysicsBackend;
use ember_player::{InputScript, LevelFile, PlayerSession, ScriptPlayer};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ember-player")]
#[command(about = "Ember player - run a level headless with the player controller")]
struct Args {
    /// Path to level file
    level: PathBuf,

    /// Scripted input timeline
    #[arg(long)]
    script: Option<PathBuf>,

    /// Game seconds to simulate
    #[arg(long, default_value_t = 5.0)]
    seconds: f64,

    /// Rendered frames per second
    #[arg(long, default_value_t = 60.0)]
    fps: f64,
}

fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    let args = Args::parse();

    if !(args.fps > 0.0 && args.fps.is_finite()) {
        bail!("--fps must be a positive number, got {}", args.fps);
    }
    if !(args.seconds >= 0.0 && args.seconds.is_finite()) {
        bail!("--seconds must be a non-negative number, got {}", args.seconds);
    }

    let level = LevelFile::load(&args.level)
        .with_context(|| format!("Failed to load level {}", args.level.display()))?;

    let mut script = match &args.script {
        Some(path) => {
            let script = InputScript::load(path)
                .with_context(|| format!("Failed to load input script {}", path.display()))?;
            log::info!("input script: {} steps over {:.2}s", script.step.len(), script.duration());
            Some(ScriptPlayer::new(script))
        }
        None => None,
    };

    let mut session = PlayerSession::from_level(&level).context("Failed to build session")?;

    let frame_time = 1.0 / args.fps;
    let mut frames = 0u64;
    while session.now() < args.seconds {
        match script.as_mut() {
            Some(player) => session.tick_scripted(player, frame_time)?,
            None => session.tick(frame_time)?,
        }
        frames += 1;

        for trigger in session.controller.animator_mut().take_triggers() {
            log::info!("[{:7.3}s] trigger {}", session.now(), trigger.name());
        }
    }
    session.shutdown()?;

    let body = session.controller.body();
    let position = session.physics.body_position(body).unwrap_or_default();
    let velocity = session.physics.body_velocity(body).unwrap_or_default();
    let combo = session
        .controller
        .combo()
        .current()
        .map(|step| step.index().to_string())
        .unwrap_or_else(|| "-".into());

    println!("Simulated {:.2}s in {} frames", session.now(), frames);
    println!("  position  ({:.3}, {:.3})", position.x, position.y);
    println!("  velocity  ({:.3}, {:.3})", velocity.x, velocity.y);
    println!("  grounded  {}", session.controller.is_grounded(&session.physics));
    println!("  combo     {}", combo);
    println!("  blocking  {}", session.controller.is_blocking());
    println!(
        "  facing    {}",
        if session.controller.sprite().flip_x { "left" } else { "right" }
    );

    Ok(())
}
