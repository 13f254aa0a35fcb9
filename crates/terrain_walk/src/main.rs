//! Headless terrain walk.
//!
//! Generates a world, drops the viewpoint onto it and drives a scripted
//! walk through the simulation with a recording backend. Prints a summary
//! of what the renderer would have received.
//!
//! Script (repeats every 240 frames):
//! - 0..90: walk forward
//! - 90..120: walk forward, turning right
//! - 120: jump
//! - 121..200: walk forward
//! - 200..230: back up, turning left
//! - 230..240: stand still

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use web_time::Instant;

use terrain_core::{
	GravityMode, InputState, RecordingBackend, Simulation, TextureSource, TickOutcome, WorldConfig,
};

const SCRIPT_PERIOD: u64 = 240;

/// Headless walk over a procedurally generated terrain.
#[derive(Parser, Debug)]
#[command(name = "terrain_walk")]
#[command(about = "Generates a terrain and walks a scripted path over it")]
struct Args {
	/// Path to a world configuration TOML file.
	#[arg(short, long)]
	config: Option<PathBuf>,

	/// Terrain seed (default: from config, else time-derived).
	#[arg(short, long)]
	seed: Option<u32>,

	/// Number of frames to simulate.
	#[arg(short, long, default_value_t = 600)]
	frames: u64,

	/// Terrain texture image (default: built-in pattern).
	#[arg(short, long)]
	texture: Option<PathBuf>,

	/// Only apply gravity while moving or airborne.
	#[arg(long)]
	intent_gated: bool,

	/// Pace frames at the configured tick rate instead of running flat out.
	#[arg(long)]
	realtime: bool,

	/// Log filter used when RUST_LOG is unset.
	#[arg(long, default_value = "info")]
	log_level: String,
}

fn main() -> Result<()> {
	let args = Args::parse();

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
	tracing_subscriber::fmt().with_env_filter(filter).init();

	let mut config = match &args.config {
		Some(path) => WorldConfig::load(path)
			.with_context(|| format!("Failed to load config: {}", path.display()))?,
		None => WorldConfig::default(),
	};
	if let Some(seed) = args.seed {
		config.seed = Some(seed);
	}
	if let Some(texture) = &args.texture {
		config.texture = TextureSource::Path(texture.clone());
	}
	if args.intent_gated {
		config.motion = config.motion.with_gravity_mode(GravityMode::IntentGated);
	}
	let resolved = config.resolve().context("Invalid configuration")?;
	println!("Seed: {}", resolved.seed);
	println!(
		"Terrain: {}x{} chunks of {} cells",
		resolved.layout.columns, resolved.layout.rows, resolved.layout.chunk_size
	);

	let start = Instant::now();
	let mut sim = Simulation::new(resolved, RecordingBackend::new()).context("Failed to start simulation")?;
	println!("Generated in {} ms", start.elapsed().as_millis());

	let mut frame = 0;
	let mut airborne_frames = 0;
	while frame < args.frames {
		let input = scripted_input(frame);
		let outcome = if args.realtime {
			match sim.poll(Instant::now(), &input)? {
				Some(outcome) => outcome,
				None => {
					std::thread::sleep(sim.clock().time_until_due(Instant::now()));
					continue;
				}
			}
		} else {
			sim.tick(&input)?
		};

		if outcome == TickOutcome::Quit {
			break;
		}
		if !sim.player().is_grounded() {
			airborne_frames += 1;
		}
		frame += 1;
	}

	let quit = InputState {
		quit: true,
		..Default::default()
	};
	sim.tick(&quit)?;
	tracing::info!(frames = frame, airborne_frames, "walk finished");

	let player = sim.player();
	let metrics = sim.metrics();
	let backend = sim.backend();
	println!("Frames: {} ({} airborne)", backend.frames, airborne_frames);
	println!(
		"Draw calls: {} total, {} per frame",
		backend.total_draws,
		backend.frame_draws.len()
	);
	println!(
		"Final position: ({:.2}, {:.2}, {:.2}) heading {:.1}",
		player.position[0], player.position[1], player.position[2], player.heading_degrees
	);
	println!(
		"Terrain: {} vertices, {} indices, {:.1} MB",
		metrics.terrain_vertices,
		metrics.terrain_indices,
		metrics.terrain_memory_mb()
	);
	println!(
		"Timing: {:.0} us/chunk, {:.1} us/tick",
		metrics.avg_chunk_us(),
		metrics.avg_tick_us()
	);

	Ok(())
}

fn scripted_input(frame: u64) -> InputState {
	let phase = frame % SCRIPT_PERIOD;
	let mut input = InputState::default();
	match phase {
		0..=89 | 121..=199 => input.move_forward = true,
		90..=119 => {
			input.move_forward = true;
			input.move_right = true;
		}
		120 => input.jump = true,
		200..=229 => {
			input.move_back = true;
			input.move_left = true;
		}
		_ => {}
	}
	input
}
