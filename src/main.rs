//! Seasonal Catcher native entry point
//!
//! There is no window on native: the host runs the game on autopilot for a
//! while, logs what happens, and optionally draws the last frame offscreen.

use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

use seasonal_catcher::consts::{FIELD_HEIGHT, FIELD_WIDTH, MAX_SUBSTEPS, SIM_DT};
use seasonal_catcher::renderer::{CONTROLS_HELP, HudView, RenderState, build_frame};
use seasonal_catcher::settings::Overrides;
use seasonal_catcher::sim::{Flow, GameEvent, InputEvent, InputState};
use seasonal_catcher::{QualityPreset, Settings, World};

#[derive(Parser)]
#[command(name = "seasonal-catcher")]
#[command(about = "Headless autopilot demo of the Seasonal Catcher game", long_about = None)]
#[command(version)]
struct Cli {
    /// Quality preset (low, medium, high)
    #[arg(short, long, value_parser = parse_quality)]
    quality: Option<QualityPreset>,

    /// Fixed run seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Demo length in seconds
    #[arg(long)]
    demo_seconds: Option<f32>,

    /// Stop after this many game overs
    #[arg(long)]
    demo_runs: Option<u32>,

    /// Skip the offscreen render of the final frame
    #[arg(long)]
    no_render: bool,

    /// Write the effective settings back to the settings file
    #[arg(long)]
    save_settings: bool,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            quality: self.quality,
            seed: self.seed,
            demo_seconds: self.demo_seconds,
            demo_runs: self.demo_runs,
            no_render: self.no_render,
        }
    }
}

fn parse_quality(s: &str) -> Result<QualityPreset, String> {
    QualityPreset::from_str(s).ok_or_else(|| format!("unknown quality preset '{s}'"))
}

/// Game instance plus the frame-to-tick plumbing
struct Host {
    world: World,
    input: InputState,
    accumulator: f32,
    runs: u32,
    max_runs: u32,
    best_level: u32,
}

impl Host {
    fn new(settings: &Settings, seed: u64) -> Self {
        let mut world = World::new(seed, settings.snowflake_count());
        world.ambience.flicker = settings.effective_fire_flicker();

        let mut input = InputState::new();
        input.set_idle_mode(true);

        Self {
            world,
            input,
            accumulator: 0.0,
            runs: 1,
            max_runs: settings.demo_runs.max(1),
            best_level: 1,
        }
    }

    fn handle(&mut self, event: InputEvent) -> Flow {
        self.input.handle(&mut self.world.game, event)
    }

    /// Advance by one frame's worth of wall time
    fn update(&mut self, dt: f32) {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = self.input.take_tick_input();
            self.world.tick_game(&input, SIM_DT);
            self.world.tick_ambience();
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
    }

    /// Log drained events. A game over restarts the demo, or exits once
    /// the run budget is spent.
    fn report_events(&mut self) -> Flow {
        let mut game_over = false;
        for event in self.world.game.drain_events() {
            match event {
                GameEvent::Caught { label } => log::debug!("Caught {label}"),
                GameEvent::Hit { lives_left } => log::debug!("Hit! {lives_left} lives left"),
                GameEvent::Missed => log::trace!("Item missed"),
                GameEvent::LevelUp { level } => {
                    self.best_level = self.best_level.max(level);
                }
                GameEvent::GameOver { score, level } => {
                    log::info!("Run {} over: score {score}, level {level}", self.runs);
                    game_over = true;
                }
                GameEvent::Paused | GameEvent::Resumed => log::debug!("{event:?}"),
                GameEvent::Reset => self.runs += 1,
            }
        }

        if !game_over {
            return Flow::Continue;
        }
        if self.runs >= self.max_runs {
            self.handle(InputEvent::Exit)
        } else {
            self.handle(InputEvent::PauseToggle)
        }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn render_final_frame(world: &World, settings: &Settings) {
    let vertices = build_frame(world, settings.circle_segments());
    match pollster::block_on(RenderState::headless(FIELD_WIDTH as u32, FIELD_HEIGHT as u32)) {
        Ok(mut render_state) => {
            render_state.render(&vertices);
            let (width, height) = render_state.size;
            log::info!(
                "Rendered frame {} offscreen at {}x{} ({} vertices)",
                render_state.frames,
                width,
                height,
                render_state.vertex_count
            );
        }
        Err(e) => log::warn!("Offscreen render skipped: {e}"),
    }
}

fn main() {
    let cli = Cli::parse();
    env_logger::init();
    log::info!("Seasonal Catcher (native) starting...");

    for line in CONTROLS_HELP {
        log::info!("{line}");
    }

    let mut settings = Settings::load();
    settings.apply_overrides(&cli.overrides());
    if cli.save_settings {
        if let Err(e) = settings.save_to(&Settings::default_path()) {
            log::warn!("{e}");
        }
    }

    let seed = settings.seed.unwrap_or_else(clock_seed);
    log::info!(
        "Game initialized with seed: {} (quality {})",
        seed,
        settings.quality.as_str()
    );

    let mut host = Host::new(&settings, seed);
    let frames = (settings.demo_seconds.max(0.0) / SIM_DT) as u64;
    for _ in 0..frames {
        host.update(SIM_DT);
        if host.report_events() == Flow::Exit {
            break;
        }
    }

    let hud = HudView::from_state(&host.world.game);
    log::info!(
        "Demo (seed {}) finished after {} run(s): {} | {} | {} | best level {}",
        host.world.game.seed,
        host.runs,
        hud.score,
        hud.level,
        hud.season,
        host.best_level
    );
    for line in hud.all_lines() {
        log::debug!("HUD: {}", line.text);
    }

    if settings.offscreen_render {
        render_final_frame(&host.world, &settings);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn end_run(host: &mut Host) -> Flow {
        for _ in 0..3 {
            host.world.game.lose_life();
        }
        host.report_events()
    }

    #[test]
    fn test_game_over_restarts_until_run_budget_spent() {
        let settings = Settings {
            demo_runs: 2,
            ..Settings::default()
        };
        let mut host = Host::new(&settings, 7);

        assert_eq!(end_run(&mut host), Flow::Continue);
        host.update(SIM_DT);
        assert_eq!(host.report_events(), Flow::Continue);
        assert_eq!(host.runs, 2);
        assert!(!host.world.game.is_game_over());

        assert_eq!(end_run(&mut host), Flow::Exit);
    }

    #[test]
    fn test_cli_overrides_settings() {
        let cli = Cli::parse_from(["seasonal-catcher", "--quality", "low", "--no-render"]);
        let mut settings = Settings::default();
        settings.apply_overrides(&cli.overrides());
        assert_eq!(settings.quality, QualityPreset::Low);
        assert!(!settings.offscreen_render);
        assert!(Cli::try_parse_from(["seasonal-catcher", "--quality", "ultra"]).is_err());
    }
}
