//! MT3 - 3D math exercise host
//!
//! Runs one exercise headless for a number of frames and prints the draw
//! commands of the last frame.
//!
//! Usage: `mt3 [exercise] [frames] [held keys]`, for example `mt3 pipeline 60 wd`.

use std::process::ExitCode;

use mt3::{
    AppConfig, Camera, Exercise, ExerciseKind, FrameInput, InputMapper, RenderSystem,
    SimulationSystem,
};
use mt3_math::MathError;
use mt3_present::CommandRecorder;

/// Command line arguments
struct Args {
    exercise: ExerciseKind,
    frames: u32,
    keys: String,
}

impl Args {
    fn parse() -> Result<Self, String> {
        let mut args = std::env::args().skip(1);
        let exercise = match args.next() {
            Some(name) => name.parse::<ExerciseKind>().map_err(|e| e.to_string())?,
            None => ExerciseKind::Pipeline,
        };
        let frames = match args.next() {
            Some(count) => count
                .parse::<u32>()
                .map_err(|_| format!("Frame count must be a whole number, got '{}'", count))?,
            None => 1,
        };
        let keys = args.next().unwrap_or_default();
        Ok(Self { exercise, frames, keys })
    }
}

/// Main application state
struct App {
    camera: Camera,
    exercise: Box<dyn Exercise>,
    input: FrameInput,
    simulation: SimulationSystem,
    render: RenderSystem,
    recorder: CommandRecorder,
}

impl App {
    fn new(config: &AppConfig, exercise: ExerciseKind, input: FrameInput) -> Self {
        Self {
            camera: Camera::from_config(&config.camera),
            exercise: exercise.build(),
            input,
            simulation: SimulationSystem::new(),
            render: RenderSystem::new(config),
            recorder: CommandRecorder::new(),
        }
    }

    /// Simulate and draw `frames` frames; the recorder keeps the last one
    fn run(&mut self, frames: u32) -> Result<(), MathError> {
        for _ in 0..frames {
            self.simulation.update(&mut self.camera, self.exercise.as_mut(), &self.input);
            self.recorder.clear();
            self.render.render(&self.camera, self.exercise.as_ref(), &mut self.recorder)?;
            log::debug!(
                "frame {}: {} commands, {} lines",
                self.simulation.frame(),
                self.recorder.commands().len(),
                self.recorder.line_count()
            );
        }
        Ok(())
    }
}

fn main() -> ExitCode {
    let loaded = AppConfig::load();
    let log_level = loaded
        .as_ref()
        .map(|config| config.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let args = match Args::parse() {
        Ok(args) => args,
        Err(message) => {
            log::error!("{}", message);
            eprintln!("usage: mt3 [vector|matrix|pipeline|collision|bezier] [frames] [held keys]");
            return ExitCode::from(2);
        }
    };

    let actions = match InputMapper::map_held(&args.keys) {
        Ok(actions) => actions,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::from(2);
        }
    };
    let input = FrameInput::from_actions(&actions, &config.camera);

    log::info!(
        "Starting {} ('{}' exercise, {} frames, {}x{})",
        config.window.title,
        args.exercise,
        args.frames,
        config.window.width,
        config.window.height
    );

    let mut app = App::new(&config, args.exercise, input);
    if let Err(e) = app.run(args.frames) {
        log::error!("Frame {} aborted: {}", app.simulation.frame(), e);
        return ExitCode::FAILURE;
    }

    for command in app.recorder.commands() {
        println!("{}", command);
    }
    ExitCode::SUCCESS
}
