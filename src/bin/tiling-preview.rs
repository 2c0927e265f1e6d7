use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use serde::Serialize;
use tiling_core::common::config::{LayoutConfig, config_file};
use tiling_core::common::log;
use tiling_core::layout_engine::{EngineContext, LayoutCommand, LayoutEngine, LayoutStrategy};
use tiling_core::model::{Rect, Surface, SurfaceKey, Tile, VirtualDesktop, WindowId};
use tracing::{info, warn};

/// Computes the arrangement a surface would get and prints it as JSON.
#[derive(Parser)]
#[command(name = "tiling-preview")]
struct Cli {
    /// Configuration file; defaults to the user configuration, if present.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, default_value = "eDP-1")]
    output: String,

    #[arg(long, default_value = "")]
    activity: String,

    /// Virtual desktop name, also used as its id.
    #[arg(long, default_value = "Desktop 1")]
    desktop: String,

    #[arg(long, default_value_t = 3)]
    windows: u64,

    #[arg(long, default_value_t = 1920)]
    width: i32,

    #[arg(long, default_value_t = 1080)]
    height: i32,

    /// Commands to run before arranging, e.g. `rotate`, `dwm-right` or
    /// `set-layout:monocle`. Resize commands act on the first window.
    #[arg(long = "command")]
    commands: Vec<String>,
}

#[derive(Serialize)]
struct Preview {
    surface: SurfaceKey,
    layout: String,
    description: String,
    notifications: Vec<String>,
    tiled: usize,
    windows: Vec<Tile>,
}

#[derive(Default)]
struct CollectingContext {
    notifications: Vec<String>,
}

impl EngineContext for CollectingContext {
    fn show_notification(&mut self, text: &str) {
        info!(text, "notification");
        self.notifications.push(text.to_string());
    }
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<LayoutConfig> {
    let mut config = match path {
        Some(path) => LayoutConfig::read(&path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => match config_file().filter(|p| p.exists()) {
            Some(path) => LayoutConfig::read(&path)
                .with_context(|| format!("reading {}", path.display()))?,
            None => LayoutConfig::default(),
        },
    };

    let issues = config.validate();
    if !issues.is_empty() {
        for issue in &issues {
            warn!("{issue}");
        }
        let fixes = config.auto_fix_values();
        info!(fixes, "applied configuration fixes");
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let opt: Cli = Parser::parse();
    log::init_logging();

    if opt.width < 0 || opt.height < 0 {
        bail!("working area must not be negative, got {}x{}", opt.width, opt.height);
    }

    let config = load_config(opt.config)?;
    let surface = Surface::new(
        opt.output,
        opt.activity,
        VirtualDesktop::new(opt.desktop.clone(), opt.desktop),
    );
    let area = Rect::new(0, 0, opt.width, opt.height);
    let mut tiles: Vec<Tile> = (1..=opt.windows).map(|id| Tile::new(WindowId::new(id))).collect();

    let mut engine = LayoutEngine::new(config);
    let mut ctx = CollectingContext::default();
    engine.arrange(&surface, area, &mut tiles);

    let focused = tiles.first().map(|t| t.id);
    for raw in &opt.commands {
        let command = LayoutCommand::parse(raw)?;
        if !engine.handle_command(&mut ctx, &surface, area, &tiles, focused, command) {
            warn!(%command, "command had no effect");
        }
        engine.arrange(&surface, area, &mut tiles);
    }

    let tiled = engine.arrange(&surface, area, &mut tiles);
    let key = surface.layout_key(engine.config());
    let layout = engine.current_layout(&surface);
    let preview = Preview {
        surface: key,
        layout: layout.id().to_string(),
        description: layout.description(),
        notifications: ctx.notifications,
        tiled,
        windows: tiles,
    };
    println!("{}", serde_json::to_string_pretty(&preview)?);
    Ok(())
}
