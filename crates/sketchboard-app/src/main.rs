//! Main application entry point.

use clap::{Parser, Subcommand};
use sketchboard_app::replay::{load_script, publish, replay};
use sketchboard_app::{AppConfig, AppResult, AuthoringView, DEFAULT_SOURCE, GalleryView};
use sketchboard_core::storage;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "sketchboard", about = "Headless Sketchboard drawing surface")]
struct Cli {
    /// Font file used to draw text shapes instead of the bundled face.
    #[arg(long, global = true, env = "SKETCHBOARD_FONT")]
    font: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render every stored drawing to its own PNG.
    Gallery {
        /// Collection service URL or JSON file.
        #[arg(long, env = "SKETCHBOARD_SOURCE", default_value = DEFAULT_SOURCE)]
        source: String,
        /// Output directory.
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 500)]
        width: u32,
        #[arg(long, default_value_t = 500)]
        height: u32,
    },
    /// Feed an event script through the authoring view and save the canvas.
    Replay {
        /// JSON array of input events.
        #[arg(long)]
        events: PathBuf,
        /// Output PNG.
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 800)]
        width: u32,
        #[arg(long, default_value_t = 600)]
        height: u32,
        /// Append committed shapes to this collection (URL or JSON file).
        #[arg(long)]
        publish: Option<String>,
    },
}

async fn run(cli: Cli) -> AppResult<()> {
    let mut config = AppConfig {
        font_path: cli.font,
        ..AppConfig::default()
    };

    match cli.command {
        Command::Gallery {
            source,
            out,
            width,
            height,
        } => {
            config.source = source;
            config.thumbnail_width = width;
            config.thumbnail_height = height;

            let store = storage::open(&config.source)?;
            let gallery = GalleryView::mount(store.as_ref()).await;
            let entries = gallery.export(&config, &out)?;

            for entry in &entries {
                println!("Drawing Type: {}", entry.kind);
                for (label, value) in &entry.details {
                    println!("  {}: {}", label, value);
                }
                println!("  -> {}", entry.path.display());
            }
            log::info!("Exported {} drawings to {}", entries.len(), out.display());
        }
        Command::Replay {
            events,
            out,
            width,
            height,
            publish: target,
        } => {
            config.canvas_width = width;
            config.canvas_height = height;

            let script = load_script(&events)?;
            let mut view = AuthoringView::new(config.canvas_surface()?, config.tool_style.clone());
            let committed = replay(&mut view, &script);
            view.surface().save_png(&out)?;
            println!("Wrote {} ({} shapes)", out.display(), view.collection().len());

            if let Some(target) = target {
                let sink = storage::open(&target)?;
                let ids = publish(sink.as_ref(), view.collection(), &committed).await?;
                println!("Published {} shapes to {}", ids.len(), target);
            }
        }
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::init();
    log::info!("Starting Sketchboard");

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("sketchboard: {}", e);
            ExitCode::FAILURE
        }
    }
}
