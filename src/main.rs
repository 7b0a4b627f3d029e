use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use handsfree::{Engine, Session, Tmux, parse_file};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Exit status used when the presenter interrupts the run.
const INTERRUPTED: i32 = 130;

#[derive(Parser, Debug)]
#[command(
    name = "handsfree",
    about = "Run a demo script against a tmux session",
    version
)]
struct Args {
    /// Path to the script file
    #[arg(short, long)]
    script: PathBuf,

    /// Name of the tmux session to drive
    #[arg(short = 't', long)]
    session: String,

    /// Run every step without waiting for Enter
    #[arg(short, long)]
    auto_advance: bool,

    /// Nominal delay between typed characters, in milliseconds
    #[arg(short, long, value_name = "MS")]
    delay: Option<u64>,

    /// Create the session (detached) if it does not exist yet
    #[arg(long)]
    create: bool,

    /// Do not check the installed tmux version before starting
    #[arg(long)]
    skip_version_check: bool,

    /// More log output (-v for debug, -vv for trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let commands = parse_file(&args.script)
        .with_context(|| format!("Failed to parse script file: {}", args.script.display()))?;

    let tmux = Tmux::new();
    if !args.skip_version_check {
        if let Err(err) = tmux.check_version().await {
            warn!("{err}");
        }
    }
    if args.create && !tmux.has_session(&args.session).await? {
        tmux.new_session(&args.session)
            .await
            .with_context(|| format!("Failed to create session {:?}", args.session))?;
    }

    let mut session = Session::new(&args.session).with_auto_advance(args.auto_advance);
    if let Some(delay) = args.delay {
        session = session.with_teletype_delay(delay);
    }

    info!(session = %args.session, steps = commands.len(), "starting script");
    let mut engine = Engine::new(session);

    // Dropping the engine future on Ctrl-C unwinds any auto-advance scope
    // before the process exits.
    tokio::select! {
        result = engine.execute(commands) => result.context("Failed to execute script"),
        _ = tokio::signal::ctrl_c() => {
            warn!("interrupted");
            std::process::exit(INTERRUPTED);
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}
