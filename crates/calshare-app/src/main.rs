use std::path::PathBuf;

use anyhow::Context;
use calshare_app::invite::{AttendeeSpec, InviteRequest};
use calshare_app::report::EventListing;
use calshare_app::store::{import_calendar_file, read_existing_calendar};
use calshare_core::config::load_config;
use calshare_ical::RandomUidGenerator;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "calshare")]
#[command(about = "Share calendar events as iCalendar invite files", long_about = None)]
struct Cli {
    /// Directory invite files are written to, overriding the configured one
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a one-event invite file
    Share {
        /// Event title
        #[arg(long)]
        summary: String,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        location: Option<String>,

        /// Start time in epoch milliseconds
        #[arg(long)]
        start: i64,

        /// End time in epoch milliseconds
        #[arg(long)]
        end: Option<i64>,

        /// Time zone id the times were observed in
        #[arg(long, default_value = "UTC")]
        zone: String,

        /// Organizer email address
        #[arg(long)]
        organizer: String,

        #[arg(long)]
        organizer_name: Option<String>,

        /// Invitee as `[Name <]email[>][;STATUS]`, repeatable
        #[arg(long = "attendee")]
        attendees: Vec<AttendeeSpec>,
    },
    /// Print the events in an invite file
    Show { path: PathBuf },
    /// Validate an invite file and copy it into the output directory
    Import { path: PathBuf },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let env_filter = EnvFilter::try_from_default_env().ok();
    let from_env = env_filter.is_some();
    let (filter_layer, filter_handle) =
        reload::Layer::new(env_filter.unwrap_or_else(|| EnvFilter::new("info")));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();

    let config = load_config()?;

    if !from_env {
        if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
            if let Err(e) = filter_handle.modify(|current| *current = filter) {
                tracing::warn!(error = %e, "Failed to update log filter from config");
            }
        } else {
            tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping info");
        }
    }

    let output_dir = cli.output_dir.unwrap_or_else(|| config.share.output_dir());

    match cli.command {
        Command::Share {
            summary,
            description,
            location,
            start,
            end,
            zone,
            organizer,
            organizer_name,
            attendees,
        } => {
            let request = InviteRequest {
                summary,
                description,
                location,
                start_millis: start,
                end_millis: end,
                zone,
                organizer_name,
                organizer_email: organizer,
                attendees,
            };
            let uids = RandomUidGenerator::new(config.calendar.uid_domain.as_str());
            let path = request
                .share(&config, &uids, &output_dir)
                .with_context(|| format!("sharing {:?}", request.summary))?;
            println!("{}", path.display());
        }
        Command::Show { path } => {
            let calendar = read_existing_calendar(&path)?;
            print!("{}", EventListing(&calendar));
        }
        Command::Import { path } => {
            let target = import_calendar_file(
                &path,
                Some(config.share.file_suffix.as_str()),
                &output_dir,
            )?;
            println!("{}", target.display());
        }
    }

    Ok(())
}
