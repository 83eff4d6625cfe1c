use clap::Parser;
use moodlog::application::{
    init::init, AnalyticsService, ConfigService, Durability, LogMoodService, RecentLimit,
};
use moodlog::cli::{format_entry_list, format_summary, format_weekly, Cli, Commands};
use moodlog::domain::Ratings;
use moodlog::error::MoodlogError;
use moodlog::infrastructure::FileSystemRepository;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "moodlog=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), MoodlogError> {
    match cli.command {
        Some(Commands::Init { path }) => {
            init(&path)?;
            println!("Initialized moodlog journal at {}", path.display());
            Ok(())
        }
        Some(Commands::Log {
            mood,
            energy,
            stress,
            notes,
        }) => {
            let repo = FileSystemRepository::discover()?;
            let service = LogMoodService::new(repo);
            let ratings = Ratings {
                mood,
                energy,
                stress,
            };

            let logged = service.execute(ratings, &notes)?;
            println!(
                "Logged mood {}/10, energy {}/10, stress {}/10 for {}",
                logged.entry.mood,
                logged.entry.energy,
                logged.entry.stress,
                logged.entry.date.format("%d-%m-%Y")
            );
            if logged.durability == Durability::SessionOnly {
                eprintln!("Warning: entry could not be saved to disk");
            }
            Ok(())
        }
        Some(Commands::List { limit, all }) => {
            let repo = FileSystemRepository::discover()?;
            let service = AnalyticsService::new(repo);
            let limit = match (limit, all) {
                (_, true) => RecentLimit::All,
                (Some(n), false) => RecentLimit::Count(n),
                (None, false) => RecentLimit::Configured,
            };

            let entries = service.recent(limit)?;
            println!("{}", format_entry_list(&entries).trim_end());
            Ok(())
        }
        Some(Commands::Stats { json }) => {
            let repo = FileSystemRepository::discover()?;
            let summary = AnalyticsService::new(repo).summary()?;

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print!("{}", format_summary(&summary));
            }
            Ok(())
        }
        Some(Commands::Week { json }) => {
            let repo = FileSystemRepository::discover()?;
            let series = AnalyticsService::new(repo).weekly()?;

            if json {
                println!("{}", serde_json::to_string_pretty(&series)?);
            } else {
                print!("{}", format_weekly(&series));
            }
            Ok(())
        }
        Some(Commands::Insight) => {
            let repo = FileSystemRepository::discover()?;
            let insight = AnalyticsService::new(repo).insight()?;
            println!("{}", insight);
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("recent_limit = {}", config.recent_limit);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: moodlog config [--list | <key> [<value>]]");
                println!("Valid keys: recent_limit, created");
                Ok(())
            }
        }
        None => {
            println!("moodlog - Terminal mood journal");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
