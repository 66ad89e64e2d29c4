use analyzer::{AnalyzerConfig, TeamBalanceAnalyzer};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use storage::{
    HackathonCatalog, JsonStore, Profile,
    models::{Hackathon, HackathonStatus, Team},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "hackmatch-analyze")]
#[command(about = "HackMatch team balance analyzer", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, env = "DATA_DIR", default_value = "./data", global = true)]
    data_dir: PathBuf,

    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the hackathon catalog
    Hackathons {
        #[arg(long)]
        status: Option<HackathonStatus>,
    },
    /// Analyze a team stored as a JSON file
    File {
        path: PathBuf,

        #[arg(long)]
        hackathon: i64,
    },
    /// Analyze a team from the local profile
    Team { team_id: i64 },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("analyze={},analyzer={},storage={}", log_level, log_level, log_level)
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let catalog = HackathonCatalog::builtin();

    match cli.command {
        Commands::Hackathons { status } => {
            list_hackathons(&catalog, status);
        }
        Commands::File { path, hackathon } => {
            let team = load_team_file(&path).await?;
            let hackathon = find_hackathon(&catalog, hackathon)?;
            analyze_and_print(&team, hackathon).await?;
        }
        Commands::Team { team_id } => {
            let profile = Profile::load(JsonStore::new(&cli.data_dir)).await;
            let team = profile.team(team_id).ok_or_else(|| {
                format!(
                    "Team {} not found in {}",
                    team_id,
                    cli.data_dir.display()
                )
            })?;
            let hackathon = find_hackathon(&catalog, team.hackathon_id)?;
            analyze_and_print(team, hackathon).await?;
        }
    }

    Ok(())
}

fn list_hackathons(catalog: &HackathonCatalog, status: Option<HackathonStatus>) {
    let hackathons: Vec<&Hackathon> = match status {
        Some(status) => catalog.by_status(status),
        None => catalog.all().iter().collect(),
    };

    for h in hackathons {
        println!(
            "{:>3}  {:<9} {}  [{}]",
            h.id,
            h.status,
            h.title,
            h.required_skills.join(", ")
        );
    }
}

fn find_hackathon(catalog: &HackathonCatalog, id: i64) -> Result<&Hackathon, String> {
    catalog.get(id).ok_or_else(|| {
        format!(
            "Unknown hackathon {}. Use the `hackathons` command to see available ids.",
            id
        )
    })
}

async fn load_team_file(path: &PathBuf) -> Result<Team, Box<dyn std::error::Error>> {
    tracing::info!("Loading team from: {}", path.display());

    let json_content = tokio::fs::read_to_string(path).await?;
    let team: Team = serde_json::from_str(&json_content)?;

    if team.members.is_empty() {
        return Err(format!("Team '{}' has no members", team.name).into());
    }

    Ok(team)
}

async fn analyze_and_print(
    team: &Team,
    hackathon: &Hackathon,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = AnalyzerConfig::from_env();
    let analyzer = TeamBalanceAnalyzer::from_config(&config)?;

    tracing::info!(
        "Analyzing team \"{}\" ({} members) for {} [{} mode]",
        team.name,
        team.members.len(),
        hackathon.title,
        analyzer.mode()
    );

    let analysis = analyzer.analyze(team, hackathon).await?;
    println!("{}", serde_json::to_string_pretty(&analysis)?);

    Ok(())
}
