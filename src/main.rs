use anyhow::Context;
use clap::{Parser, Subcommand};
use clan_recruiter::{
    models::{AccountType, Applicant, Application, ApplicationType},
    review::{self, Decision, Reviewer, Routing},
    scoring::PointsCalculator,
    utils, HiscoresClient, PointsTable, Settings,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(name = "clan-recruiter")]
#[clap(about = "Score clan applicants from their Old School hiscores", long_about = None)]
struct Cli {
    /// Settings file to load instead of config/default + config/local
    #[clap(long, global = true)]
    config: Option<PathBuf>,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up clan points for one or more players
    Points {
        /// Exact OSRS names
        #[clap(required = true)]
        players: Vec<String>,

        /// normal, ironman, hcim, uim, gim, ugim
        #[clap(short, long, default_value = "normal")]
        account_type: String,
    },

    /// Show the raw hiscore tail rows next to the boss they map to
    KcDebug {
        player: String,

        #[clap(short, long, default_value = "normal")]
        account_type: String,
    },

    /// Submit an application and print the review summary
    Apply {
        /// OSRS name
        #[clap(short, long)]
        player: String,

        #[clap(short, long)]
        account_type: String,

        /// visitor or member
        #[clap(long, default_value = "member")]
        application_type: String,

        #[clap(long, default_value = "")]
        fire_cape: String,

        #[clap(long, default_value = "")]
        infernal_cape: String,

        /// Alts separated by commas, pipes, semicolons or newlines
        #[clap(long)]
        alts: Option<String>,

        /// Platform id of the applicant
        #[clap(long, default_value = "0")]
        applicant_id: u64,

        /// Platform display tag of the applicant
        #[clap(long, default_value = "cli")]
        applicant_tag: String,
    },

    /// Record a reviewer decision on an application
    Decide {
        /// accept-member, accept-visitor or decline
        decision: String,

        /// OSRS name on the application
        #[clap(long)]
        applicant_name: String,

        /// Footer currently on the review summary
        #[clap(long, default_value = "")]
        footer: String,

        #[clap(long, default_value = "0")]
        reviewer_id: u64,

        #[clap(long, default_value = "cli")]
        reviewer_tag: String,
    },

    /// Compose a display name from a main name and alts
    Nickname {
        main: String,

        #[clap(long, default_value = "")]
        alts: String,

        #[clap(long)]
        limit: Option<usize>,
    },

    /// List accepted account types
    AccountTypes,
}

fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    let settings = Settings::load(path).context("Failed to load settings")?;
    settings.validate().map_err(|e| anyhow::anyhow!(e))?;
    Ok(settings)
}

fn build_calculator(settings: &Settings) -> anyhow::Result<PointsCalculator> {
    let points_table = Arc::new(PointsTable::from_file(&settings.points.table_path)?);
    let client = HiscoresClient::new(settings.hiscore_client_config())?;
    Ok(PointsCalculator::new(Arc::new(client), points_table))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_deref())?;

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.app.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("{} v{}", settings.app.name, settings.app.version);

    match cli.command {
        Commands::Points { players, account_type } => {
            let account_type = match PointsCalculator::resolve_account_type(&account_type) {
                Ok(account_type) => account_type,
                Err(e) => {
                    println!("{}", review::failure_message(&e));
                    return Ok(());
                }
            };

            let calculator = build_calculator(&settings)?;
            let results = calculator.lookup_many(&players, account_type).await;

            for (player, result) in players.iter().zip(results) {
                if let Err(e) = &result {
                    warn!("Lookup for {} failed: {}", player, e);
                }
                let response = review::points_response(result, settings.review.page_budget);
                println!("\n{}", response.render());
            }
        }

        Commands::KcDebug { player, account_type } => {
            let account_type = AccountType::normalize(&account_type).unwrap_or_default();
            let calculator = build_calculator(&settings)?;

            match calculator.debug_tail(&player, account_type).await {
                Ok(tail) if tail.is_empty() => {
                    println!("No rows returned (user not found?).");
                }
                Ok(tail) => {
                    let lines: Vec<String> = tail.iter().map(|row| row.render()).collect();
                    let text = format!("Tail mapping (index_lite):\n{}", lines.join("\n"));
                    let chunks = review::chunk_text(&text, settings.review.debug_chunk_size);
                    let count = chunks.len();
                    for (index, chunk) in chunks.iter().enumerate() {
                        println!("{}", chunk);
                        if count > 1 {
                            println!("(part {}/{})", index + 1, count);
                        }
                    }
                }
                Err(e) => {
                    error!("Debug lookup failed: {}", e);
                    println!("{}", review::failure_message(&e));
                }
            }
        }

        Commands::Apply {
            player,
            account_type,
            application_type,
            fire_cape,
            infernal_cape,
            alts,
            applicant_id,
            applicant_tag,
        } => {
            let account_type = match PointsCalculator::resolve_account_type(&account_type) {
                Ok(account_type) => account_type,
                Err(e) => {
                    println!("{}", review::failure_message(&e));
                    return Ok(());
                }
            };
            let application_type = ApplicationType::from_str(&application_type)
                .ok_or_else(|| anyhow::anyhow!("Invalid application type: {}", application_type))?;

            let application = Application::new(
                Applicant { id: applicant_id, tag: applicant_tag },
                &player,
                account_type,
                application_type,
            )
            .with_capes(&fire_cape, &infernal_cape)
            .with_alts(alts.as_deref().unwrap_or(""));

            let calculator = build_calculator(&settings)?;
            match review::submit_application(&calculator, &application, &settings.review).await {
                Ok(submission) => {
                    match submission.routing {
                        Routing::StaffChannel(id) => println!("-> staff channel {}", id),
                        Routing::ApplicantCopy => println!("-> applicant copy"),
                    }
                    println!("{}", submission.summary.render());
                    println!("\nNickname: {}", submission.nickname);
                    println!("{}", submission.acknowledgement(true));
                }
                Err(e) => {
                    error!("Application for {} failed: {}", application.player_name, e);
                    println!("{}", review::failure_message(&e));
                }
            }
        }

        Commands::Decide {
            decision,
            applicant_name,
            footer,
            reviewer_id,
            reviewer_tag,
        } => {
            let decision = Decision::from_str(&decision)
                .ok_or_else(|| anyhow::anyhow!("Invalid decision: {}", decision))?;
            let reviewer = Reviewer { id: reviewer_id, tag: reviewer_tag };

            let outcome = review::finalize_decision(
                decision,
                &footer,
                &reviewer,
                &applicant_name,
                &settings.review,
            );
            println!("Footer: {}", outcome.footer);
            match outcome.role_id {
                Some(role_id) => println!("Grant role: {}", role_id),
                None => println!("Grant role: none"),
            }
            println!("\n{}", outcome.applicant_notice);
        }

        Commands::Nickname { main, alts, limit } => {
            let limit = limit.unwrap_or(settings.review.nickname_limit);
            println!("{}", utils::build_nickname(&main, &alts, limit));
        }

        Commands::AccountTypes => {
            for account_type in AccountType::ALL {
                println!(
                    "{:<24} {:<24} {}",
                    account_type.as_str(),
                    account_type.label(),
                    account_type.description()
                );
            }
        }
    }

    Ok(())
}
