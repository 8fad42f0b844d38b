// crates/cli/src/main.rs
//! migration-view CLI.
//!
//! Terminal front end for the migration planner: create assessments from
//! RVTools exports (with live job progress), browse assessments and
//! discovery sources, and print inventory summaries.

mod render;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use migration_view_api::{
    init_service_info, AssessmentApi, HttpPlannerClient, JobApi, SourceApi, DEFAULT_API_URL,
};
use migration_view_core::{
    filter_assessments, filter_sources, AssessmentQuery, AssessmentSort, JobPoller, ProgressView,
    SortOrder, SourceQuery, SourceSort,
};
use migration_view_types::{JobStatus, SourceStatus, SourceType};

#[derive(Parser)]
#[command(
    name = "migration-view",
    version,
    about = "Plan VMware-to-OpenShift migrations from the terminal"
)]
struct Cli {
    /// Planner API root.
    #[arg(long, env = "MIGRATION_VIEW_API", default_value = DEFAULT_API_URL, global = true)]
    api_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Work with assessments.
    #[command(subcommand)]
    Assessment(AssessmentCommand),
    /// Work with discovery sources.
    #[command(subcommand)]
    Source(SourceCommand),
    /// Print summary tables for one discovery source's inventory.
    Summary {
        /// Discovery source id.
        #[arg(long)]
        source: Uuid,
        /// Named OS slices to show before bucketing the rest into "Other".
        #[arg(long, default_value_t = 5)]
        top: usize,
    },
}

#[derive(Subcommand)]
enum AssessmentCommand {
    /// Upload an RVTools export and wait for the assessment job to finish.
    Create {
        /// Assessment name.
        #[arg(long)]
        name: String,
        /// Path to the RVTools .xlsx export.
        #[arg(long)]
        rvtools: PathBuf,
    },
    /// List assessments.
    List {
        /// Case-insensitive substring match on the name.
        #[arg(long)]
        search: Option<String>,
        /// Filter by source type: rvtools, agent or inventory.
        #[arg(long)]
        source: Option<SourceType>,
        /// Sort key: name, created or source.
        #[arg(long, default_value = "created")]
        sort: AssessmentSort,
        /// Sort order: asc or desc.
        #[arg(long, default_value = "desc")]
        order: SortOrder,
    },
    /// Delete an assessment.
    Delete {
        #[arg(long)]
        id: Uuid,
    },
}

#[derive(Subcommand)]
enum SourceCommand {
    /// List discovery sources.
    List {
        /// Case-insensitive substring match on the name.
        #[arg(long)]
        search: Option<String>,
        /// Filter by status, e.g. up-to-date or gathering-inventory.
        #[arg(long)]
        status: Option<SourceStatus>,
        /// Sort key: name or created.
        #[arg(long, default_value = "created")]
        sort: SourceSort,
        /// Sort order: asc or desc.
        #[arg(long, default_value = "desc")]
        order: SortOrder,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = Arc::new(
        HttpPlannerClient::with_base_url(&cli.api_url)
            .with_context(|| format!("building client for {}", cli.api_url))?,
    );

    // Best-effort: summaries render "unknown" when this never succeeds.
    if let Err(e) = init_service_info(&client).await {
        tracing::debug!(error = %e, "service info unavailable");
    }

    match cli.command {
        Command::Assessment(AssessmentCommand::Create { name, rvtools }) => {
            create_assessment(client, name, rvtools).await
        }
        Command::Assessment(AssessmentCommand::List {
            search,
            source,
            sort,
            order,
        }) => {
            let assessments = client.list_assessments().await?;
            let query = AssessmentQuery {
                search,
                source,
                sort,
                order,
            };
            print!("{}", render::assessment_table(&filter_assessments(&assessments, &query)));
            Ok(())
        }
        Command::Assessment(AssessmentCommand::Delete { id }) => {
            client.delete_assessment(id).await?;
            eprintln!("assessment {id} deleted");
            Ok(())
        }
        Command::Source(SourceCommand::List {
            search,
            status,
            sort,
            order,
        }) => {
            let sources = client.list_sources().await?;
            let query = SourceQuery {
                search,
                status,
                sort,
                order,
            };
            print!("{}", render::source_table(&filter_sources(&sources, &query)));
            Ok(())
        }
        Command::Summary { source, top } => {
            let sources = client.list_sources().await?;
            let Some(found) = sources.iter().find(|s| s.id == source) else {
                bail!("no discovery source with id {source}");
            };
            let Some(inventory) = &found.inventory else {
                bail!(
                    "source {} has no inventory yet (status: {})",
                    found.name,
                    found.status.label()
                );
            };
            print!("{}", render::summary_report(&found.name, inventory, top));
            Ok(())
        }
    }
}

/// Upload the file, drive the job to a terminal state with a progress bar,
/// and on completion refresh and print the assessment list.
async fn create_assessment(
    client: Arc<HttpPlannerClient>,
    name: String,
    rvtools: PathBuf,
) -> Result<()> {
    let file = tokio::fs::read(&rvtools)
        .await
        .with_context(|| format!("reading {}", rvtools.display()))?;

    // The completion callback carries no payload; it just tells us the
    // assessment list is worth re-fetching.
    let (refresh_tx, mut refresh_rx) = tokio::sync::mpsc::unbounded_channel();
    let poller = JobPoller::new(Arc::clone(&client) as Arc<dyn JobApi>, move || {
        let _ = refresh_tx.send(());
    });

    let job = poller.create_job(&name, file).await?;
    eprintln!("job {} created", job.id);

    let bar = ProgressBar::new(100);
    bar.set_style(
        ProgressStyle::with_template("{bar:40} {pos:>3}% {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let final_status = tokio::select! {
        status = drive_to_terminal(&poller, &bar) => status?,
        _ = tokio::signal::ctrl_c() => {
            poller.cancel_job();
            bar.abandon_with_message("cancelled");
            bail!("upload cancelled");
        }
    };

    match final_status {
        JobStatus::Completed => {
            bar.finish_with_message("assessment ready");
            refresh_rx
                .recv()
                .await
                .context("completion notification missing")?;
            let assessments = client.list_assessments().await?;
            let query = AssessmentQuery::default();
            print!("{}", render::assessment_table(&filter_assessments(&assessments, &query)));
            Ok(())
        }
        JobStatus::Failed => {
            bar.abandon_with_message("failed");
            let detail = poller
                .current()
                .and_then(|j| j.status_info)
                .unwrap_or_else(|| "no detail from server".to_string());
            bail!("job failed: {detail}");
        }
        JobStatus::Cancelled => {
            bar.abandon_with_message("cancelled");
            bail!("job was cancelled server-side");
        }
        other => bail!("job ended in unexpected state: {}", other.as_str()),
    }
}

/// Follow the tracked job until it goes terminal, feeding the progress bar
/// from the status projection.
async fn drive_to_terminal(poller: &JobPoller, bar: &ProgressBar) -> Result<JobStatus> {
    let mut rx = poller.subscribe();
    loop {
        let status = rx.borrow_and_update().as_ref().map(|j| j.status);
        if let Some(status) = status {
            let view = ProgressView::from_status(status);
            if let Some(percent) = view.percent {
                bar.set_position(u64::from(percent));
            }
            bar.set_message(view.label);
            if status.is_terminal() {
                return Ok(status);
            }
        }
        rx.changed().await.context("job state channel closed")?;
    }
}
