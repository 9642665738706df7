use clap::Parser;
use gh_backup::Result;
use gh_backup::commands::validators;
use gh_backup::git::CloneOptions;
use gh_backup::{
    Command, CommandContext, ExportKind, GitHubClient, RepoSource,
    commands::{CloneCommand, DownloadCommand, ExportCommand},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gh-backup")]
#[command(about = "GitHub saver for stargazers, forks, issues and repos")]
#[command(version)]
struct Cli {
    /// User login
    #[arg(short = 'u', long)]
    user_login: String,

    /// User access token (falls back to the GITHUB_TOKEN environment variable)
    #[arg(short = 't', long)]
    user_token: Option<String>,

    /// Include repositories forked by the user
    #[arg(long)]
    user_forks: bool,

    /// Enable debug-level output
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Overwrite existing zip archives
    #[arg(short = 'f', long)]
    force: bool,

    /// Save the list of stargazers per repository
    #[arg(long)]
    stars: bool,

    /// Save the list of forks per repository
    #[arg(long)]
    forks: bool,

    /// Save the list of issues per repository
    #[arg(long)]
    issues: bool,

    /// Download repository snapshots as zip archives to the save path
    #[arg(long, group = "snapshot")]
    save: bool,

    /// Clone repositories to the save path
    #[arg(long, group = "snapshot")]
    clone: bool,

    /// Clone bare repositories
    #[arg(long)]
    bare: bool,

    /// Clone with submodules
    #[arg(long)]
    recursive: bool,

    /// Operate on the user's starred repositories instead of owned ones
    #[arg(long)]
    starred: bool,

    /// Save path for archives and clones
    #[arg(short = 'p', long, default_value = ".")]
    save_path: PathBuf,

    /// Restrict the run to specific repository names (repeatable)
    #[arg(short = 'l', long)]
    repo_list: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Validate arguments using centralized validators
    validators::validate_user_login(&cli.user_login)?;
    validators::validate_repo_names(&cli.repo_list)?;
    validators::validate_action_selected(&[cli.stars, cli.forks, cli.issues, cli.save, cli.clone])?;

    let client = GitHubClient::new(cli.user_token);
    let context = CommandContext {
        client,
        user_login: cli.user_login,
        source: if cli.starred {
            RepoSource::Starred
        } else {
            RepoSource::Owned
        },
        include_forks: cli.user_forks,
        repo_list: cli.repo_list,
        save_path: cli.save_path,
        force: cli.force,
        verbose: cli.verbose,
    };

    // Actions compose within one run, in a fixed order
    if cli.stars {
        ExportCommand::new(ExportKind::Stargazers)
            .execute(&context)
            .await?;
    }
    if cli.forks {
        ExportCommand::new(ExportKind::Forks)
            .execute(&context)
            .await?;
    }
    if cli.issues {
        ExportCommand::new(ExportKind::Issues)
            .execute(&context)
            .await?;
    }
    if cli.save {
        DownloadCommand.execute(&context).await?;
    }
    if cli.clone {
        CloneCommand {
            options: CloneOptions {
                bare: cli.bare,
                recursive: cli.recursive,
            },
        }
        .execute(&context)
        .await?;
    }

    Ok(())
}
