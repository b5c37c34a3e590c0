// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use clap::{Parser, Subcommand};
use git_embed::commands::RepositoryArgs;
use git_embed::commands::cache::CacheCommand;
use git_embed::commands::fetch::FetchCommand;
use git_embed::commands::platforms::PlatformsCommand;
use git_embed::config::new_git_embed_config;
use git_embed::error::{Result, format_error_chain, get_exit_code};
use git_embed::logging;

#[derive(Parser)]
#[command(name = "git-embed")]
#[command(author, version, about = "Repository card metadata for GitHub, GitLab, Gitea and Forgejo", long_about = None)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve repository metadata and its download archive
    #[command(visible_alias = "f")]
    Fetch {
        #[command(flatten)]
        repository: RepositoryArgs,

        /// Print a {"success", "data"} JSON envelope instead of the card
        #[arg(long)]
        json: bool,
    },

    /// Manage the metadata cache
    Cache {
        #[command(subcommand)]
        command: CacheCommand,
    },

    /// List supported hosting platforms
    Platforms,
}

fn setup_logger(cli: &Cli) {
    logging::setup_logger(cli.verbose);
}

fn main() {
    let cli = Cli::parse();

    // Initialize logger based on CLI flags and environment
    setup_logger(&cli);

    // Load configuration once at startup
    let config = match new_git_embed_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", format_error_chain(&e));
            std::process::exit(get_exit_code(&e));
        }
    };

    let result: Result<()> = (|| match cli.command {
        Commands::Fetch { repository, json } => {
            FetchCommand::new(&config).execute(&repository.to_request(), json)
        }
        Commands::Cache { command } => command.execute(&config),
        Commands::Platforms => PlatformsCommand::new().execute(),
    })();

    if let Err(e) = result {
        eprintln!("{}", format_error_chain(&e));
        std::process::exit(get_exit_code(&e));
    }
}
