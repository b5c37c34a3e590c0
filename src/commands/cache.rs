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

use crate::commands::RepositoryArgs;
use crate::config::GitEmbedConfig;
use crate::error::Result;
use crate::resolver::RepositoryResolver;
use clap::Subcommand;
use colored::*;

#[derive(Subcommand, Debug)]
pub enum CacheCommand {
    /// Clear the cached record of one repository (and all avatar markers)
    Clear {
        #[command(flatten)]
        repository: RepositoryArgs,
    },
    /// Remove every cached entry
    ClearAll,
    /// Show where cached entries are stored
    Info,
}

impl CacheCommand {
    pub fn execute(self, config: &GitEmbedConfig) -> Result<()> {
        let resolver = RepositoryResolver::from_config(config);
        match self {
            CacheCommand::Clear { repository } => clear_repository(&resolver, &repository),
            CacheCommand::ClearAll => clear_all(&resolver),
            CacheCommand::Info => show_cache_info(config),
        }
    }
}

fn clear_repository(resolver: &RepositoryResolver, repository: &RepositoryArgs) -> Result<()> {
    resolver.clear_repository_cache(&repository.to_request())?;
    println!(
        "{} Cleared cache for {}/{}",
        "✓".green().bold(),
        repository.owner.trim(),
        repository.repo.trim()
    );
    Ok(())
}

fn clear_all(resolver: &RepositoryResolver) -> Result<()> {
    let removed = resolver.clear_all_cache()?;
    if removed == 0 {
        println!("{} Cache is already empty", "✓".green().bold());
    } else {
        println!(
            "{} Removed {} cache entries",
            "✓".green().bold(),
            removed.to_string().cyan()
        );
    }
    Ok(())
}

fn show_cache_info(config: &GitEmbedConfig) -> Result<()> {
    let directory = config.cache_dir();
    println!("Cache Information:");
    println!("  Location: {}", directory.display());

    if !directory.exists() {
        println!("  Entries: 0");
        return Ok(());
    }

    let entries = std::fs::read_dir(&directory)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "json"))
        .count();
    println!("  Entries: {entries}");
    println!(
        "  Repository TTL: {}h",
        config.cache.repository_ttl().as_secs() / 3_600
    );
    Ok(())
}
