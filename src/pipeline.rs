//! The fetch pipeline: users are resolved into packages, then every package
//! page is scraped for its download counts.
//!
//! Both stages issue all of their requests at once and wait for every one of
//! them to settle. A failed page only degrades its own entry.

use crate::config::Config;
use crate::error::{Result, StatsError};
use crate::fetcher::PageSource;
use crate::parallel::{failure_count, settle_all};
use crate::scrapers::{parse_package_page, parse_user_page, PackageStats};
use log::{debug, info, warn};
use std::collections::HashSet;

/// Download statistics keyed by package name, in request order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsTable {
    entries: Vec<(String, PackageStats)>,
}

impl StatsTable {
    /// Creates an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the stats for `name`, replacing an existing entry in place
    pub fn insert(&mut self, name: impl Into<String>, stats: PackageStats) {
        let name = name.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = stats,
            None => self.entries.push((name, stats)),
        }
    }

    /// Looks up the stats of a package
    pub fn get(&self, name: &str) -> Option<&PackageStats> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, stats)| stats)
    }

    /// Iterates over `(name, stats)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PackageStats)> {
        self.entries.iter().map(|(name, stats)| (name.as_str(), stats))
    }

    /// Number of packages in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no packages
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Removes duplicate names, keeping the first occurrence of each
pub fn dedupe_packages(packages: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(packages.len());
    packages
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

/// Path of a user's profile page
pub fn user_path(user: &str) -> String {
    format!("/~{}", user)
}

/// Path of a package page
pub fn package_path(package: &str) -> String {
    format!("/package/{}", package)
}

/// Fetches every user's profile page and returns all of their packages
///
/// Packages come back in user order, then page order; duplicates are left
/// for the caller to remove. A user whose page cannot be fetched
/// contributes nothing.
pub async fn aggregate_user_packages<S>(source: &S, users: &[String]) -> Vec<String>
where
    S: PageSource + ?Sized,
{
    let tasks = users.iter().map(|user| async move {
        let html = source.fetch(&user_path(user)).await?;
        Ok::<_, StatsError>(parse_user_page(&html))
    });

    let results: Vec<Result<Vec<String>>> = settle_all(tasks).await;
    let failures = failure_count(&results);
    if failures > 0 {
        warn!("{} of {} user pages could not be fetched", failures, users.len());
    }

    let mut packages = Vec::new();
    for (user, result) in users.iter().zip(results) {
        match result {
            Ok(user_packages) => {
                debug!("User {} collaborates on {} packages", user, user_packages.len());
                packages.extend(user_packages);
            }
            Err(e) => warn!("Skipping user {}: {}", user, e),
        }
    }
    packages
}

/// Fetches every package page and scrapes its download counts
///
/// Every requested package gets an entry; one whose page cannot be fetched
/// keeps the all-"unknown" placeholder.
pub async fn collect_stats<S>(source: &S, packages: &[String]) -> StatsTable
where
    S: PageSource + ?Sized,
{
    let tasks = packages.iter().map(|package| async move {
        let html = source.fetch(&package_path(package)).await?;
        Ok::<_, StatsError>(parse_package_page(&html))
    });

    let results: Vec<Result<PackageStats>> = settle_all(tasks).await;
    let failures = failure_count(&results);
    if failures > 0 {
        warn!("{} of {} package pages could not be fetched", failures, packages.len());
    }

    let mut table = StatsTable::new();
    for (package, result) in packages.iter().zip(results) {
        let stats = result.unwrap_or_else(|e| {
            warn!("No stats for {}: {}", package, e);
            PackageStats::default()
        });
        table.insert(package.as_str(), stats);
    }
    table
}

/// Merges the packages of every configured user into the package list
///
/// Returns a config without users whose packages are free of duplicates.
pub async fn resolve_users<S>(source: &S, config: Config) -> Config
where
    S: PageSource + ?Sized,
{
    let Config { users, mut packages } = config;

    if !users.is_empty() {
        info!("Resolving packages of {} users", users.len());
        packages.extend(aggregate_user_packages(source, &users).await);
    }

    Config {
        users: Vec::new(),
        packages: dedupe_packages(packages),
    }
}

/// Runs the whole pipeline: resolve users, then collect stats for every package
pub async fn run<S>(source: &S, config: Config) -> StatsTable
where
    S: PageSource + ?Sized,
{
    let resolved = resolve_users(source, config).await;
    info!("Collecting stats for {} packages", resolved.packages.len());
    collect_stats(source, &resolved.packages).await
}
