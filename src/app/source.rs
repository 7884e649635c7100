// Timetable Tool - app/source.rs
//
// Where displayed courses come from. By default the catalog file is re-read
// on every display so results reflect the file as it is now; with
// `[catalog] reload = "cached"` the parsed catalog is kept until the source
// path changes or `invalidate` is called.

use crate::core::catalog::{load_catalog, CourseCatalog, FilterCriteria, MalformedRowPolicy};
use crate::core::model::CourseRecord;
use crate::platform::config::AppConfig;
use crate::util::error::Result;
use std::path::{Path, PathBuf};

/// When the catalog file is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReloadPolicy {
    /// Re-read and re-parse the file for every query.
    #[default]
    PerQuery,

    /// Parse once per source path.
    Cached,
}

/// Result of one filter query.
#[derive(Debug, Clone, Default)]
pub struct FilterOutcome {
    /// Matching courses in file order.
    pub courses: Vec<CourseRecord>,

    /// Rows skipped while loading the catalog.
    pub warnings: Vec<String>,

    /// False when a cached catalog answered the query.
    pub reloaded: bool,
}

/// Catalog loader holding the read policies and, under `Cached`, the last
/// parsed catalog.
#[derive(Debug, Default)]
pub struct CatalogSource {
    reload: ReloadPolicy,
    malformed_rows: MalformedRowPolicy,
    cached: Option<(PathBuf, CourseCatalog)>,
}

impl CatalogSource {
    pub fn new(reload: ReloadPolicy, malformed_rows: MalformedRowPolicy) -> Self {
        Self {
            reload,
            malformed_rows,
            cached: None,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            if config.cache_catalog {
                ReloadPolicy::Cached
            } else {
                ReloadPolicy::PerQuery
            },
            if config.skip_malformed_rows {
                MalformedRowPolicy::Skip
            } else {
                MalformedRowPolicy::Abort
            },
        )
    }

    pub fn reload_policy(&self) -> ReloadPolicy {
        self.reload
    }

    /// Drop any cached catalog so the next query reads the file.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    /// Validate `criteria`, obtain the catalog for `path`, and filter it.
    pub fn filter(&mut self, path: &Path, criteria: &FilterCriteria) -> Result<FilterOutcome> {
        criteria.validate()?;

        if self.reload == ReloadPolicy::Cached {
            if let Some((cached_path, catalog)) = &self.cached {
                if cached_path == path {
                    tracing::debug!(path = %path.display(), "Using cached catalog");
                    return apply(catalog, criteria, false);
                }
            }
        }

        let catalog = load_catalog(path, self.malformed_rows)?;
        if catalog.is_empty() {
            tracing::warn!(path = %path.display(), "Catalog file contains no courses");
        } else {
            tracing::debug!(path = %path.display(), rows = catalog.len(), "Catalog read");
        }
        let outcome = apply(&catalog, criteria, true);
        if self.reload == ReloadPolicy::Cached {
            self.cached = Some((path.to_path_buf(), catalog));
        }
        outcome
    }
}

fn apply(catalog: &CourseCatalog, criteria: &FilterCriteria, reloaded: bool) -> Result<FilterOutcome> {
    Ok(FilterOutcome {
        courses: catalog.filter(criteria)?,
        warnings: catalog.warnings().to_vec(),
        reloaded,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_per_query_sees_file_changes() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "courses.csv", "CS101,Intro,M\n");
        let mut source = CatalogSource::default();
        let criteria = FilterCriteria::new("", "CS");

        assert_eq!(source.filter(&path, &criteria).unwrap().courses.len(), 1);

        write(&dir, "courses.csv", "CS101,Intro,M\nCS102,Next,T\n");
        let outcome = source.filter(&path, &criteria).unwrap();
        assert_eq!(outcome.courses.len(), 2);
        assert!(outcome.reloaded);
    }

    #[test]
    fn test_cached_ignores_file_changes_until_invalidated() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "courses.csv", "CS101,Intro,M\n");
        let mut source = CatalogSource::new(ReloadPolicy::Cached, MalformedRowPolicy::Abort);
        let criteria = FilterCriteria::new("", "CS");

        assert!(source.filter(&path, &criteria).unwrap().reloaded);

        write(&dir, "courses.csv", "CS101,Intro,M\nCS102,Next,T\n");
        let cached = source.filter(&path, &criteria).unwrap();
        assert_eq!(cached.courses.len(), 1);
        assert!(!cached.reloaded);

        source.invalidate();
        assert_eq!(source.filter(&path, &criteria).unwrap().courses.len(), 2);
    }

    #[test]
    fn test_cached_reloads_for_new_path() {
        let dir = TempDir::new().unwrap();
        let first = write(&dir, "a.csv", "CS101,Intro,M\n");
        let second = write(&dir, "b.csv", "EE201,Circuits,T\n");
        let mut source = CatalogSource::new(ReloadPolicy::Cached, MalformedRowPolicy::Abort);
        let criteria = FilterCriteria::new("", "UNI");

        assert_eq!(source.filter(&first, &criteria).unwrap().courses[0].code, "CS101");
        let outcome = source.filter(&second, &criteria).unwrap();
        assert!(outcome.reloaded);
        assert_eq!(outcome.courses[0].code, "EE201");
    }

    #[test]
    fn test_skip_policy_reports_warnings() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "courses.csv", "CS101,Intro,M\nbroken\n");
        let mut source = CatalogSource::new(ReloadPolicy::PerQuery, MalformedRowPolicy::Skip);
        let outcome = source.filter(&path, &FilterCriteria::new("1", "")).unwrap();
        assert_eq!(outcome.courses.len(), 1);
        assert_eq!(outcome.warnings.len(), 1);
    }

    #[test]
    fn test_from_config_maps_flags() {
        let config = AppConfig {
            cache_catalog: true,
            skip_malformed_rows: true,
            ..AppConfig::default()
        };
        let source = CatalogSource::from_config(&config);
        assert_eq!(source.reload_policy(), ReloadPolicy::Cached);
        assert_eq!(source.malformed_rows, MalformedRowPolicy::Skip);
    }
}
