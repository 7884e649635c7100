// Timetable Tool - core/catalog.rs
//
// Course catalog: CSV parsing and the year/department filter predicate.
// Parsing works on any `Read` so it can be exercised without the filesystem;
// `load_catalog` is the only function that opens a file.

use crate::core::model::CourseRecord;
use crate::util::constants::{MIN_COURSE_COLUMNS, WILDCARD_DEPARTMENT};
use crate::util::error::{CatalogError, FormatError, Result, TimetableToolError, ValidationError};
use std::io::Read;
use std::path::Path;

/// What to do with a row that has fewer than three columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedRowPolicy {
    /// Fail the whole load on the first short row.
    #[default]
    Abort,

    /// Drop the row, log a warning, and keep loading.
    Skip,
}

// =============================================================================
// Filter criteria
// =============================================================================

/// Year and department filters. An empty input string means "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-sensitive substring that must appear in the course code.
    pub year: Option<String>,

    /// Case-insensitive substring of the course code, or the wildcard "UNI".
    pub department: Option<String>,
}

impl FilterCriteria {
    /// Build criteria from raw input fields, treating empty strings as absent.
    pub fn new(year: &str, department: &str) -> Self {
        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
        Self {
            year: non_empty(year),
            department: non_empty(department),
        }
    }

    /// True if neither filter is set.
    pub fn is_empty(&self) -> bool {
        self.year.is_none() && self.department.is_none()
    }

    /// At least one of year or department is required.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.is_empty() {
            Err(ValidationError::NoCriteria)
        } else {
            Ok(())
        }
    }

    /// Check a single course against both filters (AND-combined).
    pub fn matches(&self, course: &CourseRecord) -> bool {
        let year_ok = self
            .year
            .as_deref()
            .map_or(true, |year| course.code.contains(year));

        let department_ok = self.department.as_deref().map_or(true, |dept| {
            is_wildcard_department(dept)
                || course.code.to_lowercase().contains(&dept.to_lowercase())
        });

        year_ok && department_ok
    }
}

/// "UNI" in any letter case matches every course.
pub fn is_wildcard_department(department: &str) -> bool {
    department.to_uppercase() == WILDCARD_DEPARTMENT
}

// =============================================================================
// Catalog
// =============================================================================

/// Courses in file order. Duplicate rows are kept.
#[derive(Debug, Clone, Default)]
pub struct CourseCatalog {
    records: Vec<CourseRecord>,

    /// Non-fatal problems found while loading (rows skipped under
    /// `MalformedRowPolicy::Skip`).
    warnings: Vec<String>,
}

impl CourseCatalog {
    pub fn from_records(records: Vec<CourseRecord>) -> Self {
        Self {
            records,
            warnings: Vec::new(),
        }
    }

    pub fn records(&self) -> &[CourseRecord] {
        &self.records
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Return every course matching `criteria`, in file order.
    ///
    /// Fails with `ValidationError::NoCriteria` if no filter is set. An empty
    /// result is not an error.
    pub fn filter(
        &self,
        criteria: &FilterCriteria,
    ) -> std::result::Result<Vec<CourseRecord>, ValidationError> {
        criteria.validate()?;
        Ok(self
            .records
            .iter()
            .filter(|course| criteria.matches(course))
            .cloned()
            .collect())
    }
}

/// Parse headerless `code,name,time` CSV from any reader.
///
/// `origin` is used only for error context. Columns past the third are
/// ignored; blank lines are skipped by the CSV reader.
pub fn parse_catalog<R: Read>(
    reader: R,
    origin: &Path,
    policy: MalformedRowPolicy,
) -> Result<CourseCatalog> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut catalog = CourseCatalog::default();

    for (idx, row) in csv_reader.records().enumerate() {
        let row = row.map_err(|e| read_error(origin, e))?;

        if row.len() < MIN_COURSE_COLUMNS {
            let line = row
                .position()
                .map(|p| p.line())
                .unwrap_or(idx as u64 + 1);
            let err = FormatError::ShortRow {
                path: origin.to_path_buf(),
                line,
                columns: row.len(),
            };
            match policy {
                MalformedRowPolicy::Abort => return Err(err.into()),
                MalformedRowPolicy::Skip => {
                    tracing::warn!(
                        path = %origin.display(),
                        line,
                        columns = row.len(),
                        "Skipping short catalog row"
                    );
                    catalog.warnings.push(err.to_string());
                    continue;
                }
            }
        }

        catalog
            .records
            .push(CourseRecord::new(&row[0], &row[1], &row[2]));
    }

    tracing::debug!(
        path = %origin.display(),
        courses = catalog.records.len(),
        skipped = catalog.warnings.len(),
        "Catalog parsed"
    );

    Ok(catalog)
}

/// Open `path` and parse it. The file handle is dropped before returning.
pub fn load_catalog(path: &Path, policy: MalformedRowPolicy) -> Result<CourseCatalog> {
    let file = std::fs::File::open(path).map_err(|e| CatalogError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_catalog(std::io::BufReader::new(file), path, policy)
}

/// Validate `criteria`, read `source`, and return the matching courses.
///
/// Validation runs before the file is touched, so missing criteria are
/// reported even when the file does not exist.
pub fn filter(
    source: &Path,
    criteria: &FilterCriteria,
    policy: MalformedRowPolicy,
) -> Result<Vec<CourseRecord>> {
    criteria.validate()?;
    let catalog = load_catalog(source, policy)?;
    Ok(catalog.filter(criteria)?)
}

/// I/O failures while reading are catalog errors; everything else the CSV
/// reader reports (bad UTF-8, broken quoting) is a format error.
fn read_error(origin: &Path, err: csv::Error) -> TimetableToolError {
    if let csv::ErrorKind::Io(source) = err.kind() {
        return CatalogError::Io {
            path: origin.to_path_buf(),
            source: std::io::Error::new(source.kind(), source.to_string()),
        }
        .into();
    }
    FormatError::Csv {
        path: origin.to_path_buf(),
        source: err,
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const SAMPLE: &str = "CS101,Intro to CS,MWF 9-10\n\
                          EE201,Circuits,TTh 11-12\n\
                          UNI100,Seminar,F 2-3\n";

    fn sample() -> CourseCatalog {
        parse_catalog(
            SAMPLE.as_bytes(),
            &PathBuf::from("sample.csv"),
            MalformedRowPolicy::Abort,
        )
        .unwrap()
    }

    fn codes(courses: &[CourseRecord]) -> Vec<&str> {
        courses.iter().map(|c| c.code.as_str()).collect()
    }

    #[test]
    fn test_parse_in_file_order() {
        let catalog = sample();
        assert_eq!(codes(catalog.records()), vec!["CS101", "EE201", "UNI100"]);
        assert_eq!(catalog.records()[1].name, "Circuits");
        assert_eq!(catalog.records()[1].time, "TTh 11-12");
        assert!(catalog.warnings().is_empty());
    }

    #[test]
    fn test_year_and_department() {
        let result = sample().filter(&FilterCriteria::new("1", "CS")).unwrap();
        assert_eq!(
            result,
            vec![CourseRecord::new("CS101", "Intro to CS", "MWF 9-10")]
        );
    }

    #[test]
    fn test_wildcard_department_matches_all() {
        let result = sample().filter(&FilterCriteria::new("", "UNI")).unwrap();
        assert_eq!(codes(&result), vec!["CS101", "EE201", "UNI100"]);

        let lower = sample().filter(&FilterCriteria::new("", "uni")).unwrap();
        assert_eq!(lower.len(), 3);
    }

    #[test]
    fn test_year_only() {
        let result = sample().filter(&FilterCriteria::new("2", "")).unwrap();
        assert_eq!(
            result,
            vec![CourseRecord::new("EE201", "Circuits", "TTh 11-12")]
        );
    }

    #[test]
    fn test_department_is_case_insensitive() {
        let result = sample().filter(&FilterCriteria::new("", "ee")).unwrap();
        assert_eq!(codes(&result), vec!["EE201"]);
    }

    #[test]
    fn test_year_is_case_sensitive_substring() {
        let catalog = CourseCatalog::from_records(vec![
            CourseRecord::new("cs1x", "Lower", "M"),
            CourseRecord::new("CS1X", "Upper", "T"),
        ]);
        let result = catalog.filter(&FilterCriteria::new("x", "")).unwrap();
        assert_eq!(codes(&result), vec!["cs1x"]);
    }

    #[test]
    fn test_no_criteria_is_validation_error() {
        let result = sample().filter(&FilterCriteria::new("", ""));
        assert_eq!(result, Err(ValidationError::NoCriteria));
    }

    #[test]
    fn test_zero_matches_is_empty_ok() {
        let result = sample().filter(&FilterCriteria::new("4", "EE")).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_duplicate_rows_all_returned() {
        let data = "CS101,Intro,M\nCS101,Intro,M\n";
        let catalog = parse_catalog(
            data.as_bytes(),
            &PathBuf::from("dup.csv"),
            MalformedRowPolicy::Abort,
        )
        .unwrap();
        let result = catalog.filter(&FilterCriteria::new("1", "")).unwrap();
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_filter_grid_preserves_order_and_predicate() {
        let data = "CS101,A,M\nEE201,B,T\nUNI100,C,W\nCS302,D,R\nEE401,E,F\nMA210,F,M\n";
        let catalog = parse_catalog(
            data.as_bytes(),
            &PathBuf::from("grid.csv"),
            MalformedRowPolicy::Abort,
        )
        .unwrap();

        for year in ["", "1", "2", "3", "4"] {
            for dept in ["", "CS", "EE", "UNI"] {
                let criteria = FilterCriteria::new(year, dept);
                if criteria.is_empty() {
                    continue;
                }
                let result = catalog.filter(&criteria).unwrap();
                let expected: Vec<_> = catalog
                    .records()
                    .iter()
                    .filter(|c| year.is_empty() || c.code.contains(year))
                    .filter(|c| dept.is_empty() || dept == "UNI" || c.code.starts_with(dept))
                    .cloned()
                    .collect();
                assert_eq!(result, expected, "year={year:?} dept={dept:?}");
            }
        }
    }

    #[test]
    fn test_quoted_fields_and_extra_columns() {
        let data = "\"CS110\",\"Programming, Part 1\",\"MWF \"\"early\"\"\",extra\n";
        let catalog = parse_catalog(
            data.as_bytes(),
            &PathBuf::from("quoted.csv"),
            MalformedRowPolicy::Abort,
        )
        .unwrap();
        assert_eq!(
            catalog.records(),
            &[CourseRecord::new(
                "CS110",
                "Programming, Part 1",
                "MWF \"early\""
            )]
        );
    }

    #[test]
    fn test_short_row_aborts() {
        let data = "CS101,Intro,M\nEE201,Circuits\nUNI100,Seminar,F\n";
        let result = parse_catalog(
            data.as_bytes(),
            &PathBuf::from("short.csv"),
            MalformedRowPolicy::Abort,
        );
        match result {
            Err(TimetableToolError::Format(FormatError::ShortRow { line, columns, .. })) => {
                assert_eq!(line, 2);
                assert_eq!(columns, 2);
            }
            other => panic!("expected ShortRow, got {other:?}"),
        }
    }

    #[test]
    fn test_short_row_skipped_with_warning() {
        let data = "CS101,Intro,M\nEE201,Circuits\nUNI100,Seminar,F\n";
        let catalog = parse_catalog(
            data.as_bytes(),
            &PathBuf::from("short.csv"),
            MalformedRowPolicy::Skip,
        )
        .unwrap();
        assert_eq!(codes(catalog.records()), vec!["CS101", "UNI100"]);
        assert_eq!(catalog.warnings().len(), 1);
        assert!(catalog.warnings()[0].contains("line 2"));
    }

    #[test]
    fn test_invalid_utf8_is_format_error() {
        let data: &[u8] = b"CS101,Intro,M\nEE\xff201,Bad,T\n";
        let result = parse_catalog(
            data,
            &PathBuf::from("latin1.csv"),
            MalformedRowPolicy::Abort,
        );
        assert!(
            matches!(result, Err(TimetableToolError::Format(FormatError::Csv { .. }))),
            "got {result:?}"
        );
    }

    #[test]
    fn test_missing_file_is_catalog_io_error() {
        let result = load_catalog(
            &PathBuf::from("/nonexistent/timetable-tool/courses.csv"),
            MalformedRowPolicy::Abort,
        );
        assert!(matches!(
            result,
            Err(TimetableToolError::Catalog(CatalogError::Io { .. }))
        ));
    }

    #[test]
    fn test_filter_validates_before_reading() {
        let result = filter(
            &PathBuf::from("/nonexistent/timetable-tool/courses.csv"),
            &FilterCriteria::default(),
            MalformedRowPolicy::Abort,
        );
        assert!(matches!(
            result,
            Err(TimetableToolError::Validation(ValidationError::NoCriteria))
        ));
    }
}
