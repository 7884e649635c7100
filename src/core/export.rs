// Timetable Tool - core/export.rs
//
// CSV export of the timetable.
// Core layer: writes to any Write trait object; the caller owns the file.

use crate::core::model::CourseRecord;
use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;

/// Write one `code,name,time` row per course. No header row.
///
/// Fields are quoted only when they contain a comma, quote, or newline.
/// Records end in a bare `\n`, so no blank lines appear between rows on any
/// platform. Returns the number of rows written.
pub fn export_csv<W: Write>(
    courses: &[CourseRecord],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    for course in courses {
        csv_writer
            .write_record(course.fields())
            .map_err(|e| ExportError::Csv {
                path: export_path.to_path_buf(),
                source: e,
            })?;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(courses.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::{parse_catalog, MalformedRowPolicy};
    use std::collections::HashSet;

    #[test]
    fn test_csv_export_rows() {
        let courses = vec![
            CourseRecord::new("CS101", "Intro to CS", "MWF 9-10"),
            CourseRecord::new("EE201", "Circuits", "TTh 11-12"),
        ];
        let mut buf = Vec::new();
        let count = export_csv(&courses, &mut buf, Path::new("out.csv")).unwrap();
        assert_eq!(count, 2);

        let output = String::from_utf8(buf).unwrap();
        assert_eq!(output, "CS101,Intro to CS,MWF 9-10\nEE201,Circuits,TTh 11-12\n");
    }

    #[test]
    fn test_csv_export_quotes_special_fields() {
        let courses = vec![CourseRecord::new(
            "CS110",
            "Programming, Part \"1\"",
            "MWF\n9-10",
        )];
        let mut buf = Vec::new();
        export_csv(&courses, &mut buf, Path::new("out.csv")).unwrap();

        let output = String::from_utf8(buf).unwrap();
        assert_eq!(
            output,
            "CS110,\"Programming, Part \"\"1\"\"\",\"MWF\n9-10\"\n"
        );
    }

    #[test]
    fn test_export_reads_back_through_catalog_parser() {
        let courses = vec![
            CourseRecord::new("UNI100", "Seminar", "F 2-3"),
            CourseRecord::new("CS110", "Programming, Part 1", "MWF \"early\""),
        ];
        let mut buf = Vec::new();
        export_csv(&courses, &mut buf, Path::new("out.csv")).unwrap();

        let catalog =
            parse_catalog(buf.as_slice(), Path::new("out.csv"), MalformedRowPolicy::Abort)
                .unwrap();
        let written: HashSet<_> = catalog.records().iter().cloned().collect();
        let expected: HashSet<_> = courses.into_iter().collect();
        assert_eq!(written, expected);
    }

    #[test]
    fn test_empty_export_writes_nothing() {
        let mut buf = Vec::new();
        let count = export_csv(&[], &mut buf, Path::new("out.csv")).unwrap();
        assert_eq!(count, 0);
        assert!(buf.is_empty());
    }
}
