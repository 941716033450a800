//! Staff list CSV import.
//!
//! Reads a staff roster from CSV text: a header row is required, the
//! `name` column is mandatory, and `is_under_18` and `id` columns are
//! optional. Row-level problems are collected per row and never abort
//! the rest of the file; only an unusable header is fatal.

use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::StaffRecord;

/// Boolean tokens accepted as true in the `is_under_18` column.
const TRUTHY: [&str; 3] = ["true", "1", "yes"];
/// Boolean tokens accepted as false; an empty cell also means false.
const FALSY: [&str; 3] = ["false", "0", "no"];

/// The outcome of importing a staff CSV file.
#[derive(Debug)]
pub struct StaffImport {
    /// The successfully imported records, in file order.
    pub staff: Vec<StaffRecord>,
    /// Collected row-level errors ([`EngineError::CsvRow`] values).
    pub errors: Vec<EngineError>,
}

/// Column positions resolved from the header row.
struct Columns {
    name: usize,
    is_under_18: Option<usize>,
    id: Option<usize>,
}

/// Imports staff records from CSV text.
///
/// Rows missing a name or carrying an unrecognized boolean token are
/// reported in [`StaffImport::errors`] with their 1-based file line
/// number (the header is line 1) and skipped; every other row still
/// imports. Records without an `id` cell get a generated UUID, since ids
/// are normally assigned by the persistence layer.
///
/// # Errors
///
/// Returns [`EngineError::CsvImport`] when the text is empty or the
/// header row has no `name` column.
pub fn import_staff_csv(text: &str) -> EngineResult<StaffImport> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (_, header) = lines.next().ok_or_else(|| EngineError::CsvImport {
        message: "file is empty".to_string(),
    })?;
    let columns = resolve_columns(header)?;

    let mut staff = Vec::new();
    let mut errors = Vec::new();

    for (row, line) in lines {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        match read_row(&fields, &columns, row) {
            Ok(record) => staff.push(record),
            Err(error) => errors.push(error),
        }
    }

    Ok(StaffImport { staff, errors })
}

/// Resolves required and optional column positions from the header row.
fn resolve_columns(header: &str) -> EngineResult<Columns> {
    let names: Vec<String> = header
        .split(',')
        .map(|cell| cell.trim().to_lowercase())
        .collect();

    let position = |wanted: &str| names.iter().position(|name| name == wanted);

    let name = position("name").ok_or_else(|| EngineError::CsvImport {
        message: "header row is missing the required 'name' column".to_string(),
    })?;

    Ok(Columns {
        name,
        is_under_18: position("is_under_18"),
        id: position("id"),
    })
}

/// Reads a single data row against the resolved columns.
fn read_row(fields: &[&str], columns: &Columns, row: usize) -> Result<StaffRecord, EngineError> {
    let name = fields.get(columns.name).copied().unwrap_or_default();
    if name.is_empty() {
        return Err(EngineError::CsvRow {
            row,
            message: "missing required field 'name'".to_string(),
        });
    }

    let is_under_18 = match columns.is_under_18 {
        Some(index) => {
            let cell = fields.get(index).copied().unwrap_or_default();
            parse_bool(cell).ok_or_else(|| EngineError::CsvRow {
                row,
                message: format!("unrecognized boolean token '{}' in 'is_under_18'", cell),
            })?
        }
        None => false,
    };

    let id = columns
        .id
        .and_then(|index| fields.get(index))
        .map(|cell| cell.to_string())
        .filter(|cell| !cell.is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    Ok(StaffRecord {
        id,
        name: name.to_string(),
        is_under_18,
    })
}

/// Parses the accepted boolean tokens; an empty cell is false.
fn parse_bool(cell: &str) -> Option<bool> {
    let token = cell.to_lowercase();
    if token.is_empty() || FALSY.contains(&token.as_str()) {
        Some(false)
    } else if TRUTHY.contains(&token.as_str()) {
        Some(true)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_import() {
        let csv = "\
name,is_under_18
Maria Lopez,false
Devon Carter,true
";
        let import = import_staff_csv(csv).unwrap();
        assert!(import.errors.is_empty());
        assert_eq!(import.staff.len(), 2);
        assert_eq!(import.staff[0].name, "Maria Lopez");
        assert!(!import.staff[0].is_under_18);
        assert!(import.staff[1].is_under_18);
    }

    #[test]
    fn test_boolean_token_variants() {
        let csv = "\
name,is_under_18
A One,yes
B Two,1
C Three,no
D Four,0
E Five,
F Six,TRUE
";
        let import = import_staff_csv(csv).unwrap();
        assert!(import.errors.is_empty());
        let flags: Vec<bool> = import.staff.iter().map(|s| s.is_under_18).collect();
        assert_eq!(flags, vec![true, true, false, false, false, true]);
    }

    #[test]
    fn test_is_under_18_column_is_optional() {
        let csv = "name\nMaria Lopez\n";
        let import = import_staff_csv(csv).unwrap();
        assert!(!import.staff[0].is_under_18);
    }

    #[test]
    fn test_missing_header_is_fatal() {
        match import_staff_csv("") {
            Err(EngineError::CsvImport { message }) => assert!(message.contains("empty")),
            other => panic!("expected CsvImport, got {:?}", other),
        }

        match import_staff_csv("first,last\nMaria,Lopez\n") {
            Err(EngineError::CsvImport { message }) => assert!(message.contains("'name'")),
            other => panic!("expected CsvImport, got {:?}", other),
        }
    }

    #[test]
    fn test_row_errors_are_collected_not_fatal() {
        let csv = "\
name,is_under_18
Maria Lopez,false
,true
Devon Carter,maybe
Sam Waters,no
";
        let import = import_staff_csv(csv).unwrap();
        assert_eq!(import.staff.len(), 2);
        assert_eq!(import.errors.len(), 2);

        match &import.errors[0] {
            EngineError::CsvRow { row, message } => {
                assert_eq!(*row, 3);
                assert!(message.contains("'name'"));
            }
            other => panic!("expected CsvRow, got {:?}", other),
        }
        match &import.errors[1] {
            EngineError::CsvRow { row, message } => {
                assert_eq!(*row, 4);
                assert!(message.contains("maybe"));
            }
            other => panic!("expected CsvRow, got {:?}", other),
        }
    }

    #[test]
    fn test_id_column_is_honored_when_present() {
        let csv = "\
id,name,is_under_18
stf_001,Maria Lopez,false
,Devon Carter,false
";
        let import = import_staff_csv(csv).unwrap();
        assert_eq!(import.staff[0].id, "stf_001");
        // A blank id cell still gets a generated identifier.
        assert!(!import.staff[1].id.is_empty());
        assert_ne!(import.staff[1].id, import.staff[0].id);
    }

    #[test]
    fn test_header_matching_is_case_insensitive() {
        let csv = "Name,Is_Under_18\nMaria Lopez,true\n";
        let import = import_staff_csv(csv).unwrap();
        assert!(import.staff[0].is_under_18);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let csv = "name\n\nMaria Lopez\n\nDevon Carter\n";
        let import = import_staff_csv(csv).unwrap();
        assert_eq!(import.staff.len(), 2);
    }
}
