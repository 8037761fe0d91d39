use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CatalogError, Result};

/// One scheduled class section.
///
/// The display-only fields stay optional because the feed leaves them null
/// for sections without a fixed meeting pattern or assigned instructor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassSection {
    pub term_desc: String,
    pub subject: String,
    pub catalog_number: String,
    pub class_section: String,
    pub class_title: String,
    pub class_number: String,
    pub meeting_days: Option<String>,
    pub meeting_time_start: Option<String>,
    pub meeting_time_end: Option<String>,
    pub instructor: Option<String>,
}

/// Top-level envelope of the courses feed.
#[derive(Debug, Deserialize)]
pub struct ScheduleFeed {
    pub class_schedules: ClassScheduleTable,
}

impl ScheduleFeed {
    pub fn from_json(payload: &str) -> Result<Self> {
        Ok(serde_json::from_str(payload)?)
    }
}

/// Columnar table as the feed delivers it: `columns` names the fields and
/// each element of `records` is a row array aligned with `columns`.
#[derive(Debug, Deserialize)]
pub struct ClassScheduleTable {
    pub columns: Vec<String>,
    pub records: Vec<Vec<Value>>,
}

impl ClassScheduleTable {
    /// Materialize the row arrays into class sections, keeping only the
    /// columns the catalog works with. The feed carries more columns than
    /// we display; they are dropped here.
    pub fn into_sections(self) -> Result<Vec<ClassSection>> {
        let index = ColumnIndex::resolve(&self.columns)?;
        Ok(self
            .records
            .iter()
            .map(|row| index.section(row))
            .collect())
    }
}

/// Positions of the kept columns within a feed row.
struct ColumnIndex {
    term_desc: usize,
    subject: usize,
    catalog_number: usize,
    class_section: usize,
    class_title: usize,
    class_number: usize,
    meeting_days: usize,
    meeting_time_start: usize,
    meeting_time_end: usize,
    instructor: usize,
}

impl ColumnIndex {
    fn resolve(columns: &[String]) -> Result<Self> {
        let find = |name: &str| {
            columns
                .iter()
                .position(|column| column == name)
                .ok_or_else(|| CatalogError::MissingColumn(name.to_string()))
        };

        Ok(Self {
            term_desc: find("term_desc")?,
            subject: find("subject")?,
            catalog_number: find("catalog_number")?,
            class_section: find("class_section")?,
            class_title: find("class_title")?,
            class_number: find("class_number")?,
            meeting_days: find("meeting_days")?,
            meeting_time_start: find("meeting_time_start")?,
            meeting_time_end: find("meeting_time_end")?,
            instructor: find("instructor")?,
        })
    }

    fn section(&self, row: &[Value]) -> ClassSection {
        ClassSection {
            term_desc: cell(row, self.term_desc).unwrap_or_default(),
            subject: cell(row, self.subject).unwrap_or_default(),
            catalog_number: cell(row, self.catalog_number).unwrap_or_default(),
            class_section: cell(row, self.class_section).unwrap_or_default(),
            class_title: cell(row, self.class_title).unwrap_or_default(),
            class_number: cell(row, self.class_number).unwrap_or_default(),
            meeting_days: cell(row, self.meeting_days),
            meeting_time_start: cell(row, self.meeting_time_start),
            meeting_time_end: cell(row, self.meeting_time_end),
            instructor: cell(row, self.instructor),
        }
    }
}

/// Read one cell as text. Rows shorter than the column list read missing
/// trailing cells as null; numeric cells keep their JSON rendering.
fn cell(row: &[Value], index: usize) -> Option<String> {
    match row.get(index) {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text.clone()),
        Some(other) => Some(other.to_string()),
    }
}
