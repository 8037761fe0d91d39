use chrono::NaiveTime;
use serde::Deserialize;

use ucs_core::ClassSection;

/// Raw search inputs from the form or query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    pub subject: Option<String>,
    pub catalog_number: Option<String>,
    pub term: Option<String>,
}

/// One table row, pruned and renamed for display.
#[derive(Debug, Clone)]
pub struct SectionRow {
    pub term: String,
    pub subject: String,
    pub catalog_number: String,
    pub section: String,
    pub title: String,
    pub class_number: String,
    pub days: String,
    pub time: String,
    pub instructor: String,
}

impl From<&ClassSection> for SectionRow {
    fn from(section: &ClassSection) -> Self {
        Self {
            term: section.term_desc.clone(),
            subject: section.subject.clone(),
            catalog_number: section.catalog_number.clone(),
            section: section.class_section.clone(),
            title: section.class_title.clone(),
            class_number: section.class_number.clone(),
            days: text_or(section.meeting_days.as_deref(), "TBA"),
            time: format_time_range(
                section.meeting_time_start.as_deref(),
                section.meeting_time_end.as_deref(),
            ),
            instructor: text_or(section.instructor.as_deref(), "Staff"),
        }
    }
}

fn text_or(value: Option<&str>, fallback: &str) -> String {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => fallback.to_string(),
    }
}

/// Combine start and end into one display range, e.g. "2:00 PM - 3:15 PM".
fn format_time_range(start: Option<&str>, end: Option<&str>) -> String {
    match (start, end) {
        (Some(start), Some(end)) => format!("{} - {}", tidy_time(start), tidy_time(end)),
        (Some(start), None) => tidy_time(start),
        _ => "TBA".to_string(),
    }
}

/// Render a feed time on a 12-hour clock when it parses, otherwise pass the
/// raw text through.
fn tidy_time(raw: &str) -> String {
    // The feed is inconsistent about time encodings; try the ones seen so far.
    let formats = ["%H:%M:%S", "%H:%M", "%H.%M.%S%.6f", "%I:%M %p"];

    let trimmed = raw.trim();
    for format in &formats {
        if let Ok(time) = NaiveTime::parse_from_str(trimmed, format) {
            return time.format("%-I:%M %p").to_string();
        }
    }
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_section() -> ClassSection {
        ClassSection {
            term_desc: "2023 Spring".to_string(),
            subject: "APMA".to_string(),
            catalog_number: "1110".to_string(),
            class_section: "001".to_string(),
            class_title: "Single Variable Calculus".to_string(),
            class_number: "12345".to_string(),
            meeting_days: Some("MoWeFr".to_string()),
            meeting_time_start: Some("14:00".to_string()),
            meeting_time_end: Some("15:15".to_string()),
            instructor: Some("Tessier, Peter".to_string()),
        }
    }

    #[test]
    fn renders_times_on_a_twelve_hour_clock() {
        assert_eq!(tidy_time("14:00"), "2:00 PM");
        assert_eq!(tidy_time("09:30:00"), "9:30 AM");
        assert_eq!(tidy_time("12:00"), "12:00 PM");
        assert_eq!(tidy_time("00:15"), "12:15 AM");
    }

    #[test]
    fn unparseable_times_pass_through() {
        assert_eq!(tidy_time("by appointment"), "by appointment");
    }

    #[test]
    fn absent_times_render_as_tba() {
        assert_eq!(format_time_range(None, None), "TBA");
        assert_eq!(format_time_range(Some("14:00"), None), "2:00 PM");
    }

    #[test]
    fn row_prunes_and_renames_for_display() {
        let row = SectionRow::from(&sample_section());
        assert_eq!(row.term, "2023 Spring");
        assert_eq!(row.time, "2:00 PM - 3:15 PM");
        assert_eq!(row.days, "MoWeFr");
    }

    #[test]
    fn blank_display_cells_fall_back() {
        let mut section = sample_section();
        section.meeting_days = Some("  ".to_string());
        section.instructor = None;

        let row = SectionRow::from(&section);
        assert_eq!(row.days, "TBA");
        assert_eq!(row.instructor, "Staff");
    }
}
