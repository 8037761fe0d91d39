use crate::domain::ClassSection;
use crate::error::{CatalogError, Result};

/// Read-only table of class sections, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct CourseCatalog {
    sections: Vec<ClassSection>,
}

impl CourseCatalog {
    pub fn new(sections: Vec<ClassSection>) -> Self {
        Self { sections }
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Distinct subject codes, sorted, for the search form's datalist.
    pub fn subjects(&self) -> Vec<String> {
        let mut subjects: Vec<String> = self
            .sections
            .iter()
            .map(|section| section.subject.clone())
            .collect();
        subjects.sort();
        subjects.dedup();
        subjects
    }

    /// Distinct term descriptions in feed order. The feed lists terms
    /// chronologically, which is the order the dropdown should show.
    pub fn terms(&self) -> Vec<String> {
        let mut terms: Vec<String> = Vec::new();
        for section in &self.sections {
            if !terms.contains(&section.term_desc) {
                terms.push(section.term_desc.clone());
            }
        }
        terms
    }

    /// All rows matching every supplied criterion, in feed order. Absent
    /// criteria match all values of their column. A subject no row carries
    /// yields an empty result, not an error.
    pub fn search(&self, query: &CourseQuery) -> Vec<&ClassSection> {
        self.sections
            .iter()
            .filter(|section| query.matches(section))
            .collect()
    }
}

/// A parsed search. Subject is required; the rest are wildcards when absent.
#[derive(Debug, Clone)]
pub struct CourseQuery {
    pub subject: String,
    pub catalog_number: Option<String>,
    pub term_desc: Option<String>,
}

impl CourseQuery {
    /// Build a query from raw form inputs.
    ///
    /// Inputs are trimmed and empty optional inputs act as wildcards. The
    /// subject is uppercased to match the feed's subject codes; a missing or
    /// blank subject is an error.
    pub fn parse(
        subject: Option<&str>,
        catalog_number: Option<&str>,
        term_desc: Option<&str>,
    ) -> Result<Self> {
        let subject = non_empty(subject)
            .ok_or(CatalogError::MissingSubject)?
            .to_uppercase();

        Ok(Self {
            subject,
            catalog_number: non_empty(catalog_number),
            term_desc: non_empty(term_desc),
        })
    }

    /// True when the section satisfies every supplied criterion.
    fn matches(&self, section: &ClassSection) -> bool {
        if section.subject != self.subject {
            return false;
        }
        if let Some(catalog_number) = &self.catalog_number {
            if section.catalog_number != *catalog_number {
                return false;
            }
        }
        if let Some(term_desc) = &self.term_desc {
            if section.term_desc != *term_desc {
                return false;
            }
        }
        true
    }
}

fn non_empty(input: Option<&str>) -> Option<String> {
    input
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(term: &str, subject: &str, catalog: &str, title: &str) -> ClassSection {
        ClassSection {
            term_desc: term.to_string(),
            subject: subject.to_string(),
            catalog_number: catalog.to_string(),
            class_section: "001".to_string(),
            class_title: title.to_string(),
            class_number: "10001".to_string(),
            meeting_days: Some("MoWe".to_string()),
            meeting_time_start: Some("14:00".to_string()),
            meeting_time_end: Some("15:15".to_string()),
            instructor: Some("Staff".to_string()),
        }
    }

    fn sample_catalog() -> CourseCatalog {
        CourseCatalog::new(vec![
            section("2022 Fall", "APMA", "1110", "Single Variable Calculus"),
            section("2023 Spring", "APMA", "1110", "Single Variable Calculus"),
            section("2023 Spring", "APMA", "2120", "Multivariable Calculus"),
            section("2023 Spring", "CS", "2100", "Data Structures and Algorithms 1"),
        ])
    }

    #[test]
    fn all_criteria_are_conjoined() {
        let catalog = sample_catalog();
        let query = CourseQuery::parse(Some("APMA"), Some("1110"), Some("2023 Spring")).unwrap();

        let results = catalog.search(&query);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].term_desc, "2023 Spring");
        assert_eq!(results[0].catalog_number, "1110");
    }

    #[test]
    fn omitted_criteria_match_all_values() {
        let catalog = sample_catalog();
        let query = CourseQuery::parse(Some("APMA"), None, None).unwrap();

        // Subject-only search spans terms and catalog numbers.
        assert_eq!(catalog.search(&query).len(), 3);

        let query = CourseQuery::parse(Some("APMA"), Some("1110"), None).unwrap();
        assert_eq!(catalog.search(&query).len(), 2);
    }

    #[test]
    fn returned_iff_every_supplied_criterion_matches() {
        let catalog = sample_catalog();
        let query = CourseQuery::parse(Some("APMA"), None, Some("2023 Spring")).unwrap();
        let results = catalog.search(&query);

        for row in &results {
            assert_eq!(row.subject, "APMA");
            assert_eq!(row.term_desc, "2023 Spring");
        }
        // Nothing satisfying the criteria was left out.
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn unknown_subject_yields_empty_result_not_error() {
        let catalog = sample_catalog();
        let query = CourseQuery::parse(Some("NOPE"), None, None).unwrap();
        assert!(catalog.search(&query).is_empty());
    }

    #[test]
    fn missing_or_blank_subject_is_an_error() {
        assert!(matches!(
            CourseQuery::parse(None, None, None),
            Err(CatalogError::MissingSubject)
        ));
        assert!(matches!(
            CourseQuery::parse(Some("   "), Some("1110"), None),
            Err(CatalogError::MissingSubject)
        ));
    }

    #[test]
    fn subject_input_is_case_insensitive() {
        let catalog = sample_catalog();
        let query = CourseQuery::parse(Some("apma"), None, None).unwrap();
        assert_eq!(catalog.search(&query).len(), 3);
    }

    #[test]
    fn blank_optional_inputs_act_as_wildcards() {
        let catalog = sample_catalog();
        let query = CourseQuery::parse(Some(" cs "), Some("  "), Some("")).unwrap();

        let results = catalog.search(&query);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].subject, "CS");
    }

    #[test]
    fn distinct_subjects_are_sorted() {
        let catalog = sample_catalog();
        assert_eq!(catalog.subjects(), vec!["APMA", "CS"]);
    }

    #[test]
    fn terms_keep_feed_order() {
        let catalog = sample_catalog();
        assert_eq!(catalog.terms(), vec!["2022 Fall", "2023 Spring"]);
    }
}
