use askama::Template;

use crate::models::SectionRow;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub subjects: Vec<String>,
    pub terms: Vec<String>,
    pub rows: Vec<SectionRow>,
    pub message: String,
    pub searched: bool,
}

#[derive(Template)]
#[template(path = "results.html")]
pub struct ResultsTemplate {
    pub rows: Vec<SectionRow>,
    pub message: String,
    pub searched: bool,
}
