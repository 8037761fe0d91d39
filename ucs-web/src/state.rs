use std::sync::Arc;

use ucs_core::CourseCatalog;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CourseCatalog>,
}
