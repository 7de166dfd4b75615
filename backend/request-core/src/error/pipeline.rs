use common::ErrorLocation;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum PipelineError {
    #[error("Pipeline Build Error: missing {component} {location}")]
    MissingComponent {
        component: &'static str,
        location: ErrorLocation,
    },
}

impl PipelineError {
    #[track_caller]
    pub fn missing(component: &'static str) -> Self {
        PipelineError::MissingComponent {
            component,
            location: ErrorLocation::capture(),
        }
    }
}
