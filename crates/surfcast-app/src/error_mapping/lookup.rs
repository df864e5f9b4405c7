use crate::services::LookupServiceError;
use surfcast_core::{AppError, SurfError};

impl From<LookupServiceError> for AppError {
    fn from(e: LookupServiceError) -> Self {
        match e {
            LookupServiceError::LocationNotFound(s) => AppError::Surf(SurfError::LocationNotFound(s)),
            LookupServiceError::Failed(s) => AppError::Surf(SurfError::LookupFailed(s)),
        }
    }
}
