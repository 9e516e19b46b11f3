use diesel::result::Error as DieselError;
use validator::ValidationErrors;

use crate::data::models::ProgressError;

impl From<DieselError> for ProgressError {
    fn from(err: DieselError) -> Self {
        ProgressError::DatabaseError(err)
    }
}

impl From<r2d2::Error> for ProgressError {
    fn from(err: r2d2::Error) -> Self {
        ProgressError::PoolError(err)
    }
}

impl From<ValidationErrors> for ProgressError {
    fn from(err: ValidationErrors) -> Self {
        ProgressError::ValidationError(err.to_string())
    }
}
