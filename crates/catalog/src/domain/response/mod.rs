mod api;
mod category;
mod error;

pub use self::api::{ApiResponse, ApiResponsePagination, Pagination};
pub use self::category::CategoryResponse;
pub use self::error::ErrorResponse;
