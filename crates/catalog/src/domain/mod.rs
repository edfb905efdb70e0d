mod request;
mod response;

pub use self::request::{
    CreateCategoryRequest, FindAllCategoryRequest, SortDirection, SortField,
    UpdateCategoryRequest,
};

pub use self::response::{
    ApiResponse, ApiResponsePagination, CategoryResponse, ErrorResponse, Pagination,
};
