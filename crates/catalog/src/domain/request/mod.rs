mod category;

pub use self::category::{
    CreateCategoryRequest, FindAllCategoryRequest, SortDirection, SortField,
    UpdateCategoryRequest,
};
