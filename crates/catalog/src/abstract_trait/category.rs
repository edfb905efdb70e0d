use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{
    ApiResponse, ApiResponsePagination, CategoryResponse, CreateCategoryRequest, ErrorResponse,
    FindAllCategoryRequest, SortDirection, SortField, UpdateCategoryRequest,
};
use crate::model::category::Category;
use crate::utils::AppError;

pub type DynCategoryRepository = Arc<dyn CategoryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CategoryRepositoryTrait {
    async fn find_all(
        &self,
        page: i32,
        page_size: i32,
        sort_by: SortField,
        sort_order: SortDirection,
    ) -> Result<(Vec<Category>, i64), AppError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Category>, AppError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, AppError>;
    async fn create(&self, input: &CreateCategoryRequest) -> Result<Category, AppError>;
    async fn update(&self, input: &UpdateCategoryRequest) -> Result<Category, AppError>;
    /// Removes the category and its dependent products in one
    /// transaction, returning the row as it was before removal.
    async fn delete(&self, id: i32) -> Result<Category, AppError>;
}

pub type DynCategoryService = Arc<dyn CategoryServiceTrait + Send + Sync>;

#[async_trait]
pub trait CategoryServiceTrait {
    async fn find_all(
        &self,
        req: &FindAllCategoryRequest,
    ) -> Result<ApiResponsePagination<Vec<CategoryResponse>>, ErrorResponse>;
    async fn create(
        &self,
        req: &CreateCategoryRequest,
    ) -> Result<ApiResponse<CategoryResponse>, ErrorResponse>;
    async fn update(
        &self,
        req: &UpdateCategoryRequest,
    ) -> Result<ApiResponse<CategoryResponse>, ErrorResponse>;
    async fn delete(&self, id: i32) -> Result<ApiResponse<CategoryResponse>, ErrorResponse>;
}
