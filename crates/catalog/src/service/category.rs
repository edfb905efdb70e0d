use crate::{
    abstract_trait::{CategoryServiceTrait, DynCategoryRepository},
    domain::{
        ApiResponse, ApiResponsePagination, CategoryResponse, CreateCategoryRequest,
        ErrorResponse, FindAllCategoryRequest, Pagination, SortDirection, SortField,
        UpdateCategoryRequest,
    },
    utils::AppError,
};
use async_trait::async_trait;
use tracing::{error, info};
use validator::Validate;

#[derive(Clone)]
pub struct CategoryService {
    repository: DynCategoryRepository,
}

impl std::fmt::Debug for CategoryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CategoryService")
            .field("repository", &"DynCategoryRepository")
            .finish()
    }
}

impl CategoryService {
    pub fn new(repository: DynCategoryRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CategoryServiceTrait for CategoryService {
    async fn find_all(
        &self,
        req: &FindAllCategoryRequest,
    ) -> Result<ApiResponsePagination<Vec<CategoryResponse>>, ErrorResponse> {
        if req.page < 0 {
            return Err(ErrorResponse::from(AppError::InvalidArgument(format!(
                "Page number must not be negative, got {}",
                req.page
            ))));
        }
        if req.page_size < 0 {
            return Err(ErrorResponse::from(AppError::InvalidArgument(format!(
                "Page size must not be negative, got {}",
                req.page_size
            ))));
        }

        let page = req.page;
        let page_size = if req.page_size > 0 { req.page_size } else { 10 };

        let sort_by = SortField::parse(req.sort_by.as_deref()).ok_or_else(|| {
            ErrorResponse::from(AppError::InvalidArgument(format!(
                "Unknown sort field '{}'",
                req.sort_by.as_deref().unwrap_or_default()
            )))
        })?;

        // Absent or unrecognized order falls back to descending
        // instead of failing the call.
        let sort_order = SortDirection::parse(req.sort_order.as_deref());

        info!("Listing categories - page: {page}, page_size: {page_size}");

        match self
            .repository
            .find_all(page, page_size, sort_by, sort_order)
            .await
        {
            Ok((categories, total_items)) => {
                let category_responses = categories
                    .into_iter()
                    .map(CategoryResponse::from)
                    .collect::<Vec<_>>();

                // An empty page is a valid result, not an error.
                Ok(ApiResponsePagination {
                    status: "success".to_string(),
                    message: "Categories retrieved successfully".to_string(),
                    data: category_responses,
                    pagination: Pagination::new(page, page_size, total_items),
                })
            }
            Err(err) => {
                error!("Failed to retrieve categories: {err}");
                Err(ErrorResponse::from(err))
            }
        }
    }

    async fn create(
        &self,
        input: &CreateCategoryRequest,
    ) -> Result<ApiResponse<CategoryResponse>, ErrorResponse> {
        if let Err(e) = input.validate() {
            return Err(ErrorResponse::from(AppError::Validation(e.to_string())));
        }

        // Check-then-insert is two store calls with no enclosing
        // transaction; a storage-level unique constraint would be
        // needed for a hard guarantee.
        match self.repository.find_by_name(&input.name).await {
            Ok(Some(_)) => {
                error!("Category with the name {} already exists", input.name);
                return Err(ErrorResponse::from(AppError::Conflict(format!(
                    "Category with the name {} already exists",
                    input.name
                ))));
            }
            Ok(None) => {}
            Err(err) => {
                error!("Failed to check for existing category: {err}");
                return Err(ErrorResponse::from(err));
            }
        }

        match self.repository.create(input).await {
            Ok(category) => {
                info!("Category created with ID {}", category.id);

                Ok(ApiResponse {
                    status: "success".to_string(),
                    message: "Category created successfully".to_string(),
                    data: CategoryResponse::from(category),
                })
            }
            Err(err) => {
                error!("Category creation failed: {err}");
                Err(ErrorResponse::from(err))
            }
        }
    }

    async fn update(
        &self,
        input: &UpdateCategoryRequest,
    ) -> Result<ApiResponse<CategoryResponse>, ErrorResponse> {
        if let Err(e) = input.validate() {
            return Err(ErrorResponse::from(AppError::Validation(e.to_string())));
        }

        match self.repository.update(input).await {
            Ok(category) => {
                info!("Category ID {} updated", category.id);

                Ok(ApiResponse {
                    status: "success".to_string(),
                    message: "Category updated successfully".to_string(),
                    data: CategoryResponse::from(category),
                })
            }
            Err(err) => {
                error!("Category update failed: {err}");
                Err(ErrorResponse::from(err))
            }
        }
    }

    async fn delete(&self, id: i32) -> Result<ApiResponse<CategoryResponse>, ErrorResponse> {
        match self.repository.delete(id).await {
            Ok(category) => {
                info!("Category ID {id} deleted");

                // The row captured before removal comes back to the
                // caller.
                Ok(ApiResponse {
                    status: "success".to_string(),
                    message: "Category deleted successfully".to_string(),
                    data: CategoryResponse::from(category),
                })
            }
            Err(err) => {
                error!("Failed to delete category: {err}");
                Err(ErrorResponse::from(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abstract_trait::CategoryRepositoryTrait;
    use crate::model::category::Category;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct MockCategoryRepository {
        categories: Mutex<Vec<Category>>,
        next_id: Mutex<i32>,
    }

    impl MockCategoryRepository {
        fn seeded(names: &[&str]) -> Arc<Self> {
            let repo = Arc::new(Self::default());
            {
                let mut categories = repo.categories.lock().unwrap();
                let mut next_id = repo.next_id.lock().unwrap();
                for name in names {
                    *next_id += 1;
                    categories.push(Category {
                        id: *next_id,
                        name: name.to_string(),
                    });
                }
            }
            repo
        }
    }

    #[async_trait]
    impl CategoryRepositoryTrait for MockCategoryRepository {
        async fn find_all(
            &self,
            page: i32,
            page_size: i32,
            sort_by: SortField,
            sort_order: SortDirection,
        ) -> Result<(Vec<Category>, i64), AppError> {
            let mut categories = self.categories.lock().unwrap().clone();

            match sort_by {
                SortField::Id => categories.sort_by_key(|c| c.id),
                SortField::Name => categories.sort_by(|a, b| a.name.cmp(&b.name)),
            }
            if sort_order == SortDirection::Desc {
                categories.reverse();
            }

            let total = categories.len() as i64;
            let paged = categories
                .into_iter()
                .skip(page as usize * page_size as usize)
                .take(page_size as usize)
                .collect();

            Ok((paged, total))
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<Category>, AppError> {
            let categories = self.categories.lock().unwrap();
            Ok(categories.iter().find(|c| c.id == id).cloned())
        }

        async fn find_by_name(&self, name: &str) -> Result<Option<Category>, AppError> {
            let categories = self.categories.lock().unwrap();
            Ok(categories.iter().find(|c| c.name == name).cloned())
        }

        async fn create(&self, input: &CreateCategoryRequest) -> Result<Category, AppError> {
            let mut categories = self.categories.lock().unwrap();
            let mut next_id = self.next_id.lock().unwrap();
            *next_id += 1;

            let category = Category {
                id: *next_id,
                name: input.name.clone(),
            };
            categories.push(category.clone());

            Ok(category)
        }

        async fn update(&self, input: &UpdateCategoryRequest) -> Result<Category, AppError> {
            let mut categories = self.categories.lock().unwrap();
            match categories.iter_mut().find(|c| c.id == input.id) {
                Some(category) => {
                    category.name = input.name.clone();
                    Ok(category.clone())
                }
                None => Err(AppError::NotFound(format!(
                    "Category with ID {} not found",
                    input.id
                ))),
            }
        }

        async fn delete(&self, id: i32) -> Result<Category, AppError> {
            let mut categories = self.categories.lock().unwrap();
            match categories.iter().position(|c| c.id == id) {
                Some(index) => Ok(categories.remove(index)),
                None => Err(AppError::NotFound(format!(
                    "Category with ID {id} not found"
                ))),
            }
        }
    }

    fn service(repo: Arc<MockCategoryRepository>) -> CategoryService {
        CategoryService::new(repo)
    }

    fn list_request() -> FindAllCategoryRequest {
        FindAllCategoryRequest {
            page: 0,
            page_size: 10,
            sort_by: None,
            sort_order: None,
        }
    }

    #[tokio::test]
    async fn find_all_on_empty_store_returns_empty_page() {
        let svc = service(MockCategoryRepository::seeded(&[]));

        let res = svc.find_all(&list_request()).await.unwrap();

        assert!(res.data.is_empty());
        assert_eq!(res.pagination.total_items, 0);
        assert_eq!(res.pagination.total_pages, 0);
        assert!(res.pagination.last_page);
    }

    #[tokio::test]
    async fn find_all_defaults_to_descending() {
        let svc = service(MockCategoryRepository::seeded(&[
            "Appliances",
            "Electronics",
            "Furniture",
        ]));

        let res = svc.find_all(&list_request()).await.unwrap();

        let ids: Vec<i32> = res.data.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[tokio::test]
    async fn find_all_sort_order_is_case_insensitive() {
        let svc = service(MockCategoryRepository::seeded(&[
            "Appliances",
            "Electronics",
        ]));

        let mut req = list_request();
        req.sort_order = Some("ASC".to_string());

        let res = svc.find_all(&req).await.unwrap();

        let ids: Vec<i32> = res.data.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn find_all_unrecognized_sort_order_falls_back_to_descending() {
        let svc = service(MockCategoryRepository::seeded(&[
            "Appliances",
            "Electronics",
            "Furniture",
        ]));

        let mut req = list_request();
        req.sort_order = Some("sideways".to_string());

        let res = svc.find_all(&req).await.unwrap();

        let ids: Vec<i32> = res.data.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[tokio::test]
    async fn find_all_sorts_by_name() {
        let svc = service(MockCategoryRepository::seeded(&[
            "Furniture",
            "Appliances",
            "Electronics",
        ]));

        let mut req = list_request();
        req.sort_by = Some("name".to_string());
        req.sort_order = Some("asc".to_string());

        let res = svc.find_all(&req).await.unwrap();

        let names: Vec<&str> = res.data.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Appliances", "Electronics", "Furniture"]);
    }

    #[tokio::test]
    async fn find_all_rejects_negative_page() {
        let svc = service(MockCategoryRepository::seeded(&["Electronics"]));

        let mut req = list_request();
        req.page = -1;

        let err = svc.find_all(&req).await.unwrap_err();
        assert_eq!(err.status, "INVALID_ARGUMENT");
    }

    #[tokio::test]
    async fn find_all_rejects_negative_page_size() {
        let svc = service(MockCategoryRepository::seeded(&["Electronics"]));

        let mut req = list_request();
        req.page_size = -1;

        let err = svc.find_all(&req).await.unwrap_err();
        assert_eq!(err.status, "INVALID_ARGUMENT");
    }

    #[tokio::test]
    async fn find_all_zero_page_size_uses_the_default() {
        let svc = service(MockCategoryRepository::seeded(&[
            "Appliances",
            "Beverages",
            "Electronics",
            "Furniture",
            "Groceries",
            "Hardware",
            "Jewellery",
            "Kitchenware",
            "Lighting",
            "Outdoors",
            "Stationery",
            "Toiletries",
        ]));

        let mut req = list_request();
        req.page_size = 0;

        let res = svc.find_all(&req).await.unwrap();

        assert_eq!(res.data.len(), 10);
        assert_eq!(res.pagination.page_size, 10);
        assert_eq!(res.pagination.total_items, 12);
        assert_eq!(res.pagination.total_pages, 2);
    }

    #[tokio::test]
    async fn find_all_rejects_unknown_sort_field() {
        let svc = service(MockCategoryRepository::seeded(&["Electronics"]));

        let mut req = list_request();
        req.sort_by = Some("price".to_string());

        let err = svc.find_all(&req).await.unwrap_err();
        assert_eq!(err.status, "INVALID_ARGUMENT");
    }

    #[tokio::test]
    async fn find_all_pages_are_bounded_and_counted() {
        let svc = service(MockCategoryRepository::seeded(&[
            "Appliances",
            "Electronics",
            "Furniture",
            "Groceries",
            "Stationery",
        ]));

        let mut req = list_request();
        req.page_size = 2;
        req.sort_order = Some("asc".to_string());

        let first = svc.find_all(&req).await.unwrap();
        assert_eq!(first.data.len(), 2);
        assert_eq!(first.pagination.total_items, 5);
        assert_eq!(first.pagination.total_pages, 3);
        assert!(!first.pagination.last_page);

        req.page = 2;
        let last = svc.find_all(&req).await.unwrap();
        assert_eq!(last.data.len(), 1);
        assert!(last.pagination.last_page);
    }

    #[tokio::test]
    async fn find_all_past_the_end_returns_empty_content() {
        let svc = service(MockCategoryRepository::seeded(&["Electronics"]));

        let mut req = list_request();
        req.page = 7;

        let res = svc.find_all(&req).await.unwrap();
        assert!(res.data.is_empty());
        assert_eq!(res.pagination.total_items, 1);
    }

    #[tokio::test]
    async fn create_assigns_id_and_round_trips_through_list() {
        let svc = service(MockCategoryRepository::seeded(&[]));

        let created = svc
            .create(&CreateCategoryRequest {
                name: "Electronics".to_string(),
            })
            .await
            .unwrap();

        assert!(created.data.id >= 1);

        let listed = svc.find_all(&list_request()).await.unwrap();
        assert_eq!(listed.data, vec![created.data]);
    }

    #[tokio::test]
    async fn create_duplicate_name_is_a_conflict() {
        let svc = service(MockCategoryRepository::seeded(&[]));

        let req = CreateCategoryRequest {
            name: "Shoes".to_string(),
        };

        svc.create(&req).await.unwrap();
        let err = svc.create(&req).await.unwrap_err();

        assert_eq!(err.status, "CONFLICT");
        assert!(err.message.contains("Shoes"));
    }

    #[tokio::test]
    async fn create_short_name_is_rejected() {
        let svc = service(MockCategoryRepository::seeded(&[]));

        let err = svc
            .create(&CreateCategoryRequest {
                name: "Shoe".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.status, "VALIDATION");
    }

    #[tokio::test]
    async fn update_replaces_every_field() {
        let svc = service(MockCategoryRepository::seeded(&["Electronics"]));

        let updated = svc
            .update(&UpdateCategoryRequest {
                id: 1,
                name: "Home Electronics".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(updated.data.id, 1);
        assert_eq!(updated.data.name, "Home Electronics");

        let listed = svc.find_all(&list_request()).await.unwrap();
        assert_eq!(listed.data, vec![updated.data]);
    }

    #[tokio::test]
    async fn update_missing_category_is_not_found() {
        let svc = service(MockCategoryRepository::seeded(&[]));

        let err = svc
            .update(&UpdateCategoryRequest {
                id: 9999,
                name: "Electronics".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.status, "NOT_FOUND");
    }

    #[tokio::test]
    async fn update_short_name_is_rejected() {
        let svc = service(MockCategoryRepository::seeded(&["Electronics"]));

        let err = svc
            .update(&UpdateCategoryRequest {
                id: 1,
                name: "Shoe".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.status, "VALIDATION");
    }

    #[tokio::test]
    async fn delete_returns_the_removed_category() {
        let svc = service(MockCategoryRepository::seeded(&["Electronics"]));

        let deleted = svc.delete(1).await.unwrap();
        assert_eq!(deleted.data.id, 1);
        assert_eq!(deleted.data.name, "Electronics");

        let listed = svc.find_all(&list_request()).await.unwrap();
        assert!(listed.data.is_empty());
    }

    #[tokio::test]
    async fn delete_missing_category_is_not_found() {
        let svc = service(MockCategoryRepository::seeded(&[]));

        let err = svc.delete(9999).await.unwrap_err();
        assert_eq!(err.status, "NOT_FOUND");
    }
}
