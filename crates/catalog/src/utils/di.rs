use std::sync::Arc;

use crate::{
    abstract_trait::{DynCategoryRepository, DynCategoryService},
    config::ConnectionPool,
    repository::CategoryRepository,
    service::CategoryService,
};

#[derive(Clone)]
pub struct DependenciesInject {
    pub category_service: DynCategoryService,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("category_service", &"DynCategoryService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool) -> Self {
        let category_repository =
            Arc::new(CategoryRepository::new(pool)) as DynCategoryRepository;

        let category_service =
            Arc::new(CategoryService::new(category_repository)) as DynCategoryService;

        Self { category_service }
    }
}
