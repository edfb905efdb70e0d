use crate::abstract_trait::CategoryRepositoryTrait;
use crate::config::ConnectionPool;
use crate::domain::{CreateCategoryRequest, SortDirection, SortField, UpdateCategoryRequest};
use crate::model::category::Category;
use crate::schema::category::Categories;
use crate::schema::product::Products;
use crate::utils::AppError;
use anyhow::Result;
use async_trait::async_trait;
use sea_query::{Expr, Func, Order, PostgresQueryBuilder, Query};
use sea_query_binder::SqlxBinder;
use tracing::{error, info};

pub struct CategoryRepository {
    db_pool: ConnectionPool,
}

impl CategoryRepository {
    pub fn new(db_pool: ConnectionPool) -> Self {
        Self { db_pool }
    }
}

fn sort_column(field: SortField) -> Categories {
    match field {
        SortField::Id => Categories::Id,
        SortField::Name => Categories::Name,
    }
}

fn sort_direction(direction: SortDirection) -> Order {
    match direction {
        SortDirection::Asc => Order::Asc,
        SortDirection::Desc => Order::Desc,
    }
}

#[async_trait]
impl CategoryRepositoryTrait for CategoryRepository {
    async fn find_all(
        &self,
        page: i32,
        page_size: i32,
        sort_by: SortField,
        sort_order: SortDirection,
    ) -> Result<(Vec<Category>, i64), AppError> {
        info!("Getting all categories - page: {page}, page_size: {page_size}, sort: {sort_by:?} {sort_order:?}");

        // Page is a zero-based index; the service layer has already
        // rejected negative values.
        let offset = (page as i64) * (page_size as i64);

        let (sql, values) = Query::select()
            .columns([Categories::Id, Categories::Name])
            .from(Categories::Table)
            .order_by(sort_column(sort_by), sort_direction(sort_order))
            .limit(page_size as u64)
            .offset(offset as u64)
            .build_sqlx(PostgresQueryBuilder);

        let categories_result = sqlx::query_as_with::<_, Category, _>(&sql, values)
            .fetch_all(&self.db_pool)
            .await;

        let categories = match categories_result {
            Ok(cats) => cats,
            Err(e) => {
                error!("Error fetching categories: {e}");
                return Err(AppError::SqlxError(e));
            }
        };

        let (count_sql, count_values) = Query::select()
            .expr(Func::count(Expr::col(Categories::Id)))
            .from(Categories::Table)
            .build_sqlx(PostgresQueryBuilder);

        let total_result = sqlx::query_as_with::<_, (i64,), _>(&count_sql, count_values)
            .fetch_one(&self.db_pool)
            .await;

        let total = match total_result {
            Ok(count) => count.0,
            Err(e) => {
                error!("Error counting categories: {e}");
                return Err(AppError::SqlxError(e));
            }
        };

        info!("Found {} categories out of total {total}", categories.len());

        Ok((categories, total))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Category>, AppError> {
        info!("Finding category by id: {id}");

        let (sql, values) = Query::select()
            .columns([Categories::Id, Categories::Name])
            .from(Categories::Table)
            .and_where(Expr::col(Categories::Id).eq(id))
            .build_sqlx(PostgresQueryBuilder);

        let result = sqlx::query_as_with::<_, Category, _>(&sql, values)
            .fetch_optional(&self.db_pool)
            .await
            .map_err(AppError::from)?;

        Ok(result)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, AppError> {
        info!("Finding category by name: {name}");

        let (sql, values) = Query::select()
            .columns([Categories::Id, Categories::Name])
            .from(Categories::Table)
            .and_where(Expr::col(Categories::Name).eq(name))
            .build_sqlx(PostgresQueryBuilder);

        let result = sqlx::query_as_with::<_, Category, _>(&sql, values)
            .fetch_optional(&self.db_pool)
            .await
            .map_err(AppError::from)?;

        Ok(result)
    }

    async fn create(&self, input: &CreateCategoryRequest) -> Result<Category, AppError> {
        info!("Creating new category: {:?}", input.name);

        // The request shape carries no id, so the store always
        // assigns a fresh one.
        let insert = Query::insert()
            .into_table(Categories::Table)
            .columns([Categories::Name])
            .values([input.name.clone().into()])
            .unwrap()
            .returning(Query::returning().columns([Categories::Id, Categories::Name]))
            .to_owned()
            .build_sqlx(PostgresQueryBuilder);

        let (sql, values) = insert;

        let result = sqlx::query_as_with::<_, Category, _>(&sql, values)
            .fetch_one(&self.db_pool)
            .await
            .map_err(AppError::from)?;

        info!("New category inserted with ID: {}", result.id);

        Ok(result)
    }

    async fn update(&self, input: &UpdateCategoryRequest) -> Result<Category, AppError> {
        info!(
            "Updating category ID {} with new name '{}'",
            input.id, input.name
        );

        // Full replace: every mutable column is overwritten from the
        // request.
        let (sql, values) = Query::update()
            .table(Categories::Table)
            .values([(Categories::Name, Expr::val(input.name.clone()).into())])
            .and_where(Expr::col(Categories::Id).eq(input.id))
            .returning(Query::returning().columns([Categories::Id, Categories::Name]))
            .build_sqlx(PostgresQueryBuilder);

        let updated = sqlx::query_as_with::<_, Category, _>(&sql, values)
            .fetch_optional(&self.db_pool)
            .await
            .map_err(AppError::from)?;

        match updated {
            Some(category) => {
                info!("Successfully updated category ID {}", input.id);
                Ok(category)
            }
            None => {
                error!("Category ID {} not found for update", input.id);
                Err(AppError::NotFound(format!(
                    "Category with ID {} not found",
                    input.id
                )))
            }
        }
    }

    async fn delete(&self, id: i32) -> Result<Category, AppError> {
        info!("Deleting category with ID: {id}");

        let category = self.find_by_id(id).await?.ok_or_else(|| {
            error!("No category found to delete with ID: {id}");
            AppError::NotFound(format!("Category with ID {id} not found"))
        })?;

        // Dependent products go first, in the same transaction as the
        // category row.
        let mut tx = self.db_pool.begin().await?;

        let (product_sql, product_values) = Query::delete()
            .from_table(Products::Table)
            .and_where(Expr::col(Products::CategoryId).eq(id))
            .build_sqlx(PostgresQueryBuilder);

        let removed_products = sqlx::query_with(&product_sql, product_values)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let (sql, values) = Query::delete()
            .from_table(Categories::Table)
            .and_where(Expr::col(Categories::Id).eq(id))
            .build_sqlx(PostgresQueryBuilder);

        sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        tx.commit().await?;

        info!("Category ID: {id} deleted successfully along with {removed_products} products");

        Ok(category)
    }
}
