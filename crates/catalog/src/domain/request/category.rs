use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Serialize, Deserialize, Clone, Debug, IntoParams)]
pub struct FindAllCategoryRequest {
    /// Zero-based page index.
    #[serde(default)]
    pub page: i32,

    #[serde(default = "default_page_size")]
    pub page_size: i32,

    #[serde(default)]
    pub sort_by: Option<String>,

    #[serde(default)]
    pub sort_order: Option<String>,
}

fn default_page_size() -> i32 {
    10
}

/// Columns a category listing may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Name,
}

impl SortField {
    /// Absent means the default (`Id`); an unknown field is rejected
    /// at the service layer, so this returns `None` rather than
    /// guessing.
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        match raw {
            None => Some(SortField::Id),
            Some(s) if s.eq_ignore_ascii_case("id") => Some(SortField::Id),
            Some(s) if s.eq_ignore_ascii_case("name") => Some(SortField::Name),
            Some(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Case-insensitive `"asc"` sorts ascending; absent or anything
    /// else falls back to descending instead of failing.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(s) if s.eq_ignore_ascii_case("asc") => SortDirection::Asc,
            _ => SortDirection::Desc,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema, Validate)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 5, message = "Category name must contain at least 5 characters"))]
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema, Validate)]
pub struct UpdateCategoryRequest {
    #[validate(range(min = 1, message = "ID must be greater than 0"))]
    pub id: i32,

    #[validate(length(min = 5, message = "Category name must contain at least 5 characters"))]
    pub name: String,
}
