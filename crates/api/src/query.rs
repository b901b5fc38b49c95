//! Shared query parameter types for API handlers.
//!
//! Common query structs that appear across multiple handler modules are
//! extracted here to avoid duplication.

use serde::Deserialize;

/// Generic pagination parameters (`?limit=&offset=`).
///
/// Used by any handler that supports paginated listing. Values are clamped
/// in the repository layer.
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Active-language selector (`?lang=`).
///
/// Exactly `en` and `zh` are meaningful; anything else resolves to `en`
/// via `Language::parse`, so the field stays a plain string here.
#[derive(Debug, Deserialize)]
pub struct LangParams {
    pub lang: Option<String>,
}
