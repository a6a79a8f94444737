//! Catalog search, lookup lists, and delivery quotes

use crate::error::ApiResult;
use crate::model::{Book, Category, Language, LibrarySummary, Page, PublisherSummary, Quote};

use super::client::{ApiClient, PAGE_SIZE, paging};

/// Optional catalog filters; empty filters are left off the query string.
#[derive(Debug, Clone, Default)]
pub struct BookFilter {
    pub category: Option<String>,
    pub language: Option<String>,
    pub library: Option<String>,
    pub title: Option<String>,
}

impl ApiClient {
    /// `GET /api/books/search?page&size` plus any set filters.
    pub async fn search_books(&self, page: u32, filter: &BookFilter) -> ApiResult<Page<Book>> {
        crate::log_api_request!("search_books", page = page);
        let mut query: Vec<(&str, String)> = paging(page, PAGE_SIZE).to_vec();
        if let Some(category) = &filter.category {
            query.push(("category", category.clone()));
        }
        if let Some(language) = &filter.language {
            query.push(("language", language.clone()));
        }
        if let Some(library) = &filter.library {
            query.push(("library", library.clone()));
        }
        if let Some(title) = &filter.title {
            query.push(("title", title.clone()));
        }
        self.get("/api/books/search", &query).await
    }

    /// `GET /api/books/search-book-titles?title` - autocomplete source.
    pub async fn suggest_book_titles(&self, title: &str) -> ApiResult<Vec<String>> {
        self.get("/api/books/search-book-titles", &[("title", title.to_string())])
            .await
    }

    /// `GET /api/categories`.
    pub async fn fetch_categories(&self) -> ApiResult<Vec<Category>> {
        self.get("/api/categories", &[]).await
    }

    /// `GET /api/languages`.
    pub async fn fetch_languages(&self) -> ApiResult<Vec<Language>> {
        self.get("/api/languages", &[]).await
    }

    /// `GET /api/libraries/search?name`.
    pub async fn search_libraries(&self, name: &str) -> ApiResult<Vec<LibrarySummary>> {
        self.get("/api/libraries/search", &[("name", name.to_string())])
            .await
    }

    /// `GET /api/publishers/search?name`.
    pub async fn search_publishers(&self, name: &str) -> ApiResult<Vec<PublisherSummary>> {
        self.get("/api/publishers/search", &[("name", name.to_string())])
            .await
    }

    /// `POST /api/quotes?bookId&quantity` - server-computed delivery
    /// offers for fulfilling a rental from each library that stocks the
    /// book. Pricing and distance are backend-owned.
    pub async fn fetch_quotes(&self, book_id: i32, quantity: u32) -> ApiResult<Quote> {
        self.post::<(), Quote>(
            "/api/quotes",
            &[
                ("bookId", book_id.to_string()),
                ("quantity", quantity.to_string()),
            ],
            None,
        )
        .await
    }
}
