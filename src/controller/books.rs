//! Catalog search screen
//!
//! Paged book search with server-side filters, the lookup lists that
//! feed the filter dropdowns, and the quote flow that puts a delivery
//! offer into the cart.

use crate::api::{ApiClient, BookFilter};
use crate::error::ApiResult;
use crate::load::{LoadSnapshot, Loader};
use crate::model::{Book, Category, Language, LibrarySummary, Page, PublisherSummary, Quote};

#[derive(Clone)]
pub struct BookSearchController {
    api: ApiClient,
    results: Loader<Page<Book>>,
    quote: Loader<Quote>,
    filter: BookFilter,
    page: u32,
}

impl BookSearchController {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            results: Loader::new(),
            quote: Loader::new(),
            filter: BookFilter::default(),
            page: 0,
        }
    }

    pub fn filter(&self) -> &BookFilter {
        &self.filter
    }

    pub fn current_page(&self) -> u32 {
        self.page
    }

    /// Changing a filter resets to page 0 and re-runs the search.
    pub async fn apply_filter(&mut self, filter: BookFilter) -> bool {
        self.filter = filter;
        self.page = 0;
        self.search().await
    }

    pub async fn search(&self) -> bool {
        self.results
            .run(self.api.search_books(self.page, &self.filter))
            .await
    }

    pub async fn go_to_page(&mut self, page: u32) -> bool {
        let total_pages = self.results.data().await.map(|p| p.total_pages).unwrap_or(0);
        if total_pages > 0 && page >= total_pages {
            return false;
        }
        self.page = page;
        self.search().await
    }

    pub async fn next_page(&mut self) -> bool {
        let Some(current) = self.results.data().await else {
            return false;
        };
        if !current.has_next() {
            return false;
        }
        self.go_to_page(self.page + 1).await
    }

    pub async fn prev_page(&mut self) -> bool {
        if self.page == 0 {
            return false;
        }
        self.go_to_page(self.page - 1).await
    }

    // Lookup lists feeding the filter dropdowns. These are small and
    // uncached; the screen fetches them on focus.

    pub async fn categories(&self) -> ApiResult<Vec<Category>> {
        self.api.fetch_categories().await
    }

    pub async fn languages(&self) -> ApiResult<Vec<Language>> {
        self.api.fetch_languages().await
    }

    pub async fn libraries(&self, name: &str) -> ApiResult<Vec<LibrarySummary>> {
        self.api.search_libraries(name).await
    }

    pub async fn publishers(&self, name: &str) -> ApiResult<Vec<PublisherSummary>> {
        self.api.search_publishers(name).await
    }

    pub async fn title_suggestions(&self, title: &str) -> ApiResult<Vec<String>> {
        self.api.suggest_book_titles(title).await
    }

    /// Quotes for renting `quantity` copies of a book; re-run whenever
    /// the user changes the quantity since pricing is quantity-dependent.
    pub async fn load_quotes(&self, book_id: i32, quantity: u32) -> bool {
        if let Err(e) = crate::validation::positive_quantity(quantity) {
            self.quote.fail_local(e).await;
            return false;
        }
        self.quote.run(self.api.fetch_quotes(book_id, quantity)).await
    }

    /// Put a quote option into the cart. The cart screen re-fetches the
    /// whole cart on focus, so nothing is patched locally.
    pub async fn add_to_cart(&self, quote_option_id: i32) -> ApiResult<()> {
        self.api.add_quote_option_to_cart(quote_option_id).await
    }

    pub async fn results(&self) -> LoadSnapshot<Page<Book>> {
        self.results.snapshot().await
    }

    pub async fn quote(&self) -> LoadSnapshot<Quote> {
        self.quote.snapshot().await
    }

    pub async fn detach(&self) {
        self.results.detach().await;
        self.quote.detach().await;
    }
}
