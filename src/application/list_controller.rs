use crate::domain::catalog::Searchable;
use crate::domain::page::{total_pages, PageRequest, PageSlice, PageState, SortDirection};
use crate::domain::ports::PageSource;
use crate::errors::AppError;

use super::outcome::Outcome;

/// Tracks page index, page size, sort order and the last-fetched page of a
/// tabular view.
///
/// The displayed records are always the most recent successful page. A
/// failed fetch keeps the previous records and page state and records the
/// error until the next successful fetch. Out-of-range page requests are
/// ignored without contacting the source.
pub struct ListController<S: PageSource> {
    source: S,
    state: PageState,
    records: Vec<S::Record>,
    loaded: bool,
    last_request: Option<PageRequest>,
    last_error: Option<AppError>,
}

impl<S: PageSource> ListController<S> {
    pub fn new(
        source: S,
        page_size: u32,
        sort_field: impl Into<String>,
        sort_direction: SortDirection,
    ) -> Self {
        Self {
            source,
            state: PageState::initial(page_size, sort_field, sort_direction),
            records: Vec::new(),
            loaded: false,
            last_request: None,
            last_error: None,
        }
    }

    pub async fn fetch_page(
        &mut self,
        page: u32,
        size: u32,
        sort_field: impl Into<String>,
        sort_direction: SortDirection,
    ) -> Result<(), AppError> {
        let request = PageRequest::new(page, size, sort_field, sort_direction);
        self.run(request).await
    }

    /// Initial load with the controller's current parameters.
    pub async fn load(&mut self) -> Result<(), AppError> {
        let request = self.state.request_for(self.state.current_page);
        self.run(request).await
    }

    /// Returns `Ok(false)` without fetching when `page` is out of range.
    pub async fn go_to_page(&mut self, page: u32) -> Result<bool, AppError> {
        if !self.state.contains_page(page) {
            log::debug!(
                "Ignoring page {} (total pages: {})",
                page,
                self.state.total_pages
            );
            return Ok(false);
        }
        self.run(self.state.request_for(page)).await?;
        Ok(true)
    }

    pub async fn next_page(&mut self) -> Result<bool, AppError> {
        self.go_to_page(self.state.current_page.saturating_add(1)).await
    }

    pub async fn previous_page(&mut self) -> Result<bool, AppError> {
        match self.state.current_page.checked_sub(1) {
            Some(page) => self.go_to_page(page).await,
            None => Ok(false),
        }
    }

    pub async fn change_sort(
        &mut self,
        sort_field: impl Into<String>,
        sort_direction: SortDirection,
    ) -> Result<(), AppError> {
        let size = self.state.page_size;
        self.fetch_page(0, size, sort_field, sort_direction).await
    }

    pub async fn change_page_size(&mut self, size: u32) -> Result<(), AppError> {
        let field = self.state.sort_field.clone();
        let direction = self.state.sort_direction;
        self.fetch_page(0, size, field, direction).await
    }

    /// Manual retry of the last attempted request.
    pub async fn refresh(&mut self) -> Result<(), AppError> {
        let request = self
            .last_request
            .clone()
            .unwrap_or_else(|| self.state.request_for(self.state.current_page));
        self.run(request).await
    }

    /// Fetches `request` and commits it. When the total shrank so that the
    /// requested page no longer exists, the last page is fetched instead.
    async fn run(&mut self, request: PageRequest) -> Result<(), AppError> {
        if request.size == 0 {
            let err = AppError::Precondition("page size must be at least 1".to_string());
            self.last_error = Some(err.clone());
            return Err(err);
        }
        self.last_request = Some(request.clone());
        let mut request = request;
        let mut slice = self.fetch(&request).await?;

        let pages = total_pages(slice.total_items, request.size);
        if request.page >= pages {
            log::info!(
                "Page {} is gone (total pages now {}), showing the last page",
                request.page,
                pages
            );
            request.page = pages - 1;
            self.last_request = Some(request.clone());
            slice = self.fetch(&request).await?;
        }

        self.state = PageState::from_response(&request, slice.total_items);
        self.records = slice.records;
        self.loaded = true;
        self.last_error = None;
        Ok(())
    }

    async fn fetch(&mut self, request: &PageRequest) -> Result<PageSlice<S::Record>, AppError> {
        log::debug!(
            "Fetching page {} (size {}, sort {} {})",
            request.page,
            request.size,
            request.sort_field,
            request.sort_direction
        );
        self.source.fetch_page(request).await.map_err(|e| {
            log::warn!("Page {} fetch failed: {}", request.page, e);
            self.last_error = Some(e.clone());
            e
        })
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn records(&self) -> &[S::Record] {
        &self.records
    }

    pub fn error(&self) -> Option<&AppError> {
        self.last_error.as_ref()
    }

    /// True once a fetch succeeded with no records ("no records" state).
    pub fn is_empty_result(&self) -> bool {
        self.loaded && self.records.is_empty()
    }

    pub fn outcome(&self) -> Outcome<&[S::Record]> {
        match (&self.last_error, self.loaded) {
            (Some(e), _) => Outcome::Failure(e.clone()),
            (None, false) => Outcome::Pending,
            (None, true) => Outcome::Success(self.records.as_slice()),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S> ListController<S>
where
    S: PageSource,
    S::Record: Searchable,
{
    /// Client-side search within the displayed page.
    pub fn filtered(&self, term: &str) -> Vec<&S::Record> {
        let term = term.trim();
        self.records
            .iter()
            .filter(|r| term.is_empty() || r.matches(term))
            .collect()
    }
}
