pub mod paginated_fetcher;

pub use paginated_fetcher::PaginatedFetcher;
