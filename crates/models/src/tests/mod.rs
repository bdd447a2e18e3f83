

/// Live-database tests run only when `DATABASE_URL` is provided and
/// `SKIP_DB_TESTS` is not set.
pub(crate) fn db_tests_enabled() -> bool {
    std::env::var("SKIP_DB_TESTS").is_err() && std::env::var("DATABASE_URL").is_ok()
}
