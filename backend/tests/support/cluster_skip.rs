//! Database availability policy for repository integration tests.
//!
//! Tests needing PostgreSQL read its URL from `CONTACTS_TEST_DATABASE_URL`.
//! When the variable is unset they print a skip marker and pass, so local
//! runs without a database stay green while CI provides one.

/// Environment variable naming the test database.
pub const TEST_DATABASE_URL_ENV: &str = "CONTACTS_TEST_DATABASE_URL";

/// Return the configured test database URL, or print `SKIP-TEST-CLUSTER`
/// and return `None`.
pub fn test_database_url() -> Option<String> {
    match std::env::var(TEST_DATABASE_URL_ENV) {
        Ok(url) if !url.trim().is_empty() => Some(url),
        _ => {
            eprintln!("SKIP-TEST-CLUSTER: {TEST_DATABASE_URL_ENV} is not set");
            None
        }
    }
}
