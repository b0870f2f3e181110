//! Where the Students resource lives and what every request declares.

/// Production Students resource.
pub const DEFAULT_BASE_URL: &str =
    "https://sheshanbackend-dbe6etbva0bchbhy.canadacentral-01.azurewebsites.net/api/Students";

/// Environment variable front ends read to override [`DEFAULT_BASE_URL`].
pub const BASE_URL_ENV: &str = "STUDENTS_API_URL";

/// Header value sent as `accept` on every request.
pub const ACCEPT: &str = "application/json, text/plain, */*";
