/// Error code registry for assignment-sync
///
/// Error codes are organized by category:
/// - 1000-1999: Configuration errors
/// - 3000-3999: Assignment provider (Canvas) errors
/// - 4000-4999: Task store (Notion) errors
/// - 9000-9999: Other errors
pub struct ErrorCode;

impl ErrorCode {
    // Configuration errors (1000-1999)
    pub const CONFIG_NOT_FOUND: u16 = 1001;
    pub const CONFIG_INVALID_JSON: u16 = 1003;
    pub const CONFIG_MISSING_REQUIRED: u16 = 1004;
    pub const CONFIG_INVALID_VALUE: u16 = 1005;
    pub const CONFIG_PATH_ERROR: u16 = 1006;

    // Assignment provider errors (3000-3999)
    pub const PROVIDER_UNAUTHORIZED: u16 = 3001;
    pub const PROVIDER_NOT_FOUND: u16 = 3002;
    pub const PROVIDER_REQUEST_FAILED: u16 = 3003;
    pub const PROVIDER_INVALID_RESPONSE: u16 = 3004;

    // Task store errors (4000-4999)
    pub const STORE_UNAUTHORIZED: u16 = 4001;
    pub const STORE_QUERY_REJECTED: u16 = 4002;
    pub const STORE_CREATE_FAILED: u16 = 4003;
    pub const STORE_REQUEST_FAILED: u16 = 4004;
    pub const STORE_INVALID_RESPONSE: u16 = 4005;

    // Other errors (9000-9999)
    pub const OTHER_HTTP_CLIENT: u16 = 9001;
}

/// Get a human-readable description of an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        ErrorCode::CONFIG_NOT_FOUND => "Course mapping file not found",
        ErrorCode::CONFIG_INVALID_JSON => "Course mapping file is not valid JSON",
        ErrorCode::CONFIG_MISSING_REQUIRED => "Required environment variable is missing",
        ErrorCode::CONFIG_INVALID_VALUE => "Invalid configuration value",
        ErrorCode::CONFIG_PATH_ERROR => "Course mapping file could not be read",

        ErrorCode::PROVIDER_UNAUTHORIZED => "Canvas rejected the API key",
        ErrorCode::PROVIDER_NOT_FOUND => "Canvas resource not found",
        ErrorCode::PROVIDER_REQUEST_FAILED => "Canvas request failed",
        ErrorCode::PROVIDER_INVALID_RESPONSE => "Canvas returned an unexpected response",

        ErrorCode::STORE_UNAUTHORIZED => "Notion rejected the API key",
        ErrorCode::STORE_QUERY_REJECTED => "Notion database query was rejected",
        ErrorCode::STORE_CREATE_FAILED => "Notion page creation failed",
        ErrorCode::STORE_REQUEST_FAILED => "Notion request failed",
        ErrorCode::STORE_INVALID_RESPONSE => "Notion returned an unexpected response",

        ErrorCode::OTHER_HTTP_CLIENT => "HTTP client could not be built",

        _ => "Unknown error",
    }
}
