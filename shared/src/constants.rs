// API endpoints (relative to the host base URL).
pub const PUBLIC_PAGE_ENDPOINT: &str = "/api/public-page";
pub const PRIZES_ENDPOINT: &str = "/api/prizes";
pub const ADMIN_KEYS_ENDPOINT: &str = "/api/admin/keys";
pub const ANALYTICS_ENDPOINT: &str = "/api/analytics";
pub const SPINS_ENDPOINT: &str = "/api/spins";

// Browser storage keys.
pub const ADMIN_KEY_STORAGE: &str = "admin_key";
pub const SPIN_REDEEMED_STORAGE_PREFIX: &str = "spin_redeemed";
pub const COOKIE_CONSENT_STORAGE: &str = "cookie_consent";

// User-facing error strings.
pub const NETWORK_ERROR: &str = "Network error. Please try again";
pub const PAGE_UNAVAILABLE_ERROR: &str = "This promotion is currently unavailable";
pub const INVALID_KEY_ERROR: &str = "That access key is not valid";
pub const INVALID_PRIZE_ERROR: &str =
    "Prize needs a label, a non-negative weight and valid colors";

pub const MAX_LABEL_LENGTH: usize = 48;
pub const MIN_SECRET_KEY_LENGTH: usize = 24;
pub const MAX_SECRET_KEY_LENGTH: usize = 64;
