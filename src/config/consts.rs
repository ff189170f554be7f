// src/config/consts.rs

// Net config
pub const STATUS_ENDPOINT: &str = "http://quantum-cloud-2.alscloud.net/washalertweb/washalertweb.aspx";
pub const HOUSING_PAGE: &str = "https://housing.gmu.edu/laundry";
pub const LOCATION_PARAM: &str = "location";
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
pub const USER_AGENT: &str = concat!("laundry_scrape/", env!("CARGO_PKG_VERSION"));

// Identifiers are UUID-shaped: 8-4-4-4-12 hex digits with dashes
pub const IDENTIFIER_LEN: usize = 36;

// Status page
pub const DEFAULT_ROOM_NAME: &str = "Laundry Room";
pub const AVAILABLE_STATUS: &str = "Available";
pub const WASHER_LABEL: &str = "Washer";
pub const DRYER_LABEL: &str = "Dryer";

// Display
pub const REMAINING_THRESHOLD_MINUTES: u64 = 2;
