// Mock implementations for adapter layer testing
#![allow(dead_code, unused_imports)]

pub mod mock_directory;
pub mod mock_platform;

use std::sync::Arc;

use edit_guardian::bot::AppState;
use edit_guardian::config::Links;
use url::Url;

pub use mock_directory::{DirectoryWrite, MockDirectory};
pub use mock_platform::{MockPlatform, PlatformCall};

pub const ADMIN_ID: u64 = 1000;
pub const BACKUP_ADMIN_ID: u64 = 7804972365;

pub fn test_links() -> Links {
    Links {
        channel: Url::parse("https://t.me/guardian_news").unwrap(),
        support_group: Url::parse("https://t.me/guardian_support").unwrap(),
    }
}

pub fn test_state(platform: Arc<MockPlatform>, directory: Arc<MockDirectory>) -> AppState {
    AppState::new(platform, directory, vec![ADMIN_ID, BACKUP_ADMIN_ID], test_links())
}
