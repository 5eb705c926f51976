/// Default number of posts returned by a blog listing
pub const DEFAULT_POSTS_PAGE_SIZE: i64 = 10;

/// Default number of items returned by an items listing
pub const DEFAULT_ITEMS_PAGE_SIZE: i64 = 100;

/// Stored in place of a real password hash; passwords are never verified
pub const PLACEHOLDER_PASSWORD_HASH: &str = "dummy_hash";

/// Default database file for the blog API
pub const DEFAULT_BLOG_DATABASE_PATH: &str = "./data/blog.db";

/// Default database file for the items API
pub const DEFAULT_ITEMS_DATABASE_PATH: &str = "./data/items.db";

// =============================================================================
// Error Messages
// =============================================================================

/// Detail message when a post lookup by id comes back empty
pub const ERR_POST_NOT_FOUND: &str = "Post not found";

/// Detail message when an item lookup by id comes back empty
pub const ERR_ITEM_NOT_FOUND: &str = "Item not found";
