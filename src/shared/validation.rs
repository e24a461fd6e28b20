use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for the type half of a resource reference ("report", "chat_thread", "user-avatar")
    /// Must start with a lowercase letter; segments joined by a single `_` or `-`
    /// - Valid: "report", "chat_thread", "user-avatar", "v2_item"
    /// - Invalid: "Report", "_report", "report_", "report__item", "2report", "report item"
    pub static ref RESOURCE_TYPE_REGEX: Regex =
        Regex::new(r"^[a-z][a-z0-9]*(?:[_-][a-z0-9]+)*$").unwrap();
}
