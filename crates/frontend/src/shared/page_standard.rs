//! Page category constants for page standardization.
//!
//! Every routed page must declare:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a003_order--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator makes the entity name searchable: copy the id from
//! the browser DOM Inspector, paste into IDE search, and you land in the
//! owning module directory.

/// List of records — table with filters/sorting.
pub const PAGE_CAT_LIST: &str = "list";

/// Detail view for a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Use-case wizard / action page (the booking flow).
pub const PAGE_CAT_USECASE: &str = "usecase";

/// System page (login, admin console).
pub const PAGE_CAT_SYSTEM: &str = "system";

/// All known category values.
pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_DETAIL,
    PAGE_CAT_USECASE,
    PAGE_CAT_SYSTEM,
];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

/// Return true if the category value is recognised.
pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routed_page_ids_follow_the_convention() {
        for id in [
            "u101_slot_booking--usecase",
            "a003_order--list",
            "a003_order--detail",
            "a003_order--admin",
        ] {
            assert!(is_valid_page_id(id), "bad page id: {id}");
        }
        assert!(!is_valid_page_id("no-separator"));
        assert!(!is_valid_page_id("--usecase"));
    }

    #[test]
    fn categories_are_closed() {
        for cat in ALL_CATEGORIES {
            assert!(is_known_category(cat));
        }
        assert!(!is_known_category("dashboard"));
    }
}
