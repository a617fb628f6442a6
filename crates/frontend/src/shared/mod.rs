pub mod api_utils;
pub mod date_utils;
pub mod icons;
pub mod list_utils;
pub mod money_utils;
pub mod page_frame;
pub mod page_standard;
pub mod storage_utils;
