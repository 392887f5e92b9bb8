pub mod home_page;
pub mod catalog_page;
pub mod annotations_page;
