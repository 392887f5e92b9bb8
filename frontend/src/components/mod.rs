pub mod error_boundary;
pub mod loading_indicator;
pub mod navbar;
pub mod catalog_components;
pub mod annotation_components;
