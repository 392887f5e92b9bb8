//! Common library exports shared between the catalog and annotation components.

extern crate serde;


pub mod error;
pub mod catalog_const;
pub mod catalog_service;
pub mod catalog_record;
pub mod catalog_config;
pub mod search_request;
pub mod pagination;
pub mod metadata_template;
pub mod record_view;
pub mod service_editor;
pub mod annotation_style;
