pub mod catalog_panel;
pub mod catalog_search_form;
pub mod catalog_record_list;
pub mod catalog_record_item;
pub mod catalog_pagination;
pub mod catalog_service_editor;
