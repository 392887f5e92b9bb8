pub mod url_param;
pub mod feature_type_titles;
pub mod local_edit;
