pub mod dropdown_feature_type;
