pub mod json_catalog_loader;
