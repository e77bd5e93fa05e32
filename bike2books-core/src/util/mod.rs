pub mod geo_utils;
pub mod unit_ops;
