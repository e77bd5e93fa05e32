mod dataset_config;
mod dataset_ops;
mod dataset_source;
mod dataset_status;

pub use dataset_config::DatasetConfig;
pub use dataset_ops::ensure_datasets;
pub use dataset_source::DatasetSource;
pub use dataset_status::DatasetStatus;
