mod modalities;
mod pipeline_config;

pub use modalities::ModalityBarcodes;
pub use pipeline_config::PipelineConfig;
