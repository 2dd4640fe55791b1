pub mod annotation_store;
pub mod exporter;
pub mod renderer;

pub use annotation_store::AnnotationStore;
pub use exporter::{export_jsonl, parse_export};
