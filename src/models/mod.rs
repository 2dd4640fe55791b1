pub mod annotation;
pub mod keyword;
pub mod loaders;
pub mod problem;

pub use annotation::{Annotation, AnnotationForm, QaPair, MAX_QA_PAIRS};
pub use keyword::AmbiguityKeyword;
pub use loaders::load_problems;
pub use problem::Problem;
