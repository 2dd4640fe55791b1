pub mod session;

pub use session::{AnnotationSession, Selection};
