pub mod site;
pub mod templates;

pub use site::SiteGenerator;
