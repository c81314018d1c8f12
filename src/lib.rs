pub mod descriptors;
pub mod errors;
pub mod labels;
pub mod loader;
pub mod logger;
pub mod model;
pub mod plot;
pub mod report;
