pub mod constants;
pub mod filename;
pub mod model_resolver;
