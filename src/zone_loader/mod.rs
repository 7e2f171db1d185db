mod loader;
mod serialized_zone;

pub use loader::{LoaderError, load_zones_from};
