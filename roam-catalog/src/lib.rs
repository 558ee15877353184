pub mod destination;

pub use destination::{Catalog, Destination};
