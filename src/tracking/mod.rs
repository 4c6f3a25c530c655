mod board;
mod geo;
mod observation;
mod pipeline;
mod poller;
mod render;

pub use board::AircraftBoard;
pub use geo::GeoPos;
pub use pipeline::{AreaFilter, ZeroCoordinatePolicy};
pub use poller::Poller;
pub use render::Renderer;
