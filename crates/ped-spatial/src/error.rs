use ped_core::Point;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("no route from {from} to {to}")]
    NoRoute { from: Point, to: Point },
}

pub type SpatialResult<T> = Result<T, SpatialError>;
