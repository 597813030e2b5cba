use ped_core::AreaId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("area {id} has a degenerate polygon ({vertices} vertices, need at least 3)")]
    DegeneratePolygon { id: AreaId, vertices: usize },
}

pub type GeometryResult<T> = Result<T, GeometryError>;
