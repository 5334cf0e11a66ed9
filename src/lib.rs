//! Robust construction of a 2D planar subdivision (DCEL) from a set of
//! straight line segments, under a user-supplied numeric tolerance.
//!
//! See [`subdivision::Subdivision`] for the public entry point.

pub mod builder;
pub mod canon;
pub mod dcel;
pub mod error;
pub mod geom;
pub mod intersect;
pub mod point;
pub mod segment;
pub mod subdivision;
pub mod util;
pub mod validate;

pub use dcel::{Dcel, Face, FaceId, HalfEdge, HalfEdgeId, Vertex, VertexId, OUTER_FACE};
pub use error::SubdivisionError;
pub use point::{PointD, PointF, PointI, RectD, RectF, RectI, SizeD, SizeF, SizeI};
pub use segment::{Segment, SegmentRelation};
pub use subdivision::Subdivision;
pub use validate::ValidationError;
