//! Integer-grid 2D collision detection and swept movement resolution.
//!
//! Shapes live on an `i32` grid. Overlap tests are exact where they can be and use a small,
//! configurable tolerance where square roots are involved. Edges that merely touch do not collide.
//!
//! ```
//! use gridsweep::{resolve, Rect, Shape, Triangle};
//!
//! let mover: Shape = Rect::new(0, 0, 2, 2).into();
//! let wall: Shape = Triangle::new(10, 0, 14, 4, 10, 4).into();
//!
//! let coll = resolve(&mover, &wall, 9, 0);
//! assert!(coll.is_colliding());
//! assert!(coll.resolve.x < 9);
//! ```

pub mod config;
pub mod narrow;
pub mod space;

pub use config::Config;
pub use glam::IVec2;
pub use narrow::{
    distance, distance_f, is_colliding, orientation, point_on_seg, seg_seg_test, Circle, Intersect, Line,
    Orientation, Point, Rect, Shape,
    swept::{resolve, resolve_with, Collision},
    tri::Triangle,
};
pub use space::{ShapeId, Space};

#[cfg(not(feature = "f64"))]
pub type Fp = f32;
#[cfg(not(feature = "f64"))]
pub type Vec2 = glam::Vec2;

#[cfg(feature = "f64")]
pub type Fp = f64;
#[cfg(feature = "f64")]
pub type Vec2 = glam::DVec2;
