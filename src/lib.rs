//! 3D vector algebra and analytic ray-sphere intersection.
//!
//! ```
//! use raycast::{Ray, RaycastResult, Sphere, Vector3};
//!
//! let sphere = Sphere::new(Vector3::ZERO, 1.0);
//! let ray = Ray::new(Vector3::new(0.0, 0.0, -5.0), Vector3::Z);
//!
//! match sphere.raycast(&ray) {
//!     RaycastResult::Hit(record) => assert_eq!(record.distance, 4.0),
//!     RaycastResult::Miss => unreachable!(),
//! }
//! ```

mod error;
mod hit;
mod ray;
mod sphere;
mod vector;

pub use error::SphereError;
pub use hit::{Raycast, RaycastResult, Record};
pub use ray::Ray;
pub use sphere::{Sphere, DEFAULT_RADIUS};
pub use vector::Vector3;
