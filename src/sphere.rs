use crate::{
    hit::{Raycast, RaycastResult, Record},
    Ray, SphereError, Vector3,
};

pub const DEFAULT_RADIUS: f64 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "SphereFields")
)]
pub struct Sphere {
    center: Vector3,
    radius: f64,
}

// Deserialized spheres go through `try_new` like any other.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct SphereFields {
    center: Vector3,
    radius: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<SphereFields> for Sphere {
    type Error = SphereError;

    fn try_from(fields: SphereFields) -> Result<Self, Self::Error> {
        Sphere::try_new(fields.center, fields.radius)
    }
}

impl Sphere {
    /// Builds a sphere, replacing bad input instead of failing.
    ///
    /// A center with a NaN or infinite component becomes the origin and a
    /// radius that is not a positive number becomes [`DEFAULT_RADIUS`]. Each
    /// replacement is reported with `log::warn!`.
    pub fn new(center: Vector3, radius: f64) -> Self {
        let center = if center.is_finite() {
            center
        } else {
            log::warn!("Invalid sphere center {center}, using the origin");
            Vector3::ZERO
        };
        let radius = if radius > 0.0 {
            radius
        } else {
            log::warn!("Invalid sphere radius {radius}, using {DEFAULT_RADIUS}");
            DEFAULT_RADIUS
        };
        Self { center, radius }
    }

    /// Builds a sphere, rejecting the first invalid input.
    pub fn try_new(center: Vector3, radius: f64) -> Result<Self, SphereError> {
        if !center.is_finite() {
            return Err(SphereError::InvalidCenter(center));
        }
        if radius.is_nan() || radius <= 0.0 {
            return Err(SphereError::InvalidRadius(radius));
        }
        Ok(Self { center, radius })
    }

    pub fn center(&self) -> Vector3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Intersects `ray` with the surface of the sphere.
    ///
    /// Solves `|origin + t * direction - center|^2 = radius^2` for `t` and
    /// reports the nearest root in front of the origin. The direction does
    /// not need to be normalized: the returned distance is always the
    /// parametric `t`, which is the Euclidean distance only for a unit
    /// direction.
    ///
    /// A ray that starts strictly inside the sphere never hits it. Rays with
    /// a zero direction miss.
    pub fn raycast(&self, ray: &Ray) -> RaycastResult {
        let co = ray.origin - self.center;
        if co.length() < self.radius {
            return RaycastResult::Miss;
        }

        let a = ray.direction.length_sqr();
        if a == 0.0 {
            return RaycastResult::Miss;
        }
        let b = 2.0 * ray.direction.dot(&co);
        let c = co.length_sqr() - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return RaycastResult::Miss;
        }

        let discriminant_root = discriminant.sqrt();
        let enter = (-b - discriminant_root) / (2.0 * a);
        let exit = (-b + discriminant_root) / (2.0 * a);

        // a > 0 so enter <= exit
        let distance = if enter > 0.0 {
            enter
        } else if exit > 0.0 {
            exit
        } else {
            return RaycastResult::Miss;
        };

        let point = ray.at(distance);
        let normal = Vector3::from_to(&self.center, &point).normalized();
        RaycastResult::Hit(Record {
            point,
            normal,
            distance,
        })
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self {
            center: Vector3::ZERO,
            radius: DEFAULT_RADIUS,
        }
    }
}

impl Raycast for Sphere {
    fn raycast(&self, ray: &Ray) -> RaycastResult {
        Sphere::raycast(self, ray)
    }
}
