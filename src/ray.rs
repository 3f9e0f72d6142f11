use crate::Vector3;

/// A half-line starting at `origin` and heading along `direction`.
///
/// `direction` does not have to be unit length. Distances reported by a
/// raycast are measured in multiples of it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ray {
    pub origin: Vector3,
    pub direction: Vector3,
}

impl Ray {
    pub const fn new(origin: Vector3, direction: Vector3) -> Self {
        Self { origin, direction }
    }

    pub fn at(&self, t: f64) -> Vector3 {
        self.origin + t * self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_walks_along_direction() {
        let ray = Ray::new(Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 2.0, 0.0));
        assert_eq!(ray.at(0.0), ray.origin);
        assert_eq!(ray.at(1.5), Vector3::new(1.0, 3.0, 0.0));
        assert_eq!(ray.at(-1.0), Vector3::new(1.0, -2.0, 0.0));
    }
}
