use core::{fmt, ops};

/// A three component vector of `f64`.
///
/// The mutating methods (`set`, `negate`, `add`, `subtract`,
/// `multiply_scalar`, `normalize`, `rescale`) change the receiver in place
/// and return it, so calls chain:
///
/// ```
/// use raycast::Vector3;
///
/// let mut v = Vector3::new(3.0, 0.0, 4.0);
/// v.normalize().multiply_scalar(2.0);
/// assert!((v.length() - 2.0).abs() < 1e-12);
/// ```
///
/// `Vector3` is `Copy`, so keeping the original around is a plain
/// assignment before mutating. The operators (`+`, `-`, `*`, `/`) never
/// touch their operands and return a fresh value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);
    pub const X: Vector3 = Vector3::new(1.0, 0.0, 0.0);
    pub const Y: Vector3 = Vector3::new(0.0, 1.0, 0.0);
    pub const Z: Vector3 = Vector3::new(0.0, 0.0, 1.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    pub fn set(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self
    }

    pub fn copy_from(&mut self, other: &Vector3) -> &mut Self {
        *self = *other;
        self
    }

    pub fn negate(&mut self) -> &mut Self {
        self.x = -self.x;
        self.y = -self.y;
        self.z = -self.z;
        self
    }

    pub fn add(&mut self, v: &Vector3) -> &mut Self {
        self.x += v.x;
        self.y += v.y;
        self.z += v.z;
        self
    }

    pub fn subtract(&mut self, v: &Vector3) -> &mut Self {
        self.x -= v.x;
        self.y -= v.y;
        self.z -= v.z;
        self
    }

    pub fn multiply_scalar(&mut self, scalar: f64) -> &mut Self {
        self.x *= scalar;
        self.y *= scalar;
        self.z *= scalar;
        self
    }

    pub fn length(&self) -> f64 {
        self.length_sqr().sqrt()
    }

    pub fn length_sqr(&self) -> f64 {
        self.dot(self)
    }

    /// Scales to unit length. The zero vector has no direction and is left
    /// unchanged.
    pub fn normalize(&mut self) -> &mut Self {
        let length = self.length();
        if length != 0.0 {
            self.multiply_scalar(1.0 / length);
        }
        self
    }

    pub fn normalized(&self) -> Vector3 {
        let mut v = *self;
        v.normalize();
        v
    }

    pub fn dot(&self, other: &Vector3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: &Vector3) -> Vector3 {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Changes the length to `new_scale` while keeping the direction. A
    /// negative `new_scale` points the vector the other way. The zero vector
    /// is left unchanged.
    pub fn rescale(&mut self, new_scale: f64) -> &mut Self {
        let length = self.length();
        if length != 0.0 {
            self.multiply_scalar(new_scale / length);
        }
        self
    }

    pub fn rescaled(&self, new_scale: f64) -> Vector3 {
        let mut v = *self;
        v.rescale(new_scale);
        v
    }

    /// The vector that goes from `from_point` to `to_point`.
    pub fn from_to(from_point: &Vector3, to_point: &Vector3) -> Vector3 {
        *to_point - *from_point
    }

    /// Angle between `v1` and `v2` in degrees, in `[0, 180]`.
    ///
    /// The cosine is clamped before `acos` so parallel and antiparallel
    /// vectors give 0 and 180 instead of NaN. The angle involving a
    /// zero vector is 0.
    pub fn angle(v1: &Vector3, v2: &Vector3) -> f64 {
        let lengths = (v1.length_sqr() * v2.length_sqr()).sqrt();
        if lengths == 0.0 {
            return 0.0;
        }
        let cos = (v1.dot(v2) / lengths).clamp(-1.0, 1.0);
        cos.acos().to_degrees()
    }

    /// Projects `vector_to_project` onto the direction of `other_vector`.
    ///
    /// The result is parallel to `other_vector` and its signed length is the
    /// scalar projection `|vector_to_project| * cos(theta)`, so for angles
    /// past 90 degrees it points the opposite way. Projecting onto the zero
    /// vector gives the zero vector.
    pub fn project(vector_to_project: &Vector3, other_vector: &Vector3) -> Vector3 {
        let length = other_vector.length();
        if length == 0.0 {
            return Vector3::ZERO;
        }
        let scalar_projection = vector_to_project.dot(other_vector) / length;
        other_vector.rescaled(scalar_projection)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl ops::Add for Vector3 {
    type Output = Vector3;
    fn add(self, other: Vector3) -> Vector3 {
        Vector3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl ops::AddAssign for Vector3 {
    fn add_assign(&mut self, other: Vector3) {
        Vector3::add(self, &other);
    }
}

impl ops::Sub for Vector3 {
    type Output = Vector3;
    fn sub(self, other: Vector3) -> Vector3 {
        Vector3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl ops::SubAssign for Vector3 {
    fn sub_assign(&mut self, other: Vector3) {
        self.subtract(&other);
    }
}

impl ops::Neg for Vector3 {
    type Output = Vector3;
    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl ops::Mul<f64> for Vector3 {
    type Output = Vector3;
    fn mul(self, scalar: f64) -> Vector3 {
        Vector3::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl ops::Mul<Vector3> for f64 {
    type Output = Vector3;
    fn mul(self, v: Vector3) -> Vector3 {
        v * self
    }
}

impl ops::MulAssign<f64> for Vector3 {
    fn mul_assign(&mut self, scalar: f64) {
        self.multiply_scalar(scalar);
    }
}

impl ops::Div<f64> for Vector3 {
    type Output = Vector3;
    fn div(self, scalar: f64) -> Vector3 {
        Vector3::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<(f64, f64, f64)> for Vector3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> Self {
        [v.x, v.y, v.z]
    }
}

impl From<nalgebra::Vector3<f64>> for Vector3 {
    fn from(v: nalgebra::Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for nalgebra::Vector3<f64> {
    fn from(v: Vector3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}
