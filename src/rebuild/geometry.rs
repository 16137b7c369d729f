//! Vector algebra for backbone placement.

/// A point or displacement in Cartesian space (Å).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    pub fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    pub fn scale(self, s: f64) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }

    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn norm_squared(self) -> f64 {
        self.dot(self)
    }

    pub fn norm(self) -> f64 {
        self.norm_squared().sqrt()
    }

    pub fn distance(self, other: Self) -> f64 {
        self.sub(other).norm()
    }

    /// Unit vector along `self`, or `None` for a (near) zero vector.
    pub fn normalized(self) -> Option<Self> {
        let n = self.norm();
        (n > 1e-12).then(|| self.scale(1.0 / n))
    }

    /// Component of `self` orthogonal to the unit vector `axis`.
    pub fn reject(self, axis: Self) -> Self {
        self.sub(axis.scale(self.dot(axis)))
    }

    /// Some unit vector orthogonal to the unit vector `self`.
    pub fn any_orthogonal(self) -> Self {
        let probe = if self.x.abs() < 0.9 {
            Self::new(1.0, 0.0, 0.0)
        } else {
            Self::new(0.0, 1.0, 0.0)
        };
        probe.reject(self).normalized().unwrap_or(Self::new(0.0, 0.0, 1.0))
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(p: [f64; 3]) -> Self {
        Self::new(p[0], p[1], p[2])
    }
}

impl From<Vec3> for [f64; 3] {
    fn from(v: Vec3) -> Self {
        [v.x, v.y, v.z]
    }
}

/// Angle at `b` in the triangle `a`–`b`–`c`, in radians.
#[cfg(test)]
pub fn bond_angle(a: Vec3, b: Vec3, c: Vec3) -> f64 {
    let u = a.sub(b);
    let v = c.sub(b);
    let cos = u.dot(v) / (u.norm() * v.norm());
    cos.clamp(-1.0, 1.0).acos()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn cross_follows_right_hand_rule() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(y), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(y.cross(x), Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn normalized_rejects_zero_vector() {
        assert!(Vec3::ZERO.normalized().is_none());
        let u = Vec3::new(3.0, 0.0, 4.0).normalized().unwrap();
        assert!((u.norm() - 1.0).abs() < EPS);
        assert!((u.x - 0.6).abs() < EPS);
    }

    #[test]
    fn any_orthogonal_is_unit_and_perpendicular() {
        for axis in [
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 1.0, 1.0).normalized().unwrap(),
        ] {
            let o = axis.any_orthogonal();
            assert!((o.norm() - 1.0).abs() < EPS);
            assert!(o.dot(axis).abs() < EPS);
        }
    }

    #[test]
    fn bond_angle_of_right_angle() {
        let a = Vec3::new(1.0, 0.0, 0.0);
        let b = Vec3::ZERO;
        let c = Vec3::new(0.0, 2.0, 0.0);
        assert!((bond_angle(a, b, c) - std::f64::consts::FRAC_PI_2).abs() < EPS);
    }
}
