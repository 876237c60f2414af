//! 2D and 3D displacement vectors.
//!
//! `Vector2::cross_product` embeds the 2D cross product in 3D as
//! `(0, 0, x·v.y − y·v.x)`; a positive `z` means `v` lies counterclockwise of
//! `self`. `Vector3::cross_product` keeps a fixed term order so results are
//! reproducible down to rounding.
//!
//! `normalize` rejects zero-length (and non-finite-length) vectors with
//! `Error::DegenerateGeometry`; `normalize_unchecked` divides regardless and
//! may return NaN or infinite components.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use tracing::warn;

use super::GeomCfg;
use crate::error::{Error, Result};
use crate::math::{clamp_to_zero_within, sqr, PI2};

/// A 2D displacement.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zeros() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Euclidean norm.
    #[inline]
    pub fn length(self) -> f64 {
        (sqr(self.x) + sqr(self.y)).sqrt()
    }

    /// Angle from the positive x-axis in `[0, 2π)`.
    #[inline]
    pub fn theta(self) -> f64 {
        (self.y.atan2(self.x) + PI2) % PI2
    }

    /// Reflect across the y-axis: `(−x, y)`.
    #[inline]
    pub fn mirror(self) -> Self {
        Self::new(-self.x, self.y)
    }

    /// Reflect across the x-axis: `(x, −y)`.
    #[inline]
    pub fn flip(self) -> Self {
        Self::new(self.x, -self.y)
    }

    #[inline]
    pub fn add(self, v: Vector2) -> Self {
        Self::new(self.x + v.x, self.y + v.y)
    }

    #[inline]
    pub fn subtract(self, v: Vector2) -> Self {
        Self::new(self.x - v.x, self.y - v.y)
    }

    #[inline]
    pub fn multiply_scalar(self, s: f64) -> Self {
        Self::new(self.x * s, self.y * s)
    }

    /// Componentwise product.
    #[inline]
    pub fn multiply_vector(self, v: Vector2) -> Self {
        Self::new(self.x * v.x, self.y * v.y)
    }

    #[inline]
    pub fn dot_product(self, v: Vector2) -> f64 {
        (self.x * v.x) + (self.y * v.y)
    }

    #[inline]
    pub fn cross_product(self, v: Vector2) -> Vector3 {
        Vector3::new(0.0, 0.0, (self.x * v.y) - (self.y * v.x))
    }

    /// Unit vector in the same direction.
    pub fn normalize(self) -> Result<Self> {
        self.normalize_with(GeomCfg::default())
    }

    /// Like [`Vector2::normalize`], with lengths `<= cfg.eps_length` treated as zero.
    pub fn normalize_with(self, cfg: GeomCfg) -> Result<Self> {
        let l = self.length();
        if !l.is_finite() || l <= cfg.eps_length {
            warn!(x = self.x, y = self.y, length = l, "cannot normalize vector");
            return Err(Error::degenerate(format!(
                "cannot normalize 2D vector of length {l}"
            )));
        }
        Ok(Self::new(self.x / l, self.y / l))
    }

    /// Divide by the length without checking it.
    #[inline]
    pub fn normalize_unchecked(self) -> Self {
        let l = self.length();
        Self::new(self.x / l, self.y / l)
    }

    /// Componentwise comparison within `eps`.
    #[inline]
    pub fn approx_eq(self, other: Vector2, eps: f64) -> bool {
        (self.x - other.x).abs() <= eps && (self.y - other.y).abs() <= eps
    }

    /// Components within `cfg.eps_zero` of zero become exactly zero.
    #[inline]
    pub fn snap_with(self, cfg: GeomCfg) -> Self {
        let eps = cfg.eps_zero;
        Self::new(
            clamp_to_zero_within(self.x, eps),
            clamp_to_zero_within(self.y, eps),
        )
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[x, y, θ, ||v||]: {}, {}, {}, {}",
            self.x,
            self.y,
            self.theta(),
            self.length()
        )
    }
}

impl Add for Vector2 {
    type Output = Vector2;
    #[inline]
    fn add(self, rhs: Vector2) -> Self::Output {
        Vector2::add(self, rhs)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;
    #[inline]
    fn sub(self, rhs: Vector2) -> Self::Output {
        self.subtract(rhs)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;
    #[inline]
    fn mul(self, s: f64) -> Self::Output {
        self.multiply_scalar(s)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;
    #[inline]
    fn neg(self) -> Self::Output {
        Vector2::new(-self.x, -self.y)
    }
}

impl From<nalgebra::Vector2<f64>> for Vector2 {
    #[inline]
    fn from(v: nalgebra::Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2> for nalgebra::Vector2<f64> {
    #[inline]
    fn from(v: Vector2) -> Self {
        nalgebra::Vector2::new(v.x, v.y)
    }
}

/// A 3D displacement.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn zeros() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    #[inline]
    pub fn length(self) -> f64 {
        (sqr(self.x) + sqr(self.y) + sqr(self.z)).sqrt()
    }

    #[inline]
    pub fn add(self, v: Vector3) -> Self {
        Self::new(self.x + v.x, self.y + v.y, self.z + v.z)
    }

    #[inline]
    pub fn subtract(self, v: Vector3) -> Self {
        Self::new(self.x - v.x, self.y - v.y, self.z - v.z)
    }

    #[inline]
    pub fn multiply_scalar(self, s: f64) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }

    #[inline]
    pub fn multiply_vector(self, v: Vector3) -> Self {
        Self::new(self.x * v.x, self.y * v.y, self.z * v.z)
    }

    #[inline]
    pub fn dot_product(self, v: Vector3) -> f64 {
        (self.x * v.x) + (self.y * v.y) + (self.z * v.z)
    }

    /// Right-handed cross product. The y term is written `v.x·z − x·v.z`.
    #[inline]
    pub fn cross_product(self, v: Vector3) -> Self {
        Self::new(
            self.y * v.z - self.z * v.y,
            v.x * self.z - self.x * v.z,
            self.x * v.y - self.y * v.x,
        )
    }

    pub fn normalize(self) -> Result<Self> {
        self.normalize_with(GeomCfg::default())
    }

    pub fn normalize_with(self, cfg: GeomCfg) -> Result<Self> {
        let l = self.length();
        if !l.is_finite() || l <= cfg.eps_length {
            warn!(
                x = self.x,
                y = self.y,
                z = self.z,
                length = l,
                "cannot normalize vector"
            );
            return Err(Error::degenerate(format!(
                "cannot normalize 3D vector of length {l}"
            )));
        }
        Ok(Self::new(self.x / l, self.y / l, self.z / l))
    }

    #[inline]
    pub fn normalize_unchecked(self) -> Self {
        let l = self.length();
        Self::new(self.x / l, self.y / l, self.z / l)
    }

    #[inline]
    pub fn approx_eq(self, other: Vector3, eps: f64) -> bool {
        (self.x - other.x).abs() <= eps
            && (self.y - other.y).abs() <= eps
            && (self.z - other.z).abs() <= eps
    }

    #[inline]
    pub fn snap_with(self, cfg: GeomCfg) -> Self {
        let eps = cfg.eps_zero;
        Self::new(
            clamp_to_zero_within(self.x, eps),
            clamp_to_zero_within(self.y, eps),
            clamp_to_zero_within(self.z, eps),
        )
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x: {} y: {} z: {}", self.x, self.y, self.z)
    }
}

impl Add for Vector3 {
    type Output = Vector3;
    #[inline]
    fn add(self, rhs: Vector3) -> Self::Output {
        Vector3::add(self, rhs)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;
    #[inline]
    fn sub(self, rhs: Vector3) -> Self::Output {
        self.subtract(rhs)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;
    #[inline]
    fn mul(self, s: f64) -> Self::Output {
        self.multiply_scalar(s)
    }
}

impl Neg for Vector3 {
    type Output = Vector3;
    #[inline]
    fn neg(self) -> Self::Output {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl From<nalgebra::Vector3<f64>> for Vector3 {
    #[inline]
    fn from(v: nalgebra::Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for nalgebra::Vector3<f64> {
    #[inline]
    fn from(v: Vector3) -> Self {
        nalgebra::Vector3::new(v.x, v.y, v.z)
    }
}
