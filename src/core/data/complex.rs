use std::ops::{Add, Mul};

// hand-rolled instead of num-complex; z² + c is all the escape loop needs
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexPoint {
    pub re: f64,
    pub im: f64,
}

impl ComplexPoint {
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };

    #[must_use]
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }
}

impl Add for ComplexPoint {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }
}

impl Mul for ComplexPoint {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            re: self.re * other.re - self.im * other.im,
            im: self.re * other.im + self.im * other.re,
        }
    }
}
