//! Topic 1: values, types, conversions and constants.

use crate::catalogue::Catalogue;
use crate::error::CatalogueError;
use std::fmt;
use std::io::{self, Write};

pub fn register(catalogue: &mut Catalogue) -> Result<(), CatalogueError> {
    catalogue.register_titled("1.1", "typed values", typed_values)?;
    catalogue.register_titled("1.2", "explicit conversion", explicit_conversion)?;
    catalogue.register_titled("1.3", "type inference", type_inference)?;
    catalogue.register_titled("1.4", "constants", constants)?;
    catalogue.register_titled("1.5", "numeric constants", numeric_constants)?;
    Ok(())
}

/// Minimal complex number, enough for the principal square root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    pub fn norm(&self) -> f64 {
        self.re.hypot(self.im)
    }

    pub fn sqrt(&self) -> Self {
        let r = self.norm();
        let re = ((r + self.re) / 2.0).sqrt();
        let im = ((r - self.re) / 2.0).sqrt().copysign(self.im);
        Self { re, im }
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}{:+}i)", self.re, self.im)
    }
}

fn short_type_name<T>(_: &T) -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

const TO_BE: bool = false;
const MAX_INT: u64 = u64::MAX;

fn typed_values(out: &mut dyn Write) -> io::Result<()> {
    let z = Complex::new(-5.0, 12.0).sqrt();
    writeln!(out, "Type: {} Value: {}", short_type_name(&TO_BE), TO_BE)?;
    writeln!(out, "Type: {} Value: {}", short_type_name(&MAX_INT), MAX_INT)?;
    writeln!(out, "Type: {} Value: {}", short_type_name(&z), z)
}

fn explicit_conversion(out: &mut dyn Write) -> io::Result<()> {
    let (x, y): (i32, i32) = (3, 4);
    // no implicit widening: i32 -> f64 -> u32 is spelled out
    let f = f64::from(x * x + y * y).sqrt();
    let z = f as u32;
    writeln!(out, "{x} {y} {z}")
}

fn type_inference(out: &mut dyn Write) -> io::Result<()> {
    let v = 42;
    let f = 3.142;
    let g = Complex::new(0.867, 0.5);
    writeln!(out, "v is of type {}", short_type_name(&v))?;
    writeln!(out, "f is of type {}", short_type_name(&f))?;
    writeln!(out, "g is of type {}", short_type_name(&g))
}

const PI: f64 = 3.14;

fn constants(out: &mut dyn Write) -> io::Result<()> {
    const WORLD: &str = "세계";
    const TRUTH: bool = true;
    writeln!(out, "Hello {WORLD}")?;
    writeln!(out, "Happy {PI} Day")?;
    writeln!(out, "Rust rules? {TRUTH}")
}

/// 1 followed by 100 binary zeroes.
const BIG: u128 = 1 << 100;
/// Shifted back 99 places: binary 10.
const SMALL: u128 = BIG >> 99;

fn need_int(x: i64) -> i64 {
    x * 10 + 1
}

fn need_float(x: f64) -> f64 {
    x * 0.1
}

fn numeric_constants(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{}", need_int(SMALL as i64))?;
    writeln!(out, "{}", need_float(SMALL as f64))?;
    writeln!(out, "{:e}", need_float(BIG as f64))
}
