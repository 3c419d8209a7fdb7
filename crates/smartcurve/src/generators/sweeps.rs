//! Sweeps around an axis while rising along it.

use std::f64::consts::TAU;

use rand::RngCore;
use smartcurve_core::Result;
use smartcurve_math::{Axis, Point3};

use super::fractions;
use crate::config::{HelixConfig, SpiralConfig};

fn direction(clockwise: Option<bool>) -> f64 {
    if clockwise.unwrap_or(true) {
        1.0
    } else {
        -1.0
    }
}

pub fn spiral(config: &SpiralConfig, _rng: &mut dyn RngCore) -> Result<Vec<Point3>> {
    let axis = config.axis.unwrap_or(Axis::Y);
    let radius = config.radius.unwrap_or(3.0);
    let height = config.height.unwrap_or(10.0);
    let turns = config.turns.unwrap_or(3.0);
    let segments = config.base.segments_or(50)?;
    let dir = direction(config.clockwise);
    let (c1, c2) = axis.others();

    Ok(fractions(segments)
        .map(|(_, u)| {
            let angle = dir * u * TAU * turns;
            let mut p = Point3::ZERO;
            p[axis.index()] = u * height - height / 2.0;
            p[c1.index()] = angle.cos() * radius;
            p[c2.index()] = angle.sin() * radius;
            p
        })
        .collect())
}

/// Y-up helix; same sweep as a y-axis spiral with its own defaults.
pub fn helix(config: &HelixConfig, _rng: &mut dyn RngCore) -> Result<Vec<Point3>> {
    let radius = config.radius.unwrap_or(2.0);
    let height = config.height.unwrap_or(10.0);
    let turns = config.turns.unwrap_or(5.0);
    let segments = config.base.segments_or(50)?;
    let dir = direction(config.clockwise);

    Ok(fractions(segments)
        .map(|(_, u)| {
            let angle = dir * u * TAU * turns;
            Point3::new(angle.cos() * radius, u * height - height / 2.0, angle.sin() * radius)
        })
        .collect())
}
