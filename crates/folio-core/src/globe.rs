//! Rotating point globe model
//!
//! Only the point cloud and the rotation/drag interaction live here; drawing
//! is left to the host.

use std::f64::consts::{FRAC_PI_2, PI};
use std::time::Duration;

/// Point on the unit sphere
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Projected point: `x`, `y` in `[-1, 1]`, `depth` in `[0, 1]` (1 = nearest)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    pub depth: f64,
}

/// Evenly distributed points (Fibonacci sphere)
pub fn fibonacci_sphere(count: usize) -> Vec<Point3> {
    let golden_angle = PI * (3.0 - 5f64.sqrt());
    let n = count.max(1) as f64;
    (0..count)
        .map(|i| {
            let y = 1.0 - 2.0 * (i as f64 + 0.5) / n;
            let radius = (1.0 - y * y).sqrt();
            let theta = golden_angle * i as f64;
            Point3 {
                x: theta.cos() * radius,
                y,
                z: theta.sin() * radius,
            }
        })
        .collect()
}

/// Max tilt while dragging, just short of the poles
const MAX_PITCH: f64 = FRAC_PI_2 * 0.9;

#[derive(Debug, Clone)]
pub struct Globe {
    points: Vec<Point3>,
    yaw: f64,
    pitch: f64,
    speed: f64,
    resume_after: Duration,
    idle: Duration,
    dragging: bool,
}

impl Globe {
    /// `speed` in radians per second
    pub fn new(points: usize, speed: f64, resume_after: Duration) -> Self {
        Self {
            points: fibonacci_sphere(points),
            yaw: 0.0,
            pitch: 0.3,
            speed,
            resume_after,
            idle: resume_after,
            dragging: false,
        }
    }

    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    pub fn yaw(&self) -> f64 {
        self.yaw
    }

    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    /// Whether auto-rotation is currently running
    pub fn auto_rotating(&self) -> bool {
        !self.dragging && self.idle >= self.resume_after
    }

    /// Advance the animation loop by `dt`
    pub fn tick(&mut self, dt: Duration) {
        if self.dragging {
            return;
        }
        if self.idle < self.resume_after {
            self.idle += dt;
            return;
        }
        self.yaw = (self.yaw + self.speed * dt.as_secs_f64()) % (2.0 * PI);
    }

    /// Rotate by a drag delta (radians); pauses auto-rotation
    pub fn drag(&mut self, d_yaw: f64, d_pitch: f64) {
        self.dragging = true;
        self.yaw = (self.yaw + d_yaw).rem_euclid(2.0 * PI);
        self.pitch = (self.pitch + d_pitch).clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Drag finished; auto-rotation resumes after the idle delay
    pub fn release(&mut self) {
        if self.dragging {
            self.dragging = false;
            self.idle = Duration::ZERO;
        }
    }

    /// Orthographic projection of every point at the current rotation
    pub fn project(&self) -> Vec<Projected> {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        self.points
            .iter()
            .map(|p| {
                // yaw around Y, then pitch around X
                let x = p.x * cy + p.z * sy;
                let z = -p.x * sy + p.z * cy;
                let y = p.y * cp - z * sp;
                let z = p.y * sp + z * cp;
                Projected {
                    x,
                    y,
                    depth: (z + 1.0) / 2.0,
                }
            })
            .collect()
    }
}
