//! Builds a camera and a perspective projection, then projects points through them.
//!
//! ```text
//! kiln-view --eye 0,1,5 --axis 0,1,0 --angle 0.3 0,0,0 1,1,-2
//! ```

use std::str::FromStr;

use anyhow::{ensure, Context};
use clap::Parser;
use kiln_linalg::{camera_mat, perspective_mat, Mat4, Mat4x3, Quat, Vec3f, Vector};
use log::LevelFilter;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Config {
    /// Camera position, as `x,y,z`.
    #[arg(long, default_value = "0,0,5", value_parser = parse_vec3, allow_hyphen_values = true)]
    eye: Vec3f,

    /// Axis the camera is rotated around, as `x,y,z`. Normalized before use.
    #[arg(long, default_value = "0,1,0", value_parser = parse_vec3, allow_hyphen_values = true)]
    axis: Vec3f,

    /// Camera rotation around `--axis`, in radians.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    angle: f32,

    /// Vertical field of view, in radians.
    #[arg(long, env = "KILN_FOVY", default_value_t = std::f32::consts::FRAC_PI_3)]
    fovy: f32,

    /// Viewport width divided by height.
    #[arg(long, env = "KILN_ASPECT", default_value_t = 16.0 / 9.0)]
    aspect: f32,

    /// Distance to the near clipping plane.
    #[arg(long, env = "KILN_NEAR", default_value_t = 0.1)]
    near: f32,

    /// Distance to the far clipping plane.
    #[arg(long, env = "KILN_FAR", default_value_t = 100.0)]
    far: f32,

    /// World-space points to project, as `x,y,z`.
    #[arg(value_parser = parse_vec3, allow_hyphen_values = true)]
    points: Vec<Vec3f>,
}

impl Config {
    fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.fovy > 0.0 && self.fovy < std::f32::consts::PI,
            "field of view must be between 0 and pi radians, got {}",
            self.fovy
        );
        ensure!(self.aspect > 0.0, "aspect ratio must be positive, got {}", self.aspect);
        ensure!(
            0.0 < self.near && self.near < self.far,
            "clipping planes must satisfy 0 < near < far, got near={} far={}",
            self.near,
            self.far
        );
        ensure!(
            self.axis.length2() > 0.0,
            "rotation axis must not be the zero vector"
        );
        Ok(())
    }

    /// The camera's orientation, turned counterclockwise by `angle` around `axis`.
    fn orientation(&self) -> Quat<f32> {
        // `rotation_mat` turns an axis-angle quaternion clockwise.
        Quat::from_axis_angle(self.axis.normalize(), self.angle).conjugate()
    }

    fn camera(&self) -> Camera {
        Camera {
            view: camera_mat(self.eye, self.orientation()),
            projection: perspective_mat(self.fovy, self.aspect, self.near, self.far),
        }
    }
}

/// Parses a vector written as three comma-separated numbers.
fn parse_vec3(s: &str) -> anyhow::Result<Vec3f> {
    let elems = s
        .split(',')
        .map(|elem| {
            f32::from_str(elem.trim()).with_context(|| format!("invalid number '{}'", elem.trim()))
        })
        .collect::<anyhow::Result<Vec<_>>>()
        .with_context(|| format!("failed to parse vector '{s}'"))?;

    let vec = Vector::try_from(&elems[..])
        .with_context(|| format!("failed to parse vector '{s}'"))?;
    Ok(vec)
}

struct Camera {
    view: Mat4x3<f32>,
    projection: Mat4<f32>,
}

impl Camera {
    /// Projects a world-space point to normalized device coordinates.
    ///
    /// Returns [`None`] for points on or behind the camera plane.
    fn project(&self, point: Vec3f) -> Option<Vec3f> {
        let eye_space = self.view * point.extend(1.0);
        let clip = self.projection * eye_space.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        Some(clip.xyz() / clip.w)
    }
}

fn init_logger() {
    let log_level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter(Some(env!("CARGO_CRATE_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

fn main() -> anyhow::Result<()> {
    init_logger();

    let config = Config::parse();
    log::debug!("{:?}", config);
    config.validate().context("invalid configuration")?;

    let camera = config.camera();
    println!("view = {:?}", camera.view);
    println!("projection = {:?}", camera.projection);

    if config.points.is_empty() {
        log::info!("no points given, only printing matrices");
    }

    for point in &config.points {
        match camera.project(*point) {
            Some(ndc) => {
                let visible = ndc.as_array().iter().all(|c| (-1.0..=1.0).contains(c));
                println!("{point:.4} -> {ndc:.4}{}", if visible { "" } else { " (clipped)" });
            }
            None => {
                log::warn!("{point} is behind the camera");
                println!("{point:.4} -> behind camera");
            }
        }
    }

    Ok(())
}
