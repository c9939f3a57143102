//! 3D point-cloud scenes for the hero and section backgrounds.
//!
//! These types avoid platform APIs; the web renderer uploads
//! [`PointScene::positions`] once and [`PointScene::uniforms`] every frame.

use crate::constants::{
    CAMERA_FOVY_DEG, HERO_CAMERA_Z, HERO_COLOR, HERO_POINTS, HERO_POINT_SIZE, HERO_SPREAD,
    POINT_SPIN_PER_FRAME, SECTION_CAMERA_Z, SECTION_COLOR, SECTION_POINTS, SECTION_POINT_SIZE,
    SECTION_SPREAD,
};
use glam::{Mat4, Vec2, Vec3};
use rand::prelude::*;

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn looking_down_z(z: f32, aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: 0.1,
            zfar: 1000.0,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointCloudConfig {
    pub count: usize,
    /// Points fill a cube of this edge length centred on the origin.
    pub spread: f32,
    pub point_size: f32,
    pub color: [f32; 3],
    pub camera_z: f32,
}

impl PointCloudConfig {
    pub const HERO: Self = Self {
        count: HERO_POINTS,
        spread: HERO_SPREAD,
        point_size: HERO_POINT_SIZE,
        color: HERO_COLOR,
        camera_z: HERO_CAMERA_Z,
    };

    pub const SECTION: Self = Self {
        count: SECTION_POINTS,
        spread: SECTION_SPREAD,
        point_size: SECTION_POINT_SIZE,
        color: SECTION_COLOR,
        camera_z: SECTION_CAMERA_Z,
    };
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointUniforms {
    pub model_view: [[f32; 4]; 4],
    pub proj: [[f32; 4]; 4],
    pub color: [f32; 4],
    /// x: billboard edge in view units, yzw unused.
    pub params: [f32; 4],
}

#[derive(Clone, Debug)]
pub struct PointScene {
    pub config: PointCloudConfig,
    pub positions: Vec<Vec3>,
    /// Euler rotation (x, y) in radians, applied X then Y.
    pub rotation: Vec2,
    pub camera: Camera,
}

impl PointScene {
    pub fn new(config: PointCloudConfig, aspect: f32, rng: &mut impl Rng) -> Self {
        let half = config.spread * 0.5;
        let positions = (0..config.count)
            .map(|_| {
                Vec3::new(
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                )
            })
            .collect();
        Self {
            config,
            positions,
            rotation: Vec2::ZERO,
            camera: Camera::looking_down_z(config.camera_z, aspect),
        }
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.camera.aspect = width.max(1.0) / height.max(1.0);
    }

    /// Points the cloud after the pointer; inputs are normalized 0..1.
    pub fn follow_pointer(&mut self, nx: f32, ny: f32) {
        self.rotation = Vec2::new(ny * 2.0, nx * 2.0);
    }

    pub fn tick(&mut self) {
        self.rotation.y += POINT_SPIN_PER_FRAME;
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_x(self.rotation.x) * Mat4::from_rotation_y(self.rotation.y)
    }

    pub fn uniforms(&self) -> PointUniforms {
        let model_view = self.camera.view_matrix() * self.model_matrix();
        // Matches size-attenuated points: `point_size` world units span
        // point_size * height / (2 * depth) pixels.
        let billboard = self.config.point_size * (self.camera.fovy_radians * 0.5).tan();
        let [r, g, b] = self.config.color;
        PointUniforms {
            model_view: model_view.to_cols_array_2d(),
            proj: self.camera.projection_matrix().to_cols_array_2d(),
            color: [r, g, b, 1.0],
            params: [billboard, 0.0, 0.0, 0.0],
        }
    }
}
