use std::f32::consts::TAU;

use glam::{EulerRot, Mat4, Quat, Vec3};

use crate::core::color::palette;
use crate::material::Material;

const SPIN: Vec3 = Vec3::new(0.005, 0.005, 0.002);
const FLOAT_STEP: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeKind {
    Torus {
        radius: f32,
        tube: f32,
        radial_segments: u32,
        tubular_segments: u32,
    },
    Icosahedron {
        radius: f32,
    },
    Octahedron {
        radius: f32,
    },
}

impl ShapeKind {
    /// Local-space wireframe as a list of segments.
    pub fn wireframe(&self) -> Vec<[Vec3; 2]> {
        match *self {
            ShapeKind::Torus {
                radius,
                tube,
                radial_segments,
                tubular_segments,
            } => torus_wireframe(radius, tube, radial_segments, tubular_segments),
            ShapeKind::Icosahedron { radius } => icosahedron_wireframe(radius),
            ShapeKind::Octahedron { radius } => octahedron_wireframe(radius),
        }
    }
}

/// A slowly tumbling wireframe solid.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub position: Vec3,
    pub rotation: Vec3,
    pub material: Material,
    segments: Vec<[Vec3; 2]>,
}

impl Shape {
    pub fn new(kind: ShapeKind, position: Vec3, material: Material) -> Self {
        Self {
            segments: kind.wireframe(),
            kind,
            position,
            rotation: Vec3::ZERO,
            material,
        }
    }

    pub fn transform(&self) -> Mat4 {
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_rotation_translation(rotation, self.position)
    }

    pub fn segments(&self) -> &[[Vec3; 2]] {
        &self.segments
    }

    /// Segments with the current transform applied.
    pub fn world_segments(&self) -> impl Iterator<Item = [Vec3; 2]> + '_ {
        let transform = self.transform();
        self.segments.iter().map(move |[a, b]| {
            [transform.transform_point3(*a), transform.transform_point3(*b)]
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShapeSet {
    pub shapes: Vec<Shape>,
}

impl Default for ShapeSet {
    fn default() -> Self {
        Self {
            shapes: vec![
                Shape::new(
                    ShapeKind::Torus {
                        radius: 3.0,
                        tube: 0.8,
                        radial_segments: 16,
                        tubular_segments: 100,
                    },
                    Vec3::new(-8.0, 0.0, 0.0),
                    Material::wireframe(palette::BLUE),
                ),
                Shape::new(
                    ShapeKind::Icosahedron { radius: 2.5 },
                    Vec3::new(8.0, 0.0, 0.0),
                    Material::wireframe(palette::VIOLET),
                ),
                Shape::new(
                    ShapeKind::Octahedron { radius: 2.0 },
                    Vec3::new(0.0, 5.0, -5.0),
                    Material::wireframe(palette::PINK),
                ),
            ],
        }
    }
}

impl ShapeSet {
    pub fn animate(&mut self, t: f32) {
        for (i, shape) in self.shapes.iter_mut().enumerate() {
            shape.rotation += SPIN;
            shape.position.y += (t + i as f32).sin() * FLOAT_STEP;
        }
    }
}

fn torus_wireframe(radius: f32, tube: f32, radial: u32, tubular: u32) -> Vec<[Vec3; 2]> {
    let point = |j: u32, i: u32| {
        let u = i as f32 / tubular as f32 * TAU;
        let v = j as f32 / radial as f32 * TAU;
        Vec3::new(
            (radius + tube * v.cos()) * u.cos(),
            (radius + tube * v.cos()) * u.sin(),
            tube * v.sin(),
        )
    };

    let mut segments = Vec::with_capacity((radial * tubular * 2) as usize);
    for j in 0..radial {
        for i in 0..tubular {
            let here = point(j, i);
            segments.push([here, point(j, (i + 1) % tubular)]);
            segments.push([here, point((j + 1) % radial, i)]);
        }
    }
    segments
}

fn polyhedron_edges(vertices: &[Vec3], radius: f32) -> Vec<[Vec3; 2]> {
    let vertices: Vec<Vec3> = vertices.iter().map(|v| v.normalize() * radius).collect();
    let shortest = vertices
        .iter()
        .enumerate()
        .flat_map(|(i, a)| vertices[i + 1..].iter().map(move |b| a.distance(*b)))
        .fold(f32::INFINITY, f32::min);

    let mut segments = Vec::new();
    for (i, a) in vertices.iter().enumerate() {
        for b in &vertices[i + 1..] {
            if (a.distance(*b) - shortest).abs() < shortest * 1e-3 {
                segments.push([*a, *b]);
            }
        }
    }
    segments
}

fn icosahedron_wireframe(radius: f32) -> Vec<[Vec3; 2]> {
    let t = (1.0 + 5.0f32.sqrt()) / 2.0;
    let vertices = [
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ];
    polyhedron_edges(&vertices, radius)
}

fn octahedron_wireframe(radius: f32) -> Vec<[Vec3; 2]> {
    let vertices = [Vec3::X, Vec3::NEG_X, Vec3::Y, Vec3::NEG_Y, Vec3::Z, Vec3::NEG_Z];
    polyhedron_edges(&vertices, radius)
}
