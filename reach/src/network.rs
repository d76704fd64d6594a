use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

use crate::config::NetworkConfig;
use crate::material::{LineMaterial, Material};

pub const NODE_RADIUS: f32 = 0.2;
const PULSE_AMPLITUDE: f32 = 0.1;
const SPIN_PER_FRAME: f32 = 0.01;
const GROWTH_JITTER: f32 = 4.0;

/// A vertex of the decorative network.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub position: Vec3,
    /// Height the float oscillates around.
    pub rest_y: f32,
    /// Drawn at creation with `amplitude`; the float depends only on time and
    /// amplitude, so it stays frame-rate independent.
    pub speed: f32,
    /// Peak vertical offset from `rest_y`.
    pub amplitude: f32,
    /// Euler angles, radians. Advanced every frame but not read by the draw
    /// list: nodes render as spheres, which look the same at any rotation.
    pub rotation: Vec3,
    /// Pulse scale from the frame step.
    pub scale: f32,
    /// Growth factor in [0, 1]; initial nodes are fully grown.
    pub reveal: f32,
    pub connections: Vec<usize>,
    pub material: Material,
    /// Snapshot taken by the first highlight.
    pub original_material: Option<Material>,
}

impl Node {
    fn new(position: Vec3, rng: &mut impl Rng, material: Material, reveal: f32) -> Self {
        Self {
            position,
            rest_y: position.y,
            speed: rng.gen_range(0.01..0.03),
            amplitude: rng.gen_range(0.2..0.7),
            rotation: Vec3::ZERO,
            scale: 1.0,
            reveal,
            connections: Vec::new(),
            material,
            original_material: None,
        }
    }

    /// Drawn radius: base radius times pulse times growth.
    pub fn radius(&self) -> f32 {
        NODE_RADIUS * self.scale * self.reveal
    }
}

/// Connection between two nodes. Endpoints are copied at creation and never
/// follow the nodes afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    pub from: Vec3,
    pub to: Vec3,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub line_material: LineMaterial,
}

/// Uniform point on a sphere: uniform azimuth, polar angle from the inverse
/// cosine of a uniform draw so the poles are not oversampled.
pub fn sphere_point(radius: f32, rng: &mut impl Rng) -> Vec3 {
    let theta = rng.gen_range(0.0..TAU);
    let phi = (2.0 * rng.gen_range(0.0f32..1.0) - 1.0).acos();
    Vec3::new(
        radius * phi.sin() * theta.cos(),
        radius * phi.sin() * theta.sin(),
        radius * phi.cos(),
    )
}

impl Network {
    pub fn generate(config: &NetworkConfig, rng: &mut impl Rng) -> Self {
        let mut nodes: Vec<Node> = (0..config.node_count)
            .map(|_| {
                let position = sphere_point(config.radius, rng);
                Node::new(position, rng, Material::node(), 1.0)
            })
            .collect();

        let mut edges = Vec::new();
        for i in 0..nodes.len() {
            for j in (i + 1)..nodes.len() {
                let from = nodes[i].position;
                let to = nodes[j].position;
                if from.distance(to) < config.link_distance
                    && rng.gen_range(0.0f32..1.0) > config.link_cutoff
                {
                    edges.push(Edge { a: i, b: j, from, to });
                    nodes[i].connections.push(j);
                    nodes[j].connections.push(i);
                }
            }
        }

        tracing::debug!(
            target: "engine",
            nodes = nodes.len(),
            edges = edges.len(),
            "network generated"
        );

        Self {
            nodes,
            edges,
            line_material: LineMaterial::link(),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        index < self.nodes.len()
    }

    /// Appends `count` transparent, zero-size nodes next to random existing
    /// ones and returns their index range. Grown nodes get no edges.
    pub fn grow(&mut self, count: usize, rng: &mut impl Rng) -> std::ops::Range<usize> {
        let first = self.nodes.len();
        for _ in 0..count {
            let anchor = if self.nodes.is_empty() {
                Vec3::ZERO
            } else {
                self.nodes[rng.gen_range(0..self.nodes.len())].position
            };
            let half = GROWTH_JITTER / 2.0;
            let jitter = Vec3::new(
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
            );
            let node = Node::new(anchor + jitter, rng, Material::seedling(), 0.0);
            self.nodes.push(node);
        }
        first..self.nodes.len()
    }

    /// Float, pulse and spin for every node at time `t` (seconds).
    pub fn animate(&mut self, t: f32) {
        for (i, node) in self.nodes.iter_mut().enumerate() {
            let phase = t + i as f32;
            node.position.y = node.rest_y + phase.sin() * node.amplitude;

            node.scale = 1.0 + (t * 2.0 + i as f32).sin() * PULSE_AMPLITUDE;

            node.rotation.x += SPIN_PER_FRAME;
            node.rotation.y += SPIN_PER_FRAME;
        }
    }
}
