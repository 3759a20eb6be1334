//! CPU-side mesh tessellation for the scene objects

use glam::Vec3;
use std::f32::consts::PI;

/// Vertex with position and texture coordinate
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

impl MeshVertex {
    const ATTRIBS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3,
        1 => Float32x2,
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Indexed triangle mesh
pub struct Mesh {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    /// Translate all vertices by an offset
    pub fn translated(mut self, offset: Vec3) -> Self {
        for v in &mut self.vertices {
            v.position[0] += offset.x;
            v.position[1] += offset.y;
            v.position[2] += offset.z;
        }
        self
    }

    /// Mirror the mesh through the xz plane, flipping winding to keep
    /// front faces consistent
    pub fn mirrored_y(mut self) -> Self {
        for v in &mut self.vertices {
            v.position[1] = -v.position[1];
        }
        for tri in self.indices.chunks_exact_mut(3) {
            tri.swap(1, 2);
        }
        self
    }
}

/// UV sphere centered at the origin
pub fn uv_sphere(radius: f32, sectors: u32, stacks: u32) -> Mesh {
    let mut vertices = Vec::with_capacity(((sectors + 1) * (stacks + 1)) as usize);
    let mut indices = Vec::with_capacity((6 * sectors * stacks) as usize);

    for i in 0..=stacks {
        let v = i as f32 / stacks as f32;
        let phi = v * PI;
        for j in 0..=sectors {
            let u = j as f32 / sectors as f32;
            let theta = u * 2.0 * PI;

            vertices.push(MeshVertex {
                position: [
                    radius * phi.sin() * theta.cos(),
                    radius * phi.cos(),
                    radius * phi.sin() * theta.sin(),
                ],
                uv: [u, v],
            });
        }
    }

    for i in 0..stacks {
        for j in 0..sectors {
            let a = i * (sectors + 1) + j;
            let b = a + sectors + 1;
            indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
        }
    }

    Mesh { vertices, indices }
}

/// Flat annulus in the xz plane (y = 0)
///
/// uv.x runs around the ring, uv.y from the inner to the outer edge.
pub fn ring(inner_radius: f32, outer_radius: f32, sectors: u32, rings: u32) -> Mesh {
    let mut vertices = Vec::with_capacity(((sectors + 1) * (rings + 1)) as usize);
    let mut indices = Vec::with_capacity((6 * sectors * rings) as usize);

    for i in 0..=rings {
        let v = i as f32 / rings as f32;
        let r = inner_radius + v * (outer_radius - inner_radius);
        for j in 0..=sectors {
            let u = j as f32 / sectors as f32;
            let theta = u * 2.0 * PI;

            vertices.push(MeshVertex {
                position: [r * theta.cos(), 0.0, r * theta.sin()],
                uv: [u, v],
            });
        }
    }

    for i in 0..rings {
        for j in 0..sectors {
            let a = i * (sectors + 1) + j;
            let b = a + sectors + 1;
            indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
        }
    }

    Mesh { vertices, indices }
}

/// Open cone/cylinder along the y axis, centered at the origin
///
/// `radius_top` at +height/2, `radius_bottom` at -height/2. uv.y runs from
/// bottom (0) to top (1).
pub fn cylinder(radius_top: f32, radius_bottom: f32, height: f32, sectors: u32) -> Mesh {
    let mut vertices = Vec::with_capacity((2 * (sectors + 1)) as usize);
    let mut indices = Vec::with_capacity((6 * sectors) as usize);

    let half = height / 2.0;
    for (v, y, r) in [(0.0, -half, radius_bottom), (1.0, half, radius_top)] {
        for j in 0..=sectors {
            let u = j as f32 / sectors as f32;
            let theta = u * 2.0 * PI;
            vertices.push(MeshVertex {
                position: [r * theta.cos(), y, r * theta.sin()],
                uv: [u, v],
            });
        }
    }

    for j in 0..sectors {
        let a = j;
        let b = j + sectors + 1;
        indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
    }

    Mesh { vertices, indices }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_counts() {
        let m = uv_sphere(1.0, 64, 64);
        assert_eq!(m.vertices.len(), 65 * 65);
        assert_eq!(m.indices.len(), 6 * 64 * 64);
    }

    #[test]
    fn test_sphere_vertices_on_surface() {
        let m = uv_sphere(2.5, 16, 16);
        for v in &m.vertices {
            let r = Vec3::from(v.position).length();
            assert!((r - 2.5).abs() < 1e-4);
        }
    }

    #[test]
    fn test_ring_radii_bounded() {
        let m = ring(3.0, 8.0, 32, 8);
        for v in &m.vertices {
            let r = (v.position[0] * v.position[0] + v.position[2] * v.position[2]).sqrt();
            assert!(r >= 3.0 - 1e-4 && r <= 8.0 + 1e-4);
            assert_eq!(v.position[1], 0.0);
        }
    }

    #[test]
    fn test_cylinder_translation() {
        let m = cylinder(0.2, 0.8, 20.0, 16).translated(Vec3::new(0.0, 12.0, 0.0));
        let ys: Vec<f32> = m.vertices.iter().map(|v| v.position[1]).collect();
        assert!(ys.iter().all(|&y| y >= 2.0 - 1e-4 && y <= 22.0 + 1e-4));
    }

    #[test]
    fn test_mirror_flips_winding() {
        let m = cylinder(0.2, 0.8, 20.0, 4);
        let first = [m.indices[0], m.indices[1], m.indices[2]];
        let mirrored = m.mirrored_y();
        assert_eq!(
            [mirrored.indices[0], mirrored.indices[1], mirrored.indices[2]],
            [first[0], first[2], first[1]]
        );
    }

    #[test]
    fn test_indices_in_bounds() {
        for m in [uv_sphere(1.0, 8, 8), ring(1.0, 2.0, 8, 4), cylinder(0.5, 1.0, 2.0, 8)] {
            let n = m.vertices.len() as u32;
            assert!(m.indices.iter().all(|&i| i < n));
        }
    }
}
