//! Resource-level mesh types.
//!
//! A `Mesh` is a CPU-side vertex list plus the `Material` it is drawn with.
//! Uploading the vertices to a GPU buffer is the renderer's job; `as_bytes`
//! exposes them in the layout the renderer expects.

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};
use crate::resource::material::Material;

/// Determinant magnitude below which a triangle's uv mapping is degenerate
const UV_DETERMINANT_EPSILON: f32 = 1e-8;

// ============================================================================
// VERTEX
// ============================================================================

/// Interleaved vertex: position, normal, uv, tangent, bitangent
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Vertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub uv: Vec2,
    pub tangent: Vec3,
    pub bitangent: Vec3,
}

impl Vertex {
    /// Vertex with a zero tangent basis (filled in by `compute_tangent_basis`)
    pub fn new(position: Vec3, normal: Vec3, uv: Vec2) -> Self {
        Self {
            position,
            normal,
            uv,
            tangent: Vec3::ZERO,
            bitangent: Vec3::ZERO,
        }
    }
}

/// Tangent and bitangent of one triangle
///
/// Solves
///
/// ```text
/// e1 = du1 * T + dv1 * B
/// e2 = du2 * T + dv2 * B
/// ```
///
/// for T and B, with `e1`, `e2` the triangle edges from `p0` and
/// `(du, dv)` the matching uv deltas. Returns normalized vectors, or `None`
/// when the uv mapping is degenerate.
pub fn triangle_tangent_basis(
    p0: Vec3, p1: Vec3, p2: Vec3,
    uv0: Vec2, uv1: Vec2, uv2: Vec2,
) -> Option<(Vec3, Vec3)> {
    let e1 = p1 - p0;
    let e2 = p2 - p0;
    let d1 = uv1 - uv0;
    let d2 = uv2 - uv0;

    let det = d1.x * d2.y - d2.x * d1.y;
    if det.abs() < UV_DETERMINANT_EPSILON {
        return None;
    }
    let r = 1.0 / det;

    let tangent = (e1 * d2.y - e2 * d1.y) * r;
    let bitangent = (e2 * d1.x - e1 * d2.x) * r;
    Some((tangent.normalize_or_zero(), bitangent.normalize_or_zero()))
}

/// Fill tangent/bitangent of every triangle in a non-indexed triangle list
///
/// All three vertices of a triangle get that triangle's basis. Degenerate
/// triangles and a trailing partial triangle are left untouched.
pub fn compute_tangent_basis(vertices: &mut [Vertex]) {
    for tri in vertices.chunks_exact_mut(3) {
        let basis = triangle_tangent_basis(
            tri[0].position, tri[1].position, tri[2].position,
            tri[0].uv, tri[1].uv, tri[2].uv,
        );
        if let Some((tangent, bitangent)) = basis {
            for v in tri.iter_mut() {
                v.tangent = tangent;
                v.bitangent = bitangent;
            }
        }
    }
}

// ============================================================================
// MESH
// ============================================================================

/// A triangle list and its material
#[derive(Debug, Clone)]
pub struct Mesh {
    vertices: Vec<Vertex>,
    material: Material,
}

impl Mesh {
    pub fn new(vertices: Vec<Vertex>, material: Material) -> Self {
        Self { vertices, material }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Vertices as raw bytes for buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

#[cfg(test)]
#[path = "mesh_tests.rs"]
mod tests;
