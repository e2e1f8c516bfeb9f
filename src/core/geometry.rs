use glam::{Vec2, Vec3};
use std::f32::consts::{PI, TAU};

/// Interleaved vertex uploaded as-is to the mesh vertex buffer (32 bytes).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    #[inline]
    pub fn new(position: Vec3, normal: Vec3, uv: Vec2) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
            uv: uv.to_array(),
        }
    }
}

/// CPU-side triangle list ready for upload.
#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Procedural shapes used by the decorative objects.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Geometry {
    TorusKnot {
        radius: f32,
        tube: f32,
        tubular_segments: u32,
        radial_segments: u32,
        p: u32,
        q: u32,
    },
    Icosahedron { radius: f32 },
    Octahedron { radius: f32 },
    Tetrahedron { radius: f32 },
    Dodecahedron { radius: f32 },
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
}

/// Shapes in object order; materials are assigned cyclically over this list.
pub const DECORATIVE_GEOMETRIES: [Geometry; 6] = [
    Geometry::TorusKnot {
        radius: 1.0,
        tube: 0.3,
        tubular_segments: 100,
        radial_segments: 16,
        p: 2,
        q: 3,
    },
    Geometry::Icosahedron { radius: 0.8 },
    Geometry::Octahedron { radius: 0.7 },
    Geometry::Tetrahedron { radius: 0.8 },
    Geometry::Dodecahedron { radius: 0.7 },
    Geometry::Sphere {
        radius: 0.5,
        width_segments: 32,
        height_segments: 32,
    },
];

impl Geometry {
    pub fn label(&self) -> &'static str {
        match self {
            Geometry::TorusKnot { .. } => "torus_knot",
            Geometry::Icosahedron { .. } => "icosahedron",
            Geometry::Octahedron { .. } => "octahedron",
            Geometry::Tetrahedron { .. } => "tetrahedron",
            Geometry::Dodecahedron { .. } => "dodecahedron",
            Geometry::Sphere { .. } => "sphere",
        }
    }

    pub fn build(&self) -> MeshData {
        match *self {
            Geometry::TorusKnot {
                radius,
                tube,
                tubular_segments,
                radial_segments,
                p,
                q,
            } => torus_knot(radius, tube, tubular_segments, radial_segments, p, q),
            Geometry::Icosahedron { radius } => {
                flat_polyhedron(&ICOSAHEDRON_CORNERS, &ICOSAHEDRON_FACES, radius)
            }
            Geometry::Octahedron { radius } => {
                flat_polyhedron(&OCTAHEDRON_CORNERS, &OCTAHEDRON_FACES, radius)
            }
            Geometry::Tetrahedron { radius } => {
                flat_polyhedron(&TETRAHEDRON_CORNERS, &TETRAHEDRON_FACES, radius)
            }
            Geometry::Dodecahedron { radius } => {
                flat_polyhedron(&DODECAHEDRON_CORNERS, &DODECAHEDRON_FACES, radius)
            }
            Geometry::Sphere {
                radius,
                width_segments,
                height_segments,
            } => uv_sphere(radius, width_segments, height_segments),
        }
    }
}

// ---------------- Platonic solids ----------------

const PHI: f32 = 1.618_034;
const INV_PHI: f32 = 1.0 / PHI;

const TETRAHEDRON_CORNERS: [[f32; 3]; 4] = [
    [1.0, 1.0, 1.0],
    [-1.0, -1.0, 1.0],
    [-1.0, 1.0, -1.0],
    [1.0, -1.0, -1.0],
];
const TETRAHEDRON_FACES: [[u16; 3]; 4] = [[2, 1, 0], [0, 3, 2], [1, 3, 0], [2, 3, 1]];

const OCTAHEDRON_CORNERS: [[f32; 3]; 6] = [
    [1.0, 0.0, 0.0],
    [-1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, -1.0, 0.0],
    [0.0, 0.0, 1.0],
    [0.0, 0.0, -1.0],
];
const OCTAHEDRON_FACES: [[u16; 3]; 8] = [
    [0, 2, 4],
    [0, 4, 3],
    [0, 3, 5],
    [0, 5, 2],
    [1, 2, 5],
    [1, 5, 3],
    [1, 3, 4],
    [1, 4, 2],
];

const ICOSAHEDRON_CORNERS: [[f32; 3]; 12] = [
    [-1.0, PHI, 0.0],
    [1.0, PHI, 0.0],
    [-1.0, -PHI, 0.0],
    [1.0, -PHI, 0.0],
    [0.0, -1.0, PHI],
    [0.0, 1.0, PHI],
    [0.0, -1.0, -PHI],
    [0.0, 1.0, -PHI],
    [PHI, 0.0, -1.0],
    [PHI, 0.0, 1.0],
    [-PHI, 0.0, -1.0],
    [-PHI, 0.0, 1.0],
];
const ICOSAHEDRON_FACES: [[u16; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

const DODECAHEDRON_CORNERS: [[f32; 3]; 20] = [
    [-1.0, -1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, 1.0, 1.0],
    [1.0, -1.0, -1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, -1.0],
    [1.0, 1.0, 1.0],
    [0.0, -INV_PHI, -PHI],
    [0.0, -INV_PHI, PHI],
    [0.0, INV_PHI, -PHI],
    [0.0, INV_PHI, PHI],
    [-INV_PHI, -PHI, 0.0],
    [-INV_PHI, PHI, 0.0],
    [INV_PHI, -PHI, 0.0],
    [INV_PHI, PHI, 0.0],
    [-PHI, 0.0, -INV_PHI],
    [PHI, 0.0, -INV_PHI],
    [-PHI, 0.0, INV_PHI],
    [PHI, 0.0, INV_PHI],
];
// 12 pentagons, each fanned into three triangles
const DODECAHEDRON_FACES: [[u16; 3]; 36] = [
    [3, 11, 7],
    [3, 7, 15],
    [3, 15, 13],
    [7, 19, 17],
    [7, 17, 6],
    [7, 6, 15],
    [17, 4, 8],
    [17, 8, 10],
    [17, 10, 6],
    [8, 0, 16],
    [8, 16, 2],
    [8, 2, 10],
    [0, 12, 1],
    [0, 1, 18],
    [0, 18, 16],
    [6, 10, 2],
    [6, 2, 13],
    [6, 13, 15],
    [2, 16, 18],
    [2, 18, 3],
    [2, 3, 13],
    [18, 1, 9],
    [18, 9, 11],
    [18, 11, 3],
    [4, 14, 12],
    [4, 12, 0],
    [4, 0, 8],
    [11, 9, 5],
    [11, 5, 19],
    [11, 19, 7],
    [19, 5, 14],
    [19, 14, 4],
    [19, 4, 17],
    [1, 12, 14],
    [1, 14, 5],
    [1, 5, 9],
];

/// Non-indexed-style flat shading: every face gets its own three vertices so
/// the face normal is not averaged with neighbours.
fn flat_polyhedron(corners: &[[f32; 3]], faces: &[[u16; 3]], radius: f32) -> MeshData {
    let mut mesh = MeshData {
        vertices: Vec::with_capacity(faces.len() * 3),
        indices: Vec::with_capacity(faces.len() * 3),
    };
    for face in faces {
        let mut p = face.map(|i| Vec3::from_array(corners[i as usize]).normalize() * radius);
        let mut n = (p[1] - p[0]).cross(p[2] - p[0]).normalize();
        let centroid = (p[0] + p[1] + p[2]) / 3.0;
        // Convex and origin-centred, so outward means away from the origin.
        if n.dot(centroid) < 0.0 {
            p.swap(1, 2);
            n = -n;
        }
        for corner in p {
            mesh.indices.push(mesh.vertices.len() as u32);
            mesh.vertices
                .push(Vertex::new(corner, n, spherical_uv(corner / radius)));
        }
    }
    mesh
}

#[inline]
fn spherical_uv(dir: Vec3) -> Vec2 {
    let u = dir.z.atan2(-dir.x) / TAU + 0.5;
    let v = dir.y.clamp(-1.0, 1.0).asin() / PI + 0.5;
    Vec2::new(u, v)
}

// ---------------- Curved surfaces ----------------

fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let w = width_segments.max(3);
    let h = height_segments.max(2);
    let stride = w + 1;
    let mut mesh = MeshData {
        vertices: Vec::with_capacity(((w + 1) * (h + 1)) as usize),
        indices: Vec::with_capacity((w * h * 6) as usize),
    };
    for iy in 0..=h {
        let v = iy as f32 / h as f32;
        for ix in 0..=w {
            let u = ix as f32 / w as f32;
            let dir = Vec3::new(
                -(u * TAU).cos() * (v * PI).sin(),
                (v * PI).cos(),
                (u * TAU).sin() * (v * PI).sin(),
            );
            mesh.vertices.push(Vertex::new(
                dir * radius,
                dir.normalize_or_zero(),
                Vec2::new(u, 1.0 - v),
            ));
        }
    }
    for iy in 0..h {
        for ix in 0..w {
            let a = iy * stride + ix + 1;
            let b = iy * stride + ix;
            let c = (iy + 1) * stride + ix;
            let d = (iy + 1) * stride + ix + 1;
            // Pole rows collapse to a point; skip their degenerate half.
            if iy != 0 {
                mesh.indices.extend_from_slice(&[a, b, d]);
            }
            if iy != h - 1 {
                mesh.indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    mesh
}

fn torus_knot(
    radius: f32,
    tube: f32,
    tubular_segments: u32,
    radial_segments: u32,
    p: u32,
    q: u32,
) -> MeshData {
    let tubular = tubular_segments.max(3);
    let radial = radial_segments.max(3);
    let (p, q) = (p.max(1) as f32, q as f32);
    let curve = |u: f32| {
        let quo = q / p * u;
        let cs = quo.cos();
        Vec3::new(
            radius * (2.0 + cs) * 0.5 * u.cos(),
            radius * (2.0 + cs) * 0.5 * u.sin(),
            radius * quo.sin() * 0.5,
        )
    };

    let mut mesh = MeshData {
        vertices: Vec::with_capacity(((tubular + 1) * (radial + 1)) as usize),
        indices: Vec::with_capacity((tubular * radial * 6) as usize),
    };
    for i in 0..=tubular {
        let u = i as f32 / tubular as f32 * p * TAU;
        let p1 = curve(u);
        let p2 = curve(u + 0.01);
        // Frenet-like frame from the curve tangent and the chord midpoint.
        let t = p2 - p1;
        let mut n = p2 + p1;
        let b = t.cross(n).normalize();
        n = b.cross(t).normalize();
        for j in 0..=radial {
            let v = j as f32 / radial as f32 * TAU;
            let cx = -tube * v.cos();
            let cy = tube * v.sin();
            let pos = p1 + n * cx + b * cy;
            mesh.vertices.push(Vertex::new(
                pos,
                (pos - p1).normalize(),
                Vec2::new(i as f32 / tubular as f32, j as f32 / radial as f32),
            ));
        }
    }
    let ring = radial + 1;
    for j in 1..=tubular {
        for i in 1..=radial {
            let a = ring * (j - 1) + (i - 1);
            let b = ring * j + (i - 1);
            let c = ring * j + i;
            let d = ring * (j - 1) + i;
            mesh.indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
    mesh
}
