// Host-side tests for procedural geometry.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod geometry {
    include!("../src/core/geometry.rs");
}

use geometry::*;
use glam::Vec3;

fn find(label: &str) -> Geometry {
    *DECORATIVE_GEOMETRIES
        .iter()
        .find(|g| g.label() == label)
        .unwrap()
}

#[test]
fn geometry_order_is_fixed() {
    let labels: Vec<_> = DECORATIVE_GEOMETRIES.iter().map(|g| g.label()).collect();
    assert_eq!(
        labels,
        [
            "torus_knot",
            "icosahedron",
            "octahedron",
            "tetrahedron",
            "dodecahedron",
            "sphere"
        ]
    );
}

#[test]
fn platonic_triangle_counts() {
    assert_eq!(find("tetrahedron").build().triangle_count(), 4);
    assert_eq!(find("octahedron").build().triangle_count(), 8);
    assert_eq!(find("icosahedron").build().triangle_count(), 20);
    assert_eq!(find("dodecahedron").build().triangle_count(), 36);
}

#[test]
fn curved_triangle_counts() {
    // 100 tubular x 16 radial quads
    assert_eq!(find("torus_knot").build().triangle_count(), 3200);
    // 32 x 32 with the pole rows halved
    assert_eq!(find("sphere").build().triangle_count(), 32 * 31 * 2);
}

#[test]
fn normals_are_unit_length() {
    for g in DECORATIVE_GEOMETRIES {
        let mesh = g.build();
        for v in &mesh.vertices {
            let len = Vec3::from_array(v.normal).length();
            assert!((len - 1.0).abs() < 1e-3, "{} normal length {}", g.label(), len);
        }
    }
}

#[test]
fn indices_stay_in_range() {
    for g in DECORATIVE_GEOMETRIES {
        let mesh = g.build();
        assert_eq!(mesh.indices.len() % 3, 0);
        let n = mesh.vertices.len() as u32;
        assert!(mesh.indices.iter().all(|&i| i < n), "{}", g.label());
    }
}

#[test]
fn polyhedron_faces_point_outward() {
    for label in ["tetrahedron", "octahedron", "icosahedron", "dodecahedron"] {
        let mesh = find(label).build();
        for tri in mesh.indices.chunks_exact(3) {
            let p: Vec<Vec3> = tri
                .iter()
                .map(|&i| Vec3::from_array(mesh.vertices[i as usize].position))
                .collect();
            let winding = (p[1] - p[0]).cross(p[2] - p[0]);
            let centroid = (p[0] + p[1] + p[2]) / 3.0;
            assert!(winding.dot(centroid) > 0.0, "{} face winds inward", label);
            let n = Vec3::from_array(mesh.vertices[tri[0] as usize].normal);
            assert!(n.dot(centroid) > 0.0, "{} normal points inward", label);
        }
    }
}

#[test]
fn polyhedron_corners_sit_on_radius() {
    for (label, radius) in [
        ("icosahedron", 0.8),
        ("octahedron", 0.7),
        ("tetrahedron", 0.8),
        ("dodecahedron", 0.7),
    ] {
        for v in find(label).build().vertices {
            let r = Vec3::from_array(v.position).length();
            assert!((r - radius).abs() < 1e-4, "{} corner at {}", label, r);
        }
    }
}

#[test]
fn sphere_vertices_sit_on_radius() {
    for v in find("sphere").build().vertices {
        assert!((Vec3::from_array(v.position).length() - 0.5).abs() < 1e-4);
    }
}
