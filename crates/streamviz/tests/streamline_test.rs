//! End-to-end streamline tracing tests over the public API.

use streamviz::*;

fn constant_volume(dim: u32, v: Vec3) -> StructuredVolume {
    let nodes = (dim * dim * dim) as usize;
    let mut values = Vec::with_capacity(nodes * 3);
    for _ in 0..nodes {
        values.extend_from_slice(&[v.x, v.y, v.z]);
    }
    StructuredVolume::uniform_vector(UVec3::splat(dim), values).unwrap()
}

/// Constant (1,0,0) field on a 2x2x2 grid, Euler with step 0.1 from the
/// cell center, capped at 4 steps: the canonical 5-vertex trajectory.
#[test]
fn test_constant_field_trajectory() {
    let volume = constant_volume(2, Vec3::X);
    let config = StreamlineConfig {
        method: IntegrationMethod::Euler,
        interval: 0.1,
        enable_vector_length_condition: false,
        integration_times_threshold: 4,
        ..StreamlineConfig::default()
    };
    let geometry = trace_streamlines(&volume, &[Vec3::splat(0.5)], &config).unwrap();

    assert_eq!(geometry.num_vertices(), 5);
    assert_eq!(geometry.num_lines(), 1);
    assert_eq!(geometry.connections(), &[0, 4]);
    assert_eq!(geometry.coords().len(), 15);
    assert_eq!(geometry.colors().len(), 15);
    for (i, x) in [0.5_f32, 0.6, 0.7, 0.8, 0.9].into_iter().enumerate() {
        let v = geometry.vertex(i);
        assert!((v - Vec3::new(x, 0.5, 0.5)).length() < 1e-6, "vertex {i} = {v}");
    }
}

/// Zero field with the vector-length check on: one vertex per seed, no
/// connections (a connection needs distinct first/last indices).
#[test]
fn test_zero_field_critical_points() {
    let volume = constant_volume(2, Vec3::ZERO);
    let seeds = [Vec3::splat(0.5), Vec3::new(0.25, 0.5, 0.75)];
    let geometry = trace_streamlines(&volume, &seeds, &StreamlineConfig::default()).unwrap();

    assert_eq!(geometry.num_vertices(), seeds.len());
    assert_eq!(geometry.num_lines(), 0);
}

#[test]
fn test_seeds_outside_domain_yield_nothing() {
    let volume = constant_volume(3, Vec3::X);
    let seeds = [
        Vec3::new(-0.5, 1.0, 1.0),
        Vec3::new(1.0, 5.0, 1.0),
        Vec3::splat(1.0),
    ];
    let geometry = trace_streamlines(&volume, &seeds, &StreamlineConfig::default()).unwrap();

    // Only the inside seed produced geometry; never more lines than seeds.
    assert!(geometry.num_lines() <= seeds.len());
    assert_eq!(geometry.num_lines(), 1);
    assert!((geometry.vertex(0) - Vec3::splat(1.0)).length() < 1e-6);
}

/// A circulating field around the grid center: RK4 trajectories stay inside
/// and produce long polylines that roughly close on themselves.
#[test]
fn test_circulating_field_rk4() {
    let dim = 9_u32;
    let center = 4.0_f32;
    let mut values = Vec::new();
    for _k in 0..dim {
        for j in 0..dim {
            for i in 0..dim {
                let x = i as f32 - center;
                let y = j as f32 - center;
                values.extend_from_slice(&[-y, x, 0.0]);
            }
        }
    }
    let volume = StructuredVolume::uniform_vector(UVec3::splat(dim), values).unwrap();

    let config = StreamlineConfig {
        method: IntegrationMethod::RungeKutta4,
        interval: 0.05,
        integration_times_threshold: 500,
        ..StreamlineConfig::default()
    };
    let seed = Vec3::new(center + 2.0, center, 4.0);
    let geometry = trace_streamlines(&volume, &[seed], &config).unwrap();

    assert_eq!(geometry.num_lines(), 1);
    assert!(geometry.num_vertices() > 100);
    // The rotational field preserves radius about the center axis.
    for i in 0..geometry.num_vertices() {
        let v = geometry.vertex(i);
        let r = ((v.x - center).powi(2) + (v.y - center).powi(2)).sqrt();
        assert!((r - 2.0).abs() < 0.1, "vertex {i} drifted to radius {r}");
    }
}

#[test]
fn test_rectilinear_tracing() {
    // Same constant field, expressed on a stretched rectilinear grid.
    let grid = GridKind::Rectilinear {
        x: vec![0.0, 0.5, 2.0],
        y: vec![0.0, 1.0, 2.0],
        z: vec![0.0, 1.0, 2.0],
    };
    let values: Vec<f32> = (0..27).flat_map(|_| [1.0, 0.0, 0.0]).collect();
    let volume = StructuredVolume::new(UVec3::splat(3), grid, 3, values).unwrap();

    let config = StreamlineConfig {
        method: IntegrationMethod::RungeKutta2,
        interval: 0.25,
        enable_vector_length_condition: false,
        ..StreamlineConfig::default()
    };
    let geometry = trace_streamlines(&volume, &[Vec3::new(0.25, 1.0, 1.0)], &config).unwrap();

    assert_eq!(geometry.num_lines(), 1);
    let n = geometry.num_vertices();
    assert!(n > 2);
    // Marches along +x and terminates at the domain boundary.
    assert!(geometry.vertex(n - 1).x <= 2.0);
    assert!(geometry.vertex(n - 1).x > geometry.vertex(0).x);
}

#[test]
fn test_backward_direction() {
    let volume = constant_volume(4, Vec3::X);
    let config = StreamlineConfig {
        method: IntegrationMethod::Euler,
        direction: IntegrationDirection::Backward,
        interval: 0.5,
        enable_vector_length_condition: false,
        integration_times_threshold: 2,
        ..StreamlineConfig::default()
    };
    let geometry = trace_streamlines(&volume, &[Vec3::splat(1.5)], &config).unwrap();

    assert_eq!(geometry.num_vertices(), 3);
    let xs: Vec<f32> = (0..3).map(|i| geometry.vertex(i).x).collect();
    for (a, b) in xs.iter().zip(&[1.5_f32, 1.0, 0.5]) {
        assert!((a - b).abs() < 1e-6, "{xs:?}");
    }
}

#[test]
fn test_error_paths() {
    let scalar_volume =
        StructuredVolume::new(UVec3::splat(2), GridKind::Uniform, 1, vec![0.0_f32; 8]).unwrap();
    assert!(matches!(
        trace_streamlines(&scalar_volume, &[Vec3::splat(0.5)], &StreamlineConfig::default()),
        Err(StreamvizError::NotVectorField { veclen: 1 })
    ));

    let curvilinear = StructuredVolume::new(
        UVec3::splat(2),
        GridKind::Curvilinear {
            coords: vec![0.0; 24],
        },
        3,
        vec![0.0_f32; 24],
    )
    .unwrap();
    assert!(matches!(
        trace_streamlines(&curvilinear, &[Vec3::splat(0.5)], &StreamlineConfig::default()),
        Err(StreamvizError::UnsupportedGridKind("curvilinear"))
    ));
}

/// A rectilinear volume with zero resolution (empty coordinate arrays and
/// empty values) must be rejected at construction rather than tracing into
/// an out-of-bounds coordinate lookup.
#[test]
fn test_empty_rectilinear_volume_is_rejected() {
    let grid = GridKind::Rectilinear {
        x: vec![],
        y: vec![],
        z: vec![],
    };
    let result = StructuredVolume::new(UVec3::ZERO, grid, 3, Vec::<f32>::new());
    assert!(matches!(
        result,
        Err(StreamvizError::DegenerateResolution { x: 0, y: 0, z: 0 })
    ));
}

/// Colors follow the magnitude range: a linearly growing field magnitude
/// maps the trajectory across the color map.
#[test]
fn test_vertex_colors_track_magnitude() {
    let dim = 4_u32;
    let mut values = Vec::new();
    for _k in 0..dim {
        for _j in 0..dim {
            for i in 0..dim {
                values.extend_from_slice(&[0.5 + i as f32, 0.0, 0.0]);
            }
        }
    }
    let volume = StructuredVolume::uniform_vector(UVec3::splat(dim), values).unwrap();

    let config = StreamlineConfig {
        method: IntegrationMethod::Euler,
        interval: 0.1,
        integration_times_threshold: 10,
        ..StreamlineConfig::default()
    };
    let geometry = trace_streamlines(&volume, &[Vec3::new(0.5, 1.5, 1.5)], &config).unwrap();

    assert!(geometry.num_vertices() > 2);
    let first = geometry.color(0);
    let last = geometry.color(geometry.num_vertices() - 1);
    assert_ne!(first, last);
}
