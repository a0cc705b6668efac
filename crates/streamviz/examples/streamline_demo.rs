//! Traces streamlines through a synthetic vortex field and reports the
//! resulting geometry.
//!
//! Run with: cargo run --example streamline_demo

use streamviz::{
    trace_streamlines, IntegrationMethod, StreamlineConfig, StructuredVolume, UVec3, Vec3,
};

fn main() -> streamviz::Result<()> {
    env_logger::init();

    // A vortex circulating around the grid's vertical axis, drifting up.
    let dim = 17_u32;
    let center = (dim - 1) as f32 / 2.0;
    let mut values = Vec::with_capacity((dim * dim * dim) as usize * 3);
    for _k in 0..dim {
        for j in 0..dim {
            for i in 0..dim {
                let x = i as f32 - center;
                let y = j as f32 - center;
                values.extend_from_slice(&[-y, x, 0.4]);
            }
        }
    }
    let volume = StructuredVolume::uniform_vector(UVec3::splat(dim), values)?;

    // A ring of seeds near the bottom of the volume.
    let seeds: Vec<Vec3> = (0..8)
        .map(|s| {
            let angle = s as f32 / 8.0 * std::f32::consts::TAU;
            Vec3::new(
                center + 3.0 * angle.cos(),
                center + 3.0 * angle.sin(),
                1.0,
            )
        })
        .collect();

    let config = StreamlineConfig {
        method: IntegrationMethod::RungeKutta4,
        interval: 0.1,
        integration_times_threshold: 400,
        ..StreamlineConfig::default()
    };
    let geometry = trace_streamlines(&volume, &seeds, &config)?;

    println!(
        "traced {} polylines with {} vertices total",
        geometry.num_lines(),
        geometry.num_vertices()
    );
    for line in 0..geometry.num_lines() {
        let first = geometry.connections()[2 * line] as usize;
        let last = geometry.connections()[2 * line + 1] as usize;
        println!(
            "  line {line}: {} vertices, {} -> {}",
            last - first + 1,
            geometry.vertex(first),
            geometry.vertex(last)
        );
    }

    Ok(())
}
