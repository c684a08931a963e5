//! Prints geometry for randomly selected points on the blot curve.
//!
//! ```text
//! cargo run --example points_table
//! RUST_LOG=osculate=debug cargo run --example points_table
//! ```

use osculate::geometry::PolarCurve;
use osculate::operations::query::{CurvatureExtremes, MultiplePointsData, Orthogonality};
use osculate::{AnalysisConfig, Result};

fn main() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("osculate=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = AnalysisConfig::default();
    let curve = PolarCurve::blot();
    let thetas = config.selected_angles();
    let records = MultiplePointsData::new(&thetas).execute(&curve);

    let rule = "=".repeat(110);
    println!("{rule}");
    println!(
        "{:<6} {:<9} {:<9} {:<9} {:<20} {:<20} {:<9} {:<9}",
        "point", "theta", "x", "y", "tangent", "normal", "kappa", "R"
    );
    println!("{rule}");
    for (i, (theta, record)) in thetas.iter().zip(&records).enumerate() {
        match record {
            Ok(r) => println!(
                "P{:<5} {:<9.4} {:<9.4} {:<9.4} ({:>7.4}, {:>7.4})   ({:>7.4}, {:>7.4})   {:<9.4} {:<9.4}",
                i + 1,
                theta,
                r.point.x,
                r.point.y,
                r.tangent.x,
                r.tangent.y,
                r.normal.x,
                r.normal.y,
                r.curvature,
                r.radius_of_curvature.to_f64(),
            ),
            Err(err) => println!("P{:<5} {theta:<9.4} {err}", i + 1),
        }
    }
    println!("{rule}");

    println!(
        "\nArrows (length {}) and osculating circles (radius < {}):",
        config.vector_scale, config.max_circle_radius
    );
    for (i, record) in records.iter().enumerate() {
        let Ok(r) = record else { continue };
        let [(_, tangent_tip), (_, normal_tip)] = config.arrows(r);
        let circle = match config.osculating_circle(r.theta).execute(&curve)? {
            Some(c) => format!(
                "center ({:.4}, {:.4}), R = {:.4}",
                c.center().x,
                c.center().y,
                c.radius()
            ),
            None => "not drawn".to_string(),
        };
        println!(
            "  P{}: T tip ({:.4}, {:.4}), N tip ({:.4}, {:.4}), circle {circle}",
            i + 1,
            tangent_tip.x,
            tangent_tip.y,
            normal_tip.x,
            normal_tip.y,
        );
    }

    println!("\nOrthogonality check (T . N should be ~0):");
    for (i, &theta) in thetas.iter().enumerate() {
        let dot = Orthogonality::new(theta).execute(&curve)?;
        println!("  P{}: T . N = {dot:.2e}", i + 1);
    }

    let extremes = CurvatureExtremes::new(config.extremes_samples).execute(&curve)?;
    println!(
        "\nCurvature over {} samples: max {:.4} at theta = {:.4}, min {:.4} at theta = {:.4}, mean {:.4}",
        config.extremes_samples,
        extremes.max.curvature,
        extremes.max.theta,
        extremes.min.curvature,
        extremes.min.theta,
        extremes.mean,
    );
    Ok(())
}
