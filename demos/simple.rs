use nalgebra as na;
use scatter_geom::utils::{ellipse_path, sample_ellipse_points};
use scatter_geom::{convex_hull, ConfidenceEllipse, SampleSeries};

fn main() -> anyhow::Result<()> {
    let points = vec![
        na::Point2::new(0.77705324, 0.05374551),
        na::Point2::new(0.35096353, 0.9873069),
        na::Point2::new(0.09537989, 0.44411153),
        na::Point2::new(0.108208835, 0.72445065),
        na::Point2::new(0.7661844, 0.86163324),
        na::Point2::new(0.5185994, 0.66594696),
        na::Point2::new(0.768981, 0.23657233),
        na::Point2::new(0.058607936, 0.09037298),
        na::Point2::new(0.8818559, 0.3804205),
        na::Point2::new(0.9571466, 0.17664945),
    ];

    let hull = convex_hull(&points);
    println!("Hull ({} vertices, area {:.4}):", hull.len(), hull.area());
    for p in hull.iter() {
        println!("  ({:.4}, {:.4})", p.x, p.y);
    }

    let series = SampleSeries::from(&points[..]);
    let ellipse = ConfidenceEllipse::with_level(0.95)?.compute(&series);
    println!("Ellipse: {:?}", ellipse);

    let path = ellipse_path(&ellipse);
    println!("Path starts at ({:.4}, {:.4})", path.start.x, path.start.y);
    println!("Outline: {:?}", sample_ellipse_points(&ellipse, 8));

    Ok(())
}
