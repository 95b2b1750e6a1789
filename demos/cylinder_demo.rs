use cylprox::{Point, RightCircularCylinder, Vector};

fn main() {
    println!("Cylinder Distance Demonstration");
    println!("===============================\n");

    // X-axis cylinder of radius 0.5, spanning t in [0, 2]
    let cyl = match RightCircularCylinder::new(Point::ORIGIN, Vector::new(2.0, 0.0, 0.0), 0.5, 2.0)
    {
        Ok(cyl) => cyl,
        Err(e) => {
            eprintln!("Failed to build cylinder: {}", e);
            return;
        }
    };
    println!(
        "Cylinder: base {} axis {} radius {} height {}\n",
        cyl.base(),
        cyl.axis(),
        cyl.radius(),
        cyl.height()
    );

    let probes = [
        ("outside radius, within span", Point::new(1.0, 1.0, 0.0)),
        ("inside radius, within span", Point::new(1.0, 0.25, 0.0)),
        ("on the rim", Point::new(2.0, 0.5, 0.0)),
        ("on the axis, near the base cap", Point::new(0.25, 0.0, 0.0)),
        ("beyond the base, outside radius", Point::new(-1.0, -1.5, 0.0)),
        ("beyond the base, inside radius", Point::new(-1.0, 0.0, 0.0)),
    ];
    for (label, point) in probes {
        println!("  {:<34} {} -> {:.6}", label, point, cyl.distance(&point));
    }

    // Invalid geometry is rejected at construction
    println!("\nInvalid constructions:");
    let attempts = [
        ("negative radius", Vector::new(1.0, 0.0, 0.0), -1.0, 1.0),
        ("negative height", Vector::new(1.0, 0.0, 0.0), 1.0, -1.0),
        ("degenerate axis", Vector::from(Point::ORIGIN), 1.0, 1.0),
    ];
    for (label, axis, radius, height) in attempts {
        match RightCircularCylinder::new(Point::ORIGIN, axis, radius, height) {
            Ok(_) => println!("  {:<16} unexpectedly accepted", label),
            Err(e) => println!("  {:<16} {}", label, e),
        }
    }
}
