//! Simple ray tracer example.
//!
//! Renders a small scene with spheres and a box and saves it as PNG.

use anyhow::Result;
use lumen_renderer::{
    AxisAlignedBox, Color, DirectionalLight, InfoLogger, Material, PinholeCamera, Point,
    PointLight, Scene, Sphere, Spotlight, Surface, Vector,
};

const WIDTH: u32 = 800;
const HEIGHT: u32 = 800;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let scene = build_scene();

    let start = std::time::Instant::now();
    let image = scene.render(WIDTH, HEIGHT, 2.0, &InfoLogger)?;
    log::info!("Rendered in {:?}", start.elapsed());

    let filename = "output.png";
    image.to_image().save(filename)?;
    log::info!("Saved to {}", filename);

    Ok(())
}

fn build_scene() -> Scene {
    let camera = PinholeCamera::new(
        Point::new(0.0, 1.0, 6.0),  // position
        Vector::new(0.0, -0.15, -1.0), // towards
        Vector::new(0.0, 1.0, 0.0),  // up
        2.0,
    );

    let floor = Material::new(Color::new(0.5, 0.5, 0.5))
        .with_specular(Color::splat(0.2))
        .with_reflection(0.2);
    let red = Material::new(Color::new(0.9, 0.2, 0.2)).with_shininess(30.0);
    let mirror = Material::new(Color::new(0.1, 0.1, 0.1))
        .with_specular(Color::ONE)
        .with_shininess(100.0)
        .with_reflection(0.8);
    let glass = Material::new(Color::new(0.05, 0.05, 0.1))
        .with_specular(Color::ONE)
        .with_shininess(200.0)
        .with_reflection(0.1)
        .with_refraction(0.8, 1.5);

    Scene::new()
        .with_name("simple")
        .with_camera(camera)
        .with_ambient(Color::splat(0.3))
        .with_background(Color::new(0.0, 0.5, 1.0))
        .with_surface(Surface::new(
            AxisAlignedBox::new(Point::new(-6.0, -1.1, -8.0), Point::new(6.0, -1.0, 4.0)),
            floor,
        ))
        .with_surface(Surface::new(Sphere::new(Point::new(-1.6, 0.0, -1.0), 1.0), red))
        .with_surface(Surface::new(Sphere::new(Point::new(1.6, 0.0, -1.5), 1.0), mirror))
        .with_surface(Surface::new(Sphere::new(Point::new(0.0, -0.4, 1.0), 0.6), glass))
        .with_surface(Surface::new(
            AxisAlignedBox::new(Point::new(-0.5, -1.0, -4.0), Point::new(0.5, 1.5, -3.0)),
            Material::new(Color::new(0.2, 0.7, 0.3)),
        ))
        .with_light(PointLight::new(Point::new(4.0, 6.0, 4.0), Color::splat(1.2)))
        .with_light(Spotlight::new(
            Point::new(-3.0, 4.0, 2.0),
            Vector::new(0.5, -1.0, -0.5),
            Color::new(0.6, 0.6, 0.4),
        ))
        .with_light(DirectionalLight::new(Vector::new(-1.0, -1.0, -1.0), Color::splat(0.2)))
        .with_max_recursion_level(4)
        .with_anti_aliasing_factor(2)
        .with_reflections(true)
        .with_refractions(true)
}
