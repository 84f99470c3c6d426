//! Parallel pixel pipeline.
//!
//! A render call moves through these stages:
//! - Initializing: validate the request, bind the camera resolution, build a
//!   fresh worker pool of `max(2, available parallelism)` threads
//! - Dispatching/awaiting: one task per pixel on the pool; results are
//!   collected by pixel index, so completion order never affects the image
//! - Finalizing: drop the pool and the request context
//!
//! The first failing pixel aborts the render. No partial image is returned.

use rayon::prelude::*;

use crate::{Color, Logger, PinholeCamera, RenderError, RenderResult, Scene};

/// State that lives only for the duration of one render call.
struct RenderContext<'a> {
    camera: PinholeCamera,
    logger: &'a dyn Logger,
    width: u32,
    height: u32,
}

impl<'a> RenderContext<'a> {
    fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Raster-order index to pixel coordinates.
    fn coords(&self, index: usize) -> (u32, u32) {
        let width = self.width as usize;
        ((index % width) as u32, (index / width) as u32)
    }
}

/// Clamp a value to [0, 1] range.
#[inline]
pub fn clamp_01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

/// Convert a linear color to 8-bit RGB, clamping each channel.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let channel = |c: f64| (255.0 * clamp_01(c) + 0.5) as u8;
    [channel(color.x), channel(color.y), channel(color.z)]
}

/// Number of worker threads for a render.
fn worker_count() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
        .max(2)
}

/// Simple image buffer for storing render output.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    /// Raster order, row 0 first
    pub pixels: Vec<[u8; 3]>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0, 0, 0]; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> [u8; 3] {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        let index = self.index(x, y);
        self.pixels[index] = rgb;
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Flatten to RGB bytes.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flatten().copied().collect()
    }

    /// Convert into an `image` buffer for encoding.
    pub fn to_image(&self) -> image::RgbImage {
        image::RgbImage::from_fn(self.width, self.height, |x, y| image::Rgb(self.get(x, y)))
    }
}

impl Scene {
    /// Render the scene on a fresh worker pool.
    ///
    /// Blocks until every pixel is done or the first pixel fails.
    pub fn render(
        &self,
        width: u32,
        height: u32,
        viewport_width: f64,
        logger: &dyn Logger,
    ) -> RenderResult<ImageBuffer> {
        let ctx = self.begin_render(width, height, viewport_width, logger)?;

        let threads = worker_count();
        ctx.logger.log(&format!(
            "Initialize executor. Using {} threads to render {}",
            threads, self.name
        ));
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("lumen-worker-{}", i))
            .build()?;

        self.log_shooting(&ctx);
        let pixels = pool.install(|| {
            (0..ctx.pixel_count())
                .into_par_iter()
                .map(|index| self.render_indexed(&ctx, index))
                .collect::<RenderResult<Vec<_>>>()
        });
        drop(pool);

        self.finish_render(&ctx, pixels)
    }

    /// Render the scene on the calling thread, pixel by pixel in raster order.
    ///
    /// Produces the same image as [`render`](Self::render).
    pub fn render_sequential(
        &self,
        width: u32,
        height: u32,
        viewport_width: f64,
        logger: &dyn Logger,
    ) -> RenderResult<ImageBuffer> {
        let ctx = self.begin_render(width, height, viewport_width, logger)?;

        self.log_shooting(&ctx);
        let pixels = (0..ctx.pixel_count())
            .map(|index| self.render_indexed(&ctx, index))
            .collect::<RenderResult<Vec<_>>>();

        self.finish_render(&ctx, pixels)
    }

    fn begin_render<'a>(
        &self,
        width: u32,
        height: u32,
        viewport_width: f64,
        logger: &'a dyn Logger,
    ) -> RenderResult<RenderContext<'a>> {
        let camera = self.camera.ok_or(RenderError::MissingCamera)?;
        if !camera.has_basis() {
            return Err(RenderError::DegenerateCamera);
        }
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidResolution { width, height });
        }
        if !viewport_width.is_finite() || viewport_width <= 0.0 {
            return Err(RenderError::InvalidViewport(viewport_width));
        }
        if self.config.anti_aliasing_factor == 0 {
            return Err(RenderError::InvalidAntiAliasing(0));
        }

        log::debug!("Rendering {}x{}\n{}", width, height, self);

        Ok(RenderContext {
            camera: camera.with_resolution(width, height, viewport_width),
            logger,
            width,
            height,
        })
    }

    fn log_shooting(&self, ctx: &RenderContext<'_>) {
        let factor = self.config.anti_aliasing_factor as usize;
        ctx.logger.log(&format!(
            "Starting to shoot {} rays over {}",
            ctx.pixel_count() * factor * factor,
            self.name
        ));
    }

    fn finish_render(
        &self,
        ctx: &RenderContext<'_>,
        pixels: RenderResult<Vec<[u8; 3]>>,
    ) -> RenderResult<ImageBuffer> {
        match pixels {
            Ok(pixels) => {
                ctx.logger.log("Done shooting rays.");
                ctx.logger.log(&format!("Ray tracing of {} has been completed.", self.name));
                Ok(ImageBuffer {
                    width: ctx.width,
                    height: ctx.height,
                    pixels,
                })
            }
            Err(e) => {
                ctx.logger.log(&format!("Ray tracing of {} failed: {}", self.name, e));
                Err(e)
            }
        }
    }

    fn render_indexed(&self, ctx: &RenderContext<'_>, index: usize) -> RenderResult<[u8; 3]> {
        let (x, y) = ctx.coords(index);
        self.render_pixel(&ctx.camera, x, y)
            .map_err(|source| RenderError::PixelFailed {
                x,
                y,
                source: Box::new(source),
            })
    }

    /// Final color of pixel (x, y) averaged over a k×k grid of samples.
    ///
    /// With k = 1 the single sample is exactly [`PinholeCamera::transform`].
    pub fn render_pixel(&self, camera: &PinholeCamera, x: u32, y: u32) -> RenderResult<[u8; 3]> {
        let factor = self.config.anti_aliasing_factor.max(1);
        let step = 1.0 / f64::from(factor);
        let mut color = Color::ZERO;

        for sy in 0..factor {
            for sx in 0..factor {
                let dx = (f64::from(sx) + 0.5) * step - 0.5;
                let dy = (f64::from(sy) + 0.5) * step - 0.5;
                let ray = camera.ray_through(f64::from(x) + dx, f64::from(y) + dy);
                color += self.shade(&ray, 0)?;
            }
        }

        Ok(color_to_rgb(color / f64::from(factor * factor)))
    }
}
