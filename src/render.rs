//////////////////////////////////////////////////////////////////////
// draw triangles with cairo
//
// each triangle is filled by kind (small pink, large sky blue) and
// stroked black along a-b-c only; the base edge a-c is left open so
// adjacent halves read as whole rhombi

use std::path::{Path, PathBuf};

use phf::phf_map;

use crate::errors::*;
use crate::geom::*;
use crate::tiling::Triangle;

//////////////////////////////////////////////////////////////////////
// constants for layout

// 5in square at 72 points per inch
pub const DEFAULT_SIZE: f64 = 5.0 * 72.0;
pub const DEFAULT_LINE_WIDTH: f64 = 2.0;

// fixed viewport half-width around the origin
pub const VIEWPORT_RADIUS: f64 = 1.0;

// fill colors indexed by TriangleKind::code()
const COLORS: [[f64; 3]; 2] = [
    [1.0, 0.753, 0.796],
    [0.529, 0.808, 0.922]
];

const STROKE: [f64; 3] = [0.0, 0.0, 0.0];

//////////////////////////////////////////////////////////////////////

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum OutputFormat {
    Pdf,
    Png
}

// define a lookup table matching file extensions to output formats
static FORMAT_LOOKUP: phf::Map<&'static str, OutputFormat> = phf_map! {
    "pdf" => OutputFormat::Pdf,
    "png" => OutputFormat::Png,
};

impl OutputFormat {

    pub fn from_path(path: &Path) -> Result<Self> {

        let ext = path.extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match FORMAT_LOOKUP.get(ext.as_str()) {
            Some(&format) => Ok(format),
            None => {
                let mut names: Vec<&str> = FORMAT_LOOKUP.keys().cloned().collect();
                names.sort();
                bail!(ErrorKind::UnknownName("output format", ext, names.join(", ")))
            }
        }

    }

}

// what part of the plane ends up on the canvas
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Viewport {
    Fixed,
    Fit
}

#[derive(Debug, Clone)]
pub struct RenderSettings {

    pub path:       PathBuf,
    pub format:     OutputFormat,
    pub size:       f64,          // canvas edge in points (pdf) or pixels (png)
    pub line_width: f64,
    pub viewport:   Viewport

}

impl RenderSettings {

    // defaults for everything but the output path
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {

        let path = path.as_ref().to_path_buf();
        let format = OutputFormat::from_path(&path)?;

        Ok(RenderSettings {
            path,
            format,
            size: DEFAULT_SIZE,
            line_width: DEFAULT_LINE_WIDTH,
            viewport: Viewport::Fixed
        })

    }

    // region of the plane to draw
    pub fn contents_rect(&self, triangles: &[Triangle]) -> Rect2d {

        match self.viewport {

            Viewport::Fixed => Rect2d::centered_square(VIEWPORT_RADIUS),

            Viewport::Fit => {

                let mut rect = Rect2d::empty();

                for t in triangles {
                    for p in t.vertices().iter() {
                        rect.expand(p);
                    }
                }

                if rect.is_empty() {
                    Rect2d::centered_square(VIEWPORT_RADIUS)
                } else {
                    rect
                }

            }

        }

    }

    // canvas coordinates for every vertex of every triangle
    pub fn page_points(&self, triangles: &[Triangle]) -> Vec<[Point2d; 3]> {

        let margin = 0.5 * self.line_width;

        let page_rect = Rect2d::new(Point2d::new(margin, margin),
                                    Point2d::new(self.size - margin, self.size - margin));

        let (transform, _) = get_page_transform(&self.contents_rect(triangles), &page_rect);

        triangles.iter()
            .map(|t| [transform * t.a, transform * t.b, transform * t.c])
            .collect()

    }

}

//////////////////////////////////////////////////////////////////////

#[cfg(feature = "render")]
mod canvas {

    use std::fs::File;

    use tracing::info;

    use super::*;

    trait CairoVecOps {

        fn moveto(&self, p: &Point2d);
        fn lineto(&self, p: &Point2d);
        fn setcolor(&self, c: &[f64; 3]);
        fn drawtri(&self, p0: &Point2d, p1: &Point2d, p2: &Point2d);
        fn drawpath(&self, points: &[Point2d]);

    }

    impl CairoVecOps for cairo::Context {

        fn moveto(&self, p: &Point2d) {
            self.move_to(p.x, p.y);
        }

        fn lineto(&self, p: &Point2d) {
            self.line_to(p.x, p.y);
        }

        fn setcolor(&self, c: &[f64; 3]) {
            self.set_source_rgb(c[0], c[1], c[2]);
        }

        fn drawtri(&self, p0: &Point2d, p1: &Point2d, p2: &Point2d) {
            self.moveto(p0);
            self.lineto(p1);
            self.lineto(p2);
            self.close_path();
        }

        // open polyline
        fn drawpath(&self, points: &[Point2d]) {
            for (i, p) in points.iter().enumerate() {
                if i == 0 {
                    self.moveto(p);
                } else {
                    self.lineto(p);
                }
            }
        }

    }

    fn draw_triangles(ctx: &cairo::Context,
                      triangles: &[Triangle],
                      settings: &RenderSettings) {

        let xpoints = settings.page_points(triangles);

        ctx.set_line_width(settings.line_width);
        ctx.set_line_join(cairo::LineJoin::Round);
        ctx.set_line_cap(cairo::LineCap::Round);

        for (t, [p0, p1, p2]) in triangles.iter().zip(xpoints.iter()) {

            ctx.drawtri(p0, p1, p2);
            ctx.setcolor(&COLORS[t.kind.code() as usize]);
            ctx.fill();

            ctx.drawpath(&[*p0, *p1, *p2]);
            ctx.setcolor(&STROKE);
            ctx.stroke();

        }

    }

    pub fn render(triangles: &[Triangle], settings: &RenderSettings) -> Result<()> {

        match settings.format {

            OutputFormat::Pdf => {

                let surface = cairo::PdfSurface::new(
                    settings.size, settings.size, &settings.path)?;

                let ctx = cairo::Context::new(&surface);

                draw_triangles(&ctx, triangles, settings);

                ctx.show_page();
                surface.finish();

            }

            OutputFormat::Png => {

                let n = settings.size.round().max(1.0) as i32;

                let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, n, n)?;

                let ctx = cairo::Context::new(&surface);

                ctx.set_source_rgb(1.0, 1.0, 1.0);
                ctx.paint();

                draw_triangles(&ctx, triangles, settings);

                let mut file = File::create(&settings.path)
                    .chain_err(|| format!("can't create {:}", settings.path.display()))?;

                surface.write_to_png(&mut file)?;

            }

        }

        info!(path = %settings.path.display(),
              triangles = triangles.len(),
              "wrote rendering");

        Ok(())

    }

}

#[cfg(feature = "render")]
pub use self::canvas::render;

#[cfg(not(feature = "render"))]
pub fn render(_triangles: &[Triangle], settings: &RenderSettings) -> Result<()> {
    bail!("can't write {:}: built without the render feature", settings.path.display())
}

//////////////////////////////////////////////////////////////////////
