//////////////////////////////////////////////////////////////////////
// Robinson triangles and the P3 subdivision rule

use std::collections::HashSet;
use std::convert::TryFrom;

use tracing::{debug, info};

use crate::errors::*;
use crate::geom::*;
use crate::render::{self, RenderSettings};
use crate::seeds;

// each generation multiplies the triangle count by ~2.6
pub const MAX_DEPTH: usize = 14;

// where build(depth, true) puts its rendering
pub const DEFAULT_RENDER_PATH: &str = "penrose.pdf";

//////////////////////////////////////////////////////////////////////
// some useful types for constructing Penrose tilings

// Small has legs 1 and base 1/phi, Large has legs 1 and base phi
#[derive(Debug, PartialEq, PartialOrd, Eq, Ord, Clone, Copy, Hash)]
pub enum TriangleKind {
    Small,
    Large
}

impl TriangleKind {

    // Small -> 0, Large -> 1
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            TriangleKind::Small => "small",
            TriangleKind::Large => "large"
        }
    }

}

impl TryFrom<i64> for TriangleKind {

    type Error = Error;

    fn try_from(code: i64) -> Result<Self> {
        match code {
            0 => Ok(TriangleKind::Small),
            1 => Ok(TriangleKind::Large),
            _ => bail!(ErrorKind::MalformedKind(code))
        }
    }

}

//////////////////////////////////////////////////////////////////////
// Penrose tile triangle (half-rhombus)
//
// a and c sit at the two equal base angles, b is the apex; the
// subdivision rules below depend on exactly this role assignment

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Triangle {

    pub kind: TriangleKind,
    pub a:    Point2d,
    pub b:    Point2d,
    pub c:    Point2d

}

impl Triangle {

    pub fn new(kind: TriangleKind, a: Point2d, b: Point2d, c: Point2d) -> Self {
        Triangle { kind, a, b, c }
    }

    pub fn small(a: Point2d, b: Point2d, c: Point2d) -> Self {
        Self::new(TriangleKind::Small, a, b, c)
    }

    pub fn large(a: Point2d, b: Point2d, c: Point2d) -> Self {
        Self::new(TriangleKind::Large, a, b, c)
    }

    pub fn vertices(&self) -> [Point2d; 3] {
        [self.a, self.b, self.c]
    }

    pub fn area(&self) -> f64 {
        tri_area(&self.a, &self.b, &self.c)
    }

    // (|ba|, |bc|, |ac|): the two legs then the base
    pub fn side_lengths(&self) -> (f64, f64, f64) {
        ((self.a - self.b).norm(),
         (self.c - self.b).norm(),
         (self.c - self.a).norm())
    }

    // number of triangles this one splits into
    pub fn num_children(&self) -> usize {
        match self.kind {
            TriangleKind::Small => 2,
            TriangleKind::Large => 3
        }
    }

    // append the children of this triangle to output
    fn subdivide_into(&self, output: &mut Vec<Triangle>) {

        let (a, b, c) = (self.a, self.b, self.c);

        match self.kind {

            TriangleKind::Small => {

                let p = b + INVPHI*(a - b);

                output.push(Triangle::small(p, c, a));
                output.push(Triangle::large(c, p, b));

            }

            TriangleKind::Large => {

                let q = a + INVPHI*(b - a);
                let r = a + INVPHI*(c - a);

                output.push(Triangle::large(c, r, b));
                output.push(Triangle::large(r, q, a));
                output.push(Triangle::small(q, r, b));

            }

        }

    }

}

//////////////////////////////////////////////////////////////////////
// one generation of subdivision: each small triangle becomes a small
// and a large, each large becomes two large and a small. children are
// emitted in input order.

pub fn subdivide(triangles: &[Triangle]) -> Vec<Triangle> {

    let mut result = Vec::with_capacity(next_generation_len(triangles));

    for tri in triangles {
        tri.subdivide_into(&mut result);
    }

    result

}

pub fn next_generation_len(triangles: &[Triangle]) -> usize {
    triangles.iter().map(Triangle::num_children).sum()
}

// (small, large) counts
pub fn count_kinds(triangles: &[Triangle]) -> (usize, usize) {

    let small = triangles.iter()
        .filter(|t| t.kind == TriangleKind::Small)
        .count();

    (small, triangles.len() - small)

}

pub fn total_area(triangles: &[Triangle]) -> f64 {
    triangles.iter().map(Triangle::area).sum()
}

//////////////////////////////////////////////////////////////////////
// all vertices of all triangles (a, b, c per triangle) with duplicates
// removed, in order of first appearance

pub fn unique_points(triangles: &[Triangle]) -> Vec<Point2d> {

    let mut seen = HashSet::with_capacity(triangles.len());
    let mut points = Vec::new();

    for tri in triangles {
        for p in tri.vertices().iter() {
            if seen.insert(quantize(p)) {
                points.push(*p);
            }
        }
    }

    points

}

//////////////////////////////////////////////////////////////////////
// depth validation

// signed depths come from the command line
pub fn validate_depth(depth: i64) -> Result<usize> {

    if depth < 0 || depth > MAX_DEPTH as i64 {
        bail!(ErrorKind::InvalidDepth(depth));
    }

    Ok(depth as usize)

}

fn check_depth(depth: usize) -> Result<()> {

    if depth > MAX_DEPTH {
        bail!(ErrorKind::InvalidDepth(depth as i64));
    }

    Ok(())

}

//////////////////////////////////////////////////////////////////////
// final generation of a tiling and its vertex set

#[derive(Debug, Clone, PartialEq)]
pub struct Tiling {

    pub points:    Vec<Point2d>,
    pub triangles: Vec<Triangle>

}

// sun fan subdivided depth times, optionally rendered to
// DEFAULT_RENDER_PATH
pub fn build(depth: usize, render: bool) -> Result<Tiling> {

    let settings = if render {
        Some(RenderSettings::new(DEFAULT_RENDER_PATH)?)
    } else {
        None
    };

    build_from(seeds::sun(), depth, settings.as_ref())

}

pub fn build_from(seed: Vec<Triangle>,
                  depth: usize,
                  settings: Option<&RenderSettings>) -> Result<Tiling> {

    check_depth(depth)?;

    let mut triangles = seed;

    for generation in 1..=depth {

        triangles = subdivide(&triangles);

        let (small, large) = count_kinds(&triangles);
        debug!(generation, small, large, "subdivided");

    }

    let points = unique_points(&triangles);

    info!(depth,
          triangles = triangles.len(),
          points = points.len(),
          "built tiling");

    if let Some(settings) = settings {
        render::render(&triangles, settings)?;
    }

    Ok(Tiling { points, triangles })

}

//////////////////////////////////////////////////////////////////////
