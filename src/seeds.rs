//////////////////////////////////////////////////////////////////////
// generation-0 configurations to start subdividing from

use phf::phf_map;

use crate::errors::*;
use crate::geom::*;
use crate::tiling::Triangle;

// 0-input function generating a list of triangles
pub type SeedFunc = fn() -> Vec<Triangle>;

// define a lookup table matching strings to functions generating
// seed configurations
pub static VALID_SEEDS: phf::Map<&'static str, SeedFunc> = phf_map! {
    "sun" => sun,
    "small" => small,
    "large" => large,
    "rhombus_thin" => rhombus_thin,
    "rhombus_thick" => rhombus_thick,
};

pub fn seed_by_name(name: &str) -> Result<Vec<Triangle>> {

    match VALID_SEEDS.get(name) {

        Some(seed) => Ok(seed()),

        None => {
            let mut names: Vec<&str> = VALID_SEEDS.keys().cloned().collect();
            names.sort();
            bail!(ErrorKind::UnknownName("seed", name.to_string(), names.join(", ")))
        }

    }

}

//////////////////////////////////////////////////////////////////////
// ten small triangles fanned around the origin filling the unit disk
//
// neighbouring triangles are mirror images, so base vertices are
// swapped on every other one. the last base vertex is pinned to the
// first one so the fan closes exactly.

pub fn sun() -> Vec<Triangle> {

    let alpha = PI / 5.0;
    let mut beta = PI / 10.0;

    let b = Point2d::origin();

    let mut triangles = Vec::with_capacity(10);

    for i in 0..10 {

        let mut a = Point2d::new(beta.sin(), beta.cos());
        let mut c = Point2d::new((beta + alpha).sin(), (beta + alpha).cos());

        if i % 2 == 0 {
            std::mem::swap(&mut a, &mut c);
        }

        if i == 9 {
            c = Point2d::new((PI / 10.0).sin(), (PI / 10.0).cos());
        }

        triangles.push(Triangle::small(a, b, c));

        beta += alpha;

    }

    triangles

}

//////////////////////////////////////////////////////////////////////
// single prototiles and rhombi, all with unit legs
//
// a prototile with base ratio r has its base on the x axis and its
// apex at height h = sqrt(1 - r^2/4)

fn apex_height(base: f64) -> f64 {
    (1.0 - 0.25*base*base).sqrt()
}

fn prototile(ratio: f64, y0: f64, make: fn(Point2d, Point2d, Point2d) -> Triangle) -> Triangle {

    let h = apex_height(ratio);

    make(Point2d::new(-0.5*ratio, y0),
         Point2d::new(0.0, y0 + h),
         Point2d::new(0.5*ratio, y0))

}

// the second triangle is the first mirrored across the shared base,
// keeping vertex roles so both sides cut the base at the same point
fn rhombus(ratio: f64, make: fn(Point2d, Point2d, Point2d) -> Triangle) -> Vec<Triangle> {

    let upper = prototile(ratio, 0.0, make);
    let mirrored = Point2d::new(upper.b.x, -upper.b.y);

    vec![upper, make(upper.a, mirrored, upper.c)]

}

pub fn small() -> Vec<Triangle> {
    vec![prototile(INVPHI, -0.5*apex_height(INVPHI), Triangle::small)]
}

pub fn large() -> Vec<Triangle> {
    vec![prototile(PHI, -0.5*apex_height(PHI), Triangle::large)]
}

pub fn rhombus_thin() -> Vec<Triangle> {
    rhombus(INVPHI, Triangle::small)
}

pub fn rhombus_thick() -> Vec<Triangle> {
    rhombus(PHI, Triangle::large)
}

//////////////////////////////////////////////////////////////////////
