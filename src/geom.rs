//////////////////////////////////////////////////////////////////////
// define some constants for Penrose tiles

pub const PHI: f64 = 1.618033988749895;
pub const INVPHI: f64 = PHI - 1.0;
pub const PI: f64 = std::f64::consts::PI;

// points closer than 10^-QUANTIZE_DIGITS share a dedup key
pub const QUANTIZE_DIGITS: i32 = 9;

//////////////////////////////////////////////////////////////////////
// pull in some types from nalgebra

pub type Vec2d = nalgebra::Vector2<f64>;
pub type Point2d = nalgebra::geometry::Point2<f64>;
pub type Translation2d = nalgebra::Translation2<f64>;
pub type Transform2d = nalgebra::Transform2<f64>;
pub type Matrix3d = nalgebra::Matrix3<f64>;

//////////////////////////////////////////////////////////////////////
// Rect2d type has lower-left p0 and upper-right p1

#[derive(Debug, Clone, PartialEq)]
pub struct Rect2d {

    pub p0: Point2d,
    pub p1: Point2d

}

impl Rect2d {

    // empty rectangle has p0 > p1
    pub fn empty() -> Self {

        let p0 = Point2d::new(f64::MAX, f64::MAX);
        let p1 = -p0;

        Rect2d { p0, p1 }

    }

    // new rect from points
    pub fn new(p0: Point2d, p1: Point2d) -> Self {
        Rect2d { p0, p1 }
    }

    // square of half-size r around the origin
    pub fn centered_square(r: f64) -> Self {
        Rect2d::new(Point2d::new(-r, -r), Point2d::new(r, r))
    }

    pub fn is_empty(&self) -> bool {
        self.p0.x > self.p1.x || self.p0.y > self.p1.y
    }

    // expand this rect to include the given point
    pub fn expand(&mut self, p: &Point2d) {
        self.p0 = self.p0.inf(p);
        self.p1 = self.p1.sup(p);
    }

    // dimensions of this rect
    pub fn dims(&self) -> Vec2d {
        self.p1 - self.p0
    }

    // center of this rect
    pub fn center(&self) -> Point2d {
        self.p0 + 0.5*(self.p1 - self.p0)
    }

}

//////////////////////////////////////////////////////////////////////
//
// make a Transform2d that will translate and scale the given
// contents_rect (input) to the given page_rect (output).
//
// always includes vertical flip because graphics coordinate system
// is left-handed (y increases going down)
//

pub fn get_page_transform(contents_rect: &Rect2d,
                          page_rect: &Rect2d) -> (Transform2d, f64) {

    let cdims = contents_rect.dims();
    let pdims = page_rect.dims();

    let scl = (pdims.component_div(&cdims)).min();

    let vmid = contents_rect.center();
    let pmid = page_rect.center();

    let translate_page = Translation2d::new(pmid[0], pmid[1]);

    let scale = Transform2d::from_matrix_unchecked(
        Matrix3d::new(
            scl, 0.0, 0.0,
            0.0, -scl, 0.0,
            0.0, 0.0, 1.0
        )
    );

    let translate_points = Translation2d::new(-vmid[0], -vmid[1]);

    let transform = translate_page * scale * translate_points;

    (transform, scl)

}

//////////////////////////////////////////////////////////////////////
// unsigned area of triangle (p0, p1, p2)

pub fn tri_area(p0: &Point2d, p1: &Point2d, p2: &Point2d) -> f64 {

    let u = p1 - p0;
    let v = p2 - p0;

    0.5 * (u.x * v.y - u.y * v.x).abs()

}

//////////////////////////////////////////////////////////////////////
// hashable key for a point, rounded to QUANTIZE_DIGITS decimal places
//
// coordinates of the same vertex reached through different
// subdivision paths can differ in the last few bits, so exact float
// comparison would keep near-duplicates around

pub type PointKey = (i64, i64);

pub fn quantize(p: &Point2d) -> PointKey {

    let scl = 10f64.powi(QUANTIZE_DIGITS);

    ((p.x * scl).round() as i64, (p.y * scl).round() as i64)

}

//////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn golden_constants() {
        let phi = (1.0 + 5f64.sqrt()) / 2.0;
        assert!((PHI - phi).abs() < 1e-15);
        assert!((INVPHI - 1.0 / phi).abs() < 1e-15);
        assert!((PHI * INVPHI - 1.0).abs() < 1e-15);
    }

    #[test]
    fn rect_expand_dims_center() {

        let mut r = Rect2d::empty();
        assert!(r.is_empty());

        r.expand(&Point2d::new(1.0, -2.0));
        r.expand(&Point2d::new(-3.0, 4.0));

        assert!(!r.is_empty());
        assert_eq!(r.dims(), Vec2d::new(4.0, 6.0));
        assert_eq!(r.center(), Point2d::new(-1.0, 1.0));

    }

    #[test]
    fn page_transform_flips_and_fits() {

        let contents = Rect2d::centered_square(1.0);
        let page = Rect2d::new(Point2d::origin(), Point2d::new(200.0, 100.0));

        let (transform, scl) = get_page_transform(&contents, &page);

        assert!((scl - 50.0).abs() < 1e-12);

        // upper-left of the contents lands at the top of the page
        let p = transform * Point2d::new(-1.0, 1.0);
        assert!((p.x - 50.0).abs() < 1e-12);
        assert!(p.y.abs() < 1e-12);

        let q = transform * Point2d::new(0.0, 0.0);
        assert!((q - Point2d::new(100.0, 50.0)).norm() < 1e-12);

    }

    #[test]
    fn area_of_right_triangle() {
        let a = Point2d::new(0.0, 0.0);
        let b = Point2d::new(2.0, 0.0);
        let c = Point2d::new(0.0, 3.0);
        assert!((tri_area(&a, &b, &c) - 3.0).abs() < 1e-15);
        assert!((tri_area(&a, &c, &b) - 3.0).abs() < 1e-15);
    }

    #[test]
    fn quantize_merges_nearby_points() {
        let p = Point2d::new(0.3, -0.7);
        let q = Point2d::new(0.3 + 1e-13, -0.7 - 1e-13);
        let r = Point2d::new(0.3 + 1e-6, -0.7);
        assert_eq!(quantize(&p), quantize(&q));
        assert_ne!(quantize(&p), quantize(&r));
        assert_eq!(quantize(&Point2d::new(-0.0, 0.0)), (0, 0));
    }

}
