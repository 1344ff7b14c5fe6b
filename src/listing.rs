//////////////////////////////////////////////////////////////////////
// plain text listings of triangles and points
//
// one record per line, '#' starts a comment:
//
//   kind ax ay bx by cx cy     (triangles, kind 0 = small, 1 = large)
//   x y                        (points)

use std::convert::TryFrom;
use std::io::{BufRead, Write};

use crate::errors::*;
use crate::geom::Point2d;
use crate::tiling::{Triangle, TriangleKind};

//////////////////////////////////////////////////////////////////////

fn parse_values<T: std::str::FromStr>(tokens: &[&str]) -> Result<Vec<T>> {

    let mut rval = Vec::new();

    for value in tokens {
        if let Ok(x) = value.parse::<T>() {
            rval.push(x);
        } else {
            bail!("invalid number: {:}", value);
        }
    }

    Ok(rval)
}

// non-empty, comment-stripped lines with 1-based line numbers
fn records<R: BufRead>(reader: R) -> impl Iterator<Item=Result<(usize, String)>> {

    reader.lines().enumerate().filter_map(|(idx, line)| {

        match line {

            Err(e) => Some(Err(e.into())),

            Ok(line) => {
                let content = match line.find('#') {
                    Some(pos) => &line[..pos],
                    None => &line[..]
                };
                if content.trim().is_empty() {
                    None
                } else {
                    Some(Ok((idx + 1, content.to_string())))
                }
            }

        }

    })

}

//////////////////////////////////////////////////////////////////////

fn parse_triangle(lineno: usize, line: &str) -> Result<Triangle> {

    let tokens: Vec<&str> = line.split_whitespace().collect();

    if tokens.len() != 7 {
        bail!(ErrorKind::Parse(lineno,
                               format!("expected 7 fields but got {:}", tokens.len())));
    }

    let code = tokens[0].parse::<i64>().chain_err(
        || ErrorKind::Parse(lineno, format!("invalid kind code: {:}", tokens[0])))?;

    let kind = TriangleKind::try_from(code)?;

    let v: Vec<f64> = parse_values(&tokens[1..]).chain_err(
        || ErrorKind::Parse(lineno, "invalid coordinates".to_string()))?;

    Ok(Triangle::new(kind,
                     Point2d::new(v[0], v[1]),
                     Point2d::new(v[2], v[3]),
                     Point2d::new(v[4], v[5])))

}

pub fn read_triangles<R: BufRead>(reader: R) -> Result<Vec<Triangle>> {

    let mut triangles = Vec::new();

    for record in records(reader) {
        let (lineno, line) = record?;
        triangles.push(parse_triangle(lineno, &line)?);
    }

    Ok(triangles)

}

pub fn read_points<R: BufRead>(reader: R) -> Result<Vec<Point2d>> {

    let mut points = Vec::new();

    for record in records(reader) {

        let (lineno, line) = record?;

        let tokens: Vec<&str> = line.split_whitespace().collect();

        if tokens.len() != 2 {
            bail!(ErrorKind::Parse(lineno,
                                   format!("expected 2 fields but got {:}", tokens.len())));
        }

        let v: Vec<f64> = parse_values(&tokens).chain_err(
            || ErrorKind::Parse(lineno, "invalid coordinates".to_string()))?;

        points.push(Point2d::new(v[0], v[1]));

    }

    Ok(points)

}

//////////////////////////////////////////////////////////////////////
// f64 Display is shortest-round-trip, so reading back is exact

pub fn write_triangles<W: Write>(writer: &mut W, triangles: &[Triangle]) -> Result<()> {

    writeln!(writer, "# {:} triangles: kind ax ay bx by cx cy", triangles.len())?;

    for t in triangles {
        writeln!(writer, "{:} {:} {:} {:} {:} {:} {:}",
                 t.kind.code(),
                 t.a.x, t.a.y,
                 t.b.x, t.b.y,
                 t.c.x, t.c.y)?;
    }

    Ok(())

}

pub fn write_points<W: Write>(writer: &mut W, points: &[Point2d]) -> Result<()> {

    writeln!(writer, "# {:} points: x y", points.len())?;

    for p in points {
        writeln!(writer, "{:} {:}", p.x, p.y)?;
    }

    Ok(())

}

//////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {

    use super::*;
    use crate::tiling::build;

    #[test]
    fn triangles_read_back_exactly() {

        let tiling = build(3, false).unwrap();

        let mut buf = Vec::new();
        write_triangles(&mut buf, &tiling.triangles).unwrap();

        let triangles = read_triangles(&buf[..]).unwrap();
        assert_eq!(triangles, tiling.triangles);

    }

    #[test]
    fn points_read_back_exactly() {

        let tiling = build(2, false).unwrap();

        let mut buf = Vec::new();
        write_points(&mut buf, &tiling.points).unwrap();

        assert_eq!(read_points(&buf[..]).unwrap(), tiling.points);

    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {

        let text = "# header\n\n0 0 0 1 1 2 0  # trailing\n   \n1 0 0 0 1 1 0\n";

        let triangles = read_triangles(text.as_bytes()).unwrap();

        assert_eq!(triangles.len(), 2);
        assert_eq!(triangles[0].kind, TriangleKind::Small);
        assert_eq!(triangles[0].c, Point2d::new(2.0, 0.0));
        assert_eq!(triangles[1].kind, TriangleKind::Large);

    }

    #[test]
    fn unknown_kind_code_is_rejected() {

        let err = read_triangles("0 0 0 1 1 2 0\n2 0 0 1 1 2 0\n".as_bytes()).unwrap_err();

        assert!(matches!(err.kind(), ErrorKind::MalformedKind(2)));

    }

    #[test]
    fn bad_lines_report_line_number() {

        let err = read_triangles("# x\n0 0 0 1 1 2\n".as_bytes()).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::Parse(2, _)));

        let err = read_triangles("0 0 0 1 one 2 0\n".as_bytes()).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::Parse(1, _)));

        let err = read_triangles("small 0 0 1 1 2 0\n".as_bytes()).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::Parse(1, _)));

        let err = read_points("0.5\n".as_bytes()).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::Parse(1, _)));

    }

}
