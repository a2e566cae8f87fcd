use crate::Point;

/// Standard star points (hoshi) for a square board.
///
/// Corner points sit 3 lines in from the edge on boards of 13 and up, 2 lines
/// on smaller boards of at least 7. Odd boards add the centre point, and odd
/// boards of 13 and up add the four side points. Boards under 7 only get the
/// centre, and only when odd.
pub fn star_points(size: u8) -> Vec<Point> {
    let odd = size % 2 == 1;
    let mid = size / 2;

    if size < 7 {
        return if odd {
            vec![Point::new(mid, mid)]
        } else {
            Vec::new()
        };
    }

    let off = if size >= 13 { 3 } else { 2 };
    let far = size - 1 - off;

    let mut pts = vec![
        Point::new(off, off),
        Point::new(off, far),
        Point::new(far, off),
        Point::new(far, far),
    ];

    if odd && size >= 13 {
        pts.extend([
            Point::new(off, mid),
            Point::new(mid, off),
            Point::new(mid, far),
            Point::new(far, mid),
        ]);
    }

    if odd {
        pts.push(Point::new(mid, mid));
    }

    pts
}
