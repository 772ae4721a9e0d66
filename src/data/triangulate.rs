//! Delaunay triangulation of scattered `(x, y)` positions (Bowyer-Watson).
//!
//! Used to turn irregular `(I, J)` block grids into surface facets.

/// Extent of the enclosing super triangle relative to the normalised
/// `[0, 1]` point cloud.
const SUPER_SCALE: f64 = 1.0e3;

const AREA_EPS: f64 = 1.0e-12;

/// Triangulate `points`, returning index triples into the input slice.
///
/// Repeated positions only take part once (their first occurrence). Inputs
/// with fewer than three distinct positions, or with every position on one
/// line, produce no triangles.
pub fn triangulate(points: &[(f64, f64)]) -> Vec<[usize; 3]> {
    let mut unique: Vec<usize> = Vec::with_capacity(points.len());
    for (idx, p) in points.iter().enumerate() {
        if !unique.iter().any(|&u| points[u] == *p) {
            unique.push(idx);
        }
    }
    if unique.len() < 3 {
        return Vec::new();
    }

    // Normalise into the unit square so the incircle test works on
    // similar magnitudes regardless of the input units.
    let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
    let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for &u in &unique {
        let (x, y) = points[u];
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }
    let (span_x, span_y) = (max_x - min_x, max_y - min_y);
    if span_x <= 0.0 || span_y <= 0.0 {
        return Vec::new();
    }

    let mut verts: Vec<(f64, f64)> = unique
        .iter()
        .map(|&u| {
            let (x, y) = points[u];
            ((x - min_x) / span_x, (y - min_y) / span_y)
        })
        .collect();

    let n = verts.len();
    verts.push((0.5 - SUPER_SCALE, -SUPER_SCALE));
    verts.push((0.5 + SUPER_SCALE, -SUPER_SCALE));
    verts.push((0.5, SUPER_SCALE));

    let mut triangles: Vec<[usize; 3]> = vec![[n, n + 1, n + 2]];

    for p in 0..n {
        let (bad, good): (Vec<[usize; 3]>, Vec<[usize; 3]>) = triangles
            .into_iter()
            .partition(|tri| in_circumcircle(&verts, *tri, verts[p]));
        triangles = good;

        // Edges of the cavity: those not shared between two bad triangles.
        let mut boundary: Vec<(usize, usize)> = Vec::new();
        for tri in &bad {
            for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
                let shared = bad
                    .iter()
                    .filter(|other| *other != tri)
                    .any(|other| other.contains(&a) && other.contains(&b));
                if !shared {
                    boundary.push((a, b));
                }
            }
        }

        for (a, b) in boundary {
            triangles.push([a, b, p]);
        }
    }

    triangles
        .into_iter()
        .filter(|tri| tri.iter().all(|&v| v < n))
        .filter(|tri| signed_area(&verts, *tri).abs() > AREA_EPS)
        .map(|tri| tri.map(|v| unique[v]))
        .collect()
}

fn signed_area(verts: &[(f64, f64)], [a, b, c]: [usize; 3]) -> f64 {
    let (ax, ay) = verts[a];
    let (bx, by) = verts[b];
    let (cx, cy) = verts[c];
    0.5 * ((bx - ax) * (cy - ay) - (cx - ax) * (by - ay))
}

/// Whether `p` lies strictly inside the circumcircle of `tri`.
fn in_circumcircle(verts: &[(f64, f64)], [a, b, c]: [usize; 3], p: (f64, f64)) -> bool {
    let (ax, ay) = verts[a];
    let (bx, by) = (verts[b].0 - ax, verts[b].1 - ay);
    let (cx, cy) = (verts[c].0 - ax, verts[c].1 - ay);

    let d = 2.0 * (bx * cy - by * cx);
    if d == 0.0 {
        return false;
    }
    let b2 = bx * bx + by * by;
    let c2 = cx * cx + cy * cy;
    let ux = (cy * b2 - by * c2) / d;
    let uy = (bx * c2 - cx * b2) / d;
    let r2 = ux * ux + uy * uy;

    let (px, py) = (p.0 - ax, p.1 - ay);
    (px - ux).powi(2) + (py - uy).powi(2) < r2
}
