use crate::Config;
use super::{point_on_seg, seg_seg_test, wide, Circle, Intersect, Line, Rect, Shape};
use glam::IVec2;

#[inline]
fn winding_sum(a: IVec2, b: IVec2, c: IVec2) -> i128 {
    //! Signed edge sum of the triplet. Non-negative for clockwise triangles.
    let (ax, ay) = wide(a);
    let (bx, by) = wide(b);
    let (cx, cy) = wide(c);
    (bx - ax) * (by + ay) + (cx - bx) * (cy + by) + (ax - cx) * (ay + cy)
}
#[inline]
fn double_area(a: IVec2, b: IVec2, c: IVec2) -> f64 {
    //! Twice the area of the triangle `a`, `b`, `c`.
    let (ax, ay) = wide(a);
    let (bx, by) = wide(b);
    let (cx, cy) = wide(c);
    ((bx - ax) * (cy - ay) - (cx - ax) * (by - ay)).abs() as f64
}

/// A triangle anchored at its first vertex. Vertices are always stored clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
    a: IVec2,
    b: IVec2,
    c: IVec2,
}
impl Triangle {
    #[inline]
    pub fn new(x: i32, y: i32, x2: i32, y2: i32, x3: i32, y3: i32) -> Triangle {
        Triangle::from_verts(IVec2::new(x, y), IVec2::new(x2, y2), IVec2::new(x3, y3))
    }
    pub fn from_verts(a: IVec2, b: IVec2, c: IVec2) -> Triangle {
        //! Counter-clockwise input is rewound by swapping the second and third vertices.
        if winding_sum(a, b, c) >= 0 {
            Triangle { a, b, c }
        } else {
            Triangle { a, b: c, c: b }
        }
    }

    #[inline]
    pub fn verts(&self) -> [IVec2; 3] {
        [self.a, self.b, self.c]
    }
    #[inline]
    pub fn edges(&self) -> [(IVec2, IVec2); 3] {
        [(self.a, self.b), (self.b, self.c), (self.c, self.a)]
    }
    #[inline]
    pub fn is_clockwise(&self) -> bool {
        winding_sum(self.a, self.b, self.c) >= 0
    }

    #[inline]
    pub fn area(&self) -> f64 {
        //! Twice the geometric area. Containment only ever compares areas scaled the same way.
        double_area(self.a, self.b, self.c)
    }

    #[inline]
    pub fn pos(&self) -> IVec2 {
        self.a
    }
    pub fn set_pos(&mut self, pos: IVec2) {
        //! Moves the anchor to `pos`. The other vertices keep their offsets, so shape and winding are kept.
        let offset = pos - self.a;
        self.a = pos;
        self.b += offset;
        self.c += offset;
    }
    #[inline]
    pub fn translate(mut self, offset: IVec2) -> Triangle {
        self.a += offset;
        self.b += offset;
        self.c += offset;
        self
    }

    fn point_on_edge(&self, p: IVec2, eps: f64) -> bool {
        self.edges().iter().any(|&(a, b)| point_on_seg(p, a, b, eps))
    }
    pub fn seg_test(&self, p: IVec2, q: IVec2, cfg: &Config) -> bool {
        //! Returns whether the line segment `p->q` crosses any edge.
        self.edges().iter().any(|&(a, b)| seg_seg_test(a, b, p, q, cfg.line_epsilon))
    }

    #[inline]
    pub fn would_be_colliding(&self, other: &Shape, dx: i32, dy: i32, cfg: &Config) -> bool {
        Shape::Tri(self.translate(IVec2::new(dx, dy))).shape_test_with(other, cfg)
    }
}

impl Intersect for Triangle {
    fn point_test(&self, p: IVec2, cfg: &Config) -> bool {
        //! Returns whether `p` is strictly inside. Points on an edge do not collide.
        // sub-triangle areas are integral, so the comparison is exact
        let sum = double_area(p, self.b, self.c) + double_area(self.a, p, self.c) + double_area(self.a, self.b, p);
        sum == self.area() && !self.point_on_edge(p, cfg.line_epsilon)
    }
    fn line_test(&self, line: &Line, cfg: &Config) -> bool {
        self.seg_test(line.a, line.b, cfg) || self.point_test(line.a, cfg) || self.point_test(line.b, cfg)
    }
    fn rect_test(&self, rect: &Rect, cfg: &Config) -> bool {
        rect.corners().iter().any(|&c| self.point_test(c, cfg))
            || self.verts().iter().any(|&v| rect.point_test(v, cfg))
            || rect.sides().iter().any(|&(p, q)| self.seg_test(p, q, cfg))
    }
    fn circle_test(&self, circle: &Circle, _cfg: &Config) -> bool {
        //! Tests the circle against the vertices, then the interior, then each edge.
        let (cx, cy) = wide(circle.pos);
        let rad_sqr = circle.rad as i128 * circle.rad as i128;
        let verts = self.verts();

        // vertex to centre, and its squared length past the radius
        let mut vc = [(0i128, 0i128); 3];
        let mut vc_sqr = [0i128; 3];
        for i in 0..3 {
            let (vx, vy) = wide(verts[i]);
            vc[i] = (cx - vx, cy - vy);
            vc_sqr[i] = vc[i].0 * vc[i].0 + vc[i].1 * vc[i].1 - rad_sqr;
            if vc_sqr[i] <= 0 {
                return true; // vertex inside circle
            }
        }

        let mut edges = [(0i128, 0i128); 3];
        for i in 0..3 {
            let (ax, ay) = wide(verts[i]);
            let (bx, by) = wide(verts[(i + 1) % 3]);
            edges[i] = (bx - ax, by - ay);
        }

        // centre on the inner side of every clockwise edge
        if (0..3).all(|i| edges[i].1 * vc[i].0 - edges[i].0 * vc[i].1 >= 0) {
            return true;
        }

        // closest point of an edge within the radius: cross^2 <= r^2 * len, where len is the squared edge length
        (0..3).any(|i| {
            let (ex, ey) = edges[i];
            let k = vc[i].0 * ex + vc[i].1 * ey;
            let len = ex * ex + ey * ey;
            if k <= 0 || k >= len {
                return false;
            }
            let cross = (ey * vc[i].0 - ex * vc[i].1).unsigned_abs();
            let limit = rad_sqr as u128 * len as u128;
            cross.checked_mul(cross).map_or(false, |c| c <= limit)
        })
    }
    fn tri_test(&self, tri: &Triangle, cfg: &Config) -> bool {
        tri.edges().iter().any(|&(p, q)| self.seg_test(p, q, cfg))
            || tri.verts().iter().any(|&v| self.point_test(v, cfg))
            || self.verts().iter().any(|&v| tri.point_test(v, cfg))
    }
}
