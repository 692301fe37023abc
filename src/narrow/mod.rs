//! Narrowphase data and logic module.

pub mod swept;
pub mod tri;

use crate::Config;
use glam::{DVec2, IVec2};
use tri::Triangle;

// ---------- Point & Line ---------- //

/// Turn direction of an ordered point triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Colinear,
    Clockwise,
    CounterClockwise,
}

#[inline]
pub(crate) fn wide(v: IVec2) -> (i128, i128) {
    (v.x as i128, v.y as i128)
}
#[inline]
fn dvec(v: IVec2) -> DVec2 {
    DVec2::new(v.x as f64, v.y as f64)
}
#[inline]
fn dist_sqr(a: IVec2, b: IVec2) -> i128 {
    let (ax, ay) = wide(a);
    let (bx, by) = wide(b);
    (ax - bx) * (ax - bx) + (ay - by) * (ay - by)
}

fn closest_on_seg(p: DVec2, a: DVec2, b: DVec2) -> DVec2 {
    let ab = b - a;
    let len_sqr = ab.length_squared();
    if len_sqr == 0.0 {
        return a;
    }
    a + ab * (ab.dot(p - a) / len_sqr).clamp(0.0, 1.0)
}

#[inline]
pub fn orientation(p: IVec2, q: IVec2, r: IVec2) -> Orientation {
    //! Returns the orientation of the triplet `p`, `q`, `r`. Positive cross products are clockwise.
    let (px, py) = wide(p);
    let (qx, qy) = wide(q);
    let (rx, ry) = wide(r);
    let val = (qy - py) * (rx - qx) - (qx - px) * (ry - qy);
    match val.signum() {
        0 => Orientation::Colinear,
        1 => Orientation::Clockwise,
        _ => Orientation::CounterClockwise,
    }
}
#[inline]
pub fn colinear_point_on_seg(a: IVec2, b: IVec2, c: IVec2) -> bool {
    //! Given colinear `a`, `b` and `c`, returns whether `c` lies strictly between `a` and `b` on both axes.
    c.x < a.x.max(b.x) && c.x > a.x.min(b.x) && c.y < a.y.max(b.y) && c.y > a.y.min(b.y)
}

#[inline]
pub fn distance_f(a: IVec2, b: IVec2) -> f64 {
    //! Returns the euclidean distance between `a` and `b`.
    (dvec(a) - dvec(b)).length()
}
#[inline]
pub fn distance(a: IVec2, b: IVec2) -> i32 {
    //! Returns the euclidean distance between `a` and `b`, truncated.
    distance_f(a, b) as i32
}

#[inline]
pub fn point_on_seg(p: IVec2, a: IVec2, b: IVec2, eps: f64) -> bool {
    //! Returns whether `p` lies on the line segment `a->b`, endpoints included.
    let seg1 = distance_f(p, a);
    let seg2 = distance_f(p, b);
    let line = distance_f(a, b);
    approx::abs_diff_eq!(seg1 + seg2, line, epsilon = eps)
}

pub fn seg_seg_test(p1: IVec2, q1: IVec2, p2: IVec2, q2: IVec2, eps: f64) -> bool {
    //! Returns whether line segments `p1->q1` and `p2->q2` cross.
    //! Segments that merely touch, an endpoint lying on the other segment, do not count.
    let o1 = orientation(p1, q1, p2);
    let o2 = orientation(p1, q1, q2);
    let o3 = orientation(p2, q2, p1);
    let o4 = orientation(p2, q2, q1);

    if o1 != o2 && o3 != o4 {
        return !(point_on_seg(p1, p2, q2, eps)
            || point_on_seg(q1, p2, q2, eps)
            || point_on_seg(p2, p1, q1, eps)
            || point_on_seg(q2, p1, q1, eps));
    }

    (o1 == Orientation::Colinear && colinear_point_on_seg(p1, q1, p2))
        || (o2 == Orientation::Colinear && colinear_point_on_seg(p1, q1, q2))
        || (o3 == Orientation::Colinear && colinear_point_on_seg(p2, q2, p1))
        || (o4 == Orientation::Colinear && colinear_point_on_seg(p2, q2, q1))
}

// ---------- Primitives ---------- //

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub pos: IVec2,
}
impl Point {
    #[inline]
    pub fn new(x: i32, y: i32) -> Point {
        Point { pos: IVec2::new(x, y) }
    }

    #[inline]
    pub fn pos(&self) -> IVec2 {
        self.pos
    }
    #[inline]
    pub fn set_pos(&mut self, pos: IVec2) {
        self.pos = pos;
    }
    #[inline]
    pub fn translate(self, offset: IVec2) -> Point {
        Point { pos: self.pos + offset }
    }
}

/// A line segment from `a` to `b`. Its anchor is `a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub a: IVec2,
    pub b: IVec2,
}
impl Line {
    #[inline]
    pub fn new(x: i32, y: i32, x2: i32, y2: i32) -> Line {
        Line {
            a: IVec2::new(x, y),
            b: IVec2::new(x2, y2),
        }
    }

    #[inline]
    pub fn pos(&self) -> IVec2 {
        self.a
    }
    #[inline]
    pub fn set_pos(&mut self, pos: IVec2) {
        let offset = pos - self.a;
        self.a = pos;
        self.b += offset;
    }
    #[inline]
    pub fn translate(self, offset: IVec2) -> Line {
        Line {
            a: self.a + offset,
            b: self.b + offset,
        }
    }
}

/// An axis-aligned rectangle anchored at `pos`, spanning `w` by `h`. Negative sizes span backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub pos: IVec2,
    pub w: i32,
    pub h: i32,
}
impl Rect {
    #[inline]
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Rect {
        Rect { pos: IVec2::new(x, y), w, h }
    }

    #[inline]
    pub fn min(&self) -> IVec2 {
        IVec2::new(self.pos.x.min(self.pos.x + self.w), self.pos.y.min(self.pos.y + self.h))
    }
    #[inline]
    pub fn max(&self) -> IVec2 {
        IVec2::new(self.pos.x.max(self.pos.x + self.w), self.pos.y.max(self.pos.y + self.h))
    }
    pub fn corners(&self) -> [IVec2; 4] {
        //! Returns the corners in winding order, starting at the anchor.
        let (x, y) = (self.pos.x, self.pos.y);
        [
            IVec2::new(x, y),
            IVec2::new(x + self.w, y),
            IVec2::new(x + self.w, y + self.h),
            IVec2::new(x, y + self.h),
        ]
    }
    pub fn sides(&self) -> [(IVec2, IVec2); 4] {
        let c = self.corners();
        [(c[0], c[1]), (c[1], c[2]), (c[2], c[3]), (c[3], c[0])]
    }

    #[inline]
    pub fn pos(&self) -> IVec2 {
        self.pos
    }
    #[inline]
    pub fn set_pos(&mut self, pos: IVec2) {
        self.pos = pos;
    }
    #[inline]
    pub fn translate(self, offset: IVec2) -> Rect {
        Rect { pos: self.pos + offset, ..self }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    pub pos: IVec2,
    pub rad: i32,
}
impl Circle {
    #[inline]
    pub fn new(x: i32, y: i32, rad: i32) -> Circle {
        Circle {
            pos: IVec2::new(x, y),
            rad: rad.abs(),
        }
    }

    #[inline]
    fn rad_sqr(&self) -> i128 {
        self.rad as i128 * self.rad as i128
    }

    #[inline]
    pub fn pos(&self) -> IVec2 {
        self.pos
    }
    #[inline]
    pub fn set_pos(&mut self, pos: IVec2) {
        self.pos = pos;
    }
    #[inline]
    pub fn translate(self, offset: IVec2) -> Circle {
        Circle { pos: self.pos + offset, rad: self.rad }
    }
}

// ---------- Intersect ---------- //

/// Per-variant collision tests. Each pair is implemented on one side and forwarded from the other.
pub trait Intersect {
    fn point_test(&self, point: IVec2, cfg: &Config) -> bool;
    fn line_test(&self, line: &Line, cfg: &Config) -> bool;
    fn rect_test(&self, rect: &Rect, cfg: &Config) -> bool;
    fn circle_test(&self, circle: &Circle, cfg: &Config) -> bool;
    fn tri_test(&self, tri: &Triangle, cfg: &Config) -> bool;
}

impl Intersect for Point {
    #[inline]
    fn point_test(&self, point: IVec2, _cfg: &Config) -> bool {
        self.pos == point
    }
    #[inline]
    fn line_test(&self, line: &Line, cfg: &Config) -> bool {
        line.point_test(self.pos, cfg)
    }
    #[inline]
    fn rect_test(&self, rect: &Rect, cfg: &Config) -> bool {
        rect.point_test(self.pos, cfg)
    }
    #[inline]
    fn circle_test(&self, circle: &Circle, cfg: &Config) -> bool {
        circle.point_test(self.pos, cfg)
    }
    #[inline]
    fn tri_test(&self, tri: &Triangle, cfg: &Config) -> bool {
        tri.point_test(self.pos, cfg)
    }
}

impl Intersect for Line {
    #[inline]
    fn point_test(&self, point: IVec2, cfg: &Config) -> bool {
        point_on_seg(point, self.a, self.b, cfg.line_epsilon)
    }
    #[inline]
    fn line_test(&self, line: &Line, cfg: &Config) -> bool {
        seg_seg_test(self.a, self.b, line.a, line.b, cfg.line_epsilon)
    }
    #[inline]
    fn rect_test(&self, rect: &Rect, cfg: &Config) -> bool {
        rect.line_test(self, cfg)
    }
    #[inline]
    fn circle_test(&self, circle: &Circle, cfg: &Config) -> bool {
        circle.line_test(self, cfg)
    }
    #[inline]
    fn tri_test(&self, tri: &Triangle, cfg: &Config) -> bool {
        tri.line_test(self, cfg)
    }
}

impl Intersect for Rect {
    #[inline]
    fn point_test(&self, point: IVec2, _cfg: &Config) -> bool {
        //! Returns whether `point` is strictly inside the rectangle. The boundary does not collide.
        let (min, max) = (self.min(), self.max());
        point.x > min.x && point.x < max.x && point.y > min.y && point.y < max.y
    }
    fn line_test(&self, line: &Line, _cfg: &Config) -> bool {
        //! Clips the segment against both slabs of the rectangle.
        //! Collides if any part of it lies strictly inside. Running along a side or grazing a corner does not.
        let (min, max) = (dvec(self.min()), dvec(self.max()));
        let a = dvec(line.a);
        let d = dvec(line.b) - a;
        let (mut lo, mut hi) = (0.0f64, 1.0f64);
        for &(a, d, min, max) in [(a.x, d.x, min.x, max.x), (a.y, d.y, min.y, max.y)].iter() {
            if d == 0.0 {
                if a <= min || a >= max {
                    return false;
                }
            } else {
                let (t1, t2) = ((min - a) / d, (max - a) / d);
                lo = lo.max(t1.min(t2));
                hi = hi.min(t1.max(t2));
            }
        }
        lo < hi
    }
    #[inline]
    fn rect_test(&self, rect: &Rect, _cfg: &Config) -> bool {
        let (min1, max1) = (self.min(), self.max());
        let (min2, max2) = (rect.min(), rect.max());
        min1.x < max2.x && max1.x > min2.x && min1.y < max2.y && max1.y > min2.y
    }
    #[inline]
    fn circle_test(&self, circle: &Circle, cfg: &Config) -> bool {
        circle.rect_test(self, cfg)
    }
    #[inline]
    fn tri_test(&self, tri: &Triangle, cfg: &Config) -> bool {
        tri.rect_test(self, cfg)
    }
}

impl Intersect for Circle {
    #[inline]
    fn point_test(&self, point: IVec2, _cfg: &Config) -> bool {
        dist_sqr(self.pos, point) <= self.rad_sqr()
    }
    fn line_test(&self, line: &Line, _cfg: &Config) -> bool {
        //! Returns whether the closest point of the segment lies within the radius.
        let closest = closest_on_seg(dvec(self.pos), dvec(line.a), dvec(line.b));
        (dvec(self.pos) - closest).length_squared() <= self.rad_sqr() as f64
    }
    fn rect_test(&self, rect: &Rect, _cfg: &Config) -> bool {
        let (min, max) = (rect.min(), rect.max());
        let closest = IVec2::new(self.pos.x.clamp(min.x, max.x), self.pos.y.clamp(min.y, max.y));
        dist_sqr(self.pos, closest) <= self.rad_sqr()
    }
    #[inline]
    fn circle_test(&self, circle: &Circle, _cfg: &Config) -> bool {
        let rads = self.rad as i128 + circle.rad as i128;
        dist_sqr(self.pos, circle.pos) <= rads * rads
    }
    #[inline]
    fn tri_test(&self, tri: &Triangle, cfg: &Config) -> bool {
        tri.circle_test(self, cfg)
    }
}

// ---------- Shape ---------- //

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Point(Point),
    Line(Line),
    Rect(Rect),
    Circle(Circle),
    Tri(Triangle),
}

/// Binds the underlying primitive of a `Shape` to `$s` and evaluates `$e` for whichever it is.
macro_rules! shape_match {
    ($shape:expr => $s:ident => $e:expr) => {
        match $shape {
            Shape::Point($s) => $e,
            Shape::Line($s) => $e,
            Shape::Rect($s) => $e,
            Shape::Circle($s) => $e,
            Shape::Tri($s) => $e,
        }
    };
}

impl Shape {
    #[inline]
    pub fn pos(&self) -> IVec2 {
        //! Returns the anchor position.
        shape_match!(self => s => s.pos())
    }
    #[inline]
    pub fn set_pos(&mut self, pos: IVec2) {
        //! Moves the anchor to `pos`, carrying every other coordinate along.
        shape_match!(self => s => s.set_pos(pos))
    }
    #[inline]
    pub fn translate(self, offset: IVec2) -> Shape {
        shape_match!(self => s => Shape::from(s.translate(offset)))
    }

    #[inline]
    pub fn shape_test(&self, other: &Shape) -> bool {
        self.shape_test_with(other, &Config::DEFAULT)
    }
    pub fn shape_test_with(&self, other: &Shape, cfg: &Config) -> bool {
        match other {
            Shape::Point(p) => self.point_test(p.pos, cfg),
            Shape::Line(l) => self.line_test(l, cfg),
            Shape::Rect(r) => self.rect_test(r, cfg),
            Shape::Circle(c) => self.circle_test(c, cfg),
            Shape::Tri(t) => self.tri_test(t, cfg),
        }
    }

    #[inline]
    pub fn would_be_colliding(&self, other: &Shape, dx: i32, dy: i32) -> bool {
        self.would_be_colliding_with(other, dx, dy, &Config::DEFAULT)
    }
    pub fn would_be_colliding_with(&self, other: &Shape, dx: i32, dy: i32, cfg: &Config) -> bool {
        //! Returns whether `self`, offset by `dx`, `dy`, would collide with `other`. `self` is left untouched.
        self.translate(IVec2::new(dx, dy)).shape_test_with(other, cfg)
    }
}

impl Intersect for Shape {
    fn point_test(&self, point: IVec2, cfg: &Config) -> bool {
        shape_match!(self => s => s.point_test(point, cfg))
    }
    fn line_test(&self, line: &Line, cfg: &Config) -> bool {
        shape_match!(self => s => s.line_test(line, cfg))
    }
    fn rect_test(&self, rect: &Rect, cfg: &Config) -> bool {
        shape_match!(self => s => s.rect_test(rect, cfg))
    }
    fn circle_test(&self, circle: &Circle, cfg: &Config) -> bool {
        shape_match!(self => s => s.circle_test(circle, cfg))
    }
    fn tri_test(&self, tri: &Triangle, cfg: &Config) -> bool {
        shape_match!(self => s => s.tri_test(tri, cfg))
    }
}

impl From<Point> for Shape {
    fn from(point: Point) -> Self {
        Shape::Point(point)
    }
}
impl From<Line> for Shape {
    fn from(line: Line) -> Self {
        Shape::Line(line)
    }
}
impl From<Rect> for Shape {
    fn from(rect: Rect) -> Self {
        Shape::Rect(rect)
    }
}
impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}
impl From<Triangle> for Shape {
    fn from(tri: Triangle) -> Self {
        Shape::Tri(tri)
    }
}

#[inline]
pub fn is_colliding(a: &Shape, b: &Shape) -> bool {
    a.shape_test(b)
}
