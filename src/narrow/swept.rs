use crate::{Config, Fp, Vec2, narrow::Shape};
use glam::IVec2;
use log::{debug, trace};

/// The outcome of resolving a movement of `shape_a`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collision<'a> {
    /// The moving shape.
    pub shape_a: &'a Shape,
    /// The shape that blocked the movement, if any did.
    pub shape_b: Option<&'a Shape>,
    /// The largest displacement found not to collide.
    pub resolve: IVec2,
    /// Whether `resolve` strays so far from the intended displacement that it should not be trusted as a smooth block.
    pub teleporting: bool,
}
impl<'a> Collision<'a> {
    #[inline]
    pub fn is_colliding(&self) -> bool {
        self.shape_b.is_some()
    }
}

#[inline]
fn sign(v: i32) -> Fp {
    v.signum() as Fp
}

pub(crate) fn sweep<'a, F>(cfg: &Config, mover: &'a Shape, dx: i32, dy: i32, mut blocker: F) -> Collision<'a>
where
    F: FnMut(&Shape) -> Option<&'a Shape>,
{
    //! Walks the trial displacement back along the `dx`, `dy` line, one unit of the major axis per step,
    //! until `blocker` reports nothing in the way of `mover` at the trial position.
    let mut out = Collision {
        shape_a: mover,
        shape_b: None,
        resolve: IVec2::new(dx, dy),
        teleporting: false,
    };
    if dx == 0 && dy == 0 {
        return out;
    }

    let prime_x = dy.unsigned_abs() <= dx.unsigned_abs();
    let (major, minor) = if prime_x { (dx as Fp, dy as Fp) } else { (dy as Fp, dx as Fp) };
    let slope = if dx != 0 && dy != 0 { (minor / major).abs() } else { 0.0 };
    let step = if prime_x {
        Vec2::new(-sign(dx), -sign(dy) * slope)
    } else {
        Vec2::new(-sign(dx) * slope, -sign(dy))
    };

    // past this many steps any result would be flagged as teleporting anyway
    let max_steps = (major.abs() * (1.0 + cfg.teleport_ratio)).ceil() as u32 + 1;

    let mut trial = Vec2::new(dx as Fp, dy as Fp);
    let mut steps = 0;
    while let Some(other) = blocker(&mover.translate(out.resolve)) {
        out.shape_b = Some(other);
        if steps == max_steps {
            debug!("gave up resolving ({}, {}) for {:?} after {} steps", dx, dy, mover, steps);
            out.resolve = IVec2::ZERO;
            out.teleporting = true;
            return out;
        }
        trial += step;
        steps += 1;
        out.resolve = IVec2::new(trial.x as i32, trial.y as i32);
        trace!("resolve step {}: trying {:?}", steps, out.resolve);
    }

    let strays = |d: i32, r: i32| (d as i64 - r as i64).abs() as Fp > (d as Fp * cfg.teleport_ratio).abs();
    if strays(dx, out.resolve.x) || strays(dy, out.resolve.y) {
        debug!("resolving ({}, {}) to {:?} is a teleport", dx, dy, out.resolve);
        out.teleporting = true;
    }
    out
}

#[inline]
pub fn resolve<'a>(mover: &'a Shape, other: &'a Shape, dx: i32, dy: i32) -> Collision<'a> {
    resolve_with(&Config::DEFAULT, mover, other, dx, dy)
}
pub fn resolve_with<'a>(cfg: &Config, mover: &'a Shape, other: &'a Shape, dx: i32, dy: i32) -> Collision<'a> {
    //! Returns the furthest `mover` can travel along `dx`, `dy` before colliding with `other`.
    sweep(cfg, mover, dx, dy, move |moved| if moved.shape_test_with(other, cfg) { Some(other) } else { None })
}
