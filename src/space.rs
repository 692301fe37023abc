//! A collection of tagged shapes that can be queried and resolved against as a whole.

use crate::{Config, narrow::{Shape, swept::{sweep, Collision}}};
use fnv::{FnvBuildHasher, FnvHashSet};
use indexmap::IndexMap;
use log::trace;

/// Handle to a shape held by a `Space`. Never reused within the same `Space`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(u32);

#[derive(Debug, Clone)]
struct Member {
    shape: Shape,
    tags: FnvHashSet<String>,
}

/// Shapes in insertion order. Queries scan every member; there is no spatial index.
#[derive(Debug, Clone, Default)]
pub struct Space {
    members: IndexMap<ShapeId, Member, FnvBuildHasher>,
    next_id: u32,
    pub config: Config,
}

impl Space {
    #[inline]
    pub fn new() -> Space {
        Space::default()
    }
    #[inline]
    pub fn with_config(config: Config) -> Space {
        Space { config, ..Space::default() }
    }

    pub fn insert(&mut self, shape: impl Into<Shape>) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        self.members.insert(id, Member { shape: shape.into(), tags: FnvHashSet::default() });
        trace!("inserted {:?}", id);
        id
    }
    pub fn remove(&mut self, id: ShapeId) -> Option<Shape> {
        //! Removes the shape, keeping the order of the rest.
        let member = self.members.shift_remove(&id)?;
        trace!("removed {:?}", id);
        Some(member.shape)
    }
    #[inline]
    pub fn clear(&mut self) {
        self.members.clear();
    }

    #[inline]
    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.members.get(&id).map(|m| &m.shape)
    }
    #[inline]
    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.members.get_mut(&id).map(|m| &mut m.shape)
    }
    #[inline]
    pub fn contains(&self, id: ShapeId) -> bool {
        self.members.contains_key(&id)
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = (ShapeId, &Shape)> {
        self.members.iter().map(|(&id, m)| (id, &m.shape))
    }

    // ---------- Tags ---------- //

    pub fn add_tags(&mut self, id: ShapeId, tags: &[&str]) -> bool {
        //! Returns false if `id` is not in the space.
        match self.members.get_mut(&id) {
            Some(m) => {
                m.tags.extend(tags.iter().map(|t| t.to_string()));
                true
            }
            None => false,
        }
    }
    pub fn remove_tags(&mut self, id: ShapeId, tags: &[&str]) -> bool {
        match self.members.get_mut(&id) {
            Some(m) => {
                for t in tags {
                    m.tags.remove(*t);
                }
                true
            }
            None => false,
        }
    }
    pub fn has_tags(&self, id: ShapeId, tags: &[&str]) -> bool {
        //! Returns whether the shape carries every one of `tags`.
        self.members.get(&id).map_or(false, |m| tags.iter().all(|t| m.tags.contains(*t)))
    }
    pub fn filter_by_tags(&self, tags: &[&str]) -> Vec<ShapeId> {
        self.members
            .iter()
            .filter(|(_, m)| tags.iter().all(|t| m.tags.contains(*t)))
            .map(|(&id, _)| id)
            .collect()
    }

    // ---------- Queries ---------- //

    pub fn colliding(&self, shape: &Shape) -> Vec<ShapeId> {
        //! Returns the members colliding with `shape`. A member is never reported colliding with itself.
        self.members
            .iter()
            .filter(|(_, m)| !std::ptr::eq(&m.shape, shape) && shape.shape_test_with(&m.shape, &self.config))
            .map(|(&id, _)| id)
            .collect()
    }
    pub fn is_colliding(&self, shape: &Shape) -> bool {
        self.members
            .values()
            .any(|m| !std::ptr::eq(&m.shape, shape) && shape.shape_test_with(&m.shape, &self.config))
    }

    pub fn resolve(&self, id: ShapeId, dx: i32, dy: i32) -> Option<Collision<'_>> {
        //! Resolves the movement of member `id` against every other member.
        //! The reported blocker is the first member in the way at the last blocked trial position.
        let mover = self.get(id)?;
        let cfg = &self.config;
        Some(sweep(cfg, mover, dx, dy, move |moved| {
            self.members
                .iter()
                .filter(|(&other, _)| other != id)
                .map(|(_, m)| &m.shape)
                .find(|s| moved.shape_test_with(s, cfg))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::narrow::{Circle, Line, Point, Rect, tri::Triangle};
    use glam::IVec2;

    #[test]
    fn membership() {
        let mut space = Space::new();
        assert!(space.is_empty());

        let a = space.insert(Rect::new(0, 0, 2, 2));
        let b = space.insert(Circle::new(5, 5, 1));
        let c = space.insert(Line::new(0, 0, 3, 3));
        assert_eq!(space.len(), 3);
        assert_ne!(a, b);

        assert_eq!(space.remove(b), Some(Shape::Circle(Circle::new(5, 5, 1))));
        assert_eq!(space.remove(b), None);
        assert!(!space.contains(b));
        assert_eq!(space.iter().map(|(id, _)| id).collect::<Vec<_>>(), vec![a, c]);

        let d = space.insert(Rect::new(1, 1, 1, 1));
        assert_ne!(d, b);

        if let Some(s) = space.get_mut(a) {
            s.set_pos(IVec2::new(4, 4));
        }
        assert_eq!(space.get(a).map(|s| s.pos()), Some(IVec2::new(4, 4)));

        space.clear();
        assert!(space.is_empty());
    }

    #[test]
    fn tags() {
        let mut space = Space::new();
        let a = space.insert(Rect::new(0, 0, 2, 2));
        let b = space.insert(Rect::new(4, 0, 2, 2));
        assert!(space.add_tags(a, &["solid", "ground"]));
        assert!(space.add_tags(b, &["solid"]));

        assert!(space.has_tags(a, &["solid", "ground"]));
        assert!(!space.has_tags(b, &["solid", "ground"]));
        assert_eq!(space.filter_by_tags(&["solid"]), vec![a, b]);
        assert_eq!(space.filter_by_tags(&["ground"]), vec![a]);

        assert!(space.remove_tags(a, &["ground"]));
        assert!(space.filter_by_tags(&["ground"]).is_empty());

        let gone = space.insert(Point::new(0, 0));
        space.remove(gone);
        assert!(!space.add_tags(gone, &["solid"]));
        assert!(!space.has_tags(gone, &[]));
    }

    #[test]
    fn queries_skip_self() {
        let mut space = Space::new();
        let a = space.insert(Rect::new(0, 0, 4, 4));
        let b = space.insert(Triangle::new(2, 2, 8, 8, 2, 8));
        space.insert(Circle::new(50, 50, 2));

        let shape_a = *space.get(a).unwrap();
        assert_eq!(space.colliding(&shape_a), vec![a, b]);
        assert_eq!(space.colliding(space.get(a).unwrap()), vec![b]);
        assert!(space.is_colliding(space.get(b).unwrap()));
        assert!(!space.is_colliding(&Circle::new(-20, -20, 1).into()));
    }

    #[test]
    fn resolve_stops_at_nearest() {
        let mut space = Space::new();
        let mover = space.insert(Rect::new(0, 0, 2, 2));
        let far = space.insert(Rect::new(10, 0, 2, 2));
        let near = space.insert(Rect::new(7, 0, 2, 2));

        let coll = space.resolve(mover, 9, 0).unwrap();
        assert_eq!(coll.resolve, IVec2::new(5, 0));
        assert_eq!(coll.shape_b, space.get(near));
        assert_ne!(coll.shape_b, space.get(far));

        let coll = space.resolve(mover, 0, -5).unwrap();
        assert_eq!(coll.resolve, IVec2::new(0, -5));
        assert!(!coll.is_colliding());

        space.remove(far);
        assert!(space.resolve(far, 1, 0).is_none());
    }
}
