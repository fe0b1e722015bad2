use crate::shape::{Shape, ShapeId};

/// Append-only, insertion-ordered shapes keyed by [`ShapeId`].
///
/// The id counter lives beside the backing vector rather than being derived
/// from its length, so ids stay unique if entries are ever removed.
#[derive(Debug, Clone)]
pub struct ShapeStore {
    next_id: u64,
    shapes: Vec<(ShapeId, Shape)>,
}

impl ShapeStore {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            shapes: Vec::new(),
        }
    }

    pub fn add(&mut self, shape: Shape) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        self.shapes.push((id, shape));
        id
    }

    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes
            .binary_search_by_key(&id, |(existing, _)| *existing)
            .ok()
            .map(|idx| &self.shapes[idx].1)
    }

    /// Shapes in ascending id order, which is also draw order.
    pub fn iter(&self) -> impl Iterator<Item = (ShapeId, &Shape)> + '_ {
        self.shapes.iter().map(|(id, shape)| (*id, shape))
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl Default for ShapeStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Paint;
    use crate::shape::Geometry;

    fn circle(radius: f64) -> Shape {
        Shape::new(
            Geometry::Circle {
                center_x: 0.0,
                center_y: 0.0,
                radius,
            },
            Paint::new(),
        )
    }

    #[test]
    fn ids_start_at_one_and_increase() {
        let mut store = ShapeStore::new();
        let ids: Vec<u64> = (0..5).map(|i| store.add(circle(i as f64)).get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn iterates_in_insertion_order_and_looks_up_by_id() {
        let mut store = ShapeStore::new();
        assert!(store.is_empty());
        let first = store.add(circle(1.0));
        let second = store.add(circle(2.0));

        let radii: Vec<f64> = store
            .iter()
            .map(|(_, shape)| match shape.geometry {
                Geometry::Circle { radius, .. } => radius,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(radii, vec![1.0, 2.0]);

        assert!(matches!(
            store.get(second).map(|s| s.geometry),
            Some(Geometry::Circle { radius, .. }) if radius == 2.0
        ));
        assert!(store.get(first).is_some());
        assert!(store.get(ShapeId(3)).is_none());
    }
}
