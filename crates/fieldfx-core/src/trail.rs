use glam::Vec2;
use std::collections::VecDeque;

/// Bounded history of recent positions, oldest first.
///
/// Pushing onto a full trail evicts the oldest point, so `len() <= capacity()`
/// always holds.
#[derive(Debug, Clone, PartialEq)]
pub struct Trail {
    points: VecDeque<Vec2>,
    capacity: usize,
}

impl Trail {
    /// A capacity of zero is bumped to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, point: Vec2) {
        while self.points.len() >= self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn oldest(&self) -> Option<Vec2> {
        self.points.front().copied()
    }

    pub fn newest(&self) -> Option<Vec2> {
        self.points.back().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.points.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<Vec2> {
        self.points.iter().copied().collect()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evicts_oldest_first() {
        let mut trail = Trail::new(3);
        for i in 0..5 {
            trail.push(Vec2::splat(i as f32));
        }
        assert_eq!(trail.len(), 3);
        assert_eq!(trail.oldest(), Some(Vec2::splat(2.0)));
        assert_eq!(trail.newest(), Some(Vec2::splat(4.0)));
    }

    #[test]
    fn zero_capacity_holds_one_point() {
        let mut trail = Trail::new(0);
        trail.push(Vec2::X);
        trail.push(Vec2::Y);
        assert_eq!(trail.capacity(), 1);
        assert_eq!(trail.to_vec(), vec![Vec2::Y]);
    }
}
