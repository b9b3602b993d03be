//! Occupancy-grid reachability planner.
//!
//! Breadth-first search over a 4-connected grid. The planner only confirms
//! reachability: on success it returns a one-element path holding the goal,
//! it does not reconstruct the route.
//!
//! # Known limitation
//!
//! The start cell is queued without any bounds, obstacle or visited check. A
//! start on an obstacle still expands into its free neighbours, a start equal
//! to the goal is always "reachable", and a start outside the grid only
//! reaches the goal if it is the goal.

use std::collections::VecDeque;

/// Cell value for free space. Any other byte is an obstacle.
pub const FREE: u8 = 0;

/// Conventional obstacle value written by [`Planner::set_obstacle`]
pub const OBSTACLE: u8 = 1;

/// Neighbour expansion order: +x, -x, +y, -y
const NEIGHBORS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// BFS frontier entry
#[derive(Clone, Copy, Debug)]
struct GridNode {
    x: i32,
    y: i32,
    cost: u32,
}

/// Grid planner owning a `width x height` occupancy grid.
#[derive(Clone, Debug)]
pub struct Planner {
    width: usize,
    height: usize,
    /// Row-major cells, `y * width + x`
    grid: Vec<u8>,
}

impl Planner {
    /// Create a planner with an all-free grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            grid: vec![FREE; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Occupancy cells, row-major
    pub fn grid(&self) -> &[u8] {
        &self.grid
    }

    /// Mutable occupancy cells. Contents are not validated; only `0` counts as free.
    pub fn grid_mut(&mut self) -> &mut [u8] {
        &mut self.grid
    }

    /// Flat index of an in-bounds cell
    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    /// Whether `(x, y)` is inside the grid and free
    pub fn is_free(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some_and(|i| self.grid[i] == FREE)
    }

    /// Mark an in-bounds cell blocked or free. Returns `false` if out of bounds.
    pub fn set_obstacle(&mut self, x: i32, y: i32, blocked: bool) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.grid[i] = if blocked { OBSTACLE } else { FREE };
                true
            }
            None => false,
        }
    }

    /// Check whether the goal is reachable from the start.
    ///
    /// Returns `[(goal_x, goal_y)]` when reached, an empty vector otherwise.
    pub fn plan(&self, start_x: i32, start_y: i32, goal_x: i32, goal_y: i32) -> Vec<(i32, i32)> {
        let mut visited = vec![false; self.grid.len()];
        let mut queue = VecDeque::new();
        queue.push_back(GridNode {
            x: start_x,
            y: start_y,
            cost: 0,
        });

        while let Some(node) = queue.pop_front() {
            if node.x == goal_x && node.y == goal_y {
                log::trace!(
                    "Goal ({}, {}) reached after {} steps",
                    goal_x,
                    goal_y,
                    node.cost
                );
                return vec![(node.x, node.y)];
            }

            for &(dx, dy) in &NEIGHBORS {
                let (Some(nx), Some(ny)) = (node.x.checked_add(dx), node.y.checked_add(dy)) else {
                    continue;
                };
                let Some(idx) = self.index(nx, ny) else {
                    continue;
                };
                if !visited[idx] && self.grid[idx] == FREE {
                    visited[idx] = true;
                    queue.push_back(GridNode {
                        x: nx,
                        y: ny,
                        cost: node.cost + 1,
                    });
                }
            }
        }

        log::trace!(
            "Goal ({}, {}) unreachable from ({}, {})",
            goal_x,
            goal_y,
            start_x,
            start_y
        );
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_grid_reaches_corner() {
        let planner = Planner::new(5, 5);
        assert_eq!(planner.plan(0, 0, 4, 4), vec![(4, 4)]);
    }

    #[test]
    fn test_goal_obstacle_unreachable() {
        let mut planner = Planner::new(5, 5);
        assert!(planner.set_obstacle(4, 4, true));
        assert!(planner.plan(0, 0, 4, 4).is_empty());
    }

    #[test]
    fn test_wall_blocks_goal() {
        let mut planner = Planner::new(5, 5);
        for y in 0..5 {
            planner.set_obstacle(2, y, true);
        }
        assert!(planner.plan(0, 0, 4, 0).is_empty());

        // Open a gap
        planner.set_obstacle(2, 3, false);
        assert_eq!(planner.plan(0, 0, 4, 0), vec![(4, 0)]);
    }

    #[test]
    fn test_any_nonzero_byte_blocks() {
        let mut planner = Planner::new(3, 1);
        planner.grid_mut()[1] = 0xAB;
        assert!(!planner.is_free(1, 0));
        assert!(planner.plan(0, 0, 2, 0).is_empty());
    }

    #[test]
    fn test_goal_outside_grid() {
        let planner = Planner::new(4, 4);
        assert!(planner.plan(0, 0, 10, 10).is_empty());
        assert!(planner.plan(0, 0, -1, 0).is_empty());
    }

    #[test]
    fn test_start_cell_not_checked() {
        let mut planner = Planner::new(3, 3);
        planner.set_obstacle(0, 0, true);

        // Start on an obstacle still expands
        assert_eq!(planner.plan(0, 0, 2, 2), vec![(2, 2)]);
        // Start equal to goal is reachable even when blocked
        assert_eq!(planner.plan(0, 0, 0, 0), vec![(0, 0)]);
        // Out-of-grid start equal to goal
        assert_eq!(planner.plan(-5, 7, -5, 7), vec![(-5, 7)]);
        // Out-of-grid start with no in-bounds neighbours
        assert!(planner.plan(-5, 7, 1, 1).is_empty());
    }

    #[test]
    fn test_start_at_i32_limits() {
        let planner = Planner::new(5, 5);
        assert!(planner.plan(i32::MAX, 0, 0, 0).is_empty());
        assert!(planner.plan(0, i32::MIN, 1, 1).is_empty());
        assert!(planner.plan(i32::MIN, i32::MAX, 4, 4).is_empty());
    }

    #[test]
    fn test_out_of_grid_start_adjacent_to_grid() {
        let planner = Planner::new(3, 3);
        // (-1, 0) has (0, 0) as its +x neighbour
        assert_eq!(planner.plan(-1, 0, 2, 2), vec![(2, 2)]);
    }

    #[test]
    fn test_empty_grid() {
        let planner = Planner::new(0, 0);
        assert!(planner.grid().is_empty());
        assert!(planner.plan(0, 0, 1, 1).is_empty());
        assert_eq!(planner.plan(0, 0, 0, 0), vec![(0, 0)]);
    }

    #[test]
    fn test_grid_length_invariant() {
        let planner = Planner::new(7, 3);
        assert_eq!(planner.grid().len(), planner.width() * planner.height());
    }

    #[test]
    fn test_set_obstacle_out_of_bounds() {
        let mut planner = Planner::new(2, 2);
        assert!(!planner.set_obstacle(2, 0, true));
        assert!(!planner.set_obstacle(0, -1, true));
        assert!(planner.grid().iter().all(|&c| c == FREE));
    }
}
