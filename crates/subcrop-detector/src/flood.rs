use subcrop_types::{Pixel, Region, RgbFrame};

use crate::config::DetectorConfig;

/// Per-cell classification inside the current search window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CellState {
    Unvisited,
    Queued,
    Rejected,
    Accepted,
}

/// Reusable flood-fill scratch: the window-local state grid plus the explicit
/// traversal stack.
///
/// Grown once for the largest window used in a session; each call resets only
/// the sub-range it uses. One caller owns it exclusively for the duration of
/// a fill.
#[derive(Default)]
pub struct RegionWorkspace {
    states: Vec<CellState>,
    stack: Vec<(usize, usize)>,
}

impl RegionWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ensure_capacity(&mut self, cells: usize) {
        if self.states.len() < cells {
            self.states.resize(cells, CellState::Unvisited);
        }
        if self.stack.capacity() < cells {
            self.stack.reserve(cells - self.stack.capacity());
        }
    }
}

/// Sub-rectangle of the frame the fill is confined to, clipped to the frame
/// bounds. Half-open like [`Region`].
#[derive(Clone, Copy)]
struct SearchWindow {
    left: usize,
    right: usize,
    top: usize,
    bottom: usize,
}

impl SearchWindow {
    fn around(x: usize, y: usize, radius: usize, frame_width: usize, frame_height: usize) -> Self {
        Self {
            left: x.saturating_sub(radius),
            right: (x + radius).min(frame_width),
            top: y.saturating_sub(radius),
            bottom: (y + radius).min(frame_height),
        }
    }

    fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    fn width(&self) -> usize {
        self.right - self.left
    }

    fn cells(&self) -> usize {
        self.width() * (self.bottom - self.top)
    }

    fn index_of(&self, x: usize, y: usize) -> usize {
        (y - self.top) * self.width() + (x - self.left)
    }
}

/// Bounded flood fill: collect the 4-connected component of pixels exactly
/// matching `target` around the seed, confined to the search window, and
/// return its bounding region.
///
/// `None` when the component does not extend past a single row or column —
/// a seed matching nothing beyond itself reads as "nothing found", as does a
/// one-pixel-thick run. Membership is exact per-channel equality, not the
/// contrast metric used by the row scan.
pub fn find_region(
    frame: &RgbFrame,
    config: &DetectorConfig,
    workspace: &mut RegionWorkspace,
    seed_x: usize,
    seed_y: usize,
    target: Pixel,
) -> Option<Region> {
    debug_assert!(seed_x < frame.width() && seed_y < frame.height());
    let window = SearchWindow::around(
        seed_x,
        seed_y,
        config.search_radius,
        frame.width(),
        frame.height(),
    );
    let cells = window.cells();
    workspace.ensure_capacity(cells);
    workspace.states[..cells].fill(CellState::Unvisited);
    workspace.stack.clear();

    let mut left = seed_x;
    let mut right = seed_x;
    let mut top = seed_y;
    let mut bottom = seed_y;

    workspace.states[window.index_of(seed_x, seed_y)] = CellState::Queued;
    workspace.stack.push((seed_x, seed_y));

    while let Some((x, y)) = workspace.stack.pop() {
        let at = window.index_of(x, y);
        if frame.pixel(x, y) != target {
            workspace.states[at] = CellState::Rejected;
            continue;
        }
        workspace.states[at] = CellState::Accepted;
        left = left.min(x);
        right = right.max(x + 1);
        top = top.min(y);
        bottom = bottom.max(y + 1);

        for (nx, ny) in [
            (x.wrapping_sub(1), y),
            (x + 1, y),
            (x, y.wrapping_sub(1)),
            (x, y + 1),
        ] {
            if !window.contains(nx, ny) {
                continue;
            }
            let neighbor = window.index_of(nx, ny);
            if workspace.states[neighbor] != CellState::Unvisited {
                continue;
            }
            // marked before pushing so each cell enqueues at most once
            workspace.states[neighbor] = CellState::Queued;
            workspace.stack.push((nx, ny));
        }
    }

    if right - left < 2 || bottom - top < 2 {
        return None;
    }
    Some(Region::new(left, right, top, bottom))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{fill_rect, solid_frame};

    const BG: Pixel = Pixel::splat(100);
    const INK: Pixel = Pixel::new(220, 40, 40);

    fn config(width: usize, height: usize, radius: usize) -> DetectorConfig {
        DetectorConfig::for_frame(width, height).with_search_radius(radius)
    }

    #[test]
    fn isolated_seed_yields_nothing() {
        let mut frame = solid_frame(40, 40, BG);
        frame.set_pixel(10, 10, INK);
        let config = config(40, 40, 8);
        let mut workspace = RegionWorkspace::new();
        assert_eq!(
            find_region(&frame, &config, &mut workspace, 10, 10, INK),
            None
        );
    }

    #[test]
    fn single_pixel_thick_run_yields_nothing() {
        let mut frame = solid_frame(40, 40, BG);
        fill_rect(&mut frame, 8, 20, 10, 11, INK);
        let config = config(40, 40, 8);
        let mut workspace = RegionWorkspace::new();
        assert_eq!(
            find_region(&frame, &config, &mut workspace, 12, 10, INK),
            None
        );
    }

    #[test]
    fn blob_is_bounded_exactly() {
        let mut frame = solid_frame(64, 48, BG);
        fill_rect(&mut frame, 8, 14, 9, 13, INK);
        let config = config(64, 48, 10);
        let mut workspace = RegionWorkspace::new();
        let region = find_region(&frame, &config, &mut workspace, 10, 11, INK);
        assert_eq!(region, Some(Region::new(8, 14, 9, 13)));
    }

    #[test]
    fn fill_is_confined_to_the_window() {
        // the whole frame matches, so the component is clipped at the window
        let frame = solid_frame(50, 50, INK);
        let config = config(50, 50, 5);
        let mut workspace = RegionWorkspace::new();
        let region = find_region(&frame, &config, &mut workspace, 25, 25, INK);
        assert_eq!(region, Some(Region::new(20, 30, 20, 30)));
    }

    #[test]
    fn window_is_clipped_at_the_frame_edge() {
        let frame = solid_frame(50, 50, INK);
        let config = config(50, 50, 5);
        let mut workspace = RegionWorkspace::new();
        let region = find_region(&frame, &config, &mut workspace, 1, 1, INK);
        assert_eq!(region, Some(Region::new(0, 6, 0, 6)));
    }

    #[test]
    fn disconnected_patch_of_same_color_is_excluded() {
        let mut frame = solid_frame(64, 64, BG);
        fill_rect(&mut frame, 20, 26, 20, 26, INK);
        // same color, inside the window, but separated by background
        fill_rect(&mut frame, 28, 32, 20, 26, INK);
        let config = config(64, 64, 12);
        let mut workspace = RegionWorkspace::new();
        let region = find_region(&frame, &config, &mut workspace, 22, 22, INK);
        assert_eq!(region, Some(Region::new(20, 26, 20, 26)));
    }

    #[test]
    fn workspace_reuse_does_not_leak_state_between_calls() {
        let mut frame = solid_frame(64, 48, BG);
        fill_rect(&mut frame, 8, 14, 9, 13, INK);
        let config = config(64, 48, 10);
        let mut workspace = RegionWorkspace::new();
        let first = find_region(&frame, &config, &mut workspace, 10, 11, INK);
        let second = find_region(&frame, &config, &mut workspace, 10, 11, INK);
        assert_eq!(first, second);
        // a differently-placed window reuses the same scratch
        let third = find_region(&frame, &config, &mut workspace, 13, 12, INK);
        assert_eq!(third, first);
    }
}
