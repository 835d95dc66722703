//! Camera grid filter for the dashboard page

use std::fmt;
use std::str::FromStr;

use parking_lot::RwLock;

use crate::errors::DashboardError;

/// Which tiles of the camera grid are shown.
///
/// `Only` holds a position in the grid, not a camera id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraFilter {
    #[default]
    All,
    Only(usize),
}

impl CameraFilter {
    pub fn shows(self, position: usize) -> bool {
        match self {
            CameraFilter::All => true,
            CameraFilter::Only(selected) => selected == position,
        }
    }
}

impl FromStr for CameraFilter {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(CameraFilter::All);
        }
        s.parse::<usize>()
            .map(CameraFilter::Only)
            .map_err(|_| DashboardError::validation(format!("Invalid camera selection: {}", s)))
    }
}

impl fmt::Display for CameraFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraFilter::All => f.write_str("all"),
            CameraFilter::Only(position) => write!(f, "{}", position),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraTile {
    pub camera_id: u32,
    pub visible: bool,
}

pub struct CameraGrid {
    cameras: Vec<u32>,
    filter: RwLock<CameraFilter>,
}

impl CameraGrid {
    pub fn new(cameras: Vec<u32>) -> Self {
        Self {
            cameras,
            filter: RwLock::new(CameraFilter::All),
        }
    }

    pub fn cameras(&self) -> &[u32] {
        &self.cameras
    }

    pub fn filter(&self) -> CameraFilter {
        *self.filter.read()
    }

    pub fn select(&self, filter: CameraFilter) {
        *self.filter.write() = filter;
    }

    /// Step through `all, 0, 1, …, n-1, all`
    pub fn cycle(&self) -> CameraFilter {
        let mut filter = self.filter.write();
        *filter = match *filter {
            CameraFilter::All if !self.cameras.is_empty() => CameraFilter::Only(0),
            CameraFilter::Only(i) if i + 1 < self.cameras.len() => CameraFilter::Only(i + 1),
            _ => CameraFilter::All,
        };
        *filter
    }

    pub fn tiles(&self) -> Vec<CameraTile> {
        let filter = self.filter();
        self.cameras
            .iter()
            .enumerate()
            .map(|(position, &camera_id)| CameraTile {
                camera_id,
                visible: filter.shows(position),
            })
            .collect()
    }
}
