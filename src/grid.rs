use crate::constants::*;
use crate::error::RigError;
use serde::{Deserialize, Serialize};

/// Read-only view of the map the camera moves over.
///
/// The camera never changes the map's topology; the only mutating call is
/// `center_map`, issued at most once per frame when the map wraps.
pub trait MapGrid {
    fn cell_count_x(&self) -> i32;
    fn cell_count_z(&self) -> i32;
    fn is_wrapping(&self) -> bool;
    fn metrics(&self) -> HexMetrics;
    /// Shift the visible chunk columns so they surround `x_position`.
    fn center_map(&mut self, x_position: f32);
}

/// Cell geometry shared by the grid and the camera bounds.
///
/// Configuration files carry only the outer radius; the inner radius is
/// always derived from it on load.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(from = "HexMetricsFile", into = "HexMetricsFile")]
pub struct HexMetrics {
    /// Center-to-corner distance
    pub outer_radius: f32,
    /// Center-to-edge distance
    pub inner_radius: f32,
    /// Cell columns per chunk
    pub chunk_size_x: i32,
}

impl HexMetrics {
    pub fn from_outer_radius(outer_radius: f32) -> Self {
        Self {
            outer_radius,
            inner_radius: outer_radius * HEX_OUTER_TO_INNER,
            chunk_size_x: HEX_CHUNK_SIZE_X,
        }
    }

    pub fn inner_diameter(&self) -> f32 {
        self.inner_radius * 2.0
    }

    /// Width of one chunk column in world units
    pub fn chunk_width(&self) -> f32 {
        self.inner_diameter() * self.chunk_size_x as f32
    }
}

impl Default for HexMetrics {
    fn default() -> Self {
        Self::from_outer_radius(HEX_OUTER_RADIUS)
    }
}

/// On-disk form of `HexMetrics`
#[derive(Serialize, Deserialize)]
#[serde(default)]
struct HexMetricsFile {
    outer_radius: f32,
    chunk_size_x: i32,
}

impl Default for HexMetricsFile {
    fn default() -> Self {
        Self {
            outer_radius: HEX_OUTER_RADIUS,
            chunk_size_x: HEX_CHUNK_SIZE_X,
        }
    }
}

impl From<HexMetricsFile> for HexMetrics {
    fn from(file: HexMetricsFile) -> Self {
        Self {
            chunk_size_x: file.chunk_size_x,
            ..Self::from_outer_radius(file.outer_radius)
        }
    }
}

impl From<HexMetrics> for HexMetricsFile {
    fn from(metrics: HexMetrics) -> Self {
        Self {
            outer_radius: metrics.outer_radius,
            chunk_size_x: metrics.chunk_size_x,
        }
    }
}

/// Map dimensions as they appear in the configuration file
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GridConfig {
    pub cell_count_x: i32,
    pub cell_count_z: i32,
    pub wrapping: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_count_x: MAP_DEFAULT_CELL_COUNT_X,
            cell_count_z: MAP_DEFAULT_CELL_COUNT_Z,
            wrapping: true,
        }
    }
}

/// Hex map split into chunk columns. On a wrapping map each column carries
/// a horizontal offset of -width, 0 or +width so the columns around the
/// camera form a contiguous band.
pub struct HexGrid {
    cell_count_x: i32,
    cell_count_z: i32,
    wrapping: bool,
    metrics: HexMetrics,
    chunk_count_x: i32,
    center_column: Option<i32>,
    column_offsets: Vec<f32>,
}

impl HexGrid {
    pub fn new(config: GridConfig, metrics: HexMetrics) -> Result<Self, RigError> {
        if config.cell_count_x <= 0 || config.cell_count_z <= 0 {
            return Err(RigError::InvalidGrid(format!(
                "cell counts must be positive, got {}x{}",
                config.cell_count_x, config.cell_count_z
            )));
        }
        if metrics.chunk_size_x <= 0 {
            return Err(RigError::InvalidGrid(format!(
                "chunk size must be positive, got {}",
                metrics.chunk_size_x
            )));
        }
        if config.wrapping && config.cell_count_x % metrics.chunk_size_x != 0 {
            return Err(RigError::InvalidGrid(format!(
                "wrapping map width {} is not a multiple of chunk size {}",
                config.cell_count_x, metrics.chunk_size_x
            )));
        }

        // Partial trailing chunk on non-wrapping maps
        let chunk_count_x =
            (config.cell_count_x + metrics.chunk_size_x - 1) / metrics.chunk_size_x;

        Ok(Self {
            cell_count_x: config.cell_count_x,
            cell_count_z: config.cell_count_z,
            wrapping: config.wrapping,
            metrics,
            chunk_count_x,
            center_column: None,
            column_offsets: vec![0.0; chunk_count_x as usize],
        })
    }

    pub fn chunk_count_x(&self) -> i32 {
        self.chunk_count_x
    }

    /// Chunk column the map is currently centered on, if centered yet
    pub fn center_column(&self) -> Option<i32> {
        self.center_column
    }

    /// Horizontal offset applied to a chunk column
    pub fn chunk_offset(&self, column: i32) -> Option<f32> {
        usize::try_from(column)
            .ok()
            .and_then(|i| self.column_offsets.get(i).copied())
    }

    /// Full map width in world units
    pub fn width(&self) -> f32 {
        self.cell_count_x as f32 * self.metrics.inner_diameter()
    }
}

impl MapGrid for HexGrid {
    fn cell_count_x(&self) -> i32 {
        self.cell_count_x
    }

    fn cell_count_z(&self) -> i32 {
        self.cell_count_z
    }

    fn is_wrapping(&self) -> bool {
        self.wrapping
    }

    fn metrics(&self) -> HexMetrics {
        self.metrics
    }

    fn center_map(&mut self, x_position: f32) {
        let center = (x_position / self.metrics.chunk_width()).floor() as i32;
        if self.center_column == Some(center) {
            return;
        }
        self.center_column = Some(center);

        let min_column = center - self.chunk_count_x / 2;
        let max_column = center + self.chunk_count_x / 2;
        let shift = self.width();

        for (i, offset) in self.column_offsets.iter_mut().enumerate() {
            let i = i as i32;
            *offset = if i < min_column {
                shift
            } else if i > max_column {
                -shift
            } else {
                0.0
            };
        }

        log::debug!(
            "recentered map on chunk column {center} (columns {min_column}..={max_column})"
        );
    }
}
