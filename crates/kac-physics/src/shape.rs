//! Canonical drum geometries shared by both synthesis backends.
//!
//! Shapes are measured in metres in shape-local coordinates:
//! - circular: centred on the origin,
//! - rectangular: spanning `[0, width] x [0, height]`,
//! - triangular (equilateral): vertices `(0, 0)`, `(side, 0)` and
//!   `(side / 2, side * sqrt(3) / 2)`.
//!
//! Arbitrary polygons are not modelled here; they reach the simulator as a
//! prebuilt [`BoundaryMask`] through [`BoundaryMaskSource`].

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::error::{require_positive, PhysicsError, PhysicsResult};
use crate::grid::{BoundaryMask, BoundaryMaskSource, SamplePoint};

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// A point in shape-local coordinates (metres).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A canonical membrane outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum DrumShape {
    /// Circular membrane.
    Circular {
        /// Radius in metres.
        radius: f64,
    },
    /// Rectangular membrane.
    Rectangular {
        /// Extent along x in metres.
        width: f64,
        /// Extent along y in metres.
        height: f64,
    },
    /// Equilateral triangular membrane.
    Triangular {
        /// Side length in metres.
        side: f64,
    },
}

impl DrumShape {
    /// Checks that every dimension is finite and positive.
    pub fn validate(&self) -> PhysicsResult<()> {
        match *self {
            DrumShape::Circular { radius } => require_positive("radius", radius),
            DrumShape::Rectangular { width, height } => {
                require_positive("width", width)?;
                require_positive("height", height)
            }
            DrumShape::Triangular { side } => require_positive("side", side),
        }
    }

    /// Short lowercase name of the shape kind.
    pub fn kind(&self) -> &'static str {
        match self {
            DrumShape::Circular { .. } => "circular",
            DrumShape::Rectangular { .. } => "rectangular",
            DrumShape::Triangular { .. } => "triangular",
        }
    }

    /// Lower-left corner of the bounding box.
    pub fn origin(&self) -> Point {
        match *self {
            DrumShape::Circular { radius } => Point::new(-radius, -radius),
            DrumShape::Rectangular { .. } | DrumShape::Triangular { .. } => Point::new(0.0, 0.0),
        }
    }

    /// Bounding box size `(width, height)`.
    pub fn extent(&self) -> (f64, f64) {
        match *self {
            DrumShape::Circular { radius } => (2.0 * radius, 2.0 * radius),
            DrumShape::Rectangular { width, height } => (width, height),
            DrumShape::Triangular { side } => (side, side * SQRT_3 / 2.0),
        }
    }

    /// Longest side of the bounding box.
    pub fn longest_extent(&self) -> f64 {
        let (w, h) = self.extent();
        w.max(h)
    }

    /// Centre of mass of the membrane.
    pub fn centroid(&self) -> Point {
        match *self {
            DrumShape::Circular { .. } => Point::new(0.0, 0.0),
            DrumShape::Rectangular { width, height } => Point::new(width / 2.0, height / 2.0),
            DrumShape::Triangular { side } => Point::new(side / 2.0, side * SQRT_3 / 6.0),
        }
    }

    /// Whether `p` lies strictly inside the membrane.
    pub fn contains(&self, p: Point) -> bool {
        match *self {
            DrumShape::Circular { radius } => p.x * p.x + p.y * p.y < radius * radius,
            DrumShape::Rectangular { width, height } => {
                p.x > 0.0 && p.x < width && p.y > 0.0 && p.y < height
            }
            DrumShape::Triangular { side } => {
                p.y > 0.0 && p.y < SQRT_3 * p.x && p.y < SQRT_3 * (side - p.x)
            }
        }
    }

    /// Whether `p` lies inside the membrane or on its rim, allowing a rounding
    /// tolerance proportional to the shape size.
    pub fn contains_closed(&self, p: Point) -> bool {
        let tol = 1e-9 * self.longest_extent();
        match *self {
            DrumShape::Circular { radius } => p.x.hypot(p.y) <= radius + tol,
            DrumShape::Rectangular { width, height } => {
                p.x >= -tol && p.x <= width + tol && p.y >= -tol && p.y <= height + tol
            }
            // Edge distances of the slanted sides are half of these residuals.
            DrumShape::Triangular { side } => {
                p.y >= -tol
                    && SQRT_3 * p.x - p.y >= -2.0 * tol
                    && SQRT_3 * (side - p.x) - p.y >= -2.0 * tol
            }
        }
    }

    /// Fails with [`PhysicsError::OutOfRange`] unless `p` is inside the shape.
    pub fn require_inside(&self, what: &'static str, p: Point) -> PhysicsResult<()> {
        if self.contains(p) {
            Ok(())
        } else {
            Err(PhysicsError::out_of_range(
                what,
                format!("({}, {}) is not inside the {} membrane", p.x, p.y, self.kind()),
            ))
        }
    }

    /// Draws a uniformly distributed interior point by rejection sampling the
    /// bounding box.
    pub fn random_point(&self, rng: &mut Pcg32) -> Point {
        let origin = self.origin();
        let (w, h) = self.extent();
        loop {
            let p = Point::new(
                origin.x + rng.gen::<f64>() * w,
                origin.y + rng.gen::<f64>() * h,
            );
            if self.contains(p) {
                return p;
            }
        }
    }

    /// Builds a raster of `resolution` cells across the longest extent,
    /// surrounded by `padding` cells on every side.
    pub fn raster(&self, resolution: usize, padding: usize) -> PhysicsResult<Raster> {
        self.validate()?;
        if resolution == 0 {
            return Err(PhysicsError::invalid_param("resolution", "must be at least 1"));
        }
        let spacing = self.longest_extent() / resolution as f64;
        let (w, h) = self.extent();
        let cells = |length: f64| ((length / spacing - 1e-9).ceil() as usize).max(1);
        Ok(Raster {
            origin: self.origin(),
            spacing,
            padding,
            cells_x: cells(w),
            cells_y: cells(h),
        })
    }
}

impl BoundaryMaskSource for DrumShape {
    /// Rasterises the shape with a one-cell boundary ring around it.
    fn boundary_mask(&self, resolution: usize) -> PhysicsResult<BoundaryMask> {
        Ok(self.raster(resolution, 1)?.mask(self))
    }
}

/// Mapping between grid cells and shape-local coordinates.
///
/// Cell `(x, y)` of the padded grid covers the square whose centre is
/// `origin + ((x - padding) + 0.5, (y - padding) + 0.5) * spacing`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Raster {
    origin: Point,
    spacing: f64,
    padding: usize,
    cells_x: usize,
    cells_y: usize,
}

impl Raster {
    /// Grid dimensions including padding.
    pub fn dimensions(&self) -> (usize, usize) {
        (
            self.cells_x + 2 * self.padding,
            self.cells_y + 2 * self.padding,
        )
    }

    /// Distance between neighbouring cell centres, in metres.
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Centre of a cell in shape-local coordinates.
    pub fn cell_centre(&self, cell: SamplePoint) -> Point {
        let offset = |index: usize| (index as f64 - self.padding as f64 + 0.5) * self.spacing;
        Point::new(self.origin.x + offset(cell.x), self.origin.y + offset(cell.y))
    }

    /// Cell containing `p`, or an out-of-range error if `p` falls off the grid.
    pub fn cell_of(&self, p: Point) -> PhysicsResult<SamplePoint> {
        let index = |coord: f64, origin: f64| {
            ((coord - origin) / self.spacing).floor() + self.padding as f64
        };
        let (size_x, size_y) = self.dimensions();
        let (x, y) = (index(p.x, self.origin.x), index(p.y, self.origin.y));
        if x < 0.0 || y < 0.0 || x >= size_x as f64 || y >= size_y as f64 {
            return Err(PhysicsError::out_of_range(
                "point",
                format!("({}, {}) falls outside the raster", p.x, p.y),
            ));
        }
        Ok(SamplePoint::new(x as usize, y as usize))
    }

    /// Marks every cell whose centre lies inside `shape` as interior. Padding
    /// cells are always boundary.
    pub fn mask(&self, shape: &DrumShape) -> BoundaryMask {
        let (size_x, size_y) = self.dimensions();
        let pad = self.padding;
        BoundaryMask::from_fn(size_x, size_y, |x, y| {
            let in_body = x >= pad && y >= pad && x < pad + self.cells_x && y < pad + self.cells_y;
            in_body && shape.contains(self.cell_centre(SamplePoint::new(x, y)))
        })
    }
}
