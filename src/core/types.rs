use std::fmt::Debug;

use serde::{Deserialize, Serialize};

/// Element plotted as one bar of the chart.
///
/// `x` is the ordering key shown on the category axis, `y` is the bar
/// magnitude. Index math never looks at either; they only feed frame building.
pub trait GraphRangeElement {
    type X: Debug + Clone;

    fn x(&self) -> Self::X;
    fn y(&self) -> f64;
}

/// Elements that carry their own stable identity.
pub trait Identifiable {
    type Id;

    fn id(&self) -> Self::Id;
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl GraphRangeElement for DataPoint {
    type X = f64;

    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl Identifiable for DataPoint {
    type Id = u64;

    /// Points are identified by the bit pattern of their key.
    fn id(&self) -> u64 {
        self.x.to_bits()
    }
}
