//! Flat storage for a recombining (triangular) tree.
//!
//! A tree of height `H` has levels `0..=H`, level `ℓ` holding `ℓ + 1`
//! nodes. Nodes live in one preallocated buffer; level `ℓ` starts at the
//! triangular number `ℓ(ℓ+1)/2`, so node `(ℓ, j)` sits at
//! `ℓ(ℓ+1)/2 + j` and the buffer holds `H(H+1)/2 + H + 1` values.

use pr_core::{
    errors::{Error, Result},
    Integer, Real, Size,
};
use std::fmt;

/// `n(n+1)/2`, the number of nodes on the levels before level `n`.
#[inline]
fn triangular(n: Size) -> Size {
    n * (n + 1) / 2
}

/// Triangular node storage addressed by `(level, index)`.
///
/// Every access is bounds-checked; the buffer never grows. Nodes start out
/// unset (NaN).
#[derive(Debug, Clone, PartialEq)]
pub struct LatticeStore {
    height: Size,
    nodes: Vec<Real>,
}

impl LatticeStore {
    /// Create a store of the given height with every node unset.
    ///
    /// Fails with [`Error::InvalidArgument`] if `height < 0` or if the node
    /// buffer cannot be allocated.
    pub fn new(height: Integer) -> Result<Self> {
        let height = Size::try_from(height).map_err(|_| {
            Error::InvalidArgument(format!("tree height must be non-negative, got {height}"))
        })?;
        let too_tall =
            || Error::InvalidArgument(format!("tree height {height} exceeds addressable memory"));
        let size = Self::storage_size(height).ok_or_else(too_tall)?;
        let mut nodes = Vec::new();
        nodes.try_reserve_exact(size).map_err(|_| too_tall())?;
        nodes.resize(size, Real::NAN);
        Ok(Self { height, nodes })
    }

    /// Number of stored values for a tree of height `height`, `None` when
    /// the buffer would exceed `isize::MAX` bytes.
    pub fn storage_size(height: Size) -> Option<Size> {
        let size = (height.checked_add(1)?).checked_mul(height.checked_add(2)?)? / 2;
        let max = isize::MAX as usize / std::mem::size_of::<Real>();
        (size <= max).then_some(size)
    }

    /// Height of the tree (index of the deepest level).
    pub fn height(&self) -> Size {
        self.height
    }

    /// Number of stored values.
    pub fn len(&self) -> Size {
        self.nodes.len()
    }

    /// Always `false`: even a height-0 tree holds its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn offset(&self, level: Size, index: Size) -> Result<Size> {
        if level > self.height {
            return Err(Error::IndexOutOfRange {
                index: level,
                size: self.height + 1,
            });
        }
        if index > level {
            return Err(Error::IndexOutOfRange {
                index,
                size: level + 1,
            });
        }
        Ok(triangular(level) + index)
    }

    /// Value of node `(level, index)`.
    pub fn get(&self, level: Size, index: Size) -> Result<Real> {
        Ok(self.nodes[self.offset(level, index)?])
    }

    /// Overwrite node `(level, index)`.
    pub fn set(&mut self, level: Size, index: Size, value: Real) -> Result<()> {
        let at = self.offset(level, index)?;
        self.nodes[at] = value;
        Ok(())
    }

    /// The `level + 1` values of `level`, ordered by index.
    pub fn level_values(&self, level: Integer) -> Result<&[Real]> {
        let level = Size::try_from(level).map_err(|_| {
            Error::InvalidArgument(format!("level must be non-negative, got {level}"))
        })?;
        let start = self.offset(level, 0)?;
        Ok(&self.nodes[start..=start + level])
    }

    fn level_slice(&self, level: Size) -> &[Real] {
        let start = triangular(level);
        &self.nodes[start..=start + level]
    }
}

/// One line per level, each introduced by a line break, values listed from
/// the highest index down. Unset nodes render as `NaN`.
impl fmt::Display for LatticeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for level in 0..=self.height {
            writeln!(f)?;
            for (i, v) in self.level_slice(level).iter().rev().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{v}")?;
            }
        }
        Ok(())
    }
}
