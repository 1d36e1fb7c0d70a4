//! Parameter introspection for discoverable effect parameters.
//!
//! Hosts, preset files, and control surfaces discover what a processor
//! exposes through the [`ParameterInfo`] trait. Each parameter is described by
//! a [`ParamDescriptor`] carrying display names, range, default, a stable
//! [`ParamId`], and [`ParamFlags`] for host communication.
//!
//! # Example
//!
//! ```rust
//! use slamtape_core::{ParameterInfo, ParamDescriptor, ParamId};
//!
//! struct Amount {
//!     value: f64,
//! }
//!
//! impl ParameterInfo for Amount {
//!     fn param_count(&self) -> usize { 1 }
//!
//!     fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
//!         match index {
//!             0 => Some(ParamDescriptor::unit_range("Amount", "Amt", 0.5)
//!                 .with_id(ParamId(10), "amount")),
//!             _ => None,
//!         }
//!     }
//!
//!     fn get_param(&self, index: usize) -> f64 {
//!         match index {
//!             0 => self.value,
//!             _ => 0.0,
//!         }
//!     }
//!
//!     fn set_param(&mut self, index: usize, value: f64) {
//!         if let (0, Some(desc)) = (index, self.param_info(0)) {
//!             self.value = desc.clamp(value);
//!         }
//!     }
//! }
//! ```

/// Stable parameter identifier that survives reordering.
///
/// Once assigned, a `ParamId` must never change for a given parameter; preset
/// files and host automation refer to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParamId(pub u32);

/// Parameter capability flags for host communication.
///
/// ```rust
/// use slamtape_core::ParamFlags;
///
/// let flags = ParamFlags::AUTOMATABLE.union(ParamFlags::MODULATABLE);
/// assert!(flags.contains(ParamFlags::MODULATABLE));
/// assert!(!ParamFlags::NONE.contains(ParamFlags::AUTOMATABLE));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamFlags(u8);

impl ParamFlags {
    /// No flags set.
    pub const NONE: Self = Self(0);
    /// Host can automate this parameter.
    pub const AUTOMATABLE: Self = Self(1 << 0);
    /// Parameter also receives a control-voltage offset every frame.
    pub const MODULATABLE: Self = Self(1 << 1);

    /// Returns `true` if all bits in `other` are set in `self`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns the union of two flag sets.
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl Default for ParamFlags {
    fn default() -> Self {
        Self::AUTOMATABLE
    }
}

/// Trait for processors that expose introspectable parameters.
///
/// Parameters are addressed by a zero-based index that is stable for the
/// lifetime of the instance.
pub trait ParameterInfo {
    /// Number of parameters. Valid indices are `0..param_count()`.
    fn param_count(&self) -> usize;

    /// Descriptor for the parameter at `index`, or `None` if out of range.
    fn param_info(&self, index: usize) -> Option<ParamDescriptor>;

    /// Current value of the parameter at `index`. Returns `0.0` when out of
    /// range.
    fn get_param(&self, index: usize) -> f64;

    /// Set the parameter at `index`. Implementations clamp to the descriptor
    /// range and ignore out-of-range indices.
    fn set_param(&mut self, index: usize, value: f64);

    /// Find a parameter index by name (case-insensitive).
    ///
    /// Matches against [`ParamDescriptor::name`], [`ParamDescriptor::short_name`]
    /// and [`ParamDescriptor::string_id`].
    fn find_param_by_name(&self, name: &str) -> Option<usize> {
        (0..self.param_count()).find(|&i| {
            self.param_info(i).is_some_and(|d| {
                d.name.eq_ignore_ascii_case(name)
                    || d.short_name.eq_ignore_ascii_case(name)
                    || (!d.string_id.is_empty() && d.string_id.eq_ignore_ascii_case(name))
            })
        })
    }

    /// Finds a parameter index by its stable [`ParamId`].
    fn param_index_by_id(&self, id: ParamId) -> Option<usize> {
        (0..self.param_count()).find(|&i| self.param_info(i).is_some_and(|d| d.id == id))
    }
}

/// Describes a single parameter's metadata for display and validation.
///
/// The `short_name` should be 8 characters or less for hardware displays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDescriptor {
    /// Full parameter name (e.g., "Slam Trim").
    pub name: &'static str,
    /// Short name for hardware displays, max 8 characters.
    pub short_name: &'static str,
    /// Unit type for formatting.
    pub unit: ParamUnit,
    /// Minimum allowed value.
    pub min: f64,
    /// Maximum allowed value.
    pub max: f64,
    /// Value on construction.
    pub default: f64,
    /// Recommended encoder increment.
    pub step: f64,
    /// Stable numeric ID. Default: `ParamId(0)` (unassigned).
    pub id: ParamId,
    /// Human-readable stable ID used as the preset key. Default: `""`.
    pub string_id: &'static str,
    /// Capability flags. Default: [`ParamFlags::AUTOMATABLE`].
    pub flags: ParamFlags,
}

impl ParamDescriptor {
    /// Unipolar control in `[0, 1]` with the given default.
    pub const fn unit_range(name: &'static str, short_name: &'static str, default: f64) -> Self {
        Self {
            name,
            short_name,
            unit: ParamUnit::None,
            min: 0.0,
            max: 1.0,
            default,
            step: 0.01,
            id: ParamId(0),
            string_id: "",
            flags: ParamFlags::AUTOMATABLE,
        }
    }

    /// Bipolar control in `[-1, 1]`, centered at zero.
    pub const fn bipolar(name: &'static str, short_name: &'static str) -> Self {
        Self {
            name,
            short_name,
            unit: ParamUnit::None,
            min: -1.0,
            max: 1.0,
            default: 0.0,
            step: 0.01,
            id: ParamId(0),
            string_id: "",
            flags: ParamFlags::AUTOMATABLE,
        }
    }

    /// Sets the stable parameter ID and string ID.
    pub const fn with_id(mut self, id: ParamId, string_id: &'static str) -> Self {
        self.id = id;
        self.string_id = string_id;
        self
    }

    /// Sets the parameter flags.
    pub const fn with_flags(mut self, flags: ParamFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Sets the display unit.
    pub const fn with_unit(mut self, unit: ParamUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Clamps a value to this parameter's valid range.
    ///
    /// ```rust
    /// use slamtape_core::ParamDescriptor;
    ///
    /// let desc = ParamDescriptor::bipolar("Trim", "Trim");
    /// assert_eq!(desc.clamp(0.25), 0.25);
    /// assert_eq!(desc.clamp(-3.0), -1.0);
    /// assert_eq!(desc.clamp(3.0), 1.0);
    /// ```
    #[inline]
    pub fn clamp(&self, value: f64) -> f64 {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    /// Returns `true` if `value` lies within `[min, max]`. NaN is never
    /// contained.
    ///
    /// ```rust
    /// use slamtape_core::ParamDescriptor;
    ///
    /// let desc = ParamDescriptor::bipolar("Trim", "Trim");
    /// assert!(desc.contains(-1.0));
    /// assert!(!desc.contains(1.5));
    /// assert!(!desc.contains(f64::NAN));
    /// ```
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Unit hint for hosts displaying the parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamUnit {
    /// A `[0, 1]` value shown as a percentage.
    Percent,
    /// Dimensionless.
    None,
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestEffect {
        amount: f64,
        trim: f64,
    }

    impl TestEffect {
        fn new() -> Self {
            Self {
                amount: 0.5,
                trim: 0.0,
            }
        }
    }

    impl ParameterInfo for TestEffect {
        fn param_count(&self) -> usize {
            2
        }

        fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
            match index {
                0 => Some(
                    ParamDescriptor::unit_range("Amount", "Amt", 0.5)
                        .with_id(ParamId(100), "test_amount"),
                ),
                1 => Some(ParamDescriptor::bipolar("Trim", "Trim").with_id(ParamId(101), "test_trim")),
                _ => None,
            }
        }

        fn get_param(&self, index: usize) -> f64 {
            match index {
                0 => self.amount,
                1 => self.trim,
                _ => 0.0,
            }
        }

        fn set_param(&mut self, index: usize, value: f64) {
            let Some(desc) = self.param_info(index) else {
                return;
            };
            match index {
                0 => self.amount = desc.clamp(value),
                1 => self.trim = desc.clamp(value),
                _ => {}
            }
        }
    }

    #[test]
    fn test_param_info() {
        let effect = TestEffect::new();
        let amount = effect.param_info(0).expect("should have amount param");
        assert_eq!(amount.name, "Amount");
        assert_eq!(amount.min, 0.0);
        assert_eq!(amount.max, 1.0);
        assert!(effect.param_info(2).is_none());
    }

    #[test]
    fn test_set_param_clamps() {
        let mut effect = TestEffect::new();
        effect.set_param(0, 2.0);
        assert_eq!(effect.get_param(0), 1.0);
        effect.set_param(1, -5.0);
        assert_eq!(effect.get_param(1), -1.0);
    }

    #[test]
    fn test_out_of_bounds_index() {
        let mut effect = TestEffect::new();
        assert_eq!(effect.get_param(99), 0.0);
        effect.set_param(99, 42.0);
        assert_eq!(effect.get_param(0), 0.5);
        assert_eq!(effect.get_param(1), 0.0);
    }

    #[test]
    fn test_find_param_by_name() {
        let effect = TestEffect::new();
        assert_eq!(effect.find_param_by_name("amount"), Some(0));
        assert_eq!(effect.find_param_by_name("AMT"), Some(0));
        assert_eq!(effect.find_param_by_name("test_trim"), Some(1));
        assert_eq!(effect.find_param_by_name("drive"), None);
    }

    #[test]
    fn test_param_id_lookup() {
        let effect = TestEffect::new();
        assert_eq!(effect.param_index_by_id(ParamId(101)), Some(1));
        assert_eq!(effect.param_index_by_id(ParamId(999)), None);
    }

    #[test]
    fn test_contains() {
        let desc = ParamDescriptor::unit_range("Amount", "Amt", 0.5);
        assert!(desc.contains(0.0));
        assert!(desc.contains(1.0));
        assert!(!desc.contains(1.01));
        assert!(!desc.contains(-0.01));
        assert!(!desc.contains(f64::INFINITY));
    }

    #[test]
    fn test_param_flags() {
        let combined = ParamFlags::AUTOMATABLE.union(ParamFlags::MODULATABLE);
        assert!(combined.contains(ParamFlags::AUTOMATABLE));
        assert!(combined.contains(ParamFlags::MODULATABLE));
        assert_eq!(ParamFlags::default(), ParamFlags::AUTOMATABLE);
    }

    #[test]
    fn test_with_unit() {
        let desc = ParamDescriptor::unit_range("Amount", "Amt", 0.5).with_unit(ParamUnit::Percent);
        assert_eq!(desc.unit, ParamUnit::Percent);
        assert_eq!(ParamDescriptor::bipolar("Trim", "Trim").unit, ParamUnit::None);
    }
}
