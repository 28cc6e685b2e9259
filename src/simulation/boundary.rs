//! Boundary rules applied after each integration step
//!
//! A [`Boundary`] is pure geometry: a crossing predicate, a projection back
//! onto the surface, and a reflection law. A [`BoundaryRule`] pairs one with
//! an [`Effect`], and a [`BoundarySet`] is the ordered list the engine walks

use super::error::SimError;
use super::states::NVec;

/// Trait for boundary surfaces in `D` dimensions
pub trait Boundary<const D: usize> {
    /// Short label used in log lines
    fn name(&self) -> &'static str;

    /// Reject geometry that cannot be evaluated in `D` dimensions
    fn validate(&self) -> Result<(), SimError> {
        Ok(())
    }

    /// True when `x` lies on or beyond the surface
    fn crossed(&self, x: &NVec<D>) -> bool;

    /// Project `x` onto the surface. `None` when the projection is undefined
    fn clamp(&self, x: &NVec<D>) -> Option<NVec<D>>;

    /// Velocity after an elastic bounce at `x`. Only the outward-moving
    /// normal component is negated; a body already heading back in is left alone.
    /// `None` when the normal at `x` is undefined
    fn reflect(&self, x: &NVec<D>, v: &NVec<D>) -> Option<NVec<D>>;
}

/// Circular (2D) or spherical (3D) container centred at the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub radius: f64,
}

impl<const D: usize> Boundary<D> for Sphere {
    fn name(&self) -> &'static str {
        "sphere"
    }

    fn validate(&self) -> Result<(), SimError> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(SimError::invalid(format!(
                "sphere radius must be finite and positive, got {}",
                self.radius
            )));
        }
        Ok(())
    }

    fn crossed(&self, x: &NVec<D>) -> bool {
        x.norm() >= self.radius
    }

    fn clamp(&self, x: &NVec<D>) -> Option<NVec<D>> {
        let r = x.norm();
        if r == 0.0 || !r.is_finite() {
            return None;
        }
        Some(x * (self.radius / r))
    }

    fn reflect(&self, x: &NVec<D>, v: &NVec<D>) -> Option<NVec<D>> {
        let r = x.norm();
        if r == 0.0 || !r.is_finite() {
            return None;
        }
        let n = x / r; // outward unit normal
        let vn = v.dot(&n);
        if vn <= 0.0 {
            return Some(*v);
        }
        Some(v - n * (2.0 * vn))
    }
}

/// Side of a plane that counts as "outside"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Positive, // crossed when x[axis] >= offset
    Negative, // crossed when x[axis] <= offset
}

impl Facing {
    fn sign(self) -> f64 {
        match self {
            Facing::Positive => 1.0,
            Facing::Negative => -1.0,
        }
    }
}

/// Wall perpendicular to one coordinate axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub axis: usize, // coordinate index the wall is perpendicular to
    pub offset: f64, // wall position along that axis
    pub facing: Facing,
}

impl<const D: usize> Boundary<D> for Plane {
    fn name(&self) -> &'static str {
        "plane"
    }

    fn validate(&self) -> Result<(), SimError> {
        if self.axis >= D {
            return Err(SimError::invalid(format!(
                "plane axis {} is out of range for a {}-dimensional run",
                self.axis,
                D
            )));
        }
        if !self.offset.is_finite() {
            return Err(SimError::invalid(format!(
                "plane offset must be finite, got {}",
                self.offset
            )));
        }
        Ok(())
    }

    fn crossed(&self, x: &NVec<D>) -> bool {
        match self.facing {
            Facing::Positive => x[self.axis] >= self.offset,
            Facing::Negative => x[self.axis] <= self.offset,
        }
    }

    fn clamp(&self, x: &NVec<D>) -> Option<NVec<D>> {
        let mut out = *x;
        out[self.axis] = self.offset;
        Some(out)
    }

    fn reflect(&self, _x: &NVec<D>, v: &NVec<D>) -> Option<NVec<D>> {
        let mut out = *v;
        // negate exactly, no normal arithmetic, so other components stay bit-identical
        if v[self.axis] * self.facing.sign() > 0.0 {
            out[self.axis] = -v[self.axis];
        }
        Some(out)
    }
}

/// What happens when a body crosses a boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Reflect, // negate the normal velocity component, keep going
    Stop, // clamp onto the surface and halt
}

/// One boundary and the effect its crossing has
pub struct BoundaryRule<const D: usize> {
    pub boundary: Box<dyn Boundary<D> + Send + Sync>,
    pub effect: Effect,
}

/// Ordered collection of boundary rules
/// Stop rules are checked before reflect rules regardless of insertion order
pub struct BoundarySet<const D: usize> {
    rules: Vec<BoundaryRule<D>>,
}

impl<const D: usize> Default for BoundarySet<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const D: usize> BoundarySet<D> {
    /// Create an empty rule set
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a rule
    pub fn with<B>(mut self, boundary: B, effect: Effect) -> Self
    where
        B: Boundary<D> + Send + Sync + 'static,
    {
        self.rules.push(BoundaryRule {
            boundary: Box::new(boundary),
            effect,
        });
        self
    }

    pub fn reflect<B>(self, boundary: B) -> Self
    where
        B: Boundary<D> + Send + Sync + 'static,
    {
        self.with(boundary, Effect::Reflect)
    }

    pub fn stop<B>(self, boundary: B) -> Self
    where
        B: Boundary<D> + Send + Sync + 'static,
    {
        self.with(boundary, Effect::Stop)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn validate(&self) -> Result<(), SimError> {
        self.rules.iter().try_for_each(|r| r.boundary.validate())
    }

    pub(crate) fn stop_rules(&self) -> impl Iterator<Item = &BoundaryRule<D>> + '_ {
        self.rules.iter().filter(|r| r.effect == Effect::Stop)
    }

    pub(crate) fn reflect_rules(&self) -> impl Iterator<Item = &BoundaryRule<D>> + '_ {
        self.rules.iter().filter(|r| r.effect == Effect::Reflect)
    }
}
