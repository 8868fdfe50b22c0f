//! Rigid composites: several bodies locked together and moving as one.
//!
//! A [`CompositeBody`] takes ownership of its members at construction,
//! derives the aggregate mass, center of mass, inertia and bounding circle,
//! and re-expresses every member relative to that center. The member list
//! is frozen afterwards; only the total mass can be changed, by
//! [`Body::set_mass`], which redistributes the change over all members.

use log::{debug, trace};

use crate::collision::AABB;
use crate::common::BodyError;
use crate::math::vec2::Vec2;
use crate::objects::body::Body;
use crate::objects::composite_options::CompositeOptions;
use crate::objects::mass::{is_valid_finite_mass, Mass};
use crate::objects::rigid_body::RigidBody;
use crate::shapes::Shape;

#[derive(Debug, Clone, PartialEq)]
pub struct CompositeBody {
    // Positions are relative to `center_of_mass`.
    members: Vec<RigidBody>,

    pub position: Vec2, // Reference point, center of the bounding circle
    pub rotation: f64,
    pub linear_velocity: Vec2,
    pub angular_velocity: f64,

    mass: Mass,
    inertia: f64,
    bounding_radius: f64,
    center_of_mass: Vec2, // In the frame the members were given in
    inertia_stale: bool,
}

/// How members are averaged into a center of mass.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Weighting {
    Mass,
    // Mass weights are meaningless once a member is immovable.
    Area,
}

impl Weighting {
    fn select(members: &[RigidBody], total: Mass) -> Result<Self, BodyError> {
        if !total.is_infinite() {
            return Ok(Weighting::Mass);
        }
        for (index, member) in members.iter().enumerate() {
            let area = member.area();
            if !(area.is_finite() && area > 0.0) {
                return Err(BodyError::DegenerateArea { index, area });
            }
        }
        Ok(Weighting::Area)
    }

    fn weight(self, member: &RigidBody) -> f64 {
        match self {
            Weighting::Mass => member.mass().value(),
            Weighting::Area => member.area(),
        }
    }

    fn center(self, members: &[RigidBody]) -> Vec2 {
        // Normalised weights keep large masses from overflowing the products.
        let total_weight: f64 = members.iter().map(|m| self.weight(m)).sum();
        members
            .iter()
            .map(|m| m.position * (self.weight(m) / total_weight))
            .sum()
    }
}

// Parallel-axis theorem about `center`.
fn inertia_about(members: &[RigidBody], total: Mass, center: Vec2) -> f64 {
    match total {
        Mass::Infinite => f64::INFINITY,
        Mass::Finite(_) => members
            .iter()
            .map(|m| m.inertia() + m.mass().value() * m.position.distance_squared(center))
            .sum(),
    }
}

fn bounding_radius_about(members: &[RigidBody], reference: Vec2) -> f64 {
    members
        .iter()
        .map(|m| m.position.distance(reference) + m.bounding_radius())
        .fold(0.0, f64::max)
}

/// Resolves the mass override into the composite's mass and the factor to
/// apply to every member.
fn resolve_mass(derived: Mass, requested: Option<f64>) -> Result<(Mass, f64), BodyError> {
    match (derived, requested) {
        (_, None) => Ok((derived, 1.0)),
        (Mass::Infinite, Some(value)) if value == f64::INFINITY => Ok((Mass::Infinite, 1.0)),
        (Mass::Finite(total), Some(value)) if is_valid_finite_mass(value) => {
            Ok((Mass::Finite(value), value / total))
        }
        (_, Some(value)) if value == f64::INFINITY || is_valid_finite_mass(value) => {
            Err(BodyError::MassOverrideConflict)
        }
        (_, Some(value)) => Err(BodyError::InvalidMass(value)),
    }
}

/// Fails without touching anything if some member would leave the valid
/// mass range after scaling by `ratio`.
fn check_rescale(members: &[RigidBody], ratio: f64, requested: f64) -> Result<(), BodyError> {
    let all_valid = members.iter().all(|m| match m.mass() {
        Mass::Finite(mass) => is_valid_finite_mass(mass * ratio),
        Mass::Infinite => true,
    });
    if all_valid {
        Ok(())
    } else {
        Err(BodyError::InvalidMass(requested))
    }
}

fn rescale_members(members: &mut [RigidBody], ratio: f64) -> Result<(), BodyError> {
    for member in members {
        if let Mass::Finite(mass) = member.mass() {
            member.set_mass(mass * ratio)?;
        }
    }
    Ok(())
}

impl CompositeBody {
    /// Composes `members` around the origin with default options.
    pub fn new<I>(members: I) -> Result<Self, BodyError>
    where
        I: IntoIterator<Item = RigidBody>,
    {
        Self::with_options(members, CompositeOptions::default())
    }

    /// Composes `members` into a single rigid body.
    ///
    /// The members are consumed. Every fallible step runs before any member
    /// is modified, so on error nothing has been re-based.
    pub fn with_options<I>(members: I, options: CompositeOptions) -> Result<Self, BodyError>
    where
        I: IntoIterator<Item = RigidBody>,
    {
        options.check_overrides()?;

        let mut members: Vec<RigidBody> = members.into_iter().collect();
        let derived_mass =
            Mass::total(members.iter().map(|m| m.mass())).ok_or(BodyError::EmptyComposite)?;

        if let Some(inertia) = options.inertia {
            if !derived_mass.is_infinite() {
                return Err(BodyError::InertiaOverride(inertia));
            }
        }

        let weighting = Weighting::select(&members, derived_mass)?;
        let center_of_mass = weighting.center(&members);
        let inertia = inertia_about(&members, derived_mass, center_of_mass);
        let bounding_radius = bounding_radius_about(&members, options.position);

        let (mass, ratio) = resolve_mass(derived_mass, options.mass)?;
        if ratio != 1.0 {
            check_rescale(&members, ratio, mass.value())?;
        }

        for member in members.iter_mut() {
            member.rotation += options.angle;
            member.position -= center_of_mass;
        }
        if ratio != 1.0 {
            rescale_members(&mut members, ratio)?;
        }

        for (index, member) in members.iter().enumerate() {
            trace!("composite member {} re-based to {:?}", index, member.position);
        }

        let inertia = inertia * ratio;
        debug!(
            "composed {} bodies: mass={:?}, inertia={:.4}, radius={:.4}, center={:?}",
            members.len(),
            mass,
            inertia,
            bounding_radius,
            center_of_mass
        );

        Ok(Self {
            members,
            position: options.position,
            rotation: 0.0,
            linear_velocity: options.velocity,
            angular_velocity: 0.0,
            mass,
            inertia,
            bounding_radius,
            center_of_mass,
            inertia_stale: false,
        })
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always `false`: a composite cannot be built empty.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members in insertion order, positioned relative to the center of mass.
    pub fn iter(&self) -> std::slice::Iter<'_, RigidBody> {
        self.members.iter()
    }

    pub fn members(&self) -> &[RigidBody] {
        &self.members
    }

    pub fn get(&self, index: usize) -> Result<&RigidBody, BodyError> {
        self.members.get(index).ok_or(BodyError::IndexOutOfRange {
            index,
            len: self.members.len(),
        })
    }

    /// Center of mass in the frame the members were originally given in.
    pub fn center_of_mass(&self) -> Vec2 {
        self.center_of_mass
    }

    /// True after [`Body::set_mass`] until [`recompute_inertia`](Self::recompute_inertia).
    pub fn inertia_stale(&self) -> bool {
        self.inertia_stale
    }

    /// Re-derives the inertia from the current member masses.
    pub fn recompute_inertia(&mut self) -> f64 {
        self.inertia = inertia_about(&self.members, self.mass, Vec2::ZERO);
        self.inertia_stale = false;
        self.inertia
    }
}

impl<'a> IntoIterator for &'a CompositeBody {
    type Item = &'a RigidBody;
    type IntoIter = std::slice::Iter<'a, RigidBody>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Body for CompositeBody {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn rotation(&self) -> f64 {
        self.rotation
    }

    fn linear_velocity(&self) -> Vec2 {
        self.linear_velocity
    }

    fn mass(&self) -> Mass {
        self.mass
    }

    fn inertia(&self) -> f64 {
        self.inertia
    }

    fn bounding_radius(&self) -> f64 {
        self.bounding_radius
    }

    /// The composite's shape is the union of its members.
    fn shape(&self) -> Option<&Shape> {
        None
    }

    /// Box of the bounding circle, not a tight fit around the members.
    fn aabb(&self) -> AABB {
        AABB::around_circle(self.position, self.bounding_radius)
    }

    /// Scales every member's mass by `value / mass`. The center of mass is
    /// unchanged. The stored inertia is left as is and flagged stale.
    fn set_mass(&mut self, value: f64) -> Result<(), BodyError> {
        let current = self.mass.finite().ok_or(BodyError::InfiniteMassRescale)?;
        if !is_valid_finite_mass(value) {
            return Err(BodyError::InvalidMass(value));
        }

        let ratio = value / current;
        check_rescale(&self.members, ratio, value)?;
        rescale_members(&mut self.members, ratio)?;
        self.mass = Mass::Finite(value);
        self.inertia_stale = true;

        debug!(
            "composite mass rescaled {} -> {} (ratio {:.4}); inertia not recomputed",
            current, value, ratio
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ErrorKind;
    use crate::shapes::{Circle, Polygon};
    use approx::assert_relative_eq;
    use std::f64::consts::PI;
    const EPSILON: f64 = 1e-9;

    fn circle_at(mass: f64, radius: f64, x: f64, y: f64) -> RigidBody {
        RigidBody::new(mass, Shape::Circle(Circle::new(radius))).with_position(Vec2::new(x, y))
    }

    fn dumbbell(d: f64, r: f64) -> (CompositeBody, f64) {
        let a = circle_at(1.0, r, 0.0, 0.0);
        let b = circle_at(1.0, r, d, 0.0);
        let own_inertia = a.inertia() + b.inertia();
        (CompositeBody::new(vec![a, b]).unwrap(), own_inertia)
    }

    #[test]
    fn test_dumbbell_mass_and_center() {
        let (composite, _) = dumbbell(4.0, 0.5);
        assert_eq!(composite.mass(), Mass::Finite(2.0));
        assert_eq!(composite.center_of_mass(), Vec2::new(2.0, 0.0));
        assert_eq!(composite.get(0).unwrap().position, Vec2::new(-2.0, 0.0));
        assert_eq!(composite.get(1).unwrap().position, Vec2::new(2.0, 0.0));
    }

    #[test]
    fn test_dumbbell_inertia_uses_parallel_axis() {
        let d = 4.0;
        let (composite, own_inertia) = dumbbell(d, 0.5);
        let expected = own_inertia + 2.0 * (d / 2.0) * (d / 2.0);
        assert_relative_eq!(composite.inertia(), expected, epsilon = EPSILON);
        assert!(!composite.inertia_stale());
    }

    #[test]
    fn test_dumbbell_bounding_radius_measured_from_reference_point() {
        let (d, r) = (4.0, 0.5);
        let (composite, _) = dumbbell(d, r);
        // The far member is d away from the origin, not d/2.
        assert_relative_eq!(composite.bounding_radius(), d + r, epsilon = EPSILON);
        assert!(composite.bounding_radius() >= d / 2.0 + r);
    }

    #[test]
    fn test_bounding_radius_around_center_reference() {
        let (d, r) = (4.0, 0.5);
        let composite = CompositeBody::with_options(
            vec![circle_at(1.0, r, 0.0, 0.0), circle_at(1.0, r, d, 0.0)],
            CompositeOptions::new().at(Vec2::new(d / 2.0, 0.0)),
        )
        .unwrap();
        assert_relative_eq!(composite.bounding_radius(), d / 2.0 + r, epsilon = EPSILON);
        assert_eq!(composite.position(), Vec2::new(d / 2.0, 0.0));
    }

    #[test]
    fn test_unequal_masses_weight_center() {
        let composite =
            CompositeBody::new(vec![circle_at(3.0, 1.0, 0.0, 0.0), circle_at(1.0, 1.0, 4.0, 0.0)])
                .unwrap();
        assert!((composite.center_of_mass().x - 1.0).abs() < EPSILON);
        let weighted: Vec2 = composite.iter().map(|m| m.position * m.mass().value()).sum();
        assert!(weighted.magnitude() < EPSILON);
    }

    #[test]
    fn test_angle_is_added_to_members() {
        let a = circle_at(1.0, 1.0, 0.0, 0.0).with_rotation(0.25);
        let b = circle_at(1.0, 1.0, 2.0, 0.0);
        let composite =
            CompositeBody::with_options(vec![a, b], CompositeOptions::new().rotated(PI / 2.0))
                .unwrap();
        assert!((composite.get(0).unwrap().rotation - (0.25 + PI / 2.0)).abs() < EPSILON);
        assert!((composite.get(1).unwrap().rotation - PI / 2.0).abs() < EPSILON);
        assert_eq!(composite.rotation(), 0.0);
    }

    #[test]
    fn test_velocity_and_position_come_from_options() {
        let options = CompositeOptions::new()
            .at(Vec2::new(1.0, 1.0))
            .moving(Vec2::new(3.0, -1.0));
        let composite = CompositeBody::with_options(vec![circle_at(1.0, 1.0, 1.0, 1.0)], options)
            .unwrap();
        assert_eq!(composite.position(), Vec2::new(1.0, 1.0));
        assert_eq!(composite.linear_velocity(), Vec2::new(3.0, -1.0));
        assert_eq!(composite.get(0).unwrap().position, Vec2::ZERO);
    }

    #[test]
    fn test_empty_composite_is_rejected() {
        let result = CompositeBody::new(Vec::<RigidBody>::new());
        assert_eq!(result, Err(BodyError::EmptyComposite));
        assert_eq!(result.unwrap_err().kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_density_option_is_rejected() {
        for options in [
            CompositeOptions::new().with_density(1.0),
            CompositeOptions::new().with_density(0.0).with_mass(2.0),
            CompositeOptions::new().with_density(5.0).at(Vec2::new(1.0, 0.0)),
        ] {
            let result = CompositeBody::with_options(vec![circle_at(1.0, 1.0, 0.0, 0.0)], options);
            assert_eq!(result, Err(BodyError::DensityOverride));
        }
        // Even with no members at all.
        let empty = CompositeBody::with_options(
            Vec::<RigidBody>::new(),
            CompositeOptions::new().with_density(1.0),
        );
        assert_eq!(empty, Err(BodyError::DensityOverride));
    }

    #[test]
    fn test_inertia_option_is_rejected_for_finite_composites() {
        let members = || vec![circle_at(1.0, 1.0, 0.0, 0.0), circle_at(1.0, 1.0, 1.0, 0.0)];
        let finite =
            CompositeBody::with_options(members(), CompositeOptions::new().with_inertia(3.0));
        assert_eq!(finite, Err(BodyError::InertiaOverride(3.0)));
        let infinite = CompositeBody::with_options(
            members(),
            CompositeOptions::new().with_inertia(f64::INFINITY),
        );
        assert_eq!(infinite.unwrap_err().kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_infinite_member_switches_to_area_weighting() {
        // Areas pi and 4 pi: center at 4/5 of the way to the larger circle.
        let anchor = circle_at(0.0, 1.0, 0.0, 0.0);
        let big = circle_at(5.0, 2.0, 5.0, 0.0);
        let composite = CompositeBody::new(vec![anchor, big]).unwrap();
        assert!(composite.mass().is_infinite());
        assert!(composite.inertia().is_infinite());
        assert_eq!(composite.inverse_mass(), 0.0);
        assert_eq!(composite.inverse_inertia(), 0.0);
        assert!((composite.center_of_mass().x - 4.0).abs() < EPSILON);
        assert!(composite.center_of_mass().is_finite());
    }

    #[test]
    fn test_infinite_composite_accepts_infinite_overrides() {
        let options = CompositeOptions::new()
            .with_inertia(f64::INFINITY)
            .with_mass(f64::INFINITY);
        let composite =
            CompositeBody::with_options(vec![circle_at(0.0, 1.0, 0.0, 0.0)], options).unwrap();
        assert!(composite.mass().is_infinite());
    }

    #[test]
    fn test_overflowing_mass_sum_is_immovable() {
        let composite = CompositeBody::new(vec![
            circle_at(1e308, 1.0, 0.0, 0.0),
            circle_at(1e308, 1.0, 2.0, 0.0),
        ])
        .unwrap();
        assert!(composite.mass().is_infinite());
        assert!(composite.inertia().is_infinite());
        // Equal areas.
        assert_eq!(composite.center_of_mass(), Vec2::new(1.0, 0.0));
        assert_eq!(composite.get(0).unwrap().position, Vec2::new(-1.0, 0.0));
        assert_eq!(composite.get(1).unwrap().position, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_large_finite_masses_keep_a_finite_center() {
        let composite = CompositeBody::new(vec![
            circle_at(1e307, 1.0, 0.0, 0.0),
            circle_at(1e307, 1.0, 100.0, 0.0),
        ])
        .unwrap();
        assert_eq!(composite.mass(), Mass::Finite(2e307));
        assert!(composite.center_of_mass().is_finite());
        assert_relative_eq!(composite.center_of_mass().x, 50.0, epsilon = EPSILON);
    }

    #[test]
    fn test_degenerate_area_in_infinite_composite() {
        let anchor = circle_at(0.0, 1.0, 0.0, 0.0);
        let point = circle_at(1.0, 0.0, 3.0, 0.0);
        let result = CompositeBody::new(vec![anchor, point]);
        assert_eq!(result, Err(BodyError::DegenerateArea { index: 1, area: 0.0 }));
    }

    #[test]
    fn test_point_masses_are_fine_when_finite() {
        let composite =
            CompositeBody::new(vec![circle_at(1.0, 0.0, -1.0, 0.0), circle_at(1.0, 0.0, 1.0, 0.0)])
                .unwrap();
        assert_relative_eq!(composite.inertia(), 2.0, epsilon = EPSILON);
        assert_eq!(composite.bounding_radius(), 1.0);
    }

    #[test]
    fn test_mass_override_scales_members_and_inertia() {
        let members = vec![circle_at(1.0, 1.0, 0.0, 0.0), circle_at(3.0, 1.0, 4.0, 0.0)];
        let plain = CompositeBody::new(members.clone()).unwrap();
        let heavy =
            CompositeBody::with_options(members, CompositeOptions::new().with_mass(8.0)).unwrap();

        assert_eq!(heavy.mass(), Mass::Finite(8.0));
        assert_eq!(heavy.center_of_mass(), plain.center_of_mass());
        assert_relative_eq!(heavy.get(0).unwrap().mass().value(), 2.0, epsilon = EPSILON);
        assert_relative_eq!(heavy.get(1).unwrap().mass().value(), 6.0, epsilon = EPSILON);
        assert_relative_eq!(heavy.inertia(), 2.0 * plain.inertia(), epsilon = EPSILON);
        let mut check = heavy.clone();
        assert_relative_eq!(check.recompute_inertia(), heavy.inertia(), epsilon = EPSILON);
    }

    #[test]
    fn test_mass_override_underflowing_a_member_is_rejected() {
        let members = vec![circle_at(1e-300, 1.0, 0.0, 0.0), circle_at(1.0, 1.0, 1.0, 0.0)];
        let result =
            CompositeBody::with_options(members, CompositeOptions::new().with_mass(1e-300));
        assert_eq!(result, Err(BodyError::InvalidMass(1e-300)));
    }

    #[test]
    fn test_mass_override_conflicts() {
        let finite = || vec![circle_at(1.0, 1.0, 0.0, 0.0)];
        let infinite = || vec![circle_at(0.0, 1.0, 0.0, 0.0)];
        assert_eq!(
            CompositeBody::with_options(finite(), CompositeOptions::new().with_mass(f64::INFINITY)),
            Err(BodyError::MassOverrideConflict)
        );
        assert_eq!(
            CompositeBody::with_options(infinite(), CompositeOptions::new().with_mass(2.0)),
            Err(BodyError::MassOverrideConflict)
        );
        assert_eq!(
            CompositeBody::with_options(finite(), CompositeOptions::new().with_mass(-2.0)),
            Err(BodyError::InvalidMass(-2.0))
        );
    }

    #[test]
    fn test_get_out_of_range() {
        let (composite, _) = dumbbell(1.0, 0.1);
        assert_eq!(composite.len(), 2);
        assert!(!composite.is_empty());
        let err = composite.get(2).unwrap_err();
        assert_eq!(err, BodyError::IndexOutOfRange { index: 2, len: 2 });
        assert_eq!(err.kind(), ErrorKind::Index);
        assert!(composite.get(usize::MAX).is_err());
    }

    #[test]
    fn test_iteration_is_restartable_and_ordered() {
        let members = vec![
            circle_at(1.0, 0.5, 0.0, 0.0),
            circle_at(2.0, 0.25, 1.0, 0.0),
            circle_at(3.0, 0.75, 0.0, 1.0),
        ];
        let composite = CompositeBody::new(members).unwrap();
        let first: Vec<&RigidBody> = composite.iter().collect();
        let second: Vec<&RigidBody> = (&composite).into_iter().collect();
        assert_eq!(first, second);
        let masses: Vec<f64> = composite.iter().map(|m| m.mass().value()).collect();
        assert_eq!(masses, vec![1.0, 2.0, 3.0]);
        assert_eq!(composite.members().len(), 3);
    }

    #[test]
    fn test_set_mass_preserves_ratios_and_center() {
        let members = vec![circle_at(1.0, 1.0, 0.0, 0.0), circle_at(3.0, 1.0, 4.0, 0.0)];
        let mut composite = CompositeBody::new(members).unwrap();
        let before: Vec<Vec2> = composite.iter().map(|m| m.position).collect();
        let inertia_before = composite.inertia();

        composite.set_mass(2.0).unwrap();

        assert_eq!(composite.mass(), Mass::Finite(2.0));
        assert_relative_eq!(composite.get(0).unwrap().mass().value(), 0.5, epsilon = EPSILON);
        assert_relative_eq!(composite.get(1).unwrap().mass().value(), 1.5, epsilon = EPSILON);
        let after: Vec<Vec2> = composite.iter().map(|m| m.position).collect();
        assert_eq!(before, after);
        let weighted: Vec2 = composite.iter().map(|m| m.position * m.mass().value()).sum();
        assert!(weighted.magnitude() < EPSILON);

        assert_eq!(composite.inertia(), inertia_before);
        assert!(composite.inertia_stale());
        assert_relative_eq!(composite.recompute_inertia(), inertia_before / 2.0, epsilon = EPSILON);
        assert!(!composite.inertia_stale());
    }

    #[test]
    fn test_set_mass_rejects_infinite_composite() {
        let mut composite =
            CompositeBody::new(vec![circle_at(0.0, 1.0, 0.0, 0.0), circle_at(1.0, 1.0, 2.0, 0.0)])
                .unwrap();
        let err = composite.set_mass(5.0).unwrap_err();
        assert_eq!(err, BodyError::InfiniteMassRescale);
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert_eq!(composite.get(1).unwrap().mass(), Mass::Finite(1.0));
    }

    #[test]
    fn test_set_mass_rejects_invalid_values() {
        let (mut composite, _) = dumbbell(2.0, 0.5);
        for value in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(composite.set_mass(value).is_err());
        }
        assert_eq!(composite.mass(), Mass::Finite(2.0));
        assert!(!composite.inertia_stale());
    }

    #[test]
    fn test_set_mass_underflowing_a_member_changes_nothing() {
        let mut composite = CompositeBody::new(vec![
            circle_at(1e-300, 1.0, 0.0, 0.0),
            circle_at(1.0, 1.0, 1.0, 0.0),
        ])
        .unwrap();
        let before = composite.clone();

        // 1e-300 * 1e-300 underflows to zero.
        let err = composite.set_mass(1e-300).unwrap_err();

        assert_eq!(err, BodyError::InvalidMass(1e-300));
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert_eq!(composite.get(0).unwrap().mass(), Mass::Finite(1e-300));
        assert_eq!(composite.get(1).unwrap().mass(), Mass::Finite(1.0));
        assert_eq!(composite.mass(), before.mass());
        assert!(!composite.inertia_stale());
        assert_eq!(composite, before);
    }

    #[test]
    fn test_recompute_inertia_on_infinite_composite() {
        let mut composite = CompositeBody::new(vec![circle_at(0.0, 1.0, 0.0, 0.0)]).unwrap();
        assert!(composite.recompute_inertia().is_infinite());
    }

    #[test]
    fn test_bounding_extents_and_no_shape() {
        let composite = CompositeBody::with_options(
            vec![
                RigidBody::new(1.0, Shape::Polygon(Polygon::rectangle(2.0, 2.0)))
                    .with_position(Vec2::new(3.0, 0.0)),
                circle_at(1.0, 1.0, -1.0, 0.0),
            ],
            CompositeOptions::new().at(Vec2::new(1.0, 2.0)),
        )
        .unwrap();
        assert!(composite.shape().is_none());

        let radius = composite.bounding_radius();
        assert!((composite.x_min() - (1.0 - radius)).abs() < EPSILON);
        assert!((composite.x_max() - (1.0 + radius)).abs() < EPSILON);
        assert!((composite.y_min() - (2.0 - radius)).abs() < EPSILON);
        assert!((composite.y_max() - (2.0 + radius)).abs() < EPSILON);

        // Square at (3, 0): sqrt(8) from the reference plus half-diagonal sqrt(2).
        assert!((radius - (8.0f64.sqrt() + 2.0f64.sqrt())).abs() < EPSILON);
    }
}
