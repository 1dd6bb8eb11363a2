//! Property tweens
//!
//! A tween holds goal values for named numeric properties and moves every
//! attached subject from the values it had when attached toward those goals.

use super::Easing;
use std::cell::RefCell;
use std::rc::Rc;

/// Numeric property a tween can drive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TweenProperty {
    /// Light intensity
    Intensity,
    /// X component of the node position
    PositionX,
    /// Y component of the node position
    PositionY,
    /// Z component of the node position
    PositionZ,
}

/// Object whose numeric properties can be tweened
pub trait TweenSubject {
    /// Read the current value of a property
    fn property(&self, property: TweenProperty) -> f32;

    /// Write a new value for a property
    fn set_property(&mut self, property: TweenProperty, value: f32);
}

struct Subject<S> {
    target: Rc<RefCell<S>>,
    starts: Vec<f32>,
}

/// Interpolates subjects from their starting values to fixed goals
pub struct Tween<S> {
    goals: Vec<(TweenProperty, f32)>,
    easing: Easing,
    subjects: Vec<Subject<S>>,
}

impl<S: TweenSubject> Tween<S> {
    /// Create a tween with a single goal
    pub fn new(property: TweenProperty, goal: f32, easing: Easing) -> Self {
        Self {
            goals: vec![(property, goal)],
            easing,
            subjects: Vec::new(),
        }
    }

    /// Builder pattern: add another goal
    ///
    /// Goals must be added before subjects; a subject only records starting
    /// values for the goals known when it was attached.
    #[must_use]
    pub fn and(mut self, property: TweenProperty, goal: f32) -> Self {
        self.goals.push((property, goal));
        self
    }

    /// Attach a subject, capturing its current values as the tween origin
    pub fn add_subject(&mut self, target: Rc<RefCell<S>>) {
        let starts = {
            let subject = target.borrow();
            self.goals
                .iter()
                .map(|(property, _)| subject.property(*property))
                .collect()
        };
        self.subjects.push(Subject { target, starts });
    }

    /// Apply the tween at `progress` in `[0, 1]`
    pub fn update(&self, progress: f32) {
        let eased = self.easing.apply(progress);
        for subject in &self.subjects {
            let mut target = subject.target.borrow_mut();
            for ((property, goal), start) in self.goals.iter().zip(&subject.starts) {
                target.set_property(*property, start + (goal - start) * eased);
            }
        }
    }

    /// Easing curve used by this tween
    pub const fn easing(&self) -> Easing {
        self.easing
    }

    /// Number of attached subjects
    pub fn subject_count(&self) -> usize {
        self.subjects.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[derive(Default)]
    struct Probe {
        intensity: f32,
        z: f32,
    }

    impl TweenSubject for Probe {
        fn property(&self, property: TweenProperty) -> f32 {
            match property {
                TweenProperty::Intensity => self.intensity,
                TweenProperty::PositionZ => self.z,
                _ => 0.0,
            }
        }

        fn set_property(&mut self, property: TweenProperty, value: f32) {
            match property {
                TweenProperty::Intensity => self.intensity = value,
                TweenProperty::PositionZ => self.z = value,
                _ => {}
            }
        }
    }

    #[test]
    fn test_tween_starts_from_captured_value() {
        let probe = Rc::new(RefCell::new(Probe { intensity: 2.0, z: 0.0 }));
        let mut tween = Tween::new(TweenProperty::Intensity, 0.0, Easing::Linear);
        tween.add_subject(Rc::clone(&probe));

        // Changing the subject after attaching does not move the origin
        probe.borrow_mut().intensity = 100.0;

        tween.update(0.0);
        assert_abs_diff_eq!(probe.borrow().intensity, 2.0);
        tween.update(0.25);
        assert_abs_diff_eq!(probe.borrow().intensity, 1.5);
        tween.update(1.0);
        assert_abs_diff_eq!(probe.borrow().intensity, 0.0);
    }

    #[test]
    fn test_tween_drives_multiple_goals_and_subjects() {
        let a = Rc::new(RefCell::new(Probe::default()));
        let b = Rc::new(RefCell::new(Probe { intensity: 1.0, z: -4.0 }));
        let mut tween = Tween::new(TweenProperty::Intensity, 3.0, Easing::OutQuad)
            .and(TweenProperty::PositionZ, 4.0);
        tween.add_subject(Rc::clone(&a));
        tween.add_subject(Rc::clone(&b));
        assert_eq!(tween.subject_count(), 2);

        tween.update(1.0);
        assert_abs_diff_eq!(a.borrow().intensity, 3.0);
        assert_abs_diff_eq!(a.borrow().z, 4.0);
        assert_abs_diff_eq!(b.borrow().intensity, 3.0);
        assert_abs_diff_eq!(b.borrow().z, 4.0);

        tween.update(0.5);
        assert_abs_diff_eq!(b.borrow().z, -4.0 + 8.0 * 0.75);
    }
}
