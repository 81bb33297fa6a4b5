//! Change detection for field setters.
//!
//! Every mutator goes through these helpers so a field is marked for redraw
//! only when a value really changes.

/// Values closer than this are treated as equal by [`update_f32`].
pub const FLOAT_EPSILON: f32 = 0.001;

/// Store `value` in `slot` if it differs, setting `changed` when it does.
/// Returns whether the value changed.
pub fn update<T: PartialEq>(slot: &mut T, value: T, changed: &mut bool) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    *changed = true;
    true
}

/// [`update`] for floats, ignoring differences below [`FLOAT_EPSILON`].
pub fn update_f32(slot: &mut f32, value: f32, changed: &mut bool) -> bool {
    let diff = *slot - value;
    if diff < FLOAT_EPSILON && diff > -FLOAT_EPSILON {
        return false;
    }
    *slot = value;
    *changed = true;
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_marks_only_on_change() {
        let mut value = 3;
        let mut changed = false;
        assert!(!update(&mut value, 3, &mut changed));
        assert!(!changed);
        assert!(update(&mut value, 4, &mut changed));
        assert!(changed);
        assert_eq!(value, 4);
    }

    #[test]
    fn test_update_f32_epsilon() {
        let mut value = 1.0;
        let mut changed = false;
        assert!(!update_f32(&mut value, 1.0005, &mut changed));
        assert!(!changed);
        assert!(update_f32(&mut value, 1.01, &mut changed));
        assert!(changed);
    }
}
