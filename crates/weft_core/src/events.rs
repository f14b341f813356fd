//! Pointer events
//!
//! The platform backend performs hit-testing and reports which element an
//! event targets; elements only need to know which kind of event arrived.

/// Pointer event kinds an element exposes a callback slot for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerEvent {
    /// Pointer moved over the element
    Enter,
    /// Pointer moved off the element
    Leave,
    /// Button pressed while over the element
    Down,
    /// Button released while over the element
    Up,
}

impl PointerEvent {
    /// All pointer event kinds, in slot order
    pub const ALL: [PointerEvent; 4] = [
        PointerEvent::Enter,
        PointerEvent::Leave,
        PointerEvent::Down,
        PointerEvent::Up,
    ];

    /// Position of this event's callback slot
    pub fn index(self) -> usize {
        self as usize
    }

    /// Stable name used in logs
    pub fn name(self) -> &'static str {
        match self {
            PointerEvent::Enter => "mouse_enter",
            PointerEvent::Leave => "mouse_leave",
            PointerEvent::Down => "mouse_down",
            PointerEvent::Up => "mouse_up",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_distinct() {
        let mut names: Vec<_> = PointerEvent::ALL.iter().map(|e| e.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 4);
    }
}
