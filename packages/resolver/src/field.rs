//! Tri-state fields and the one precedence helper every block resolver
//! uses.

/// The three states a logical field can be in at one level of the
/// precedence chain.
///
/// `Empty` is not `Absent`: an explicitly empty collection renders as
/// empty, while an absent one falls through to the next level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldState<T> {
    Absent,
    Empty,
    Set(T),
}

impl<T> FieldState<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldState::Absent)
    }
}

impl FieldState<String> {
    /// Scalar text: blank counts as absent, so it can never mask domain
    /// data or default copy.
    pub fn from_text(value: Option<&str>) -> Self {
        match value {
            Some(s) if !s.trim().is_empty() => FieldState::Set(s.to_string()),
            _ => FieldState::Absent,
        }
    }
}

impl<T> FieldState<Vec<T>> {
    /// Collection tri-state: `None` is absent, `Some([])` is explicitly
    /// empty.
    pub fn from_vec(value: Option<Vec<T>>) -> Self {
        match value {
            None => FieldState::Absent,
            Some(v) if v.is_empty() => FieldState::Empty,
            Some(v) => FieldState::Set(v),
        }
    }
}

/// Resolve one logical field through the settings → domain → default
/// chain.
///
/// With `allow_explicit_empty`, an `Empty` state short-circuits to
/// `T::default()` (an empty collection); without it, `Empty` is treated
/// as absent and falls through. Scalars pass `false`, collections `true`.
pub fn resolve_field<T: Default>(
    setting: FieldState<T>,
    domain: FieldState<T>,
    default: impl FnOnce() -> T,
    allow_explicit_empty: bool,
) -> T {
    for state in [setting, domain] {
        match state {
            FieldState::Set(value) => return value,
            FieldState::Empty if allow_explicit_empty => return T::default(),
            _ => {}
        }
    }
    default()
}
