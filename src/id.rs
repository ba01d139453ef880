use std::fmt::{Display, Formatter};
use std::ops::Deref;

use gpui::{ElementId, SharedString};

/// Identity of a component instance.
///
/// Widgets keep their cross-render state in the control store under this id,
/// so two fields built at the same callsite need explicit ids (`with_id`).
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ComponentId(SharedString);

impl ComponentId {
    #[track_caller]
    pub fn auto(prefix: &str) -> Self {
        Self(stable_auto_id(prefix).into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_ref()
    }

    /// Element id of a named sub-element of this component.
    pub fn slot(&self, name: &str) -> ElementId {
        ElementId::Name(self.slot_key(name).into())
    }

    pub fn slot_key(&self, name: &str) -> String {
        format!("{}::{name}", self.0)
    }
}

impl Default for ComponentId {
    #[track_caller]
    fn default() -> Self {
        Self::auto("component")
    }
}

impl Deref for ComponentId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl Display for ComponentId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ComponentId {
    fn from(value: &str) -> Self {
        Self(SharedString::from(value.to_string()))
    }
}

impl From<String> for ComponentId {
    fn from(value: String) -> Self {
        Self(value.into())
    }
}

impl From<SharedString> for ComponentId {
    fn from(value: SharedString) -> Self {
        Self(value)
    }
}

impl From<ComponentId> for ElementId {
    fn from(value: ComponentId) -> Self {
        ElementId::Name(value.0)
    }
}

impl From<&ComponentId> for ElementId {
    fn from(value: &ComponentId) -> Self {
        ElementId::Name(value.0.clone())
    }
}

#[track_caller]
pub fn stable_auto_id(prefix: &str) -> String {
    let location = std::panic::Location::caller();
    let seed = format!(
        "{prefix}:{}:{}:{}",
        location.file(),
        location.line(),
        location.column()
    );
    format!("{prefix}-{:016x}", fnv1a64(seed.as_bytes()))
}

fn fnv1a64(bytes: &[u8]) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x00000100000001b3;

    let mut hash = OFFSET_BASIS;
    for byte in bytes {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[track_caller]
    fn call_once() -> ComponentId {
        ComponentId::auto("text-field")
    }

    #[test]
    fn auto_id_is_stable_for_same_callsite() {
        let ids = (0..3).map(|_| call_once()).collect::<Vec<_>>();
        assert!(ids.windows(2).all(|pair| pair[0] == pair[1]));
        assert!(ids[0].starts_with("text-field-"));
    }

    #[test]
    fn auto_id_differs_for_different_callsites() {
        let first = call_once();
        let second = ComponentId::auto("text-field");
        assert_ne!(first, second);
    }

    #[test]
    fn slot_keys_are_namespaced_by_owner() {
        let id = ComponentId::from("email");
        assert_eq!(id.slot_key("label"), "email::label");
        assert_eq!(id.to_string(), "email");
    }
}
