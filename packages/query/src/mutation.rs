use crate::QueryKey;

/// Declaration of a state-changing write.
///
/// `invalidates` lists resource names; on success every cached key of those
/// resources becomes stale, whatever its parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MutationSpec {
    pub name: &'static str,
    pub invalidates: &'static [&'static str],
}

impl MutationSpec {
    pub const fn new(name: &'static str, invalidates: &'static [&'static str]) -> Self {
        Self { name, invalidates }
    }

    pub fn affects(&self, key: &QueryKey) -> bool {
        key.belongs_to(self.invalidates)
    }
}
