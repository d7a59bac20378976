//! Identifier remapping for one copy operation.

use std::collections::HashMap;

use uuid::Uuid;

use crate::server::error::copy::CopyError;

/// Bijective source-to-target id translation table.
///
/// Built incrementally while a copy runs: the phase duplicator registers a
/// fresh target id per source phase, the descriptor collector registers every
/// referenced DTO descriptor as an identity pair (descriptors belong to phase
/// types, which are shared between source and target). Graph duplication then
/// resolves every edge endpoint through this map; a miss is fatal to the copy.
///
/// An `IdMap` is built fresh per copy operation and never reused.
pub struct IdMap {
    phases: HashMap<Uuid, Uuid>,
    dtos: HashMap<Uuid, Uuid>,
}

impl IdMap {
    pub fn new() -> Self {
        Self {
            phases: HashMap::new(),
            dtos: HashMap::new(),
        }
    }

    /// Mints a fresh target id for a source phase and stores the pair.
    ///
    /// Registering the same source id again returns the already-minted target
    /// id, keeping the mapping bijective.
    pub fn register_phase(&mut self, source_id: Uuid) -> Uuid {
        *self.phases.entry(source_id).or_insert_with(Uuid::new_v4)
    }

    /// Registers a DTO descriptor id as mapping to itself.
    ///
    /// The target phase type advertises the same descriptor rows as the
    /// source phase type, so descriptor ids survive the copy unchanged.
    pub fn register_dto_identity(&mut self, dto_id: Uuid) {
        self.dtos.insert(dto_id, dto_id);
    }

    /// Resolves a source phase id to its target id.
    pub fn resolve_phase(&self, source_id: Uuid) -> Result<Uuid, CopyError> {
        self.phases
            .get(&source_id)
            .copied()
            .ok_or(CopyError::MissingMapping {
                kind: "course phase",
                id: source_id,
            })
    }

    /// Resolves a DTO descriptor id.
    pub fn resolve_dto(&self, dto_id: Uuid) -> Result<Uuid, CopyError> {
        self.dtos
            .get(&dto_id)
            .copied()
            .ok_or(CopyError::MissingMapping {
                kind: "dto descriptor",
                id: dto_id,
            })
    }

    /// All registered source phase ids.
    pub fn source_phase_ids(&self) -> Vec<Uuid> {
        self.phases.keys().copied().collect()
    }

    /// All minted target phase ids.
    pub fn target_phase_ids(&self) -> Vec<Uuid> {
        self.phases.values().copied().collect()
    }
}

impl Default for IdMap {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Every registered phase resolves to exactly one fresh target id, and no
    /// two source ids share a target id.
    #[test]
    fn phase_mapping_is_bijective() {
        let mut map = IdMap::new();

        let sources: Vec<Uuid> = (0..10).map(|_| Uuid::new_v4()).collect();
        let targets: Vec<Uuid> = sources.iter().map(|s| map.register_phase(*s)).collect();

        for (source, target) in sources.iter().zip(&targets) {
            assert_eq!(map.resolve_phase(*source).unwrap(), *target);
            assert_ne!(source, target);
        }

        let distinct: HashSet<Uuid> = targets.iter().copied().collect();
        assert_eq!(distinct.len(), targets.len());
    }

    #[test]
    fn re_registering_a_phase_returns_the_same_target() {
        let mut map = IdMap::new();

        let source = Uuid::new_v4();
        let first = map.register_phase(source);
        let second = map.register_phase(source);

        assert_eq!(first, second);
    }

    #[test]
    fn dto_ids_map_to_themselves() {
        let mut map = IdMap::new();

        let dto = Uuid::new_v4();
        map.register_dto_identity(dto);

        assert_eq!(map.resolve_dto(dto).unwrap(), dto);
    }

    #[test]
    fn unregistered_phase_is_a_missing_mapping() {
        let map = IdMap::new();

        let unknown = Uuid::new_v4();
        let err = map.resolve_phase(unknown).unwrap_err();

        match err {
            CopyError::MissingMapping { kind, id } => {
                assert_eq!(kind, "course phase");
                assert_eq!(id, unknown);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unregistered_dto_is_a_missing_mapping() {
        let map = IdMap::new();

        assert!(matches!(
            map.resolve_dto(Uuid::new_v4()),
            Err(CopyError::MissingMapping {
                kind: "dto descriptor",
                ..
            })
        ));
    }
}
