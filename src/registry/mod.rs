//! The process-wide type registry. Keys are `(name, version, family)`;
//! entries transition absent -> in-progress -> built and are never evicted.
//! Built descriptors live in a lock-free read-mostly map; an in-flight set
//! serializes concurrent first builds of the same key so construction is
//! at-most-once.
//!
//! Cycle safety: a builder resolves its field types to handles and never
//! dereferences them, so building `Extension` (whose fields include a list
//! of `Extension`) terminates: the recursive path defers through the
//! handle instead of re-entering the builder.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Condvar, Mutex, RwLock};

use papaya::HashMap as PapayaMap;

use crate::builder;
use crate::catalog::{DeclKind, ResourceDecl};
use crate::error::{Result, TypeGraphError};
use crate::scalar::ScalarTable;
use crate::types::{CompositeDescriptor, FhirVersion, SchemaFamily, TypeHandle, TypeKey};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct DeclKey {
    name: String,
    version: FhirVersion,
}

/// Registry of type declarations and lazily built descriptors.
pub struct TypeGraph {
    declarations: RwLock<HashMap<DeclKey, Arc<ResourceDecl>>>,
    built: PapayaMap<TypeKey, Arc<CompositeDescriptor>>,
    in_progress: Mutex<HashSet<TypeKey>>,
    build_done: Condvar,
    scalars: ScalarTable,
}

impl TypeGraph {
    pub fn new() -> Self {
        Self {
            declarations: RwLock::new(HashMap::new()),
            built: PapayaMap::new(),
            in_progress: Mutex::new(HashSet::new()),
            build_done: Condvar::new(),
            scalars: ScalarTable::new(),
        }
    }

    pub fn with_declarations(decls: impl IntoIterator<Item = ResourceDecl>) -> Result<Self> {
        let graph = Self::new();
        for decl in decls {
            graph.declare(decl)?;
        }
        Ok(graph)
    }

    /// Register one declaration. The declaration map is append-only; a second
    /// declaration under the same `(name, version)` is rejected.
    pub fn declare(&self, decl: ResourceDecl) -> Result<()> {
        let key = DeclKey {
            name: decl.name.clone(),
            version: decl.version,
        };
        let mut declarations = self.declarations.write().map_err(lock_poisoned)?;
        if declarations.contains_key(&key) {
            return Err(TypeGraphError::DuplicateDeclaration {
                name: decl.name,
                version: decl.version,
            });
        }
        tracing::debug!(name = %decl.name, version = %decl.version, "declared type");
        declarations.insert(key, Arc::new(decl));
        Ok(())
    }

    /// Non-blocking identity lookup. Never fails: an undeclared name still
    /// yields a handle, and the error surfaces on `materialize`.
    pub fn resolve(&self, name: &str, version: FhirVersion, family: SchemaFamily) -> TypeHandle {
        TypeHandle::new(name, version, canonical_family(name, family))
    }

    /// Like `resolve`, but fails when the name is not declared in the
    /// requested version. A name declared only under another version reports
    /// the more specific `CrossVersionReference`, which subsumes the plain
    /// `UnknownType` case; only a name declared in no version at all falls
    /// through to `UnknownType`. Used by the builder so both errors surface
    /// at build time.
    pub(crate) fn resolve_declared(
        &self,
        name: &str,
        version: FhirVersion,
        family: SchemaFamily,
    ) -> Result<TypeHandle> {
        let declarations = self.declarations.read().map_err(lock_poisoned)?;
        let key = DeclKey {
            name: name.to_string(),
            version,
        };
        if declarations.contains_key(&key) {
            return Ok(TypeHandle::new(name, version, canonical_family(name, family)));
        }
        for other in FhirVersion::ALL {
            if other == version {
                continue;
            }
            let other_key = DeclKey {
                name: name.to_string(),
                version: other,
            };
            if declarations.contains_key(&other_key) {
                return Err(TypeGraphError::CrossVersionReference {
                    name: name.to_string(),
                    version,
                    declared_in: other,
                });
            }
        }
        Err(TypeGraphError::UnknownType {
            name: name.to_string(),
            version,
            family,
        })
    }

    /// Dereference a handle, building the descriptor on first use. Building
    /// is at-most-once per key: a concurrent caller observing the in-progress
    /// marker waits for the single build instead of running its own.
    pub fn materialize(&self, handle: &TypeHandle) -> Result<Arc<CompositeDescriptor>> {
        let key = TypeKey::new(
            handle.name(),
            handle.version(),
            canonical_family(handle.name(), handle.family()),
        );

        if let Some(descriptor) = self.built.pin().get(&key) {
            return Ok(Arc::clone(descriptor));
        }

        // Claim the in-progress marker, or wait for whoever holds it.
        {
            let mut in_progress = self.in_progress.lock().map_err(lock_poisoned)?;
            loop {
                if let Some(descriptor) = self.built.pin().get(&key) {
                    return Ok(Arc::clone(descriptor));
                }
                if !in_progress.contains(&key) {
                    in_progress.insert(key.clone());
                    break;
                }
                in_progress = self.build_done.wait(in_progress).map_err(lock_poisoned)?;
            }
        }

        // Publish before releasing the marker so a waiter never observes the
        // key as absent and re-runs the builder.
        let outcome = match self.run_builder(&key) {
            Ok(descriptor) => {
                let descriptor = Arc::new(descriptor);
                self.built.pin().insert(key.clone(), Arc::clone(&descriptor));
                Ok(descriptor)
            }
            Err(err) => Err(err),
        };

        let mut in_progress = self.in_progress.lock().map_err(lock_poisoned)?;
        in_progress.remove(&key);
        self.build_done.notify_all();
        drop(in_progress);

        outcome
    }

    /// Resolve and materialize in one call.
    pub fn descriptor(
        &self,
        name: &str,
        version: FhirVersion,
        family: SchemaFamily,
    ) -> Result<Arc<CompositeDescriptor>> {
        self.materialize(&self.resolve(name, version, family))
    }

    /// Startup self-check: materialize every declared key once so that
    /// `UnknownType` and `CrossVersionReference` fail fast at build time
    /// rather than surfacing during request handling.
    pub fn verify_all(&self) -> Result<()> {
        let keys = self.declared_keys()?;
        for key in &keys {
            self.materialize(&TypeHandle::from(key.clone()))?;
        }
        tracing::info!(descriptors = keys.len(), "type graph verified");
        Ok(())
    }

    /// All materializable keys, sorted for deterministic iteration.
    /// Family-shared types contribute only their canonical Output key.
    pub fn declared_keys(&self) -> Result<Vec<TypeKey>> {
        let declarations = self.declarations.read().map_err(lock_poisoned)?;
        let mut keys = Vec::new();
        for decl_key in declarations.keys() {
            if builder::is_family_shared(&decl_key.name) {
                keys.push(TypeKey::new(
                    decl_key.name.clone(),
                    decl_key.version,
                    SchemaFamily::Output,
                ));
                continue;
            }
            for family in SchemaFamily::ALL {
                keys.push(TypeKey::new(decl_key.name.clone(), decl_key.version, family));
            }
        }
        keys.sort_by(|a, b| {
            (&a.name, a.version, a.family.as_str()).cmp(&(&b.name, b.version, b.family.as_str()))
        });
        Ok(keys)
    }

    /// Names declared as resources in one version, sorted. This is the closed
    /// world `contained` entries resolve against.
    pub fn resource_names(&self, version: FhirVersion) -> Result<Vec<String>> {
        let declarations = self.declarations.read().map_err(lock_poisoned)?;
        let mut names: Vec<String> = declarations
            .values()
            .filter(|d| d.version == version && d.kind == DeclKind::Resource)
            .map(|d| d.name.clone())
            .collect();
        names.sort();
        Ok(names)
    }

    pub fn is_resource(&self, name: &str, version: FhirVersion) -> bool {
        let Ok(declarations) = self.declarations.read() else {
            return false;
        };
        declarations
            .get(&DeclKey {
                name: name.to_string(),
                version,
            })
            .is_some_and(|d| d.kind == DeclKind::Resource)
    }

    pub fn declared_len(&self) -> usize {
        self.declarations.read().map(|d| d.len()).unwrap_or(0)
    }

    pub fn built_len(&self) -> usize {
        self.built.pin().len()
    }

    pub fn scalars(&self) -> &ScalarTable {
        &self.scalars
    }

    fn run_builder(&self, key: &TypeKey) -> Result<CompositeDescriptor> {
        let decl = {
            let declarations = self.declarations.read().map_err(lock_poisoned)?;
            let decl_key = DeclKey {
                name: key.name.clone(),
                version: key.version,
            };
            match declarations.get(&decl_key) {
                Some(decl) => Arc::clone(decl),
                None => {
                    // Distinguish a cross-version slip from a plain unknown.
                    drop(declarations);
                    return Err(self
                        .resolve_declared(&key.name, key.version, key.family)
                        .err()
                        .unwrap_or(TypeGraphError::UnknownType {
                            name: key.name.clone(),
                            version: key.version,
                            family: key.family,
                        }));
                }
            }
        };
        tracing::debug!(key = %key, "building descriptor");
        builder::build_descriptor(&decl, key.family, self)
    }
}

impl Default for TypeGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TypeGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeGraph")
            .field("declared", &self.declared_len())
            .field("built", &self.built_len())
            .finish()
    }
}

fn canonical_family(name: &str, family: SchemaFamily) -> SchemaFamily {
    if builder::is_family_shared(name) {
        SchemaFamily::Output
    } else {
        family
    }
}

fn lock_poisoned<T>(_: std::sync::PoisonError<T>) -> TypeGraphError {
    TypeGraphError::Concurrency {
        message: "registry lock poisoned".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FieldDecl, ResourceDecl};
    use crate::scalar::ScalarKind;

    fn graph_with_base() -> TypeGraph {
        let graph = TypeGraph::new();
        for decl in crate::catalog::base::declarations(FhirVersion::V4_0_0) {
            graph.declare(decl).unwrap();
        }
        graph
    }

    #[test]
    fn self_referential_extension_terminates() {
        let graph = graph_with_base();
        let handle = graph.resolve("Extension", FhirVersion::V4_0_0, SchemaFamily::Output);
        let descriptor = graph.materialize(&handle).unwrap();
        // Extension holds a list of Extension through a handle, not a value.
        let nested = descriptor.field("extension").unwrap();
        match &nested.field_type {
            crate::types::FieldType::Composite(h) => assert_eq!(h.name(), "Extension"),
            other => panic!("unexpected field type: {other:?}"),
        }
    }

    #[test]
    fn materialize_is_idempotent() {
        let graph = graph_with_base();
        let handle = graph.resolve("Coding", FhirVersion::V4_0_0, SchemaFamily::Output);
        let first = graph.materialize(&handle).unwrap();
        let second = graph.materialize(&handle).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn element_is_family_shared() {
        let graph = graph_with_base();
        let output = graph
            .descriptor("Element", FhirVersion::V4_0_0, SchemaFamily::Output)
            .unwrap();
        let input = graph
            .descriptor("Element", FhirVersion::V4_0_0, SchemaFamily::Input)
            .unwrap();
        assert!(Arc::ptr_eq(&output, &input));
    }

    #[test]
    fn unknown_type_reported() {
        let graph = graph_with_base();
        let err = graph
            .descriptor("Spaceship", FhirVersion::V4_0_0, SchemaFamily::Output)
            .unwrap_err();
        assert!(matches!(err, TypeGraphError::UnknownType { .. }));
    }

    #[test]
    fn cross_version_reference_reported() {
        let graph = graph_with_base();
        graph
            .declare(
                ResourceDecl::resource("OnlyInStu3", FhirVersion::V3_0_1)
                    .field(FieldDecl::scalar("status", ScalarKind::Code)),
            )
            .unwrap();
        let err = graph
            .descriptor("OnlyInStu3", FhirVersion::V4_0_0, SchemaFamily::Output)
            .unwrap_err();
        assert!(matches!(
            err,
            TypeGraphError::CrossVersionReference {
                declared_in: FhirVersion::V3_0_1,
                ..
            }
        ));
    }

    #[test]
    fn duplicate_declaration_rejected() {
        let graph = graph_with_base();
        let err = graph
            .declare(ResourceDecl::complex("Coding", FhirVersion::V4_0_0))
            .unwrap_err();
        assert!(matches!(err, TypeGraphError::DuplicateDeclaration { .. }));
    }

    #[test]
    fn concurrent_first_access_builds_once() {
        let graph = Arc::new(graph_with_base());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let graph = Arc::clone(&graph);
            handles.push(std::thread::spawn(move || {
                graph
                    .descriptor("CodeableConcept", FhirVersion::V4_0_0, SchemaFamily::Output)
                    .unwrap()
            }));
        }
        let descriptors: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for descriptor in &descriptors[1..] {
            assert!(Arc::ptr_eq(&descriptors[0], descriptor));
        }
    }
}
