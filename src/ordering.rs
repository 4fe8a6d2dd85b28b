//! Dependency ordering
//!
//! Depth-first topological sorts over the schema's type lists so that a
//! type referencing another is emitted after it and the generated output
//! carries no forward references. Simple types depend on their restriction
//! base; complex types on their extension base and on the named types their
//! content fields reference (inline anonymous types included).
//!
//! Cycles are non-fatal: the offending type is reported on the diagnostics
//! collector, the branch is truncated, and the emitted code may then
//! contain a forward reference. Anonymous types are never sorted — nothing
//! can depend on them by name — and stay in place.

use std::collections::HashSet;

use crate::diagnostics::{Diagnostics, Warning};
use crate::model::{Schema, XsdComplexType, XsdElement, XsdSimpleType};

#[derive(Default)]
struct VisitState {
    visiting: HashSet<String>,
    done: HashSet<String>,
}

/// Topologically order the schema's simple types by restriction base
pub fn order_simple_types(schema: &Schema, diagnostics: &mut Diagnostics) -> Vec<XsdSimpleType> {
    let mut state = VisitState::default();
    let mut ordered = Vec::new();

    for simple_type in &schema.simple_types {
        match &simple_type.name {
            None => ordered.push(simple_type.clone()),
            Some(name) => visit_simple(schema, name, &mut state, &mut ordered, diagnostics),
        }
    }

    ordered
}

fn visit_simple(
    schema: &Schema,
    name: &str,
    state: &mut VisitState,
    ordered: &mut Vec<XsdSimpleType>,
    diagnostics: &mut Diagnostics,
) {
    if state.done.contains(name) {
        return;
    }
    if state.visiting.contains(name) {
        diagnostics.warn(Warning::CircularReference {
            type_name: name.to_string(),
        });
        return;
    }
    let Some(simple_type) = schema.find_simple_type(name) else {
        return;
    };

    state.visiting.insert(name.to_string());

    let base = &simple_type.restriction.base;
    if !base.is_empty() && schema.find_simple_type(base).is_some() {
        visit_simple(schema, base, state, ordered, diagnostics);
    }

    state.visiting.remove(name);
    state.done.insert(name.to_string());
    ordered.push(simple_type.clone());
}

/// Topologically order the schema's complex types by field and extension
/// references
pub fn order_complex_types(schema: &Schema, diagnostics: &mut Diagnostics) -> Vec<XsdComplexType> {
    let mut state = VisitState::default();
    let mut ordered = Vec::new();

    for complex_type in &schema.complex_types {
        match &complex_type.name {
            None => ordered.push(complex_type.clone()),
            Some(name) => visit_complex(schema, name, &mut state, &mut ordered, diagnostics),
        }
    }

    ordered
}

fn visit_complex(
    schema: &Schema,
    name: &str,
    state: &mut VisitState,
    ordered: &mut Vec<XsdComplexType>,
    diagnostics: &mut Diagnostics,
) {
    if state.done.contains(name) {
        return;
    }
    if state.visiting.contains(name) {
        diagnostics.warn(Warning::CircularReference {
            type_name: name.to_string(),
        });
        return;
    }
    let Some(complex_type) = schema.find_complex_type(name) else {
        return;
    };

    state.visiting.insert(name.to_string());

    for dep in complex_dependencies(complex_type, schema) {
        visit_complex(schema, &dep, state, ordered, diagnostics);
    }

    state.visiting.remove(name);
    state.done.insert(name.to_string());
    ordered.push(complex_type.clone());
}

/// Named complex types this type references, in encounter order without
/// duplicates
fn complex_dependencies(complex_type: &XsdComplexType, schema: &Schema) -> Vec<String> {
    let mut deps = Vec::new();
    collect_complex_dependencies(complex_type, schema, &mut deps);
    deps
}

fn collect_complex_dependencies(
    complex_type: &XsdComplexType,
    schema: &Schema,
    deps: &mut Vec<String>,
) {
    let mut push = |name: &str, deps: &mut Vec<String>| {
        if schema.find_complex_type(name).is_some() && !deps.iter().any(|d| d == name) {
            deps.push(name.to_string());
        }
    };

    if let Some(extension) = &complex_type.extension {
        push(&extension.base, deps);
    }

    for element in &complex_type.content {
        collect_element_dependencies(element, schema, deps, &mut push);
    }
}

fn collect_element_dependencies(
    element: &XsdElement,
    schema: &Schema,
    deps: &mut Vec<String>,
    push: &mut impl FnMut(&str, &mut Vec<String>),
) {
    if let Some(type_name) = &element.type_name {
        push(type_name, deps);
    }
    if let Some(inline) = &element.complex_type {
        if let Some(extension) = &inline.extension {
            push(&extension.base, deps);
        }
        for nested in &inline.content {
            collect_element_dependencies(nested, schema, deps, push);
        }
    }
}

impl Schema {
    /// A copy of this schema with both type lists topologically ordered.
    ///
    /// The parser never sorts; this is the separate pass the emitter stage
    /// applies.
    pub fn sorted(&self, diagnostics: &mut Diagnostics) -> Schema {
        Schema {
            simple_types: order_simple_types(self, diagnostics),
            complex_types: order_complex_types(self, diagnostics),
            ..self.clone()
        }
    }
}
