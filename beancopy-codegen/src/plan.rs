//! Per-field conversion strategy selection.

use std::fmt;

use beancopy_schema::{DeclaredType, FieldDescriptor, TypeDescriptor, TypeRegistry};
use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    AccessorNotFound, BuiltinTypes, DiagnosticSink, EnumCheck, GenerateError, TypePair,
    accessor::{resolve_getter, resolve_setter},
    diagnostic::{Diagnostic, Phase},
};

/// Conversion kinds, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    Skip,
    List,
    ListRecursive,
    ListEnum,
    Direct,
    Enum,
    Recursive,
    Unresolved,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Skip => "skip",
            Self::List => "list",
            Self::ListRecursive => "list-recursive",
            Self::ListEnum => "list-enum",
            Self::Direct => "direct",
            Self::Enum => "enum",
            Self::Recursive => "recursive",
            Self::Unresolved => "unresolved",
        };
        f.write_str(name)
    }
}

/// How one source field is carried over, with resolved accessor names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "strategy", rename_all = "kebab-case")]
pub enum FieldPlan {
    /// No destination field with the same name
    Skip { field: String },
    /// An accessor is missing; nothing is copied
    Unresolved { field: String, reason: String },
    /// `r.setX(a.getX())`
    Direct {
        field: String,
        getter: String,
        setter: String,
    },
    /// `r.getX().addAll(a.getX())`
    List {
        field: String,
        getter: String,
        target_getter: String,
    },
    /// Element-wise `transform` into the destination list
    ListRecursive {
        field: String,
        getter: String,
        target_getter: String,
        element: TypePair,
    },
    /// Element-wise `valueOf(name())` into the destination list
    ListEnum {
        field: String,
        getter: String,
        target_getter: String,
        /// Source element type
        element: String,
        /// Destination enum
        target: String,
    },
    /// Null-guarded `valueOf(name())`
    Enum {
        field: String,
        getter: String,
        setter: String,
        target: String,
    },
    /// `r.setX(transform(a.getX()))`
    Recursive {
        field: String,
        getter: String,
        setter: String,
        pair: TypePair,
    },
}

impl FieldPlan {
    pub fn field(&self) -> &str {
        match self {
            Self::Skip { field }
            | Self::Unresolved { field, .. }
            | Self::Direct { field, .. }
            | Self::List { field, .. }
            | Self::ListRecursive { field, .. }
            | Self::ListEnum { field, .. }
            | Self::Enum { field, .. }
            | Self::Recursive { field, .. } => field,
        }
    }

    pub fn strategy(&self) -> Strategy {
        match self {
            Self::Skip { .. } => Strategy::Skip,
            Self::Unresolved { .. } => Strategy::Unresolved,
            Self::Direct { .. } => Strategy::Direct,
            Self::List { .. } => Strategy::List,
            Self::ListRecursive { .. } => Strategy::ListRecursive,
            Self::ListEnum { .. } => Strategy::ListEnum,
            Self::Enum { .. } => Strategy::Enum,
            Self::Recursive { .. } => Strategy::Recursive,
        }
    }

    /// The nested pair this field needs a routine for, if any.
    pub fn implied_pair(&self) -> Option<&TypePair> {
        match self {
            Self::ListRecursive { element, .. } => Some(element),
            Self::Recursive { pair, .. } => Some(pair),
            _ => None,
        }
    }
}

/// Chooses a [`FieldPlan`] for each source field.
pub struct FieldPlanner<'a, R: TypeRegistry + ?Sized> {
    registry: &'a R,
    builtins: &'a BuiltinTypes,
    enum_check: EnumCheck,
}

impl<'a, R: TypeRegistry + ?Sized> FieldPlanner<'a, R> {
    pub fn new(registry: &'a R, builtins: &'a BuiltinTypes, enum_check: EnumCheck) -> Self {
        Self {
            registry,
            builtins,
            enum_check,
        }
    }

    /// Plan `src_field` of `src_owner` against the same-named field of `dst_owner`.
    ///
    /// Missing fields and accessors are reported to `sink` and planned as
    /// [`FieldPlan::Skip`] / [`FieldPlan::Unresolved`]; structural problems
    /// and unknown model types are returned as errors.
    pub fn plan_field(
        &self,
        src_owner: &TypeDescriptor,
        src_field: &FieldDescriptor,
        dst_owner: &TypeDescriptor,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<FieldPlan, GenerateError> {
        let name = src_field.name().to_string();
        let location = format!("{}::{}", src_owner.qualified_name(), name);

        let Some(dst_field) = dst_owner.field(&name) else {
            warn!(class = src_owner.qualified_name(), field = %name, "destination field not found");
            sink.report(
                Diagnostic::error(
                    Phase::Plan,
                    format!(
                        "Field not found. Class: {}, field: {}",
                        src_owner.qualified_name(),
                        name
                    ),
                )
                .at(&location),
            );
            return Ok(FieldPlan::Skip { field: name });
        };

        let (src_ty, dst_ty) = (src_field.ty(), dst_field.ty());

        let plan = if src_ty.is_list() && dst_ty.is_list() {
            let src_elem = list_element(src_owner, src_field)?;
            let dst_elem = list_element(dst_owner, dst_field)?;
            let accessors = both(
                resolve_getter(src_owner, src_field),
                resolve_getter(dst_owner, dst_field),
            );
            if self.builtins.is_builtin(dst_elem) || src_elem == dst_elem {
                accessors.map(|(getter, target_getter)| FieldPlan::List {
                    field: name.clone(),
                    getter,
                    target_getter,
                })
            } else {
                reject_array(src_owner, src_field, src_elem)?;
                reject_array(dst_owner, dst_field, dst_elem)?;
                let target = self.registry.resolve_type(dst_elem.raw())?;
                if target.is_enum() {
                    self.check_enum(src_elem, target, &location, sink)?;
                    accessors.map(|(getter, target_getter)| FieldPlan::ListEnum {
                        field: name.clone(),
                        getter,
                        target_getter,
                        element: src_elem.raw().to_string(),
                        target: target.qualified_name().to_string(),
                    })
                } else {
                    accessors.map(|(getter, target_getter)| FieldPlan::ListRecursive {
                        field: name.clone(),
                        getter,
                        target_getter,
                        element: TypePair::new(src_elem.raw(), dst_elem.raw()),
                    })
                }
            }
        } else if self.builtins.is_builtin(dst_ty) {
            both(
                resolve_getter(src_owner, src_field),
                resolve_setter(dst_owner, dst_field),
            )
            .map(|(getter, setter)| FieldPlan::Direct {
                field: name.clone(),
                getter,
                setter,
            })
        } else {
            reject_array(src_owner, src_field, src_ty)?;
            reject_array(dst_owner, dst_field, dst_ty)?;
            let target = self.registry.resolve_type(dst_ty.raw())?;
            let accessors = both(
                resolve_getter(src_owner, src_field),
                resolve_setter(dst_owner, dst_field),
            );
            if target.is_enum() {
                self.check_enum(src_ty, target, &location, sink)?;
                accessors.map(|(getter, setter)| FieldPlan::Enum {
                    field: name.clone(),
                    getter,
                    setter,
                    target: target.qualified_name().to_string(),
                })
            } else {
                accessors.map(|(getter, setter)| FieldPlan::Recursive {
                    field: name.clone(),
                    getter,
                    setter,
                    pair: TypePair::new(src_ty.raw(), dst_ty.raw()),
                })
            }
        };

        let plan = match plan {
            Ok(plan) => plan,
            Err(err) => {
                warn!(field = %location, "{}", err);
                sink.report(Diagnostic::error(Phase::Plan, err.to_string()).at(&location));
                FieldPlan::Unresolved {
                    field: name,
                    reason: err.to_string(),
                }
            }
        };
        debug!(field = %location, strategy = %plan.strategy(), "planned field");
        Ok(plan)
    }

    fn check_enum(
        &self,
        src_ty: &DeclaredType,
        target: &TypeDescriptor,
        location: &str,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<(), GenerateError> {
        if self.enum_check == EnumCheck::Lazy {
            return Ok(());
        }
        let Ok(source) = self.registry.resolve_type(src_ty.raw()) else {
            return Ok(());
        };
        if !source.is_enum() {
            return Ok(());
        }

        let missing: Vec<String> = source
            .constants()
            .iter()
            .filter(|c| !target.has_constant(c))
            .cloned()
            .collect();
        if missing.is_empty() {
            return Ok(());
        }

        let err = GenerateError::EnumMismatch {
            from: source.qualified_name().to_string(),
            to: target.qualified_name().to_string(),
            missing,
        };
        match self.enum_check {
            EnumCheck::Strict => Err(err),
            _ => {
                warn!(field = %location, "{}", err);
                sink.report(Diagnostic::warning(Phase::Plan, err.to_string()).at(location));
                Ok(())
            }
        }
    }
}

/// Both accessors, or the first one missing.
fn both(
    read: Result<String, AccessorNotFound>,
    write: Result<String, AccessorNotFound>,
) -> Result<(String, String), AccessorNotFound> {
    Ok((read?, write?))
}

/// Model types are converted one object at a time; arrays of them are not.
fn reject_array(
    owner: &TypeDescriptor,
    field: &FieldDescriptor,
    ty: &DeclaredType,
) -> Result<(), GenerateError> {
    if ty.is_array() {
        return Err(GenerateError::UnsupportedArray {
            owner: owner.qualified_name().to_string(),
            field: field.name().to_string(),
            declared: field.ty().to_string(),
        });
    }
    Ok(())
}

/// The single type argument of a `java.util.List` field.
fn list_element<'t>(
    owner: &TypeDescriptor,
    field: &'t FieldDescriptor,
) -> Result<&'t DeclaredType, GenerateError> {
    let [element] = field.ty().args() else {
        return Err(GenerateError::MalformedList {
            owner: owner.qualified_name().to_string(),
            field: field.name().to_string(),
            declared: field.ty().to_string(),
        });
    };
    if element.is_parameterized() {
        return Err(GenerateError::UnsupportedElement {
            owner: owner.qualified_name().to_string(),
            field: field.name().to_string(),
            element: element.to_string(),
        });
    }
    Ok(element)
}
