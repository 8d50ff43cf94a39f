//! Pair-graph traversal driving planning and emission.

use beancopy_schema::TypeRegistry;
use tracing::{debug, info};

use crate::{
    BuiltinTypes, DiagnosticSink, EmissionSession, FieldPlanner, GenerateError, GeneratedUnit,
    GeneratorConfig, Routine, RoutineEmitter, TypePair, diagnostic::Phase,
};

/// Generates a transformer class for a pair of root types.
///
/// ```ignore
/// let registry = SchemaRegistry::from_files(["v1.toml", "v2.toml"])?;
/// let unit = Generator::new(&registry, GeneratorConfig::default())
///     .generate("com.acme.v1.Order", "com.acme.v2.Order")?;
/// std::fs::write("JaxbTransformer.java", unit.render())?;
/// ```
pub struct Generator<'r, R: TypeRegistry + ?Sized> {
    registry: &'r R,
    config: GeneratorConfig,
    builtins: BuiltinTypes,
}

impl<'r, R: TypeRegistry + ?Sized> Generator<'r, R> {
    pub fn new(registry: &'r R, config: GeneratorConfig) -> Self {
        let builtins = config.builtin_types();
        Self {
            registry,
            config,
            builtins,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Walk every pair reachable from `(source, destination)` and emit one
    /// routine per pair.
    ///
    /// Fails on the first structural problem or unresolvable model type;
    /// field-level problems end up in [`GeneratedUnit::diagnostics`].
    pub fn generate(&self, source: &str, destination: &str) -> Result<GeneratedUnit, GenerateError> {
        self.registry.resolve_type(source)?;
        self.registry.resolve_type(destination)?;

        let planner = FieldPlanner::new(self.registry, &self.builtins, self.config.enum_check);
        let emitter = RoutineEmitter::new(self.config.indent());
        let mut session =
            EmissionSession::new(TypePair::new(source, destination), self.config.order);

        while let Some(pair) = session.next_pair() {
            let src = self.registry.resolve_type(&pair.source)?;
            let dst = self.registry.resolve_type(&pair.destination)?;
            if !dst.has_default_constructor() {
                return Err(GenerateError::NoDefaultConstructor {
                    name: dst.qualified_name().to_string(),
                });
            }

            info!(source = %pair.source, destination = %pair.destination, "generating routine");
            session
                .diagnostics_mut()
                .info(Phase::Traverse, &format!("transform {}", pair));
            session.claim_overload(&pair);

            let mut fields = Vec::with_capacity(src.fields().len());
            for field in src.fields() {
                let plan = planner.plan_field(src, field, dst, session.diagnostics_mut())?;
                if let Some(implied) = plan.implied_pair() {
                    if session.enqueue(implied) {
                        debug!(pair = %implied, "discovered pair");
                    }
                }
                fields.push(plan);
            }

            let text = emitter.render(session.symbols_mut(), &pair, &fields);
            session.push_routine(Routine { pair, fields, text });
        }

        info!(routines = session.routines().len(), "generation finished");
        Ok(session.finish(&self.config))
    }
}
