//! `import`: resolve and load a module through the host, then apply each
//! import specifier (spec.md §4.E/§4.F).

use crate::context::{EvalContext, ExecContext};
use crate::diagnostic::Diagnostic;
use crate::value::Value;
use snek_syntax::{ImportSpecifier, Position};

pub fn execute(
    module_path: &str,
    specifiers: &[ImportSpecifier],
    position: &Position,
    eval_ctx: &EvalContext<'_>,
    ctx: &mut ExecContext,
) {
    let importer_dir = position.file.parent();
    let module_scope = match eval_ctx.interpreter.import_module(module_path, importer_dir) {
        Ok(scope) => scope,
        Err(_) => {
            ctx.error = Some(Diagnostic::import(
                position.clone(),
                format!("Unable to import `{module_path}`"),
            ));
            return;
        }
    };

    for specifier in specifiers {
        match specifier {
            ImportSpecifier::Named { name, alias } => {
                let bind_name = alias.unwrap_or(*name);
                let exported_variable = module_scope
                    .iter_exports_variables()
                    .into_iter()
                    .find(|(n, _)| *n == *name)
                    .map(|(_, v)| v);
                let exported_type = module_scope
                    .iter_exports_types()
                    .into_iter()
                    .find(|(n, _)| *n == *name)
                    .map(|(_, t)| t);
                if let Some(value) = exported_variable {
                    if !eval_ctx.scope.bind_variable(bind_name, value, false) {
                        ctx.error = Some(Diagnostic::import(
                            position.clone(),
                            format!("Variable `{bind_name}` has already been defined"),
                        ));
                        return;
                    }
                } else if let Some(ty) = exported_type {
                    if !eval_ctx.scope.bind_type(bind_name, ty, false) {
                        ctx.error = Some(Diagnostic::import(
                            position.clone(),
                            format!("Type `{bind_name}` has already been defined"),
                        ));
                        return;
                    }
                } else {
                    ctx.error = Some(Diagnostic::import(
                        position.clone(),
                        format!("`{name}` is not exported by `{module_path}`"),
                    ));
                    return;
                }
            }
            ImportSpecifier::Star { alias } => {
                let exports = module_scope.iter_exports_variables();
                let record = Value::record(exports);
                if !eval_ctx.scope.bind_variable(*alias, record, false) {
                    ctx.error = Some(Diagnostic::import(
                        position.clone(),
                        format!("Variable `{alias}` has already been defined"),
                    ));
                    return;
                }
            }
        }
    }
}
