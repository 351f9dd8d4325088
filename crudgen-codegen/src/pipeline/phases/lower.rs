//! Lower phase - transforms the schema to Application IR.

use crudgen_core::{SqliteTypeMapper, TypeMapper};
use crudgen_schema::{Model, Schema};

use crate::{
    Result,
    ir::{AppIR, AppMeta, Column, Handler, Table},
    pipeline::{CompilationContext, Diagnostic, Phase},
};

/// Phase that transforms the schema into Application IR.
pub struct LowerPhase;

impl Phase for LowerPhase {
    fn name(&self) -> &'static str {
        "lower"
    }

    fn description(&self) -> &'static str {
        "Transform Schema to Application IR"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        ctx.ir = Some(lower_schema(&ctx.schema, &SqliteTypeMapper));

        for model in &ctx.schema.models {
            if !ctx.schema.routes.iter().any(|r| r.model == model.name) {
                let message = format!(
                    "model '{}' has no route, only its table is generated",
                    model.name
                );
                ctx.diagnostics.push(
                    Diagnostic::info(self.name(), message).at(format!("models.{}", model.name)),
                );
            }
        }

        Ok(())
    }
}

/// Lower a validated schema into an Application IR.
pub(crate) fn lower_schema(schema: &Schema, mapper: &dyn TypeMapper) -> AppIR {
    AppIR {
        meta: AppMeta {
            name: schema.app_name.clone(),
        },
        tables: schema
            .models
            .iter()
            .map(|model| lower_model(model, mapper))
            .collect(),
        handlers: schema
            .routes
            .iter()
            .flat_map(|route| {
                route
                    .handler_methods()
                    .into_iter()
                    .map(|method| Handler::new(route.model.clone(), method))
            })
            .collect(),
    }
}

fn lower_model(model: &Model, mapper: &dyn TypeMapper) -> Table {
    Table {
        name: model.name.clone(),
        columns: model
            .fields
            .iter()
            .map(|(name, ty)| Column {
                name: name.clone(),
                ty: mapper.map_field_type(ty),
            })
            .collect(),
    }
}
