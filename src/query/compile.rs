//! Path to query-text compilation
//!
//! Pure serialization of a [`Path`] into canonical Gizmo text. The
//! element sequence is split into global calls (rendered standalone) and
//! chain steps (rendered as a method chain off the `graph` root); the
//! two groups are joined with `;`. Compilation never mutates the path
//! and the same path always yields byte-identical output.

use crate::error::{Error, Result};
use crate::query::path::{Arg, Call, Path, PathElement, Step};

/// Receiver token every chain expression is rooted at.
const GRAPH_EXPRESSION: &str = "graph";

/// Compile a path into its canonical query text.
pub fn compile(path: &Path) -> Result<String> {
    let mut segments = Vec::new();

    for element in path.elements() {
        if let PathElement::Call(call) = element {
            segments.push(render_call(call)?);
        }
    }

    let steps: Vec<&Step> = path
        .elements()
        .iter()
        .filter_map(|element| match element {
            PathElement::Step(step) => Some(step),
            PathElement::Call(_) => None,
        })
        .collect();

    // A calls-only path omits the chain expression entirely rather than
    // emitting a bare root token.
    if !steps.is_empty() {
        segments.push(render_chain(&steps)?);
    }

    Ok(segments.join(";"))
}

/// Render a chain-step group as a left fold off the root token.
fn render_chain(steps: &[&Step]) -> Result<String> {
    let mut expression = String::from(GRAPH_EXPRESSION);
    for step in steps {
        expression.push('.');
        expression.push_str(&render_invocation(&step.name, &step.args)?);
    }
    Ok(expression)
}

fn render_call(call: &Call) -> Result<String> {
    render_invocation(&call.function, &call.args)
}

/// `name(arg1,arg2,…)`, shared by global calls and chain steps.
fn render_invocation(name: &str, args: &[Arg]) -> Result<String> {
    let mut rendered = Vec::with_capacity(args.len());
    for (index, arg) in args.iter().enumerate() {
        rendered.push(render_arg(arg, name, index + 1)?);
    }
    Ok(format!("{}({})", name, rendered.join(",")))
}

/// Render a single argument. `step` and `position` (1-based) identify the
/// enclosing invocation for error reporting; list elements keep their
/// top-level position.
fn render_arg(arg: &Arg, step: &str, position: usize) -> Result<String> {
    match arg {
        Arg::String(value) => {
            serde_json::to_string(value).map_err(|e| Error::SerializationError(e.to_string()))
        }
        Arg::Int(value) => Ok(value.to_string()),
        Arg::Float(value) => {
            if value.is_finite() {
                Ok(value.to_string())
            } else {
                Err(Error::CompileError {
                    step: step.to_string(),
                    position,
                    reason: format!("浮点数 {} 没有对应的查询字面量", value),
                })
            }
        }
        Arg::Bool(value) => Ok(value.to_string()),
        Arg::Call(call) => render_call(call),
        // Nested paths compile relative to the same graph root; global
        // calls nested inside them are dropped.
        Arg::Path(path) => {
            let steps: Vec<&Step> = path
                .elements()
                .iter()
                .filter_map(|element| match element {
                    PathElement::Step(step) => Some(step),
                    PathElement::Call(_) => None,
                })
                .collect();
            render_chain(&steps)
        }
        Arg::List(items) => {
            let mut rendered = Vec::with_capacity(items.len());
            for item in items {
                rendered.push(render_arg(item, step, position)?);
            }
            Ok(rendered.join(","))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
