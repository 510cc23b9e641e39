//! Prints a [`Document`] back to GraphQL source text.
//!
//! Output follows the reference printer: two-space indentation, one
//! selection per line and a blank line between definitions.

use std::fmt::Write;

use super::ast::*;

/// Renders a document as canonical GraphQL text.
pub fn print(document: &Document) -> String {
    let mut out = String::new();
    for (i, definition) in document.definitions.iter().enumerate() {
        if i > 0 {
            out.push_str("\n\n");
        }
        match definition {
            Definition::Operation(op) => print_operation(&mut out, op),
            Definition::Fragment(fragment) => print_fragment(&mut out, fragment),
        }
    }
    out
}

fn print_operation(out: &mut String, op: &OperationDefinition) {
    let is_shorthand = op.operation == OperationType::Query
        && op.name.is_none()
        && op.variable_definitions.is_empty()
        && op.directives.is_empty();
    if is_shorthand {
        print_selection_set(out, &op.selection_set, 0);
        return;
    }

    out.push_str(op.operation.as_str());
    if let Some(name) = &op.name {
        out.push(' ');
        out.push_str(&name.value);
    }
    if !op.variable_definitions.is_empty() {
        if op.name.is_none() {
            out.push(' ');
        }
        out.push('(');
        for (i, var) in op.variable_definitions.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            print_variable_definition(out, var);
        }
        out.push(')');
    }
    print_directives(out, &op.directives);
    out.push(' ');
    print_selection_set(out, &op.selection_set, 0);
}

fn print_fragment(out: &mut String, fragment: &FragmentDefinition) {
    let _ = write!(
        out,
        "fragment {} on {}",
        fragment.name.value, fragment.type_condition.name.value
    );
    print_directives(out, &fragment.directives);
    out.push(' ');
    print_selection_set(out, &fragment.selection_set, 0);
}

fn print_variable_definition(out: &mut String, var: &VariableDefinition) {
    let _ = write!(out, "${}: ", var.variable.name.value);
    print_type(out, &var.ty);
    if let Some(default) = &var.default_value {
        out.push_str(" = ");
        print_value(out, default);
    }
    print_directives(out, &var.directives);
}

fn print_selection_set(out: &mut String, set: &SelectionSet, indent: usize) {
    out.push('{');
    for selection in &set.selections {
        out.push('\n');
        push_indent(out, indent + 1);
        print_selection(out, selection, indent + 1);
    }
    out.push('\n');
    push_indent(out, indent);
    out.push('}');
}

fn print_selection(out: &mut String, selection: &Selection, indent: usize) {
    match selection {
        Selection::Field(field) => {
            if let Some(alias) = &field.alias {
                let _ = write!(out, "{}: ", alias.value);
            }
            out.push_str(&field.name.value);
            print_arguments(out, &field.arguments);
            print_directives(out, &field.directives);
            if let Some(set) = &field.selection_set {
                out.push(' ');
                print_selection_set(out, set, indent);
            }
        }
        Selection::FragmentSpread(spread) => {
            let _ = write!(out, "...{}", spread.name.value);
            print_directives(out, &spread.directives);
        }
        Selection::InlineFragment(inline) => {
            out.push_str("...");
            if let Some(ty) = &inline.type_condition {
                let _ = write!(out, " on {}", ty.name.value);
            }
            print_directives(out, &inline.directives);
            out.push(' ');
            print_selection_set(out, &inline.selection_set, indent);
        }
    }
}

fn print_arguments(out: &mut String, arguments: &[Argument]) {
    if arguments.is_empty() {
        return;
    }
    out.push('(');
    for (i, arg) in arguments.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{}: ", arg.name.value);
        print_value(out, &arg.value);
    }
    out.push(')');
}

fn print_directives(out: &mut String, directives: &[Directive]) {
    for directive in directives {
        let _ = write!(out, " @{}", directive.name.value);
        print_arguments(out, &directive.arguments);
    }
}

fn print_type(out: &mut String, ty: &Type) {
    match ty {
        Type::Named { name } => out.push_str(&name.value),
        Type::List { ty } => {
            out.push('[');
            print_type(out, ty);
            out.push(']');
        }
        Type::NonNull { ty } => {
            print_type(out, ty);
            out.push('!');
        }
    }
}

fn print_value(out: &mut String, value: &Value) {
    match value {
        Value::Variable { name } => {
            let _ = write!(out, "${}", name.value);
        }
        Value::Int { value } | Value::Float { value } | Value::Enum { value } => {
            out.push_str(value)
        }
        Value::String { value, block: true } => print_block_string(out, value),
        Value::String { value, .. } => print_string(out, value),
        Value::Boolean { value } => {
            let _ = write!(out, "{value}");
        }
        Value::Null => out.push_str("null"),
        Value::List { values } => {
            out.push('[');
            for (i, item) in values.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                print_value(out, item);
            }
            out.push(']');
        }
        Value::Object { fields } => {
            out.push('{');
            for (i, field) in fields.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                let _ = write!(out, "{}: ", field.name.value);
                print_value(out, &field.value);
            }
            out.push('}');
        }
    }
}

fn print_string(out: &mut String, value: &str) {
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

fn print_block_string(out: &mut String, value: &str) {
    let escaped = value.replace("\"\"\"", "\\\"\"\"");
    if escaped.contains('\n') {
        let _ = write!(out, "\"\"\"\n{escaped}\n\"\"\"");
    } else {
        let _ = write!(out, "\"\"\"{escaped}\"\"\"");
    }
}

fn push_indent(out: &mut String, level: usize) {
    for _ in 0..level {
        out.push_str("  ");
    }
}
