use quasiql_lib::TransformRegistry;

pub fn run() {
    print!("{}", listing(&TransformRegistry::new()));
}

fn listing(registry: &TransformRegistry) -> String {
    let mut out = format!("Built-in transforms ({}):\n", registry.len());
    for name in registry.names() {
        out.push_str("  ");
        out.push_str(name);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_builtins_in_order() {
        insta::assert_snapshot!(listing(&TransformRegistry::new()), @r"
        Built-in transforms (3):
          strip-bom
          crlf-to-lf
          vue-script
        ");
    }
}
