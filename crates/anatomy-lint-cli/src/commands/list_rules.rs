//! List rules command implementation.

use anyhow::Result;
use anatomy_lint_core::ComponentRules;
use std::fmt::Write;
use std::path::Path;


/// Runs the list-rules command.
pub fn run(config_path: Option<&Path>) -> Result<()> {
    let config = super::load_config(Path::new("."), config_path)?;
    let registry = super::build_registry(&config)?;

    println!("Available rule sets (in resolution order):\n");
    println!("{:<18} {:<40} Parts", "Component", "Matches");
    println!("{}", "-".repeat(80));

    for rules in registry.rules() {
        println!(
            "{:<18} {:<40} {}",
            rules.component(),
            rules.matches().join(", "),
            describe_parts(rules)
        );
    }

    println!("\nRequired parts are marked with *, nesting is shown as Parent>Part.");
    println!("\nLint a document with:");
    println!("  anatomy-lint check designs/accordion.json");
    println!("  anatomy-lint check designs/ --component Accordion --node \"1:2\"");

    Ok(())
}

fn describe_parts(rules: &ComponentRules) -> String {
    let mut out = String::new();
    for (i, (name, rule)) in rules.parts().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        if let Some(parent) = &rule.parent {
            let _ = write!(out, "{parent}>");
        }
        out.push_str(name);
        if rule.required {
            out.push('*');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use anatomy_lint_core::PartRule;

    #[test]
    fn parts_show_nesting_and_required() {
        let rules = ComponentRules::new(
            "Tabs",
            vec!["Tabs".into()],
            vec![
                ("List".into(), PartRule::required()),
                ("Tab".into(), PartRule::required().under("List")),
                ("Indicator".into(), PartRule::optional().under("List")),
            ],
            vec![],
        )
        .unwrap();
        assert_eq!(describe_parts(&rules), "List*, List>Tab*, List>Indicator");
    }
}
