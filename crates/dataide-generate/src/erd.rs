//! Mermaid `erDiagram` rendering.

use std::fmt::Write;

use dataide_model::TableSchema;

/// Renders table schemas as a Mermaid `erDiagram` block.
///
/// Each foreign key becomes a one-to-many relationship from the referenced
/// table. References to undeclared tables are still drawn; Mermaid creates
/// the missing entity.
pub fn render_mermaid_erd(tables: &[TableSchema]) -> String {
    let mut out = String::from("erDiagram\n");

    for table in tables {
        for fk in table.foreign_keys.iter().flatten() {
            let target = fk.target().map_or(fk.reference.as_str(), |(name, _)| name);
            let _ = writeln!(
                out,
                "    {} ||--o{{ {} : \"{}\"",
                identifier(target),
                identifier(&table.name),
                fk.column
            );
        }
    }

    for table in tables {
        let _ = writeln!(out, "    {} {{", identifier(&table.name));
        for column in &table.columns {
            let key = if table.is_primary_key(&column.name) {
                " PK"
            } else if table.foreign_key_for(&column.name).is_some() {
                " FK"
            } else {
                ""
            };
            let _ = writeln!(
                out,
                "      {} {}{key}",
                identifier(&column.dtype),
                identifier(&column.name)
            );
        }
        out.push_str("    }\n");
    }

    out.truncate(out.trim_end().len());
    out
}

/// Mermaid attribute types and names are single tokens.
fn identifier(raw: &str) -> String {
    let token: String = raw
        .trim()
        .chars()
        .map(|ch| if ch.is_alphanumeric() || ch == '_' || ch == '-' { ch } else { '_' })
        .collect();
    if token.is_empty() { "_".to_string() } else { token }
}
