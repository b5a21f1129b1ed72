//! Deterministic synthetic dataset.
//!
//! A small UK direct-to-consumer shop: 20 customers and 40 orders. Every
//! random choice comes from a [`StdRng`] seeded by the caller, so the same
//! seed always yields the same payload.

use dataide_model::{
    CellValue, ColumnMeta, DatasetPayload, ForeignKey, Row, SampleTables, TableSchema,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::erd::render_mermaid_erd;
use crate::error::Result;
use crate::supplier::DatasetSupplier;

/// Seed used when none is configured.
pub const DEFAULT_SEED: u64 = 42;

const CUSTOMER_COUNT: usize = 20;
const ORDER_COUNT: usize = 40;

pub const SYNTHETIC_CAVEAT: &str =
    "Synthetic sample for plumbing. Supply a generated payload file for real data.";

/// Supplier that always succeeds with the synthetic dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntheticSupplier {
    pub seed: u64,
}

impl SyntheticSupplier {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl Default for SyntheticSupplier {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl DatasetSupplier for SyntheticSupplier {
    fn name(&self) -> &str {
        "synthetic"
    }

    fn supply(&self, prompt: &str) -> Result<DatasetPayload> {
        Ok(synthetic_payload(prompt, self.seed))
    }
}

/// Builds the synthetic payload.
///
/// Profiling and chart suggestions are left empty; `generate_payload`
/// fills them.
pub fn synthetic_payload(prompt: &str, seed: u64) -> DatasetPayload {
    let mut rng = StdRng::seed_from_u64(seed);
    let customers = customer_rows(&mut rng);
    let orders = order_rows(&mut rng, &customers);
    let tables = synthetic_schemas();

    let mut sample_rows = SampleTables::new();
    sample_rows.insert("customers".to_string(), customers);
    sample_rows.insert("orders".to_string(), orders);

    debug!(seed, "built synthetic payload");
    DatasetPayload {
        dataset_description: format!(
            "Synthetic dataset for: {prompt}. UK D2C example with customers and orders."
        ),
        mermaid_erd: render_mermaid_erd(&tables),
        tables,
        sample_rows,
        profiling_summary: Default::default(),
        suggested_charts: Vec::new(),
        caveats: Some(vec![SYNTHETIC_CAVEAT.to_string()]),
    }
}

fn random_id(rng: &mut StdRng, prefix: char) -> String {
    let mut id = String::with_capacity(9);
    id.push(prefix);
    for _ in 0..8 {
        id.push(char::from(b'0' + rng.gen_range(0..10u8)));
    }
    id
}

fn customer_rows(rng: &mut StdRng) -> Vec<Row> {
    (0..CUSTOMER_COUNT)
        .map(|i| {
            Row::from([
                ("customer_id".to_string(), CellValue::Text(random_id(rng, 'C'))),
                ("email".to_string(), CellValue::from(format!("user{i}@example.com"))),
                ("country".to_string(), CellValue::from("GB")),
                (
                    "signup_date".to_string(),
                    CellValue::from(format!("2024-{:02}-{:02}", i % 9 + 1, i % 27 + 1)),
                ),
            ])
        })
        .collect()
}

fn order_rows(rng: &mut StdRng, customers: &[Row]) -> Vec<Row> {
    (0..ORDER_COUNT)
        .map(|i| {
            let customer_id = customers
                .get(i % customers.len().max(1))
                .and_then(|row| row.get("customer_id"))
                .cloned()
                .unwrap_or_default();
            let amount: f64 = 5.0 + rng.gen_range(0.0..1.0) * 95.0;
            Row::from([
                ("order_id".to_string(), CellValue::Text(random_id(rng, 'O'))),
                ("customer_id".to_string(), customer_id),
                (
                    "order_date".to_string(),
                    CellValue::from(format!("2025-{:02}-1{}", i % 9 + 1, i % 9)),
                ),
                ("quantity".to_string(), CellValue::from((i % 5 + 1) as i64)),
                ("amount_gbp".to_string(), CellValue::Number((amount * 100.0).round() / 100.0)),
            ])
        })
        .collect()
}

fn synthetic_schemas() -> Vec<TableSchema> {
    vec![
        TableSchema {
            description: Some("Registered customers".to_string()),
            primary_key: Some(vec!["customer_id".to_string()]),
            ..TableSchema::new(
                "customers",
                vec![
                    ColumnMeta::new("customer_id", "string")
                        .with_description("Unique customer identifier")
                        .with_nullable(false),
                    ColumnMeta::new("email", "string")
                        .with_description("Contact email")
                        .with_pii("moderate"),
                    ColumnMeta::new("country", "string").with_description("ISO country code"),
                    ColumnMeta::new("signup_date", "date").with_semantics("ISO-8601 date"),
                ],
            )
        },
        TableSchema {
            description: Some("Customer orders in GBP".to_string()),
            primary_key: Some(vec!["order_id".to_string()]),
            foreign_keys: Some(vec![ForeignKey {
                column: "customer_id".to_string(),
                reference: "customers.customer_id".to_string(),
            }]),
            ..TableSchema::new(
                "orders",
                vec![
                    ColumnMeta::new("order_id", "string").with_nullable(false),
                    ColumnMeta::new("customer_id", "string").with_nullable(false),
                    ColumnMeta::new("order_date", "date"),
                    ColumnMeta::new("quantity", "int"),
                    ColumnMeta::new("amount_gbp", "decimal").with_semantics("GBP currency"),
                ],
            )
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_payload() {
        assert_eq!(synthetic_payload("shop", 7), synthetic_payload("shop", 7));
        assert_ne!(
            synthetic_payload("shop", 7).sample_rows,
            synthetic_payload("shop", 8).sample_rows
        );
    }

    #[test]
    fn table_shapes() {
        let payload = synthetic_payload("shop", DEFAULT_SEED);
        let customers = &payload.sample_rows["customers"];
        let orders = &payload.sample_rows["orders"];
        assert_eq!(customers.len(), 20);
        assert_eq!(orders.len(), 40);
        assert_eq!(orders[21]["customer_id"], customers[1]["customer_id"]);
        assert_eq!(customers[10]["signup_date"], CellValue::from("2024-02-11"));
        assert_eq!(orders[3]["order_date"], CellValue::from("2025-04-13"));
        assert_eq!(orders[3]["quantity"], CellValue::Number(4.0));
    }

    #[test]
    fn ids_and_amounts_are_well_formed() {
        let payload = synthetic_payload("shop", DEFAULT_SEED);
        for row in &payload.sample_rows["orders"] {
            let CellValue::Text(id) = &row["order_id"] else {
                panic!("order_id should be text");
            };
            assert_eq!(id.len(), 9);
            assert!(id.starts_with('O'));
            assert!(id[1..].chars().all(|ch| ch.is_ascii_digit()));

            let CellValue::Number(amount) = &row["amount_gbp"] else {
                panic!("amount_gbp should be numeric");
            };
            assert!((5.0..=100.0).contains(amount));
            assert_eq!((amount * 100.0).round() / 100.0, *amount);
        }
    }

    #[test]
    fn erd_matches_schemas() {
        let payload = synthetic_payload("shop", DEFAULT_SEED);
        assert!(payload.mermaid_erd.starts_with("erDiagram\n"));
        assert!(payload.mermaid_erd.contains("customers ||--o{ orders"));
        assert!(payload.mermaid_erd.contains("string customer_id FK"));
        assert_eq!(payload.caveats.as_ref().map(Vec::len), Some(1));
    }
}
