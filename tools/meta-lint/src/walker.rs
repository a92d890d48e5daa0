use crate::document::{Column, Document, Model};

/// Models in document order. A document without `models` yields nothing.
pub fn models(document: &Document) -> impl Iterator<Item = &Model> {
    document.models.iter().flatten()
}

/// Every column paired with its model: models in document order, then each
/// model's columns in document order.
pub fn columns(document: &Document) -> impl Iterator<Item = (&Model, &Column)> {
    models(document).flat_map(|model| model.columns().iter().map(move |column| (model, column)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_follow_model_then_column_order() {
        let doc = Document::from_yaml_str(
            "\
models:
  - name: orders
    columns:
      - name: id
      - name: amount
  - name: customers
  - name: payments
    columns:
      - name: method
",
        )
        .unwrap();

        let visited: Vec<(&str, &str)> = columns(&doc).map(|(m, c)| (m.name(), c.name())).collect();
        assert_eq!(
            visited,
            vec![("orders", "id"), ("orders", "amount"), ("payments", "method")]
        );
    }

    #[test]
    fn missing_models_yield_nothing() {
        let doc = Document::default();
        assert_eq!(models(&doc).count(), 0);
        assert_eq!(columns(&doc).count(), 0);
    }
}
