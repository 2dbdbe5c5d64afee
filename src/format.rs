//! Human-readable rendering of a validated recipe.
//!
//! [`format_recipe`] produces the plain-text body shown in result views,
//! sent to printers, and copied to clipboards; [`export_text`] prepends the
//! title and description for file export. Values are rendered as-is: the
//! document is shape-validated only, so a field may hold a string where a
//! number was expected and still print.

use std::io::Write;
use std::path::Path;

use serde_json::Value;

use crate::types::RecipeDocument;

const RULE: &str = "==================================================";

/// Render the recipe body: time, ingredients, instructions, nutrition.
pub fn format_recipe(doc: &RecipeDocument) -> String {
    let mut text = String::new();

    text.push_str("TIME REQUIRED:\n");
    text.push_str(RULE);
    text.push('\n');
    let prep = doc.get("prep_time_minutes");
    let cook = doc.get("cook_time_minutes");
    text.push_str(&format!("Preparation: {} minutes\n", display(prep)));
    text.push_str(&format!("Cooking: {} minutes\n", display(cook)));
    if let (Some(p), Some(c)) = (prep.and_then(Value::as_f64), cook.and_then(Value::as_f64)) {
        text.push_str(&format!("Total: {} minutes\n", trim_float(p + c)));
    }
    text.push('\n');

    text.push_str("INGREDIENTS:\n");
    text.push_str(RULE);
    text.push('\n');
    if let Some(ingredients) = doc.get("ingredients").and_then(Value::as_array) {
        for ingredient in ingredients {
            text.push_str(&format!(
                "\u{2022} {} {}\n",
                display(ingredient.get("amount")),
                display(ingredient.get("name"))
            ));
        }
    }

    text.push_str("\n\nINSTRUCTIONS:\n");
    text.push_str(RULE);
    text.push('\n');
    if let Some(instructions) = doc.get("instructions").and_then(Value::as_array) {
        for (i, step) in instructions.iter().enumerate() {
            text.push_str(&format!("{}. {}\n\n", i + 1, display(Some(step))));
        }
    }

    text.push_str("NUTRITION INFORMATION:\n");
    text.push_str(RULE);
    text.push('\n');
    let nutrition = doc.get("nutrition");
    let field = |name: &str| display(nutrition.and_then(|n| n.get(name)));
    text.push_str(&format!("Calories: {} per serving\n", field("calories")));
    text.push_str(&format!("Protein: {}g\n", field("protein_g")));
    text.push_str(&format!("Fat: {}g\n", field("fat_g")));
    text.push_str(&format!("Carbohydrates: {}g\n", field("carbohydrates_g")));

    text
}

/// The full export payload: title, description, then the formatted body.
pub fn export_text(doc: &RecipeDocument) -> String {
    format!(
        "{}\n\n{}\n\n{}",
        doc.title().unwrap_or("Untitled Recipe"),
        doc.description().unwrap_or(""),
        format_recipe(doc)
    )
}

/// Write the export payload to a file.
pub fn write_export(doc: &RecipeDocument, path: impl AsRef<Path>) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    file.write_all(export_text(doc).as_bytes())
}

/// Render a JSON value for inline text: strings bare, everything else via
/// its JSON representation, absent fields as "?".
fn display(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "?".to_string(),
    }
}

fn trim_float(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_doc() -> RecipeDocument {
        RecipeDocument::new(json!({
            "title": "Miso Glazed Salmon",
            "description": "Sweet-savory salmon under the broiler.",
            "cuisine": "Japanese",
            "servings": 2,
            "calories_per_serving": 450,
            "prep_time_minutes": 10,
            "cook_time_minutes": 12,
            "ingredients": [
                {"name": "Salmon fillets", "amount": "2"},
                {"name": "White miso", "amount": "2 tbsp"}
            ],
            "instructions": ["Whisk the glaze.", "Broil the salmon."],
            "nutrition": {"calories": 450, "protein_g": 34, "fat_g": 28, "carbohydrates_g": 9}
        }))
    }

    #[test]
    fn formats_all_sections() {
        let text = format_recipe(&sample_doc());
        assert!(text.contains("TIME REQUIRED:"));
        assert!(text.contains("Preparation: 10 minutes"));
        assert!(text.contains("Cooking: 12 minutes"));
        assert!(text.contains("Total: 22 minutes"));
        assert!(text.contains("\u{2022} 2 tbsp White miso"));
        assert!(text.contains("1. Whisk the glaze."));
        assert!(text.contains("2. Broil the salmon."));
        assert!(text.contains("Calories: 450 per serving"));
        assert!(text.contains("Protein: 34g"));
    }

    #[test]
    fn export_text_leads_with_title_and_description() {
        let text = export_text(&sample_doc());
        assert!(text.starts_with("Miso Glazed Salmon\n\nSweet-savory salmon under the broiler.\n\n"));
        assert!(text.contains("INGREDIENTS:"));
    }

    #[test]
    fn tolerates_string_typed_times() {
        // Shape validation lets these through; formatting must not panic
        let doc = RecipeDocument::new(json!({
            "title": "Odd Duck",
            "description": "",
            "cuisine": "Fusion",
            "servings": "4",
            "calories_per_serving": 500,
            "prep_time_minutes": "twenty",
            "cook_time_minutes": 30,
            "ingredients": [{"name": "Duck", "amount": "1"}],
            "instructions": ["Roast it."],
            "nutrition": {"calories": 500, "protein_g": 40, "fat_g": 30, "carbohydrates_g": 5}
        }));
        let text = format_recipe(&doc);
        assert!(text.contains("Preparation: twenty minutes"));
        // No total line when a time is non-numeric
        assert!(!text.contains("Total:"));
    }

    #[test]
    fn write_export_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipe.txt");
        write_export(&sample_doc(), &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, export_text(&sample_doc()));
    }
}
