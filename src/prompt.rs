//! Deterministic prompt construction.
//!
//! [`build_prompt`] renders a [`RecipeRequest`] into the single instruction
//! string sent to the model: an "expert recipe developer" persona, the six
//! request parameters stated verbatim, and an embedded JSON example showing
//! the exact output structure. Pure and total: any string content, including
//! braces, quotes, and an empty `additional_info`, renders without error.

use crate::types::RecipeRequest;

/// Render the generation prompt for one request.
///
/// The embedded example pre-fills `cuisine`, `servings`, and
/// `calories_per_serving` from the request; the remaining numeric fields
/// carry illustrative values that serve as formatting guidance only. The
/// free-text `additional_info` is inlined in full, untruncated.
pub fn build_prompt(request: &RecipeRequest) -> String {
    format!(
        r#"
You are an expert recipe developer. Generate a high-quality recipe in JSON format based on the following parameters:

-   Cuisine: **{cuisine}**
-   Main Ingredient: **{centerpiece}**
-   Maximum Calories per Serving (approx): **{calories}**
-   Number of Servings: **{servings}**
-   Maximum Prep Time: **{prep_time}** minutes
-   Additional Information: **{additional_info}**

The recipe should include:

1.  A title that reflects the cuisine and main ingredient.
2.  A short description of the dish.
3.  A list of ingredients with precise measurements.
4.  Step-by-step cooking instructions that are clear and concise.
5.  Nutritional information, including approximate calories per serving, protein, fats, and carbohydrates.

Ensure the output is **formatted as valid JSON**. Follow this exact structure:

```
{{
  "title": "Example Dish Name",
  "description": "A brief, enticing description of the dish.",
  "cuisine": "{cuisine}",
  "servings": {servings},
  "calories_per_serving": {calories},
  "prep_time_minutes": 20,
  "cook_time_minutes": 30,
  "ingredients": [
    {{"name": "Ingredient 1", "amount": "1 cup"}},
    {{"name": "Ingredient 2", "amount": "2 tbsp"}}
  ],
  "instructions": [
    "Step 1: Detailed cooking instruction.",
    "Step 2: Next step in preparation."
  ],
  "nutrition": {{
    "calories": {calories},
    "protein_g": 0,
    "fat_g": 0,
    "carbohydrates_g": 0
  }}
}}
```

Generate **a realistic and delicious recipe** while maintaining the requested calorie target.
"#,
        cuisine = request.cuisine,
        centerpiece = request.centerpiece,
        calories = request.calories_per_serving,
        servings = request.servings,
        prep_time = request.max_prep_minutes,
        additional_info = request.additional_info,
    )
}
