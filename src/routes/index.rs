/// GET / - Liveness string
pub async fn page() -> &'static str {
    "RecipeHub backend is running!"
}
