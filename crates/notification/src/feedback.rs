use validator::Validate;

/// A contact form submission. Never stored, only relayed.
#[derive(Debug, Clone, Validate)]
pub struct Feedback {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub message: String,
}

impl Feedback {
    pub fn subject(&self) -> String {
        format!("New Feedback from RecipeHub Contact Form: {}", self.name)
    }

    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}",
            self.name, self.email, self.message
        )
    }
}
