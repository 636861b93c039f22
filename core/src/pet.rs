//! Character Appearance
//!
//! Head and body frames, and the text they compose into.

/// Which head frame is showing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Expression {
    /// Eyes open
    #[default]
    Neutral,
    /// Eyes closed
    Blink,
    /// Reaction face (encouragement, gift)
    Happy,
}

/// The character's current look
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PetState {
    name: String,
    neutral_head: String,
    blink_head: String,
    happy_head: String,
    body: String,
    expression: Expression,
}

impl PetState {
    /// Create a pet with a neutral expression
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        neutral_head: impl Into<String>,
        blink_head: impl Into<String>,
        happy_head: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            neutral_head: neutral_head.into(),
            blink_head: blink_head.into(),
            happy_head: happy_head.into(),
            body: body.into(),
            expression: Expression::Neutral,
        }
    }

    /// Display name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current expression
    #[must_use]
    pub fn expression(&self) -> Expression {
        self.expression
    }

    /// Change expression
    pub fn set_expression(&mut self, expression: Expression) {
        self.expression = expression;
    }

    /// Change outfit
    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }

    /// Head frame for `expression`
    #[must_use]
    pub fn head(&self, expression: Expression) -> &str {
        match expression {
            Expression::Neutral => &self.neutral_head,
            Expression::Blink => &self.blink_head,
            Expression::Happy => &self.happy_head,
        }
    }

    /// Character text for the current expression and body
    #[must_use]
    pub fn compose(&self) -> String {
        self.compose_with(self.expression)
    }

    /// Character text for `expression` over the current body
    #[must_use]
    pub fn compose_with(&self, expression: Expression) -> String {
        format!("{}\n{}", self.head(expression), self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_reads_current_body() {
        let mut pet = PetState::new("Waifu", "o o", "- -", "^ ^", "hoodie");
        assert_eq!(pet.compose(), "o o\nhoodie");

        pet.set_body("seifuku");
        assert_eq!(pet.compose_with(Expression::Blink), "- -\nseifuku");
    }
}
