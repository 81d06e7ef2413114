use serde::Serialize;

pub const SYSTEM_INSTRUCTION: &str = "You are a helpful assistant";

const RECIPE_INSTRUCTION: &str = "Suggest a recipe using the items listed as available. \
Make sure you have a nice name for this recipe listed at the start. \
Also, include a funny version of the name of the recipe on the following line. \
Then share the recipe in a step-by-step manner. \
In the end, write a fun fact about the recipe or any of the items used in the recipe. \
Here are the items available: ";

/// Always offered to the model on top of whatever the user has.
pub const PANTRY_STAPLES: [&str; 6] = [
    "Haldi",
    "Chilly Powder",
    "Tomato Ketchup",
    "Water",
    "Garam Masala",
    "Oil",
];

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

/// System instruction followed by the user instruction.
///
/// Serializes as the `messages` array of a chat completion request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prompt {
    system: Message,
    user: Message,
}

impl Prompt {
    pub fn system(&self) -> &str {
        &self.system.content
    }

    pub fn user(&self) -> &str {
        &self.user.content
    }

    pub fn messages(&self) -> [&Message; 2] {
        [&self.system, &self.user]
    }
}

impl Serialize for Prompt {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.messages().serialize(serializer)
    }
}

/// Builds the recipe prompt around `ingredients`, which is embedded verbatim.
pub fn build_prompt(ingredients: &str) -> Prompt {
    let mut user = String::with_capacity(RECIPE_INSTRUCTION.len() + ingredients.len() + 64);
    user.push_str(RECIPE_INSTRUCTION);
    user.push_str(ingredients);
    for staple in PANTRY_STAPLES {
        user.push_str(", ");
        user.push_str(staple);
    }

    Prompt {
        system: Message {
            role: Role::System,
            content: SYSTEM_INSTRUCTION.to_string(),
        },
        user: Message {
            role: Role::User,
            content: user,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embeds_ingredients_verbatim() {
        for ingredients in ["egg, bread", "", "<b>cheese</b> & \"ham\" 'n' jam", "🍅\nrice"] {
            let prompt = build_prompt(ingredients);
            assert!(prompt.user().contains(ingredients));
            assert!(prompt
                .user()
                .ends_with(&format!(
                    "{}, Haldi, Chilly Powder, Tomato Ketchup, Water, Garam Masala, Oil",
                    ingredients
                )));
        }
    }

    #[test]
    fn test_staples_always_present() {
        for ingredients in ["", "oil, water", "potato"] {
            let prompt = build_prompt(ingredients);
            for staple in PANTRY_STAPLES {
                assert!(prompt.user().contains(staple), "missing {}", staple);
            }
        }
    }

    #[test]
    fn test_exact_user_text() {
        let prompt = build_prompt("egg, bread");
        assert_eq!(
            prompt.user(),
            "Suggest a recipe using the items listed as available. Make sure you have a nice \
             name for this recipe listed at the start. Also, include a funny version of the \
             name of the recipe on the following line. Then share the recipe in a step-by-step \
             manner. In the end, write a fun fact about the recipe or any of the items used in \
             the recipe. Here are the items available: egg, bread, Haldi, Chilly Powder, \
             Tomato Ketchup, Water, Garam Masala, Oil"
        );
        assert_eq!(prompt.system(), "You are a helpful assistant");
    }

    #[test]
    fn test_is_deterministic() {
        assert_eq!(build_prompt("jam"), build_prompt("jam"));
    }

    #[test]
    fn test_serializes_as_messages() {
        let value = serde_json::to_value(build_prompt("rice")).unwrap();
        let messages = value.as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[0]["content"], SYSTEM_INSTRUCTION);
        assert_eq!(messages[1]["role"], "user");
        assert!(messages[1]["content"].as_str().unwrap().contains("rice"));
    }
}
