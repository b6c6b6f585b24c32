use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::{RecipeDetails, strip_thinking};
use crate::domain::recipe::services::RecipeGeneratorService;
use crate::domain::recipe::use_cases::details::{RecipeDetailsParams, RecipeDetailsUseCase};

pub struct RecipeDetailsUseCaseImpl {
    pub generator: Arc<dyn RecipeGeneratorService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RecipeDetailsUseCase for RecipeDetailsUseCaseImpl {
    async fn execute(&self, params: RecipeDetailsParams) -> Result<RecipeDetails, RecipeError> {
        params.idea.validate()?;

        self.logger
            .info(&format!("Describing recipe: {}", params.idea.name));

        let answer = self.generator.describe(&params.idea).await?;
        let instructions = if params.show_thinking {
            answer
        } else {
            strip_thinking(&answer)
        };

        Ok(RecipeDetails {
            name: params.idea.name,
            instructions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::extraction::model::ReceiptExtraction;
    use crate::domain::recipe::model::RecipeIdea;
    use mockall::mock;

    mock! {
        pub Generator {}

        #[async_trait]
        impl RecipeGeneratorService for Generator {
            async fn suggest(&self, receipts: &[ReceiptExtraction]) -> Result<Vec<RecipeIdea>, RecipeError>;
            async fn describe(&self, idea: &RecipeIdea) -> Result<String, RecipeError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    const ANSWER: &str = "<think>\nEggs and cheese, easy.\n</think>\nCheese omelette\n1. Whisk eggs.";

    fn omelette() -> RecipeIdea {
        RecipeIdea {
            name: "Cheese omelette".to_string(),
            ingredients: vec!["Eggs".to_string(), "Cheese".to_string()],
        }
    }

    fn generator() -> MockGenerator {
        let mut generator = MockGenerator::new();
        generator
            .expect_describe()
            .withf(|idea| idea.name == "Cheese omelette")
            .returning(|_| Ok(ANSWER.to_string()));
        generator
    }

    #[tokio::test]
    async fn should_hide_thinking_by_default() {
        let use_case = RecipeDetailsUseCaseImpl {
            generator: Arc::new(generator()),
            logger: mock_logger(),
        };

        let details = use_case
            .execute(RecipeDetailsParams {
                idea: omelette(),
                show_thinking: false,
            })
            .await
            .unwrap();

        assert_eq!(details.name, "Cheese omelette");
        assert_eq!(details.instructions, "Cheese omelette\n1. Whisk eggs.\n");
    }

    #[tokio::test]
    async fn should_keep_thinking_when_requested() {
        let use_case = RecipeDetailsUseCaseImpl {
            generator: Arc::new(generator()),
            logger: mock_logger(),
        };

        let details = use_case
            .execute(RecipeDetailsParams {
                idea: omelette(),
                show_thinking: true,
            })
            .await
            .unwrap();

        assert_eq!(details.instructions, ANSWER);
    }

    #[tokio::test]
    async fn should_reject_recipe_without_name() {
        let mut generator = MockGenerator::new();
        generator.expect_describe().times(0);
        let use_case = RecipeDetailsUseCaseImpl {
            generator: Arc::new(generator),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RecipeDetailsParams {
                idea: RecipeIdea {
                    name: "  ".to_string(),
                    ingredients: vec!["Eggs".to_string()],
                },
                show_thinking: false,
            })
            .await;

        assert!(matches!(result, Err(RecipeError::InvalidRecipe)));
    }
}
