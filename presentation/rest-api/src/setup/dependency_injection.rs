use std::sync::Arc;

use logger::TracingLogger;
use openai::{OpenAIClient, ReceiptInsightsOpenAI, RecipeGeneratorOpenAI, VisionModelOpenAI};
use persistence::receipt::repository::ReceiptRepositoryPostgres;
use storage::{ExtractionCacheFs, ImageStoreFs};

use business::application::extraction::extract::ExtractReceiptUseCaseImpl;
use business::application::receipt::create::CreateReceiptUseCaseImpl;
use business::application::receipt::delete::DeleteReceiptUseCaseImpl;
use business::application::receipt::get_all::GetAllReceiptsUseCaseImpl;
use business::application::receipt::get_by_id::GetReceiptByIdUseCaseImpl;
use business::application::receipt::get_image::GetReceiptImageUseCaseImpl;
use business::application::receipt::insights::ReceiptInsightsUseCaseImpl;
use business::application::recipe::details::RecipeDetailsUseCaseImpl;
use business::application::recipe::suggest::SuggestRecipesUseCaseImpl;

use crate::api::health::routes::HealthApi;
use crate::api::receipt::routes::ReceiptApi;
use crate::api::recipe::routes::RecipeApi;
use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub receipt_api: ReceiptApi,
    pub recipe_api: RecipeApi,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig, pool: sqlx::PgPool) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let receipt_repository = Arc::new(ReceiptRepositoryPostgres::new(pool));
        let image_store = Arc::new(ImageStoreFs::new(&config.storage.images_dir));
        let extraction_cache =
            Arc::new(ExtractionCacheFs::new(&config.storage.extraction_cache_dir));

        let llm_client = Arc::new(OpenAIClient::new(
            config.llm.api_key.clone(),
            config.llm.base_url.clone(),
            config.llm.extraction.request_timeout,
        ));
        let vision_model = Arc::new(VisionModelOpenAI::new(llm_client.clone()));
        let recipe_generator = Arc::new(RecipeGeneratorOpenAI::new(
            llm_client.clone(),
            config.llm.recipe_model.clone(),
        ));
        let insights_generator = Arc::new(ReceiptInsightsOpenAI::new(
            llm_client,
            config.llm.recipe_model.clone(),
        ));

        // Extraction pipeline, shared by every upload
        let extractor = Arc::new(ExtractReceiptUseCaseImpl::new(
            vision_model,
            extraction_cache,
            logger.clone(),
            config.llm.extraction.clone(),
        ));

        // Receipt use cases
        let create_use_case = Arc::new(CreateReceiptUseCaseImpl {
            repository: receipt_repository.clone(),
            image_store: image_store.clone(),
            extractor,
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllReceiptsUseCaseImpl {
            repository: receipt_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetReceiptByIdUseCaseImpl {
            repository: receipt_repository.clone(),
            logger: logger.clone(),
        });
        let get_image_use_case = Arc::new(GetReceiptImageUseCaseImpl {
            repository: receipt_repository.clone(),
            image_store: image_store.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteReceiptUseCaseImpl {
            repository: receipt_repository.clone(),
            image_store,
            logger: logger.clone(),
        });
        let insights_use_case = Arc::new(ReceiptInsightsUseCaseImpl {
            repository: receipt_repository.clone(),
            generator: insights_generator,
            logger: logger.clone(),
        });

        // Recipe use cases
        let suggest_use_case = Arc::new(SuggestRecipesUseCaseImpl {
            repository: receipt_repository,
            generator: recipe_generator.clone(),
            logger: logger.clone(),
        });
        let details_use_case = Arc::new(RecipeDetailsUseCaseImpl {
            generator: recipe_generator,
            logger,
        });

        Self {
            health_api: HealthApi,
            receipt_api: ReceiptApi::new(
                create_use_case,
                get_all_use_case,
                get_by_id_use_case,
                get_image_use_case,
                delete_use_case,
                insights_use_case,
            ),
            recipe_api: RecipeApi::new(suggest_use_case, details_use_case),
        }
    }
}
