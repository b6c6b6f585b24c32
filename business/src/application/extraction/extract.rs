use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::extraction::cache::ExtractionCache;
use crate::domain::extraction::config::ExtractionConfig;
use crate::domain::extraction::errors::ExtractionError;
use crate::domain::extraction::image::PreparedImage;
use crate::domain::extraction::model::{ImageDigest, ReceiptExtraction};
use crate::domain::extraction::prompt::EXTRACTION_PROMPT;
use crate::domain::extraction::scanner::parse_model_output;
use crate::domain::extraction::services::VisionModelService;
use crate::domain::extraction::use_cases::extract::{ExtractReceiptParams, ExtractReceiptUseCase};
use crate::domain::logger::Logger;

use super::in_flight::InFlightDigests;

/// Receipt extraction pipeline: digest, cache lookup, then a bounded number
/// of model attempts. Concurrent calls for the same image share one run.
pub struct ExtractReceiptUseCaseImpl {
    model: Arc<dyn VisionModelService>,
    cache: Arc<dyn ExtractionCache>,
    logger: Arc<dyn Logger>,
    config: ExtractionConfig,
    in_flight: InFlightDigests,
}

impl ExtractReceiptUseCaseImpl {
    pub fn new(
        model: Arc<dyn VisionModelService>,
        cache: Arc<dyn ExtractionCache>,
        logger: Arc<dyn Logger>,
        config: ExtractionConfig,
    ) -> Self {
        Self {
            model,
            cache,
            logger,
            config,
            in_flight: InFlightDigests::default(),
        }
    }

    async fn cached(&self, digest: &ImageDigest) -> Option<ReceiptExtraction> {
        match self.cache.get(digest).await {
            Ok(hit) => hit,
            Err(err) => {
                self.logger
                    .warn(&format!("Extraction cache read failed for {}: {}", digest, err));
                None
            }
        }
    }

    async fn attempt(
        &self,
        image: &PreparedImage,
        attempt: u32,
    ) -> Result<ReceiptExtraction, ExtractionError> {
        let call = self.model.complete(
            &self.config.model_identifier,
            EXTRACTION_PROMPT,
            &image.jpeg_base64,
        );
        let response = tokio::time::timeout(self.config.request_timeout, call)
            .await
            .map_err(|_| {
                ExtractionError::RemoteCallFailed(format!(
                    "timed out after {}s",
                    self.config.request_timeout.as_secs_f32()
                ))
            })??;

        if let Err(err) = self
            .cache
            .record_raw_response(&image.digest, attempt, &response)
            .await
        {
            self.logger.debug(&format!(
                "Raw response of attempt {} for {} not kept: {}",
                attempt, image.digest, err
            ));
        }

        parse_model_output(&response)
    }

    async fn extract_uncached(
        &self,
        image: &PreparedImage,
    ) -> Result<ReceiptExtraction, ExtractionError> {
        let budget = self.config.retry_budget.max(1);

        for attempt in 1..=budget {
            match self.attempt(image, attempt).await {
                Ok(extraction) => {
                    self.logger.info(&format!(
                        "Receipt {} extracted on attempt {}/{}",
                        image.digest, attempt, budget
                    ));
                    if let Err(err) = self.cache.put(&image.digest, &extraction).await {
                        let err = ExtractionError::CacheWriteFailed(err);
                        self.logger
                            .error(&format!("{} for receipt {}", err, image.digest));
                    }
                    return Ok(extraction);
                }
                Err(err) => self.logger.warn(&format!(
                    "Extraction attempt {}/{} for {} failed: {}",
                    attempt, budget, image.digest, err
                )),
            }
        }

        Err(ExtractionError::ExtractionFailed { attempts: budget })
    }
}

#[async_trait]
impl ExtractReceiptUseCase for ExtractReceiptUseCaseImpl {
    async fn execute(
        &self,
        params: ExtractReceiptParams,
    ) -> Result<ReceiptExtraction, ExtractionError> {
        let image = PreparedImage::from_bytes(&params.image)?;

        if let Some(hit) = self.cached(&image.digest).await {
            self.logger
                .info(&format!("Receipt {} served from cache", image.digest));
            return Ok(hit);
        }

        let mut permit = self.in_flight.acquire(&image.digest).await;

        // Another caller may have finished the same image while we waited.
        if let Some(shared) = permit.finished() {
            self.logger.info(&format!(
                "Receipt {} extracted by a concurrent request",
                image.digest
            ));
            return Ok(shared.clone());
        }
        if let Some(hit) = self.cached(&image.digest).await {
            self.logger
                .info(&format!("Receipt {} served from cache", image.digest));
            return Ok(hit);
        }

        let extraction = self.extract_uncached(&image).await?;
        permit.complete(&extraction);
        Ok(extraction)
    }
}
