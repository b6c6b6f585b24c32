pub mod client;
pub mod errors;
pub mod insights;
mod prompt;
pub mod recipe_generator;
pub mod vision_model;

pub use client::OpenAIClient;
pub use insights::ReceiptInsightsOpenAI;
pub use recipe_generator::RecipeGeneratorOpenAI;
pub use vision_model::VisionModelOpenAI;
