// Growth report: request model, prompt, pipeline and HTTP handler.
// All generation goes through llm_client::TextGenerator; all website reads through
// scrape::ContentFetcher; lead storage through leads::LeadStore.

pub mod generator;
pub mod handlers;
pub mod models;
pub mod prompts;
