// Résumé analysis: prompt building, LLM call, missing-skill parsing and
// learning-resource links. All LLM calls go through llm_client.

pub mod analyzer;
pub mod handlers;
pub mod parser;
pub mod prompts;
pub mod resources;
