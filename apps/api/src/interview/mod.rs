// Interview practice: per-session question counter, prompts and handlers.
// All LLM calls go through llm_client.

pub mod handlers;
pub mod interviewer;
pub mod prompts;
pub mod session;
