// Content generation: prompt building, the upstream call, and tolerant parsing.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod builder;
pub mod generator;
pub mod handlers;
pub mod parser;
pub mod prompts;
pub mod request;
