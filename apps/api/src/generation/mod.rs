// Prompt generation: phrase tables, the section assembler, and the system,
// S.C.A.F.F. and feature prompt builders. Everything except `handlers` is pure.

pub mod assembler;
pub mod feature_prompt;
pub mod handlers;
pub mod phrases;
pub mod prompts;
pub mod scaff;
pub mod system_prompt;
